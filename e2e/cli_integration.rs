// e2e/cli_integration.rs — CLI integration tests
//
// Tests the `ram` binary as a black-box CLI tool using std::process::Command.
// Covers argument parsing, compress dispatch, default output naming, the
// partition stub, auto-delete, and exit codes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Locate the `ram` binary produced by Cargo.
fn ram_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ram"))
}

/// Run `ram` in `dir` with `args`, silencing the status chatter on stderr.
fn ram(dir: &Path, args: &[&str]) -> Output {
    Command::new(ram_bin())
        .args(args)
        .current_dir(dir)
        .env("RAM_DISPLAY_LEVEL", "1")
        .output()
        .expect("failed to run ram")
}

/// Create a TempDir containing `name` with ~4 KB of content.
fn make_temp_input(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join(name);
    let content = "Rest in peace, bytes.\n".repeat(186);
    fs::write(&input_path, content).unwrap();
    (dir, input_path)
}

fn assert_single_bit(path: &Path) {
    let data = fs::read(path).unwrap_or_else(|e| panic!("reading {}: {}", path.display(), e));
    assert_eq!(data.len(), 1, "{} must hold exactly one byte", path.display());
    assert!(data[0] <= 1, "byte must be 0 or 1, got {}", data[0]);
}

// ── 1. Help and usage errors ─────────────────────────────────────────────────

#[test]
fn test_cli_no_args_prints_usage() {
    let dir = TempDir::new().unwrap();
    let out = ram(dir.path(), &[]);
    assert!(out.status.success(), "no arguments should exit 0");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("usage"), "stdout: {stdout}");
    assert!(stdout.contains("-en"));
    assert!(stdout.contains("-de"));
}

#[test]
fn test_cli_unknown_operation_fails() {
    let dir = TempDir::new().unwrap();
    let out = ram(dir.path(), &["-zip", "file"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid mode"));
    assert!(String::from_utf8_lossy(&out.stdout).contains("usage"));
}

#[test]
fn test_cli_missing_values_fail() {
    let (dir, _input) = make_temp_input("a.bin");
    for args in [
        &["-en", "a.bin", "-mode"][..],
        &["-en", "-part", "-n"][..],
        &["-en", "-part", "-b"][..],
        &["-en", "a.bin", "-to"][..],
        &["-de", "a.raw", "-to"][..],
        &["-en"][..],
        &["-de"][..],
    ] {
        let out = ram(dir.path(), args);
        assert_eq!(out.status.code(), Some(1), "args {args:?} should exit 1");
    }
}

// ── 2. Compression ───────────────────────────────────────────────────────────

#[test]
fn test_cli_compress_default_name_replaces_extension() {
    let (dir, input) = make_temp_input("foo.bin");
    let out = ram(dir.path(), &["-en", "foo.bin"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_single_bit(&dir.path().join("foo.raw"));
    assert!(input.exists(), "input is kept without -autodel");
}

#[test]
fn test_cli_compress_default_name_appends_extension() {
    let (dir, _input) = make_temp_input("foo");
    let out = ram(dir.path(), &["-en", "foo"]);
    assert!(out.status.success());
    assert_single_bit(&dir.path().join("foo.raw"));
}

#[test]
fn test_cli_compress_explicit_output() {
    let (dir, _input) = make_temp_input("doc.txt");
    let out = ram(dir.path(), &["-en", "-mode", "2", "doc.txt", "-to", "tomb.raw"]);
    assert!(out.status.success());
    assert_single_bit(&dir.path().join("tomb.raw"));
    assert!(!dir.path().join("doc.raw").exists());
}

#[test]
fn test_cli_every_mode_succeeds() {
    for mode in ["0", "1", "2", "3"] {
        let (dir, _input) = make_temp_input("in.dat");
        let out = ram(dir.path(), &["-en", "-mode", mode, "in.dat"]);
        assert!(out.status.success(), "mode {mode} should succeed");
        assert_single_bit(&dir.path().join("in.raw"));
    }
}

#[test]
fn test_cli_fast_front_known_bit() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("x.bin"), [0x03u8, 0x05, 0x06]).unwrap();
    let out = ram(dir.path(), &["-en", "-mode", "1", "x.bin"]);
    assert!(out.status.success());
    // 3 ^ 5 ^ 6 == 0
    assert_eq!(fs::read(dir.path().join("x.raw")).unwrap(), vec![0]);
}

#[test]
fn test_cli_unsupported_mode_writes_nothing() {
    let (dir, input) = make_temp_input("keep.bin");
    let out = ram(dir.path(), &["-en", "-mode", "7", "-autodel", "keep.bin"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("keep.raw").exists());
    assert!(input.exists(), "input must survive a failed compression");
}

#[test]
fn test_cli_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let out = ram(dir.path(), &["-en", "ghost.bin"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("ghost.raw").exists());
}

#[test]
fn test_cli_partition_writes_first_volume_only() {
    let (dir, _input) = make_temp_input("big.iso");
    let out = ram(dir.path(), &["-en", "-part", "-n", "5", "big.iso"]);
    assert!(out.status.success());
    assert_single_bit(&dir.path().join("big.raw.1.raw"));
    assert!(!dir.path().join("big.raw").exists());
    assert!(!dir.path().join("big.raw.2.raw").exists());
}

#[test]
fn test_cli_autodel_removes_input() {
    let (dir, input) = make_temp_input("bye.txt");
    let out = ram(dir.path(), &["-en", "-autodel", "bye.txt"]);
    assert!(out.status.success());
    assert!(!input.exists());
    assert_single_bit(&dir.path().join("bye.raw"));
}

#[test]
fn test_cli_seeded_destiny_is_reproducible() {
    let (dir, _input) = make_temp_input("fate.bin");
    let mut bits = Vec::new();
    for _ in 0..3 {
        let out = Command::new(ram_bin())
            .args(["-en", "-mode", "3", "fate.bin"])
            .current_dir(dir.path())
            .env("RAM_DISPLAY_LEVEL", "0")
            .env("RAM_SEED", "1234")
            .output()
            .unwrap();
        assert!(out.status.success());
        bits.push(fs::read(dir.path().join("fate.raw")).unwrap());
    }
    assert!(bits.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_cli_ratio_is_reported() {
    let (dir, _input) = make_temp_input("r.bin");
    let out = Command::new(ram_bin())
        .args(["-en", "r.bin"])
        .current_dir(dir.path())
        .env("RAM_DISPLAY_LEVEL", "2")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Compression ratio"));
}

#[test]
fn test_cli_display_level_zero_is_silent() {
    let (dir, _input) = make_temp_input("q.bin");
    let out = Command::new(ram_bin())
        .args(["-en", "q.bin"])
        .current_dir(dir.path())
        .env("RAM_DISPLAY_LEVEL", "0")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stderr.is_empty());
}

#[test]
fn test_cli_ratio_has_six_significant_digits() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("r.bin"), vec![0x42u8; 4075]).unwrap();
    let out = Command::new(ram_bin())
        .args(["-en", "r.bin"])
        .current_dir(dir.path())
        .env("RAM_DISPLAY_LEVEL", "2")
        .output()
        .unwrap();
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Compression ratio: 0.0245399%"), "stderr: {stderr}");
}

// ── 3. Awkward inputs ────────────────────────────────────────────────────────

#[cfg(unix)]
#[test]
fn test_cli_non_utf8_argument_fails_cleanly() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    let name = OsStr::from_bytes(b"f\xff.bin");
    fs::write(dir.path().join(name), b"bytes").unwrap();
    let out = Command::new(ram_bin())
        .arg("-en")
        .arg(name)
        .current_dir(dir.path())
        .env("RAM_DISPLAY_LEVEL", "1")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1), "must not panic");
    assert!(String::from_utf8_lossy(&out.stderr).contains("not valid UTF-8"));
}

#[test]
fn test_cli_autodel_onto_itself_keeps_archive() {
    let (dir, input) = make_temp_input("foo.raw");
    let out = ram(dir.path(), &["-en", "-autodel", "foo.raw"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Warning"));
    assert_single_bit(&input);
}
