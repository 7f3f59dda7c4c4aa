// e2e/never_decompress.rs — the decompressor must not finish
//
// Spawns `ram -de`, gives it time to do whatever it is going to do, then
// checks it is still running and has produced nothing but an empty
// extraction directory.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

fn ram_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ram"))
}

fn spawn_decompress(dir: &TempDir, args: &[&str]) -> std::process::Child {
    Command::new(ram_bin())
        .args(args)
        .current_dir(dir.path())
        .env("RAM_DISPLAY_LEVEL", "0")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn ram -de")
}

#[test]
fn test_decompress_never_completes() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("foo.raw"), [1u8]).unwrap();

    let mut child = spawn_decompress(&dir, &["-de", "foo.raw"]);
    thread::sleep(Duration::from_millis(1000));

    let still_running = child.try_wait().unwrap().is_none();
    let out_dir = dir.path().join("foo");
    let out_dir_exists = out_dir.is_dir();
    let entries = fs::read_dir(&out_dir).map(|d| d.count()).unwrap_or(usize::MAX);

    child.kill().unwrap();
    child.wait().unwrap();

    assert!(still_running, "decompression must not exit on its own");
    assert!(out_dir_exists, "extraction directory should be created");
    assert_eq!(entries, 0, "nothing is ever extracted");
}

#[test]
fn test_decompress_explicit_target_with_missing_input() {
    let dir = TempDir::new().unwrap();

    // The input is never read, so a missing archive still waits forever.
    let mut child = spawn_decompress(&dir, &["-de", "absent.raw", "-to", "restore/here"]);
    thread::sleep(Duration::from_millis(1000));

    let still_running = child.try_wait().unwrap().is_none();
    let target_exists = dir.path().join("restore/here").is_dir();

    child.kill().unwrap();
    child.wait().unwrap();

    assert!(still_running);
    assert!(target_exists);
}

#[test]
fn test_decompress_unusable_target_fails_fast() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("blocker"), b"x").unwrap();

    let status = Command::new(ram_bin())
        .args(["-de", "a.raw", "-to", "blocker/out"])
        .current_dir(dir.path())
        .env("RAM_DISPLAY_LEVEL", "0")
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
}
