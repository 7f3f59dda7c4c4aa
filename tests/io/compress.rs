// Integration tests for io/compress.rs — the single-file compression pipeline.
//
// Covers:
//   - output is one byte holding the reduced bit
//   - partitioned output lands in <dst>.1.raw whatever -n / -b say
//   - auto-delete removes the input, and a failed delete is not an error
//   - unsupported modes and missing inputs fail without writing output
//   - the ratio calculation

use std::fs;
use std::path::{Path, PathBuf};

use ram::io::compress::compress_filename;
use ram::io::file_io::FileError;
use ram::io::prefs::{PartitionRequest, Prefs};
use ram::reduce::{Mode, ReduceError};
use tempfile::TempDir;

fn setup(content: &[u8]) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("TempDir::new");
    let input = dir.path().join("input.bin");
    fs::write(&input, content).expect("write input");
    let output = dir.path().join("input.raw");
    (dir, input, output)
}

fn s(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn each_mode_writes_a_bit() {
    let content: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
    for mode in Mode::ALL {
        let (_dir, input, output) = setup(&content);
        let mut prefs = Prefs::default();
        prefs.set_mode(mode as i32);
        let stats = compress_filename(s(&input), s(&output), &prefs).unwrap();
        let written = fs::read(&output).unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0] <= 1);
        assert_eq!(written[0], stats.bit);
        assert_eq!(stats.mode, mode);
    }
}

#[test]
fn known_bit_for_fast_front() {
    let (_dir, input, output) = setup(&[5, 3, 1]);
    let mut prefs = Prefs::default();
    prefs.set_mode(1);
    compress_filename(s(&input), s(&output), &prefs).unwrap();
    assert_eq!(fs::read(&output).unwrap(), vec![(5 ^ 3 ^ 1) & 1]);
}

#[test]
fn partition_parameters_do_not_change_layout() {
    for request in [
        PartitionRequest { count: None, size: None },
        PartitionRequest { count: Some(8), size: None },
        PartitionRequest { count: None, size: Some(1) },
        PartitionRequest { count: Some(0), size: Some(-5) },
    ] {
        let (dir, input, output) = setup(b"some bytes");
        let mut prefs = Prefs::default();
        prefs.set_partition(Some(request));
        let stats = compress_filename(s(&input), s(&output), &prefs).unwrap();
        let volume = dir.path().join("input.raw.1.raw");
        assert_eq!(stats.written, s(&volume));
        assert_eq!(fs::read(&volume).unwrap().len(), 1);
        assert!(!output.exists());
    }
}

#[test]
fn autodelete_removes_input() {
    let (_dir, input, output) = setup(b"delete me");
    let mut prefs = Prefs::default();
    prefs.set_remove_src_file(true);
    let stats = compress_filename(s(&input), s(&output), &prefs).unwrap();
    assert!(stats.source_removed);
    assert!(!input.exists());
}

#[test]
fn keeps_input_by_default() {
    let (_dir, input, output) = setup(b"keep me");
    let stats = compress_filename(s(&input), s(&output), &Prefs::default()).unwrap();
    assert!(!stats.source_removed);
    assert!(input.exists());
}

#[test]
fn unsupported_mode_leaves_no_output() {
    let (_dir, input, output) = setup(b"x");
    let mut prefs = Prefs::default();
    prefs.set_mode(7);
    let err = compress_filename(s(&input), s(&output), &prefs).unwrap_err();
    assert_eq!(err.downcast_ref::<ReduceError>(), Some(&ReduceError::UnsupportedMode(7)));
    assert!(!output.exists());
    assert!(input.exists());
}

#[test]
fn missing_input_fails_with_open_error() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("o.raw");
    let err = compress_filename(s(&dir.path().join("missing")), s(&output), &Prefs::default())
        .unwrap_err();
    assert!(matches!(err.downcast_ref::<FileError>(), Some(FileError::Open { .. })));
    assert!(!output.exists());
}

#[test]
fn unwritable_output_fails_with_create_error() {
    let (dir, input, _output) = setup(b"x");
    let bad = dir.path().join("no/such/dir/out.raw");
    let err = compress_filename(s(&input), s(&bad), &Prefs::default()).unwrap_err();
    assert!(matches!(err.downcast_ref::<FileError>(), Some(FileError::Create { .. })));
}

#[test]
fn ratio_for_one_kib() {
    let (_dir, input, output) = setup(&[0xAA; 1024]);
    let stats = compress_filename(s(&input), s(&output), &Prefs::default()).unwrap();
    assert_eq!(stats.ratio_percent(), 1.0 / 1024.0 * 100.0);
}
