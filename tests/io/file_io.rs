// Integration tests for io/file_io.rs — whole-file read/write, the volume stub,
// deletion, and output directories.

use std::fs;
use std::path::PathBuf;

use ram::io::file_io::{
    create_output_dir, delete_file, read_file, volume_name, write_file, write_partitioned_stub,
    FileError,
};
use tempfile::TempDir;

fn tmp(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

#[test]
fn read_file_returns_all_bytes() {
    let dir = TempDir::new().unwrap();
    let path = tmp(&dir, "in.bin");
    let content: Vec<u8> = (0..=255u8).cycle().take(70_000).collect();
    fs::write(&path, &content).unwrap();
    assert_eq!(read_file(path.to_str().unwrap()).unwrap(), content);
}

#[test]
fn read_file_empty() {
    let dir = TempDir::new().unwrap();
    let path = tmp(&dir, "empty.bin");
    fs::write(&path, b"").unwrap();
    assert!(read_file(path.to_str().unwrap()).unwrap().is_empty());
}

#[test]
fn write_file_creates_single_byte() {
    let dir = TempDir::new().unwrap();
    let path = tmp(&dir, "out.raw");
    write_file(path.to_str().unwrap(), &[1]).unwrap();
    assert_eq!(fs::read(&path).unwrap(), vec![1]);
}

#[test]
fn volume_name_format() {
    assert_eq!(volume_name("foo.raw", 1), "foo.raw.1.raw");
    assert_eq!(volume_name("out", 3), "out.3.raw");
}

#[test]
fn partition_stub_ignores_everything_but_volume_one() {
    let dir = TempDir::new().unwrap();
    let base = tmp(&dir, "archive");
    let written = write_partitioned_stub(base.to_str().unwrap(), &[0]).unwrap();
    assert!(written.ends_with("archive.1.raw"));
    assert_eq!(fs::read(&written).unwrap(), vec![0]);
    assert!(!base.exists());
}

#[test]
fn partition_stub_into_missing_dir_fails() {
    let err = write_partitioned_stub("/nonexistent/dir/base", &[0]).unwrap_err();
    assert!(matches!(err, FileError::Create { .. }));
    assert!(err.to_string().contains("base.1.raw"));
}

#[test]
fn delete_file_removes() {
    let dir = TempDir::new().unwrap();
    let path = tmp(&dir, "gone.bin");
    fs::write(&path, b"x").unwrap();
    delete_file(path.to_str().unwrap()).unwrap();
    assert!(!path.exists());
}

#[test]
fn delete_failure_is_a_warning_kind() {
    let dir = TempDir::new().unwrap();
    let err = delete_file(tmp(&dir, "never-existed").to_str().unwrap()).unwrap_err();
    assert!(!err.is_fatal());
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn create_output_dir_makes_parents() {
    let dir = TempDir::new().unwrap();
    let nested = tmp(&dir, "x/y/z");
    create_output_dir(nested.to_str().unwrap()).unwrap();
    assert!(nested.is_dir());
}
