// Integration tests for cli/arg_utils.rs — default output naming and integer parsing.

use ram::cli::arg_utils::{
    default_compressed_name, default_extraction_dir, read_i32_from_str, strip_last_extension,
};

#[test]
fn compressed_name_replaces_extension() {
    assert_eq!(default_compressed_name("foo.bin"), "foo.raw");
    assert_eq!(default_compressed_name("photo.jpeg"), "photo.raw");
}

#[test]
fn compressed_name_appends_when_no_extension() {
    assert_eq!(default_compressed_name("foo"), "foo.raw");
}

#[test]
fn compressed_name_of_raw_file_is_unchanged() {
    assert_eq!(default_compressed_name("already.raw"), "already.raw");
}

#[test]
fn compressed_name_keeps_directory() {
    assert_eq!(default_compressed_name("/data/in/foo.bin"), "/data/in/foo.raw");
    assert_eq!(default_compressed_name("C:\\data\\foo.bin"), "C:\\data\\foo.raw");
}

#[test]
fn extraction_dir_strips_or_suffixes() {
    assert_eq!(default_extraction_dir("archive.raw"), "archive");
    assert_eq!(default_extraction_dir("archive"), "archive_extracted");
}

#[test]
fn strip_extension_only_in_last_component() {
    assert_eq!(strip_last_extension("a.d/b"), None);
    assert_eq!(strip_last_extension("a.d/b.c"), Some("a.d/b"));
}

#[test]
fn integers_parse_like_stoi() {
    assert_eq!(read_i32_from_str("12"), Some((12, "")));
    assert_eq!(read_i32_from_str(" -3x"), Some((-3, "x")));
    assert_eq!(read_i32_from_str("x3"), None);
}
