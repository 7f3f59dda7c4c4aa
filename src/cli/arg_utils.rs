// arg_utils.rs — Low-level helpers shared by the argument parser.

use crate::cli::constants::{EXTRACTED_SUFFIX, RAW_EXTENSION};

/// Returns the last path component of `path`, handling both `/` and `\` separators.
pub fn last_name_from_path(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match after_slash.rfind('\\') {
        Some(pos) => &after_slash[pos + 1..],
        None => after_slash,
    }
}

/// Parses a signed 32-bit integer from the start of `s`.
///
/// Leading whitespace is skipped, one optional `+` or `-` sign is accepted,
/// and at least one decimal digit must follow.  Parsing stops at the first
/// non-digit; the unconsumed remainder is returned alongside the value, so
/// `"3abc"` yields `Some((3, "abc"))`.  Returns `None` when there are no
/// digits or the value does not fit in an `i32`.
pub fn read_i32_from_str(s: &str) -> Option<(i32, &str)> {
    let trimmed = s.trim_start();
    let bytes = trimmed.as_bytes();
    let mut i = 0usize;

    let negative = match bytes.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let digits_start = i;
    let mut magnitude: i64 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        magnitude = magnitude * 10 + (bytes[i] - b'0') as i64;
        if magnitude > i32::MAX as i64 + 1 {
            return None;
        }
        i += 1;
    }
    if i == digits_start {
        return None;
    }

    let value = if negative { -magnitude } else { magnitude };
    let value = i32::try_from(value).ok()?;
    Some((value, &trimmed[i..]))
}

/// Splits `path` into everything before the last extension of its final
/// component.  Returns `None` when that component has no extension.
///
/// A dot that starts the component (`.bashrc`) marks a hidden file, not an
/// extension.
pub fn strip_last_extension(path: &str) -> Option<&str> {
    let name = last_name_from_path(path);
    let dir_len = path.len() - name.len();
    match name.rfind('.') {
        Some(dot) if dot > 0 => Some(&path[..dir_len + dot]),
        _ => None,
    }
}

/// Output filename used by compression when `-to` is absent.
///
/// `foo.bin` → `foo.raw`; `foo` → `foo.raw`.
pub fn default_compressed_name(input: &str) -> String {
    let stem = strip_last_extension(input).unwrap_or(input);
    format!("{}{}", stem, RAW_EXTENSION)
}

/// Output directory used by decompression when `-to` is absent.
///
/// `foo.raw` → `foo`; `foo` → `foo_extracted`.
pub fn default_extraction_dir(input: &str) -> String {
    match strip_last_extension(input) {
        Some(stem) => stem.to_owned(),
        None => format!("{}{}", input, EXTRACTED_SUFFIX),
    }
}
