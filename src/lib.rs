// ram — R.I.P. Archive Manager

pub mod config;
pub mod reduce;
pub mod io;
pub mod cli;

// ── Version constants ─────────────────────────────────────────────────────────
pub const RAM_VERSION_STRING: &str = "1.0";

/// Returns the version string.
pub fn version_string() -> &'static str {
    RAM_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use reduce::{reduce, reduce_with, Mode, ReduceError};
pub use io::{compress_filename, decompress_filename, CompressStats, FileError, Prefs};
