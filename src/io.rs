//! Public API surface for archive file operations.
//!
//! This module assembles the I/O sub-modules and re-exports the symbols
//! consumed by the CLI and library users.

pub mod compress;
pub mod decompress;
pub mod file_io;
pub mod prefs;

// ── Core type re-exports ─────────────────────────────────────────────────────
pub use compress::CompressStats;
pub use file_io::FileError;
pub use prefs::{PartitionRequest, Prefs};

// ── File primitives ───────────────────────────────────────────────────────────
pub use file_io::{create_output_dir, delete_file, read_file, write_file, write_partitioned_stub};

// ── Compression public API ───────────────────────────────────────────────────
/// Reduce a single file to one bit.
pub use compress::compress_filename;

// ── Decompression public API ─────────────────────────────────────────────────
/// Begin an extraction that never completes.
pub use decompress::{decompress_filename, idle_forever};
