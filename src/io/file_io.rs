//! File I/O primitives for the reduction pipeline.
//!
//! - [`read_file`] — loads a whole file into memory.
//! - [`write_file`] — creates or truncates a file and writes a buffer to it.
//! - [`write_partitioned_stub`] — the multi-volume writer, which only ever
//!   produces volume 1.
//! - [`delete_file`] — removes the source after compression.
//! - [`create_output_dir`] — prepares the extraction directory.
//!
//! Every failure is reported as a [`FileError`] carrying the offending path;
//! nothing here terminates the process.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::cli::constants::RAW_EXTENSION;
use crate::config::FIRST_VOLUME;
use crate::displaylevel;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// A filesystem operation failed on `path`.
#[derive(Debug)]
pub enum FileError {
    /// The input could not be opened or read.
    Open { path: String, source: io::Error },
    /// The output could not be created or written.
    Create { path: String, source: io::Error },
    /// The source file could not be removed.
    Delete { path: String, source: io::Error },
    /// The output directory could not be created.
    CreateDir { path: String, source: io::Error },
}

impl FileError {
    /// `false` for failures the caller should downgrade to a warning.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, FileError::Delete { .. })
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::Open { path, source } => write!(f, "cannot open file {}: {}", path, source),
            FileError::Create { path, source } => {
                write!(f, "cannot create file {}: {}", path, source)
            }
            FileError::Delete { path, source } => {
                write!(f, "cannot delete file {}: {}", path, source)
            }
            FileError::CreateDir { path, source } => {
                write!(f, "cannot create directory {}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Open { source, .. }
            | FileError::Create { source, .. }
            | FileError::Delete { source, .. }
            | FileError::CreateDir { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Source file
// ---------------------------------------------------------------------------

/// Reads the entire file at `path` as binary.
///
/// Directories are rejected with [`io::ErrorKind::InvalidInput`].
pub fn read_file(path: &str) -> Result<Vec<u8>, FileError> {
    let open_err = |source| FileError::Open {
        path: path.to_owned(),
        source,
    };

    if Path::new(path).is_dir() {
        return Err(open_err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "is a directory",
        )));
    }

    let mut f = File::open(path).map_err(open_err)?;
    let mut data = Vec::new();
    f.read_to_end(&mut data).map_err(open_err)?;
    displaylevel!(4, "Read {} bytes from {}\n", data.len(), path);
    Ok(data)
}

// ---------------------------------------------------------------------------
// Destination files
// ---------------------------------------------------------------------------

/// Creates (or truncates) `path` and writes `data` to it.
pub fn write_file(path: &str, data: &[u8]) -> Result<(), FileError> {
    let create_err = |source| FileError::Create {
        path: path.to_owned(),
        source,
    };

    let mut f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(create_err)?;
    f.write_all(data).map_err(create_err)?;
    f.flush().map_err(create_err)?;
    displaylevel!(4, "Wrote {} bytes to {}\n", data.len(), path);
    Ok(())
}

/// Name of volume `index` for the archive `base`.
pub fn volume_name(base: &str, index: u32) -> String {
    format!("{}.{}{}", base, index, RAW_EXTENSION)
}

/// Writes `data` as a multi-volume archive rooted at `base`.
///
/// The payload is always a single byte, so however many volumes were
/// requested it fits in the first one: exactly one file, `<base>.1.raw`, is
/// written.  Returns its path.
pub fn write_partitioned_stub(base: &str, data: &[u8]) -> Result<String, FileError> {
    let part_path = volume_name(base, FIRST_VOLUME);
    write_file(&part_path, data)?;
    Ok(part_path)
}

/// Removes the file at `path`.
pub fn delete_file(path: &str) -> Result<(), FileError> {
    fs::remove_file(path).map_err(|source| FileError::Delete {
        path: path.to_owned(),
        source,
    })
}

/// Creates the directory `path` and any missing parents.
pub fn create_output_dir(path: &str) -> Result<(), FileError> {
    fs::create_dir_all(path).map_err(|source| FileError::CreateDir {
        path: path.to_owned(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
