//! Command-line argument parsing for `ram`.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//!
//! The first argument selects one of two grammars:
//!
//! ```text
//! ram -en [-mode N] [-part [-n N | -b N]] [-autodel] <input> [-to <output>]
//! ram -de <input> [-to <path>]
//! ```
//!
//! Within a grammar, arguments are scanned left to right.  Any token that is
//! not a recognised flag is taken as the input path; when several are given
//! the last one wins.  No arguments at all is a request for help.

use std::ffi::OsString;
use std::fmt;

use crate::cli::arg_utils::{default_compressed_name, default_extraction_dir, read_i32_from_str};
use crate::cli::constants::{
    OPT_AUTODEL, OPT_MODE, OPT_PART, OPT_PART_COUNT, OPT_PART_SIZE, OPT_TO,
};
use crate::cli::op_mode::{select_op_mode, OpMode};
use crate::config::MODE_DEFAULT;
use crate::io::prefs::{PartitionRequest, Prefs};

// ── Errors ─────────────────────────────────────────────────────────────────────

/// Everything that can go wrong while reading the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// The first argument was neither `-en` nor `-de`.
    InvalidMode(String),
    /// A flag that takes a value was the last argument.
    MissingValue {
        flag: &'static str,
        what: &'static str,
    },
    /// A flag that takes an integer was followed by something else.
    InvalidNumber { flag: &'static str, value: String },
    /// No input path was given.
    MissingInput,
    /// An argument is not valid UTF-8; holds its lossy rendering.
    NonUtf8Argument(String),
}

impl ArgError {
    /// `true` when the usage text should follow the error message.
    pub fn shows_usage(&self) -> bool {
        matches!(self, ArgError::InvalidMode(_))
    }
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgError::InvalidMode(token) => write!(f, "invalid mode: {}", token),
            ArgError::MissingValue { flag, what } => {
                write!(f, "missing {} argument after {}", what, flag)
            }
            ArgError::InvalidNumber { flag, value } => {
                write!(f, "{}: expected an integer, got '{}'", flag, value)
            }
            ArgError::MissingInput => f.write_str("missing input file"),
            ArgError::NonUtf8Argument(lossy) => {
                write!(f, "argument is not valid UTF-8: {}", lossy)
            }
        }
    }
}

impl std::error::Error for ArgError {}

// ── Public output types ────────────────────────────────────────────────────────

/// Complete run configuration produced by the argument parser.
///
/// `input_filename` is never empty and `output_filename` is always resolved:
/// when `-to` is absent it is derived from the input name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Compress (`-en`) or decompress (`-de`).
    pub op_mode: OpMode,
    /// Reduction mode number as typed; validated when the reducer runs.
    pub mode: i32,
    /// `-part` was given.
    pub partitioned: bool,
    /// Value of `-part -n N`, if any.
    pub partition_count: Option<i32>,
    /// Value of `-part -b N`, if any.
    pub partition_size: Option<i32>,
    /// `-autodel` was given.
    pub auto_delete: bool,
    /// Input path.
    pub input_filename: String,
    /// Output file (compress) or directory (decompress).
    pub output_filename: String,
    /// `true` when `output_filename` was derived rather than given with `-to`.
    pub output_defaulted: bool,
}

impl ParsedArgs {
    /// Preferences handed to the I/O pipeline.
    pub fn prefs(&self, seed: Option<u64>) -> Prefs {
        let mut prefs = Prefs::new();
        prefs.set_mode(self.mode);
        prefs.set_remove_src_file(self.auto_delete);
        prefs.set_seed(seed);
        if self.partitioned {
            prefs.set_partition(Some(PartitionRequest {
                count: self.partition_count,
                size: self.partition_size,
            }));
        }
        prefs
    }
}

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// No arguments: print help and exit successfully.
    Help,
    /// Run the configured operation.
    Run(ParsedArgs),
}

// ── Public API ─────────────────────────────────────────────────────────────────

/// Parse `std::env::args_os()` (skipping argv[0]).
pub fn parse_args() -> Result<ParseOutcome, ArgError> {
    let argv = utf8_args(std::env::args_os().skip(1))?;
    parse_args_from(&argv)
}

/// Convert raw OS arguments to strings, rejecting the first one that is not UTF-8.
pub fn utf8_args<I>(args: I) -> Result<Vec<String>, ArgError>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|raw| ArgError::NonUtf8Argument(raw.to_string_lossy().into_owned()))
        })
        .collect()
}

/// Parse an explicit argument list (`argv[1..]`).
pub fn parse_args_from(argv: &[String]) -> Result<ParseOutcome, ArgError> {
    let Some(first) = argv.first() else {
        return Ok(ParseOutcome::Help);
    };
    let op_mode = select_op_mode(first).ok_or_else(|| ArgError::InvalidMode(first.clone()))?;
    let rest = &argv[1..];
    let parsed = match op_mode {
        OpMode::Compress => parse_compress_args(rest)?,
        OpMode::Decompress => parse_decompress_args(rest)?,
    };
    Ok(ParseOutcome::Run(parsed))
}

// ── Grammar loops ──────────────────────────────────────────────────────────────

fn parse_compress_args(argv: &[String]) -> Result<ParsedArgs, ArgError> {
    let mut mode = MODE_DEFAULT;
    let mut partitioned = false;
    let mut partition_count = None;
    let mut partition_size = None;
    let mut auto_delete = false;
    let mut input_filename = String::new();
    let mut output_filename = String::new();

    let mut arg_idx = 0usize;
    while arg_idx < argv.len() {
        match argv[arg_idx].as_str() {
            OPT_MODE => {
                mode = take_int(argv, arg_idx, OPT_MODE, "mode")?;
                arg_idx += 2;
            }
            OPT_PART => {
                partitioned = true;
                arg_idx += 1;
                // A token after -part that is neither -n nor -b is left for the main loop.
                match argv.get(arg_idx).map(String::as_str) {
                    Some(OPT_PART_COUNT) => {
                        partition_count =
                            Some(take_int(argv, arg_idx, OPT_PART_COUNT, "volume count")?);
                        arg_idx += 2;
                    }
                    Some(OPT_PART_SIZE) => {
                        partition_size =
                            Some(take_int(argv, arg_idx, OPT_PART_SIZE, "volume size")?);
                        arg_idx += 2;
                    }
                    _ => {}
                }
            }
            OPT_AUTODEL => {
                auto_delete = true;
                arg_idx += 1;
            }
            OPT_TO => {
                output_filename = take_value(argv, arg_idx, OPT_TO, "output file")?.to_owned();
                arg_idx += 2;
            }
            other => {
                input_filename = other.to_owned();
                arg_idx += 1;
            }
        }
    }

    if input_filename.is_empty() {
        return Err(ArgError::MissingInput);
    }
    let output_defaulted = output_filename.is_empty();
    if output_defaulted {
        output_filename = default_compressed_name(&input_filename);
    }

    Ok(ParsedArgs {
        op_mode: OpMode::Compress,
        mode,
        partitioned,
        partition_count,
        partition_size,
        auto_delete,
        input_filename,
        output_filename,
        output_defaulted,
    })
}

fn parse_decompress_args(argv: &[String]) -> Result<ParsedArgs, ArgError> {
    let mut input_filename = String::new();
    let mut output_filename = String::new();

    let mut arg_idx = 0usize;
    while arg_idx < argv.len() {
        match argv[arg_idx].as_str() {
            OPT_TO => {
                output_filename =
                    take_value(argv, arg_idx, OPT_TO, "output directory")?.to_owned();
                arg_idx += 2;
            }
            other => {
                input_filename = other.to_owned();
                arg_idx += 1;
            }
        }
    }

    if input_filename.is_empty() {
        return Err(ArgError::MissingInput);
    }
    let output_defaulted = output_filename.is_empty();
    if output_defaulted {
        output_filename = default_extraction_dir(&input_filename);
    }

    Ok(ParsedArgs {
        op_mode: OpMode::Decompress,
        mode: MODE_DEFAULT,
        partitioned: false,
        partition_count: None,
        partition_size: None,
        auto_delete: false,
        input_filename,
        output_filename,
        output_defaulted,
    })
}

// ── Value helpers ──────────────────────────────────────────────────────────────

/// Returns the argument following the flag at `flag_idx`.
fn take_value<'a>(
    argv: &'a [String],
    flag_idx: usize,
    flag: &'static str,
    what: &'static str,
) -> Result<&'a str, ArgError> {
    argv.get(flag_idx + 1)
        .map(String::as_str)
        .ok_or(ArgError::MissingValue { flag, what })
}

/// Returns the integer following the flag at `flag_idx`.
fn take_int(
    argv: &[String],
    flag_idx: usize,
    flag: &'static str,
    what: &'static str,
) -> Result<i32, ArgError> {
    let raw = take_value(argv, flag_idx, flag, what)?;
    read_i32_from_str(raw)
        .map(|(value, _rest)| value)
        .ok_or_else(|| ArgError::InvalidNumber {
            flag,
            value: raw.to_owned(),
        })
}
