// cli/constants.rs — Program identity, file extensions, and display infrastructure.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::{DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_MAX};

// ── String / identity constants ───────────────────────────────────────────────
pub const COMPRESSOR_NAME: &str = "ram";
pub const PROGRAM_TITLE: &str = "R.I.P. Archive Manager";
pub const TAGLINE: &str = "An extremely practical, extraordinarily powerful archiver";
pub const AUTHOR: &str = "IQ Online Studio";
pub const HOMEPAGE: &str = "github.com/iqonli/ram";
pub const LICENSE_NOTICE: &str = "Licensed under the GNU General Public License v3.0";

/// Extension given to compressed output and to partition volumes.
pub const RAW_EXTENSION: &str = ".raw";
/// Suffix appended to an extension-less input to name its extraction directory.
pub const EXTRACTED_SUFFIX: &str = "_extracted";

// ── Command-line tokens ───────────────────────────────────────────────────────
pub const CMD_COMPRESS: &str = "-en";
pub const CMD_DECOMPRESS: &str = "-de";
pub const OPT_MODE: &str = "-mode";
pub const OPT_PART: &str = "-part";
pub const OPT_PART_COUNT: &str = "-n";
pub const OPT_PART_SIZE: &str = "-b";
pub const OPT_AUTODEL: &str = "-autodel";
pub const OPT_TO: &str = "-to";

// ── Environment variables ─────────────────────────────────────────────────────
pub const ENV_DISPLAY_LEVEL: &str = "RAM_DISPLAY_LEVEL";
pub const ENV_SEED: &str = "RAM_SEED";

// ── Display level global ──────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal; 3 = extra detail; 4 = verbose
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level, clamped to the highest meaningful level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level.min(DISPLAY_LEVEL_MAX), Ordering::Relaxed);
}

// ── Display macros ────────────────────────────────────────────────────────────

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
