//! Operation mode selection and startup defaults for the CLI.
//!
//! This module provides:
//! - [`OpMode`] — compress or decompress, picked by the first command-line token.
//! - [`select_op_mode`] — maps that token (`-en` / `-de`) to an [`OpMode`].
//! - [`init_display_level`] / [`init_seed`] — read per-process defaults from
//!   environment variables.

use crate::cli::constants::{
    display_level, CMD_COMPRESS, CMD_DECOMPRESS, ENV_DISPLAY_LEVEL, ENV_SEED,
};
use crate::config::{DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_MAX};

/// What the CLI should do with its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    /// Reduce the input to a single bit.
    Compress,
    /// Wait forever for the bit to turn back into a file.
    Decompress,
}

/// Map the first command-line token to an operation mode.
///
/// Returns `None` for anything other than `-en` or `-de`.
pub fn select_op_mode(token: &str) -> Option<OpMode> {
    match token {
        CMD_COMPRESS => Some(OpMode::Compress),
        CMD_DECOMPRESS => Some(OpMode::Decompress),
        _ => None,
    }
}

/// Read the notification level from the `RAM_DISPLAY_LEVEL` environment variable.
pub fn init_display_level() -> u32 {
    init_display_level_from(std::env::var(ENV_DISPLAY_LEVEL).ok().as_deref())
}

/// Testable core of [`init_display_level`]: parse an optional `RAM_DISPLAY_LEVEL` value.
///
/// Values above the highest level are clamped.  Anything that is not an
/// unsigned decimal number is ignored with a warning and the default (2) is used.
pub fn init_display_level_from(env_val: Option<&str>) -> u32 {
    if let Some(env) = env_val {
        match env.trim().parse::<u32>() {
            Ok(val) => return val.min(DISPLAY_LEVEL_MAX),
            Err(_) => {
                if display_level() >= 2 {
                    eprintln!(
                        "Ignore environment variable setting {}={}: not a valid unsigned value ",
                        ENV_DISPLAY_LEVEL, env
                    );
                }
            }
        }
    }
    DISPLAY_LEVEL_DEFAULT
}

/// Read the destiny-mode seed from the `RAM_SEED` environment variable.
pub fn init_seed() -> Option<u64> {
    init_seed_from(std::env::var(ENV_SEED).ok().as_deref())
}

/// Testable core of [`init_seed`]: parse an optional `RAM_SEED` value.
///
/// Returns `None` (unseeded) when the variable is unset or not a `u64`.
pub fn init_seed_from(env_val: Option<&str>) -> Option<u64> {
    let env = env_val?;
    match env.trim().parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(_) => {
            if display_level() >= 2 {
                eprintln!(
                    "Ignore environment variable setting {}={}: not a valid unsigned value ",
                    ENV_SEED, env
                );
            }
            None
        }
    }
}
