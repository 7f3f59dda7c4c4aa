//! Command-line interface for the `ram` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings, command-line tokens, extensions, and the `DISPLAY_LEVEL` atomic with its `display*!` macros. |
//! | [`help`]      | Welcome banner and usage text. |
//! | [`arg_utils`] | Path basename, `stoi`-style integer parsing, default output naming. |
//! | [`op_mode`]   | `OpMode` enum, first-token selection, and environment-based initialisation helpers. |
//! | [`args`]      | `ParsedArgs` — the grammar loops that consume `argv` and produce the run configuration. |
//!
//! Typical call sequence: `init_display_level` → `parse_args` → dispatch to the I/O layer.

pub mod constants;
pub mod help;
pub mod arg_utils;
pub mod op_mode;
pub mod args;
