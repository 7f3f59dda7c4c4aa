//! Binary entry point for the `ram` command-line tool.
//!
//! # Control flow
//!
//! 1. [`init_display_level`] reads `RAM_DISPLAY_LEVEL` and sets the global
//!    notification level.
//! 2. [`parse_args`] turns `argv` into a [`ParseOutcome`].
//! 3. [`run`] dispatches to compression or to the never-ending decompression.
//!
//! Library code only returns errors; this file is the one place that prints
//! them and picks the exit status.

use anyhow::Context;

use ram::cli::arg_utils::last_name_from_path;
use ram::cli::args::{parse_args, ParseOutcome, ParsedArgs};
use ram::cli::constants::{set_display_level, COMPRESSOR_NAME};
use ram::cli::help::{print_usage, print_welcome};
use ram::cli::op_mode::{init_display_level, init_seed, OpMode};
use ram::displaylevel;
use ram::io::{compress_filename, decompress_filename};

/// Execute the operation selected by argument parsing.
///
/// Returns only for compression; a successful decompression never returns.
fn run(args: ParsedArgs) -> anyhow::Result<()> {
    match args.op_mode {
        OpMode::Compress => {
            displaylevel!(2, "Compressing file: {}\n", args.input_filename);
            displaylevel!(2, "Compression mode: {}\n\n", args.mode);
            if args.output_defaulted {
                displaylevel!(3, "Compressed filename will be : {}\n", args.output_filename);
            }

            let prefs = args.prefs(init_seed());
            let stats = compress_filename(&args.input_filename, &args.output_filename, &prefs)
                .with_context(|| format!("compressing {}", args.input_filename))?;

            displaylevel!(3, "Mode {} produced bit {}\n", stats.mode, stats.bit);
            // Output is always one byte, so this is a very small number (or inf).
            displaylevel!(2, "Compression ratio: {}%\n", stats.ratio_display());
            Ok(())
        }
        OpMode::Decompress => {
            match decompress_filename(&args.input_filename, &args.output_filename)
                .with_context(|| format!("decompressing {}", args.input_filename))?
            {}
        }
    }
}

fn main() {
    set_display_level(init_display_level());

    let program = std::env::args_os()
        .next()
        .map(|argv0| last_name_from_path(&argv0.to_string_lossy()).to_owned())
        .unwrap_or_else(|| COMPRESSOR_NAME.to_owned());

    print_welcome();

    let args = match parse_args() {
        Ok(ParseOutcome::Help) => {
            print_usage(&program);
            std::process::exit(libc::EXIT_SUCCESS);
        }
        Ok(ParseOutcome::Run(args)) => args,
        Err(e) => {
            displaylevel!(1, "{}: {}\n", COMPRESSOR_NAME, e);
            if e.shows_usage() {
                print_usage(&program);
            }
            std::process::exit(libc::EXIT_FAILURE);
        }
    };

    let exit_code = match run(args) {
        Ok(()) => libc::EXIT_SUCCESS,
        Err(e) => {
            displaylevel!(1, "{}: {:#}\n", COMPRESSOR_NAME, e);
            libc::EXIT_FAILURE
        }
    };
    std::process::exit(exit_code);
}
