//! Single-file compression: read, reduce, write, optionally remove the source.
//!
//! [`compress_filename`] is the whole pipeline.  It resolves the reduction
//! mode before touching the filesystem, so an unsupported mode never leaves an
//! output file behind.

use std::fs;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::FIRST_VOLUME;
use crate::displaylevel;
use crate::io::file_io::{delete_file, read_file, volume_name, write_file, write_partitioned_stub};
use crate::io::prefs::Prefs;
use crate::reduce::{reduce_with, Mode, REDUCED_SIZE};

/// Outcome of a successful [`compress_filename`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressStats {
    /// Mode the input was reduced with.
    pub mode: Mode,
    /// Size of the input in bytes.
    pub bytes_in: u64,
    /// Size of the output in bytes (always 1).
    pub bytes_out: u64,
    /// The reduced byte, `0` or `1`.
    pub bit: u8,
    /// Path of the file actually written (the volume path when partitioned).
    pub written: String,
    /// `true` when the source file was requested for removal and removed.
    pub source_removed: bool,
}

impl CompressStats {
    /// Output size as a percentage of input size: `bytes_out / bytes_in * 100`.
    ///
    /// An empty input yields positive infinity.
    pub fn ratio_percent(&self) -> f64 {
        self.bytes_out as f64 / self.bytes_in as f64 * 100.0
    }

    /// [`ratio_percent`](Self::ratio_percent) rendered with six significant digits.
    pub fn ratio_display(&self) -> String {
        format_general(self.ratio_percent())
    }
}

const SIGNIFICANT_DIGITS: usize = 6;

/// Format `value` like C's `%g`: six significant digits, trailing zeros
/// dropped, scientific notation for very small or very large magnitudes.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    // The exponent must come from the rounded value: 999999.7 is 1e+06.
    let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_owned()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// `true` when `a` and `b` name the same existing file.
fn same_file(a: &str, b: &str) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Reduce `src` to one bit and store it at `dst`.
///
/// With `prefs.partition` set the bit goes to `<dst>.1.raw` instead.  When
/// `prefs.remove_src_file` is set the source is deleted afterwards; failing to
/// delete it is reported as a warning and does not fail the call.  When the
/// output replaces the source file itself, the source is left in place.
pub fn compress_filename(src: &str, dst: &str, prefs: &Prefs) -> anyhow::Result<CompressStats> {
    let mode = Mode::try_from(prefs.mode)?;
    if mode.is_random() {
        match prefs.seed {
            Some(seed) => displaylevel!(3, "Destiny seed: {}\n", seed),
            None => displaylevel!(3, "Destiny seed: none, using thread RNG\n"),
        }
    }

    let data = read_file(src)?;

    let target = match prefs.partition {
        Some(_) => volume_name(dst, FIRST_VOLUME),
        None => dst.to_owned(),
    };
    let overwrites_source = same_file(src, &target);
    if overwrites_source {
        displaylevel!(1, "Warning: output {} replaces the input file\n", target);
    }

    let reduced: [u8; REDUCED_SIZE] = match prefs.seed {
        Some(seed) => reduce_with(&data, mode, &mut StdRng::seed_from_u64(seed)),
        None => reduce_with(&data, mode, &mut rand::thread_rng()),
    };
    displaylevel!(4, "Reduced {} bytes to bit {}\n", data.len(), reduced[0]);

    let written = match prefs.partition {
        Some(request) => {
            displaylevel!(
                3,
                "Requested volumes: {:?}, volume size: {} bytes\n",
                request.count,
                request.effective_size()
            );
            let part_path = write_partitioned_stub(dst, &reduced)
                .with_context(|| format!("writing volume archive for {}", src))?;
            displaylevel!(2, "Created volume file: {}\n", part_path);
            part_path
        }
        None => {
            write_file(dst, &reduced).with_context(|| format!("writing archive for {}", src))?;
            displaylevel!(2, "Compression complete, output file: {}\n", dst);
            dst.to_owned()
        }
    };

    let mut source_removed = false;
    if prefs.remove_src_file && overwrites_source {
        displaylevel!(1, "Warning: not deleting {}, it now holds the archive\n", src);
    } else if prefs.remove_src_file {
        match delete_file(src) {
            Ok(()) => {
                displaylevel!(2, "Deleted original file: {}\n", src);
                source_removed = true;
            }
            Err(e) => {
                if e.is_fatal() {
                    return Err(e.into());
                }
                displaylevel!(1, "Warning: {}\n", e);
            }
        }
    }

    Ok(CompressStats {
        mode,
        bytes_in: data.len() as u64,
        bytes_out: reduced.len() as u64,
        bit: reduced[0],
        written,
        source_removed,
    })
}
