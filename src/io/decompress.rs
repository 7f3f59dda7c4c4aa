//! "Decompression": the operation that never finishes.
//!
//! A one-bit archive cannot be expanded back into its original file, so
//! [`decompress_filename`] prepares the output directory and then waits
//! forever.  Its success type is [`Infallible`]: the only way it returns is
//! with an error, before the wait begins.  The process ends when the user
//! interrupts it (Ctrl+C) or it is otherwise terminated.

use std::convert::Infallible;
use std::time::Duration;

use crate::config::{ESTIMATED_YEARS, IDLE_INTERVAL_MS};
use crate::displaylevel;
use crate::io::file_io::{create_output_dir, FileError};

/// Start extracting `src` into the directory `dst_dir`.
///
/// Creates `dst_dir`, then never returns.  `src` is not read.
pub fn decompress_filename(src: &str, dst_dir: &str) -> Result<Infallible, FileError> {
    displaylevel!(2, "Decompressing file: {}\n", src);
    displaylevel!(
        2,
        "This may take a while (about {} years); press Ctrl+C to stop\n",
        ESTIMATED_YEARS
    );

    create_output_dir(dst_dir)?;
    displaylevel!(3, "Extracting into {}\n", dst_dir);

    restore_default_termination();
    idle_forever(Duration::from_millis(IDLE_INTERVAL_MS))
}

/// Sleep in `interval` steps forever.
pub fn idle_forever(interval: Duration) -> ! {
    loop {
        std::thread::sleep(interval);
    }
}

/// Make sure SIGINT and SIGTERM terminate the process, even when the parent
/// started us with them ignored.
#[cfg(unix)]
fn restore_default_termination() {
    use nix::sys::signal::{signal, SigHandler, Signal};

    for sig in [Signal::SIGINT, Signal::SIGTERM] {
        // SAFETY: SIG_DFL installs no handler code; nothing else in this
        // process manages signal dispositions.
        if let Err(e) = unsafe { signal(sig, SigHandler::SigDfl) } {
            displaylevel!(3, "Could not reset {} disposition: {}\n", sig, e);
        }
    }
}

#[cfg(not(unix))]
fn restore_default_termination() {}
