// config.rs — Compile-time configuration constants.
//
// Runtime overrides come from the environment (see cli::op_mode) and from the
// command line (see cli::args); these are the values used when neither says
// otherwise.

// Default reduction mode (0 = precise).
// Overridden by the -mode N command-line flag.
pub const MODE_DEFAULT: i32 = 0;

// Default notification level (2 = normal).
// Can be overridden by the RAM_DISPLAY_LEVEL environment variable.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

// Highest meaningful notification level; larger values are clamped.
pub const DISPLAY_LEVEL_MAX: u32 = 4;

// Sleep between iterations of the decompression idle loop, in milliseconds.
// Keeps the never-ending wait from pinning a CPU core.
pub const IDLE_INTERVAL_MS: u64 = 100;

// Estimated decompression time announced to the user, in years.
pub const ESTIMATED_YEARS: i64 = i32::MIN as i64 + 1;

// Partition index used for the only volume the partition writer ever produces.
pub const FIRST_VOLUME: u32 = 1;
