// prefs.rs — Preferences consumed by the compression pipeline.
//
// `Prefs` is a plain value type built once from the parsed command line and
// passed by reference to `compress_filename`.  Setters return the value they
// stored, so callers can chain them into status output.

use crate::config::MODE_DEFAULT;

/// Volume layout requested with `-part`.
///
/// Both fields are recorded for reporting only; the partition writer always
/// emits a single volume, since a one-byte archive cannot be split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PartitionRequest {
    /// `-n N`: number of volumes.
    pub count: Option<i32>,
    /// `-b N`: volume size in bytes.
    pub size: Option<i32>,
}

impl PartitionRequest {
    /// Volume size the writer would honour if it could, defaulting to one byte.
    pub fn effective_size(&self) -> i32 {
        self.size.unwrap_or(1)
    }
}

/// All tunable parameters for compression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefs {
    /// Reduction mode number (0–3 are valid). Default: 0.
    pub mode: i32,
    /// Write through the partition stub instead of a single file. Default: none.
    pub partition: Option<PartitionRequest>,
    /// Remove the source file after successful compression. Default: false.
    pub remove_src_file: bool,
    /// Seed for destiny mode; `None` uses the thread-local RNG. Default: none.
    pub seed: Option<u64>,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            mode: MODE_DEFAULT,
            partition: None,
            remove_src_file: false,
            seed: None,
        }
    }
}

impl Prefs {
    /// Creates a new `Prefs` with all defaults applied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reduction mode number. Returns the new value.
    pub fn set_mode(&mut self, mode: i32) -> i32 {
        self.mode = mode;
        mode
    }

    /// Enables (`Some`) or disables (`None`) partitioned output.
    /// Returns true if partitioned output is now active.
    pub fn set_partition(&mut self, partition: Option<PartitionRequest>) -> bool {
        self.partition = partition;
        self.partition.is_some()
    }

    /// Enables or disables removal of the source file. Returns the new value.
    pub fn set_remove_src_file(&mut self, yes: bool) -> bool {
        self.remove_src_file = yes;
        yes
    }

    /// Sets the destiny-mode seed. Returns true if a seed is now active.
    pub fn set_seed(&mut self, seed: Option<u64>) -> bool {
        self.seed = seed;
        seed.is_some()
    }
}
