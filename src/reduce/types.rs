//! Mode selector and error type for the reduction engine.

use std::fmt;

/// Size in bytes of every reduced output.
pub const REDUCED_SIZE: usize = 1;

/// Reduction strategy, numbered the way `-mode N` numbers them on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Repeated adjacent-pair XOR (`-mode 0`, the default).
    Precise = 0,
    /// XOR everything into the first element (`-mode 1`).
    FastFront = 1,
    /// XOR everything into the last element (`-mode 2`).
    FastBack = 2,
    /// Keep one random element (`-mode 3`).
    Destiny = 3,
}

impl Mode {
    /// All modes, in numeric order.
    pub const ALL: [Mode; 4] = [Mode::Precise, Mode::FastFront, Mode::FastBack, Mode::Destiny];

    /// Short human-readable name, as printed by the help text.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Precise => "precise",
            Mode::FastFront => "fast-front",
            Mode::FastBack => "fast-back",
            Mode::Destiny => "destiny",
        }
    }

    /// `true` when the result depends on a random source.
    pub fn is_random(self) -> bool {
        matches!(self, Mode::Destiny)
    }
}

impl TryFrom<i32> for Mode {
    type Error = ReduceError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mode::Precise),
            1 => Ok(Mode::FastFront),
            2 => Ok(Mode::FastBack),
            3 => Ok(Mode::Destiny),
            other => Err(ReduceError::UnsupportedMode(other)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", *self as i32, self.name())
    }
}

/// Errors produced by the reduction engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceError {
    /// The requested mode number is not one of 0–3.
    UnsupportedMode(i32),
}

impl fmt::Display for ReduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReduceError::UnsupportedMode(m) => write!(f, "unsupported compression mode: {}", m),
        }
    }
}

impl std::error::Error for ReduceError {}
