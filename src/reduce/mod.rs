//! The R.I.P. reduction engine.
//!
//! Every input, whatever its size, is folded down to one byte whose value is
//! either `0x00` or `0x01`.  Four folds are available, selected by [`Mode`]:
//!
//! | Mode | Name        | Fold |
//! |------|-------------|------|
//! | 0    | precise     | repeated adjacent-pair XOR until one element remains |
//! | 1    | fast-front  | XOR of every element into the first |
//! | 2    | fast-back   | XOR of every element into the last |
//! | 3    | destiny     | one uniformly random element |
//!
//! The folded byte is then masked with `1` (see [`modes::normalize`]).  The
//! operation is lossy and cannot be inverted.

pub mod modes;
pub mod types;

pub use modes::{destiny, fast_back, fast_front, normalize, precise, reduce, reduce_with};
pub use types::{Mode, ReduceError, REDUCED_SIZE};
