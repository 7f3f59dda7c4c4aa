//! The four folds and the final normalisation step.
//!
//! Each fold maps a byte slice to a single byte; [`reduce_with`] applies the
//! selected fold and then [`normalize`]s the result.  Empty input folds to `0`
//! in every mode.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::reduce::types::{Mode, ReduceError, REDUCED_SIZE};

/// Precise mode: XOR each adjacent pair into a sequence one element shorter,
/// and repeat until a single element is left.
///
/// After `n - 1` rounds, element `i` of the input has been XORed into the
/// survivor `C(n-1, i)` times.  XOR cancels in pairs, so only elements with an
/// odd binomial coefficient matter, and by Lucas' theorem `C(n-1, i)` is odd
/// exactly when the bits of `i` are a subset of the bits of `n - 1`.  That
/// turns the quadratic fold into a single pass with the same result.
pub fn precise(data: &[u8]) -> u8 {
    let Some(last) = data.len().checked_sub(1) else {
        return 0;
    };
    data.iter()
        .enumerate()
        .filter(|&(i, _)| i & last == i)
        .fold(0u8, |acc, (_, &b)| acc ^ b)
}

/// Fast-front mode: XOR every element from index 1 onward into element 0.
pub fn fast_front(data: &[u8]) -> u8 {
    match data.split_first() {
        Some((&first, rest)) => rest.iter().fold(first, |acc, &b| acc ^ b),
        None => 0,
    }
}

/// Fast-back mode: XOR every element except the last into the last.
pub fn fast_back(data: &[u8]) -> u8 {
    match data.split_last() {
        Some((&last, rest)) => rest.iter().fold(last, |acc, &b| acc ^ b),
        None => 0,
    }
}

/// Destiny mode: one element picked uniformly at random from `data`.
pub fn destiny<R: Rng + ?Sized>(data: &[u8], rng: &mut R) -> u8 {
    data.choose(rng).copied().unwrap_or(0)
}

/// Squash a folded byte down to `0` or `1`.
#[inline]
pub fn normalize(folded: u8) -> u8 {
    folded & 1
}

/// Reduce `data` with `mode`, drawing randomness (destiny mode only) from `rng`.
pub fn reduce_with<R: Rng + ?Sized>(data: &[u8], mode: Mode, rng: &mut R) -> [u8; REDUCED_SIZE] {
    let folded = match mode {
        Mode::Precise => precise(data),
        Mode::FastFront => fast_front(data),
        Mode::FastBack => fast_back(data),
        Mode::Destiny => destiny(data, rng),
    };
    [normalize(folded)]
}

/// Reduce `data` using the numeric `mode` given on the command line.
///
/// Destiny mode draws from the thread-local RNG; use [`reduce_with`] to supply
/// a seeded source instead.
pub fn reduce(data: &[u8], mode: i32) -> Result<[u8; REDUCED_SIZE], ReduceError> {
    let mode = Mode::try_from(mode)?;
    Ok(reduce_with(data, mode, &mut rand::thread_rng()))
}
