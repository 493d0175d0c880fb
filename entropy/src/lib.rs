//! Random sources for winner selection.
//!
//! The engine never reaches for process-wide randomness. Every draw goes
//! through a [`RandomSource`] handed in by the caller, so tests can substitute
//! a deterministic one.
//!
//! Two trust levels:
//! - [`RandomSource`]: any uniform source. Enough for tier quotas and bucketing.
//! - [`CryptoRandomSource`]: marker for sources backed by OS entropy. The
//!   exclusive raffle only accepts these.

pub mod error;
pub mod os;
pub mod seeded;
pub mod thread;

pub use error::EntropyError;
pub use os::OsRandom;
pub use seeded::SeededRandom;
pub use thread::ThreadRandom;

/// A source of uniform integers.
pub trait RandomSource: Send + Sync {
    /// Uniform integer in `[0, bound)`.
    ///
    /// Returns [`EntropyError::EmptyRange`] when `bound` is zero.
    fn next_below(&self, bound: u64) -> Result<u64, EntropyError>;

    /// Human-readable name of this source.
    fn name(&self) -> &str;
}

/// A [`RandomSource`] whose output cannot be predicted by participants.
pub trait CryptoRandomSource: RandomSource {}

/// Uniform index into a collection of `len` elements.
pub fn index_below(source: &dyn RandomSource, len: usize) -> Result<usize, EntropyError> {
    let idx = source.next_below(len as u64)?;
    Ok(idx as usize)
}

/// In-place Fisher–Yates shuffle of the first `amount` positions.
///
/// After the call `items[..amount]` is a uniform sample without replacement
/// from the whole slice. `amount >= items.len()` shuffles everything.
pub fn partial_shuffle<T>(
    source: &dyn RandomSource,
    items: &mut [T],
    amount: usize,
) -> Result<(), EntropyError> {
    let len = items.len();
    let amount = amount.min(len);
    for i in 0..amount {
        let j = i + index_below(source, len - i)?;
        items.swap(i, j);
    }
    Ok(())
}

/// Shuffle the whole slice.
pub fn shuffle<T>(source: &dyn RandomSource, items: &mut [T]) -> Result<(), EntropyError> {
    partial_shuffle(source, items, items.len())
}

fn check_bound(bound: u64) -> Result<(), EntropyError> {
    if bound == 0 {
        Err(EntropyError::EmptyRange)
    } else {
        Ok(())
    }
}
