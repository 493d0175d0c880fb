//! General-purpose source backed by the thread-local generator.

use crate::{check_bound, EntropyError, RandomSource};
use rand::Rng;

/// Draws from `rand::thread_rng()`.
///
/// Fast and well distributed, but not meant for prizes that must resist
/// prediction. Use [`crate::OsRandom`] for those.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_below(&self, bound: u64) -> Result<u64, EntropyError> {
        check_bound(bound)?;
        Ok(rand::thread_rng().gen_range(0..bound))
    }

    fn name(&self) -> &str {
        "thread-rng"
    }
}
