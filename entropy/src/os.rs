//! Cryptographically strong source backed by operating-system entropy.

use crate::{check_bound, CryptoRandomSource, EntropyError, RandomSource};
use rand::rngs::OsRng;
use rand::Rng;

/// Draws every value from the OS entropy pool via `OsRng`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_below(&self, bound: u64) -> Result<u64, EntropyError> {
        check_bound(bound)?;
        Ok(OsRng.gen_range(0..bound))
    }

    fn name(&self) -> &str {
        "os-entropy"
    }
}

impl CryptoRandomSource for OsRandom {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_stay_below_bound() {
        for _ in 0..1_000 {
            assert!(OsRandom.next_below(82).unwrap() < 82);
        }
    }

    #[test]
    fn empty_range_is_rejected() {
        assert!(matches!(
            OsRandom.next_below(0),
            Err(EntropyError::EmptyRange)
        ));
    }
}
