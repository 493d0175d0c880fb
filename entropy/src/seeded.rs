//! Reproducible source for dry runs.

use crate::{check_bound, EntropyError, RandomSource};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::sync::Mutex;

/// ChaCha20 stream seeded from a `u64`.
///
/// The same seed always yields the same draws, which makes tier selection
/// replayable. Anyone who knows the seed can predict the output, so this
/// source is not a [`crate::CryptoRandomSource`].
pub struct SeededRandom {
    seed: u64,
    rng: Mutex<ChaCha20Rng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_below(&self, bound: u64) -> Result<u64, EntropyError> {
        check_bound(bound)?;
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| EntropyError::Unavailable("seeded generator lock poisoned".into()))?;
        Ok(rng.gen_range(0..bound))
    }

    fn name(&self) -> &str {
        "seeded-chacha20"
    }
}
