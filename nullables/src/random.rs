//! Nullable random: deterministic draws.

use giveaway_entropy::{CryptoRandomSource, EntropyError, RandomSource};
use std::sync::Mutex;

/// A deterministic random source for testing.
///
/// Returns pre-configured values in order, cycling when exhausted. Each value
/// is reduced modulo the requested bound, so `NullRandom::new(vec![5])`
/// answers `5` for any bound above five.
pub struct NullRandom {
    outputs: Vec<u64>,
    index: Mutex<usize>,
}

impl NullRandom {
    /// Create with a sequence of deterministic values.
    pub fn new(outputs: Vec<u64>) -> Self {
        Self {
            outputs,
            index: Mutex::new(0),
        }
    }

    /// Create with a single value that will be returned for every call.
    pub fn constant(value: u64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.index.lock().map(|idx| *idx).unwrap_or(0)
    }
}

impl RandomSource for NullRandom {
    fn next_below(&self, bound: u64) -> Result<u64, EntropyError> {
        if bound == 0 {
            return Err(EntropyError::EmptyRange);
        }
        if self.outputs.is_empty() {
            return Err(EntropyError::Unavailable("no values configured".into()));
        }
        let mut idx = self
            .index
            .lock()
            .map_err(|_| EntropyError::Unavailable("null random lock poisoned".into()))?;
        let current = self.outputs[*idx % self.outputs.len()];
        *idx += 1;
        Ok(current % bound)
    }

    fn name(&self) -> &str {
        "null-random"
    }
}

// Test double: stands in for OS entropy wherever a raffle is exercised.
impl CryptoRandomSource for NullRandom {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_values_in_order_and_cycles() {
        let rng = NullRandom::new(vec![1, 2, 3]);
        let got: Vec<u64> = (0..5).map(|_| rng.next_below(10).unwrap()).collect();
        assert_eq!(got, vec![1, 2, 3, 1, 2]);
        assert_eq!(rng.draws(), 5);
    }

    #[test]
    fn values_are_reduced_modulo_bound() {
        let rng = NullRandom::constant(83);
        assert_eq!(rng.next_below(82).unwrap(), 1);
    }

    #[test]
    fn empty_configuration_is_unavailable() {
        let rng = NullRandom::new(Vec::new());
        assert!(matches!(
            rng.next_below(3),
            Err(EntropyError::Unavailable(_))
        ));
    }
}
