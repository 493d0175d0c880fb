//! Nullable infrastructure for deterministic testing.
//!
//! External nondeterminism (here: randomness) sits behind a trait. This crate
//! provides test-friendly implementations that return values the test chose
//! up front, so a draw's outcome can be asserted exactly.
//!
//! Usage: swap real sources for nullables in tests.

pub mod random;

pub use random::NullRandom;
