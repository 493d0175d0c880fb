//! Shared utilities for the holder giveaway.

pub mod logging;

pub use logging::{init_logging, LogFormat, LoggingError};
