//! Top-level error type shared across crates.

use thiserror::Error;

/// Input-validation failures for holder data.
#[derive(Debug, Error)]
pub enum GiveawayError {
    #[error("invalid wallet address: {0:?}")]
    InvalidAddress(String),

    #[error("holder {address} has no token count and no token list")]
    MissingTokenCount { address: String },

    #[error("holder {address} reports {token_count} tokens but lists {listed}")]
    TokenCountMismatch {
        address: String,
        token_count: u64,
        listed: usize,
    },

    #[error("duplicate holder address: {0}")]
    DuplicateAddress(String),
}
