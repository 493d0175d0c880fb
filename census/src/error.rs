use giveaway_types::GiveawayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CensusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid census: {0}")]
    Invalid(#[from] GiveawayError),
}
