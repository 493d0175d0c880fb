use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("cannot draw from an empty range")]
    EmptyRange,

    #[error("random source unavailable: {0}")]
    Unavailable(String),
}
