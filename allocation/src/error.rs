use giveaway_entropy::EntropyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AllocationError {
    #[error("random source error: {0}")]
    Entropy(#[from] EntropyError),

    #[error("group count must be at least 1")]
    ZeroGroups,

    #[error("raffle ticket total overflows u64")]
    TicketOverflow,
}
