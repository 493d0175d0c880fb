//! The holder census handed to the engine by the loader.

use crate::holder::Holder;
use serde::{Deserialize, Serialize};

/// A snapshot of every holder plus the aggregate counts reported alongside it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolderCensus {
    pub total_holders: u64,
    pub total_tokens: u64,
    pub holders: Vec<Holder>,
}

impl HolderCensus {
    /// Build a census, computing the aggregates from the holder list.
    pub fn from_holders(holders: Vec<Holder>) -> Self {
        Self {
            total_holders: holders.len() as u64,
            total_tokens: total_tokens(&holders),
            holders,
        }
    }
}

/// Sum of token counts, saturating.
pub fn total_tokens(holders: &[Holder]) -> u64 {
    holders
        .iter()
        .fold(0u64, |acc, h| acc.saturating_add(h.token_count))
}
