//! A single wallet's position in the collection.

use crate::address::WalletAddress;
use serde::{Deserialize, Serialize};

/// One wallet's holdings.
///
/// `token_count` drives both tier placement and raffle weight. `tokens`, when
/// present, lists the owned token identifiers and has `token_count` entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holder {
    pub address: WalletAddress,
    pub token_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<String>>,
}

impl Holder {
    /// A holder known only by address and count.
    pub fn new(address: impl Into<WalletAddress>, token_count: u64) -> Self {
        Self {
            address: address.into(),
            token_count,
            tokens: None,
        }
    }

    /// A holder with its token identifiers; the count is taken from the list.
    pub fn with_tokens(address: impl Into<WalletAddress>, tokens: Vec<String>) -> Self {
        Self {
            address: address.into(),
            token_count: tokens.len() as u64,
            tokens: Some(tokens),
        }
    }

    /// Token identifiers joined with `;`, or an empty string when absent.
    pub fn joined_tokens(&self) -> String {
        self.tokens
            .as_ref()
            .map(|t| t.join(";"))
            .unwrap_or_default()
    }
}
