//! Addresses barred from every classification and draw.

use giveaway_types::{Holder, WalletAddress};
use std::collections::HashSet;

/// A set of excluded wallets, compared case-insensitively.
#[derive(Clone, Debug, Default)]
pub struct Denylist {
    addresses: HashSet<WalletAddress>,
}

impl Denylist {
    pub fn new<I, A>(addresses: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<WalletAddress>,
    {
        Self {
            addresses: addresses
                .into_iter()
                .map(Into::into)
                .filter(WalletAddress::is_valid)
                .collect(),
        }
    }

    pub fn is_denied(&self, address: &WalletAddress) -> bool {
        self.addresses.contains(address)
    }

    /// Holders whose address is not denied, in input order.
    pub fn filter(&self, holders: &[Holder]) -> Vec<Holder> {
        let kept: Vec<Holder> = holders
            .iter()
            .filter(|h| !self.is_denied(&h.address))
            .cloned()
            .collect();
        tracing::info!(
            denied = self.addresses.len(),
            excluded = holders.len() - kept.len(),
            eligible = kept.len(),
            "applied address denylist"
        );
        kept
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Denied addresses, sorted for stable display.
    pub fn addresses(&self) -> Vec<&WalletAddress> {
        let mut list: Vec<&WalletAddress> = self.addresses.iter().collect();
        list.sort();
        list
    }
}
