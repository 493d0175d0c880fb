//! Per-tier reward quotas.

use crate::tier::{BIG_BUNNIE, BUNNIE_BELIEVER, BUNNIE_HOLDER};
use serde::{Deserialize, Serialize};

/// How many winners a tier may produce.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierReward {
    pub tier: String,
    pub winners: usize,
}

impl TierReward {
    pub fn new(tier: impl Into<String>, winners: usize) -> Self {
        Self {
            tier: tier.into(),
            winners,
        }
    }
}

/// Ordered reward table. Selection runs in this order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierRewards(Vec<TierReward>);

impl TierRewards {
    pub fn new(rewards: Vec<TierReward>) -> Self {
        Self(rewards)
    }

    /// Bunnie Holder = 3, Bunnie Believer = 6, Big Bunnie = 3.
    ///
    /// The whale tier is absent: its members are rewarded without a draw.
    pub fn bunnie_defaults() -> Self {
        Self(vec![
            TierReward::new(BUNNIE_HOLDER, 3),
            TierReward::new(BUNNIE_BELIEVER, 6),
            TierReward::new(BIG_BUNNIE, 3),
        ])
    }

    /// Apply caller overrides: a matching tier takes the new quota in place,
    /// an unknown tier is appended.
    pub fn with_overrides(mut self, overrides: impl IntoIterator<Item = TierReward>) -> Self {
        for reward in overrides {
            match self.0.iter_mut().find(|r| r.tier == reward.tier) {
                Some(existing) => existing.winners = reward.winners,
                None => self.0.push(reward),
            }
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &TierReward> {
        self.0.iter()
    }

    pub fn get(&self, tier: &str) -> Option<usize> {
        self.0.iter().find(|r| r.tier == tier).map(|r| r.winners)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for TierRewards {
    fn default() -> Self {
        Self::bunnie_defaults()
    }
}
