//! Tier definitions and the ordered tier table.
//!
//! Tier order is part of the contract: a holder is placed in the first tier
//! whose range contains its token count, so overlapping ranges resolve to the
//! earliest declared tier. The table is therefore a list, never a map.

use serde::{Deserialize, Serialize};

/// 1 ≤ tokens < 5.
pub const BUNNIE_HOLDER: &str = "Bunnie Holder";
/// 5 ≤ tokens < 10.
pub const BUNNIE_BELIEVER: &str = "Bunnie Believer";
/// 10 ≤ tokens < 15.
pub const BIG_BUNNIE: &str = "Big Bunnie";
/// tokens ≥ 15. Every member receives a guaranteed reward.
pub const WHALE_BUNNIE: &str = "Whale Bunnie";

/// A named, inclusive token-count range. `max: None` is unbounded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    pub min: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,
}

impl Tier {
    pub fn new(name: impl Into<String>, min: u64, max: Option<u64>) -> Self {
        Self {
            name: name.into(),
            min,
            max,
        }
    }

    /// Whether `token_count` falls inside `[min, max]`.
    ///
    /// A tier with `min > max` matches nothing.
    pub fn contains(&self, token_count: u64) -> bool {
        token_count >= self.min && self.max.map_or(true, |max| token_count <= max)
    }
}

/// Ordered list of tiers, evaluated first-match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierTable(Vec<Tier>);

impl TierTable {
    pub fn new(tiers: Vec<Tier>) -> Self {
        Self(tiers)
    }

    /// The four holder tiers of the giveaway.
    pub fn bunnie_defaults() -> Self {
        Self(vec![
            Tier::new(BUNNIE_HOLDER, 1, Some(4)),
            Tier::new(BUNNIE_BELIEVER, 5, Some(9)),
            Tier::new(BIG_BUNNIE, 10, Some(14)),
            Tier::new(WHALE_BUNNIE, 15, None),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tier> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tier names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|t| t.name.as_str()).collect()
    }

    /// Look up a tier by exact name.
    pub fn get(&self, name: &str) -> Option<&Tier> {
        self.0.iter().find(|t| t.name == name)
    }

    /// The first tier containing `token_count`, if any.
    pub fn tier_for(&self, token_count: u64) -> Option<&Tier> {
        self.0.iter().find(|t| t.contains(token_count))
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::bunnie_defaults()
    }
}

impl From<Vec<Tier>> for TierTable {
    fn from(tiers: Vec<Tier>) -> Self {
        Self::new(tiers)
    }
}
