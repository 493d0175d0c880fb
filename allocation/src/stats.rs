//! Summary statistics over groups and winner sets.

use giveaway_types::{Groups, WalletAddress, Winners};
use serde::Serialize;
use std::collections::HashSet;

/// Sizes of classified groups.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStatistics {
    pub total_groups: usize,
    pub total_holders: usize,
    /// Group name and size, in group order.
    pub group_sizes: Vec<(String, usize)>,
    /// `0.0` when there are no groups.
    pub average_group_size: f64,
}

/// Counts over a winner set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerStatistics {
    pub total_groups: usize,
    pub total_winners: usize,
    pub winners_per_group: Vec<(String, usize)>,
    /// Distinct addresses across all groups, case-insensitive.
    pub unique_winner_count: usize,
}

pub fn group_statistics(groups: &Groups) -> GroupStatistics {
    let group_sizes: Vec<(String, usize)> = groups
        .iter()
        .map(|(name, holders)| (name.to_string(), holders.len()))
        .collect();
    let total_holders = groups.total_holders();
    let total_groups = groups.len();
    let average_group_size = if total_groups == 0 {
        0.0
    } else {
        total_holders as f64 / total_groups as f64
    };

    GroupStatistics {
        total_groups,
        total_holders,
        group_sizes,
        average_group_size,
    }
}

pub fn winner_statistics(winners: &Winners) -> WinnerStatistics {
    let winners_per_group: Vec<(String, usize)> = winners
        .iter()
        .map(|(name, list)| (name.to_string(), list.len()))
        .collect();
    let unique: HashSet<&WalletAddress> = winners
        .iter()
        .flat_map(|(_, list)| list.iter().map(|h| &h.address))
        .collect();

    WinnerStatistics {
        total_groups: winners.len(),
        total_winners: winners.total_holders(),
        winners_per_group,
        unique_winner_count: unique.len(),
    }
}
