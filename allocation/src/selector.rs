//! Uniform winner selection without replacement.

use crate::error::AllocationError;
use giveaway_entropy::{index_below, partial_shuffle, RandomSource};
use giveaway_types::{Groups, Holder, Winners};
use std::collections::HashSet;

/// Draw `count` distinct holders uniformly at random.
///
/// When `count` covers the whole group every holder wins and no randomness is
/// consumed. Otherwise a partial Fisher–Yates shuffle picks exactly `count`
/// holders, none twice.
pub fn select_without_replacement(
    holders: &[Holder],
    count: usize,
    rng: &dyn RandomSource,
) -> Result<Vec<Holder>, AllocationError> {
    if count >= holders.len() {
        return Ok(holders.to_vec());
    }

    let mut pool: Vec<&Holder> = holders.iter().collect();
    partial_shuffle(rng, &mut pool, count)?;
    Ok(pool.into_iter().take(count).cloned().collect())
}

/// Draw the same number of winners from every group.
pub fn select_from_groups(
    groups: &Groups,
    winners_per_group: usize,
    rng: &dyn RandomSource,
) -> Result<Winners, AllocationError> {
    let mut winners = Winners::new();
    for (name, holders) in groups.iter() {
        let picked = select_without_replacement(holders, winners_per_group, rng)?;
        tracing::debug!(group = name, picked = picked.len(), "selected group winners");
        winners.insert(name, picked);
    }
    Ok(winners)
}

/// Spread `total_winners` across groups in proportion to group size.
///
/// Each group first gets `floor(total × size / population)` winners. The
/// remainder is then handed out one at a time to a randomly chosen group that
/// still has unselected members, until it is used up or every group is
/// exhausted.
pub fn select_proportionally(
    groups: &Groups,
    total_winners: usize,
    rng: &dyn RandomSource,
) -> Result<Winners, AllocationError> {
    let population = groups.total_holders();
    let mut winners = Winners::new();
    let mut remaining = total_winners;

    for (name, holders) in groups.iter() {
        let share = if population == 0 {
            0
        } else {
            (total_winners as u128 * holders.len() as u128 / population as u128) as usize
        };
        let picked = select_without_replacement(holders, share, rng)?;
        remaining = remaining.saturating_sub(picked.len());
        winners.insert(name, picked);
    }

    while remaining > 0 {
        let open: Vec<&str> = groups
            .iter()
            .filter(|(name, holders)| winners.get(name).map_or(0, |w| w.len()) < holders.len())
            .map(|(name, _)| name)
            .collect();
        if open.is_empty() {
            tracing::debug!(remaining, "every group exhausted before remainder was placed");
            break;
        }

        let name = open[index_below(rng, open.len())?];
        let holders = groups.get(name).unwrap_or(&[]);
        let chosen: HashSet<_> = winners
            .get(name)
            .map(|w| w.iter().map(|h| h.address.clone()).collect())
            .unwrap_or_default();
        let available: Vec<Holder> = holders
            .iter()
            .filter(|h| !chosen.contains(&h.address))
            .cloned()
            .collect();

        let extra = select_without_replacement(&available, 1, rng)?;
        if let Some(list) = winners.get_mut(name) {
            list.extend(extra);
        }
        remaining -= 1;
    }

    Ok(winners)
}
