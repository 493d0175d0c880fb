//! Holder classification into named groups.

use crate::error::AllocationError;
use giveaway_entropy::{shuffle, RandomSource};
use giveaway_types::{Groups, Holder, TierTable};

/// Default bucket count for address and random bucketing.
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// Partition holders into tiers by token count.
///
/// Tiers are tried in table order and a holder joins only the first one that
/// contains its count. Holders matching no tier are dropped. Every tier in the
/// table appears in the result, empty or not.
pub fn classify_by_token_count(holders: &[Holder], tiers: &TierTable) -> Groups {
    let mut groups = Groups::with_names(tiers.names());
    let mut dropped = 0usize;

    for holder in holders {
        match tiers.tier_for(holder.token_count) {
            Some(tier) => {
                if let Some(members) = groups.get_mut(&tier.name) {
                    members.push(holder.clone());
                }
            }
            None => dropped += 1,
        }
    }

    tracing::debug!(
        holders = holders.len(),
        tiers = tiers.len(),
        dropped,
        "classified holders by token count"
    );
    groups
}

/// Sort by address and slice into `bucket_count` contiguous buckets.
///
/// Bucket size is `ceil(len / bucket_count)`, so trailing buckets may be
/// short or empty. Buckets are named `group_1` … `group_N`.
pub fn classify_by_address_prefix(
    holders: &[Holder],
    bucket_count: usize,
) -> Result<Groups, AllocationError> {
    let mut groups = empty_buckets(bucket_count)?;

    let mut sorted: Vec<&Holder> = holders.iter().collect();
    sorted.sort_by(|a, b| a.address.cmp(&b.address));

    let per_bucket = sorted.len().div_ceil(bucket_count).max(1);
    for (i, holder) in sorted.into_iter().enumerate() {
        if let Some(bucket) = groups.entry_at_mut(i / per_bucket) {
            bucket.push(holder.clone());
        }
    }
    Ok(groups)
}

/// Shuffle, then deal holders round-robin into `bucket_count` buckets.
pub fn classify_randomly(
    holders: &[Holder],
    bucket_count: usize,
    rng: &dyn RandomSource,
) -> Result<Groups, AllocationError> {
    let mut groups = empty_buckets(bucket_count)?;

    let mut shuffled = holders.to_vec();
    shuffle(rng, &mut shuffled)?;

    for (i, holder) in shuffled.into_iter().enumerate() {
        if let Some(bucket) = groups.entry_at_mut(i % bucket_count) {
            bucket.push(holder);
        }
    }
    Ok(groups)
}

fn empty_buckets(bucket_count: usize) -> Result<Groups, AllocationError> {
    if bucket_count == 0 {
        return Err(AllocationError::ZeroGroups);
    }
    Ok(Groups::with_names(
        (1..=bucket_count).map(|i| format!("group_{i}")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use giveaway_nullables::NullRandom;
    use giveaway_types::tier::{BIG_BUNNIE, BUNNIE_BELIEVER, BUNNIE_HOLDER, WHALE_BUNNIE};
    use giveaway_types::Tier;

    fn holder(addr: &str, count: u64) -> Holder {
        Holder::new(addr, count)
    }

    #[test]
    fn boundary_counts_land_in_expected_tiers() {
        let counts = [0, 1, 4, 5, 9, 10, 14, 15, 100];
        let holders: Vec<Holder> = counts
            .iter()
            .map(|c| holder(&format!("0x{c}"), *c))
            .collect();
        let groups = classify_by_token_count(&holders, &TierTable::default());

        let tier_of = |addr: &str| {
            groups
                .iter()
                .find(|(_, members)| members.iter().any(|h| h.address.matches(addr)))
                .map(|(name, _)| name.to_string())
        };
        assert_eq!(tier_of("0x0"), None);
        assert_eq!(tier_of("0x1").as_deref(), Some(BUNNIE_HOLDER));
        assert_eq!(tier_of("0x4").as_deref(), Some(BUNNIE_HOLDER));
        assert_eq!(tier_of("0x5").as_deref(), Some(BUNNIE_BELIEVER));
        assert_eq!(tier_of("0x9").as_deref(), Some(BUNNIE_BELIEVER));
        assert_eq!(tier_of("0x10").as_deref(), Some(BIG_BUNNIE));
        assert_eq!(tier_of("0x14").as_deref(), Some(BIG_BUNNIE));
        assert_eq!(tier_of("0x15").as_deref(), Some(WHALE_BUNNIE));
        assert_eq!(tier_of("0x100").as_deref(), Some(WHALE_BUNNIE));
    }

    #[test]
    fn empty_tiers_still_appear() {
        let groups = classify_by_token_count(&[holder("0xA", 2)], &TierTable::default());
        assert_eq!(
            groups.names(),
            vec![BUNNIE_HOLDER, BUNNIE_BELIEVER, BIG_BUNNIE, WHALE_BUNNIE]
        );
        assert!(groups.get(WHALE_BUNNIE).unwrap().is_empty());
    }

    #[test]
    fn first_declared_tier_wins_on_overlap() {
        let tiers = TierTable::new(vec![
            Tier::new("early", 1, Some(10)),
            Tier::new("late", 5, None),
        ]);
        let groups = classify_by_token_count(&[holder("0xA", 7)], &tiers);
        assert_eq!(groups.get("early").unwrap().len(), 1);
        assert!(groups.get("late").unwrap().is_empty());
    }

    #[test]
    fn classification_keeps_input_order() {
        let holders = vec![holder("0xC", 2), holder("0xA", 3), holder("0xB", 1)];
        let groups = classify_by_token_count(&holders, &TierTable::default());
        let order: Vec<&str> = groups
            .get(BUNNIE_HOLDER)
            .unwrap()
            .iter()
            .map(|h| h.address.as_str())
            .collect();
        assert_eq!(order, vec!["0xC", "0xA", "0xB"]);
    }

    #[test]
    fn address_buckets_are_sorted_and_ceil_sized() {
        let holders: Vec<Holder> = ["0xE", "0xb", "0xA", "0xd", "0xC"]
            .iter()
            .map(|a| holder(a, 1))
            .collect();
        let groups = classify_by_address_prefix(&holders, 2).unwrap();

        let bucket = |name: &str| -> Vec<String> {
            groups
                .get(name)
                .unwrap()
                .iter()
                .map(|h| h.address.normalized())
                .collect()
        };
        assert_eq!(bucket("group_1"), vec!["0xa", "0xb", "0xc"]);
        assert_eq!(bucket("group_2"), vec!["0xd", "0xe"]);
    }

    #[test]
    fn address_buckets_with_more_buckets_than_holders() {
        let holders = vec![holder("0x1", 1), holder("0x2", 1)];
        let groups = classify_by_address_prefix(&holders, 4).unwrap();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups.get("group_1").unwrap().len(), 1);
        assert_eq!(groups.get("group_2").unwrap().len(), 1);
        assert!(groups.get("group_4").unwrap().is_empty());
    }

    #[test]
    fn random_buckets_deal_round_robin() {
        let holders: Vec<Holder> = (0..7).map(|i| holder(&format!("0x{i}"), 1)).collect();
        let rng = NullRandom::new(vec![3, 1, 4, 1, 5, 9, 2, 6]);
        let groups = classify_randomly(&holders, 3, &rng).unwrap();
        let sizes: Vec<usize> = groups.iter().map(|(_, h)| h.len()).collect();
        assert_eq!(sizes, vec![3, 2, 2]);
        assert_eq!(groups.total_holders(), 7);
    }

    #[test]
    fn zero_buckets_is_rejected() {
        assert!(matches!(
            classify_by_address_prefix(&[], 0),
            Err(AllocationError::ZeroGroups)
        ));
        assert!(matches!(
            classify_randomly(&[], 0, &NullRandom::constant(0)),
            Err(AllocationError::ZeroGroups)
        ));
    }
}
