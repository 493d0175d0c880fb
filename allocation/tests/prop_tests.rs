use proptest::prelude::*;
use std::collections::HashSet;

use giveaway_allocation::{
    classify_by_address_prefix, classify_by_token_count, draw_weighted_winner,
    select_proportionally, select_without_replacement,
};
use giveaway_entropy::SeededRandom;
use giveaway_nullables::NullRandom;
use giveaway_types::{Groups, Holder, TicketPolicy, TierTable};

fn census(counts: &[u64]) -> Vec<Holder> {
    counts
        .iter()
        .enumerate()
        .map(|(i, c)| Holder::new(format!("0x{i:04x}"), *c))
        .collect()
}

proptest! {
    /// Every holder with a positive count lands in exactly one tier.
    #[test]
    fn tier_classification_partitions_holders(counts in prop::collection::vec(0u64..40, 0..60)) {
        let holders = census(&counts);
        let groups = classify_by_token_count(&holders, &TierTable::default());

        let positive = counts.iter().filter(|c| **c > 0).count();
        prop_assert_eq!(groups.total_holders(), positive);

        let mut seen = HashSet::new();
        for (_, members) in groups.iter() {
            for holder in members {
                prop_assert!(seen.insert(holder.address.clone()));
            }
        }
    }

    /// Selection returns min(count, len) distinct members of the input.
    #[test]
    fn selection_is_without_replacement(
        len in 0usize..40,
        count in 0usize..50,
        seed in any::<u64>(),
    ) {
        let holders = census(&vec![1; len]);
        let picked = select_without_replacement(&holders, count, &SeededRandom::new(seed)).unwrap();

        prop_assert_eq!(picked.len(), count.min(len));
        let distinct: HashSet<_> = picked.iter().map(|h| h.address.clone()).collect();
        prop_assert_eq!(distinct.len(), picked.len());
        prop_assert!(picked.iter().all(|h| holders.contains(h)));
    }

    /// Address buckets hold every holder once, whatever the bucket count.
    #[test]
    fn address_buckets_cover_everyone(len in 0usize..80, buckets in 1usize..15) {
        let holders = census(&vec![2; len]);
        let groups = classify_by_address_prefix(&holders, buckets).unwrap();
        prop_assert_eq!(groups.len(), buckets);
        prop_assert_eq!(groups.total_holders(), len);
    }

    /// Proportional selection never exceeds the request or the population.
    #[test]
    fn proportional_total_is_bounded(
        sizes in prop::collection::vec(0usize..12, 1..6),
        total in 0usize..40,
        seed in any::<u64>(),
    ) {
        let mut groups = Groups::new();
        let mut offset = 0;
        for (g, size) in sizes.iter().enumerate() {
            let members = (0..*size)
                .map(|i| Holder::new(format!("0x{:04x}", offset + i), 1))
                .collect();
            offset += size;
            groups.insert(format!("group_{}", g + 1), members);
        }

        let winners = select_proportionally(&groups, total, &SeededRandom::new(seed)).unwrap();
        prop_assert_eq!(winners.total_holders(), total.min(offset));
        for (name, picked) in winners.iter() {
            prop_assert!(picked.len() <= groups.get(name).unwrap().len());
        }
    }

    /// Raffle entrants and totals ignore zero-ticket holders, and any winner
    /// holds tickets.
    #[test]
    fn raffle_counts_only_ticket_holders(
        counts in prop::collection::vec(0u64..30, 0..30),
        draw in any::<u64>(),
    ) {
        let holders = census(&counts);
        let policy = TicketPolicy::default();
        let outcome = draw_weighted_winner(&holders, &policy, &NullRandom::constant(draw)).unwrap();

        let expected_total: u64 = counts.iter().map(|c| policy.tickets_for(*c)).sum();
        prop_assert_eq!(outcome.total_tickets, expected_total);
        prop_assert_eq!(outcome.entrants, counts.iter().filter(|c| **c > 0).count());
        match outcome.winner {
            Some(winner) => prop_assert!(winner.token_count > 0),
            None => prop_assert_eq!(expected_total, 0),
        }
    }
}
