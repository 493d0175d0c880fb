//! Contest orchestration: tier quotas, guaranteed whales, exclusive raffle.

use crate::classifier::classify_by_token_count;
use crate::error::AllocationError;
use crate::raffle::{draw_weighted_winner, RaffleOutcome};
use crate::selector::select_without_replacement;
use giveaway_entropy::{CryptoRandomSource, RandomSource};
use giveaway_types::tier::WHALE_BUNNIE;
use giveaway_types::{Groups, Holder, TicketPolicy, TierRewards, TierTable};
use serde::{Deserialize, Serialize};

/// The business rules of one contest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestRules {
    /// Tier table used to classify holders.
    pub tiers: TierTable,
    /// Quota per drawn tier, in draw order.
    pub tier_rewards: TierRewards,
    /// Tier whose members are all rewarded without a draw.
    pub guaranteed_tier: String,
    /// Ticket weighting for the exclusive raffle.
    pub ticket_policy: TicketPolicy,
}

impl Default for ContestRules {
    fn default() -> Self {
        Self {
            tiers: TierTable::default(),
            tier_rewards: TierRewards::default(),
            guaranteed_tier: WHALE_BUNNIE.to_string(),
            ticket_policy: TicketPolicy::default(),
        }
    }
}

/// Winners of one drawn tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierResult {
    pub tier: String,
    pub requested_winners: usize,
    pub winners: Vec<Holder>,
}

/// Everything a contest run produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestOutcome {
    pub tier_results: Vec<TierResult>,
    pub guaranteed_tier: String,
    pub guaranteed: Vec<Holder>,
    pub exclusive: RaffleOutcome,
}

/// Runs a contest with injected randomness.
///
/// Quota draws use `selection`; the exclusive raffle uses `raffle`, which
/// must be a cryptographically strong source.
pub struct ContestEngine<'a> {
    rules: ContestRules,
    selection: &'a dyn RandomSource,
    raffle: &'a dyn CryptoRandomSource,
}

impl<'a> ContestEngine<'a> {
    pub fn new(
        rules: ContestRules,
        selection: &'a dyn RandomSource,
        raffle: &'a dyn CryptoRandomSource,
    ) -> Self {
        Self {
            rules,
            selection,
            raffle,
        }
    }

    pub fn rules(&self) -> &ContestRules {
        &self.rules
    }

    /// Classify `holders` with the configured tiers, then run the contest.
    pub fn run(&self, holders: &[Holder]) -> Result<ContestOutcome, AllocationError> {
        let groups = classify_by_token_count(holders, &self.rules.tiers);
        self.run_on_groups(&groups)
    }

    /// Run the contest over already classified groups.
    ///
    /// Each rewarded tier draws up to its quota. The guaranteed tier is taken
    /// whole and never drawn, even when the reward table lists it. The exclusive raffle runs over every holder in every group, so
    /// one holder may collect a tier prize and the exclusive prize.
    pub fn run_on_groups(&self, groups: &Groups) -> Result<ContestOutcome, AllocationError> {
        let mut tier_results = Vec::with_capacity(self.rules.tier_rewards.len());
        for reward in self.rules.tier_rewards.iter() {
            if reward.tier == self.rules.guaranteed_tier {
                tracing::warn!(
                    tier = %reward.tier,
                    quota = reward.winners,
                    "quota ignored for guaranteed tier"
                );
                continue;
            }
            let members: &[Holder] = match groups.get(&reward.tier) {
                Some(members) => members,
                None => {
                    tracing::warn!(tier = %reward.tier, "rewarded tier has no group");
                    &[]
                }
            };
            let winners = select_without_replacement(members, reward.winners, self.selection)?;
            tracing::info!(
                tier = %reward.tier,
                requested = reward.winners,
                awarded = winners.len(),
                "tier winners selected"
            );
            tier_results.push(TierResult {
                tier: reward.tier.clone(),
                requested_winners: reward.winners,
                winners,
            });
        }

        let guaranteed = groups
            .get(&self.rules.guaranteed_tier)
            .map(<[Holder]>::to_vec)
            .unwrap_or_default();
        tracing::info!(
            tier = %self.rules.guaranteed_tier,
            holders = guaranteed.len(),
            "guaranteed rewards assigned"
        );

        let everyone = groups.all_holders();
        let exclusive = draw_weighted_winner(&everyone, &self.rules.ticket_policy, self.raffle)?;

        Ok(ContestOutcome {
            tier_results,
            guaranteed_tier: self.rules.guaranteed_tier.clone(),
            guaranteed,
            exclusive,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use giveaway_nullables::NullRandom;
    use giveaway_types::tier::{BIG_BUNNIE, BUNNIE_BELIEVER, BUNNIE_HOLDER};
    use giveaway_types::TierReward;

    fn scenario() -> Vec<Holder> {
        vec![
            Holder::new("A", 3),
            Holder::new("B", 7),
            Holder::new("C", 12),
            Holder::new("D", 20),
        ]
    }

    #[test]
    fn single_holder_tiers_all_win() {
        let rng = NullRandom::constant(0);
        let engine = ContestEngine::new(ContestRules::default(), &rng, &rng);
        let outcome = engine.run(&scenario()).unwrap();

        let winners_of = |tier: &str| -> Vec<String> {
            outcome
                .tier_results
                .iter()
                .find(|r| r.tier == tier)
                .unwrap()
                .winners
                .iter()
                .map(|h| h.address.to_string())
                .collect()
        };
        assert_eq!(winners_of(BUNNIE_HOLDER), vec!["A"]);
        assert_eq!(winners_of(BUNNIE_BELIEVER), vec!["B"]);
        assert_eq!(winners_of(BIG_BUNNIE), vec!["C"]);
        assert_eq!(outcome.guaranteed.len(), 1);
        assert_eq!(outcome.guaranteed[0].address.as_str(), "D");
    }

    #[test]
    fn exclusive_raffle_spans_every_tier() {
        // Tickets: A 3, B 7, C 12, D 60 -> D owns [22, 82).
        let rng = NullRandom::constant(22);
        let engine = ContestEngine::new(ContestRules::default(), &rng, &rng);
        let outcome = engine.run(&scenario()).unwrap();
        assert_eq!(outcome.exclusive.total_tickets, 82);
        assert_eq!(outcome.exclusive.entrants, 4);
        assert_eq!(outcome.exclusive.winner.unwrap().address.as_str(), "D");
    }

    #[test]
    fn requested_quota_is_recorded_even_when_saturated() {
        let rng = NullRandom::constant(0);
        let engine = ContestEngine::new(ContestRules::default(), &rng, &rng);
        let outcome = engine.run(&scenario()).unwrap();
        let believer = outcome
            .tier_results
            .iter()
            .find(|r| r.tier == BUNNIE_BELIEVER)
            .unwrap();
        assert_eq!(believer.requested_winners, 6);
        assert_eq!(believer.winners.len(), 1);
    }

    #[test]
    fn unknown_reward_tier_yields_no_winners() {
        let rules = ContestRules {
            tier_rewards: TierRewards::default()
                .with_overrides([TierReward::new("Golden Bunnie", 2)]),
            ..ContestRules::default()
        };
        let rng = NullRandom::constant(0);
        let engine = ContestEngine::new(rules, &rng, &rng);
        let outcome = engine.run(&scenario()).unwrap();
        let golden = outcome.tier_results.last().unwrap();
        assert_eq!(golden.tier, "Golden Bunnie");
        assert!(golden.winners.is_empty());
    }

    #[test]
    fn quota_draws_respect_tier_size() {
        let holders: Vec<Holder> = (0..10).map(|i| Holder::new(format!("h{i}"), 2)).collect();
        let rng = NullRandom::new(vec![7, 3, 5, 1]);
        let engine = ContestEngine::new(ContestRules::default(), &rng, &rng);
        let outcome = engine.run(&holders).unwrap();
        let small = &outcome.tier_results[0];
        assert_eq!(small.tier, BUNNIE_HOLDER);
        assert_eq!(small.winners.len(), 3);
        assert!(outcome.guaranteed.is_empty());
    }

    #[test]
    fn outcome_json_keeps_tier_order() {
        let rng = NullRandom::constant(0);
        let engine = ContestEngine::new(ContestRules::default(), &rng, &rng);
        let outcome = engine.run(&scenario()).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();

        let tiers: Vec<&str> = json["tierResults"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["tier"].as_str().unwrap())
            .collect();
        assert_eq!(tiers, vec![BUNNIE_HOLDER, BUNNIE_BELIEVER, BIG_BUNNIE]);
        assert_eq!(json["guaranteedTier"], WHALE_BUNNIE);
        assert_eq!(json["guaranteed"][0]["tokenCount"], 20);
        assert_eq!(json["exclusive"]["entrants"], 4);
    }

    #[test]
    fn guaranteed_tier_quota_is_not_drawn() {
        let rules = ContestRules {
            tier_rewards: TierRewards::default()
                .with_overrides([TierReward::new(WHALE_BUNNIE, 1)]),
            ..ContestRules::default()
        };
        let holders = vec![
            Holder::new("W1", 15),
            Holder::new("W2", 30),
            Holder::new("A", 2),
        ];
        let rng = NullRandom::constant(0);
        let engine = ContestEngine::new(rules, &rng, &rng);
        let outcome = engine.run(&holders).unwrap();

        assert!(outcome.tier_results.iter().all(|r| r.tier != WHALE_BUNNIE));
        assert_eq!(outcome.tier_results.len(), 3);
        assert_eq!(outcome.guaranteed.len(), 2);
    }

    #[test]
    fn empty_census_produces_empty_contest() {
        let rng = NullRandom::constant(0);
        let engine = ContestEngine::new(ContestRules::default(), &rng, &rng);
        let outcome = engine.run(&[]).unwrap();
        assert!(outcome.tier_results.iter().all(|r| r.winners.is_empty()));
        assert!(outcome.exclusive.winner.is_none());
        assert_eq!(outcome.exclusive.total_tickets, 0);
    }
}
