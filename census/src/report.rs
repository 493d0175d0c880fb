//! The saved record of a contest run.

use giveaway_allocation::{ContestOutcome, ContestRules, RaffleOutcome, TierResult};
use giveaway_types::census::total_tokens;
use giveaway_types::{Holder, Tier, Timestamp};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTEST_NAME: &str = "InkBunnies Holder Contest";

pub const TIER_WINNER: &str = "Tier Winner";
pub const GUARANTEED_REWARD: &str = "Guaranteed Reward";
pub const EXCLUSIVE_CATEGORY: &str = "Exclusive";
pub const EXCLUSIVE_PRIZE: &str = "1/1 Exclusive NFT";

/// One line of the published reward table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardLine {
    pub tier: String,
    pub reward: String,
}

/// Human-readable rules, derived from the configured tables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesText {
    pub description: String,
    pub tier_rewards: Vec<RewardLine>,
    pub exclusive_raffle: String,
}

impl RulesText {
    /// Describe `rules`: every tier in table order, then any rewarded tier the
    /// table does not define.
    pub fn describe(contest_name: &str, rules: &ContestRules) -> Self {
        let mut tier_rewards = Vec::new();
        for tier in rules.tiers.iter() {
            if let Some(reward) = reward_text(rules, &tier.name) {
                tier_rewards.push(RewardLine {
                    tier: tier_label(tier),
                    reward,
                });
            }
        }
        for reward in rules.tier_rewards.iter() {
            if rules.tiers.get(&reward.tier).is_none() {
                tier_rewards.push(RewardLine {
                    tier: reward.tier.clone(),
                    reward: winners_text(reward.winners),
                });
            }
        }

        let policy = &rules.ticket_policy;
        let mut exclusive_raffle = format!("Every NFT held = 1 ticket for the {EXCLUSIVE_PRIZE}");
        if policy.whale_multiplier > 1 {
            exclusive_raffle.push_str(&format!(
                "; holders of {}+ NFTs get {} tickets per NFT",
                policy.whale_threshold, policy.whale_multiplier
            ));
        }

        Self {
            description: contest_name.to_string(),
            tier_rewards,
            exclusive_raffle,
        }
    }
}

fn tier_label(tier: &Tier) -> String {
    match tier.max {
        Some(max) if max == tier.min => format!("{} ({} NFTs)", tier.name, tier.min),
        Some(max) => format!("{} ({}-{} NFTs)", tier.name, tier.min, max),
        None => format!("{} ({}+ NFTs)", tier.name, tier.min),
    }
}

fn reward_text(rules: &ContestRules, tier: &str) -> Option<String> {
    if let Some(winners) = rules.tier_rewards.get(tier) {
        return Some(winners_text(winners));
    }
    (tier == rules.guaranteed_tier).then(|| "All holders receive 1 guaranteed NFT".to_string())
}

fn winners_text(winners: usize) -> String {
    if winners == 1 {
        "1 winner".to_string()
    } else {
        format!("{winners} winners")
    }
}

/// Population the contest ran over, after the denylist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTotals {
    pub eligible_holders: usize,
    pub total_tokens: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestReport {
    pub timestamp: Timestamp,
    pub rules: RulesText,
    pub totals: ReportTotals,
    pub tier_results: Vec<TierResult>,
    pub guaranteed_tier: String,
    pub whale_rewards: Vec<Holder>,
    pub exclusive_raffle: RaffleOutcome,
}

impl ContestReport {
    pub fn new(
        outcome: ContestOutcome,
        rules: &ContestRules,
        eligible: &[Holder],
        contest_name: &str,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            timestamp,
            rules: RulesText::describe(contest_name, rules),
            totals: ReportTotals {
                eligible_holders: eligible.len(),
                total_tokens: total_tokens(eligible),
            },
            tier_results: outcome.tier_results,
            guaranteed_tier: outcome.guaranteed_tier,
            whale_rewards: outcome.guaranteed,
            exclusive_raffle: outcome.exclusive,
        }
    }

    /// Count of every prize awarded: tier winners, guaranteed rewards and the
    /// exclusive prize.
    pub fn total_awards(&self) -> usize {
        let tier: usize = self.tier_results.iter().map(|r| r.winners.len()).sum();
        let exclusive = usize::from(self.exclusive_raffle.winner.is_some());
        tier + self.whale_rewards.len() + exclusive
    }
}

/// One prize and the wallet that receives it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinningWallet {
    pub holder: Holder,
    pub category: String,
    pub reward_type: &'static str,
}

/// Every prize in award order: tier winners, guaranteed rewards, exclusive.
///
/// A wallet appears once per prize it won.
pub fn winning_wallets(report: &ContestReport) -> Vec<WinningWallet> {
    let mut wallets = Vec::new();
    for result in &report.tier_results {
        for holder in &result.winners {
            wallets.push(WinningWallet {
                holder: holder.clone(),
                category: result.tier.clone(),
                reward_type: TIER_WINNER,
            });
        }
    }
    for holder in &report.whale_rewards {
        wallets.push(WinningWallet {
            holder: holder.clone(),
            category: report.guaranteed_tier.clone(),
            reward_type: GUARANTEED_REWARD,
        });
    }
    if let Some(winner) = &report.exclusive_raffle.winner {
        wallets.push(WinningWallet {
            holder: winner.clone(),
            category: EXCLUSIVE_CATEGORY.to_string(),
            reward_type: EXCLUSIVE_PRIZE,
        });
    }
    wallets
}
