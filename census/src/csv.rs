//! CSV renderings of groups, winners and the contest log.
//!
//! Every line, header included, ends in `\n`. Token identifiers are joined
//! with `;` inside a single field.

use crate::report::{
    winning_wallets, ContestReport, EXCLUSIVE_CATEGORY, EXCLUSIVE_PRIZE, GUARANTEED_REWARD,
    TIER_WINNER,
};
use giveaway_types::Holder;
use std::borrow::Cow;

pub const HOLDERS_HEADER: &str = "Address,TokenCount,Tokens";
pub const WINNING_WALLETS_HEADER: &str = "Address,TokenCount,Tokens,Category,RewardType";
pub const CONTEST_LOG_HEADER: &str = "Timestamp,Category,Tier,RequestedWinners,AwardedWinners,\
Address,TokenCount,Tokens,RewardType,TotalTickets,TotalEntries,EligibleHolders,TotalTokens";

/// Quote a field holding a comma, quote or newline; inner quotes are doubled.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn push_row<S: AsRef<str>>(out: &mut String, fields: &[S]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_field(field.as_ref()));
    }
    out.push('\n');
}

fn with_header(header: &str) -> String {
    let mut out = String::with_capacity(header.len() + 1);
    out.push_str(header);
    out.push('\n');
    out
}

pub fn holders_to_csv(holders: &[Holder]) -> String {
    let mut out = with_header(HOLDERS_HEADER);
    for holder in holders {
        push_row(
            &mut out,
            &[
                holder.address.to_string(),
                holder.token_count.to_string(),
                holder.joined_tokens(),
            ],
        );
    }
    out
}

/// One row per prize, as listed by [`winning_wallets`].
pub fn winning_wallets_to_csv(report: &ContestReport) -> String {
    let mut out = with_header(WINNING_WALLETS_HEADER);
    for wallet in winning_wallets(report) {
        push_row(
            &mut out,
            &[
                wallet.holder.address.to_string(),
                wallet.holder.token_count.to_string(),
                wallet.holder.joined_tokens(),
                wallet.category,
                wallet.reward_type.to_string(),
            ],
        );
    }
    out
}

/// Full audit log of a contest.
///
/// Rows: one per tier winner (a single blank-holder row for a tier with no
/// winners), one per guaranteed reward, one for the exclusive raffle, and a
/// closing summary. Every row repeats the timestamp and the eligible totals.
pub fn contest_log_to_csv(report: &ContestReport) -> String {
    let timestamp = report.timestamp.to_string();
    let eligible = report.totals.eligible_holders.to_string();
    let tokens = report.totals.total_tokens.to_string();
    let row = |category: &str,
               tier: &str,
               requested: String,
               awarded: String,
               holder: Option<&Holder>,
               reward: &str,
               tickets: String,
               entries: String| {
        let (address, count, listed) = match holder {
            Some(h) => (h.address.to_string(), h.token_count.to_string(), h.joined_tokens()),
            None => (String::new(), String::new(), String::new()),
        };
        vec![
            timestamp.clone(),
            category.to_string(),
            tier.to_string(),
            requested,
            awarded,
            address,
            count,
            listed,
            reward.to_string(),
            tickets,
            entries,
            eligible.clone(),
            tokens.clone(),
        ]
    };

    let mut out = with_header(CONTEST_LOG_HEADER);

    for result in &report.tier_results {
        let requested = result.requested_winners.to_string();
        let awarded = result.winners.len().to_string();
        if result.winners.is_empty() {
            let fields = row(
                "Tier Result",
                &result.tier,
                requested,
                awarded,
                None,
                TIER_WINNER,
                String::new(),
                String::new(),
            );
            push_row(&mut out, &fields);
            continue;
        }
        for winner in &result.winners {
            let fields = row(
                "Tier Result",
                &result.tier,
                requested.clone(),
                awarded.clone(),
                Some(winner),
                TIER_WINNER,
                String::new(),
                String::new(),
            );
            push_row(&mut out, &fields);
        }
    }

    for whale in &report.whale_rewards {
        let fields = row(
            "Whale Reward",
            &report.guaranteed_tier,
            "All".to_string(),
            "1".to_string(),
            Some(whale),
            GUARANTEED_REWARD,
            String::new(),
            String::new(),
        );
        push_row(&mut out, &fields);
    }

    let raffle = &report.exclusive_raffle;
    let awarded = if raffle.winner.is_some() { "1" } else { "0" };
    let fields = row(
        "Exclusive Raffle",
        EXCLUSIVE_CATEGORY,
        "1".to_string(),
        awarded.to_string(),
        raffle.winner.as_ref(),
        EXCLUSIVE_PRIZE,
        raffle.total_tickets.to_string(),
        raffle.entrants.to_string(),
    );
    push_row(&mut out, &fields);

    let blank_zero = |n: u64| if n == 0 { String::new() } else { n.to_string() };
    let fields = row(
        "Summary",
        "All Tiers",
        String::new(),
        report.total_awards().to_string(),
        None,
        "Total Winners",
        blank_zero(raffle.total_tickets),
        blank_zero(raffle.entrants as u64),
    );
    push_row(&mut out, &fields);

    out
}
