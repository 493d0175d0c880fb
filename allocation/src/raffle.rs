//! Ticket-weighted single-winner raffle for the exclusive prize.

use crate::error::AllocationError;
use giveaway_entropy::CryptoRandomSource;
use giveaway_types::{Holder, TicketPolicy};
use serde::{Deserialize, Serialize};

/// Result of the exclusive raffle.
///
/// `winner: None` is a normal outcome when nobody holds a ticket.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaffleOutcome {
    pub winner: Option<Holder>,
    pub total_tickets: u64,
    pub entrants: usize,
}

/// Tickets held under the default policy: one per token, tripled from 15.
pub fn ticket_count(holder: &Holder) -> u64 {
    TicketPolicy::default().tickets(holder)
}

/// Draw one winner with probability proportional to tickets.
///
/// Holders without tickets are left out of both the pool and the total. A
/// single value `r` is drawn uniformly from `[0, total)`; entrants are walked
/// in input order, each subtracting its tickets from `r`, and the first to
/// push it below zero wins. Each entrant therefore owns a contiguous slice of
/// the ticket range as wide as its ticket count.
pub fn draw_weighted_winner(
    holders: &[Holder],
    policy: &TicketPolicy,
    rng: &dyn CryptoRandomSource,
) -> Result<RaffleOutcome, AllocationError> {
    let entrants: Vec<(&Holder, u64)> = holders
        .iter()
        .map(|h| (h, policy.tickets(h)))
        .filter(|(_, tickets)| *tickets > 0)
        .collect();

    let total_tickets = entrants
        .iter()
        .try_fold(0u64, |acc, (_, tickets)| acc.checked_add(*tickets))
        .ok_or(AllocationError::TicketOverflow)?;

    if entrants.is_empty() || total_tickets == 0 {
        tracing::info!("exclusive raffle has no ticket holders");
        return Ok(RaffleOutcome::default());
    }

    let mut threshold = rng.next_below(total_tickets)?;
    let mut winner = entrants[entrants.len() - 1].0;
    for (holder, tickets) in &entrants {
        if threshold < *tickets {
            winner = *holder;
            break;
        }
        threshold -= tickets;
    }

    tracing::info!(
        winner = %winner.address,
        total_tickets,
        entrants = entrants.len(),
        source = rng.name(),
        "exclusive raffle drawn"
    );

    Ok(RaffleOutcome {
        winner: Some(winner.clone()),
        total_tickets,
        entrants: entrants.len(),
    })
}
