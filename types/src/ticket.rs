//! Raffle ticket weighting.

use crate::holder::Holder;
use serde::{Deserialize, Serialize};

/// Holdings at or above this count earn the whale multiplier.
pub const WHALE_TICKET_THRESHOLD: u64 = 15;

/// Ticket multiplier for whale holdings.
pub const WHALE_TICKET_MULTIPLIER: u64 = 3;

/// Maps a token count to exclusive raffle tickets.
///
/// One token is one ticket, except that holdings of `whale_threshold` or more
/// are multiplied by `whale_multiplier`. Zero tokens earn zero tickets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketPolicy {
    pub whale_threshold: u64,
    pub whale_multiplier: u64,
}

impl TicketPolicy {
    pub fn tickets_for(&self, token_count: u64) -> u64 {
        if token_count == 0 {
            0
        } else if token_count >= self.whale_threshold {
            token_count.saturating_mul(self.whale_multiplier)
        } else {
            token_count
        }
    }

    pub fn tickets(&self, holder: &Holder) -> u64 {
        self.tickets_for(holder.token_count)
    }
}

impl Default for TicketPolicy {
    fn default() -> Self {
        Self {
            whale_threshold: WHALE_TICKET_THRESHOLD,
            whale_multiplier: WHALE_TICKET_MULTIPLIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whale_boundary_is_tripled() {
        let policy = TicketPolicy::default();
        assert_eq!(policy.tickets_for(0), 0);
        assert_eq!(policy.tickets_for(1), 1);
        assert_eq!(policy.tickets_for(14), 14);
        assert_eq!(policy.tickets_for(15), 45);
        assert_eq!(policy.tickets_for(20), 60);
    }

    #[test]
    fn huge_holdings_saturate() {
        let policy = TicketPolicy::default();
        assert_eq!(policy.tickets_for(u64::MAX), u64::MAX);
    }
}
