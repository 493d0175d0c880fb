//! Allocation engine for the holder giveaway.
//!
//! Three stages, composed linearly:
//! 1. **Classification**: holders are partitioned into tiers by token count
//!    (or bucketed by address order / at random for cosmetic grouping).
//! 2. **Quota selection**: each tier yields up to its quota of winners,
//!    drawn uniformly without replacement.
//! 3. **Exclusive raffle**: one ticket-weighted draw across every tier, with
//!    whales holding triple weight.
//!
//! [`ContestEngine`] wires the stages together under the contest rules.
//! Randomness is always injected: quota draws take any
//! [`giveaway_entropy::RandomSource`], the raffle demands a
//! [`giveaway_entropy::CryptoRandomSource`].

pub mod classifier;
pub mod contest;
pub mod error;
pub mod raffle;
pub mod selector;
pub mod stats;

pub use classifier::{classify_by_address_prefix, classify_by_token_count, classify_randomly};
pub use contest::{ContestEngine, ContestOutcome, ContestRules, TierResult};
pub use error::AllocationError;
pub use raffle::{draw_weighted_winner, ticket_count, RaffleOutcome};
pub use selector::{select_from_groups, select_proportionally, select_without_replacement};
pub use stats::{group_statistics, winner_statistics, GroupStatistics, WinnerStatistics};
