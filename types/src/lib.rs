//! Fundamental types for the holder giveaway.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! wallet addresses, holders and the census they arrive in, ordered groups, the tier table,
//! per-tier reward quotas, the raffle ticket policy, and timestamps.

pub mod address;
pub mod census;
pub mod error;
pub mod group;
pub mod holder;
pub mod reward;
pub mod ticket;
pub mod tier;
pub mod time;

pub use address::WalletAddress;
pub use census::HolderCensus;
pub use error::GiveawayError;
pub use group::{Groups, Winners};
pub use holder::Holder;
pub use reward::{TierReward, TierRewards};
pub use ticket::TicketPolicy;
pub use tier::{Tier, TierTable};
pub use time::Timestamp;
