//! Everything around the allocation engine that touches data: the holder
//! census on the way in, the denylist, and reports and files on the way out.

pub mod csv;
pub mod denylist;
pub mod error;
pub mod loader;
pub mod report;
pub mod store;

pub use denylist::Denylist;
pub use error::CensusError;
pub use loader::{load_census, parse_census};
pub use report::{
    winning_wallets, ContestReport, ReportTotals, RewardLine, RulesText, WinningWallet,
};
pub use store::ResultStore;
