//! Giveaway configuration with TOML file support.

use giveaway_allocation::classifier::DEFAULT_BUCKET_COUNT;
use giveaway_allocation::ContestRules;
use giveaway_census::report::DEFAULT_CONTEST_NAME;
use giveaway_types::tier::WHALE_BUNNIE;
use giveaway_types::{TicketPolicy, TierReward, TierRewards, TierTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Configuration for a giveaway run.
///
/// Loaded from a TOML file via [`GiveawayConfig::from_toml_file`] or built
/// programmatically. Command-line flags override file values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GiveawayConfig {
    /// Holder census JSON.
    #[serde(default = "default_census_path")]
    pub census_path: PathBuf,

    /// Directory for saved groups, winners and contest results.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Wallets excluded from every classification and draw.
    #[serde(default)]
    pub excluded_addresses: Vec<String>,

    /// Tier whose members all receive a guaranteed reward.
    #[serde(default = "default_guaranteed_tier")]
    pub guaranteed_tier: String,

    /// Winners drawn per group by the `raffle` command.
    #[serde(default = "default_winners_per_group")]
    pub winners_per_group: usize,

    /// Bucket count for address and random classification.
    #[serde(default = "default_bucket_count")]
    pub bucket_count: usize,

    #[serde(default = "default_contest_name")]
    pub contest_name: String,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Quota overrides applied on top of the default reward table.
    #[serde(default)]
    pub tier_rewards: Vec<TierReward>,

    #[serde(default)]
    pub ticket_policy: TicketPolicy,

    /// Tier table, first match wins.
    #[serde(default)]
    pub tiers: TierTable,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_census_path() -> PathBuf {
    PathBuf::from("holders_summary.json")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_guaranteed_tier() -> String {
    WHALE_BUNNIE.to_string()
}

fn default_winners_per_group() -> usize {
    1
}

fn default_bucket_count() -> usize {
    DEFAULT_BUCKET_COUNT
}

fn default_contest_name() -> String {
    DEFAULT_CONTEST_NAME.to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl GiveawayConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Contest rules: the configured tiers, the default quotas with any
    /// overrides applied, the guaranteed tier and the ticket policy.
    pub fn contest_rules(&self) -> ContestRules {
        ContestRules {
            tiers: self.tiers.clone(),
            tier_rewards: TierRewards::default().with_overrides(self.tier_rewards.iter().cloned()),
            guaranteed_tier: self.guaranteed_tier.clone(),
            ticket_policy: self.ticket_policy,
        }
    }
}

impl Default for GiveawayConfig {
    fn default() -> Self {
        Self {
            census_path: default_census_path(),
            data_dir: default_data_dir(),
            excluded_addresses: Vec::new(),
            guaranteed_tier: default_guaranteed_tier(),
            winners_per_group: default_winners_per_group(),
            bucket_count: default_bucket_count(),
            contest_name: default_contest_name(),
            log_format: default_log_format(),
            log_level: default_log_level(),
            tiers: TierTable::default(),
            tier_rewards: Vec::new(),
            ticket_policy: TicketPolicy::default(),
        }
    }
}
