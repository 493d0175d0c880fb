//! Holder census loading and validation.
//!
//! The census is a JSON document of the form
//! `{ "totalHolders": n, "totalTokens": n, "holders": [ {address, tokenCount, tokens?} ] }`.
//! Records are checked here so the engine can assume clean input.

use crate::error::CensusError;
use giveaway_types::{GiveawayError, Holder, HolderCensus, WalletAddress};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCensus {
    #[serde(default)]
    total_holders: Option<u64>,
    #[serde(default)]
    total_tokens: Option<u64>,
    holders: Vec<RawHolder>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHolder {
    address: String,
    #[serde(default)]
    token_count: Option<u64>,
    #[serde(default)]
    tokens: Option<Vec<String>>,
}

impl RawHolder {
    fn validate(self) -> Result<Holder, GiveawayError> {
        let address = WalletAddress::new(self.address);
        if !address.is_valid() {
            return Err(GiveawayError::InvalidAddress(address.to_string()));
        }

        match (self.token_count, self.tokens) {
            (Some(token_count), Some(tokens)) => {
                if tokens.len() as u64 != token_count {
                    return Err(GiveawayError::TokenCountMismatch {
                        address: address.to_string(),
                        token_count,
                        listed: tokens.len(),
                    });
                }
                Ok(Holder {
                    address,
                    token_count,
                    tokens: Some(tokens),
                })
            }
            (Some(token_count), None) => Ok(Holder::new(address, token_count)),
            (None, Some(tokens)) => Ok(Holder::with_tokens(address, tokens)),
            (None, None) => Err(GiveawayError::MissingTokenCount {
                address: address.to_string(),
            }),
        }
    }
}

/// Read and validate a census file.
pub fn load_census(path: &Path) -> Result<HolderCensus, CensusError> {
    let json = std::fs::read_to_string(path)?;
    let census = parse_census(&json)?;
    tracing::info!(
        path = %path.display(),
        holders = census.total_holders,
        tokens = census.total_tokens,
        "loaded holder census"
    );
    Ok(census)
}

/// Parse and validate a census document.
///
/// Fails on the first record with a blank address, with neither a count nor
/// a token list, with a count that disagrees with its list, or with an
/// address already seen (compared case-insensitively). Totals are recomputed
/// from the records; reported totals that disagree are logged and ignored.
pub fn parse_census(json: &str) -> Result<HolderCensus, CensusError> {
    let raw: RawCensus = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(raw.holders.len());
    let mut holders = Vec::with_capacity(raw.holders.len());
    for record in raw.holders {
        let holder = record.validate()?;
        if !seen.insert(holder.address.clone()) {
            return Err(GiveawayError::DuplicateAddress(holder.address.to_string()).into());
        }
        holders.push(holder);
    }

    let census = HolderCensus::from_holders(holders);
    if raw.total_holders.is_some_and(|n| n != census.total_holders) {
        tracing::warn!(
            reported = raw.total_holders,
            counted = census.total_holders,
            "census holder total disagrees with records"
        );
    }
    if raw.total_tokens.is_some_and(|n| n != census.total_tokens) {
        tracing::warn!(
            reported = raw.total_tokens,
            counted = census.total_tokens,
            "census token total disagrees with records"
        );
    }
    Ok(census)
}
