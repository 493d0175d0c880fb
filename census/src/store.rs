//! Result files under the data directory.

use crate::csv::{contest_log_to_csv, holders_to_csv, winning_wallets_to_csv};
use crate::error::CensusError;
use crate::report::ContestReport;
use giveaway_types::Groups;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const TIER_GROUPS_FILE: &str = "tier_groups.json";
pub const WINNERS_FILE: &str = "winners.json";
pub const CONTEST_RESULTS_FILE: &str = "contest_results.json";
pub const WINNING_WALLETS_FILE: &str = "winning_wallets.csv";
pub const CONTEST_LOG_FILE: &str = "contest_logs.csv";

/// Reads and writes result files in one directory.
#[derive(Clone, Debug)]
pub struct ResultStore {
    dir: PathBuf,
}

impl ResultStore {
    /// Open a store at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CensusError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Write any serializable value as pretty JSON.
    pub fn save_json<T: Serialize + ?Sized>(
        &self,
        value: &T,
        file: &str,
    ) -> Result<PathBuf, CensusError> {
        let json = serde_json::to_string_pretty(value)?;
        self.write(file, json)
    }

    pub fn save_groups(&self, groups: &Groups, file: &str) -> Result<PathBuf, CensusError> {
        self.save_json(groups, file)
    }

    /// Read groups saved by [`save_groups`](Self::save_groups), order intact.
    pub fn load_groups(&self, file: &str) -> Result<Groups, CensusError> {
        let json = std::fs::read_to_string(self.path(file))?;
        Ok(serde_json::from_str(&json)?)
    }

    /// One CSV per group, named after the group. Returns each group name with
    /// the file written for it.
    pub fn save_groups_csv(&self, groups: &Groups) -> Result<Vec<(String, PathBuf)>, CensusError> {
        let mut written = Vec::with_capacity(groups.len());
        for (name, holders) in groups.iter() {
            let file = format!("{}.csv", safe_file_name(name));
            let path = self.write(&file, holders_to_csv(holders))?;
            written.push((name.to_string(), path));
        }
        Ok(written)
    }

    pub fn save_winning_wallets_csv(
        &self,
        report: &ContestReport,
        file: &str,
    ) -> Result<PathBuf, CensusError> {
        self.write(file, winning_wallets_to_csv(report))
    }

    pub fn save_contest_log_csv(
        &self,
        report: &ContestReport,
        file: &str,
    ) -> Result<PathBuf, CensusError> {
        self.write(file, contest_log_to_csv(report))
    }

    fn write(&self, file: &str, contents: String) -> Result<PathBuf, CensusError> {
        let path = self.path(file);
        std::fs::write(&path, contents)?;
        tracing::debug!(path = %path.display(), "wrote result file");
        Ok(path)
    }
}

/// Replace every character that is not an ASCII letter or digit with `_`.
pub fn safe_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use giveaway_types::Holder;

    fn tiers() -> Groups {
        let mut groups = Groups::new();
        groups.insert("Whale Bunnie", vec![Holder::new("0xW", 20)]);
        groups.insert("Bunnie Holder", vec![Holder::new("0xA", 1)]);
        groups.insert("Big Bunnie", Vec::new());
        groups
    }

    #[test]
    fn open_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("data");
        let store = ResultStore::open(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(store.dir(), dir.as_path());
    }

    #[test]
    fn groups_round_trip_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ResultStore::open(tmp.path()).unwrap();
        store.save_groups(&tiers(), TIER_GROUPS_FILE).unwrap();
        let loaded = store.load_groups(TIER_GROUPS_FILE).unwrap();
        assert_eq!(loaded, tiers());
        assert_eq!(
            loaded.names(),
            vec!["Whale Bunnie", "Bunnie Holder", "Big Bunnie"]
        );
    }

    #[test]
    fn loading_absent_groups_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ResultStore::open(tmp.path()).unwrap();
        assert!(matches!(
            store.load_groups(TIER_GROUPS_FILE),
            Err(CensusError::Io(_))
        ));
    }

    #[test]
    fn group_csv_files_use_safe_names() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ResultStore::open(tmp.path()).unwrap();
        let written = store.save_groups_csv(&tiers()).unwrap();

        let files: Vec<String> = written
            .iter()
            .map(|(_, p)| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            files,
            vec!["Whale_Bunnie.csv", "Bunnie_Holder.csv", "Big_Bunnie.csv"]
        );
        let empty = std::fs::read_to_string(&written[2].1).unwrap();
        assert_eq!(empty, "Address,TokenCount,Tokens\n");
    }

    #[test]
    fn safe_names_replace_punctuation() {
        assert_eq!(safe_file_name("Tier 1 (1-4)"), "Tier_1__1_4_");
        assert_eq!(safe_file_name("group_3"), "group_3");
    }
}
