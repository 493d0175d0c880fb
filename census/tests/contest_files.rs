use giveaway_allocation::{classify_by_token_count, ContestEngine, ContestRules};
use giveaway_census::report::DEFAULT_CONTEST_NAME;
use giveaway_census::store::{CONTEST_LOG_FILE, CONTEST_RESULTS_FILE, WINNING_WALLETS_FILE};
use giveaway_census::{parse_census, ContestReport, Denylist, ResultStore};
use giveaway_nullables::NullRandom;
use giveaway_types::Timestamp;

const CENSUS: &str = r#"{
    "totalHolders": 5,
    "totalTokens": 82,
    "holders": [
        {"address": "0xA", "tokenCount": 3},
        {"address": "0xB", "tokenCount": 7},
        {"address": "0xC", "tokenCount": 12},
        {"address": "0xD", "tokenCount": 20},
        {"address": "0xBANNED", "tokenCount": 40}
    ]
}"#;

#[test]
fn census_to_saved_contest() {
    let census = parse_census(CENSUS).unwrap();
    let eligible = Denylist::new(["0xbanned"]).filter(&census.holders);
    assert_eq!(eligible.len(), 4);

    let rules = ContestRules::default();
    let groups = classify_by_token_count(&eligible, &rules.tiers);
    let rng = NullRandom::constant(81);
    let outcome = ContestEngine::new(rules.clone(), &rng, &rng)
        .run_on_groups(&groups)
        .unwrap();
    assert_eq!(outcome.exclusive.total_tickets, 82);

    let report = ContestReport::new(
        outcome,
        &rules,
        &eligible,
        DEFAULT_CONTEST_NAME,
        Timestamp::new(1_700_000_000),
    );

    let tmp = tempfile::tempdir().unwrap();
    let store = ResultStore::open(tmp.path().join("data")).unwrap();
    store.save_json(&report, CONTEST_RESULTS_FILE).unwrap();
    store.save_winning_wallets_csv(&report, WINNING_WALLETS_FILE).unwrap();
    store.save_contest_log_csv(&report, CONTEST_LOG_FILE).unwrap();

    let saved: ContestReport = serde_json::from_str(
        &std::fs::read_to_string(store.path(CONTEST_RESULTS_FILE)).unwrap(),
    )
    .unwrap();
    assert_eq!(saved, report);
    assert!(saved
        .whale_rewards
        .iter()
        .all(|h| !h.address.matches("0xBANNED")));

    let wallets = std::fs::read_to_string(store.path(WINNING_WALLETS_FILE)).unwrap();
    assert_eq!(wallets.lines().count(), 1 + 5);
    assert!(wallets.lines().last().unwrap().starts_with("0xD,20,,Exclusive"));

    let log = std::fs::read_to_string(store.path(CONTEST_LOG_FILE)).unwrap();
    // Header, three tier rows, one whale, exclusive, summary.
    assert_eq!(log.lines().count(), 7);
    assert!(log.lines().last().unwrap().contains(",Summary,All Tiers,"));
}
