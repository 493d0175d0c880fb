//! giveaway: command-line entry point for the holder giveaway.

mod config;

use anyhow::Context;
use clap::Parser;
use config::GiveawayConfig;
use giveaway_allocation::{
    classify_by_address_prefix, classify_by_token_count, classify_randomly, group_statistics,
    select_from_groups, select_proportionally, winner_statistics, ContestEngine,
};
use giveaway_census::store::{
    CONTEST_LOG_FILE, CONTEST_RESULTS_FILE, TIER_GROUPS_FILE, WINNERS_FILE, WINNING_WALLETS_FILE,
};
use giveaway_census::{load_census, ContestReport, Denylist, ResultStore};
use giveaway_entropy::{OsRandom, RandomSource, SeededRandom, ThreadRandom};
use giveaway_types::{Groups, Holder, Timestamp};
use giveaway_utils::{init_logging, LogFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "giveaway",
    about = "NFT holder giveaway: tier classification, raffles and the holder contest"
)]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// flags and env vars override them.
    #[arg(long, env = "GIVEAWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Holder census JSON.
    #[arg(long, env = "GIVEAWAY_CENSUS")]
    census: Option<PathBuf>,

    /// Directory for saved groups and results.
    #[arg(long, env = "GIVEAWAY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Addresses to exclude (comma-separated), added to the configured list.
    #[arg(long, env = "GIVEAWAY_EXCLUDE", value_delimiter = ',')]
    exclude: Vec<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "GIVEAWAY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "GIVEAWAY_LOG_FORMAT")]
    log_format: Option<String>,

    /// Seed for tier draws and random bucketing, for reproducible runs.
    /// The exclusive raffle always uses OS entropy.
    #[arg(long, env = "GIVEAWAY_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Classify eligible holders into groups and save them.
    Classify {
        #[arg(long, value_enum, default_value_t = Strategy::Tier)]
        strategy: Strategy,

        /// Bucket count for the prefix and random strategies.
        #[arg(long)]
        groups: Option<usize>,
    },

    /// Draw winners from the saved tier groups.
    Raffle {
        #[arg(long)]
        winners_per_group: Option<usize>,

        /// Draw this many winners in total, spread by group size.
        #[arg(long)]
        total: Option<usize>,
    },

    /// Run the holder contest and save its results.
    Contest,

    /// Print the effective configuration as TOML.
    ShowConfig,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Strategy {
    /// By token count, using the tier table.
    Tier,
    /// Sorted by address, cut into equal buckets.
    Prefix,
    /// Shuffled, dealt round-robin into buckets.
    Random,
}

impl Strategy {
    fn file_name(self) -> String {
        match self {
            Strategy::Tier => TIER_GROUPS_FILE.to_string(),
            Strategy::Prefix => "prefix_groups.json".to_string(),
            Strategy::Random => "random_groups.json".to_string(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GiveawayConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GiveawayConfig::default(),
    };
    if let Some(census) = cli.census {
        config.census_path = census;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    config.excluded_addresses.extend(cli.exclude);

    let format: LogFormat = config.log_format.parse()?;
    init_logging(format, &config.log_level)?;

    if let Command::ShowConfig = cli.command {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let selection: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => {
            let source = SeededRandom::new(seed);
            tracing::info!(seed = source.seed(), "tier draws seeded");
            Box::new(source)
        }
        None => Box::new(ThreadRandom),
    };
    tracing::info!(
        census = %config.census_path.display(),
        data_dir = %config.data_dir.display(),
        selection = selection.name(),
        "giveaway starting"
    );

    let store = ResultStore::open(&config.data_dir)
        .with_context(|| format!("opening data directory {}", config.data_dir.display()))?;

    match cli.command {
        Command::Classify { strategy, groups } => {
            classify(&config, &store, strategy, groups, selection.as_ref())
        }
        Command::Raffle {
            winners_per_group,
            total,
        } => raffle(&config, &store, winners_per_group, total, selection.as_ref()),
        Command::Contest => contest(&config, &store, selection.as_ref()),
        Command::ShowConfig => Ok(()),
    }
}

/// Load the census and drop denied addresses.
fn eligible_holders(config: &GiveawayConfig) -> anyhow::Result<Vec<Holder>> {
    let census = load_census(&config.census_path)
        .with_context(|| format!("loading census {}", config.census_path.display()))?;
    println!(
        "Loaded {} holders with {} total tokens",
        census.total_holders, census.total_tokens
    );

    let denylist = Denylist::new(config.excluded_addresses.iter().map(String::as_str));
    for address in denylist.addresses() {
        println!("Excluded address: {address}");
    }
    let eligible = denylist.filter(&census.holders);
    println!("Excluded {} holder(s)", census.holders.len() - eligible.len());
    println!("Eligible holders: {}", eligible.len());
    Ok(eligible)
}

fn print_breakdown(title: &str, groups: &Groups) {
    println!("\n{title}:");
    for (name, size) in group_statistics(groups).group_sizes {
        println!("- {name}: {size} holders");
    }
}

fn print_holders(holders: &[Holder], indent: &str) {
    for holder in holders {
        println!("{indent}{} ({} tokens)", holder.address, holder.token_count);
    }
}

fn classify(
    config: &GiveawayConfig,
    store: &ResultStore,
    strategy: Strategy,
    bucket_count: Option<usize>,
    rng: &dyn RandomSource,
) -> anyhow::Result<()> {
    println!("=== Classifying holders ===");
    let eligible = eligible_holders(config)?;
    let buckets = bucket_count.unwrap_or(config.bucket_count);

    let groups = match strategy {
        Strategy::Tier => classify_by_token_count(&eligible, &config.tiers),
        Strategy::Prefix => classify_by_address_prefix(&eligible, buckets)?,
        Strategy::Random => classify_randomly(&eligible, buckets, rng)?,
    };
    print_breakdown("Group breakdown", &groups);

    let path = store.save_groups(&groups, &strategy.file_name())?;
    println!("\nSaved groups to: {}", path.display());

    println!("\nExporting group CSV files...");
    for (name, path) in store.save_groups_csv(&groups)? {
        let file = path.file_name().map(|f| f.to_string_lossy().into_owned());
        println!("- {name}: {}", file.unwrap_or_default());
    }
    Ok(())
}

fn raffle(
    config: &GiveawayConfig,
    store: &ResultStore,
    winners_per_group: Option<usize>,
    total: Option<usize>,
    rng: &dyn RandomSource,
) -> anyhow::Result<()> {
    println!("=== Running raffle ===");

    let groups = if store.path(TIER_GROUPS_FILE).exists() {
        println!("Using existing {TIER_GROUPS_FILE}");
        store
            .load_groups(TIER_GROUPS_FILE)
            .with_context(|| format!("loading {TIER_GROUPS_FILE}"))?
    } else {
        println!("{TIER_GROUPS_FILE} not found. Classifying holders first...");
        let eligible = eligible_holders(config)?;
        let groups = classify_by_token_count(&eligible, &config.tiers);
        store.save_groups(&groups, TIER_GROUPS_FILE)?;
        groups
    };

    let stats = group_statistics(&groups);
    println!("Groups available: {}", stats.total_groups);
    println!("Eligible holders: {}", stats.total_holders);

    let winners = match total {
        Some(total) => {
            println!("\nSelecting {total} winners across groups by size...");
            select_proportionally(&groups, total, rng)?
        }
        None => {
            let per_group = winners_per_group.unwrap_or(config.winners_per_group);
            println!("\nSelecting winners ({per_group} per group)...");
            select_from_groups(&groups, per_group, rng)?
        }
    };

    for (name, picked) in winners.iter() {
        println!("\n{name}:");
        print_holders(picked, "- ");
    }

    let stats = winner_statistics(&winners);
    println!("\nWinner statistics:");
    println!("Total winners: {}", stats.total_winners);
    println!("Unique winners: {}", stats.unique_winner_count);

    let path = store.save_json(&winners, WINNERS_FILE)?;
    println!("\nSaved winners to: {}", path.display());
    Ok(())
}

fn contest(
    config: &GiveawayConfig,
    store: &ResultStore,
    selection: &dyn RandomSource,
) -> anyhow::Result<()> {
    println!("=== Running {} ===", config.contest_name);
    let eligible = eligible_holders(config)?;

    let engine = ContestEngine::new(config.contest_rules(), selection, &OsRandom);
    let groups = classify_by_token_count(&eligible, &engine.rules().tiers);
    print_breakdown("Contest tier breakdown", &groups);

    let outcome = engine.run_on_groups(&groups)?;

    println!("\nTier rewards (requested vs awarded):");
    for result in &outcome.tier_results {
        println!(
            "- {}: {}/{}",
            result.tier,
            result.winners.len(),
            result.requested_winners
        );
        print_holders(&result.winners, "    ");
    }

    println!(
        "\n{} (guaranteed reward): {}",
        outcome.guaranteed_tier,
        outcome.guaranteed.len()
    );
    print_holders(&outcome.guaranteed, "- ");

    let exclusive = &outcome.exclusive;
    match &exclusive.winner {
        Some(winner) => {
            println!("\nExclusive 1/1 NFT winner: {}", winner.address);
            println!(
                "Tickets: {} across {} holders",
                exclusive.total_tickets, exclusive.entrants
            );
        }
        None => println!("\nExclusive 1/1 NFT raffle has no winner (no eligible tickets)."),
    }

    let report = ContestReport::new(
        outcome,
        engine.rules(),
        &eligible,
        &config.contest_name,
        Timestamp::now(),
    );
    let results = store.save_json(&report, CONTEST_RESULTS_FILE)?;
    println!("\nSaved contest results to: {}", results.display());
    let wallets = store.save_winning_wallets_csv(&report, WINNING_WALLETS_FILE)?;
    println!("Saved winning wallets to: {}", wallets.display());
    let log = store.save_contest_log_csv(&report, CONTEST_LOG_FILE)?;
    println!("Saved contest log to: {}", log.display());
    Ok(())
}
