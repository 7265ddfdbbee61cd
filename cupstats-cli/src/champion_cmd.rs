//! Champion command - resolve one day's bracket from JSON inputs

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use cupstats_core::{EngineConfig, MatchRecord, MemoryStore};
use cupstats_engine::{resolve_champion, ResolveStatus};

#[derive(Args)]
pub struct ChampionArgs {
    /// JSON array of match records for the day
    #[arg(long, value_name = "FILE")]
    pub matches: PathBuf,

    /// JSON object mapping team name to player-id list
    #[arg(long, value_name = "FILE")]
    pub rosters: PathBuf,

    /// Cup name for the output record
    #[arg(long, default_value = "cup")]
    pub cup: String,

    /// Competition day, e.g. 20250101
    #[arg(long)]
    pub day: String,

    /// Minimum round-win tally before a champion is crowned
    #[arg(long, default_value = "3")]
    pub threshold: u32,

    /// Output the resolved record as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ChampionArgs) -> Result<()> {
    let matches = load_matches(&args.matches)?;
    let rosters = load_rosters(&args.rosters)?;

    tracing::info!(
        cup = %args.cup,
        day = %args.day,
        matches = matches.len(),
        "resolving bracket"
    );

    let config = EngineConfig::default().with_round_win_threshold(args.threshold);
    let store = MemoryStore::new();
    let lookup = |team: &str| rosters.get(team).cloned().unwrap_or_default();

    let status = resolve_champion(&matches, lookup, &store, &args.cup, &args.day, &config)?;
    report(&status, args.json)?;
    Ok(())
}

fn load_matches(path: &PathBuf) -> Result<Vec<MatchRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read match file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse match file: {}", path.display()))
}

fn load_rosters(path: &PathBuf) -> Result<BTreeMap<String, Vec<String>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse roster file: {}", path.display()))
}

fn report(status: &ResolveStatus, json: bool) -> Result<()> {
    match status {
        ResolveStatus::Written(record) => {
            if json {
                println!("{}", serde_json::to_string_pretty(record)?);
            } else {
                println!("Champion:  {}", record.champion_team);
                println!(
                    "Runner-up: {}",
                    record.runner_up_team.as_deref().unwrap_or("-")
                );
                println!("Champion players:  {}", record.champion_players.join(", "));
                println!("Runner-up players: {}", record.runner_up_players.join(", "));
            }
        }
        ResolveStatus::Inconclusive { max_round_wins } => {
            println!(
                "Inconclusive: best tally is {} round wins, below the threshold",
                max_round_wins
            );
        }
        ResolveStatus::NoMatches => println!("No usable matches for the day"),
        ResolveStatus::AlreadyResolved => println!("Champion already resolved for the day"),
    }
    Ok(())
}
