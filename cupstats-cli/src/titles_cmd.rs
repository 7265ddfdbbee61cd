//! Titles and stats commands - run the title pipeline over JSON profiles

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use cupstats_core::{merge_champion_flags, ChampionRecord, EngineConfig, PlayerProfile};
use cupstats_engine::{award_summary, compute_titles, PlayerTitles, TitleCatalog};

#[derive(Args)]
pub struct TitlesArgs {
    /// JSON array of player profiles for one scope
    #[arg(long, value_name = "FILE")]
    pub profiles: PathBuf,

    /// Optional champion record whose flags get merged before evaluation
    #[arg(long, value_name = "FILE")]
    pub champion: Option<PathBuf>,

    /// Hard cap on titles per player
    #[arg(long, default_value = "10")]
    pub max_titles: usize,

    /// Output awards as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct StatsArgs {
    /// JSON array of player profiles for one scope
    #[arg(long, value_name = "FILE")]
    pub profiles: PathBuf,
}

pub fn run(args: TitlesArgs) -> Result<()> {
    let results = compute(&args.profiles, args.champion.as_ref(), args.max_titles)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for result in &results {
        if result.titles.is_empty() {
            continue;
        }
        println!("{}", result.player_id);
        for title in &result.titles {
            println!(
                "  [{:?}/{:?} p{}] {} - {} (score {:.2})",
                title.polarity, title.category, title.priority, title.name, title.description,
                title.score
            );
        }
    }
    Ok(())
}

pub fn run_stats(args: StatsArgs) -> Result<()> {
    let results = compute(&args.profiles, None, EngineConfig::default().max_titles)?;
    let summary = award_summary(&results);

    println!("Players:             {}", summary.players);
    println!("Players with titles: {}", summary.players_with_titles);
    println!("Total titles:        {}", summary.total_titles);
    println!("Max per player:      {}", summary.max_titles_per_player);
    println!(
        "Polarity:            +{} / -{} / ={}",
        summary.positive, summary.negative, summary.neutral
    );
    println!("By title:");
    for (name, count) in &summary.by_title {
        println!("  {:24} {}", name, count);
    }
    Ok(())
}

fn compute(
    profiles_path: &PathBuf,
    champion_path: Option<&PathBuf>,
    max_titles: usize,
) -> Result<Vec<PlayerTitles>> {
    let mut profiles = load_profiles(profiles_path)?;

    if let Some(path) = champion_path {
        let record = load_champion(path)?;
        merge_champion_flags(&mut profiles, &record);
    }

    tracing::info!(players = profiles.len(), "computing titles");

    let config = EngineConfig::default().with_max_titles(max_titles);
    let catalog = TitleCatalog::standard();
    let results = compute_titles(profiles, &catalog, &config)?;
    Ok(results)
}

fn load_profiles(path: &PathBuf) -> Result<Vec<PlayerProfile>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse profile file: {}", path.display()))
}

fn load_champion(path: &PathBuf) -> Result<ChampionRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read champion file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse champion file: {}", path.display()))
}
