//! Cupstats CLI - run the cup analytics engines over JSON inputs
//!
//! Commands:
//! - champion: resolve a day's champion and runner-up from match results
//! - titles: compute quota-constrained titles for a cohort of profiles
//! - stats: print the award distribution for a cohort

mod champion_cmd;
mod titles_cmd;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cupstats")]
#[command(about = "Cup bracket resolution and player title engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a day's champion from match results
    Champion(champion_cmd::ChampionArgs),
    /// Compute titles for every player of a scope
    Titles(titles_cmd::TitlesArgs),
    /// Print the award distribution for a scope
    Stats(titles_cmd::StatsArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Champion(args) => champion_cmd::run(args),
        Commands::Titles(args) => titles_cmd::run(args),
        Commands::Stats(args) => titles_cmd::run_stats(args),
    }
}
