//! Cupstats Core - Data model and ranking primitives
//!
//! This crate provides the shared foundation for the cup analytics engines:
//! - Match, champion and scope records
//! - Player performance profiles and frozen cohorts
//! - Pure ranking helpers (extremes, top-N, percentile bands)
//! - Engine configuration and error types
//! - Store traits with an in-memory reference implementation

pub mod config;
pub mod error;
pub mod profile;
pub mod ranking;
pub mod record;
pub mod store;
pub mod title;

// Re-exports for convenient access
pub use config::EngineConfig;
pub use error::EngineError;
pub use profile::{merge_champion_flags, Cohort, PlayerProfile, CHAMPION_FLAG, RUNNER_UP_FLAG};
pub use record::{ChampionRecord, MatchRecord, Scope};
pub use store::{ChampionStore, MemoryStore, TitleStore};
pub use title::{
    AwardedTitle, Band, BandedMetric, Polarity, Predicate, TitleCategory, TitleDefinition,
};
