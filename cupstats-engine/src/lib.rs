//! Cupstats Engine - Bracket resolution and title computation
//!
//! This crate provides the two analytical engines of the cup stats system:
//! - Bracket resolution: infer a day's champion and runner-up purely from
//!   match outcomes, without an explicit bracket structure
//! - Title computation: evaluate a fixed catalog of achievement badges
//!   against each player's profile and the frozen cohort, then shrink the
//!   qualifying set under quota and priority constraints
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: pipeline (scope orchestration, rayon fan-out, store writes)
//! - Level 2: resolve_champion, evaluate_titles, select_titles (phases)
//! - Level 3: resolve_bracket, predicate checks, title scoring (steps)
//! - Level 4: catalog data, configuration

mod bracket;
mod catalog;
mod evaluator;
mod pipeline;
mod selector;

pub use bracket::{resolve_bracket, resolve_champion, BracketOutcome, Pairing, ResolveStatus};
pub use catalog::TitleCatalog;
pub use evaluator::{evaluate_titles, QualifiedTitle};
pub use pipeline::{
    award_summary, compute_and_store_titles, compute_titles, AwardSummary, PlayerTitles,
};
pub use selector::select_titles;
