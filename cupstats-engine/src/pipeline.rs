//! Scope-level orchestration (Level 1)
//!
//! One pass per scope: freeze the cohort, fan per-player evaluation and
//! selection out across the rayon pool (workers share only read access to
//! the frozen cohort), then hand each player's awarded set to the store as
//! a full replace.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;

use cupstats_core::{
    AwardedTitle, Cohort, EngineConfig, EngineError, PlayerProfile, Polarity, Scope, TitleStore,
};

use crate::catalog::TitleCatalog;
use crate::evaluator::evaluate_titles;
use crate::selector::select_titles;

/// One player's awarded set for a scope
#[derive(Clone, Debug, Serialize)]
pub struct PlayerTitles {
    pub player_id: String,
    pub titles: Vec<AwardedTitle>,
}

/// Compute awarded titles for every player of a scope.
///
/// The cohort is frozen before any player is evaluated, so every relative
/// predicate sees the same comparison set.
pub fn compute_titles(
    profiles: Vec<PlayerProfile>,
    catalog: &TitleCatalog,
    config: &EngineConfig,
) -> Result<Vec<PlayerTitles>, EngineError> {
    config.validate()?;
    let cohort = Cohort::freeze(profiles);

    cohort
        .profiles()
        .par_iter()
        .map(|profile| {
            let qualified = evaluate_titles(profile, &cohort, catalog, config);
            let titles = select_titles(&qualified, config)?;
            Ok(PlayerTitles {
                player_id: profile.player_id.clone(),
                titles,
            })
        })
        .collect()
}

/// Compute and persist titles for every player of a scope.
///
/// Each player's stored set is fully replaced; a player whose fresh set is
/// empty gets the stored set cleared rather than left stale. Returns the
/// number of players that ended up with at least one title.
pub fn compute_and_store_titles<S>(
    profiles: Vec<PlayerProfile>,
    catalog: &TitleCatalog,
    config: &EngineConfig,
    store: &S,
    scope: &Scope,
) -> Result<usize, EngineError>
where
    S: TitleStore + ?Sized,
{
    let results = compute_titles(profiles, catalog, config)?;

    let mut awarded_players = 0;
    for result in &results {
        store.replace(&result.player_id, scope, result.titles.clone())?;
        if !result.titles.is_empty() {
            awarded_players += 1;
        }
    }
    tracing::info!(
        %scope,
        players = results.len(),
        awarded_players,
        "title computation complete"
    );
    Ok(awarded_players)
}

/// Distribution statistics over one scope's awarded sets
#[derive(Clone, Debug, Default, Serialize)]
pub struct AwardSummary {
    pub players: usize,
    pub players_with_titles: usize,
    pub total_titles: usize,
    pub max_titles_per_player: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Title name -> number of players holding it, name-ordered
    pub by_title: BTreeMap<String, usize>,
}

pub fn award_summary(results: &[PlayerTitles]) -> AwardSummary {
    let mut summary = AwardSummary {
        players: results.len(),
        ..Default::default()
    };

    for result in results {
        if result.titles.is_empty() {
            continue;
        }
        summary.players_with_titles += 1;
        summary.total_titles += result.titles.len();
        summary.max_titles_per_player = summary.max_titles_per_player.max(result.titles.len());

        for title in &result.titles {
            match title.polarity {
                Polarity::Positive => summary.positive += 1,
                Polarity::Negative => summary.negative += 1,
                Polarity::Neutral => summary.neutral += 1,
            }
            *summary.by_title.entry(title.name.clone()).or_insert(0) += 1;
        }
    }

    summary
}
