//! Player performance profiles and frozen cohorts

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::record::ChampionRecord;

/// Pseudo-metric name exposing the champion flag as 0/1
pub const CHAMPION_FLAG: &str = "is_champion";
/// Pseudo-metric name exposing the runner-up flag as 0/1
pub const RUNNER_UP_FLAG: &str = "is_runner_up";

/// Aggregated per-player statistics for one scope.
///
/// The metric map is produced by the upstream aggregation (total_kills,
/// total_deaths, kd_ratio, win_rate, avg_pw_rating, ...); this crate treats
/// it as read-only input. The champion flags are merged in from a prior
/// [`ChampionRecord`] lookup before title evaluation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player_id: String,
    #[serde(default)]
    pub metrics: FxHashMap<String, f64>,
    #[serde(default)]
    pub is_champion: bool,
    #[serde(default)]
    pub is_runner_up: bool,
}

impl PlayerProfile {
    pub fn new(player_id: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            ..Default::default()
        }
    }

    /// Set a metric value (builder style)
    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(name.into(), value);
        self
    }

    /// Look up a metric value. The champion flags are visible as the
    /// pseudo-metrics [`CHAMPION_FLAG`] and [`RUNNER_UP_FLAG`] valued 0/1,
    /// so absolute-threshold predicates cover them uniformly.
    pub fn metric(&self, name: &str) -> Option<f64> {
        match name {
            CHAMPION_FLAG => Some(if self.is_champion { 1.0 } else { 0.0 }),
            RUNNER_UP_FLAG => Some(if self.is_runner_up { 1.0 } else { 0.0 }),
            _ => self.metrics.get(name).copied(),
        }
    }
}

/// The frozen set of player profiles being compared for one scope.
///
/// A cohort is materialized once, before any relative predicate runs;
/// evaluating players against a growing or partial cohort would produce
/// inconsistent rankings.
#[derive(Clone, Debug, Default)]
pub struct Cohort {
    profiles: Vec<PlayerProfile>,
}

impl Cohort {
    /// Freeze the given profiles as the comparison set
    pub fn freeze(profiles: Vec<PlayerProfile>) -> Self {
        Self { profiles }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn profiles(&self) -> &[PlayerProfile] {
        &self.profiles
    }

    /// All cohort values for one metric; players missing the metric are
    /// skipped rather than counted as zero
    pub fn metric_values(&self, name: &str) -> Vec<f64> {
        self.profiles
            .iter()
            .filter_map(|p| p.metric(name))
            .collect()
    }
}

/// Stamp `is_champion` / `is_runner_up` onto the rostered players of a
/// resolved day. Profiles outside both rosters are left untouched.
pub fn merge_champion_flags(profiles: &mut [PlayerProfile], record: &ChampionRecord) {
    for profile in profiles.iter_mut() {
        if record.champion_players.contains(&profile.player_id) {
            profile.is_champion = true;
        } else if record.runner_up_players.contains(&profile.player_id) {
            profile.is_runner_up = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, kills: f64) -> PlayerProfile {
        PlayerProfile::new(id).with_metric("total_kills", kills)
    }

    #[test]
    fn test_metric_lookup_and_flags() {
        let mut p = profile("p1", 42.0);
        assert_eq!(p.metric("total_kills"), Some(42.0));
        assert_eq!(p.metric("total_deaths"), None);
        assert_eq!(p.metric(CHAMPION_FLAG), Some(0.0));

        p.is_champion = true;
        assert_eq!(p.metric(CHAMPION_FLAG), Some(1.0));
        assert_eq!(p.metric(RUNNER_UP_FLAG), Some(0.0));
    }

    #[test]
    fn test_cohort_metric_values_skip_missing() {
        let cohort = Cohort::freeze(vec![
            profile("p1", 10.0),
            PlayerProfile::new("p2"),
            profile("p3", 30.0),
        ]);
        assert_eq!(cohort.len(), 3);
        assert_eq!(cohort.metric_values("total_kills"), vec![10.0, 30.0]);
    }

    #[test]
    fn test_merge_champion_flags_only_rostered() {
        let record = ChampionRecord {
            cup_name: "major".to_string(),
            day: "20250101".to_string(),
            champion_team: "A".to_string(),
            runner_up_team: Some("B".to_string()),
            champion_players: vec!["p1".to_string()],
            runner_up_players: vec!["p2".to_string()],
        };

        let mut profiles = vec![
            PlayerProfile::new("p1"),
            PlayerProfile::new("p2"),
            PlayerProfile::new("p3"),
        ];
        merge_champion_flags(&mut profiles, &record);

        assert!(profiles[0].is_champion && !profiles[0].is_runner_up);
        assert!(!profiles[1].is_champion && profiles[1].is_runner_up);
        assert!(!profiles[2].is_champion && !profiles[2].is_runner_up);
    }
}
