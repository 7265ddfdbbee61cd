//! Title evaluation - run every catalog predicate against one player
//!
//! A predicate that fails to evaluate (unknown metric, degenerate data)
//! disqualifies that single title only; the rest of the evaluation
//! continues unaffected.

use cupstats_core::ranking;
use cupstats_core::{
    AwardedTitle, Band, BandedMetric, Cohort, EngineConfig, EngineError, PlayerProfile, Polarity,
    Predicate, TitleCategory, TitleDefinition,
};

use crate::catalog::TitleCatalog;

/// A title the player qualifies for, with its continuous score
#[derive(Clone, Debug)]
pub struct QualifiedTitle {
    pub definition: TitleDefinition,
    pub score: f64,
}

impl QualifiedTitle {
    pub fn award(&self) -> AwardedTitle {
        AwardedTitle::from_definition(&self.definition, self.score)
    }
}

/// Evaluate every catalog definition against one player (Level 2 phase).
///
/// Returns the qualifying set sorted by (priority desc, score desc), with
/// a name-ascending tie-break for determinism.
pub fn evaluate_titles(
    profile: &PlayerProfile,
    cohort: &Cohort,
    catalog: &TitleCatalog,
    config: &EngineConfig,
) -> Vec<QualifiedTitle> {
    let mut qualified = Vec::new();

    for definition in catalog.titles() {
        match check_predicate(&definition.predicate, profile, cohort, config) {
            Ok(true) => {
                let score = title_score(definition, profile, cohort);
                qualified.push(QualifiedTitle {
                    definition: definition.clone(),
                    score,
                });
            }
            Ok(false) => {}
            Err(err) => {
                tracing::warn!(
                    player = %profile.player_id,
                    title = %definition.name,
                    error = %err,
                    "predicate evaluation failed, treating as non-qualification"
                );
            }
        }
    }

    qualified.sort_by(|a, b| {
        b.definition
            .priority
            .cmp(&a.definition.priority)
            .then_with(|| b.score.total_cmp(&a.score))
            .then_with(|| a.definition.name.cmp(&b.definition.name))
    });
    qualified
}

/// Check one predicate against the player and the frozen cohort
/// (Level 3 step)
fn check_predicate(
    predicate: &Predicate,
    profile: &PlayerProfile,
    cohort: &Cohort,
    config: &EngineConfig,
) -> Result<bool, EngineError> {
    match predicate {
        Predicate::ExtremeMax { metric } => {
            let value = metric_of(profile, metric)?;
            Ok(ranking::is_extreme_max(value, &cohort.metric_values(metric)))
        }
        Predicate::ExtremeMin { metric } => {
            let value = metric_of(profile, metric)?;
            Ok(ranking::is_extreme_min(value, &cohort.metric_values(metric)))
        }
        Predicate::TopN { metric } => {
            let value = metric_of(profile, metric)?;
            Ok(ranking::is_top_n(
                value,
                &cohort.metric_values(metric),
                config.top_n,
            ))
        }
        Predicate::BottomN { metric } => {
            let value = metric_of(profile, metric)?;
            Ok(ranking::is_bottom_n(
                value,
                &cohort.metric_values(metric),
                config.top_n,
            ))
        }
        Predicate::TopPercentile { metric } => {
            let value = metric_of(profile, metric)?;
            Ok(ranking::is_top_percentile(
                value,
                &cohort.metric_values(metric),
                config.percentile_band,
            ))
        }
        Predicate::BottomPercentile { metric } => {
            let value = metric_of(profile, metric)?;
            Ok(ranking::is_bottom_percentile(
                value,
                &cohort.metric_values(metric),
                config.percentile_band,
            ))
        }
        Predicate::AboveThreshold { metric, threshold } => {
            Ok(metric_of(profile, metric)? > *threshold)
        }
        Predicate::BelowThreshold { metric, threshold } => {
            Ok(metric_of(profile, metric)? < *threshold)
        }
        Predicate::Compound { first, second } => {
            Ok(band_hit(first, profile, cohort, config)?
                && band_hit(second, profile, cohort, config)?)
        }
    }
}

fn band_hit(
    banded: &BandedMetric,
    profile: &PlayerProfile,
    cohort: &Cohort,
    config: &EngineConfig,
) -> Result<bool, EngineError> {
    let value = metric_of(profile, &banded.metric)?;
    let values = cohort.metric_values(&banded.metric);
    Ok(match banded.band {
        Band::Top => ranking::is_top_percentile(value, &values, config.percentile_band),
        Band::Bottom => ranking::is_bottom_percentile(value, &values, config.percentile_band),
    })
}

fn metric_of(profile: &PlayerProfile, name: &str) -> Result<f64, EngineError> {
    profile
        .metric(name)
        .ok_or_else(|| EngineError::UnknownMetric(name.to_string()))
}

/// Continuous tie-break score for a qualified title (Level 3 step).
///
/// Base 1.0. Absolute-threshold titles add a capped ratio of a
/// category-specific metric; relative titles add the player's percentile
/// standing plus a flat bonus when they are exactly the cohort extreme.
fn title_score(definition: &TitleDefinition, profile: &PlayerProfile, cohort: &Cohort) -> f64 {
    let mut score = 1.0;

    if definition.predicate.is_absolute() {
        if let Some((metric, soft_cap)) = score_basis(definition.polarity, definition.category) {
            let raw = profile.metric(metric).unwrap_or(0.0);
            score += (raw / soft_cap).min(2.0);
        }
        return score;
    }

    let metric = definition.predicate.primary_metric();
    // The predicate already read this metric, so it is present
    let value = profile.metric(metric).unwrap_or(0.0);
    let values = cohort.metric_values(metric);

    score += ranking::percentile_rank(value, &values) / 100.0 * 2.0;

    let at_extreme = if definition.predicate.favors_minimum() {
        ranking::is_extreme_min(value, &values)
    } else {
        ranking::is_extreme_max(value, &values)
    };
    if at_extreme {
        score += 3.0;
    }

    score
}

/// Metric and soft cap backing the absolute score component, per
/// (polarity, category)
fn score_basis(polarity: Polarity, category: TitleCategory) -> Option<(&'static str, f64)> {
    match (polarity, category) {
        (Polarity::Positive, TitleCategory::Killing) => Some(("total_kills", 100.0)),
        (Polarity::Positive, TitleCategory::Survival) => Some(("kd_ratio", 2.0)),
        (Polarity::Positive, TitleCategory::Skill) => Some(("avg_pw_rating", 2.0)),
        (Polarity::Negative, TitleCategory::Survival) => Some(("total_deaths", 100.0)),
        (Polarity::Negative, TitleCategory::Teamwork) => Some(("total_flash_teammate", 10.0)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, pairs: &[(&str, f64)]) -> PlayerProfile {
        let mut p = PlayerProfile::new(id);
        for (name, value) in pairs {
            p = p.with_metric(*name, *value);
        }
        p
    }

    fn kills_cohort(values: &[f64]) -> (Vec<PlayerProfile>, Cohort) {
        let profiles: Vec<PlayerProfile> = values
            .iter()
            .enumerate()
            .map(|(i, v)| profile(&format!("p{i}"), &[("total_kills", *v)]))
            .collect();
        (profiles.clone(), Cohort::freeze(profiles))
    }

    fn catalog_of(titles: Vec<TitleDefinition>) -> TitleCatalog {
        TitleCatalog::new(1, titles)
    }

    fn kill_leader() -> TitleDefinition {
        TitleDefinition {
            name: "Kill Leader".to_string(),
            description: String::new(),
            category: TitleCategory::Killing,
            polarity: Polarity::Positive,
            priority: 4,
            predicate: Predicate::ExtremeMax {
                metric: "total_kills".to_string(),
            },
        }
    }

    #[test]
    fn test_extreme_max_tie_awards_both() {
        let (profiles, cohort) = kills_cohort(&[50.0, 80.0, 80.0, 20.0, 10.0]);
        let catalog = catalog_of(vec![kill_leader()]);
        let config = EngineConfig::default();

        let q1 = evaluate_titles(&profiles[1], &cohort, &catalog, &config);
        let q2 = evaluate_titles(&profiles[2], &cohort, &catalog, &config);
        assert_eq!(q1.len(), 1);
        assert_eq!(q2.len(), 1);

        let q0 = evaluate_titles(&profiles[0], &cohort, &catalog, &config);
        assert!(q0.is_empty());
    }

    #[test]
    fn test_all_zero_cohort_awards_nobody() {
        let (profiles, cohort) = kills_cohort(&[0.0, 0.0, 0.0]);
        let catalog = catalog_of(vec![kill_leader()]);
        let config = EngineConfig::default();

        for p in &profiles {
            assert!(evaluate_titles(p, &cohort, &catalog, &config).is_empty());
        }
    }

    #[test]
    fn test_extreme_score_gets_percentile_and_bonus() {
        let (profiles, cohort) = kills_cohort(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let catalog = catalog_of(vec![kill_leader()]);
        let config = EngineConfig::default();

        let q = evaluate_titles(&profiles[4], &cohort, &catalog, &config);
        // base 1.0 + percentile 100/100*2.0 + extreme bonus 3.0
        assert_eq!(q[0].score, 6.0);
    }

    #[test]
    fn test_absolute_score_uses_category_basis() {
        let p = profile("p1", &[("kd_ratio", 3.0)]);
        let cohort = Cohort::freeze(vec![p.clone()]);
        let phoenix = TitleDefinition {
            name: "Phoenix".to_string(),
            description: String::new(),
            category: TitleCategory::Survival,
            polarity: Polarity::Positive,
            priority: 4,
            predicate: Predicate::AboveThreshold {
                metric: "kd_ratio".to_string(),
                threshold: 2.0,
            },
        };
        let q = evaluate_titles(&p, &cohort, &catalog_of(vec![phoenix]), &EngineConfig::default());
        // base 1.0 + min(3.0 / 2.0, 2.0)
        assert_eq!(q[0].score, 2.5);
    }

    #[test]
    fn test_unknown_metric_skips_only_that_title() {
        let p = profile("p1", &[("kd_ratio", 3.0)]);
        let cohort = Cohort::freeze(vec![p.clone()]);
        let broken = TitleDefinition {
            name: "Broken".to_string(),
            description: String::new(),
            category: TitleCategory::Skill,
            polarity: Polarity::Positive,
            priority: 5,
            predicate: Predicate::AboveThreshold {
                metric: "no_such_metric".to_string(),
                threshold: 1.0,
            },
        };
        let phoenix = TitleDefinition {
            name: "Phoenix".to_string(),
            description: String::new(),
            category: TitleCategory::Survival,
            polarity: Polarity::Positive,
            priority: 4,
            predicate: Predicate::AboveThreshold {
                metric: "kd_ratio".to_string(),
                threshold: 2.0,
            },
        };

        let q = evaluate_titles(
            &p,
            &cohort,
            &catalog_of(vec![broken, phoenix]),
            &EngineConfig::default(),
        );
        assert_eq!(q.len(), 1);
        assert_eq!(q[0].definition.name, "Phoenix");
    }

    #[test]
    fn test_compound_requires_both_bands() {
        let mut profiles = Vec::new();
        for i in 0..11 {
            profiles.push(profile(
                &format!("p{i}"),
                &[
                    ("total_kills", i as f64),
                    ("total_deaths", (10 - i) as f64),
                ],
            ));
        }
        // p10: top kills but bottom deaths - both-top compound must fail
        let glass_cannon = TitleDefinition {
            name: "Glass Cannon".to_string(),
            description: String::new(),
            category: TitleCategory::Killing,
            polarity: Polarity::Neutral,
            priority: 3,
            predicate: Predicate::Compound {
                first: BandedMetric::top("total_kills"),
                second: BandedMetric::top("total_deaths"),
            },
        };
        let catalog = catalog_of(vec![glass_cannon]);
        let config = EngineConfig::default();
        let cohort = Cohort::freeze(profiles.clone());

        assert!(evaluate_titles(&profiles[10], &cohort, &catalog, &config).is_empty());

        // A player high on both metrics qualifies
        let juggernaut = profile("px", &[("total_kills", 10.0), ("total_deaths", 10.0)]);
        let mut with_both = profiles;
        with_both.push(juggernaut.clone());
        let cohort = Cohort::freeze(with_both);
        assert_eq!(
            evaluate_titles(&juggernaut, &cohort, &catalog, &config).len(),
            1
        );
    }

    #[test]
    fn test_sorted_by_priority_then_score() {
        let p = profile("p1", &[("kd_ratio", 5.0), ("avg_rws", 20.0)]);
        let cohort = Cohort::freeze(vec![p.clone()]);
        let phoenix = TitleDefinition {
            name: "Phoenix".to_string(),
            description: String::new(),
            category: TitleCategory::Survival,
            polarity: Polarity::Positive,
            priority: 4,
            predicate: Predicate::AboveThreshold {
                metric: "kd_ratio".to_string(),
                threshold: 2.0,
            },
        };
        let steady = TitleDefinition {
            name: "Steady Performer".to_string(),
            description: String::new(),
            category: TitleCategory::Consistency,
            polarity: Polarity::Positive,
            priority: 2,
            predicate: Predicate::AboveThreshold {
                metric: "avg_rws".to_string(),
                threshold: 15.0,
            },
        };

        let q = evaluate_titles(
            &p,
            &cohort,
            &catalog_of(vec![steady, phoenix]),
            &EngineConfig::default(),
        );
        assert_eq!(q[0].definition.name, "Phoenix");
        assert_eq!(q[1].definition.name, "Steady Performer");
    }
}
