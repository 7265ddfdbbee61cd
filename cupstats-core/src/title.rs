//! Title definitions and awards
//!
//! A title's condition is a fixed, serializable predicate kind carrying
//! metric names and numeric parameters as data, never an arbitrary closure.
//! This keeps the catalog independently testable and free of embedded logic
//! that can silently diverge between entries.

use serde::{Deserialize, Serialize};

/// Title category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleCategory {
    Killing,
    Survival,
    Skill,
    Teamwork,
    Achievement,
    Consistency,
}

/// Title polarity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

/// End of the cohort distribution a band test looks at
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Top,
    Bottom,
}

/// One half of a compound predicate: a percentile-band test on one metric
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BandedMetric {
    pub metric: String,
    pub band: Band,
}

impl BandedMetric {
    pub fn top(metric: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            band: Band::Top,
        }
    }

    pub fn bottom(metric: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            band: Band::Bottom,
        }
    }
}

/// Qualification condition of a title
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Predicate {
    /// Value equals the cohort maximum (and is strictly positive)
    ExtremeMax { metric: String },
    /// Value equals the cohort minimum
    ExtremeMin { metric: String },
    /// Value ranks within the best N of the cohort (N from config)
    TopN { metric: String },
    /// Value ranks within the worst N of the cohort
    BottomN { metric: String },
    /// Percentile rank inside the top band (band width from config)
    TopPercentile { metric: String },
    /// Percentile rank inside the bottom band
    BottomPercentile { metric: String },
    /// Value strictly above a fixed constant; no cohort needed
    AboveThreshold { metric: String, threshold: f64 },
    /// Value strictly below a fixed constant
    BelowThreshold { metric: String, threshold: f64 },
    /// Simultaneously inside the band on two distinct metrics
    Compound {
        first: BandedMetric,
        second: BandedMetric,
    },
}

impl Predicate {
    /// Metric driving the relative score component of this predicate
    pub fn primary_metric(&self) -> &str {
        match self {
            Predicate::ExtremeMax { metric }
            | Predicate::ExtremeMin { metric }
            | Predicate::TopN { metric }
            | Predicate::BottomN { metric }
            | Predicate::TopPercentile { metric }
            | Predicate::BottomPercentile { metric }
            | Predicate::AboveThreshold { metric, .. }
            | Predicate::BelowThreshold { metric, .. } => metric,
            Predicate::Compound { first, .. } => &first.metric,
        }
    }

    /// Whether this predicate rewards crossing a fixed constant rather
    /// than standing in the cohort
    pub fn is_absolute(&self) -> bool {
        matches!(
            self,
            Predicate::AboveThreshold { .. } | Predicate::BelowThreshold { .. }
        )
    }

    /// Whether the predicate singles out the low end of the distribution
    pub fn favors_minimum(&self) -> bool {
        match self {
            Predicate::ExtremeMin { .. }
            | Predicate::BottomN { .. }
            | Predicate::BottomPercentile { .. }
            | Predicate::BelowThreshold { .. } => true,
            Predicate::Compound { first, .. } => first.band == Band::Bottom,
            _ => false,
        }
    }
}

/// One catalog entry: what the badge is and when it applies
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TitleDefinition {
    pub name: String,
    pub description: String,
    pub category: TitleCategory,
    pub polarity: Polarity,
    /// Higher = more important; drives selection order
    pub priority: i32,
    pub predicate: Predicate,
}

/// A title actually granted to a player, with its continuous tie-break
/// score (not a hard gate)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AwardedTitle {
    pub name: String,
    pub description: String,
    pub category: TitleCategory,
    pub polarity: Polarity,
    pub priority: i32,
    pub score: f64,
}

impl AwardedTitle {
    pub fn from_definition(definition: &TitleDefinition, score: f64) -> Self {
        Self {
            name: definition.name.clone(),
            description: definition.description.clone(),
            category: definition.category,
            polarity: definition.polarity,
            priority: definition.priority,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_roundtrips_as_data() {
        let pred = Predicate::Compound {
            first: BandedMetric::top("total_kills"),
            second: BandedMetric::top("total_deaths"),
        };
        let json = serde_json::to_string(&pred).unwrap();
        assert!(json.contains("\"kind\":\"compound\""));
        let back: Predicate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pred);
    }

    #[test]
    fn test_primary_metric_and_direction() {
        let pred = Predicate::BottomPercentile {
            metric: "win_rate".to_string(),
        };
        assert_eq!(pred.primary_metric(), "win_rate");
        assert!(pred.favors_minimum());
        assert!(!pred.is_absolute());

        let pred = Predicate::AboveThreshold {
            metric: "kd_ratio".to_string(),
            threshold: 2.0,
        };
        assert!(pred.is_absolute());
        assert!(!pred.favors_minimum());
    }
}
