//! The standard title catalog
//!
//! An immutable, versioned value constructed once and passed into the
//! evaluator - never a global singleton. Metric names follow the upstream
//! per-player aggregation.

use cupstats_core::{
    BandedMetric, Polarity, Predicate, TitleCategory, TitleDefinition, CHAMPION_FLAG,
    RUNNER_UP_FLAG,
};

/// Fixed set of title definitions for one catalog version
#[derive(Clone, Debug)]
pub struct TitleCatalog {
    version: u32,
    titles: Vec<TitleDefinition>,
}

impl TitleCatalog {
    pub fn new(version: u32, titles: Vec<TitleDefinition>) -> Self {
        Self { version, titles }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn titles(&self) -> &[TitleDefinition] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn by_name(&self, name: &str) -> Option<&TitleDefinition> {
        self.titles.iter().find(|t| t.name == name)
    }

    pub fn by_polarity(&self, polarity: Polarity) -> impl Iterator<Item = &TitleDefinition> {
        self.titles.iter().filter(move |t| t.polarity == polarity)
    }

    /// The standard catalog shipped with the engine
    pub fn standard() -> Self {
        Self::new(2, standard_titles())
    }
}

fn title(
    name: &str,
    description: &str,
    category: TitleCategory,
    polarity: Polarity,
    priority: i32,
    predicate: Predicate,
) -> TitleDefinition {
    TitleDefinition {
        name: name.to_string(),
        description: description.to_string(),
        category,
        polarity,
        priority,
        predicate,
    }
}

fn extreme_max(metric: &str) -> Predicate {
    Predicate::ExtremeMax {
        metric: metric.to_string(),
    }
}

fn top_n(metric: &str) -> Predicate {
    Predicate::TopN {
        metric: metric.to_string(),
    }
}

fn bottom_n(metric: &str) -> Predicate {
    Predicate::BottomN {
        metric: metric.to_string(),
    }
}

fn top_percentile(metric: &str) -> Predicate {
    Predicate::TopPercentile {
        metric: metric.to_string(),
    }
}

fn bottom_percentile(metric: &str) -> Predicate {
    Predicate::BottomPercentile {
        metric: metric.to_string(),
    }
}

fn above(metric: &str, threshold: f64) -> Predicate {
    Predicate::AboveThreshold {
        metric: metric.to_string(),
        threshold,
    }
}

fn below(metric: &str, threshold: f64) -> Predicate {
    Predicate::BelowThreshold {
        metric: metric.to_string(),
        threshold,
    }
}

fn standard_titles() -> Vec<TitleDefinition> {
    use Polarity::{Negative, Neutral, Positive};
    use TitleCategory::{Achievement, Consistency, Killing, Skill, Survival, Teamwork};

    vec![
        // Killing
        title(
            "Kill Leader",
            "Most kills in the field",
            Killing,
            Positive,
            4,
            extreme_max("total_kills"),
        ),
        title(
            "Headshot Master",
            "Headshot ratio above 60%",
            Killing,
            Positive,
            3,
            above("avg_headshot_ratio", 0.6),
        ),
        title(
            "Sniper God",
            "Most AWP kills in the field",
            Killing,
            Positive,
            3,
            extreme_max("total_snipe_num"),
        ),
        title(
            "Multi-Kill Machine",
            "Among the most multi-kill rounds",
            Killing,
            Positive,
            2,
            top_n("total_multi_kills"),
        ),
        title(
            "Entry King",
            "Among the most opening kills",
            Killing,
            Positive,
            2,
            top_n("total_first_kills"),
        ),
        // Survival
        title(
            "Clutch King",
            "Won a 1v5 - nobody else did it more",
            Survival,
            Positive,
            5,
            extreme_max("total_1v5"),
        ),
        title(
            "Phoenix",
            "K/D ratio above 2.0",
            Survival,
            Positive,
            4,
            above("kd_ratio", 2.0),
        ),
        title(
            "Armor Shredder",
            "Top tier armor damage per match",
            Survival,
            Positive,
            2,
            top_percentile("avg_damage_armar"),
        ),
        // Skill
        title(
            "Rating King",
            "Highest PW rating in the field",
            Skill,
            Positive,
            4,
            extreme_max("avg_pw_rating"),
        ),
        title(
            "Damage Dealer",
            "Top tier average damage per round",
            Skill,
            Positive,
            3,
            top_percentile("avg_adpr"),
        ),
        // Teamwork
        title(
            "Team Brain",
            "Most assists in the field",
            Teamwork,
            Positive,
            2,
            extreme_max("total_assists"),
        ),
        title(
            "Flash Expert",
            "Flash success ratio above 70%",
            Teamwork,
            Positive,
            2,
            above("flash_success_ratio", 0.7),
        ),
        title(
            "Utility Master",
            "Among the heaviest utility users",
            Teamwork,
            Positive,
            1,
            top_n("total_throws_count"),
        ),
        // Achievement
        title(
            "Cup Champion",
            "Lifted the trophy",
            Achievement,
            Positive,
            5,
            above(CHAMPION_FLAG, 0.5),
        ),
        title(
            "Ace Collector",
            "More than two aces",
            Achievement,
            Positive,
            5,
            above("total_5k", 2.0),
        ),
        title(
            "MVP Harvester",
            "Among the most match MVPs",
            Achievement,
            Positive,
            4,
            top_n("match_mvp_count"),
        ),
        title(
            "Serial Winner",
            "Win rate above 80%",
            Achievement,
            Positive,
            4,
            above("win_rate", 0.8),
        ),
        // Consistency
        title(
            "Steady Performer",
            "Average RWS above 15",
            Consistency,
            Positive,
            2,
            above("avg_rws", 15.0),
        ),
        title(
            "Iron Man",
            "Most maps played in the field",
            Consistency,
            Positive,
            1,
            extreme_max("match_count"),
        ),
        // Negative
        title(
            "Death Magnet",
            "Most deaths in the field",
            Survival,
            Negative,
            1,
            extreme_max("total_deaths"),
        ),
        title(
            "Entry Fodder",
            "Among the most opening deaths",
            Survival,
            Negative,
            2,
            top_n("total_first_deaths"),
        ),
        title(
            "Paper Shield",
            "K/D ratio below 0.5",
            Survival,
            Negative,
            3,
            below("kd_ratio", 0.5),
        ),
        title(
            "Team Flasher",
            "Most teammates blinded in the field",
            Teamwork,
            Negative,
            2,
            extreme_max("total_flash_teammate"),
        ),
        title(
            "Whiff Master",
            "Among the lowest headshot ratios",
            Skill,
            Negative,
            2,
            bottom_n("avg_headshot_ratio"),
        ),
        title(
            "Wildcard",
            "PW rating below 0.8",
            Consistency,
            Negative,
            2,
            below("avg_pw_rating", 0.8),
        ),
        title(
            "Passenger",
            "High win rate carried by a low personal rating",
            Consistency,
            Negative,
            3,
            Predicate::Compound {
                first: BandedMetric::top("win_rate"),
                second: BandedMetric::bottom("avg_pw_rating"),
            },
        ),
        title(
            "Hard Luck",
            "Bottom tier win rate",
            Achievement,
            Negative,
            2,
            bottom_percentile("win_rate"),
        ),
        title(
            "Eternal Second",
            "Always the bridesmaid",
            Achievement,
            Negative,
            1,
            above(RUNNER_UP_FLAG, 0.5),
        ),
        // Neutral
        title(
            "Glass Cannon",
            "High kills and high deaths at once",
            Killing,
            Neutral,
            3,
            Predicate::Compound {
                first: BandedMetric::top("total_kills"),
                second: BandedMetric::top("total_deaths"),
            },
        ),
        title(
            "Volume Shooter",
            "Most shots fired in the field",
            Killing,
            Neutral,
            1,
            extreme_max("total_fire_count"),
        ),
    ]
}
