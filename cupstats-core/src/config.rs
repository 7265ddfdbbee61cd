//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Tunables for bracket resolution and title computation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum round-win tally before a champion may be crowned
    pub round_win_threshold: u32,
    /// Width of the TopN/BottomN membership tests
    pub top_n: usize,
    /// Width of the percentile bands, in percentile points
    pub percentile_band: f64,
    /// Hard cap on titles awarded to one player per scope
    pub max_titles: usize,
    /// Cap on positive-polarity titles within `max_titles`
    pub max_positive: usize,
    /// Cap on negative-polarity titles within `max_titles`
    pub max_negative: usize,
    /// Minimum priority admitted before the relaxation fallback
    pub priority_threshold: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            round_win_threshold: 3,
            top_n: 3,
            percentile_band: 10.0,
            max_titles: 10,
            max_positive: 7,
            max_negative: 3,
            priority_threshold: 2,
        }
    }
}

impl EngineConfig {
    pub fn with_round_win_threshold(mut self, threshold: u32) -> Self {
        self.round_win_threshold = threshold;
        self
    }

    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    pub fn with_percentile_band(mut self, band: f64) -> Self {
        self.percentile_band = band;
        self
    }

    pub fn with_max_titles(mut self, max: usize) -> Self {
        self.max_titles = max;
        self
    }

    pub fn with_priority_threshold(mut self, threshold: i32) -> Self {
        self.priority_threshold = threshold;
        self
    }

    /// Reject configurations that would silently award nothing or never
    /// crown a champion
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.max_titles == 0 {
            return Err(EngineError::InvalidConfig(
                "max_titles is zero; every award quota is empty".to_string(),
            ));
        }
        if self.round_win_threshold == 0 {
            return Err(EngineError::InvalidConfig(
                "round_win_threshold must be at least 1".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.percentile_band) {
            return Err(EngineError::InvalidConfig(format!(
                "percentile_band {} outside 0..=100",
                self.percentile_band
            )));
        }
        Ok(())
    }
}
