//! Match, scope and champion records

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One played map between two teams
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchRecord {
    pub team1_name: String,
    pub team2_name: String,
    pub team1_score: u32,
    pub team2_score: u32,
    /// Match end time, epoch milliseconds
    pub end_time: i64,
}

impl MatchRecord {
    pub fn new(
        team1: impl Into<String>,
        team2: impl Into<String>,
        score1: u32,
        score2: u32,
        end_time: i64,
    ) -> Self {
        Self {
            team1_name: team1.into(),
            team2_name: team2.into(),
            team1_score: score1,
            team2_score: score2,
            end_time,
        }
    }

    /// Team with the strictly higher score. `None` when a team name is
    /// missing or the scores are level; such records carry no bracket
    /// information.
    pub fn winner(&self) -> Option<&str> {
        if self.team1_name.is_empty() || self.team2_name.is_empty() {
            return None;
        }
        match self.team1_score.cmp(&self.team2_score) {
            Ordering::Greater => Some(&self.team1_name),
            Ordering::Less => Some(&self.team2_name),
            Ordering::Equal => None,
        }
    }

    /// Whether this match was played between exactly these two teams
    pub fn involves(&self, team_a: &str, team_b: &str) -> bool {
        (self.team1_name == team_a && self.team2_name == team_b)
            || (self.team1_name == team_b && self.team2_name == team_a)
    }
}

/// Ranking scope: a single competition day, or the whole cup when the day
/// is absent
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    pub cup_name: String,
    pub play_day: Option<String>,
}

impl Scope {
    /// Whole-cup scope
    pub fn cup(cup_name: impl Into<String>) -> Self {
        Self {
            cup_name: cup_name.into(),
            play_day: None,
        }
    }

    /// Single-day scope
    pub fn day(cup_name: impl Into<String>, play_day: impl Into<String>) -> Self {
        Self {
            cup_name: cup_name.into(),
            play_day: Some(play_day.into()),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.play_day {
            Some(day) => write!(f, "{}/{}", self.cup_name, day),
            None => write!(f, "{}/cup", self.cup_name),
        }
    }
}

/// Resolved champion and runner-up for one competition day.
/// Write-once per (cup, day); never overwritten.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChampionRecord {
    pub cup_name: String,
    pub day: String,
    pub champion_team: String,
    /// Absent when no final pairing could be identified
    pub runner_up_team: Option<String>,
    pub champion_players: Vec<String>,
    pub runner_up_players: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_strict_score() {
        let m = MatchRecord::new("A", "B", 16, 10, 1000);
        assert_eq!(m.winner(), Some("A"));

        let m = MatchRecord::new("A", "B", 9, 16, 1000);
        assert_eq!(m.winner(), Some("B"));
    }

    #[test]
    fn test_winner_none_on_draw_or_missing_name() {
        let m = MatchRecord::new("A", "B", 15, 15, 1000);
        assert_eq!(m.winner(), None);

        let m = MatchRecord::new("", "B", 16, 2, 1000);
        assert_eq!(m.winner(), None);

        let m = MatchRecord::new("A", "", 2, 16, 1000);
        assert_eq!(m.winner(), None);
    }

    #[test]
    fn test_involves_is_unordered() {
        let m = MatchRecord::new("A", "B", 16, 10, 1000);
        assert!(m.involves("A", "B"));
        assert!(m.involves("B", "A"));
        assert!(!m.involves("A", "C"));
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(Scope::day("major", "20250101").to_string(), "major/20250101");
        assert_eq!(Scope::cup("major").to_string(), "major/cup");
    }
}
