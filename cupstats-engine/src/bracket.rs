//! Bracket resolution - infer champion and runner-up from match outcomes
//!
//! The day's bracket is never given explicitly. Matches are routed into
//! pairings (the unordered set of two teams that met), a pairing's winner
//! earns one round win at two match wins (best-of-3), and the champion is
//! the team with the most round wins once enough rounds completed.

use rustc_hash::FxHashMap;

use cupstats_core::{ChampionRecord, ChampionStore, EngineConfig, EngineError, MatchRecord};

/// Two teams that met within a day, with per-team match-win counters
/// scoped to this pairing only
#[derive(Clone, Debug)]
pub struct Pairing {
    /// Team names, lexicographically ordered
    pub teams: [String; 2],
    pub wins: [u32; 2],
    /// Latest end time among this pairing's matches
    pub latest_end_time: i64,
}

impl Pairing {
    fn new(team_a: &str, team_b: &str) -> Self {
        let (first, second) = if team_a <= team_b {
            (team_a, team_b)
        } else {
            (team_b, team_a)
        };
        Self {
            teams: [first.to_string(), second.to_string()],
            wins: [0, 0],
            latest_end_time: i64::MIN,
        }
    }

    fn record_win(&mut self, team: &str, end_time: i64) {
        if self.teams[0] == team {
            self.wins[0] += 1;
        } else if self.teams[1] == team {
            self.wins[1] += 1;
        }
        self.latest_end_time = self.latest_end_time.max(end_time);
    }

    pub fn contains(&self, team: &str) -> bool {
        self.teams[0] == team || self.teams[1] == team
    }

    pub fn opponent_of(&self, team: &str) -> Option<&str> {
        if self.teams[0] == team {
            Some(&self.teams[1])
        } else if self.teams[1] == team {
            Some(&self.teams[0])
        } else {
            None
        }
    }

    /// Teams credited with a round win for this pairing: at least two
    /// match wins, exactly one credit no matter how many more matches
    /// were played after the pairing was decided
    pub fn round_winners(&self) -> impl Iterator<Item = &str> {
        self.teams
            .iter()
            .zip(self.wins.iter())
            .filter(|(_, wins)| **wins >= 2)
            .map(|(team, _)| team.as_str())
    }
}

/// Result of pure bracket resolution over one day's matches
#[derive(Clone, Debug, PartialEq)]
pub enum BracketOutcome {
    Resolved {
        champion: String,
        runner_up: Option<String>,
    },
    /// Too few completed rounds to crown a champion; expected mid-cup,
    /// not an error
    Inconclusive { max_round_wins: u32 },
    /// No match carried a usable winner
    NoMatches,
}

/// Outcome of the full resolve-and-persist operation
#[derive(Clone, Debug)]
pub enum ResolveStatus {
    Written(ChampionRecord),
    /// A record already exists for this (cup, day); guaranteed no-op
    AlreadyResolved,
    Inconclusive { max_round_wins: u32 },
    NoMatches,
}

/// Group matches into pairings, ordered by team names for deterministic
/// downstream iteration. Winnerless matches are skipped.
fn build_pairings(matches: &[MatchRecord]) -> Vec<Pairing> {
    let mut by_key: FxHashMap<(String, String), Pairing> = FxHashMap::default();

    for record in matches {
        let Some(winner) = record.winner() else {
            tracing::debug!(
                team1 = %record.team1_name,
                team2 = %record.team2_name,
                "match has no winner, excluded from bracket"
            );
            continue;
        };
        let pairing = by_key
            .entry(pairing_key(&record.team1_name, &record.team2_name))
            .or_insert_with(|| Pairing::new(&record.team1_name, &record.team2_name));
        pairing.record_win(winner, record.end_time);
    }

    let mut pairings: Vec<Pairing> = by_key.into_values().collect();
    pairings.sort_by(|a, b| a.teams.cmp(&b.teams));
    pairings
}

fn pairing_key(team_a: &str, team_b: &str) -> (String, String) {
    if team_a <= team_b {
        (team_a.to_string(), team_b.to_string())
    } else {
        (team_b.to_string(), team_a.to_string())
    }
}

/// Resolve a day's bracket from its match list (Level 3 step).
///
/// Tie-breaks are deterministic: a tied champion tally and a tied latest
/// end time both resolve to the lexicographically smaller team name.
pub fn resolve_bracket(matches: &[MatchRecord], config: &EngineConfig) -> BracketOutcome {
    let pairings = build_pairings(matches);
    if pairings.is_empty() {
        return BracketOutcome::NoMatches;
    }

    // Round-win tally across all pairings
    let mut tally: FxHashMap<&str, u32> = FxHashMap::default();
    for pairing in &pairings {
        for team in pairing.round_winners() {
            *tally.entry(team).or_insert(0) += 1;
        }
    }

    let Some((champion, max_round_wins)) = tally
        .iter()
        .map(|(team, wins)| (*team, *wins))
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
    else {
        return BracketOutcome::Inconclusive { max_round_wins: 0 };
    };

    if max_round_wins < config.round_win_threshold {
        return BracketOutcome::Inconclusive { max_round_wins };
    }

    // Final pairing: the champion's pairing with the latest end time.
    // Pairings are name-sorted, so max_by keeps the lexicographically
    // larger opponent on time ties; prefer the smaller one explicitly.
    let final_pairing = pairings
        .iter()
        .filter(|p| p.contains(champion))
        .max_by(|a, b| {
            a.latest_end_time
                .cmp(&b.latest_end_time)
                .then_with(|| b.teams.cmp(&a.teams))
        });

    let runner_up = final_pairing
        .and_then(|p| p.opponent_of(champion))
        .map(str::to_string);

    BracketOutcome::Resolved {
        champion: champion.to_string(),
        runner_up,
    }
}

/// Resolve a day's champion and persist exactly one record (Level 2 phase).
///
/// Re-invoking for an already-resolved (cup, day) is a guaranteed no-op;
/// the record is never overwritten.
pub fn resolve_champion<S, F>(
    matches: &[MatchRecord],
    roster_lookup: F,
    store: &S,
    cup_name: &str,
    day: &str,
    config: &EngineConfig,
) -> Result<ResolveStatus, EngineError>
where
    S: ChampionStore + ?Sized,
    F: Fn(&str) -> Vec<String>,
{
    config.validate()?;

    if store.contains(cup_name, day)? {
        tracing::info!(cup = cup_name, day, "champion already resolved, skipping");
        return Ok(ResolveStatus::AlreadyResolved);
    }

    match resolve_bracket(matches, config) {
        BracketOutcome::NoMatches => {
            tracing::info!(cup = cup_name, day, "no usable matches for the day");
            Ok(ResolveStatus::NoMatches)
        }
        BracketOutcome::Inconclusive { max_round_wins } => {
            tracing::info!(
                cup = cup_name,
                day,
                max_round_wins,
                threshold = config.round_win_threshold,
                "not enough completed rounds to crown a champion"
            );
            Ok(ResolveStatus::Inconclusive { max_round_wins })
        }
        BracketOutcome::Resolved {
            champion,
            runner_up,
        } => {
            let champion_players = roster_lookup(&champion);
            let runner_up_players = runner_up
                .as_deref()
                .map(|team| roster_lookup(team))
                .unwrap_or_default();

            let record = ChampionRecord {
                cup_name: cup_name.to_string(),
                day: day.to_string(),
                champion_team: champion,
                runner_up_team: runner_up,
                champion_players,
                runner_up_players,
            };
            store.insert(record.clone())?;
            tracing::info!(
                cup = cup_name,
                day,
                champion = %record.champion_team,
                runner_up = record.runner_up_team.as_deref().unwrap_or("-"),
                "champion record written"
            );
            Ok(ResolveStatus::Written(record))
        }
    }
}
