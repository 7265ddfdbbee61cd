//! Store traits for the persistence collaborator
//!
//! The engines never own long-lived state; they hand finished records to
//! whatever implements these traits. [`MemoryStore`] backs tests and the
//! CLI harness.

use std::sync::Mutex;

use rustc_hash::FxHashMap;

use crate::error::EngineError;
use crate::record::{ChampionRecord, Scope};
use crate::title::AwardedTitle;

/// Write-once storage of per-day champion records
pub trait ChampionStore {
    fn contains(&self, cup_name: &str, day: &str) -> Result<bool, EngineError>;

    /// Insert a record atomically; errors if the (cup, day) key already
    /// exists. Callers must never observe a partial record.
    fn insert(&self, record: ChampionRecord) -> Result<(), EngineError>;

    fn get(&self, cup_name: &str, day: &str) -> Result<Option<ChampionRecord>, EngineError>;
}

/// Full-replace storage of per-player awarded titles
pub trait TitleStore {
    /// Replace the entire title set for (player, scope). Recomputation is
    /// an idempotent overwrite, never an append; an empty `titles` clears
    /// the stored set.
    fn replace(
        &self,
        player_id: &str,
        scope: &Scope,
        titles: Vec<AwardedTitle>,
    ) -> Result<(), EngineError>;

    fn get(&self, player_id: &str, scope: &Scope) -> Result<Vec<AwardedTitle>, EngineError>;
}

/// In-memory store for tests and the CLI
#[derive(Debug, Default)]
pub struct MemoryStore {
    champions: Mutex<FxHashMap<(String, String), ChampionRecord>>,
    titles: Mutex<FxHashMap<(String, Scope), Vec<AwardedTitle>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChampionStore for MemoryStore {
    fn contains(&self, cup_name: &str, day: &str) -> Result<bool, EngineError> {
        let champions = self
            .champions
            .lock()
            .map_err(|_| EngineError::Store("champion store lock poisoned".to_string()))?;
        Ok(champions.contains_key(&(cup_name.to_string(), day.to_string())))
    }

    fn insert(&self, record: ChampionRecord) -> Result<(), EngineError> {
        let mut champions = self
            .champions
            .lock()
            .map_err(|_| EngineError::Store("champion store lock poisoned".to_string()))?;
        let key = (record.cup_name.clone(), record.day.clone());
        if champions.contains_key(&key) {
            return Err(EngineError::Store(format!(
                "champion record already exists for {}/{}",
                key.0, key.1
            )));
        }
        champions.insert(key, record);
        Ok(())
    }

    fn get(&self, cup_name: &str, day: &str) -> Result<Option<ChampionRecord>, EngineError> {
        let champions = self
            .champions
            .lock()
            .map_err(|_| EngineError::Store("champion store lock poisoned".to_string()))?;
        Ok(champions
            .get(&(cup_name.to_string(), day.to_string()))
            .cloned())
    }
}

impl TitleStore for MemoryStore {
    fn replace(
        &self,
        player_id: &str,
        scope: &Scope,
        titles: Vec<AwardedTitle>,
    ) -> Result<(), EngineError> {
        let mut stored = self
            .titles
            .lock()
            .map_err(|_| EngineError::Store("title store lock poisoned".to_string()))?;
        let key = (player_id.to_string(), scope.clone());
        if titles.is_empty() {
            stored.remove(&key);
        } else {
            stored.insert(key, titles);
        }
        Ok(())
    }

    fn get(&self, player_id: &str, scope: &Scope) -> Result<Vec<AwardedTitle>, EngineError> {
        let stored = self
            .titles
            .lock()
            .map_err(|_| EngineError::Store("title store lock poisoned".to_string()))?;
        Ok(stored
            .get(&(player_id.to_string(), scope.clone()))
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::title::{Polarity, TitleCategory};

    fn record(day: &str) -> ChampionRecord {
        ChampionRecord {
            cup_name: "major".to_string(),
            day: day.to_string(),
            champion_team: "A".to_string(),
            runner_up_team: Some("B".to_string()),
            champion_players: vec![],
            runner_up_players: vec![],
        }
    }

    fn title(name: &str) -> AwardedTitle {
        AwardedTitle {
            name: name.to_string(),
            description: String::new(),
            category: TitleCategory::Killing,
            polarity: Polarity::Positive,
            priority: 3,
            score: 1.0,
        }
    }

    #[test]
    fn test_champion_insert_is_write_once() {
        let store = MemoryStore::new();
        assert!(!store.contains("major", "20250101").unwrap());

        store.insert(record("20250101")).unwrap();
        assert!(store.contains("major", "20250101").unwrap());

        // Second insert for the same key must fail, not overwrite
        assert!(store.insert(record("20250101")).is_err());
        assert!(store.insert(record("20250102")).is_ok());
    }

    #[test]
    fn test_title_replace_overwrites_and_clears() {
        let store = MemoryStore::new();
        let scope = Scope::day("major", "20250101");

        store
            .replace("p1", &scope, vec![title("Kill Leader"), title("Phoenix")])
            .unwrap();
        assert_eq!(TitleStore::get(&store, "p1", &scope).unwrap().len(), 2);

        store.replace("p1", &scope, vec![title("Phoenix")]).unwrap();
        let fresh = TitleStore::get(&store, "p1", &scope).unwrap();
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].name, "Phoenix");

        // Empty fresh set clears the stored one
        store.replace("p1", &scope, vec![]).unwrap();
        assert!(TitleStore::get(&store, "p1", &scope).unwrap().is_empty());
    }
}
