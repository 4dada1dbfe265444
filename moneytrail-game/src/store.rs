//! Persistence abstraction and an in-memory reference implementation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::constants::LEADERBOARD_SIZE;
use crate::state::GameState;

/// One leaderboard row, ranked by net worth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_key: String,
    pub net_worth: f64,
    pub cash: f64,
    pub week: u32,
    pub total_decisions: u32,
}

/// Trait for abstracting progress persistence.
/// Platform-specific implementations (database, cloud, browser storage)
/// should provide this; the engine never touches global state.
pub trait ProgressStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load a player's saved state, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get_progress(&self, player_key: &str) -> Result<Option<GameState>, Self::Error>;

    /// Persist a player's state.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be written.
    fn save_progress(&self, player_key: &str, state: &GameState) -> Result<(), Self::Error>;

    /// Delete a player's saved state.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion fails.
    fn delete_progress(&self, player_key: &str) -> Result<(), Self::Error>;

    /// Record a newly unlocked achievement for a player.
    ///
    /// # Errors
    ///
    /// Returns an error if the achievement cannot be recorded.
    fn save_achievement(&self, player_key: &str, achievement_id: &str) -> Result<(), Self::Error>;

    /// Ranked snapshot of all known players, best net worth first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, Self::Error>;
}

/// In-memory store for hosts and tests.
#[derive(Clone, Default)]
pub struct MemoryStore {
    saves: Rc<RefCell<HashMap<String, GameState>>>,
    achievements: Rc<RefCell<HashMap<String, Vec<String>>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Achievement ids recorded for a player, in unlock order.
    #[must_use]
    pub fn achievements_for(&self, player_key: &str) -> Vec<String> {
        self.achievements
            .borrow()
            .get(player_key)
            .cloned()
            .unwrap_or_default()
    }
}

impl ProgressStore for MemoryStore {
    type Error = Infallible;

    fn get_progress(&self, player_key: &str) -> Result<Option<GameState>, Self::Error> {
        Ok(self.saves.borrow().get(player_key).cloned())
    }

    fn save_progress(&self, player_key: &str, state: &GameState) -> Result<(), Self::Error> {
        self.saves
            .borrow_mut()
            .insert(player_key.to_string(), state.clone());
        Ok(())
    }

    fn delete_progress(&self, player_key: &str) -> Result<(), Self::Error> {
        self.saves.borrow_mut().remove(player_key);
        Ok(())
    }

    fn save_achievement(&self, player_key: &str, achievement_id: &str) -> Result<(), Self::Error> {
        let mut map = self.achievements.borrow_mut();
        let list = map.entry(player_key.to_string()).or_default();
        if !list.iter().any(|a| a == achievement_id) {
            list.push(achievement_id.to_string());
        }
        Ok(())
    }

    fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, Self::Error> {
        let mut entries: Vec<LeaderboardEntry> = self
            .saves
            .borrow()
            .iter()
            .map(|(key, state)| LeaderboardEntry {
                player_key: key.clone(),
                net_worth: state.net_worth(),
                cash: state.cash,
                week: state.week,
                total_decisions: state.total_decisions,
            })
            .collect();
        entries.sort_by(|a, b| {
            b.net_worth
                .partial_cmp(&a.net_worth)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        entries.truncate(LEADERBOARD_SIZE);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_roundtrips() {
        let store = MemoryStore::new();
        let mut state = GameState::new(3);
        state.cash = 777.0;
        store.save_progress("alex", &state).unwrap();

        let loaded = store.get_progress("alex").unwrap().expect("save exists");
        assert!((loaded.cash - 777.0).abs() < f64::EPSILON);
        assert!(store.get_progress("nobody").unwrap().is_none());

        store.delete_progress("alex").unwrap();
        assert!(store.get_progress("alex").unwrap().is_none());
    }

    #[test]
    fn achievements_deduplicate() {
        let store = MemoryStore::new();
        store.save_achievement("alex", "rich").unwrap();
        store.save_achievement("alex", "rich").unwrap();
        store.save_achievement("alex", "survivor").unwrap();
        assert_eq!(store.achievements_for("alex"), vec!["rich", "survivor"]);
    }

    #[test]
    fn leaderboard_ranks_by_net_worth() {
        let store = MemoryStore::new();
        let mut poor = GameState::new(1);
        poor.cash = 100.0;
        let mut rich = GameState::new(2);
        rich.cash = 90_000.0;
        store.save_progress("poor", &poor).unwrap();
        store.save_progress("rich", &rich).unwrap();

        let board = store.leaderboard().unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].player_key, "rich");
        assert!(board[0].net_worth > board[1].net_worth);
    }

    #[test]
    fn leaderboard_is_capped() {
        let store = MemoryStore::new();
        for i in 0..30 {
            let state = GameState::new(i);
            store.save_progress(&format!("p{i}"), &state).unwrap();
        }
        assert_eq!(store.leaderboard().unwrap().len(), 20);
    }
}
