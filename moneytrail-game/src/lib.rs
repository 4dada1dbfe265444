//! MoneyTrail Game Engine
//!
//! Platform-agnostic core game logic for the MoneyTrail life simulation.
//! This crate provides scenario generation, the choice-effect and
//! time-progression engines, and achievement evaluation, without UI or
//! platform-specific dependencies.

pub mod achievements;
pub mod constants;
pub mod data;
pub mod debts;
pub mod effects;
pub mod error;
pub mod invest;
pub mod job;
pub mod numbers;
pub mod progression;
pub mod scenario;
pub mod state;
pub mod store;
mod templates;

// Re-export commonly used types
pub use achievements::{ACHIEVEMENTS, Achievement, check_achievements, update_weekly_progress};
pub use data::{
    AssetKind, Category, Choice, ChoiceEffects, DebtKind, DebtSpec, HistoryEntry, InvestmentSpec,
    JobEffect, JobKind, PassiveKind, PassiveSpec, Scenario, SkillEffects, SkillId,
};
pub use effects::{apply_choice_effects, train_skill};
pub use error::EngineError;
pub use job::{JOB_LADDER, JobTier, add_job_experience};
pub use progression::progress_time;
pub use scenario::{generate_scenario, get_next_scenario};
pub use state::{
    AchievementProgress, Debt, Debts, GameState, Investments, JobStatus, PassiveIncome, Skills,
};
pub use store::{LeaderboardEntry, MemoryStore, ProgressStore};

/// Main game engine: owns a progress store and exposes the four logical
/// operations keyed by an opaque player identifier.
pub struct GameEngine<S: ProgressStore> {
    store: S,
}

impl<S> GameEngine<S>
where
    S: ProgressStore,
    S::Error: Into<anyhow::Error>,
{
    /// Create a new game engine with the provided progress store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn store_err(err: S::Error) -> EngineError {
        EngineError::Store(err.into())
    }

    fn load(&self, player_key: &str) -> Result<GameState, EngineError> {
        self.store
            .get_progress(player_key)
            .map_err(Self::store_err)?
            .ok_or(EngineError::InvalidSession)
    }

    fn guard_running(state: &GameState) -> Result<(), EngineError> {
        if state.game_over {
            return Err(EngineError::GameOver {
                reason: state
                    .game_over_reason
                    .clone()
                    .unwrap_or_else(|| "game over".to_string()),
            });
        }
        Ok(())
    }

    /// Load-or-create a session. A finished game restarts fresh; an ongoing
    /// game is returned as-is. Either way a scenario is attached.
    ///
    /// # Errors
    ///
    /// Returns an error if the progress store fails.
    pub fn start_game(&self, player_key: &str, seed: u64) -> Result<GameState, EngineError> {
        let existing = self
            .store
            .get_progress(player_key)
            .map_err(Self::store_err)?;
        let mut state = match existing {
            Some(state) if !state.game_over => state,
            _ => GameState::new(seed),
        };
        if state.current_scenario.is_none() {
            let scenario = get_next_scenario(&mut state);
            state.current_scenario = Some(scenario);
        }
        self.store
            .save_progress(player_key, &state)
            .map_err(Self::store_err)?;
        Ok(state)
    }

    /// Advance one day and attach a fresh scenario.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSession` for an unknown player, `GameOver` for a
    /// finished game, or a store error.
    pub fn next_scenario(&self, player_key: &str) -> Result<GameState, EngineError> {
        let mut state = self.load(player_key)?;
        Self::guard_running(&state)?;

        progress_time(&mut state);
        let scenario = get_next_scenario(&mut state);
        state.current_scenario = Some(scenario);

        self.store
            .save_progress(player_key, &state)
            .map_err(Self::store_err)?;
        Ok(state)
    }

    /// Apply the identified choice from the active scenario. Returns the
    /// updated state together with any newly unlocked achievement ids.
    ///
    /// # Errors
    ///
    /// Returns `NoScenario` when no scenario is active, `InvalidChoice` when
    /// the id is unknown (state unchanged in both cases), `InvalidSession`
    /// / `GameOver` / store errors as for the other operations.
    pub fn choose_action(
        &self,
        player_key: &str,
        choice_id: &str,
    ) -> Result<(GameState, Vec<&'static str>), EngineError> {
        let mut state = self.load(player_key)?;
        Self::guard_running(&state)?;

        let scenario = state.current_scenario.clone().ok_or(EngineError::NoScenario)?;
        let choice = scenario
            .choices
            .iter()
            .find(|c| c.id == choice_id)
            .cloned()
            .ok_or_else(|| EngineError::InvalidChoice {
                choice_id: choice_id.to_string(),
            })?;

        let mut unlocked = apply_choice_effects(&mut state, &choice);
        state.history.push(HistoryEntry {
            scenario_id: scenario.id,
            scenario_title: scenario.title.clone(),
            choice_id: choice.id.clone(),
            day: state.day,
            week: state.week,
        });
        state.completed_scenarios.push(scenario.id);
        state.current_scenario = None;

        unlocked.extend(check_achievements(&mut state));
        for id in &unlocked {
            self.store
                .save_achievement(player_key, id)
                .map_err(Self::store_err)?;
        }

        self.store
            .save_progress(player_key, &state)
            .map_err(Self::store_err)?;
        Ok((state, unlocked))
    }

    /// Spend hours training a skill (clamped to 1-8).
    ///
    /// # Errors
    ///
    /// Returns `InvalidSession` for an unknown player, `GameOver` for a
    /// finished game, or a store error.
    pub fn train_skill(
        &self,
        player_key: &str,
        skill: SkillId,
        hours: i32,
    ) -> Result<GameState, EngineError> {
        let mut state = self.load(player_key)?;
        Self::guard_running(&state)?;

        train_skill(&mut state, skill, hours);

        self.store
            .save_progress(player_key, &state)
            .map_err(Self::store_err)?;
        Ok(state)
    }

    /// Ranked players, best net worth first.
    ///
    /// # Errors
    ///
    /// Returns an error if the progress store fails.
    pub fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, EngineError> {
        self.store.leaderboard().map_err(Self::store_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GameEngine<MemoryStore> {
        GameEngine::new(MemoryStore::new())
    }

    #[test]
    fn start_game_attaches_a_scenario_and_persists() {
        let engine = engine();
        let state = engine.start_game("alex", 7).unwrap();
        assert!(state.current_scenario.is_some());

        let saved = engine.store().get_progress("alex").unwrap().unwrap();
        assert_eq!(saved.scenario_counter, state.scenario_counter);

        // Starting again resumes the same session.
        let resumed = engine.start_game("alex", 99).unwrap();
        assert_eq!(resumed.seed, 7);
    }

    #[test]
    fn start_game_resets_after_game_over() {
        let engine = engine();
        let mut state = engine.start_game("alex", 1).unwrap();
        state.end_game("bankruptcy");
        engine.store().save_progress("alex", &state).unwrap();

        let fresh = engine.start_game("alex", 2).unwrap();
        assert!(!fresh.game_over);
        assert_eq!(fresh.seed, 2);
        assert!((fresh.cash - 1_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn choose_action_applies_and_clears_the_scenario() {
        let engine = engine();
        let state = engine.start_game("alex", 3).unwrap();
        let choice_id = state.current_scenario.as_ref().unwrap().choices[0].id.clone();

        let (after, _unlocked) = engine.choose_action("alex", &choice_id).unwrap();
        assert!(after.current_scenario.is_none());
        assert_eq!(after.total_decisions, 1);
        assert_eq!(after.history.len(), 1);
        assert_eq!(after.history[0].choice_id, choice_id);
    }

    #[test]
    fn choose_action_rejects_unknown_choice() {
        let engine = engine();
        engine.start_game("alex", 3).unwrap();
        let err = engine.choose_action("alex", "not-a-choice").unwrap_err();
        assert!(matches!(err, EngineError::InvalidChoice { .. }));

        // State untouched by the failed action.
        let state = engine.store().get_progress("alex").unwrap().unwrap();
        assert_eq!(state.total_decisions, 0);
        assert!(state.current_scenario.is_some());
    }

    #[test]
    fn choose_action_without_scenario_fails() {
        let engine = engine();
        let mut state = engine.start_game("alex", 3).unwrap();
        state.current_scenario = None;
        engine.store().save_progress("alex", &state).unwrap();

        let err = engine.choose_action("alex", "anything").unwrap_err();
        assert!(matches!(err, EngineError::NoScenario));
    }

    #[test]
    fn unknown_player_is_an_invalid_session() {
        let engine = engine();
        let err = engine.next_scenario("ghost").unwrap_err();
        assert!(matches!(err, EngineError::InvalidSession));
    }

    #[test]
    fn next_scenario_advances_the_clock() {
        let engine = engine();
        engine.start_game("alex", 5).unwrap();
        let state = engine.next_scenario("alex").unwrap();
        assert_eq!(state.day, 2);
        assert!(state.current_scenario.is_some());
    }

    #[test]
    fn train_skill_via_facade() {
        let engine = engine();
        engine.start_game("alex", 5).unwrap();
        let state = engine.train_skill("alex", SkillId::Finance, 4).unwrap();
        assert_eq!(state.skills.finance, 30);
        assert_eq!(state.stress, 8);
    }

    #[test]
    fn achievements_reach_the_store() {
        let engine = engine();
        let mut state = engine.start_game("alex", 5).unwrap();
        state.cash = 20_000.0;
        engine.store().save_progress("alex", &state).unwrap();

        let choice_id = state.current_scenario.as_ref().unwrap().choices[0].id.clone();
        let (_, unlocked) = engine.choose_action("alex", &choice_id).unwrap();
        assert!(unlocked.contains(&"rich"));
        assert!(
            engine
                .store()
                .achievements_for("alex")
                .iter()
                .any(|a| a == "rich")
        );
    }
}
