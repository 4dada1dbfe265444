//! Structured engine errors.

use thiserror::Error;

/// Failures surfaced by the engine facade.
///
/// Numeric corruption in choice effects is deliberately absent: non-finite
/// effect values are coerced to zero (see `numbers::sane`) instead of raised,
/// and bankruptcy is a terminal game state, not an error.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The submitted choice id is not part of the active scenario.
    #[error("choice '{choice_id}' is not part of the current scenario")]
    InvalidChoice { choice_id: String },

    /// An action was submitted while no scenario is attached to the state.
    #[error("no scenario is currently active")]
    NoScenario,

    /// The player key has no saved progress to operate on.
    #[error("no saved progress for this player")]
    InvalidSession,

    /// The game has already ended; only a fresh start is valid.
    #[error("the game is over: {reason}")]
    GameOver { reason: String },

    /// The persistence collaborator failed.
    #[error(transparent)]
    Store(anyhow::Error),
}
