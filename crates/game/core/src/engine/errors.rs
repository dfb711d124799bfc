//! Error types for the action execution pipeline.

use crate::action::ActionError;
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the battle engine.
///
/// The engine restores the pre-action state before returning any of these.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("select enemy failed: {0}")]
    SelectEnemy(TransitionPhaseError<ActionError>),

    #[error("attack failed: {0}")]
    Attack(TransitionPhaseError<ActionError>),

    #[error("heal failed: {0}")]
    Heal(TransitionPhaseError<ActionError>),

    #[error("switch failed: {0}")]
    SwitchActive(TransitionPhaseError<ActionError>),

    #[error("flee failed: {0}")]
    Flee(TransitionPhaseError<ActionError>),

    #[error("enemy turn failed: {0}")]
    EnemyTurn(TransitionPhaseError<ActionError>),
}

impl ExecuteError {
    fn inner(&self) -> &TransitionPhaseError<ActionError> {
        match self {
            ExecuteError::SelectEnemy(err)
            | ExecuteError::Attack(err)
            | ExecuteError::Heal(err)
            | ExecuteError::SwitchActive(err)
            | ExecuteError::Flee(err)
            | ExecuteError::EnemyTurn(err) => err,
        }
    }

    /// The underlying action error.
    pub fn action_error(&self) -> &ActionError {
        &self.inner().error
    }

    pub fn phase(&self) -> TransitionPhase {
        self.inner().phase
    }

    /// True when the request was simply not legal in the current state.
    pub fn is_rejection(&self) -> bool {
        self.phase() == TransitionPhase::PreValidate && self.severity().is_recoverable()
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.action_error().severity()
    }

    fn error_code(&self) -> &'static str {
        self.action_error().error_code()
    }
}
