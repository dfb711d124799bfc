//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the rules crate, repositories and content loading so
//! clients can bubble them up with consistent context.
use thiserror::Error;

use gauntlet_core::{
    CampaignError, EnemyId, ExecuteError, GameError, PartyError, SelectionError,
    StateError,
};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to load content: {0}")]
    Content(String),

    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("enemy {0} not found in catalog")]
    UnknownEnemy(EnemyId),

    #[error(transparent)]
    Party(#[from] PartyError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Campaign(#[from] CampaignError),

    #[error(transparent)]
    Battle(#[from] ExecuteError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// The classified rules error behind this failure, if any.
    pub fn game_error(&self) -> Option<&dyn GameError> {
        match self {
            RuntimeError::Party(err) => Some(err),
            RuntimeError::Selection(err) => Some(err),
            RuntimeError::Campaign(err) => Some(err),
            RuntimeError::Battle(err) => Some(err),
            RuntimeError::State(err) => Some(err),
            _ => None,
        }
    }

    /// Stable identifier for logs and rejection events.
    pub fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Content(_) => "RUNTIME_CONTENT",
            RuntimeError::InvalidEnv { .. } => "RUNTIME_INVALID_ENV",
            RuntimeError::UnknownEnemy(_) => "RUNTIME_UNKNOWN_ENEMY",
            RuntimeError::Repository(_) => "RUNTIME_REPOSITORY",
            _ => self.game_error().map_or("RUNTIME_UNKNOWN", |err| err.error_code()),
        }
    }

    /// True for rejections the player can simply retry differently. State is
    /// unchanged after such an error.
    pub fn is_rejection(&self) -> bool {
        match self {
            RuntimeError::UnknownEnemy(_) => true,
            _ => self
                .game_error()
                .is_some_and(|err| err.severity().is_rejection()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_come_from_the_rules_error() {
        let err = RuntimeError::from(PartyError::NoSelection);
        assert_eq!(err.error_code(), "PARTY_NO_SELECTION");
        assert!(err.is_rejection());

        let err = RuntimeError::from(CampaignError::NotOffered(EnemyId(2)));
        assert_eq!(err.error_code(), "CAMPAIGN_NOT_OFFERED");
    }

    #[test]
    fn repository_failures_are_not_rejections() {
        let err = RuntimeError::from(RepositoryError::LockPoisoned);
        assert!(!err.is_rejection());
        assert_eq!(err.error_code(), "RUNTIME_REPOSITORY");
        assert!(RuntimeError::UnknownEnemy(EnemyId(9)).is_rejection());
    }
}
