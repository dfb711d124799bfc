//! State management errors.
//!
//! Errors related to invariant checks and the campaign serialization boundary.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur during battle state operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    #[error("combatant {index} hp {hp} exceeds max hp {max_hp}")]
    CombatantHpOutOfRange { index: usize, hp: u32, max_hp: u32 },

    #[error("enemy hp {hp} exceeds max hp {max_hp}")]
    EnemyHpOutOfRange { hp: u32, max_hp: u32 },

    #[error("combatant {index} holds unresolved level-up experience")]
    ExperienceOverflow { index: usize },

    /// The active pointer targets a knocked-out member during the player turn.
    #[error("active combatant {index} is down during the player turn")]
    ActiveCombatantDown { index: usize },

    #[error("failed to serialize campaign state: {0}")]
    Serialization(String),

    #[error("failed to deserialize campaign state: {0}")]
    Deserialization(String),
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StateError::Serialization(_) | StateError::Deserialization(_) => {
                ErrorSeverity::Validation
            }
            _ => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StateError::CombatantHpOutOfRange { .. } => "STATE_COMBATANT_HP_OUT_OF_RANGE",
            StateError::EnemyHpOutOfRange { .. } => "STATE_ENEMY_HP_OUT_OF_RANGE",
            StateError::ExperienceOverflow { .. } => "STATE_EXPERIENCE_OVERFLOW",
            StateError::ActiveCombatantDown { .. } => "STATE_ACTIVE_COMBATANT_DOWN",
            StateError::Serialization(_) => "STATE_SERIALIZATION",
            StateError::Deserialization(_) => "STATE_DESERIALIZATION",
        }
    }
}
