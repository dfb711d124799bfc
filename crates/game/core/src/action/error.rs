//! Action execution errors.
//!
//! Every rejection here leaves the battle state untouched, so callers may try
//! an action speculatively and treat the error as a no-op.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::StateError;

/// Errors that can occur while validating or applying a battle action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// A player action was attempted outside the player turn.
    #[error("not the player's turn")]
    NotPlayerTurn,

    /// The enemy turn was resolved outside the enemy turn.
    #[error("not the enemy's turn")]
    NotEnemyTurn,

    /// No enemy is bound, or the encounter already ended.
    #[error("no encounter in progress")]
    NoEncounter,

    #[error("an encounter is already bound")]
    EncounterAlreadyBound,

    /// The party has no members at all.
    #[error("the party is empty")]
    EmptyParty,

    /// The party has members but none can fight.
    #[error("no living combatant in the party")]
    NoLivingCombatant,

    #[error("combatant {index} is down")]
    CombatantDown { index: usize },

    #[error("the enemy is already down")]
    EnemyDown,

    #[error("combatant {index} is already at full hp")]
    AlreadyFullHp { index: usize },

    #[error("no other living combatant to switch to")]
    NoOtherLivingCombatant,

    /// Switching is disabled when the actor is chosen at random.
    #[error("switching is disabled by the turn order")]
    SwitchDisabled,

    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// A post-condition failed after the action was applied.
    #[error("invariant violated: {0}")]
    Invariant(#[from] StateError),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            NotPlayerTurn | NotEnemyTurn | NoEncounter | EncounterAlreadyBound => {
                ErrorSeverity::Recoverable
            }
            CombatantDown { .. } | EnemyDown | AlreadyFullHp { .. } => ErrorSeverity::Recoverable,
            NoOtherLivingCombatant | SwitchDisabled => ErrorSeverity::Recoverable,
            EmptyParty | NoLivingCombatant => ErrorSeverity::Validation,
            Oracle(err) => err.severity(),
            Invariant(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            NotPlayerTurn => "ACTION_NOT_PLAYER_TURN",
            NotEnemyTurn => "ACTION_NOT_ENEMY_TURN",
            NoEncounter => "ACTION_NO_ENCOUNTER",
            EncounterAlreadyBound => "ACTION_ENCOUNTER_ALREADY_BOUND",
            EmptyParty => "ACTION_EMPTY_PARTY",
            NoLivingCombatant => "ACTION_NO_LIVING_COMBATANT",
            CombatantDown { .. } => "ACTION_COMBATANT_DOWN",
            EnemyDown => "ACTION_ENEMY_DOWN",
            AlreadyFullHp { .. } => "ACTION_ALREADY_FULL_HP",
            NoOtherLivingCombatant => "ACTION_NO_OTHER_LIVING_COMBATANT",
            SwitchDisabled => "ACTION_SWITCH_DISABLED",
            Oracle(err) => err.error_code(),
            Invariant(err) => err.error_code(),
        }
    }
}
