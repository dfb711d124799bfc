use crate::engine::ExecuteError;
use crate::env::{EnemyId, OracleError};
use crate::error::{ErrorSeverity, GameError};

/// Errors raised by the campaign controller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CampaignError {
    #[error("no campaign in progress")]
    NotStarted,

    #[error("a campaign is already in progress")]
    AlreadyStarted,

    /// The run ended in clear or game over and must be reset first.
    #[error("the campaign is over; reset before starting a new run")]
    CampaignOver,

    #[error("cannot start a campaign with an empty party")]
    EmptyParty,

    #[error("an encounter is already in progress")]
    AlreadyInEncounter,

    #[error("no encounter in progress")]
    NoActiveEncounter,

    #[error("enemy {0} was already fought this run")]
    EnemyAlreadyFought(EnemyId),

    #[error("enemy {0} is not among the offered enemies")]
    NotOffered(EnemyId),

    #[error("no enemies left to fight")]
    NoEnemiesRemaining,

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Battle(#[from] ExecuteError),
}

impl GameError for CampaignError {
    fn severity(&self) -> ErrorSeverity {
        use CampaignError::*;
        match self {
            NotStarted | AlreadyStarted | CampaignOver => ErrorSeverity::Recoverable,
            AlreadyInEncounter | NoActiveEncounter => ErrorSeverity::Recoverable,
            EmptyParty | EnemyAlreadyFought(_) | NotOffered(_) => ErrorSeverity::Validation,
            NoEnemiesRemaining => ErrorSeverity::Validation,
            Oracle(err) => err.severity(),
            Battle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use CampaignError::*;
        match self {
            NotStarted => "CAMPAIGN_NOT_STARTED",
            AlreadyStarted => "CAMPAIGN_ALREADY_STARTED",
            CampaignOver => "CAMPAIGN_OVER",
            EmptyParty => "CAMPAIGN_EMPTY_PARTY",
            AlreadyInEncounter => "CAMPAIGN_ALREADY_IN_ENCOUNTER",
            NoActiveEncounter => "CAMPAIGN_NO_ACTIVE_ENCOUNTER",
            EnemyAlreadyFought(_) => "CAMPAIGN_ENEMY_ALREADY_FOUGHT",
            NotOffered(_) => "CAMPAIGN_NOT_OFFERED",
            NoEnemiesRemaining => "CAMPAIGN_NO_ENEMIES_REMAINING",
            Oracle(err) => err.error_code(),
            Battle(err) => err.error_code(),
        }
    }
}
