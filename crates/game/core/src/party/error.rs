use crate::env::JobId;
use crate::error::{ErrorSeverity, GameError};

/// Errors raised while turning a job selection into a party.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartyError {
    /// Nothing was selected. A normal state before the player picks jobs.
    #[error("no jobs selected")]
    NoSelection,

    /// Jobs were selected but none of them resolved to a catalog entry.
    #[error("none of the selected jobs exist in the catalog")]
    Empty { skipped: Vec<JobId> },

    #[error("{count} jobs selected, at most {max} allowed")]
    TooLarge { count: usize, max: usize },
}

impl GameError for PartyError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            PartyError::NoSelection => ErrorSeverity::Recoverable,
            PartyError::Empty { .. } | PartyError::TooLarge { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            PartyError::NoSelection => "PARTY_NO_SELECTION",
            PartyError::Empty { .. } => "PARTY_EMPTY",
            PartyError::TooLarge { .. } => "PARTY_TOO_LARGE",
        }
    }
}

/// Errors raised by [`JobSelection`](super::JobSelection) edits.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionError {
    #[error("selection already holds {max} jobs")]
    Full { max: usize },
}

impl GameError for SelectionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            SelectionError::Full { .. } => "SELECTION_FULL",
        }
    }
}
