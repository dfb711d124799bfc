//! Error classification shared by every rules error.
//!
//! Each module owns its error enum (`ActionError`, `PartyError`,
//! `CampaignError`, ...). They all implement [`GameError`] so callers can
//! route a failure without matching on concrete types: rejections go back to
//! the player, internal errors get logged loudly.

/// How a caller should treat a failed operation.
///
/// A failed operation never mutates state, whatever its severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Not legal in the current phase; the same request may succeed later.
    ///
    /// Attacking during the enemy turn, healing at full hp.
    Recoverable,

    /// Bad input that will keep failing until the caller changes it.
    ///
    /// Unknown job id, enemy already fought this run.
    Validation,

    /// A rules invariant broke, e.g. hp outside `[0, max]` after an action.
    Internal,

    /// Required configuration or content is missing.
    Fatal,
}

impl ErrorSeverity {
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Player-facing rejections: recoverable or validation failures.
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Classification implemented by every rules error.
///
/// Object safe, so `&dyn GameError` can be handed to logging and event code.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable upper-snake identifier such as `ACTION_NOT_PLAYER_TURN`.
    fn error_code(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_exclude_internal_failures() {
        assert!(ErrorSeverity::Recoverable.is_rejection());
        assert!(ErrorSeverity::Validation.is_rejection());
        assert!(!ErrorSeverity::Internal.is_rejection());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert_eq!(ErrorSeverity::Validation.to_string(), "validation");
    }
}
