//! Oracle access errors.
//!
//! Errors related to oracle availability and catalog lookups.

use super::catalog::{EnemyId, JobId};
use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing oracle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// CatalogOracle is not available in the environment.
    #[error("CatalogOracle not available")]
    CatalogNotAvailable,

    /// CompatibilityOracle is not available in the environment.
    #[error("CompatibilityOracle not available")]
    CompatibilityNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,

    /// BattleConfig is not available in the environment.
    #[error("BattleConfig not available")]
    ConfigNotAvailable,

    /// A job id could not be resolved by the catalog.
    #[error("job '{0}' not found in catalog")]
    UnknownJob(JobId),

    /// An enemy id could not be resolved by the catalog.
    #[error("enemy {0} not found in catalog")]
    UnknownEnemy(EnemyId),

    #[error("job '{0}' is defined more than once")]
    DuplicateJob(JobId),

    #[error("enemy {0} is defined more than once")]
    DuplicateEnemy(EnemyId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Missing oracles are fatal - engine cannot proceed
            CatalogNotAvailable | CompatibilityNotAvailable | RngNotAvailable
            | ConfigNotAvailable => {
                ErrorSeverity::Fatal
            }

            // Unresolvable references are skipped by callers
            UnknownJob(_) | UnknownEnemy(_) => ErrorSeverity::Validation,

            DuplicateJob(_) | DuplicateEnemy(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            CatalogNotAvailable => "ORACLE_CATALOG_NOT_AVAILABLE",
            CompatibilityNotAvailable => "ORACLE_COMPATIBILITY_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            UnknownJob(_) => "ORACLE_UNKNOWN_JOB",
            UnknownEnemy(_) => "ORACLE_UNKNOWN_ENEMY",
            DuplicateJob(_) => "ORACLE_DUPLICATE_JOB",
            DuplicateEnemy(_) => "ORACLE_DUPLICATE_ENEMY",
        }
    }
}
