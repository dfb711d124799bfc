//! Traits describing read-only battle data.
//!
//! Oracles expose the job/enemy catalog, compatibility multipliers, and the
//! deterministic RNG. The [`Env`] aggregate bundles them with the
//! [`BattleConfig`] so the engine can access everything it needs without hard
//! coupling to concrete implementations.
mod catalog;
mod error;
mod rng;

pub use catalog::{
    CatalogOracle, EnemyDefinition, EnemyId, JobDefinition, JobId, StaticCatalog,
};
pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, RollContext, ScriptedRng, compute_seed};

use crate::compatibility::CompatibilityOracle;
use crate::config::BattleConfig;

/// Aggregates read-only oracles required by the engine and party builder.
pub struct Env<'a, C, P, R>
where
    C: CatalogOracle + ?Sized,
    P: CompatibilityOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    catalog: Option<&'a C>,
    compatibility: Option<&'a P>,
    rng: Option<&'a R>,
    config: Option<&'a BattleConfig>,
}

impl<C, P, R> Clone for Env<'_, C, P, R>
where
    C: CatalogOracle + ?Sized,
    P: CompatibilityOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

// Only references are held, so the aggregate is copyable even over trait objects.
impl<C, P, R> Copy for Env<'_, C, P, R>
where
    C: CatalogOracle + ?Sized,
    P: CompatibilityOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

pub type BattleEnv<'a> =
    Env<'a, dyn CatalogOracle + 'a, dyn CompatibilityOracle + 'a, dyn RngOracle + 'a>;

impl<'a, C, P, R> Env<'a, C, P, R>
where
    C: CatalogOracle + ?Sized,
    P: CompatibilityOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        catalog: Option<&'a C>,
        compatibility: Option<&'a P>,
        rng: Option<&'a R>,
        config: Option<&'a BattleConfig>,
    ) -> Self {
        Self {
            catalog,
            compatibility,
            rng,
            config,
        }
    }

    pub fn with_all(
        catalog: &'a C,
        compatibility: &'a P,
        rng: &'a R,
        config: &'a BattleConfig,
    ) -> Self {
        Self::new(Some(catalog), Some(compatibility), Some(rng), Some(config))
    }

    pub fn empty() -> Self {
        Self {
            catalog: None,
            compatibility: None,
            rng: None,
            config: None,
        }
    }

    /// Returns the CatalogOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CatalogNotAvailable` if no catalog was provided.
    pub fn catalog(&self) -> Result<&'a C, OracleError> {
        self.catalog.ok_or(OracleError::CatalogNotAvailable)
    }

    /// Returns the CompatibilityOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CompatibilityNotAvailable` if no compatibility
    /// strategy was provided.
    pub fn compatibility(&self) -> Result<&'a P, OracleError> {
        self.compatibility
            .ok_or(OracleError::CompatibilityNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Returns the BattleConfig, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config was provided.
    pub fn config(&self) -> Result<&'a BattleConfig, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }
}

impl<'a, C, P, R> Env<'a, C, P, R>
where
    C: CatalogOracle + 'a,
    P: CompatibilityOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `BattleEnv`.
    pub fn into_battle_env(self) -> BattleEnv<'a> {
        self.as_battle_env()
    }

    /// Converts this environment into a trait-object based `BattleEnv`
    /// without consuming it.
    pub fn as_battle_env(&self) -> BattleEnv<'a> {
        let catalog: Option<&'a dyn CatalogOracle> = self.catalog.map(|catalog| catalog as _);
        let compatibility: Option<&'a dyn CompatibilityOracle> =
            self.compatibility.map(|compatibility| compatibility as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(catalog, compatibility, rng, self.config)
    }
}
