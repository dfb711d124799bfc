//! Runtime bundle of the static battle content oracles.
//!
//! [`OracleManager`] owns the catalog, the compatibility strategy and the
//! battle rules, and builds [`gauntlet_core::BattleEnv`] snapshots on demand.
//! The data is immutable at runtime; dynamic state lives in the session and
//! its selection store.

use std::path::Path;
use std::sync::Arc;

use gauntlet_content::{BuiltinContent, ContentFactory};
use gauntlet_core::{
    BattleConfig, BattleEnv, CatalogOracle, Compatibility, CompatibilityTable, Env, PcgRng,
    StaticCatalog, TagCompatibility,
};

use crate::config::CompatibilityMode;
use crate::error::{Result, RuntimeError};

/// Manages all oracle implementations and provides unified access
#[derive(Clone, Debug)]
pub struct OracleManager {
    pub(crate) catalog: Arc<StaticCatalog>,
    pub(crate) compatibility: Arc<Compatibility>,
    pub(crate) config: Arc<BattleConfig>,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(catalog: StaticCatalog, compatibility: Compatibility, config: BattleConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            compatibility: Arc::new(compatibility),
            config: Arc::new(config),
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Builds oracles from the content embedded in `gauntlet-content`.
    pub fn builtin(mode: CompatibilityMode) -> Result<Self> {
        let content =
            BuiltinContent::load().map_err(|e| RuntimeError::Content(format!("{e:#}")))?;
        Ok(Self::assemble(
            content.catalog,
            content.compatibility,
            content.config,
            mode,
        ))
    }

    /// Builds oracles from a content directory laid out for [`ContentFactory`].
    pub fn from_data_dir(data_dir: &Path, mode: CompatibilityMode) -> Result<Self> {
        let factory = ContentFactory::new(data_dir);
        let catalog = factory
            .load_catalog()
            .map_err(|e| RuntimeError::Content(format!("{e:#}")))?;
        let table = factory
            .load_compatibility()
            .map_err(|e| RuntimeError::Content(format!("{e:#}")))?;
        let config = factory
            .load_config()
            .map_err(|e| RuntimeError::Content(format!("{e:#}")))?;

        tracing::info!(
            "Loaded {} jobs and {} enemies from {}",
            catalog.list_jobs().len(),
            catalog.list_enemies().len(),
            data_dir.display()
        );

        Ok(Self::assemble(catalog, table, config, mode))
    }

    fn assemble(
        catalog: StaticCatalog,
        table: CompatibilityTable,
        config: BattleConfig,
        mode: CompatibilityMode,
    ) -> Self {
        let compatibility = match mode {
            CompatibilityMode::Table => Compatibility::Table(table),
            CompatibilityMode::Tags => Compatibility::Tags(TagCompatibility::from_config(&config)),
        };
        Self::new(catalog, compatibility, config)
    }

    /// Replaces the battle rules, keeping catalog and compatibility.
    pub fn with_config(mut self, config: BattleConfig) -> Self {
        if let Compatibility::Tags(_) = self.compatibility.as_ref() {
            self.compatibility = Arc::new(Compatibility::Tags(TagCompatibility::from_config(
                &config,
            )));
        }
        self.config = Arc::new(config);
        self
    }

    /// Converts oracle manager into a BattleEnv for gauntlet-core
    pub fn as_battle_env(&self) -> BattleEnv<'_> {
        Env::with_all(
            self.catalog.as_ref(),
            self.compatibility.as_ref(),
            &self.rng,
            self.config.as_ref(),
        )
        .into_battle_env()
    }

    pub fn catalog(&self) -> &StaticCatalog {
        &self.catalog
    }

    pub fn compatibility(&self) -> &Compatibility {
        &self.compatibility
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauntlet_core::TurnOrder;

    #[test]
    fn builtin_uses_table_by_default() {
        let oracles = OracleManager::builtin(CompatibilityMode::Table).unwrap();
        assert!(matches!(oracles.compatibility(), Compatibility::Table(_)));
        assert_eq!(oracles.catalog().list_enemies().len(), 5);
        assert!(oracles.as_battle_env().catalog().is_ok());
    }

    #[test]
    fn tag_mode_follows_config_multipliers() {
        let mut config = BattleConfig::arena();
        config.weakness_multiplier = 2.0;
        let oracles = OracleManager::builtin(CompatibilityMode::Tags)
            .unwrap()
            .with_config(config);

        let Compatibility::Tags(tags) = oracles.compatibility() else {
            panic!("expected tag compatibility");
        };
        assert_eq!(tags.weakness, 2.0);
        assert_eq!(oracles.config().turn_order, TurnOrder::RandomActor);
    }
}
