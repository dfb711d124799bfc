//! Builder assembling a [`Session`] from configuration.

use std::sync::Arc;

use gauntlet_core::{CampaignController, JobSelection, TrainingGround};

use super::Session;
use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::events::EventBus;
use crate::oracle::OracleManager;
use crate::repository::{FileSelectionStore, InMemorySelectionStore, SelectionStore};

/// Builder for constructing a [`Session`].
pub struct SessionBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    store: Option<Arc<dyn SelectionStore>>,
}

impl SessionBuilder {
    pub(super) fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            store: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the oracle manager. When absent, `build` loads content from
    /// `data_dir` or the embedded defaults.
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set the selection store. When absent, `build` uses a file store under
    /// `save_dir`, or an in-memory store.
    pub fn store(mut self, store: impl SelectionStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    pub fn shared_store(mut self, store: Arc<dyn SelectionStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> Result<Session> {
        let SessionBuilder {
            config,
            oracles,
            store,
        } = self;

        let oracles = match oracles {
            Some(oracles) => oracles,
            None => match &config.data_dir {
                Some(dir) => OracleManager::from_data_dir(dir, config.compatibility)?,
                None => OracleManager::builtin(config.compatibility)?,
            },
        };
        let oracles = match config.battle.clone() {
            Some(battle) => oracles.with_config(battle),
            None => oracles,
        };

        let store: Arc<dyn SelectionStore> = match (store, &config.save_dir) {
            (Some(store), _) => store,
            (None, Some(dir)) => Arc::new(FileSelectionStore::new(dir)?),
            (None, None) => Arc::new(InMemorySelectionStore::new()),
        };

        let selection = match store.load_selection() {
            Ok(selection) => selection.unwrap_or_default(),
            Err(err) => {
                tracing::warn!("Ignoring unreadable job selection: {}", err);
                JobSelection::new()
            }
        };

        let game_seed = config.game_seed.unwrap_or_else(rand::random);
        tracing::info!(
            "Session ready (seed {}, {} jobs selected)",
            game_seed,
            selection.len()
        );

        Ok(Session {
            training: TrainingGround::with_trainee(oracles.config(), game_seed),
            oracles,
            store,
            bus: EventBus::with_capacity(config.event_buffer_size),
            game_seed,
            selection,
            campaign: CampaignController::new(),
        })
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
