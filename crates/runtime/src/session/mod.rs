//! Session facade over the battle rules.
//!
//! A [`Session`] owns the oracles, the selection store, the event bus and the
//! two play modes (a campaign controller and a training ground). Every
//! mutating call logs through `tracing`, publishes the resulting events, and
//! persists what needs persisting. Rejected actions are reported as errors
//! and as [`SessionEvent::ActionRejected`]; they never change state.

mod builder;
mod campaign;
mod training;

pub use builder::SessionBuilder;

use std::sync::Arc;

use gauntlet_core::{
    CampaignController, ExecutionOutcome, JobId, JobSelection, Party, PartyBuildReport,
    TrainingGround, build_party, party::Toggle,
};

use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventBus, SessionEvent};
use crate::oracle::OracleManager;
use crate::repository::SelectionStore;

pub struct Session {
    oracles: OracleManager,
    store: Arc<dyn SelectionStore>,
    bus: EventBus,
    game_seed: u64,
    selection: JobSelection,
    campaign: CampaignController,
    training: TrainingGround,
}

impl Session {
    /// Create a new session builder
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn events(&self) -> &EventBus {
        &self.bus
    }

    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    pub fn selection(&self) -> &JobSelection {
        &self.selection
    }

    /// Adds or removes a job from the selection and persists it.
    pub fn toggle_job(&mut self, job: JobId) -> Result<Toggle> {
        let toggle = self
            .selection
            .toggle(job.clone())
            .map_err(|err| self.reject("toggle_job", err.into()))?;
        tracing::debug!("Selection {:?} {}", toggle, job);
        self.store_selection()?;
        Ok(toggle)
    }

    pub fn clear_selection(&mut self) -> Result<()> {
        self.selection.clear();
        self.store_selection()
    }

    /// Builds a party from the current selection.
    ///
    /// Ids missing from the catalog are skipped with a warning.
    pub fn build_party(&self) -> Result<(Party, PartyBuildReport)> {
        let (party, report) = build_party(
            self.oracles.catalog(),
            self.selection.ids(),
            self.oracles.config(),
        )?;

        if !report.skipped.is_empty() {
            tracing::warn!("Skipped unknown jobs: {:?}", report.skipped);
            self.bus.publish(Event::Session(SessionEvent::JobsSkipped {
                jobs: report.skipped.clone(),
            }));
        }
        Ok((party, report))
    }

    fn store_selection(&self) -> Result<()> {
        self.store.save_selection(&self.selection)?;
        self.bus.publish(Event::Session(SessionEvent::SelectionChanged {
            jobs: self.selection.ids().to_vec(),
        }));
        Ok(())
    }

    fn publish_outcome(&self, outcome: &ExecutionOutcome) {
        for event in &outcome.events {
            self.bus.publish(Event::Battle(event.clone()));
        }
    }

    /// Logs and publishes a rejection, then hands the error back.
    fn reject(&self, action: &str, err: RuntimeError) -> RuntimeError {
        if err.is_rejection() {
            tracing::debug!("Rejected {}: {} ({})", action, err, err.error_code());
            self.bus.publish(Event::Session(SessionEvent::ActionRejected {
                action: action.to_owned(),
                code: err.error_code().to_owned(),
                message: err.to_string(),
            }));
        } else {
            tracing::error!("{} failed: {}", action, err);
        }
        err
    }
}
