//! Event types for the campaign and session topics.

use gauntlet_core::{CampaignSummary, EncounterReport, EnemyId, JobId};
use serde::{Deserialize, Serialize};

/// Events related to campaign progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CampaignEvent {
    /// A run started or resumed with this party.
    Started { party: Vec<JobId>, game_seed: u64 },

    /// Enemies offered for the given 1-based battle.
    EnemiesOffered { battle: u32, enemies: Vec<EnemyId> },

    /// An encounter ended and the campaign recorded it.
    EncounterConcluded(EncounterReport),

    /// The run was cleared or lost.
    Finished(CampaignSummary),
}

/// Events related to the session itself (lightweight)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The job selection changed.
    SelectionChanged { jobs: Vec<JobId> },

    /// Selected ids the catalog could not resolve were skipped.
    JobsSkipped { jobs: Vec<JobId> },

    /// An action was rejected without changing state.
    ActionRejected {
        action: String,
        code: String,
        message: String,
    },
}
