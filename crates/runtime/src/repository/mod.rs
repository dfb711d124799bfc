//! Selection store: the opaque key-value persistence the session reads and
//! writes between runs.
//!
//! The store itself only moves bytes. Typed access lives in the provided
//! methods of [`SelectionStore`]: the job selection and the campaign roster
//! are JSON, and the campaign bookkeeping goes through
//! [`CampaignState::encode`](gauntlet_core::CampaignState::encode).

mod error;
mod file;
mod memory;

pub use error::{RepositoryError, Result};
pub use file::FileSelectionStore;
pub use memory::InMemorySelectionStore;

use gauntlet_core::{CampaignState, JobSelection, Party};
use serde::{Deserialize, Serialize};

/// Store keys used by the session.
pub mod keys {
    pub const SELECTED_JOBS: &str = "selected_jobs";
    pub const CAMPAIGN_STATE: &str = "campaign_state";
    pub const CAMPAIGN_ROSTER: &str = "campaign_roster";
}

/// Everything needed to resume a campaign run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CampaignSnapshot {
    pub game_seed: u64,
    pub party: Party,
    pub campaign: CampaignState,
}

#[derive(Serialize, Deserialize)]
struct CampaignRoster {
    game_seed: u64,
    party: Party,
}

/// Byte-oriented key-value store for selections and campaign progress.
///
/// Implementations must make `put` atomic per key: a reader sees either the
/// previous value or the new one.
pub trait SelectionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    fn put(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    fn save_selection(&self, selection: &JobSelection) -> Result<()> {
        let bytes =
            serde_json::to_vec(selection).map_err(|e| RepositoryError::Json(e.to_string()))?;
        self.put(keys::SELECTED_JOBS, &bytes)
    }

    /// Loads the stored selection, dropping duplicates and overflow.
    fn load_selection(&self) -> Result<Option<JobSelection>> {
        let Some(bytes) = self.get(keys::SELECTED_JOBS)? else {
            return Ok(None);
        };
        let ids: Vec<gauntlet_core::JobId> =
            serde_json::from_slice(&bytes).map_err(|e| RepositoryError::Json(e.to_string()))?;
        Ok(Some(JobSelection::from_ids(ids)))
    }

    fn save_campaign(&self, snapshot: &CampaignSnapshot) -> Result<()> {
        let state = snapshot
            .campaign
            .encode()
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let roster = serde_json::to_vec(&CampaignRoster {
            game_seed: snapshot.game_seed,
            party: snapshot.party.clone(),
        })
        .map_err(|e| RepositoryError::Json(e.to_string()))?;

        self.put(keys::CAMPAIGN_ROSTER, &roster)?;
        self.put(keys::CAMPAIGN_STATE, &state)
    }

    /// Loads a saved campaign. Both halves must be present.
    fn load_campaign(&self) -> Result<Option<CampaignSnapshot>> {
        let (Some(roster), Some(state)) =
            (self.get(keys::CAMPAIGN_ROSTER)?, self.get(keys::CAMPAIGN_STATE)?)
        else {
            return Ok(None);
        };

        let roster: CampaignRoster =
            serde_json::from_slice(&roster).map_err(|e| RepositoryError::Json(e.to_string()))?;
        let campaign = CampaignState::decode(&state)
            .map_err(|e| RepositoryError::CorruptedData(e.to_string()))?;

        Ok(Some(CampaignSnapshot {
            game_seed: roster.game_seed,
            party: roster.party,
            campaign,
        }))
    }

    fn clear_campaign(&self) -> Result<()> {
        self.remove(keys::CAMPAIGN_STATE)?;
        self.remove(keys::CAMPAIGN_ROSTER)
    }
}
