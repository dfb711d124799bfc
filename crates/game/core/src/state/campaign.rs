use std::collections::BTreeSet;

use crate::env::{EnemyId, JobId};

/// Cross-encounter bookkeeping for one campaign run.
///
/// This is the single serialization boundary for campaign progress; see
/// [`CampaignState::encode`] and [`CampaignState::decode`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CampaignState {
    pub wins: u32,
    pub losses: u32,
    /// 1-based index of the encounter being offered or fought.
    pub current_battle: u32,
    pub fought_enemies: BTreeSet<EnemyId>,
    pub excluded_members: BTreeSet<JobId>,
    /// Enemies offered for the current battle.
    pub offered: Vec<EnemyId>,
}

impl CampaignState {
    pub fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            current_battle: 1,
            fought_enemies: BTreeSet::new(),
            excluded_members: BTreeSet::new(),
            offered: Vec::new(),
        }
    }

    pub fn battles_fought(&self) -> u32 {
        self.wins + self.losses
    }

    pub fn has_fought(&self, enemy: EnemyId) -> bool {
        self.fought_enemies.contains(&enemy)
    }

    pub fn is_excluded(&self, job: &JobId) -> bool {
        self.excluded_members.contains(job)
    }
}

impl Default for CampaignState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "serde")]
impl CampaignState {
    /// Serializes the state with bincode.
    ///
    /// # Errors
    ///
    /// Returns `StateError::Serialization` if encoding fails.
    pub fn encode(&self) -> Result<Vec<u8>, super::StateError> {
        bincode::serialize(self).map_err(|e| super::StateError::Serialization(e.to_string()))
    }

    /// Restores a state produced by [`CampaignState::encode`].
    ///
    /// # Errors
    ///
    /// Returns `StateError::Deserialization` if the bytes are not a valid
    /// encoded state.
    pub fn decode(bytes: &[u8]) -> Result<Self, super::StateError> {
        bincode::deserialize(bytes).map_err(|e| super::StateError::Deserialization(e.to_string()))
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn encoded_state_restores_exclusions() {
        let mut state = CampaignState::new();
        state.wins = 2;
        state.current_battle = 3;
        state.fought_enemies.insert(EnemyId(4));
        state.excluded_members.insert(JobId::from("rogue"));
        state.offered = vec![EnemyId(1), EnemyId(5)];

        let bytes = state.encode().unwrap();
        assert_eq!(CampaignState::decode(&bytes).unwrap(), state);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            CampaignState::decode(&[0xff, 0x01]),
            Err(crate::state::StateError::Deserialization(_))
        ));
    }
}
