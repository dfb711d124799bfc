use crate::compatibility::CompatibilityBand;
use crate::env::EnemyId;
use crate::state::{BattleOutcome, Combatant};

/// Lifecycle of a campaign controller.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum CampaignStatus {
    #[default]
    NotStarted,
    InProgress,
    Cleared,
    GameOver,
}

impl CampaignStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, Self::Cleared | Self::GameOver)
    }
}

/// Result of one finished encounter, after campaign bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterReport {
    pub enemy: EnemyId,
    pub outcome: BattleOutcome,
    pub wins: u32,
    pub losses: u32,
    /// Status after this encounter; `Cleared` or `GameOver` ends the run.
    pub status: CampaignStatus,
}

/// Snapshot produced when a run ends, before its state is torn down.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CampaignSummary {
    pub status: CampaignStatus,
    pub wins: u32,
    pub losses: u32,
    pub battles_fought: u32,
    pub fought_enemies: Vec<EnemyId>,
    /// Party with final levels and experience.
    pub party: Vec<Combatant>,
}

impl CampaignSummary {
    pub fn is_clear(&self) -> bool {
        self.status == CampaignStatus::Cleared
    }
}

/// Composite compatibility of the whole party against one offered enemy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OfferPreview {
    pub enemy: EnemyId,
    pub name: String,
    pub icon: String,
    pub hp: u32,
    pub attack: u32,
    pub experience_reward: u32,
    pub party_score: f64,
    pub band: CompatibilityBand,
}
