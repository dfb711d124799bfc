//! Authoritative battle state representation.
//!
//! This module owns the data structures that describe the party, the bound
//! enemy, the battle log and the campaign bookkeeping. Runtime layers clone or
//! query this state but mutate it exclusively through the engine and the
//! campaign controller.
mod campaign;
mod combatant;
mod error;
mod log;
mod party;

pub use campaign::CampaignState;
pub use combatant::{Combatant, EnemyInstance};
pub use error::StateError;
pub use log::{BattleLog, BattleLogEntry, LogCategory};
pub use party::Party;

/// Phase of the encounter state machine.
///
/// `AwaitingEnemySelection → PlayerTurn ⇄ EnemyTurn → {Victory | Defeat | Fled}`
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum BattlePhase {
    #[default]
    AwaitingEnemySelection,
    PlayerTurn,
    EnemyTurn,
    Victory,
    Defeat,
    Fled,
}

impl BattlePhase {
    /// True while an enemy is bound and the encounter has not ended.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::PlayerTurn | Self::EnemyTurn)
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self {
            Self::Victory => Some(BattleOutcome::Victory),
            Self::Defeat => Some(BattleOutcome::Defeat),
            Self::Fled => Some(BattleOutcome::Fled),
            _ => None,
        }
    }
}

/// How an encounter ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum BattleOutcome {
    Victory,
    Defeat,
    Fled,
}

impl BattleOutcome {
    /// Defeats and flees both count as campaign losses.
    pub fn is_win(&self) -> bool {
        matches!(self, Self::Victory)
    }
}

/// Canonical snapshot of one encounter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    /// RNG seed for deterministic random generation.
    ///
    /// Combined with `nonce` to generate unique seeds for each roll.
    pub game_seed: u64,
    /// Successful actions executed so far.
    pub nonce: u64,
    pub phase: BattlePhase,
    pub party: Party,
    /// The bound enemy. Kept after a terminal phase so the final hp stays
    /// observable, and dropped by [`BattleState::clear_encounter`].
    pub enemy: Option<EnemyInstance>,
    pub log: BattleLog,
}

impl BattleState {
    pub fn new(party: Party) -> Self {
        Self {
            party,
            ..Self::default()
        }
    }

    pub fn with_seed(game_seed: u64, party: Party) -> Self {
        Self {
            game_seed,
            party,
            ..Self::default()
        }
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.phase.outcome()
    }

    /// Discards the bound enemy so a new encounter can be selected.
    ///
    /// Returns the outcome of the encounter that was cleared, if it had ended.
    /// An encounter still in progress is left untouched.
    pub fn clear_encounter(&mut self) -> Option<BattleOutcome> {
        if self.phase.is_active() {
            return None;
        }
        let outcome = self.phase.outcome();
        self.enemy = None;
        self.phase = BattlePhase::AwaitingEnemySelection;
        outcome
    }

    /// Checks that every hp value lies within its bounds and that the active
    /// pointer targets a living member during the player turn.
    pub fn check_invariants(&self) -> Result<(), StateError> {
        for (index, member) in self.party.members().iter().enumerate() {
            if member.hp() > member.max_hp {
                return Err(StateError::CombatantHpOutOfRange {
                    index,
                    hp: member.hp(),
                    max_hp: member.max_hp,
                });
            }
            if member.experience >= member.experience_to_next {
                return Err(StateError::ExperienceOverflow { index });
            }
        }
        if let Some(enemy) = &self.enemy
            && enemy.hp() > enemy.max_hp()
        {
            return Err(StateError::EnemyHpOutOfRange {
                hp: enemy.hp(),
                max_hp: enemy.max_hp(),
            });
        }
        if self.phase == BattlePhase::PlayerTurn
            && !self.party.active().is_some_and(Combatant::is_alive)
        {
            return Err(StateError::ActiveCombatantDown {
                index: self.party.active_index(),
            });
        }
        Ok(())
    }
}
