use super::{ActionError, ActionTransition, check_invariants};
use crate::engine::turns::begin_player_turn;
use crate::env::{BattleEnv, EnemyDefinition, EnemyId};
use crate::state::{BattlePhase, BattleState, EnemyInstance};

/// Binds a fresh enemy instance at full hp and opens the player turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectEnemyAction {
    pub enemy: EnemyDefinition,
}

impl SelectEnemyAction {
    pub fn new(enemy: EnemyDefinition) -> Self {
        Self { enemy }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterStarted {
    pub enemy: EnemyId,
    /// Member taking the first player turn.
    pub active: usize,
}

impl ActionTransition for SelectEnemyAction {
    type Error = ActionError;
    type Result = EncounterStarted;

    fn pre_validate(&self, state: &BattleState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        if state.phase != BattlePhase::AwaitingEnemySelection || state.enemy.is_some() {
            return Err(ActionError::EncounterAlreadyBound);
        }
        if state.party.is_empty() {
            return Err(ActionError::EmptyParty);
        }
        if !state.party.any_alive() {
            return Err(ActionError::NoLivingCombatant);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut BattleState,
        env: &BattleEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let config = env.config()?;
        let rng = env.rng()?;

        state.log.clear();
        state.enemy = Some(EnemyInstance::spawn(&self.enemy));
        state.party.set_active(0);
        state.log.system(format!(
            "{} {} appeared!",
            self.enemy.icon(),
            self.enemy.name
        ));

        if !begin_player_turn(state, config, rng) {
            return Err(ActionError::NoLivingCombatant);
        }

        Ok(EncounterStarted {
            enemy: self.enemy.id,
            active: state.party.active_index(),
        })
    }

    fn post_validate(&self, state: &BattleState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        check_invariants(state)
    }
}
