use super::{ActionError, ActionTransition, check_invariants, require_player_turn};
use crate::config::TurnOrder;
use crate::env::BattleEnv;
use crate::state::BattleState;

/// Rotates the active pointer to the next living combatant.
///
/// A free action: the phase stays `PlayerTurn` and the enemy does not act.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwitchActiveAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwitchResult {
    pub from: usize,
    pub to: usize,
}

impl ActionTransition for SwitchActiveAction {
    type Error = ActionError;
    type Result = SwitchResult;

    fn pre_validate(&self, state: &BattleState, env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        require_player_turn(state)?;

        if env.config()?.turn_order == TurnOrder::RandomActor {
            return Err(ActionError::SwitchDisabled);
        }
        if state.party.living_count() <= 1 {
            return Err(ActionError::NoOtherLivingCombatant);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut BattleState,
        _env: &BattleEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let from = state.party.active_index();
        let to = state
            .party
            .next_living_after(from)
            .filter(|&to| to != from)
            .ok_or(ActionError::NoOtherLivingCombatant)?;

        state.party.set_active(to);
        if let Some(member) = state.party.member(to) {
            let line = format!("{}'s turn!", member.name);
            state.log.system(line);
        }

        Ok(SwitchResult { from, to })
    }

    fn post_validate(&self, state: &BattleState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        check_invariants(state)
    }
}
