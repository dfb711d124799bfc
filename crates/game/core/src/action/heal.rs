use super::{ActionError, ActionTransition, check_invariants, require_player_turn};
use crate::combat::heal_amount;
use crate::env::BattleEnv;
use crate::state::{BattlePhase, BattleState};

/// Restores `floor(max_hp * heal_ratio)` to the active combatant and passes
/// the turn to the enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealResult {
    pub member: usize,
    /// Hp actually restored after clamping to `max_hp`.
    pub amount: u32,
    pub hp: u32,
}

impl ActionTransition for HealAction {
    type Error = ActionError;
    type Result = HealResult;

    fn pre_validate(&self, state: &BattleState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        require_player_turn(state)?;

        let index = state.party.active_index();
        match state.party.active() {
            Some(member) if !member.is_alive() => Err(ActionError::CombatantDown { index }),
            Some(member) if member.is_full_hp() => Err(ActionError::AlreadyFullHp { index }),
            Some(_) => Ok(()),
            None => Err(ActionError::CombatantDown { index }),
        }
    }

    fn apply(
        &self,
        state: &mut BattleState,
        env: &BattleEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let config = env.config()?;

        let member = state.party.active_index();
        let combatant = state
            .party
            .active_mut()
            .ok_or(ActionError::CombatantDown { index: member })?;
        let restore = heal_amount(combatant.max_hp, config);
        let amount = combatant.heal(restore);
        let hp = combatant.hp();
        let name = combatant.name.clone();

        state
            .log
            .player(format!("{name} casts heal! Recovered {amount} HP!"));
        state.phase = BattlePhase::EnemyTurn;

        Ok(HealResult { member, amount, hp })
    }

    fn post_validate(&self, state: &BattleState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        check_invariants(state)
    }
}
