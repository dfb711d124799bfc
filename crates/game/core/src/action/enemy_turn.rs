use super::{ActionError, ActionTransition, ENEMY_ACTOR, check_invariants};
use crate::combat::enemy_damage;
use crate::engine::turns::begin_player_turn;
use crate::env::{BattleEnv, RollContext, compute_seed};
use crate::state::{BattlePhase, BattleState};

/// The enemy strikes the active combatant.
///
/// A knockout moves the pointer to the next living member (wrapping around);
/// when nobody is left the encounter ends in `Defeat`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTurnAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyAttackResult {
    pub target: usize,
    /// Uniform roll in `[1, enemy attack]` before defense.
    pub roll: u32,
    pub damage: u32,
    pub target_hp: u32,
    pub knocked_out: bool,
    /// Member taking the next player turn, `None` on defeat.
    pub next_active: Option<usize>,
}

impl ActionTransition for EnemyTurnAction {
    type Error = ActionError;
    type Result = EnemyAttackResult;

    fn pre_validate(&self, state: &BattleState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        if state.phase != BattlePhase::EnemyTurn {
            return Err(ActionError::NotEnemyTurn);
        }
        if !state.enemy.as_ref().is_some_and(|enemy| enemy.is_alive()) {
            return Err(ActionError::EnemyDown);
        }
        let index = state.party.active_index();
        if !state.party.active().is_some_and(|member| member.is_alive()) {
            return Err(ActionError::CombatantDown { index });
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

        let (enemy_name, enemy_attack) = match &state.enemy {
            Some(enemy) => (enemy.name().to_owned(), enemy.definition.attack),
            None => return Err(ActionError::NoEncounter),
        };

        let seed = compute_seed(
            state.game_seed,
            state.nonce,
            ENEMY_ACTOR,
            RollContext::EnemyDamage,
        );
        let roll = rng.roll_die(seed, enemy_attack);

        let target = state.party.active_index();
        let combatant = state
            .party
            .active_mut()
            .ok_or(ActionError::CombatantDown { index: target })?;
        let damage = enemy_damage(roll, combatant.defense, config);
        combatant.take_damage(damage);
        let target_hp = combatant.hp();
        let target_name = combatant.name.clone();

        state.log.enemy(format!(
            "{enemy_name} attacks! {target_name} takes {damage} damage!"
        ));

        let knocked_out = target_hp == 0;
        if knocked_out {
            state.log.system(format!("{target_name} has fallen..."));
        }

        let next_active = if begin_player_turn(state, config, rng) {
            Some(state.party.active_index())
        } else {
            state.log.system("The whole party has fallen...");
            state.phase = BattlePhase::Defeat;
            None
        };

        Ok(EnemyAttackResult {
            target,
            roll,
            damage,
            target_hp,
            knocked_out,
            next_active,
        })
    }

    fn post_validate(&self, state: &BattleState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        check_invariants(state)
    }
}
