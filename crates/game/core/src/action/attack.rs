use super::{ActionError, ActionTransition, check_invariants, require_player_turn};
use crate::combat::{
    AttackStyle, LevelUp, grant_experience, magic_damage, physical_damage, split_reward,
};
use crate::config::CompatibilityScope;
use crate::env::{BattleEnv, RollContext, compute_seed};
use crate::state::{BattlePhase, BattleState};

/// Offensive action by the active combatant against the bound enemy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub style: AttackStyle,
}

impl AttackAction {
    pub fn new(style: AttackStyle) -> Self {
        Self { style }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub attacker: usize,
    pub style: AttackStyle,
    /// Uniform roll in `[1, max(power, 1)]` before the multiplier.
    pub roll: u32,
    pub multiplier: f64,
    pub damage: u32,
    pub enemy_hp: u32,
    pub defeated: bool,
    /// Experience credited to each member on victory.
    pub experience_share: u32,
    pub level_ups: Vec<LevelUp>,
}

/// Log threshold above which a physical hit is called out as effective.
const EFFECTIVE_ABOVE: f64 = 1.1;
/// Log threshold below which a physical hit is called out as ineffective.
const INEFFECTIVE_BELOW: f64 = 0.9;

impl ActionTransition for AttackAction {
    type Error = ActionError;
    type Result = AttackResult;

    fn pre_validate(&self, state: &BattleState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        require_player_turn(state)?;

        let index = state.party.active_index();
        if !state.party.active().is_some_and(|member| member.is_alive()) {
            return Err(ActionError::CombatantDown { index });
        }
        match &state.enemy {
            Some(enemy) if enemy.is_alive() => Ok(()),
            Some(_) => Err(ActionError::EnemyDown),
            None => Err(ActionError::NoEncounter),
        }
    }

    fn apply(
        &self,
        state: &mut BattleState,
        env: &BattleEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let config = env.config()?;
        let compatibility = env.compatibility()?;
        let rng = env.rng()?;

        let index = state.party.active_index();
        let attacker = state
            .party
            .active()
            .ok_or(ActionError::CombatantDown { index })?;
        let enemy = state.enemy.as_ref().ok_or(ActionError::NoEncounter)?;

        let power = match self.style {
            AttackStyle::Physical => attacker.attack,
            AttackStyle::Magic => attacker.magic,
        };
        let multiplier = match config.compatibility_scope {
            CompatibilityScope::Attacker => compatibility.score(&attacker.job, &enemy.definition),
            CompatibilityScope::PartyAverage => {
                compatibility.party_score(&state.party.job_ids(), &enemy.definition)
            }
        };

        let seed = compute_seed(
            state.game_seed,
            state.nonce,
            index as u32,
            RollContext::PlayerDamage,
        );
        let roll = rng.roll_die(seed, power);
        let damage = match self.style {
            AttackStyle::Physical => physical_damage(roll, multiplier),
            AttackStyle::Magic => magic_damage(roll, multiplier, config),
        };

        let attacker_name = attacker.name.clone();
        let enemy_name = enemy.name().to_owned();
        let reward = enemy.definition.experience_reward;

        let enemy_hp = match state.enemy.as_mut() {
            Some(enemy) => {
                enemy.take_damage(damage);
                enemy.hp()
            }
            None => return Err(ActionError::NoEncounter),
        };

        match self.style {
            AttackStyle::Physical => {
                state.log.player(format!(
                    "{attacker_name} attacks! {enemy_name} takes {damage} damage!"
                ));
                if multiplier > EFFECTIVE_ABOVE {
                    state
                        .log
                        .system(format!("It's effective! Damage x{multiplier:.1}"));
                } else if multiplier < INEFFECTIVE_BELOW {
                    state
                        .log
                        .system(format!("It's not very effective... Damage x{multiplier:.1}"));
                }
            }
            AttackStyle::Magic => {
                state.log.player(format!(
                    "{attacker_name} casts a spell! {enemy_name} takes {damage} damage!"
                ));
            }
        }

        let mut result = AttackResult {
            attacker: index,
            style: self.style,
            roll,
            multiplier,
            damage,
            enemy_hp,
            defeated: enemy_hp == 0,
            experience_share: 0,
            level_ups: Vec::new(),
        };

        if !result.defeated {
            state.phase = BattlePhase::EnemyTurn;
            return Ok(result);
        }

        state.log.system(format!("{enemy_name} was defeated!"));
        state.log.system(format!("Gained {reward} experience!"));

        let share = split_reward(reward, state.party.len());
        result.experience_share = share;
        let mut level_logs = Vec::new();
        for (member, combatant) in state.party.members_mut().enumerate() {
            for level in grant_experience(combatant, share, config) {
                level_logs.push(format!("{} reached level {level}!", combatant.name));
                result.level_ups.push(LevelUp { member, level });
            }
        }
        for line in level_logs {
            state.log.system(line);
        }

        state.phase = BattlePhase::Victory;
        Ok(result)
    }

    fn post_validate(&self, state: &BattleState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        check_invariants(state)
    }
}
