//! Encounter state machine and action execution pipeline.
//!
//! The [`BattleEngine`] is the authoritative reducer for [`BattleState`]. It
//! orchestrates the transition phases, derives [`BattleEvent`]s for the
//! presentation layer and surfaces rich error information for the runtime.
//! Enemy turns are not scheduled here: after a player action that hands over
//! the turn, the caller invokes [`BattleEngine::resolve_enemy_turn`] whenever
//! it chooses.

mod errors;
mod events;
mod transition;
pub(crate) mod turns;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use events::BattleEvent;

use crate::action::{ActionResult, BattleAction};
use crate::combat::AttackStyle;
use crate::env::{BattleEnv, EnemyDefinition};
use crate::state::BattleState;

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// Action-specific execution result.
    pub result: ActionResult,
    /// Notifications for every observable change, in order.
    pub events: Vec<BattleEvent>,
}

/// Battle engine that validates and applies actions for one encounter.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
///
/// A failed action never leaves a partial mutation behind: the state is
/// restored to its pre-action snapshot before the error is returned.
pub struct BattleEngine<'a> {
    state: &'a mut BattleState,
}

impl<'a> BattleEngine<'a> {
    /// Creates a new battle engine with the given state.
    pub fn new(state: &'a mut BattleState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &BattleState {
        &*self.state
    }

    /// Executes an action through its transition pipeline.
    ///
    /// Increments the nonce after every successful action so that the next
    /// roll draws from a fresh seed.
    pub fn execute(
        &mut self,
        env: BattleEnv<'_>,
        action: &BattleAction,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let before = self.state.clone();

        let result = match transition::execute_transition(action, self.state, &env) {
            Ok(result) => result,
            Err(err) => {
                *self.state = before;
                return Err(err);
            }
        };

        self.state.nonce += 1;

        let events = BattleEvent::diff(&before, self.state);
        Ok(ExecutionOutcome { result, events })
    }

    /// Binds `enemy` at full hp and opens the first player turn.
    pub fn select_enemy(
        &mut self,
        env: BattleEnv<'_>,
        enemy: &EnemyDefinition,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(env, &BattleAction::select_enemy(enemy))
    }

    pub fn attack(
        &mut self,
        env: BattleEnv<'_>,
        style: AttackStyle,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(env, &BattleAction::attack(style))
    }

    pub fn heal(&mut self, env: BattleEnv<'_>) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(env, &BattleAction::heal())
    }

    pub fn switch_active(&mut self, env: BattleEnv<'_>) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(env, &BattleAction::switch_active())
    }

    pub fn flee(&mut self, env: BattleEnv<'_>) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(env, &BattleAction::flee())
    }

    /// Resolves the pending enemy turn. Rejected without effect outside
    /// `EnemyTurn`, so it is safe to call speculatively.
    pub fn resolve_enemy_turn(
        &mut self,
        env: BattleEnv<'_>,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(env, &BattleAction::enemy_turn())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionError;
    use crate::compatibility::{Compatibility, CompatibilityTable, TagCompatibility};
    use crate::config::{BattleConfig, CompatibilityScope, TurnOrder};
    use crate::env::{Env, JobDefinition, PcgRng, RngOracle, ScriptedRng, StaticCatalog};
    use crate::state::{BattlePhase, BattleOutcome, Combatant, LogCategory, Party};

    fn member(id: &str, hp: u32, attack: u32, defense: u32, magic: u32) -> Combatant {
        let job = JobDefinition::new(id, id.to_uppercase(), hp, attack, defense, magic);
        Combatant::from_job(&job, &BattleConfig::default())
    }

    fn battle(members: Vec<Combatant>) -> BattleState {
        let mut party = Party::new();
        for m in members {
            party.push(m).unwrap();
        }
        BattleState::with_seed(7, party)
    }

    struct Fixture {
        catalog: StaticCatalog,
        compatibility: Compatibility,
        config: BattleConfig,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                catalog: StaticCatalog::default(),
                compatibility: Compatibility::Table(CompatibilityTable::new()),
                config: BattleConfig::default(),
            }
        }

        fn env<'a, R: RngOracle>(&'a self, rng: &'a R) -> BattleEnv<'a> {
            Env::with_all(&self.catalog, &self.compatibility, rng, &self.config).into_battle_env()
        }
    }

    #[test]
    fn scenario_a_single_hit_wins_and_credits_full_reward() {
        let fixture = Fixture::new();
        let rng = ScriptedRng::rolls([5]);
        let mut state = battle(vec![member("hero", 100, 10, 0, 0)]);
        let enemy = EnemyDefinition::new(1, "Slime", 5, 3, 40);

        let mut engine = BattleEngine::new(&mut state);
        engine.select_enemy(fixture.env(&rng), &enemy).unwrap();
        let outcome = engine
            .attack(fixture.env(&rng), AttackStyle::Physical)
            .unwrap();

        let ActionResult::Attack(attack) = outcome.result else {
            panic!("expected attack result");
        };
        assert_eq!(attack.roll, 5);
        assert_eq!(attack.damage, 5);
        assert!(attack.defeated);
        assert_eq!(attack.experience_share, 40);
        assert!(
            outcome
                .events
                .contains(&BattleEvent::EncounterEnded { outcome: BattleOutcome::Victory })
        );

        assert_eq!(state.phase, BattlePhase::Victory);
        assert_eq!(state.enemy.as_ref().unwrap().hp(), 0);
        assert_eq!(state.party.members()[0].experience, 40);
    }

    #[test]
    fn scenario_b_enemy_always_deals_at_least_one() {
        let fixture = Fixture::new();
        let rng = ScriptedRng::rolls([1, 3]);
        let mut state = battle(vec![member("warrior", 120, 18, 20, 3)]);
        let enemy = EnemyDefinition::new(2, "Goblin", 50, 3, 30);

        let mut engine = BattleEngine::new(&mut state);
        engine.select_enemy(fixture.env(&rng), &enemy).unwrap();
        engine
            .attack(fixture.env(&rng), AttackStyle::Physical)
            .unwrap();
        let outcome = engine.resolve_enemy_turn(fixture.env(&rng)).unwrap();

        let ActionResult::EnemyTurn(hit) = outcome.result else {
            panic!("expected enemy turn result");
        };
        assert_eq!(hit.roll, 3);
        assert_eq!(hit.damage, 1);
        assert_eq!(state.party.members()[0].hp(), 119);
        assert_eq!(state.phase, BattlePhase::PlayerTurn);
    }

    #[test]
    fn scenario_c_victory_levels_up_with_carry_over() {
        let fixture = Fixture::new();
        let rng = ScriptedRng::rolls([10]);
        let mut hero = member("hero", 100, 10, 0, 0);
        hero.experience = 95;
        let mut state = battle(vec![hero]);
        let enemy = EnemyDefinition::new(3, "Orc", 10, 5, 30);

        let mut engine = BattleEngine::new(&mut state);
        engine.select_enemy(fixture.env(&rng), &enemy).unwrap();
        let outcome = engine
            .attack(fixture.env(&rng), AttackStyle::Physical)
            .unwrap();

        assert!(
            outcome
                .events
                .contains(&BattleEvent::LevelUp { member: 0, level: 2 })
        );
        let hero = &state.party.members()[0];
        assert_eq!(hero.level, 2);
        assert_eq!(hero.experience, 25);
        assert_eq!(hero.experience_to_next, 200);
    }

    #[test]
    fn scenario_d_pointer_lands_on_last_survivor() {
        let fixture = Fixture::new();
        // attack, enemy KO's member 0, attack, enemy KO's member 1
        let rng = ScriptedRng::rolls([1, 10, 1, 10]);
        let mut state = battle(vec![
            member("a", 5, 4, 0, 0),
            member("b", 5, 4, 0, 0),
            member("c", 80, 4, 0, 0),
        ]);
        let enemy = EnemyDefinition::new(4, "Dragon", 200, 10, 100);

        let mut engine = BattleEngine::new(&mut state);
        engine.select_enemy(fixture.env(&rng), &enemy).unwrap();
        engine
            .attack(fixture.env(&rng), AttackStyle::Physical)
            .unwrap();
        let first = engine.resolve_enemy_turn(fixture.env(&rng)).unwrap();
        assert!(
            first
                .events
                .contains(&BattleEvent::ActiveChanged { from: 0, to: 1 })
        );
        engine
            .attack(fixture.env(&rng), AttackStyle::Physical)
            .unwrap();
        engine.resolve_enemy_turn(fixture.env(&rng)).unwrap();

        assert_eq!(state.party.active_index(), 2);
        assert_eq!(state.phase, BattlePhase::PlayerTurn);
        assert_eq!(state.party.living_count(), 1);
    }

    #[test]
    fn scenario_e_last_knockout_is_defeat() {
        let fixture = Fixture::new();
        let rng = ScriptedRng::rolls([1, 10, 1, 10]);
        let mut state = battle(vec![member("a", 5, 4, 0, 0), member("b", 5, 4, 0, 0)]);
        let enemy = EnemyDefinition::new(5, "Demon", 200, 10, 100);

        let mut engine = BattleEngine::new(&mut state);
        engine.select_enemy(fixture.env(&rng), &enemy).unwrap();
        for _ in 0..2 {
            engine
                .attack(fixture.env(&rng), AttackStyle::Physical)
                .unwrap();
            engine.resolve_enemy_turn(fixture.env(&rng)).unwrap();
        }

        assert_eq!(state.phase, BattlePhase::Defeat);
        assert!(!state.party.any_alive());
        assert_eq!(
            state.log.last().map(|entry| entry.message.as_str()),
            Some("The whole party has fallen...")
        );
    }

    #[test]
    fn rejected_actions_leave_state_untouched() {
        let fixture = Fixture::new();
        let rng = ScriptedRng::rolls([2]);
        let mut state = battle(vec![member("monk", 90, 10, 18, 15)]);
        let enemy = EnemyDefinition::new(1, "Slime", 30, 4, 10);

        let mut engine = BattleEngine::new(&mut state);
        let err = engine.heal(fixture.env(&rng)).unwrap_err();
        assert_eq!(err.action_error(), &ActionError::NoEncounter);

        engine.select_enemy(fixture.env(&rng), &enemy).unwrap();
        let snapshot = engine.state().clone();

        let err = engine.heal(fixture.env(&rng)).unwrap_err();
        assert_eq!(err.action_error(), &ActionError::AlreadyFullHp { index: 0 });
        assert!(err.is_rejection());

        let err = engine.resolve_enemy_turn(fixture.env(&rng)).unwrap_err();
        assert_eq!(err.action_error(), &ActionError::NotEnemyTurn);

        let err = engine.select_enemy(fixture.env(&rng), &enemy).unwrap_err();
        assert_eq!(err.action_error(), &ActionError::EncounterAlreadyBound);

        let err = engine.switch_active(fixture.env(&rng)).unwrap_err();
        assert_eq!(err.action_error(), &ActionError::NoOtherLivingCombatant);

        assert_eq!(engine.state(), &snapshot);

        engine
            .attack(fixture.env(&rng), AttackStyle::Physical)
            .unwrap();
        let err = engine
            .attack(fixture.env(&rng), AttackStyle::Physical)
            .unwrap_err();
        assert_eq!(err.action_error(), &ActionError::NotPlayerTurn);
    }

    #[test]
    fn heal_restores_thirty_percent_and_passes_turn() {
        let fixture = Fixture::new();
        let rng = ScriptedRng::default();
        let mut state = battle(vec![member("wizard", 60, 8, 5, 25).with_hp(20)]);
        let enemy = EnemyDefinition::new(1, "Slime", 30, 4, 10);

        let mut engine = BattleEngine::new(&mut state);
        engine.select_enemy(fixture.env(&rng), &enemy).unwrap();
        let outcome = engine.heal(fixture.env(&rng)).unwrap();

        assert_eq!(
            outcome.result,
            ActionResult::Heal(crate::action::HealResult {
                member: 0,
                amount: 18,
                hp: 38
            })
        );
        assert_eq!(state.phase, BattlePhase::EnemyTurn);
    }

    #[test]
    fn heal_is_clamped_to_max_hp() {
        let fixture = Fixture::new();
        let rng = ScriptedRng::default();
        let mut state = battle(vec![member("wizard", 60, 8, 5, 25).with_hp(55)]);
        let enemy = EnemyDefinition::new(1, "Slime", 30, 4, 10);

        let mut engine = BattleEngine::new(&mut state);
        engine.select_enemy(fixture.env(&rng), &enemy).unwrap();
        engine.heal(fixture.env(&rng)).unwrap();

        assert_eq!(state.party.members()[0].hp(), 60);
    }

    #[test]
    fn switch_is_free_and_skips_downed_members() {
        let fixture = Fixture::new();
        let rng = ScriptedRng::default();
        let mut state = battle(vec![
            member("a", 30, 4, 0, 0),
            member("b", 30, 4, 0, 0).with_hp(0),
            member("c", 30, 4, 0, 0),
        ]);
        let enemy = EnemyDefinition::new(1, "Slime", 30, 4, 10);

        let mut engine = BattleEngine::new(&mut state);
        engine.select_enemy(fixture.env(&rng), &enemy).unwrap();
        engine.switch_active(fixture.env(&rng)).unwrap();
        assert_eq!(engine.active_index(), 2);
        assert!(engine.is_player_turn());

        engine.switch_active(fixture.env(&rng)).unwrap();
        assert_eq!(engine.active_index(), 0);
    }

    #[test]
    fn random_actor_disables_switch() {
        let mut fixture = Fixture::new();
        fixture.config = BattleConfig::default().with_turn_order(TurnOrder::RandomActor);
        let rng = PcgRng;
        let mut state = battle(vec![member("a", 30, 4, 0, 0), member("b", 30, 4, 0, 0)]);
        let enemy = EnemyDefinition::new(1, "Slime", 30, 4, 10);

        let mut engine = BattleEngine::new(&mut state);
        engine.select_enemy(fixture.env(&rng), &enemy).unwrap();
        let err = engine.switch_active(fixture.env(&rng)).unwrap_err();
        assert_eq!(err.action_error(), &ActionError::SwitchDisabled);
    }

    #[test]
    fn flee_ends_encounter_without_rewards() {
        let fixture = Fixture::new();
        let rng = ScriptedRng::rolls([1]);
        let mut state = battle(vec![member("rogue", 80, 15, 8, 5)]);
        let enemy = EnemyDefinition::new(1, "Slime", 30, 4, 10);

        let mut engine = BattleEngine::new(&mut state);
        engine.select_enemy(fixture.env(&rng), &enemy).unwrap();
        engine
            .attack(fixture.env(&rng), AttackStyle::Physical)
            .unwrap();
        // Fleeing cancels the pending enemy turn.
        let outcome = engine.flee(fixture.env(&rng)).unwrap();

        assert_eq!(outcome.result, ActionResult::Fled);
        assert_eq!(state.phase, BattlePhase::Fled);
        assert_eq!(state.party.members()[0].experience, 0);

        let err = BattleEngine::new(&mut state)
            .flee(fixture.env(&rng))
            .unwrap_err();
        assert_eq!(err.action_error(), &ActionError::NoEncounter);
    }

    #[test]
    fn compatibility_scales_physical_and_dampens_magic() {
        let mut fixture = Fixture::new();
        fixture.compatibility = Compatibility::Tags(TagCompatibility::default());
        let rng = ScriptedRng::rolls([10, 1, 10]);
        let mut state = battle(vec![member("monk", 90, 10, 18, 15)]);
        let ghost = EnemyDefinition::new(9, "Ghost", 500, 1, 10).with_weakness("monk");

        let mut engine = BattleEngine::new(&mut state);
        engine.select_enemy(fixture.env(&rng), &ghost).unwrap();

        let physical = engine
            .attack(fixture.env(&rng), AttackStyle::Physical)
            .unwrap();
        let ActionResult::Attack(physical) = physical.result else {
            panic!("expected attack result");
        };
        assert_eq!(physical.damage, 15);
        assert_eq!(
            state_log_last_system(engine.state()),
            Some("It's effective! Damage x1.5")
        );

        engine.resolve_enemy_turn(fixture.env(&rng)).unwrap();
        let magic = engine.attack(fixture.env(&rng), AttackStyle::Magic).unwrap();
        let ActionResult::Attack(magic) = magic.result else {
            panic!("expected attack result");
        };
        assert_eq!(magic.damage, 14);
    }

    fn state_log_last_system(state: &BattleState) -> Option<&str> {
        state
            .log
            .entries()
            .iter()
            .rev()
            .find(|entry| entry.category == LogCategory::System)
            .map(|entry| entry.message.as_str())
    }

    #[test]
    fn party_average_scope_uses_mean_score() {
        let mut fixture = Fixture::new();
        fixture.compatibility = Compatibility::Table(
            CompatibilityTable::new()
                .with_entry("Slime", "wizard", 1.5)
                .with_entry("Slime", "hero", 0.7),
        );
        fixture.config =
            BattleConfig::default().with_compatibility_scope(CompatibilityScope::PartyAverage);
        let rng = ScriptedRng::rolls([10]);
        let mut state = battle(vec![member("hero", 100, 20, 12, 8), member("wizard", 60, 8, 5, 25)]);
        let slime = EnemyDefinition::new(1, "Slime", 100, 4, 10);

        let mut engine = BattleEngine::new(&mut state);
        engine.select_enemy(fixture.env(&rng), &slime).unwrap();
        let outcome = engine
            .attack(fixture.env(&rng), AttackStyle::Physical)
            .unwrap();

        let ActionResult::Attack(attack) = outcome.result else {
            panic!("expected attack result");
        };
        assert!((attack.multiplier - 1.1).abs() < 1e-9);
        assert_eq!(attack.damage, 11);
    }

    #[test]
    fn seeded_encounters_replay_identically() {
        let fixture = Fixture::new();
        let run = || {
            let mut state = battle(vec![member("hero", 100, 20, 12, 8), member("monk", 90, 10, 18, 15)]);
            let enemy = EnemyDefinition::new(4, "Dragon", 150, 22, 120);
            let mut engine = BattleEngine::new(&mut state);
            engine.select_enemy(fixture.env(&PcgRng), &enemy).unwrap();
            while engine.state().phase.is_active() {
                if engine.is_player_turn() {
                    engine
                        .attack(fixture.env(&PcgRng), AttackStyle::Physical)
                        .unwrap();
                } else {
                    engine.resolve_enemy_turn(fixture.env(&PcgRng)).unwrap();
                }
            }
            state
        };

        let first = run();
        assert!(first.phase.is_terminal());
        assert_eq!(first, run());
    }

    #[test]
    fn encounter_start_clears_log_and_emits_events() {
        let fixture = Fixture::new();
        let rng = ScriptedRng::default();
        let mut state = battle(vec![member("hero", 100, 20, 12, 8)]);
        state.log.system("stale line");
        let enemy = EnemyDefinition::new(1, "Slime", 30, 4, 10).with_icon("🟢");

        let outcome = BattleEngine::new(&mut state)
            .select_enemy(fixture.env(&rng), &enemy)
            .unwrap();

        assert_eq!(state.log.len(), 1);
        assert_eq!(state.log.entries()[0].message, "🟢 Slime appeared!");
        assert!(matches!(
            outcome.events.first(),
            Some(BattleEvent::EncounterStarted { hp: 30, .. })
        ));
        assert!(outcome.events.contains(&BattleEvent::PhaseChanged {
            from: BattlePhase::AwaitingEnemySelection,
            to: BattlePhase::PlayerTurn,
        }));
    }
}
