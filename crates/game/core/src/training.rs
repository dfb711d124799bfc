//! Training ground: repeatable one-on-one fights with a persistent trainee.
//!
//! There is no campaign bookkeeping here. Hp carries over between fights,
//! except that a defeat restores the party to full. Experience and levels
//! always persist.

use crate::combat::AttackStyle;
use crate::config::BattleConfig;
use crate::engine::{BattleEngine, ExecuteError, ExecutionOutcome};
use crate::env::{BattleEnv, EnemyDefinition, JobDefinition};
use crate::state::{BattleOutcome, BattleState, Combatant, Party};

/// Tally of finished training fights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingRecord {
    pub victories: u32,
    pub defeats: u32,
    pub flees: u32,
}

impl TrainingRecord {
    fn record(&mut self, outcome: BattleOutcome) {
        match outcome {
            BattleOutcome::Victory => self.victories += 1,
            BattleOutcome::Defeat => self.defeats += 1,
            BattleOutcome::Fled => self.flees += 1,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TrainingGround {
    battle: BattleState,
    record: TrainingRecord,
}

impl TrainingGround {
    pub fn new(party: Party, game_seed: u64) -> Self {
        Self {
            battle: BattleState::with_seed(game_seed, party),
            record: TrainingRecord::default(),
        }
    }

    /// A ground with the single default trainee.
    pub fn with_trainee(config: &BattleConfig, game_seed: u64) -> Self {
        let mut party = Party::new();
        // An empty party always has room for one.
        let _ = party.push(Combatant::from_job(&JobDefinition::trainee(), config));
        Self::new(party, game_seed)
    }

    pub fn battle(&self) -> &BattleState {
        &self.battle
    }

    pub fn record(&self) -> TrainingRecord {
        self.record
    }

    /// Starts a fight against `enemy`, discarding a finished one first.
    pub fn engage(
        &mut self,
        env: BattleEnv<'_>,
        enemy: &EnemyDefinition,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.battle.clear_encounter();
        BattleEngine::new(&mut self.battle).select_enemy(env, enemy)
    }

    pub fn attack(
        &mut self,
        env: BattleEnv<'_>,
        style: AttackStyle,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let outcome = BattleEngine::new(&mut self.battle).attack(env, style)?;
        self.settle();
        Ok(outcome)
    }

    pub fn heal(&mut self, env: BattleEnv<'_>) -> Result<ExecutionOutcome, ExecuteError> {
        let outcome = BattleEngine::new(&mut self.battle).heal(env)?;
        self.settle();
        Ok(outcome)
    }

    pub fn switch_active(&mut self, env: BattleEnv<'_>) -> Result<ExecutionOutcome, ExecuteError> {
        BattleEngine::new(&mut self.battle).switch_active(env)
    }

    pub fn flee(&mut self, env: BattleEnv<'_>) -> Result<ExecutionOutcome, ExecuteError> {
        let outcome = BattleEngine::new(&mut self.battle).flee(env)?;
        self.settle();
        Ok(outcome)
    }

    pub fn resolve_enemy_turn(
        &mut self,
        env: BattleEnv<'_>,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let outcome = BattleEngine::new(&mut self.battle).resolve_enemy_turn(env)?;
        self.settle();
        Ok(outcome)
    }

    fn settle(&mut self) {
        let Some(outcome) = self.battle.outcome() else {
            return;
        };
        self.record.record(outcome);
        if outcome == BattleOutcome::Defeat {
            self.battle.party.restore_all();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compatibility::{Compatibility, CompatibilityTable};
    use crate::env::{Env, PcgRng, RngOracle, ScriptedRng, StaticCatalog};
    use crate::state::BattlePhase;

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
    fn trainee_has_default_stats() {
        let ground = TrainingGround::with_trainee(&BattleConfig::default(), 1);
        let trainee = &ground.battle().party.members()[0];
        assert_eq!(trainee.max_hp, 100);
        assert_eq!(trainee.attack, 15);
        assert_eq!(trainee.defense, 0);
        assert_eq!(trainee.magic, 0);
    }

    #[test]
    fn hp_carries_over_between_fights() {
        let fixture = Fixture::new();
        let mut ground = TrainingGround::with_trainee(&fixture.config, 1);
        let wolf = EnemyDefinition::new(1, "Wolf", 40, 10, 10);

        // trainee hits for 1, wolf hits for 10, then the trainee runs
        let rng = ScriptedRng::rolls([1, 10]);
        ground.engage(fixture.env(&rng), &wolf).unwrap();
        ground.attack(fixture.env(&rng), AttackStyle::Physical).unwrap();
        ground.resolve_enemy_turn(fixture.env(&rng)).unwrap();
        ground.flee(fixture.env(&rng)).unwrap();

        ground.engage(fixture.env(&PcgRng), &wolf).unwrap();
        assert_eq!(ground.battle().party.members()[0].hp(), 90);
        assert_eq!(ground.record().flees, 1);
    }

    #[test]
    fn defeat_restores_trainee() {
        let fixture = Fixture::new();
        let mut ground = TrainingGround::with_trainee(&fixture.config, 1);
        let ogre = EnemyDefinition::new(2, "Ogre", 500, 150, 10);

        let rng = ScriptedRng::rolls([1, 150]);
        ground.engage(fixture.env(&rng), &ogre).unwrap();
        ground.attack(fixture.env(&rng), AttackStyle::Physical).unwrap();
        ground.resolve_enemy_turn(fixture.env(&rng)).unwrap();

        assert_eq!(ground.battle().outcome(), Some(BattleOutcome::Defeat));
        assert!(ground.battle().party.members()[0].is_full_hp());
        assert_eq!(ground.record().defeats, 1);
    }

    #[test]
    fn trainee_magic_still_deals_one_damage() {
        let fixture = Fixture::new();
        let mut ground = TrainingGround::with_trainee(&fixture.config, 1);
        let slime = EnemyDefinition::new(3, "Slime", 30, 1, 60);

        ground.engage(fixture.env(&PcgRng), &slime).unwrap();
        ground.attack(fixture.env(&PcgRng), AttackStyle::Magic).unwrap();

        let enemy = ground.battle().enemy.as_ref().unwrap();
        assert_eq!(enemy.hp(), 29);
        assert_eq!(ground.battle().phase, BattlePhase::EnemyTurn);
    }

    #[test]
    fn experience_persists_across_fights() {
        let fixture = Fixture::new();
        let mut ground = TrainingGround::with_trainee(&fixture.config, 1);
        let slime = EnemyDefinition::new(3, "Slime", 5, 1, 60);

        for _ in 0..2 {
            let rng = ScriptedRng::rolls([10]);
            ground.engage(fixture.env(&rng), &slime).unwrap();
            ground.attack(fixture.env(&rng), AttackStyle::Physical).unwrap();
        }

        let trainee = &ground.battle().party.members()[0];
        assert_eq!(trainee.level, 2);
        assert_eq!(trainee.experience, 20);
        assert_eq!(ground.record().victories, 2);
    }
}
