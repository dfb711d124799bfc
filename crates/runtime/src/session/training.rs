use gauntlet_core::{
    BattleAction, CatalogOracle, EnemyId, ExecuteError, ExecutionOutcome, TrainingGround,
};

use super::Session;
use super::campaign::log_level_ups;
use crate::error::{Result, RuntimeError};

/// Training mode operations for Session.
impl Session {
    pub fn training(&self) -> &TrainingGround {
        &self.training
    }

    /// Replaces the training party with one built from the selection.
    pub fn train_with_selection(&mut self) -> Result<()> {
        let (party, _) = self
            .build_party()
            .map_err(|err| self.reject("train_with_selection", err))?;
        tracing::info!("Training with {:?}", party.job_ids());
        self.training = TrainingGround::new(party, self.game_seed);
        Ok(())
    }

    /// Goes back to the lone default trainee.
    pub fn reset_training(&mut self) {
        self.training = TrainingGround::with_trainee(self.oracles.config(), self.game_seed);
    }

    /// Starts a training fight against any catalog enemy.
    pub fn train(&mut self, enemy: EnemyId) -> Result<ExecutionOutcome> {
        let Some(definition) = self.oracles.catalog().enemy(enemy).cloned() else {
            return Err(self.reject("train", RuntimeError::UnknownEnemy(enemy)));
        };
        let result = self
            .training
            .engage(self.oracles.as_battle_env(), &definition);
        self.finish_training_step("train", result)
    }

    /// Executes a battle action in the current training fight.
    pub fn train_act(&mut self, action: &BattleAction) -> Result<ExecutionOutcome> {
        let env = self.oracles.as_battle_env();
        let result = match action {
            BattleAction::SelectEnemy(select) => self.training.engage(env, &select.enemy),
            BattleAction::Attack(attack) => self.training.attack(env, attack.style),
            BattleAction::Heal(_) => self.training.heal(env),
            BattleAction::SwitchActive(_) => self.training.switch_active(env),
            BattleAction::Flee(_) => self.training.flee(env),
            BattleAction::EnemyTurn(_) => self.training.resolve_enemy_turn(env),
        };
        self.finish_training_step(action.as_snake_case(), result)
    }

    fn finish_training_step(
        &self,
        name: &str,
        result: std::result::Result<ExecutionOutcome, ExecuteError>,
    ) -> Result<ExecutionOutcome> {
        let outcome = result.map_err(|err| self.reject(name, err.into()))?;
        self.publish_outcome(&outcome);
        log_level_ups(&self.training.battle().party, &outcome);
        if let Some(result) = self.training.battle().outcome() {
            let record = self.training.record();
            tracing::info!(
                "Training fight ended in {} ({}W/{}L/{}F)",
                result,
                record.victories,
                record.defeats,
                record.flees
            );
        }
        Ok(outcome)
    }
}
