//! Action transition dispatch and execution logic.

use crate::action::{ActionResult, ActionTransition, BattleAction};
use crate::env::BattleEnv;
use crate::state::BattleState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the battle state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut BattleState,
    env: &BattleEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each action to its transition and wraps the result in ActionResult.
pub(super) fn execute_transition(
    action: &BattleAction,
    state: &mut BattleState,
    env: &BattleEnv<'_>,
) -> Result<ActionResult, ExecuteError> {
    match action {
        BattleAction::SelectEnemy(transition) => drive_transition(transition, state, env)
            .map(ActionResult::EncounterStarted)
            .map_err(ExecuteError::SelectEnemy),
        BattleAction::Attack(transition) => drive_transition(transition, state, env)
            .map(ActionResult::Attack)
            .map_err(ExecuteError::Attack),
        BattleAction::Heal(transition) => drive_transition(transition, state, env)
            .map(ActionResult::Heal)
            .map_err(ExecuteError::Heal),
        BattleAction::SwitchActive(transition) => drive_transition(transition, state, env)
            .map(ActionResult::Switched)
            .map_err(ExecuteError::SwitchActive),
        BattleAction::Flee(transition) => drive_transition(transition, state, env)
            .map(|()| ActionResult::Fled)
            .map_err(ExecuteError::Flee),
        BattleAction::EnemyTurn(transition) => drive_transition(transition, state, env)
            .map(ActionResult::EnemyTurn)
            .map_err(ExecuteError::EnemyTurn),
    }
}
