use super::{ActionError, ActionTransition};
use crate::env::BattleEnv;
use crate::state::{BattlePhase, BattleState};

/// Ends the encounter immediately with no rewards.
///
/// Valid at any point of an active encounter, including a pending enemy turn,
/// which is cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleeAction;

impl ActionTransition for FleeAction {
    type Error = ActionError;
    type Result = ();

    fn pre_validate(&self, state: &BattleState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        if state.phase.is_active() {
            Ok(())
        } else {
            Err(ActionError::NoEncounter)
        }
    }

    fn apply(
        &self,
        state: &mut BattleState,
        _env: &BattleEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        state.log.system("You fled!");
        state.phase = BattlePhase::Fled;
        Ok(())
    }
}
