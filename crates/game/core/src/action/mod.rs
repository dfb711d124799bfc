//! Battle actions.
//!
//! Each action is a small struct implementing [`ActionTransition`]; the
//! [`BattleAction`] enum is what callers hand to
//! [`BattleEngine::execute`](crate::engine::BattleEngine::execute).
//!
//! # Module Structure
//!
//! - `select`: bind an enemy and open the encounter
//! - `attack`: physical or magic attack by the active combatant
//! - `heal`: restore a fraction of the active combatant's hp
//! - `switch`: move the active pointer (free action)
//! - `flee`: end the encounter without rewards
//! - `enemy_turn`: the enemy strikes the active combatant

mod attack;
mod enemy_turn;
mod error;
mod flee;
mod heal;
mod select;
mod switch;

pub use attack::{AttackAction, AttackResult};
pub use enemy_turn::{EnemyAttackResult, EnemyTurnAction};
pub use error::ActionError;
pub use flee::FleeAction;
pub use heal::{HealAction, HealResult};
pub use select::{EncounterStarted, SelectEnemyAction};
pub use switch::{SwitchActiveAction, SwitchResult};

use crate::combat::AttackStyle;
use crate::env::{BattleEnv, EnemyDefinition};
use crate::state::{BattlePhase, BattleState};

/// Actor slot used when seeding rolls made by the enemy.
pub const ENEMY_ACTOR: u32 = u32::MAX;
/// Actor slot used when seeding rolls made by the engine itself.
pub const SYSTEM_ACTOR: u32 = u32::MAX - 1;

/// Defines how a concrete action variant mutates battle state.
///
/// `pre_validate` must reject every illegal request before `apply` touches
/// the state. `post_validate` re-checks the state invariants.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &BattleState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the battle state directly.
    fn apply(
        &self,
        state: &mut BattleState,
        env: &BattleEnv<'_>,
    ) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &BattleState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Every action the engine accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleAction {
    SelectEnemy(SelectEnemyAction),
    Attack(AttackAction),
    Heal(HealAction),
    SwitchActive(SwitchActiveAction),
    Flee(FleeAction),
    EnemyTurn(EnemyTurnAction),
}

impl BattleAction {
    pub fn select_enemy(enemy: &EnemyDefinition) -> Self {
        Self::SelectEnemy(SelectEnemyAction::new(enemy.clone()))
    }

    pub fn attack(style: AttackStyle) -> Self {
        Self::Attack(AttackAction::new(style))
    }

    pub fn heal() -> Self {
        Self::Heal(HealAction)
    }

    pub fn switch_active() -> Self {
        Self::SwitchActive(SwitchActiveAction)
    }

    pub fn flee() -> Self {
        Self::Flee(FleeAction)
    }

    pub fn enemy_turn() -> Self {
        Self::EnemyTurn(EnemyTurnAction)
    }

    /// Returns the snake_case name of the action, used for logging.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Self::SelectEnemy(_) => "select_enemy",
            Self::Attack(action) => match action.style {
                AttackStyle::Physical => "attack",
                AttackStyle::Magic => "magic",
            },
            Self::Heal(_) => "heal",
            Self::SwitchActive(_) => "switch_active",
            Self::Flee(_) => "flee",
            Self::EnemyTurn(_) => "enemy_turn",
        }
    }
}

/// Action-specific outcome returned by the engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    EncounterStarted(EncounterStarted),
    Attack(AttackResult),
    Heal(HealResult),
    Switched(SwitchResult),
    Fled,
    EnemyTurn(EnemyAttackResult),
}

/// Shared precondition of every player action.
pub(crate) fn require_player_turn(state: &BattleState) -> Result<(), ActionError> {
    match state.phase {
        BattlePhase::PlayerTurn => Ok(()),
        BattlePhase::EnemyTurn => Err(ActionError::NotPlayerTurn),
        _ => Err(ActionError::NoEncounter),
    }
}

/// Shared post-condition of every action.
pub(crate) fn check_invariants(state: &BattleState) -> Result<(), ActionError> {
    state.check_invariants().map_err(ActionError::from)
}
