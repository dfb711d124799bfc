use crate::action::SYSTEM_ACTOR;
use crate::config::{BattleConfig, TurnOrder};
use crate::env::{RngOracle, RollContext, compute_seed};
use crate::state::{BattlePhase, BattleState};

use super::BattleEngine;

/// Opens a player turn, choosing who acts according to the turn order.
///
/// - `Manual`: keeps the pointer if that member is alive, otherwise moves it to
///   the next living member in wrap-around order.
/// - `RandomActor`: picks a living member uniformly.
///
/// Returns `false`, leaving the state unchanged, when nobody is alive.
pub(crate) fn begin_player_turn<R>(state: &mut BattleState, config: &BattleConfig, rng: &R) -> bool
where
    R: RngOracle + ?Sized,
{
    let current = state.party.active_index();
    let next = match config.turn_order {
        TurnOrder::Manual => {
            if state.party.active().is_some_and(|member| member.is_alive()) {
                Some(current)
            } else {
                state.party.next_living_after(current)
            }
        }
        TurnOrder::RandomActor => {
            let living: Vec<usize> = state.party.living_indices().collect();
            let seed = compute_seed(
                state.game_seed,
                state.nonce,
                SYSTEM_ACTOR,
                RollContext::ActorSelection,
            );
            match living.len() {
                0 => None,
                len => living.get(rng.pick_index(seed, len)).copied(),
            }
        }
    };

    let Some(next) = next else {
        return false;
    };

    state.party.set_active(next);
    if config.turn_order == TurnOrder::RandomActor
        && let Some(member) = state.party.member(next)
    {
        let line = format!("{}'s turn!", member.name);
        state.log.system(line);
    }
    state.phase = BattlePhase::PlayerTurn;
    true
}

/// Turn queries for BattleEngine.
impl BattleEngine<'_> {
    pub fn phase(&self) -> BattlePhase {
        self.state.phase
    }

    pub fn is_player_turn(&self) -> bool {
        self.state.phase == BattlePhase::PlayerTurn
    }

    pub fn active_index(&self) -> usize {
        self.state.party.active_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{JobDefinition, PcgRng};
    use crate::state::{Combatant, Party};

    fn state(hps: &[u32]) -> BattleState {
        let config = BattleConfig::default();
        let mut party = Party::new();
        for (i, hp) in hps.iter().enumerate() {
            let job = JobDefinition::new(format!("j{i}"), format!("J{i}"), 40, 5, 5, 5);
            party
                .push(Combatant::from_job(&job, &config).with_hp(*hp))
                .unwrap();
        }
        BattleState::with_seed(11, party)
    }

    #[test]
    fn manual_order_skips_to_next_living() {
        let mut state = state(&[0, 0, 12]);
        assert!(begin_player_turn(&mut state, &BattleConfig::default(), &PcgRng));
        assert_eq!(state.party.active_index(), 2);
        assert_eq!(state.phase, BattlePhase::PlayerTurn);
    }

    #[test]
    fn random_order_only_picks_living_members() {
        let config = BattleConfig::default().with_turn_order(TurnOrder::RandomActor);
        for seed in 0..64 {
            let mut state = state(&[10, 0, 10]);
            state.game_seed = seed;
            assert!(begin_player_turn(&mut state, &config, &PcgRng));
            assert_ne!(state.party.active_index(), 1);
        }
    }

    #[test]
    fn nobody_alive_leaves_state_alone() {
        let mut state = state(&[0, 0]);
        assert!(!begin_player_turn(&mut state, &BattleConfig::default(), &PcgRng));
        assert_eq!(state.phase, BattlePhase::AwaitingEnemySelection);
    }
}
