//! Fixed play policy used by the simulator.
//!
//! Picks the most favorable offer, heals a badly hurt active member and
//! otherwise attacks with whichever stat is higher.

use gauntlet_core::{AttackStyle, BattleAction, BattlePhase, BattleState, EnemyId, OfferPreview};

/// Below this share of max hp the active member heals instead of attacking.
const HEAL_THRESHOLD_PERCENT: u64 = 30;

/// Best offer by party compatibility; ties go to the weaker enemy.
pub fn choose_enemy(offers: &[OfferPreview]) -> Option<EnemyId> {
    offers
        .iter()
        .max_by(|a, b| {
            a.party_score
                .total_cmp(&b.party_score)
                .then(b.hp.cmp(&a.hp))
        })
        .map(|offer| offer.enemy)
}

/// Next action for the current phase, or `None` once nothing can act.
pub fn next_action(battle: &BattleState) -> Option<BattleAction> {
    match battle.phase {
        BattlePhase::PlayerTurn => Some(player_action(battle)),
        BattlePhase::EnemyTurn => Some(BattleAction::enemy_turn()),
        _ => None,
    }
}

fn player_action(battle: &BattleState) -> BattleAction {
    let Some(active) = battle.party.active() else {
        return BattleAction::attack(AttackStyle::Physical);
    };

    if u64::from(active.hp()) * 100 < u64::from(active.max_hp) * HEAL_THRESHOLD_PERCENT {
        return BattleAction::heal();
    }

    if active.magic > active.attack {
        BattleAction::attack(AttackStyle::Magic)
    } else {
        BattleAction::attack(AttackStyle::Physical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauntlet_core::{BattleConfig, CompatibilityBand, Combatant, JobDefinition, Party};

    fn battle(job: JobDefinition, hp: u32) -> BattleState {
        let mut party = Party::new();
        party
            .push(Combatant::from_job(&job, &BattleConfig::default()).with_hp(hp))
            .unwrap();
        let mut battle = BattleState::new(party);
        battle.phase = BattlePhase::PlayerTurn;
        battle
    }

    fn offer(enemy: u32, hp: u32, score: f64) -> OfferPreview {
        OfferPreview {
            enemy: EnemyId(enemy),
            name: format!("enemy {enemy}"),
            icon: String::new(),
            hp,
            attack: 10,
            experience_reward: 10,
            party_score: score,
            band: CompatibilityBand::from_score(score),
        }
    }

    #[test]
    fn prefers_higher_score_then_lower_hp() {
        let offers = [offer(1, 30, 1.0), offer(2, 80, 1.5), offer(3, 50, 1.5)];
        assert_eq!(choose_enemy(&offers), Some(EnemyId(3)));
        assert_eq!(choose_enemy(&[]), None);
    }

    #[test]
    fn casters_use_magic() {
        let wizard = JobDefinition::new("wizard", "Wizard", 60, 8, 5, 25);
        assert_eq!(
            next_action(&battle(wizard, 60)),
            Some(BattleAction::attack(AttackStyle::Magic))
        );
    }

    #[test]
    fn heals_when_badly_hurt() {
        let warrior = JobDefinition::new("warrior", "Warrior", 120, 18, 15, 3);
        assert_eq!(
            next_action(&battle(warrior.clone(), 30)),
            Some(BattleAction::heal())
        );
        assert_eq!(
            next_action(&battle(warrior, 36)),
            Some(BattleAction::attack(AttackStyle::Physical))
        );
    }

    #[test]
    fn huge_hp_pools_do_not_overflow() {
        let titan = JobDefinition::new("titan", "Titan", u32::MAX, 18, 15, 3);
        assert_eq!(
            next_action(&battle(titan.clone(), u32::MAX / 4)),
            Some(BattleAction::heal())
        );
        assert_eq!(
            next_action(&battle(titan, u32::MAX / 2)),
            Some(BattleAction::attack(AttackStyle::Physical))
        );
    }

    #[test]
    fn idle_outside_turns() {
        let hero = JobDefinition::new("hero", "Hero", 100, 20, 12, 8);
        let mut state = battle(hero, 100);
        state.phase = BattlePhase::EnemyTurn;
        assert_eq!(next_action(&state), Some(BattleAction::enemy_turn()));
        state.phase = BattlePhase::Victory;
        assert_eq!(next_action(&state), None);
    }
}
