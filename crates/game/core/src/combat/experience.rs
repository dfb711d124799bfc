//! Experience distribution and level-up resolution.

use crate::config::BattleConfig;
use crate::state::Combatant;

/// A single level gained by one party member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUp {
    /// Index of the member in the party.
    pub member: usize,
    /// Level reached.
    pub level: u32,
}

/// Per-member share of a reward. The remainder is dropped.
pub fn split_reward(reward: u32, party_size: usize) -> u32 {
    match u32::try_from(party_size) {
        Ok(0) => 0,
        Ok(size) => reward / size,
        Err(_) => 0,
    }
}

/// Adds `amount` experience and resolves every level-up it triggers.
///
/// Returns the levels reached, in order. Afterwards
/// `experience < experience_to_next` holds. The loop terminates because every
/// threshold is at least 1.
pub fn grant_experience(combatant: &mut Combatant, amount: u32, config: &BattleConfig) -> Vec<u32> {
    let mut levels = Vec::new();
    combatant.experience = combatant.experience.saturating_add(amount);
    while combatant.experience >= combatant.experience_to_next {
        combatant.experience -= combatant.experience_to_next;
        combatant.level += 1;
        combatant.experience_to_next = config.experience_to_next_level(combatant.level);
        levels.push(combatant.level);
    }
    levels
}
