use crate::config::BattleConfig;
use crate::env::{EnemyDefinition, JobDefinition, JobId};

/// A player-controlled party member.
///
/// Created from a [`JobDefinition`] at full hp, level 1 and zero experience.
/// Stats are copied out of the definition and never grow.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub job: JobId,
    pub name: String,
    pub icon: String,
    hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub magic: u32,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next: u32,
}

impl Combatant {
    pub fn from_job(job: &JobDefinition, config: &BattleConfig) -> Self {
        Self {
            job: job.id.clone(),
            name: job.name.clone(),
            icon: job.icon.clone(),
            hp: job.hp,
            max_hp: job.hp,
            attack: job.attack,
            defense: job.defense,
            magic: job.magic,
            level: 1,
            experience: 0,
            experience_to_next: config.experience_to_next_level(1),
        }
    }

    /// Starts the combatant at `hp` instead of full health, clamped to `max_hp`.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_full_hp(&self) -> bool {
        self.hp >= self.max_hp
    }

    /// Reduces hp, clamped at zero. Returns the hp actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        lost
    }

    /// Restores hp, clamped at `max_hp`. Returns the hp actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max_hp.saturating_sub(self.hp));
        self.hp += gained;
        gained
    }

    pub fn restore(&mut self) {
        self.hp = self.max_hp;
    }
}

/// Live copy of an enemy definition bound to one encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyInstance {
    pub definition: EnemyDefinition,
    hp: u32,
}

impl EnemyInstance {
    pub fn spawn(definition: &EnemyDefinition) -> Self {
        Self {
            definition: definition.clone(),
            hp: definition.hp,
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.definition.hp
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Reduces hp, clamped at zero. Returns the hp actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        lost
    }
}
