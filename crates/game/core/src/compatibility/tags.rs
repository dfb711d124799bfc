use super::CompatibilityOracle;
use crate::config::BattleConfig;
use crate::env::{EnemyDefinition, JobId};

/// Weakness/resistance tag lookup (arena mode).
///
/// A class listed as a weakness of the enemy scores `weakness`; one listed as
/// a resistance scores `resistance`; anything else scores `neutral`. A class
/// present in both sets counts as a weakness.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TagCompatibility {
    pub weakness: f64,
    pub resistance: f64,
    pub neutral: f64,
}

impl TagCompatibility {
    pub fn from_config(config: &BattleConfig) -> Self {
        Self {
            weakness: config.weakness_multiplier,
            resistance: config.resistance_multiplier,
            neutral: config.neutral_multiplier,
        }
    }
}

impl Default for TagCompatibility {
    fn default() -> Self {
        Self::from_config(&BattleConfig::default())
    }
}

impl CompatibilityOracle for TagCompatibility {
    fn score(&self, job: &JobId, enemy: &EnemyDefinition) -> f64 {
        if enemy.weaknesses.contains(job) {
            self.weakness
        } else if enemy.resistances.contains(job) {
            self.resistance
        } else {
            self.neutral
        }
    }

    fn neutral(&self) -> f64 {
        self.neutral
    }
}
