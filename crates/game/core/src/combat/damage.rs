//! Damage and healing calculation.

use crate::config::BattleConfig;

/// Which stat powers a player attack.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackStyle {
    /// Uses the attack stat and the full compatibility multiplier.
    #[default]
    Physical,
    /// Uses the magic stat; compatibility is damped.
    Magic,
}

// ============================================================================
// Player Damage
// ============================================================================

/// Physical damage for an already rolled base.
///
/// # Formula
///
/// ```text
/// damage = floor(roll * multiplier)
/// ```
pub fn physical_damage(roll: u32, multiplier: f64) -> u32 {
    scale(roll, multiplier)
}

/// Magic damage for an already rolled base.
///
/// # Formula
///
/// ```text
/// damage = floor(roll * (multiplier * sensitivity + floor))
/// ```
///
/// With the default sensitivity 0.8 and floor 0.2 a 1.5 multiplier becomes
/// 1.4 and a 0.7 multiplier becomes 0.76.
pub fn magic_damage(roll: u32, multiplier: f64, config: &BattleConfig) -> u32 {
    scale(
        roll,
        multiplier * config.magic_sensitivity + config.magic_floor,
    )
}

#[inline]
fn scale(roll: u32, factor: f64) -> u32 {
    let damage = (f64::from(roll) * factor).floor();
    if damage.is_finite() && damage > 0.0 {
        damage as u32
    } else {
        0
    }
}

// ============================================================================
// Enemy Damage
// ============================================================================

/// Enemy damage for an already rolled base.
///
/// # Formula
///
/// ```text
/// damage = max(minimum, roll - floor(defense / divisor))
/// ```
pub fn enemy_damage(roll: u32, defense: u32, config: &BattleConfig) -> u32 {
    let reduction = defense / config.defense_divisor.max(1);
    roll.saturating_sub(reduction)
        .max(config.minimum_enemy_damage)
}

// ============================================================================
// Healing
// ============================================================================

/// `floor(max_hp * heal_ratio)`, before clamping to the missing hp.
pub fn heal_amount(max_hp: u32, config: &BattleConfig) -> u32 {
    scale(max_hp, config.heal_ratio)
}
