//! Battle configuration constants and tunable parameters.

use bitflags::bitflags;

/// Order in which party members take player turns.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TurnOrder {
    /// An explicit active-combatant pointer the player rotates with
    /// `SwitchActive`. Knockouts advance the pointer to the next living member.
    #[default]
    Manual,
    /// A random living member is chosen at the start of every player turn.
    /// `SwitchActive` is rejected.
    RandomActor,
}

/// Which classes feed the compatibility multiplier of a single attack.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CompatibilityScope {
    /// Only the attacking combatant's class.
    #[default]
    Attacker,
    /// The arithmetic mean over every class in the party.
    PartyAverage,
}

bitflags! {
    /// Cross-encounter exclusion rules enforced by the campaign controller.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CampaignPolicy: u8 {
        /// An enemy fought once (win, loss or flee) is never offered again.
        const EXCLUDE_FOUGHT_ENEMIES   = 1 << 0;
        /// A member knocked out in an encounter sits out the rest of the run.
        const EXCLUDE_DEFEATED_MEMBERS = 1 << 1;
    }
}

impl Default for CampaignPolicy {
    fn default() -> Self {
        CampaignPolicy::EXCLUDE_FOUGHT_ENEMIES
    }
}

/// Battle configuration constants and tunable parameters.
///
/// Defaults reproduce the observed adventure mode. Every field can be
/// overridden from `config.toml`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Fraction of max hp restored by `Heal`.
    pub heal_ratio: f64,
    /// Weight of the compatibility score in magic damage.
    pub magic_sensitivity: f64,
    /// Constant term added to the weighted score in magic damage.
    pub magic_floor: f64,
    /// Enemy damage is reduced by `defense / defense_divisor`.
    pub defense_divisor: u32,
    /// An enemy attack always deals at least this much.
    pub minimum_enemy_damage: u32,
    /// Experience threshold per level (`level * experience_per_level`).
    pub experience_per_level: u32,

    pub weakness_multiplier: f64,
    pub resistance_multiplier: f64,
    pub neutral_multiplier: f64,

    pub turn_order: TurnOrder,
    pub compatibility_scope: CompatibilityScope,

    /// Number of encounters in one campaign run.
    pub battles_per_campaign: u32,
    /// Wins needed to clear the campaign.
    pub required_wins: u32,
    /// Losses (defeats or flees) that end the run.
    pub max_losses: u32,
    /// Distinct enemies offered before each campaign battle.
    pub enemies_offered: usize,
    pub campaign_policy: CampaignPolicy,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of combatants in a party.
    pub const MAX_PARTY_SIZE: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HEAL_RATIO: f64 = 0.3;
    pub const DEFAULT_MAGIC_SENSITIVITY: f64 = 0.8;
    pub const DEFAULT_MAGIC_FLOOR: f64 = 0.2;
    pub const DEFAULT_DEFENSE_DIVISOR: u32 = 2;
    pub const DEFAULT_MINIMUM_ENEMY_DAMAGE: u32 = 1;
    pub const DEFAULT_EXPERIENCE_PER_LEVEL: u32 = 100;
    pub const DEFAULT_WEAKNESS_MULTIPLIER: f64 = 1.5;
    pub const DEFAULT_RESISTANCE_MULTIPLIER: f64 = 0.7;
    pub const DEFAULT_NEUTRAL_MULTIPLIER: f64 = 1.0;
    pub const DEFAULT_BATTLES_PER_CAMPAIGN: u32 = 3;
    pub const DEFAULT_ENEMIES_OFFERED: usize = 2;

    pub fn new() -> Self {
        Self {
            heal_ratio: Self::DEFAULT_HEAL_RATIO,
            magic_sensitivity: Self::DEFAULT_MAGIC_SENSITIVITY,
            magic_floor: Self::DEFAULT_MAGIC_FLOOR,
            defense_divisor: Self::DEFAULT_DEFENSE_DIVISOR,
            minimum_enemy_damage: Self::DEFAULT_MINIMUM_ENEMY_DAMAGE,
            experience_per_level: Self::DEFAULT_EXPERIENCE_PER_LEVEL,
            weakness_multiplier: Self::DEFAULT_WEAKNESS_MULTIPLIER,
            resistance_multiplier: Self::DEFAULT_RESISTANCE_MULTIPLIER,
            neutral_multiplier: Self::DEFAULT_NEUTRAL_MULTIPLIER,
            turn_order: TurnOrder::default(),
            compatibility_scope: CompatibilityScope::default(),
            battles_per_campaign: Self::DEFAULT_BATTLES_PER_CAMPAIGN,
            required_wins: Self::DEFAULT_BATTLES_PER_CAMPAIGN,
            max_losses: Self::DEFAULT_BATTLES_PER_CAMPAIGN,
            enemies_offered: Self::DEFAULT_ENEMIES_OFFERED,
            campaign_policy: CampaignPolicy::default(),
        }
    }

    /// Arena variant: tag-based weaknesses, random actor each turn, and both
    /// exclusion rules.
    pub fn arena() -> Self {
        Self {
            turn_order: TurnOrder::RandomActor,
            campaign_policy: CampaignPolicy::all(),
            ..Self::new()
        }
    }

    pub fn with_turn_order(mut self, turn_order: TurnOrder) -> Self {
        self.turn_order = turn_order;
        self
    }

    pub fn with_compatibility_scope(mut self, scope: CompatibilityScope) -> Self {
        self.compatibility_scope = scope;
        self
    }

    pub fn with_campaign_policy(mut self, policy: CampaignPolicy) -> Self {
        self.campaign_policy = policy;
        self
    }

    /// Experience needed to advance from `level` to `level + 1`.
    pub fn experience_to_next_level(&self, level: u32) -> u32 {
        level.saturating_mul(self.experience_per_level).max(1)
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
