//! Battle configuration loader.

use std::path::Path;

use gauntlet_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing BattleConfig
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse TOML into a `BattleConfig`. Omitted keys keep their defaults.
    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.enemies_offered == 0 {
            anyhow::bail!("enemies_offered must be at least 1");
        }
        if config.required_wins == 0 || config.max_losses == 0 {
            anyhow::bail!("required_wins and max_losses must be at least 1");
        }
        if !(config.heal_ratio.is_finite() && config.heal_ratio >= 0.0) {
            anyhow::bail!("heal_ratio must be a non-negative number");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauntlet_core::{CampaignPolicy, TurnOrder};

    #[test]
    fn omitted_keys_keep_defaults() {
        let config = ConfigLoader::parse("heal_ratio = 0.5\n").unwrap();
        assert_eq!(config.heal_ratio, 0.5);
        assert_eq!(config.required_wins, 3);
        assert_eq!(config.turn_order, TurnOrder::Manual);
    }

    #[test]
    fn policy_flags_parse() {
        let config = ConfigLoader::parse(
            "turn_order = \"random_actor\"\n\
             campaign_policy = \"EXCLUDE_FOUGHT_ENEMIES | EXCLUDE_DEFEATED_MEMBERS\"\n",
        )
        .unwrap();
        assert_eq!(config.turn_order, TurnOrder::RandomActor);
        assert_eq!(config.campaign_policy, CampaignPolicy::all());
    }

    #[test]
    fn zero_offer_size_is_rejected() {
        assert!(ConfigLoader::parse("enemies_offered = 0\n").is_err());
    }
}
