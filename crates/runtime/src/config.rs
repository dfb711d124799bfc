//! Runtime configuration, optionally read from the environment.

use std::path::PathBuf;

use directories::ProjectDirs;
use gauntlet_core::BattleConfig;

use crate::error::{Result, RuntimeError};

/// Which compatibility strategy a session uses.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CompatibilityMode {
    /// Species table loaded from `compatibility.ron`.
    #[default]
    Table,
    /// Per-enemy weakness and resistance tags.
    Tags,
}

#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Overrides the battle rules loaded from content.
    pub battle: Option<BattleConfig>,
    /// Fixed seed for reproducible sessions; random when `None`.
    pub game_seed: Option<u64>,
    /// Content directory; the embedded content is used when `None`.
    pub data_dir: Option<PathBuf>,
    /// Directory of the file-backed selection store; in-memory when `None`.
    pub save_dir: Option<PathBuf>,
    pub compatibility: CompatibilityMode,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: None,
            game_seed: None,
            data_dir: None,
            save_dir: None,
            compatibility: CompatibilityMode::default(),
            event_buffer_size: Self::DEFAULT_EVENT_BUFFER_SIZE,
        }
    }
}

impl RuntimeConfig {
    pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;

    pub const ENV_SEED: &'static str = "GAUNTLET_SEED";
    pub const ENV_DATA_DIR: &'static str = "GAUNTLET_DATA_DIR";
    pub const ENV_SAVE_DIR: &'static str = "GAUNTLET_SAVE_DIR";
    pub const ENV_EVENT_CAPACITY: &'static str = "GAUNTLET_EVENT_CAPACITY";
    pub const ENV_COMPATIBILITY: &'static str = "GAUNTLET_COMPATIBILITY";

    /// Reads overrides from `GAUNTLET_*` environment variables.
    ///
    /// Unset variables keep their defaults; malformed values are errors.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RuntimeConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(Self::ENV_SEED) {
            let seed = value.trim().parse().map_err(|_| RuntimeError::InvalidEnv {
                var: Self::ENV_SEED,
                value: value.clone(),
            })?;
            config.game_seed = Some(seed);
        }
        if let Some(value) = lookup(Self::ENV_DATA_DIR) {
            config.data_dir = Some(PathBuf::from(value));
        }
        if let Some(value) = lookup(Self::ENV_SAVE_DIR) {
            config.save_dir = Some(PathBuf::from(value));
        }
        if let Some(value) = lookup(Self::ENV_EVENT_CAPACITY) {
            config.event_buffer_size = value
                .trim()
                .parse()
                .ok()
                .filter(|capacity: &usize| *capacity > 0)
                .ok_or_else(|| RuntimeError::InvalidEnv {
                    var: Self::ENV_EVENT_CAPACITY,
                    value: value.clone(),
                })?;
        }
        if let Some(value) = lookup(Self::ENV_COMPATIBILITY) {
            config.compatibility = value.trim().parse().map_err(|_| RuntimeError::InvalidEnv {
                var: Self::ENV_COMPATIBILITY,
                value: value.clone(),
            })?;
        }

        Ok(config)
    }

    /// Platform data directory for saves, e.g. `~/.local/share/gauntlet`.
    pub fn default_save_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gauntlet").map(|dirs| dirs.data_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_variables_keep_defaults() {
        let config = RuntimeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.game_seed, None);
        assert_eq!(config.event_buffer_size, 100);
        assert_eq!(config.compatibility, CompatibilityMode::Table);
    }

    #[test]
    fn reads_overrides() {
        let config = RuntimeConfig::from_lookup(lookup(&[
            ("GAUNTLET_SEED", "42"),
            ("GAUNTLET_SAVE_DIR", "/tmp/saves"),
            ("GAUNTLET_EVENT_CAPACITY", "8"),
            ("GAUNTLET_COMPATIBILITY", "tags"),
        ]))
        .unwrap();
        assert_eq!(config.game_seed, Some(42));
        assert_eq!(config.save_dir, Some(PathBuf::from("/tmp/saves")));
        assert_eq!(config.event_buffer_size, 8);
        assert_eq!(config.compatibility, CompatibilityMode::Tags);
    }

    #[test]
    fn malformed_seed_is_rejected() {
        let result = RuntimeConfig::from_lookup(lookup(&[("GAUNTLET_SEED", "lucky")]));
        assert!(matches!(
            result,
            Err(RuntimeError::InvalidEnv { var: "GAUNTLET_SEED", .. })
        ));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let result = RuntimeConfig::from_lookup(lookup(&[("GAUNTLET_EVENT_CAPACITY", "0")]));
        assert!(result.is_err());
    }
}
