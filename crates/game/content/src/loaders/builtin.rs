//! Default content embedded from `data/` at compile time.

use gauntlet_core::{BattleConfig, CompatibilityTable, StaticCatalog};

use crate::loaders::{CompatibilityLoader, ConfigLoader, EnemyLoader, JobLoader, LoadResult};

const JOBS_RON: &str = include_str!("../../data/jobs.ron");
const ENEMIES_RON: &str = include_str!("../../data/enemies.ron");
const COMPATIBILITY_RON: &str = include_str!("../../data/compatibility.ron");
const CONFIG_TOML: &str = include_str!("../../data/config.toml");

/// The bundled catalog, compatibility table and configuration.
#[derive(Debug, Clone)]
pub struct BuiltinContent {
    pub catalog: StaticCatalog,
    pub compatibility: CompatibilityTable,
    pub config: BattleConfig,
}

impl BuiltinContent {
    /// Parses the embedded data files.
    pub fn load() -> LoadResult<Self> {
        let jobs = JobLoader::parse(JOBS_RON)?;
        let enemies = EnemyLoader::parse(ENEMIES_RON)?;
        let catalog = StaticCatalog::new(jobs, enemies)
            .map_err(|e| anyhow::anyhow!("Invalid builtin catalog: {}", e))?;

        Ok(Self {
            catalog,
            compatibility: CompatibilityLoader::parse(COMPATIBILITY_RON)?,
            config: ConfigLoader::parse(CONFIG_TOML)?,
        })
    }
}
