//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use gauntlet_core::{BattleConfig, CompatibilityTable, EnemyDefinition, JobDefinition, StaticCatalog};

use crate::loaders::{CompatibilityLoader, ConfigLoader, EnemyLoader, JobLoader, LoadResult};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── jobs.ron
/// ├── enemies.ron
/// └── compatibility.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load job classes from `jobs.ron`.
    pub fn load_jobs(&self) -> LoadResult<Vec<JobDefinition>> {
        JobLoader::load(&self.data_dir.join("jobs.ron"))
    }

    /// Load the enemy roster from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<EnemyDefinition>> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Load the species table from `compatibility.ron`.
    pub fn load_compatibility(&self) -> LoadResult<CompatibilityTable> {
        CompatibilityLoader::load(&self.data_dir.join("compatibility.ron"))
    }

    /// Load jobs and enemies into a catalog, rejecting duplicate ids.
    pub fn load_catalog(&self) -> LoadResult<StaticCatalog> {
        let jobs = self.load_jobs()?;
        let enemies = self.load_enemies()?;
        StaticCatalog::new(jobs, enemies).map_err(|e| {
            anyhow::anyhow!("Invalid catalog in {}: {}", self.data_dir.display(), e)
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauntlet_core::CatalogOracle;

    fn bundled() -> ContentFactory {
        ContentFactory::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_bundled_directory() {
        let factory = bundled();
        let catalog = factory.load_catalog().unwrap();
        assert_eq!(catalog.list_jobs()[0].id.as_str(), "wizard");
        assert_eq!(factory.load_config().unwrap(), BattleConfig::default());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let factory = ContentFactory::new("/nonexistent/gauntlet-data");
        assert!(factory.load_catalog().is_err());
    }
}
