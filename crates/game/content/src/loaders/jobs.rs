//! Job catalog loader.

use std::path::Path;

use gauntlet_core::JobDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Job catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCatalog {
    pub jobs: Vec<JobDefinition>,
}

/// Loader for job definitions from RON files.
pub struct JobLoader;

impl JobLoader {
    /// Load job definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<JobDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a RON job catalog.
    ///
    /// Rejects jobs with zero max hp: such a combatant would enter every
    /// encounter already knocked out.
    pub fn parse(content: &str) -> LoadResult<Vec<JobDefinition>> {
        let catalog: JobCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse job catalog RON: {}", e))?;

        if let Some(job) = catalog.jobs.iter().find(|job| job.hp == 0) {
            anyhow::bail!("Job '{}' has zero hp", job.id);
        }

        Ok(catalog.jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_job() {
        let jobs = JobLoader::parse(
            r#"(jobs: [(id: "hero", name: "Hero", hp: 100, attack: 20, defense: 12, magic: 8)])"#,
        )
        .unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id.as_str(), "hero");
        assert!(jobs[0].icon.is_empty());
    }

    #[test]
    fn zero_hp_is_rejected() {
        let result = JobLoader::parse(
            r#"(jobs: [(id: "ghost", name: "Ghost", hp: 0, attack: 1, defense: 1, magic: 1)])"#,
        );
        assert!(result.is_err());
    }
}
