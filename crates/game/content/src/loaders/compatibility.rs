//! Species compatibility table loader.

use std::collections::BTreeMap;
use std::path::Path;

use gauntlet_core::{CompatibilityTable, JobId};

use crate::loaders::{LoadResult, read_file};

/// Loader for the species → job → multiplier table from RON files.
pub struct CompatibilityLoader;

impl CompatibilityLoader {
    /// Load a compatibility table from a RON file.
    pub fn load(path: &Path) -> LoadResult<CompatibilityTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a RON map of species to per-job multipliers.
    ///
    /// Every multiplier must be finite and strictly positive.
    pub fn parse(content: &str) -> LoadResult<CompatibilityTable> {
        let raw: BTreeMap<String, BTreeMap<JobId, f64>> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse compatibility RON: {}", e))?;

        let mut table = CompatibilityTable::new();
        for (species, scores) in raw {
            for (job, multiplier) in scores {
                if !(multiplier.is_finite() && multiplier > 0.0) {
                    anyhow::bail!(
                        "Invalid multiplier {} for job '{}' against '{}'",
                        multiplier,
                        job,
                        species
                    );
                }
                table.insert(species.clone(), job, multiplier);
            }
        }

        Ok(table)
    }
}
