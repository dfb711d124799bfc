//! Compatibility engine: class-versus-enemy damage multipliers.
//!
//! Two interchangeable strategies implement [`CompatibilityOracle`]:
//!
//! - [`CompatibilityTable`]: species name → job id → fixed multiplier
//! - [`TagCompatibility`]: per-enemy weakness and resistance sets
//!
//! [`Compatibility`] wraps either one so a session can pick its strategy from
//! data. The [`CompatibilityBand`] banding is presentation-only and never
//! feeds back into damage.

mod band;
mod table;
mod tags;

pub use band::CompatibilityBand;
pub use table::CompatibilityTable;
pub use tags::TagCompatibility;

use crate::env::{EnemyDefinition, JobId};

/// Source of compatibility multipliers.
pub trait CompatibilityOracle: Send + Sync {
    /// Multiplier applied when `job` attacks `enemy`. Always > 0.
    fn score(&self, job: &JobId, enemy: &EnemyDefinition) -> f64;

    /// Multiplier used when no class information applies.
    fn neutral(&self) -> f64 {
        1.0
    }

    /// Arithmetic mean of the per-class scores of `jobs` against `enemy`.
    ///
    /// An empty party scores neutral.
    fn party_score(&self, jobs: &[JobId], enemy: &EnemyDefinition) -> f64 {
        if jobs.is_empty() {
            return self.neutral();
        }
        let total = jobs
            .iter()
            .fold(0.0, |sum, job| sum + self.score(job, enemy));
        total / jobs.len() as f64
    }
}

/// Strategy selected at session construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Compatibility {
    Table(CompatibilityTable),
    Tags(TagCompatibility),
}

impl Default for Compatibility {
    fn default() -> Self {
        Compatibility::Table(CompatibilityTable::default())
    }
}

impl CompatibilityOracle for Compatibility {
    fn score(&self, job: &JobId, enemy: &EnemyDefinition) -> f64 {
        match self {
            Compatibility::Table(table) => table.score(job, enemy),
            Compatibility::Tags(tags) => tags.score(job, enemy),
        }
    }

    fn neutral(&self) -> f64 {
        match self {
            Compatibility::Table(table) => table.neutral(),
            Compatibility::Tags(tags) => tags.neutral(),
        }
    }

    fn party_score(&self, jobs: &[JobId], enemy: &EnemyDefinition) -> f64 {
        match self {
            Compatibility::Table(table) => table.party_score(jobs, enemy),
            Compatibility::Tags(tags) => tags.party_score(jobs, enemy),
        }
    }
}
