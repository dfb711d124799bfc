use std::collections::BTreeMap;

use super::CompatibilityOracle;
use crate::env::{EnemyDefinition, JobId};

/// Static species → job → multiplier lookup (adventure mode).
///
/// Missing species or job entries score neutral (1.0).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CompatibilityTable {
    entries: BTreeMap<String, BTreeMap<JobId, f64>>,
}

impl CompatibilityTable {
    pub const NEUTRAL: f64 = 1.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a single multiplier.
    pub fn with_entry(mut self, species: impl Into<String>, job: &str, multiplier: f64) -> Self {
        self.insert(species, JobId::from(job), multiplier);
        self
    }

    /// Inserts a multiplier. Non-positive values are ignored so every score
    /// stays strictly positive.
    pub fn insert(&mut self, species: impl Into<String>, job: JobId, multiplier: f64) {
        if multiplier > 0.0 && multiplier.is_finite() {
            self.entries
                .entry(species.into())
                .or_default()
                .insert(job, multiplier);
        }
    }

    pub fn get(&self, species: &str, job: &JobId) -> Option<f64> {
        self.entries.get(species)?.get(job).copied()
    }

    pub fn has_species(&self, species: &str) -> bool {
        self.entries.contains_key(species)
    }

    pub fn species(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl CompatibilityOracle for CompatibilityTable {
    fn score(&self, job: &JobId, enemy: &EnemyDefinition) -> f64 {
        self.get(enemy.species(), job).unwrap_or(Self::NEUTRAL)
    }

    fn party_score(&self, jobs: &[JobId], enemy: &EnemyDefinition) -> f64 {
        if jobs.is_empty() || !self.has_species(enemy.species()) {
            return Self::NEUTRAL;
        }
        let total = jobs
            .iter()
            .fold(0.0, |sum, job| sum + self.score(job, enemy));
        total / jobs.len() as f64
    }
}
