use super::SelectionError;
use crate::config::BattleConfig;
use crate::env::JobId;

/// Ordered set of up to [`BattleConfig::MAX_PARTY_SIZE`] distinct job ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JobSelection {
    jobs: Vec<JobId>,
}

/// What a toggle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

impl JobSelection {
    pub const MAX: usize = BattleConfig::MAX_PARTY_SIZE;

    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from stored ids, dropping duplicates and anything
    /// past the size limit.
    pub fn from_ids(ids: impl IntoIterator<Item = JobId>) -> Self {
        let mut selection = Self::new();
        for id in ids {
            if selection.jobs.len() == Self::MAX {
                break;
            }
            if !selection.contains(&id) {
                selection.jobs.push(id);
            }
        }
        selection
    }

    /// Adds `job`, or removes it when already selected.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::Full` when adding to a full selection.
    pub fn toggle(&mut self, job: JobId) -> Result<Toggle, SelectionError> {
        if let Some(position) = self.jobs.iter().position(|selected| selected == &job) {
            self.jobs.remove(position);
            return Ok(Toggle::Removed);
        }
        if self.is_full() {
            return Err(SelectionError::Full { max: Self::MAX });
        }
        self.jobs.push(job);
        Ok(Toggle::Added)
    }

    pub fn clear(&mut self) {
        self.jobs.clear();
    }

    pub fn contains(&self, job: &JobId) -> bool {
        self.jobs.contains(job)
    }

    pub fn is_full(&self) -> bool {
        self.jobs.len() >= Self::MAX
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn ids(&self) -> &[JobId] {
        &self.jobs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = JobSelection::new();
        assert_eq!(selection.toggle(JobId::from("hero")), Ok(Toggle::Added));
        assert_eq!(selection.toggle(JobId::from("monk")), Ok(Toggle::Added));
        assert_eq!(selection.toggle(JobId::from("hero")), Ok(Toggle::Removed));
        assert_eq!(selection.ids(), &[JobId::from("monk")]);
    }

    #[test]
    fn fourth_job_is_rejected() {
        let mut selection =
            JobSelection::from_ids(["hero", "monk", "rogue"].map(JobId::from));
        assert_eq!(
            selection.toggle(JobId::from("wizard")),
            Err(SelectionError::Full { max: 3 })
        );
        // Removing still works on a full selection.
        assert_eq!(selection.toggle(JobId::from("rogue")), Ok(Toggle::Removed));
    }

    #[test]
    fn stored_ids_are_deduplicated_and_capped() {
        let selection = JobSelection::from_ids(
            ["hero", "hero", "monk", "rogue", "wizard"].map(JobId::from),
        );
        assert_eq!(selection.len(), 3);
        assert!(!selection.contains(&JobId::from("wizard")));
    }
}
