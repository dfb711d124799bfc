use arrayvec::ArrayVec;

use super::Combatant;
use crate::config::BattleConfig;
use crate::env::JobId;

/// Ordered party of up to [`BattleConfig::MAX_PARTY_SIZE`] combatants with an
/// active-combatant pointer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Party {
    members: ArrayVec<Combatant, { BattleConfig::MAX_PARTY_SIZE }>,
    active: usize,
}

impl Party {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member at the end of the roster.
    ///
    /// Returns the combatant back when the party is already full.
    pub fn push(&mut self, combatant: Combatant) -> Result<(), Combatant> {
        self.members
            .try_push(combatant)
            .map_err(|err| err.element())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Combatant] {
        &self.members
    }

    pub fn member(&self, index: usize) -> Option<&Combatant> {
        self.members.get(index)
    }

    pub fn member_mut(&mut self, index: usize) -> Option<&mut Combatant> {
        self.members.get_mut(index)
    }

    pub fn members_mut(&mut self) -> impl Iterator<Item = &mut Combatant> {
        self.members.iter_mut()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&Combatant> {
        self.members.get(self.active)
    }

    pub fn active_mut(&mut self) -> Option<&mut Combatant> {
        self.members.get_mut(self.active)
    }

    /// Moves the pointer. Out-of-range indices are ignored.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index < self.members.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    pub fn job_ids(&self) -> Vec<JobId> {
        self.members.iter().map(|member| member.job.clone()).collect()
    }

    pub fn any_alive(&self) -> bool {
        self.members.iter().any(Combatant::is_alive)
    }

    pub fn living_count(&self) -> usize {
        self.members.iter().filter(|member| member.is_alive()).count()
    }

    pub fn living_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, member)| member.is_alive())
            .map(|(index, _)| index)
    }

    /// Next living member strictly after `from`, wrapping around.
    ///
    /// `from` itself is only returned when it is the sole living member.
    pub fn next_living_after(&self, from: usize) -> Option<usize> {
        let len = self.members.len();
        (1..=len)
            .map(|offset| (from + offset) % len)
            .find(|&index| self.members[index].is_alive())
    }

    /// Restores every member to full hp.
    pub fn restore_all(&mut self) {
        self.members.iter_mut().for_each(Combatant::restore);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::JobDefinition;

    fn party(hps: &[u32]) -> Party {
        let config = BattleConfig::default();
        let mut party = Party::new();
        for (i, hp) in hps.iter().enumerate() {
            let job = JobDefinition::new(format!("job{i}"), format!("Job {i}"), 50, 10, 5, 5);
            party
                .push(Combatant::from_job(&job, &config).with_hp(*hp))
                .unwrap();
        }
        party
    }

    #[test]
    fn next_living_skips_downed_members() {
        let party = party(&[10, 0, 10]);
        assert_eq!(party.next_living_after(0), Some(2));
        assert_eq!(party.next_living_after(2), Some(0));
    }

    #[test]
    fn next_living_returns_none_when_all_down() {
        let party = party(&[0, 0, 0]);
        assert_eq!(party.next_living_after(1), None);
        assert!(!party.any_alive());
    }

    #[test]
    fn sole_survivor_is_its_own_successor() {
        let party = party(&[0, 5, 0]);
        assert_eq!(party.next_living_after(1), Some(1));
    }

    #[test]
    fn push_rejects_fourth_member() {
        let mut party = party(&[1, 1, 1]);
        let job = JobDefinition::new("extra", "Extra", 10, 1, 1, 1);
        let extra = Combatant::from_job(&job, &BattleConfig::default());
        assert!(party.push(extra).is_err());
        assert_eq!(party.len(), 3);
    }
}
