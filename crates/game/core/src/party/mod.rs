//! Party builder and job selection rules.
//!
//! Turning a selection into combatants is a pure function of the catalog and
//! the selected ids. Ids the catalog cannot resolve are skipped and reported
//! rather than failing the whole build.

mod error;
mod selection;

pub use error::{PartyError, SelectionError};
pub use selection::{JobSelection, Toggle};

use crate::config::BattleConfig;
use crate::env::{CatalogOracle, JobId};
use crate::state::{Combatant, Party};

/// Ids the builder ignored while assembling a party.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartyBuildReport {
    /// Ids missing from the catalog.
    pub skipped: Vec<JobId>,
    /// Repeated ids; only the first occurrence is used.
    pub duplicates: Vec<JobId>,
}

impl PartyBuildReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.duplicates.is_empty()
    }
}

/// Builds a party from selected job ids.
///
/// Members start at full hp, level 1, zero experience, in selection order.
///
/// # Errors
///
/// - `PartyError::NoSelection` when `selection` is empty
/// - `PartyError::TooLarge` when more than [`BattleConfig::MAX_PARTY_SIZE`]
///   distinct ids are given
/// - `PartyError::Empty` when no id resolves
pub fn build_party<C>(
    catalog: &C,
    selection: &[JobId],
    config: &BattleConfig,
) -> Result<(Party, PartyBuildReport), PartyError>
where
    C: CatalogOracle + ?Sized,
{
    if selection.is_empty() {
        return Err(PartyError::NoSelection);
    }

    let mut report = PartyBuildReport::default();
    let mut distinct: Vec<&JobId> = Vec::with_capacity(selection.len());
    for id in selection {
        if distinct.contains(&id) {
            report.duplicates.push(id.clone());
        } else {
            distinct.push(id);
        }
    }

    if distinct.len() > BattleConfig::MAX_PARTY_SIZE {
        return Err(PartyError::TooLarge {
            count: distinct.len(),
            max: BattleConfig::MAX_PARTY_SIZE,
        });
    }

    let mut party = Party::new();
    for id in distinct {
        match catalog.job(id) {
            Some(job) => {
                // Capacity was checked above.
                let _ = party.push(Combatant::from_job(job, config));
            }
            None => report.skipped.push(id.clone()),
        }
    }

    if party.is_empty() {
        return Err(PartyError::Empty {
            skipped: report.skipped,
        });
    }

    Ok((party, report))
}
