//! State-change notifications derived from before/after snapshots.

use crate::env::EnemyId;
use crate::state::{BattleLogEntry, BattleOutcome, BattlePhase, BattleState};

/// A single observable change produced by one engine call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    EncounterStarted {
        enemy: EnemyId,
        name: String,
        hp: u32,
    },
    LogAppended(BattleLogEntry),
    CombatantHpChanged {
        member: usize,
        hp: u32,
        max_hp: u32,
    },
    EnemyHpChanged {
        hp: u32,
        max_hp: u32,
    },
    LevelUp {
        member: usize,
        level: u32,
    },
    ActiveChanged {
        from: usize,
        to: usize,
    },
    PhaseChanged {
        from: BattlePhase,
        to: BattlePhase,
    },
    EncounterEnded {
        outcome: BattleOutcome,
    },
}

impl BattleEvent {
    /// Computes the events separating two snapshots of the same encounter.
    pub fn diff(before: &BattleState, after: &BattleState) -> Vec<BattleEvent> {
        let mut events = Vec::new();

        let started = before.enemy.is_none() && after.enemy.is_some();
        if started && let Some(enemy) = &after.enemy {
            events.push(BattleEvent::EncounterStarted {
                enemy: enemy.definition.id,
                name: enemy.name().to_owned(),
                hp: enemy.hp(),
            });
        }

        let new_entries = if started || after.log.len() < before.log.len() {
            after.log.entries()
        } else {
            after.log.since(before.log.len())
        };
        events.extend(new_entries.iter().cloned().map(BattleEvent::LogAppended));

        for (member, (old, new)) in before
            .party
            .members()
            .iter()
            .zip(after.party.members())
            .enumerate()
        {
            if old.hp() != new.hp() {
                events.push(BattleEvent::CombatantHpChanged {
                    member,
                    hp: new.hp(),
                    max_hp: new.max_hp,
                });
            }
            events.extend(
                (old.level + 1..=new.level).map(|level| BattleEvent::LevelUp { member, level }),
            );
        }

        if !started
            && let (Some(old), Some(new)) = (&before.enemy, &after.enemy)
            && old.hp() != new.hp()
        {
            events.push(BattleEvent::EnemyHpChanged {
                hp: new.hp(),
                max_hp: new.max_hp(),
            });
        }

        let (from, to) = (before.party.active_index(), after.party.active_index());
        if from != to {
            events.push(BattleEvent::ActiveChanged { from, to });
        }

        if before.phase != after.phase {
            events.push(BattleEvent::PhaseChanged {
                from: before.phase,
                to: after.phase,
            });
            if let Some(outcome) = after.phase.outcome() {
                events.push(BattleEvent::EncounterEnded { outcome });
            }
        }

        events
    }
}
