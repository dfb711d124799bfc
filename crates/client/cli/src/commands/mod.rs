//! Subcommands of the simulator.

mod campaign;
mod catalog;
mod select;
mod train;

pub use campaign::Campaign;
pub use catalog::{Enemies, Jobs};
pub use select::Select;
pub use train::Train;

use console::style;
use gauntlet_core::{BattleState, Combatant, LogCategory};

/// Upper bound on actions per encounter before the autopilot gives up.
const MAX_ACTIONS: usize = 1_000;

/// Prints new battle log lines as an encounter progresses.
struct Transcript {
    seen: usize,
    quiet: bool,
}

impl Transcript {
    fn new(quiet: bool) -> Self {
        Self { seen: 0, quiet }
    }

    /// Call when a new encounter clears the log.
    fn restart(&mut self) {
        self.seen = 0;
    }

    fn flush(&mut self, battle: &BattleState) {
        let entries = battle.log.since(self.seen);
        self.seen += entries.len();
        if self.quiet {
            return;
        }
        for entry in entries {
            let line = match entry.category {
                LogCategory::Player => style(&entry.message).green(),
                LogCategory::Enemy => style(&entry.message).red(),
                LogCategory::System => style(&entry.message).dim(),
            };
            println!("  {line}");
        }
    }
}

fn print_member(member: &Combatant) {
    println!(
        "  {} {:<8} Lv {:>2}  HP {:>3}/{:<3}  EXP {:>3}/{}",
        member.icon,
        member.name,
        member.level,
        member.hp(),
        member.max_hp,
        member.experience,
        member.experience_to_next
    );
}
