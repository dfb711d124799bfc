use anyhow::{Result, bail};
use clap::Parser;
use console::style;
use gauntlet_core::EnemyId;
use gauntlet_runtime::Session;

use super::{MAX_ACTIONS, Transcript, print_member};
use crate::autopilot;

/// Fight a single enemy in training mode
#[derive(Parser, Debug)]
pub struct Train {
    /// Enemy id (see `gauntlet enemies`)
    #[arg(value_name = "ENEMY")]
    enemy: u32,

    /// Number of fights in a row
    #[arg(short, long, default_value_t = 1)]
    fights: u32,

    /// Train the selected party instead of the lone trainee
    #[arg(long)]
    party: bool,

    /// Print only fight results
    #[arg(short, long)]
    quiet: bool,
}

impl Train {
    pub fn execute(self, session: &mut Session) -> Result<()> {
        if self.party {
            session.train_with_selection()?;
        }
        let enemy = EnemyId(self.enemy);
        let mut transcript = Transcript::new(self.quiet);

        for fight in 1..=self.fights {
            println!("{}", style(format!("=== Fight {fight}/{} ===", self.fights)).bold());
            session.train(enemy)?;
            transcript.restart();
            transcript.flush(session.training().battle());

            for _ in 0..MAX_ACTIONS {
                let Some(action) = autopilot::next_action(session.training().battle()) else {
                    break;
                };
                session.train_act(&action)?;
                transcript.flush(session.training().battle());
            }

            let Some(outcome) = session.training().battle().outcome() else {
                bail!("training fight against {enemy} did not finish");
            };
            println!("{} {}", style("→").cyan(), outcome);
        }

        let record = session.training().record();
        println!(
            "Record: {} victories, {} defeats, {} flees",
            record.victories, record.defeats, record.flees
        );
        for member in session.training().battle().party.members() {
            print_member(member);
        }
        Ok(())
    }
}
