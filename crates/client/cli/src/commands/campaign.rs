use anyhow::{Result, bail};
use clap::Parser;
use console::style;
use gauntlet_core::{CampaignStatus, CampaignSummary};
use gauntlet_runtime::Session;

use super::{MAX_ACTIONS, Transcript, print_member};
use crate::autopilot;

/// Play campaign runs with the selected party
#[derive(Parser, Debug)]
pub struct Campaign {
    /// Number of runs to play back to back
    #[arg(short, long, default_value_t = 1)]
    runs: u32,

    /// Continue a saved run before starting new ones
    #[arg(long)]
    resume: bool,

    /// Print only encounter results and summaries
    #[arg(short, long)]
    quiet: bool,
}

impl Campaign {
    pub fn execute(self, session: &mut Session) -> Result<()> {
        let mut transcript = Transcript::new(self.quiet);
        let mut cleared = 0;

        for run in 1..=self.runs {
            let resumed = run == 1 && self.resume && session.resume_campaign()?;
            if !resumed {
                session.start_campaign()?;
            }
            println!(
                "{}",
                style(format!(
                    "=== Run {run}/{}{} ===",
                    self.runs,
                    if resumed { " (resumed)" } else { "" }
                ))
                .bold()
            );

            play_run(session, &mut transcript)?;

            if let Some(summary) = session.campaign().summary() {
                print_summary(summary);
                if summary.is_clear() {
                    cleared += 1;
                }
            }
            session.reset_campaign()?;
        }

        if self.runs > 1 {
            println!("Cleared {cleared} of {} runs", self.runs);
        }
        Ok(())
    }
}

fn play_run(session: &mut Session, transcript: &mut Transcript) -> Result<()> {
    while session.campaign().status() == CampaignStatus::InProgress {
        let offers = session.offers()?;
        let battle_number = session
            .campaign()
            .campaign()
            .map_or(0, |state| state.current_battle);
        println!("Battle {battle_number}, offered:");
        for offer in &offers {
            println!(
                "  {} {:<8} HP {:>3}  ATK {:>3}  score {:.2} ({})",
                offer.icon,
                offer.name,
                offer.hp,
                offer.attack,
                offer.party_score,
                offer.band.label()
            );
        }

        let Some(enemy) = autopilot::choose_enemy(&offers) else {
            bail!("campaign in progress without offered enemies");
        };
        session.begin_encounter(enemy)?;
        transcript.restart();
        transcript.flush(session.campaign().battle());

        let mut report = None;
        for _ in 0..MAX_ACTIONS {
            let Some(action) = autopilot::next_action(session.campaign().battle()) else {
                break;
            };
            let step = session.act(&action)?;
            transcript.flush(session.campaign().battle());
            if step.ended_encounter() {
                report = step.report;
                break;
            }
        }

        let Some(report) = report else {
            bail!("encounter against {enemy} did not finish");
        };
        println!(
            "{} {} ({} wins, {} losses)",
            style("→").cyan(),
            report.outcome,
            report.wins,
            report.losses
        );
    }
    Ok(())
}

fn print_summary(summary: &CampaignSummary) {
    let headline = match summary.status {
        CampaignStatus::Cleared => style("CAMPAIGN CLEARED").green().bold(),
        _ => style("GAME OVER").red().bold(),
    };
    println!(
        "{headline}: {} wins, {} losses over {} battles",
        summary.wins, summary.losses, summary.battles_fought
    );
    for member in &summary.party {
        print_member(member);
    }
}
