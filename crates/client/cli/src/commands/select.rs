use anyhow::Result;
use clap::Parser;
use gauntlet_core::JobId;
use gauntlet_runtime::Session;

/// Replace the saved party selection
#[derive(Parser, Debug)]
pub struct Select {
    /// Job ids in party order, at most three (e.g. hero monk wizard)
    #[arg(value_name = "JOB")]
    jobs: Vec<String>,
}

impl Select {
    pub fn execute(self, session: &mut Session) -> Result<()> {
        session.clear_selection()?;
        for job in self.jobs {
            session.toggle_job(JobId::new(job))?;
        }

        // Report what a party built from this selection would contain.
        let selection = session.selection();
        if selection.is_empty() {
            println!("Selection cleared");
            return Ok(());
        }
        let (party, report) = session.build_party()?;
        println!("Party:");
        for member in party.members() {
            super::print_member(member);
        }
        if !report.skipped.is_empty() {
            let skipped: Vec<&str> = report.skipped.iter().map(JobId::as_str).collect();
            println!("Unknown jobs ignored: {}", skipped.join(", "));
        }
        Ok(())
    }
}
