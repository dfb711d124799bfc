use anyhow::Result;
use clap::Parser;
use console::style;
use gauntlet_core::{CatalogOracle, JobId};
use gauntlet_runtime::Session;

/// List playable jobs
#[derive(Parser, Debug)]
pub struct Jobs {}

impl Jobs {
    pub fn execute(self, session: &Session) -> Result<()> {
        let selected = session.selection();
        println!(
            "{}",
            style(format!(
                "{:<3} {:<10} {:<10} {:>4} {:>4} {:>4} {:>4}",
                "", "ID", "NAME", "HP", "ATK", "DEF", "MAG"
            ))
            .bold()
        );
        for job in session.oracles().catalog().list_jobs() {
            let marker = if selected.contains(&job.id) { "*" } else { " " };
            println!(
                "{marker}{:<2} {:<10} {:<10} {:>4} {:>4} {:>4} {:>4}",
                job.icon, job.id.as_str(), job.name, job.hp, job.attack, job.defense, job.magic
            );
        }
        Ok(())
    }
}

/// List enemies and their compatibility tags
#[derive(Parser, Debug)]
pub struct Enemies {}

impl Enemies {
    pub fn execute(self, session: &Session) -> Result<()> {
        println!(
            "{}",
            style(format!(
                "{:<3} {:>3} {:<8} {:>4} {:>4} {:>4}  {}",
                "", "ID", "NAME", "HP", "ATK", "EXP", "WEAK / RESIST"
            ))
            .bold()
        );
        for enemy in session.oracles().catalog().list_enemies() {
            println!(
                "{:<2} {:>3} {:<8} {:>4} {:>4} {:>4}  {} / {}",
                enemy.icon(),
                enemy.id.0,
                enemy.name,
                enemy.hp,
                enemy.attack,
                enemy.experience_reward,
                join(&enemy.weaknesses),
                join(&enemy.resistances),
            );
        }
        Ok(())
    }
}

fn join<'a>(ids: impl IntoIterator<Item = &'a JobId>) -> String {
    let names: Vec<&str> = ids.into_iter().map(JobId::as_str).collect();
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(",")
    }
}
