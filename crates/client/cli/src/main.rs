//! Headless gauntlet simulator.
//!
//! Drives a [`Session`] from the command line: inspect the catalog, choose a
//! party, and let the autopilot play campaign runs or training fights.
//!
//! ```bash
//! gauntlet select hero monk wizard
//! gauntlet campaign --runs 5 --seed 42
//! gauntlet train 4 --fights 3 --party
//! ```

mod autopilot;
mod commands;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Args, Parser};
use commands::{Campaign, Enemies, Jobs, Select, Train};
use gauntlet_core::TurnOrder;
use gauntlet_runtime::{
    CompatibilityMode, InMemorySelectionStore, OracleManager, RuntimeConfig, Session,
};

/// Party-based battle gauntlet, played by an autopilot
#[derive(Parser)]
#[command(name = "gauntlet")]
#[command(about = "Turn-based party battles against a campaign of enemies", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List playable jobs
    Jobs(Jobs),

    /// List enemies and their compatibility tags
    Enemies(Enemies),

    /// Replace the saved party selection
    Select(Select),

    /// Play campaign runs with the selected party
    Campaign(Campaign),

    /// Fight a single enemy in training mode
    Train(Train),
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Fixed game seed for reproducible runs
    #[arg(long, global = true, value_name = "SEED")]
    seed: Option<u64>,

    /// Content directory with jobs.ron, enemies.ron, compatibility.ron and config.toml
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Directory for the saved selection and campaign progress
    #[arg(long, global = true, value_name = "DIR")]
    save_dir: Option<PathBuf>,

    /// Keep selection and progress in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Compatibility strategy
    #[arg(long, global = true, value_enum, value_name = "MODE")]
    compatibility: Option<CompatibilityArg>,

    /// A random living member acts each player turn
    #[arg(long, global = true)]
    random_actor: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum CompatibilityArg {
    /// Species table from compatibility.ron
    Table,
    /// Per-enemy weakness and resistance tags
    Tags,
}

impl From<CompatibilityArg> for CompatibilityMode {
    fn from(arg: CompatibilityArg) -> Self {
        match arg {
            CompatibilityArg::Table => CompatibilityMode::Table,
            CompatibilityArg::Tags => CompatibilityMode::Tags,
        }
    }
}

impl GlobalArgs {
    /// Environment first, flags on top.
    fn runtime_config(&self) -> Result<RuntimeConfig> {
        let mut config = RuntimeConfig::from_env()?;

        if let Some(seed) = self.seed {
            config.game_seed = Some(seed);
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.save_dir {
            config.save_dir = Some(dir.clone());
        }
        if let Some(mode) = self.compatibility {
            config.compatibility = mode.into();
        }
        if config.save_dir.is_none() && !self.ephemeral {
            config.save_dir = RuntimeConfig::default_save_dir();
        }

        Ok(config)
    }

    fn open_session(&self) -> Result<Session> {
        let config = self.runtime_config()?;
        let mut builder = Session::builder();

        if self.ephemeral {
            builder = builder.store(InMemorySelectionStore::new());
        }

        if self.random_actor {
            let oracles = match &config.data_dir {
                Some(dir) => OracleManager::from_data_dir(dir, config.compatibility)?,
                None => OracleManager::builtin(config.compatibility)?,
            };
            let mut battle = oracles.config().clone();
            battle.turn_order = TurnOrder::RandomActor;
            builder = builder.oracles(oracles.with_config(battle));
        }

        Ok(builder.config(config).build()?)
    }
}

fn main() -> Result<()> {
    // Load .env file if it exists (for GAUNTLET_* and RUST_LOG)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging(cli.global.verbose);

    let mut session = cli.global.open_session()?;
    tracing::debug!("Using game seed {}", session.game_seed());

    match cli.command {
        Command::Jobs(cmd) => cmd.execute(&session),
        Command::Enemies(cmd) => cmd.execute(&session),
        Command::Select(cmd) => cmd.execute(&mut session),
        Command::Campaign(cmd) => cmd.execute(&mut session),
        Command::Train(cmd) => cmd.execute(&mut session),
    }
}
