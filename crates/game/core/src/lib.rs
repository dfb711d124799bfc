//! Deterministic battle rules and data types shared across clients.
//!
//! `gauntlet-core` defines the canonical rules (actions, engine, campaign,
//! battle state) and exposes pure APIs that can be reused by the runtime, the
//! CLI and offline tools. All encounter mutation flows through
//! [`engine::BattleEngine`]; runs of encounters are driven by
//! [`campaign::CampaignController`] and [`training::TrainingGround`].
pub mod action;
pub mod campaign;
pub mod combat;
pub mod compatibility;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod party;
pub mod state;
pub mod training;

pub use action::{
    ActionError, ActionResult, ActionTransition, AttackResult, BattleAction, EnemyAttackResult,
    EncounterStarted, HealResult, SwitchResult,
};
pub use campaign::{
    CampaignController, CampaignError, CampaignStatus, CampaignStep, CampaignSummary,
    EncounterReport, OfferPreview,
};
pub use combat::AttackStyle;
pub use compatibility::{
    Compatibility, CompatibilityBand, CompatibilityOracle, CompatibilityTable, TagCompatibility,
};
pub use config::{BattleConfig, CampaignPolicy, CompatibilityScope, TurnOrder};
pub use engine::{
    BattleEngine, BattleEvent, ExecuteError, ExecutionOutcome, TransitionPhase,
    TransitionPhaseError,
};
pub use env::{
    BattleEnv, CatalogOracle, EnemyDefinition, EnemyId, Env, JobDefinition, JobId, OracleError,
    PcgRng, RngOracle, ScriptedRng, StaticCatalog,
};
pub use error::{ErrorSeverity, GameError};
pub use party::{JobSelection, PartyBuildReport, PartyError, SelectionError, build_party};
pub use state::{
    BattleLog, BattleLogEntry, BattleOutcome, BattlePhase, BattleState, CampaignState, Combatant,
    EnemyInstance, LogCategory, Party, StateError,
};
pub use training::{TrainingGround, TrainingRecord};
