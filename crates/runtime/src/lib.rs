//! Runtime orchestration around the deterministic battle rules.
//!
//! This crate wires oracle access, the selection store, and the event bus
//! into a [`Session`] facade. Consumers embed a session to build parties,
//! run campaigns and training fights, and subscribe to battle events.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the facade and its builder
//! - [`events`] provides the topic-based event bus for presentation layers
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod config;
pub mod error;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod session;

pub use config::{CompatibilityMode, RuntimeConfig};
pub use error::{Result, RuntimeError};
pub use events::{CampaignEvent, Event, EventBus, SessionEvent, Topic};
pub use oracle::OracleManager;
pub use repository::{
    CampaignSnapshot, FileSelectionStore, InMemorySelectionStore, RepositoryError, SelectionStore,
};
pub use session::{Session, SessionBuilder};
