//! Topic-based event bus for session events.
//!
//! Presentation layers subscribe to the topics they render: per-action battle
//! notifications, campaign progress, or session-level rejections.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{CampaignEvent, SessionEvent};
