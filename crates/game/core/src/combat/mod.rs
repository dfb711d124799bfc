//! Combat resolution system.
//!
//! This module provides pure functions for resolving combat interactions.
//! All combat logic is deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `physical_damage` / `magic_damage`: compatibility-scaled player damage
//! - `enemy_damage`: defense-reduced enemy damage with a minimum
//! - `heal_amount`: fixed fraction of max hp
//! - `split_reward` / `grant_experience`: experience distribution and the
//!   level-up loop

pub mod damage;
pub mod experience;

pub use damage::{AttackStyle, enemy_damage, heal_amount, magic_damage, physical_damage};
pub use experience::{LevelUp, grant_experience, split_reward};
