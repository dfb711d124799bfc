//! Data-driven battle content and loaders.
//!
//! This crate houses the default catalog and provides loaders for RON/TOML
//! data files:
//! - Job classes (data-driven via RON)
//! - Enemy roster (data-driven via RON)
//! - Species compatibility table (data-driven via RON)
//! - Battle configuration (data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in battle state.
//!
//! All loaders use gauntlet-core types directly with serde for RON/TOML
//! deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    BuiltinContent, CompatibilityLoader, ConfigLoader, ContentFactory, EnemyLoader, JobLoader,
    LoadResult,
};
