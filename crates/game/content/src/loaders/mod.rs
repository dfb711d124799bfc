//! Content loaders for reading battle data from files.
//!
//! Each loader has a `parse` entry point working on a string and a `load`
//! entry point reading a file. [`BuiltinContent`] parses the copies of
//! `data/` embedded at compile time.

pub mod builtin;
pub mod compatibility;
pub mod config;
pub mod enemies;
pub mod factory;
pub mod jobs;

pub use builtin::BuiltinContent;
pub use compatibility::CompatibilityLoader;
pub use config::ConfigLoader;
pub use enemies::EnemyLoader;
pub use factory::ContentFactory;
pub use jobs::JobLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
