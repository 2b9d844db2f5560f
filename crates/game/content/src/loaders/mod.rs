//! Content loaders for reading rosters and settings from files.
//!
//! - [`RosterLoader`]: JSON arrays of NFT metadata, built into units
//! - [`ConfigLoader`]: `BattleConfig` from TOML
//! - [`AbilityLoader`]: extra ability definitions from RON

pub mod abilities;
pub mod config;
pub mod roster;

pub use abilities::AbilityLoader;
pub use config::ConfigLoader;
pub use roster::{MetadataEntry, RosterLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
