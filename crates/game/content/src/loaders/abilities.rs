//! Ability definition loader.

use std::path::Path;

use battle_core::Ability;
use serde::{Deserialize, Serialize};

use crate::catalog::AbilityCatalog;
use crate::loaders::{LoadResult, read_file};

/// Ability file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityFile {
    pub abilities: Vec<Ability>,
}

/// Loader for ability definitions from RON files.
pub struct AbilityLoader;

impl AbilityLoader {
    /// Load ability definitions from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an `AbilityFile`
    ///
    /// # Returns
    ///
    /// Returns a catalog holding only the loaded abilities; layer it over
    /// [`AbilityCatalog::standard`] with [`AbilityCatalog::merged`].
    pub fn load(path: &Path) -> LoadResult<AbilityCatalog> {
        let content = read_file(path)?;
        let file: AbilityFile = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse ability RON at {}: {}", path.display(), e)
        })?;

        Ok(AbilityCatalog::from_abilities(file.abilities))
    }
}
