//! Roster loader.
//!
//! Reads NFT metadata exported as a JSON array and builds one unit per entry:
//!
//! ```json
//! [
//!   {
//!     "id": "bot-0042",
//!     "name": "Bot #42",
//!     "kind": "primary",
//!     "attributes": [
//!       { "trait_type": "Body", "value": "Chrome" },
//!       { "trait_type": "Level", "value": 3 }
//!     ]
//!   }
//! ]
//! ```
//!
//! `name` defaults to the id and `kind` to `primary`. Numeric and boolean
//! attribute values are read as text; anything else is skipped.

use std::path::Path;

use battle_core::{CombatUnit, UnitKind};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};
use crate::processor::{ElementHeuristic, KeywordHeuristic, TraitProcessor};
use crate::traits::TraitAttribute;

/// One token's metadata as exported by the indexer.
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataEntry {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub attributes: Vec<RawAttribute>,
}

/// Attribute with an untyped value.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAttribute {
    pub trait_type: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl RawAttribute {
    fn to_attribute(&self) -> Option<TraitAttribute> {
        let value = match &self.value {
            serde_json::Value::String(text) => text.clone(),
            serde_json::Value::Number(number) => number.to_string(),
            serde_json::Value::Bool(flag) => flag.to_string(),
            _ => return None,
        };
        Some(TraitAttribute::new(self.trait_type.clone(), value))
    }
}

impl MetadataEntry {
    /// Unit kind, or an error naming the entry when the kind is unknown.
    pub fn unit_kind(&self) -> LoadResult<UnitKind> {
        match &self.kind {
            None => Ok(UnitKind::Primary),
            Some(kind) => kind.trim().parse().map_err(|_| {
                anyhow::anyhow!("Unknown unit kind '{}' for token '{}'", kind, self.id)
            }),
        }
    }

    pub fn attributes(&self) -> Vec<TraitAttribute> {
        self.attributes
            .iter()
            .filter_map(RawAttribute::to_attribute)
            .collect()
    }
}

/// Loader for rosters from JSON metadata files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster with the default trait processor.
    pub fn load(path: &Path) -> LoadResult<Vec<CombatUnit>> {
        Self::load_with(path, &TraitProcessor::<KeywordHeuristic>::default())
    }

    /// Load a roster with a custom trait processor.
    pub fn load_with<H: ElementHeuristic>(
        path: &Path,
        processor: &TraitProcessor<H>,
    ) -> LoadResult<Vec<CombatUnit>> {
        let content = read_file(path)?;
        Self::parse_with(&content, processor)
            .map_err(|e| anyhow::anyhow!("Failed to load roster {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<CombatUnit>> {
        Self::parse_with(content, &TraitProcessor::<KeywordHeuristic>::default())
    }

    pub fn parse_with<H: ElementHeuristic>(
        content: &str,
        processor: &TraitProcessor<H>,
    ) -> LoadResult<Vec<CombatUnit>> {
        let entries: Vec<MetadataEntry> = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster JSON: {}", e))?;

        let mut units = Vec::with_capacity(entries.len());
        for entry in entries {
            let kind = entry.unit_kind()?;
            let name = entry.name.clone().unwrap_or_else(|| entry.id.clone());
            let attributes = entry.attributes();
            units.push(processor.build_from_attributes(entry.id, name, kind, &attributes));
        }

        tracing::debug!(units = units.len(), "Loaded roster");
        Ok(units)
    }
}
