//! Trait processing and static battle content.
//!
//! This crate turns NFT metadata into battle-ready units and houses the
//! static tables the derivation reads from:
//! - Trait normalization (categories, aliases)
//! - Element affinity, stat and ability tables
//! - Companion profiles
//! - The standard ability catalog (an [`battle_core::AbilityOracle`])
//!
//! Content is reference data: it feeds unit construction and ability lookup
//! but never appears in battle state.
//!
//! With the `loaders` feature, rosters load from JSON metadata, configuration
//! from TOML and extra abilities from RON.

pub mod catalog;
pub mod processor;
pub mod tables;
pub mod traits;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{AbilityCatalog, ability_by_id, rarity_of};
pub use processor::{
    ElementHeuristic, ElementScores, KeywordHeuristic, NEUTRAL_THRESHOLD, StatSheet,
    TableOnlyHeuristic, TraitProcessor, build_unit, companion_profile, derive_abilities,
    derive_element, derive_element_with, derive_stats,
};
pub use tables::{BaseStats, CompanionProfile, ElementDisplay, element_display};
pub use traits::{TraitAttribute, TraitCategory, TraitSet};

#[cfg(feature = "loaders")]
pub use loaders::{AbilityLoader, ConfigLoader, LoadResult, RosterLoader};
