//! NFT trait attributes and their normalized form.
//!
//! Metadata attributes arrive as free-form `trait_type` / `value` pairs. The
//! processor only cares about a fixed set of categories, so attributes are
//! normalized once into a [`TraitSet`]:
//!
//! - categories parse case-insensitively, with a few aliases
//!   (`hat`/`headwear` → [`TraitCategory::Top`], `rarity`/`1/1` →
//!   [`TraitCategory::Special`])
//! - values are trimmed and lowercased
//! - unknown categories and empty values are dropped
//!
//! Nothing here fails: malformed metadata simply yields fewer traits.

/// A raw metadata attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitAttribute {
    pub trait_type: String,
    pub value: String,
}

impl TraitAttribute {
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

/// Trait categories the processor understands.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TraitCategory {
    Body,
    Arm,
    Backpack,
    Eyes,
    Ears,
    Mouth,
    #[strum(to_string = "top", serialize = "hat", serialize = "headwear")]
    Top,
    Helmet,
    #[strum(to_string = "special", serialize = "rarity", serialize = "1/1")]
    Special,
    /// Dominant trait of a companion.
    Type,
}

impl TraitCategory {
    /// Categories whose unmapped values are still scored for element affinity.
    pub const fn is_important(self) -> bool {
        matches!(
            self,
            TraitCategory::Body
                | TraitCategory::Arm
                | TraitCategory::Backpack
                | TraitCategory::Helmet
                | TraitCategory::Special
        )
    }
}

/// Normalized traits of one token, in metadata order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraitSet {
    entries: Vec<(TraitCategory, String)>,
}

impl TraitSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes raw attributes, skipping anything unrecognized.
    pub fn from_attributes(attributes: &[TraitAttribute]) -> Self {
        let mut set = Self::new();
        for attribute in attributes {
            let Ok(category) = attribute.trait_type.trim().parse::<TraitCategory>() else {
                continue;
            };
            set.insert(category, &attribute.value);
        }
        set
    }

    /// Adds a trait. Empty values are ignored.
    pub fn insert(&mut self, category: TraitCategory, value: &str) {
        let value = normalize(value);
        if !value.is_empty() {
            self.entries.push((category, value));
        }
    }

    #[must_use]
    pub fn with(mut self, category: TraitCategory, value: &str) -> Self {
        self.insert(category, value);
        self
    }

    /// First value recorded for `category`.
    pub fn get(&self, category: TraitCategory) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, value)| value.as_str())
    }

    /// Whether `category` holds `value`, compared case-insensitively.
    pub fn has(&self, category: TraitCategory, value: &str) -> bool {
        self.entries
            .iter()
            .any(|(c, v)| *c == category && v.eq_ignore_ascii_case(value.trim()))
    }

    /// Whether every `(category, value)` requirement holds.
    pub fn satisfies(&self, requirements: &[(TraitCategory, &str)]) -> bool {
        requirements
            .iter()
            .all(|(category, value)| self.has(*category, value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (TraitCategory, &str)> {
        self.entries
            .iter()
            .map(|(category, value)| (*category, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&[TraitAttribute]> for TraitSet {
    fn from(attributes: &[TraitAttribute]) -> Self {
        Self::from_attributes(attributes)
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}
