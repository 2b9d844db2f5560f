//! Combat units: the immutable identity half of a battle participant.
//!
//! Everything that changes while a battle runs lives in
//! [`super::UnitStatus`], keyed by [`UnitId`].

use arrayvec::ArrayVec;

use super::{AbilityId, Element, Stats, UnitId};
use crate::config::BattleConfig;

/// Whether a unit is a primary fighter or a companion.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UnitKind {
    #[default]
    Primary,
    Companion,
}

/// Ordered, duplicate-free ability ids, capped at [`BattleConfig::MAX_ABILITIES`].
pub type AbilitySet = ArrayVec<AbilityId, { BattleConfig::MAX_ABILITIES }>;

/// A battle-ready unit derived from trait data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatUnit {
    pub id: UnitId,
    pub display_name: String,
    pub kind: UnitKind,
    pub element: Element,
    pub stats: Stats,
    pub abilities: AbilitySet,
    /// Cached from `element`.
    pub strong_against: Vec<Element>,
    /// Cached from `element`.
    pub weak_against: Vec<Element>,
}

impl CombatUnit {
    /// Creates a unit with no abilities.
    pub fn new(
        id: impl Into<UnitId>,
        display_name: impl Into<String>,
        kind: UnitKind,
        element: Element,
        stats: Stats,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            kind,
            element,
            stats,
            abilities: AbilitySet::new(),
            strong_against: element.strong_against(),
            weak_against: element.weak_against(),
        }
    }

    /// Appends abilities in order, skipping duplicates and anything past the cap.
    pub fn with_abilities<I, A>(mut self, abilities: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<AbilityId>,
    {
        for ability in abilities {
            let ability = ability.into();
            if self.abilities.is_full() {
                break;
            }
            if !self.abilities.contains(&ability) {
                self.abilities.push(ability);
            }
        }
        self
    }

    pub fn has_ability(&self, id: &str) -> bool {
        self.abilities.iter().any(|ability| ability.as_str() == id)
    }

    /// Normalized token identifier used to pair primaries with companions.
    ///
    /// The token number is the last run of ASCII digits in the id
    /// (`"bot-0042"` and `"pup#42"` both yield `"42"` once leading zeros are
    /// dropped). Ids without digits fall back to the lowercase id with any
    /// `primary` / `companion` segments removed.
    pub fn base_token_id(&self) -> String {
        let id = self.id.as_str();

        let digits: Vec<char> = id
            .chars()
            .rev()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if !digits.is_empty() {
            let number: String = digits.into_iter().rev().collect();
            let trimmed = number.trim_start_matches('0');
            return if trimmed.is_empty() {
                "0".to_owned()
            } else {
                trimmed.to_owned()
            };
        }

        id.to_ascii_lowercase()
            .split(|c: char| matches!(c, '-' | '_' | ':' | '#' | ' ' | '/'))
            .filter(|segment| !segment.is_empty())
            .filter(|segment| *segment != "primary" && *segment != "companion")
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Returns a copy with every stat scaled by `percent / 100`.
    #[must_use]
    pub fn boosted(&self, percent: u32) -> Self {
        let mut unit = self.clone();
        unit.stats = unit.stats.scaled_percent(percent);
        unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(id: &str) -> CombatUnit {
        CombatUnit::new(
            id,
            "Test",
            UnitKind::Primary,
            Element::Surge,
            Stats::new(100, 50, 40, 50, 100, 10),
        )
    }

    #[test]
    fn caches_type_relations() {
        let u = unit("a");
        assert_eq!(u.strong_against, vec![Element::Metal]);
        assert_eq!(u.weak_against, vec![Element::Cyber]);
    }

    #[test]
    fn abilities_are_unique_and_capped() {
        let u = unit("a").with_abilities(["a", "b", "a", "c", "d", "e", "f", "g"]);
        let ids: Vec<&str> = u.abilities.iter().map(AbilityId::as_str).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
        assert!(u.has_ability("c"));
        assert!(!u.has_ability("f"));
    }

    #[test]
    fn base_token_id_uses_trailing_number() {
        assert_eq!(unit("bot-0042").base_token_id(), "42");
        assert_eq!(unit("pup#42").base_token_id(), "42");
        assert_eq!(unit("companion-7-alt").base_token_id(), "7");
        assert_eq!(unit("primary-ace").base_token_id(), "ace");
        assert_eq!(unit("Ace_Companion").base_token_id(), "ace");
    }
}
