//! Elemental affinities.
//!
//! The four combat elements form a cycle in which each element beats exactly
//! one other and loses to exactly one other:
//!
//! ```text
//! Surge ──▶ Metal ──▶ Toxic ──▶ Cyber ──▶ Surge
//! ```
//!
//! `Neutral` is assigned when trait data shows no clear affinity. `Feral` and
//! `Astral` only appear on companion units. None of the three take part in
//! the cycle.

/// Elemental affinity of a unit, ability or effect.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum Element {
    Surge,
    Metal,
    Toxic,
    Cyber,
    #[default]
    Neutral,
    Feral,
    Astral,
}

impl Element {
    /// Every element in enumeration order.
    pub const ALL: [Element; 7] = [
        Element::Surge,
        Element::Metal,
        Element::Toxic,
        Element::Cyber,
        Element::Neutral,
        Element::Feral,
        Element::Astral,
    ];

    /// The cyclic combat elements, in enumeration order.
    pub const COMBAT: [Element; 4] = [
        Element::Surge,
        Element::Metal,
        Element::Toxic,
        Element::Cyber,
    ];

    /// Capitalized name for log text.
    pub const fn label(self) -> &'static str {
        match self {
            Element::Surge => "Surge",
            Element::Metal => "Metal",
            Element::Toxic => "Toxic",
            Element::Cyber => "Cyber",
            Element::Neutral => "Neutral",
            Element::Feral => "Feral",
            Element::Astral => "Astral",
        }
    }

    /// Returns true for the four elements that take part in the cycle.
    pub const fn is_combat(self) -> bool {
        matches!(
            self,
            Element::Surge | Element::Metal | Element::Toxic | Element::Cyber
        )
    }

    /// Returns true for elements that only companion units carry.
    pub const fn is_companion_only(self) -> bool {
        matches!(self, Element::Feral | Element::Astral)
    }

    /// The element this one is strong against, if any.
    pub const fn beats(self) -> Option<Element> {
        match self {
            Element::Surge => Some(Element::Metal),
            Element::Metal => Some(Element::Toxic),
            Element::Toxic => Some(Element::Cyber),
            Element::Cyber => Some(Element::Surge),
            Element::Neutral | Element::Feral | Element::Astral => None,
        }
    }

    /// The element this one is weak against, if any.
    pub fn beaten_by(self) -> Option<Element> {
        Element::COMBAT
            .into_iter()
            .find(|other| other.beats() == Some(self))
    }

    /// Elements this one deals boosted damage to.
    pub fn strong_against(self) -> Vec<Element> {
        self.beats().into_iter().collect()
    }

    /// Elements that deal boosted damage to this one.
    pub fn weak_against(self) -> Vec<Element> {
        self.beaten_by().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_closes() {
        let mut element = Element::Surge;
        for _ in 0..4 {
            element = element.beats().unwrap();
        }
        assert_eq!(element, Element::Surge);
    }

    #[test]
    fn outside_cycle_has_no_relations() {
        for element in [Element::Neutral, Element::Feral, Element::Astral] {
            assert!(element.strong_against().is_empty());
            assert!(element.weak_against().is_empty());
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("SURGE".parse::<Element>().unwrap(), Element::Surge);
        assert_eq!("cyber".parse::<Element>().unwrap(), Element::Cyber);
        assert_eq!(Element::Metal.to_string(), "metal");
    }
}
