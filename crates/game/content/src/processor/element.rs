//! Element affinity scoring.
//!
//! Each combat element accumulates weight from three sources:
//!
//! 1. table weights for known `(category, value)` pairs
//! 2. an [`ElementHeuristic`] for unknown values in important categories
//! 3. fixed bonuses for known trait combinations
//!
//! The top element wins unless its score is below [`NEUTRAL_THRESHOLD`].

use battle_core::Element;

use crate::tables::{ELEMENT_COMBOS, ELEMENT_WEIGHTS, KEYWORD_BUCKETS};
use crate::traits::{TraitCategory, TraitSet};

/// Minimum winning score; anything lower yields [`Element::Neutral`].
pub const NEUTRAL_THRESHOLD: u32 = 3;

/// Weight a keyword bucket adds when any of its keywords matches.
pub const KEYWORD_WEIGHT: u32 = 2;

/// Accumulated score per combat element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElementScores([u32; 4]);

impl ElementScores {
    fn index(element: Element) -> Option<usize> {
        Element::COMBAT.iter().position(|e| *e == element)
    }

    /// Adds weight to a combat element. Other elements are ignored.
    pub fn add(&mut self, element: Element, weight: u32) {
        if let Some(i) = Self::index(element) {
            self.0[i] = self.0[i].saturating_add(weight);
        }
    }

    pub fn get(&self, element: Element) -> u32 {
        Self::index(element).map_or(0, |i| self.0[i])
    }

    pub fn merge(&mut self, other: ElementScores) {
        for element in Element::COMBAT {
            self.add(element, other.get(element));
        }
    }

    /// Highest-scoring element with its score. Ties keep the element that
    /// comes first in enumeration order.
    pub fn best(&self) -> (Element, u32) {
        let mut best = (Element::COMBAT[0], self.0[0]);
        for (element, score) in Element::COMBAT.into_iter().zip(self.0).skip(1) {
            if score > best.1 {
                best = (element, score);
            }
        }
        best
    }
}

/// Scores trait values that have no entry in the element table.
pub trait ElementHeuristic {
    fn score(&self, category: TraitCategory, value: &str) -> ElementScores;
}

/// Substring matching against keyword buckets: each bucket that matches adds
/// [`KEYWORD_WEIGHT`] to its element.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeywordHeuristic;

impl ElementHeuristic for KeywordHeuristic {
    fn score(&self, _category: TraitCategory, value: &str) -> ElementScores {
        let mut scores = ElementScores::default();
        for (element, keywords) in KEYWORD_BUCKETS {
            if keywords.iter().any(|keyword| value.contains(keyword)) {
                scores.add(*element, KEYWORD_WEIGHT);
            }
        }
        scores
    }
}

/// Ignores unknown values entirely.
#[derive(Clone, Copy, Debug, Default)]
pub struct TableOnlyHeuristic;

impl ElementHeuristic for TableOnlyHeuristic {
    fn score(&self, _category: TraitCategory, _value: &str) -> ElementScores {
        ElementScores::default()
    }
}

/// Sums table weights, heuristic scores and combo bonuses.
pub fn score_elements<H: ElementHeuristic + ?Sized>(
    traits: &TraitSet,
    heuristic: &H,
) -> ElementScores {
    let mut scores = ElementScores::default();

    for (category, value) in traits.iter() {
        let mut known = false;
        for entry in ELEMENT_WEIGHTS
            .iter()
            .filter(|entry| entry.category == category && entry.value == value)
        {
            known = true;
            scores.add(entry.element, entry.weight);
        }
        if !known && category.is_important() {
            scores.merge(heuristic.score(category, value));
        }
    }

    for (requirements, element, bonus) in ELEMENT_COMBOS {
        if traits.satisfies(requirements) {
            scores.add(*element, *bonus);
        }
    }

    scores
}

/// Element of a primary unit, scored with [`KeywordHeuristic`].
pub fn derive_element(traits: &TraitSet) -> Element {
    derive_element_with(traits, &KeywordHeuristic)
}

pub fn derive_element_with<H: ElementHeuristic + ?Sized>(
    traits: &TraitSet,
    heuristic: &H,
) -> Element {
    let scores = score_elements(traits, heuristic);
    let (element, score) = scores.best();
    tracing::trace!(?scores, %element, score, "scored element affinity");
    if score < NEUTRAL_THRESHOLD {
        Element::Neutral
    } else {
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TraitCategory::{Arm, Body, Eyes};

    #[test]
    fn table_weights_and_combos() {
        let traits = TraitSet::new()
            .with(Body, "Chrome")
            .with(Arm, "Tesla Coil");
        let scores = score_elements(&traits, &KeywordHeuristic);
        assert_eq!(scores.get(Element::Metal), 3);
        // 3 from the arm plus the chrome/tesla combo bonus
        assert_eq!(scores.get(Element::Surge), 6);
        assert_eq!(derive_element(&traits), Element::Surge);
    }

    #[test]
    fn keywords_only_score_important_categories() {
        let weak = TraitSet::new().with(Body, "Laser Chassis");
        assert_eq!(derive_element(&weak), Element::Neutral);

        let strong = weak.clone().with(Arm, "Volt Hammer");
        assert_eq!(derive_element(&strong), Element::Surge);
        assert_eq!(derive_element_with(&strong, &TableOnlyHeuristic), Element::Neutral);

        let eyes = TraitSet::new()
            .with(Eyes, "laser eyes")
            .with(Eyes, "volt eyes");
        assert_eq!(score_elements(&eyes, &KeywordHeuristic), ElementScores::default());
    }

    #[test]
    fn each_matching_bucket_counts_once() {
        let scores = KeywordHeuristic.score(Body, "acid volt volt");
        assert_eq!(scores.get(Element::Surge), KEYWORD_WEIGHT);
        assert_eq!(scores.get(Element::Toxic), KEYWORD_WEIGHT);
        assert_eq!(scores.get(Element::Cyber), 0);
    }

    #[test]
    fn ties_go_to_enumeration_order() {
        let traits = TraitSet::new().with(Body, "chrome").with(Arm, "syringe");
        let scores = score_elements(&traits, &KeywordHeuristic);
        assert_eq!(scores.get(Element::Metal), scores.get(Element::Toxic));
        assert_eq!(derive_element(&traits), Element::Metal);
    }

    #[test]
    fn empty_traits_are_neutral() {
        assert_eq!(derive_element(&TraitSet::new()), Element::Neutral);
    }
}
