//! Static reference data consumed by the processor.
//!
//! Every table is plain data: adding a trait value, an ability or a companion
//! type is an edit here and never touches derivation code. Trait values are
//! stored normalized (trimmed, lowercase).

pub mod abilities;
pub mod companions;
pub mod elements;
pub mod stats;

pub use abilities::{
    AbilityRule, FALLBACK_RULES, VERIFIED_RULES, basic_ability_id, standard_abilities,
};
pub use companions::{COMPANION_PROFILES, CompanionProfile};
pub use elements::{
    ELEMENT_COMBOS, ELEMENT_WEIGHTS, ElementDisplay, ElementModifiers, ElementWeight,
    KEYWORD_BUCKETS, element_display, element_modifiers,
};
pub use stats::{BaseStats, STAT_TABLE, StatRow, stat_rows};

#[cfg(test)]
mod tests {
    use battle_core::Element;

    use super::*;
    use crate::catalog::ability_by_id;

    fn is_normalized(value: &str) -> bool {
        value == value.trim() && value == value.to_ascii_lowercase()
    }

    #[test]
    fn every_referenced_ability_exists() {
        for element in Element::ALL {
            assert!(ability_by_id(basic_ability_id(element)).is_some(), "{element}");
        }
        for rule in VERIFIED_RULES.iter().chain(FALLBACK_RULES) {
            assert!(ability_by_id(rule.ability).is_some(), "{}", rule.ability);
        }
        for (name, profile) in COMPANION_PROFILES {
            for id in profile.abilities {
                assert!(ability_by_id(id).is_some(), "{name}: {id}");
            }
        }
    }

    #[test]
    fn table_values_are_normalized() {
        assert!(ELEMENT_WEIGHTS.iter().all(|entry| is_normalized(entry.value)));
        assert!(STAT_TABLE.iter().all(|row| is_normalized(row.value)));
        assert!(COMPANION_PROFILES.iter().all(|(name, _)| is_normalized(name)));
        for rule in VERIFIED_RULES.iter().chain(FALLBACK_RULES) {
            assert!(rule.requirements.iter().all(|(_, value)| is_normalized(value)));
        }
    }

    #[test]
    fn basic_abilities_match_their_element() {
        for element in Element::ALL {
            let ability = ability_by_id(basic_ability_id(element)).unwrap();
            assert_eq!(ability.element, element);
        }
    }
}
