//! Companion profile lookup.

use crate::tables::{COMPANION_PROFILES, CompanionProfile};
use crate::traits::{TraitCategory, TraitSet};

/// Profile for a companion type. Unknown types get
/// [`CompanionProfile::FALLBACK`].
pub fn companion_profile(type_value: &str) -> CompanionProfile {
    let key = type_value.trim();
    COMPANION_PROFILES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map_or(CompanionProfile::FALLBACK, |(_, profile)| *profile)
}

/// Profile keyed by the `Type` trait.
pub fn companion_profile_of(traits: &TraitSet) -> CompanionProfile {
    traits
        .get(TraitCategory::Type)
        .map_or(CompanionProfile::FALLBACK, companion_profile)
}

#[cfg(test)]
mod tests {
    use battle_core::Element;

    use super::*;

    #[test]
    fn known_types_resolve_case_insensitively() {
        let golem = companion_profile(" Golem ");
        assert_eq!(golem.element, Element::Metal);
        assert_eq!(golem.tier, 3);
        assert_eq!(golem.multiplier_percent(), 130);
    }

    #[test]
    fn unknown_types_fall_back_to_feral() {
        assert_eq!(companion_profile("dragon"), CompanionProfile::FALLBACK);
        assert_eq!(companion_profile_of(&TraitSet::new()).element, Element::Feral);
        assert_eq!(CompanionProfile::FALLBACK.multiplier_percent(), 100);
    }
}
