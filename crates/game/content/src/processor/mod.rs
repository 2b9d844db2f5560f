//! Trait processor: NFT attributes in, [`CombatUnit`] out.
//!
//! ```text
//! attributes ─▶ TraitSet ─┬─ primary ───▶ derive_element ─┐
//!                         └─ companion ─▶ companion_profile ┤
//!                                                           ▼
//!                                    derive_stats ─▶ derive_abilities ─▶ CombatUnit
//! ```
//!
//! Every step is total. Missing or malformed traits only mean fewer
//! contributions, so any input produces a playable unit.

mod abilities;
mod companion;
mod element;
mod stats;

pub use abilities::derive_abilities;
pub use companion::{companion_profile, companion_profile_of};
pub use element::{
    ElementHeuristic, ElementScores, KEYWORD_WEIGHT, KeywordHeuristic, NEUTRAL_THRESHOLD,
    TableOnlyHeuristic, derive_element, derive_element_with, score_elements,
};
pub use stats::{StatSheet, derive_stats};

use battle_core::{CombatUnit, UnitId, UnitKind};

use crate::tables::BaseStats;
use crate::traits::{TraitAttribute, TraitSet};

/// Builds units with a chosen element heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraitProcessor<H = KeywordHeuristic> {
    heuristic: H,
}

impl<H: ElementHeuristic> TraitProcessor<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Builds a unit from normalized traits.
    ///
    /// Companions take element and abilities from their profile and have
    /// their stats scaled by the profile tier.
    pub fn build(
        &self,
        id: impl Into<UnitId>,
        display_name: impl Into<String>,
        kind: UnitKind,
        traits: &TraitSet,
    ) -> CombatUnit {
        let id = id.into();
        let base = BaseStats::for_kind(kind);

        let (element, stats) = match kind {
            UnitKind::Primary => {
                let element = derive_element_with(traits, &self.heuristic);
                (element, derive_stats(traits, element, base))
            }
            UnitKind::Companion => {
                let profile = companion_profile_of(traits);
                let stats = derive_stats(traits, profile.element, base)
                    .scaled_percent(profile.multiplier_percent());
                (profile.element, stats)
            }
        };
        let abilities = derive_abilities(traits, kind, element);

        tracing::debug!(
            unit = %id,
            %kind,
            %element,
            ?stats,
            abilities = abilities.len(),
            "Built combat unit"
        );

        CombatUnit::new(id, display_name, kind, element, stats).with_abilities(abilities)
    }

    /// Builds a unit straight from metadata attributes.
    pub fn build_from_attributes(
        &self,
        id: impl Into<UnitId>,
        display_name: impl Into<String>,
        kind: UnitKind,
        attributes: &[TraitAttribute],
    ) -> CombatUnit {
        self.build(id, display_name, kind, &TraitSet::from_attributes(attributes))
    }
}

/// Builds a unit with the default [`KeywordHeuristic`].
pub fn build_unit(
    id: impl Into<UnitId>,
    display_name: impl Into<String>,
    kind: UnitKind,
    attributes: &[TraitAttribute],
) -> CombatUnit {
    TraitProcessor::<KeywordHeuristic>::default().build_from_attributes(
        id,
        display_name,
        kind,
        attributes,
    )
}

#[cfg(test)]
mod tests {
    use battle_core::{Element, Stats};

    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Vec<TraitAttribute> {
        pairs
            .iter()
            .map(|(trait_type, value)| TraitAttribute::new(*trait_type, *value))
            .collect()
    }

    #[test]
    fn builds_a_primary() {
        let unit = build_unit(
            "bot-7",
            "Bot #7",
            UnitKind::Primary,
            &attrs(&[
                ("Body", "Chrome"),
                ("Arm", "Tesla Coil"),
                ("Backpack", "Battery"),
                ("Eyes", "Visor"),
                ("Background", "Sunset"),
            ]),
        );
        assert_eq!(unit.element, Element::Surge);
        assert_eq!(unit.stats, Stats::new(100, 70, 55, 55, 120, 15));
        let ids: Vec<&str> = unit.abilities.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["spark", "thunder_strike", "overload"]);
        assert_eq!(unit.strong_against, vec![Element::Metal]);
    }

    #[test]
    fn companion_stats_scale_with_tier() {
        let unit = build_unit("pup-7", "Golem", UnitKind::Companion, &attrs(&[("Type", "Golem")]));
        assert_eq!(unit.element, Element::Metal);
        // (108, 40, 50, 40, 80, 10) scaled by 130%
        assert_eq!(unit.stats, Stats::new(140, 52, 65, 52, 104, 13));
    }

    #[test]
    fn empty_metadata_still_builds() {
        let primary = build_unit("x", "X", UnitKind::Primary, &[]);
        assert_eq!(primary.element, Element::Neutral);
        assert_eq!(primary.stats, BaseStats::PRIMARY);
        assert_eq!(primary.abilities.len(), 1);

        let companion = build_unit("y", "Y", UnitKind::Companion, &[]);
        assert_eq!(companion.element, Element::Feral);
        assert_eq!(companion.stats, Stats::new(80, 45, 35, 60, 80, 10));
    }

    #[test]
    fn heuristic_is_swappable() {
        let traits = TraitSet::new()
            .with(crate::traits::TraitCategory::Body, "laser chassis")
            .with(crate::traits::TraitCategory::Arm, "volt hammer");
        let keyword =
            TraitProcessor::new(KeywordHeuristic).build("a", "A", UnitKind::Primary, &traits);
        let strict =
            TraitProcessor::new(TableOnlyHeuristic).build("a", "A", UnitKind::Primary, &traits);
        assert_eq!(keyword.element, Element::Surge);
        assert_eq!(strict.element, Element::Neutral);
    }
}
