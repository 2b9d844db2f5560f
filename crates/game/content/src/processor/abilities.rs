//! Ability unlocking.

use std::cmp::Reverse;

use battle_core::{AbilityId, BattleConfig, Element, UnitKind};

use super::companion::companion_profile_of;
use crate::catalog::rarity_of;
use crate::tables::{FALLBACK_RULES, VERIFIED_RULES, basic_ability_id};
use crate::traits::TraitSet;

/// Abilities a unit starts with, basic ability first.
///
/// Primaries scan the verified rules, then the fallback rules; companions take
/// their profile's abilities. Past [`BattleConfig::MAX_ABILITIES`] the rarest
/// abilities are kept, in the order they were acquired. The basic ability is
/// always kept.
pub fn derive_abilities(traits: &TraitSet, kind: UnitKind, element: Element) -> Vec<AbilityId> {
    let mut acquired: Vec<&'static str> = vec![basic_ability_id(element)];
    let mut grant = |id: &'static str| {
        if !acquired.contains(&id) {
            acquired.push(id);
        }
    };

    match kind {
        UnitKind::Primary => {
            for rule in VERIFIED_RULES.iter().chain(FALLBACK_RULES) {
                if traits.satisfies(rule.requirements) {
                    grant(rule.ability);
                }
            }
        }
        UnitKind::Companion => {
            for id in companion_profile_of(traits).abilities {
                grant(*id);
            }
        }
    }

    keep_rarest(&acquired, BattleConfig::MAX_ABILITIES)
        .into_iter()
        .map(AbilityId::from)
        .collect()
}

/// First id plus the `cap - 1` rarest of the rest, order preserved.
fn keep_rarest<'a>(ids: &[&'a str], cap: usize) -> Vec<&'a str> {
    if ids.len() <= cap {
        return ids.to_vec();
    }

    let mut ranked: Vec<usize> = (1..ids.len()).collect();
    // stable: equal rarities keep acquisition order
    ranked.sort_by_key(|&i| Reverse(rarity_of(ids[i])));
    ranked.truncate(cap.saturating_sub(1));
    ranked.sort_unstable();

    std::iter::once(ids[0])
        .chain(ranked.into_iter().map(|i| ids[i]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TraitCategory::{
        Arm, Backpack, Body, Ears, Helmet, Mouth, Special, Top, Type,
    };

    fn ids(abilities: &[AbilityId]) -> Vec<&str> {
        abilities.iter().map(AbilityId::as_str).collect()
    }

    #[test]
    fn basic_then_rules_in_order() {
        let traits = TraitSet::new()
            .with(Body, "chrome")
            .with(Arm, "tesla coil")
            .with(Backpack, "battery");
        let abilities = derive_abilities(&traits, UnitKind::Primary, Element::Surge);
        assert_eq!(ids(&abilities), vec!["spark", "thunder_strike", "overload"]);
    }

    #[test]
    fn partial_requirements_unlock_nothing() {
        let traits = TraitSet::new().with(Body, "chrome");
        let abilities = derive_abilities(&traits, UnitKind::Primary, Element::Metal);
        assert_eq!(ids(&abilities), vec!["bash"]);
    }

    #[test]
    fn duplicates_are_granted_once() {
        // acid_splash is both a verified and a fallback unlock
        let traits = TraitSet::new()
            .with(Arm, "syringe")
            .with(Mouth, "gas mask");
        let abilities = derive_abilities(&traits, UnitKind::Primary, Element::Toxic);
        assert_eq!(ids(&abilities), vec!["spit", "acid_splash"]);
    }

    #[test]
    fn over_cap_keeps_rarest_in_acquisition_order() {
        let traits = TraitSet::new()
            .with(Body, "chrome")
            .with(Arm, "tesla coil")
            .with(Backpack, "battery")
            .with(Ears, "lightning rod")
            .with(Special, "glitched")
            .with(Special, "radioactive")
            .with(Helmet, "knight")
            .with(Top, "halo");
        let abilities = derive_abilities(&traits, UnitKind::Primary, Element::Surge);
        assert_eq!(
            ids(&abilities),
            vec!["spark", "chain_lightning", "system_crash", "meltdown", "fortify"]
        );
    }

    #[test]
    fn companions_use_their_profile() {
        let golem = TraitSet::new().with(Type, "golem");
        let abilities = derive_abilities(&golem, UnitKind::Companion, Element::Metal);
        assert_eq!(ids(&abilities), vec!["bash", "iron_wall", "fortify"]);

        let unknown = TraitSet::new().with(Type, "dragon");
        let abilities = derive_abilities(&unknown, UnitKind::Companion, Element::Feral);
        assert_eq!(ids(&abilities), vec!["bite"]);
    }
}
