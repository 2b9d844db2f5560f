//! Ability catalog: the content-side [`AbilityOracle`].

use std::sync::LazyLock;

use battle_core::{Ability, AbilityOracle, Rarity};

use crate::tables::standard_abilities;

static STANDARD: LazyLock<AbilityCatalog> =
    LazyLock::new(|| AbilityCatalog::from_abilities(standard_abilities()));

/// Looks up a standard ability by id.
pub fn ability_by_id(id: &str) -> Option<&'static Ability> {
    STANDARD.get(id)
}

/// Rarity of a standard ability; unknown ids count as common.
pub fn rarity_of(id: &str) -> Rarity {
    ability_by_id(id).map_or(Rarity::Common, |ability| ability.rarity)
}

/// Ordered set of ability definitions, unique by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbilityCatalog {
    abilities: Vec<Ability>,
}

impl AbilityCatalog {
    /// A copy of the built-in abilities.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Builds a catalog; a later definition replaces an earlier one with the
    /// same id.
    pub fn from_abilities(abilities: impl IntoIterator<Item = Ability>) -> Self {
        let mut catalog = Self::default();
        for ability in abilities {
            catalog.insert(ability);
        }
        catalog
    }

    /// Adds or replaces a definition. Returns the replaced one.
    pub fn insert(&mut self, ability: Ability) -> Option<Ability> {
        match self
            .abilities
            .iter_mut()
            .find(|existing| existing.id == ability.id)
        {
            Some(existing) => Some(std::mem::replace(existing, ability)),
            None => {
                self.abilities.push(ability);
                None
            }
        }
    }

    /// Layers `other` on top of this catalog.
    #[must_use]
    pub fn merged(mut self, other: AbilityCatalog) -> Self {
        for ability in other.abilities {
            self.insert(ability);
        }
        self
    }

    pub fn get(&self, id: &str) -> Option<&Ability> {
        self.abilities.iter().find(|ability| ability.id.as_str() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.iter()
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }
}

impl AbilityOracle for AbilityCatalog {
    fn ability(&self, id: &str) -> Option<&Ability> {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use battle_core::{AbilityKind, Element, Targeting};

    use super::*;

    #[test]
    fn standard_catalog_is_unique() {
        let catalog = AbilityCatalog::standard();
        let mut ids: Vec<&str> = catalog.iter().map(|ability| ability.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(catalog.ability("thunder_strike").unwrap().rarity, Rarity::Rare);
        assert_eq!(rarity_of("no_such_ability"), Rarity::Common);
    }

    #[test]
    fn later_definitions_replace_earlier() {
        let custom = Ability::new(
            "spark",
            "Big Spark",
            Element::Surge,
            AbilityKind::Damage,
            Targeting::Single,
        );
        let catalog = AbilityCatalog::standard().merged(AbilityCatalog::from_abilities([custom]));
        assert_eq!(catalog.len(), AbilityCatalog::standard().len());
        assert_eq!(catalog.get("spark").unwrap().name, "Big Spark");
    }
}
