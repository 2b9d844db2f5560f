//! Ability definition oracle.

use crate::state::Ability;

/// Oracle providing ability definitions by id.
///
/// Abilities are static reference data: they are never created or destroyed
/// while a battle runs, and units only carry their ids.
pub trait AbilityOracle {
    /// Returns the ability definition for `id`, if known.
    fn ability(&self, id: &str) -> Option<&Ability>;
}

impl AbilityOracle for [Ability] {
    fn ability(&self, id: &str) -> Option<&Ability> {
        self.iter().find(|ability| ability.id.as_str() == id)
    }
}

impl AbilityOracle for Vec<Ability> {
    fn ability(&self, id: &str) -> Option<&Ability> {
        self.as_slice().ability(id)
    }
}

impl<T: AbilityOracle + ?Sized> AbilityOracle for &T {
    fn ability(&self, id: &str) -> Option<&Ability> {
        (**self).ability(id)
    }
}
