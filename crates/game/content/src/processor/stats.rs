//! Stat derivation.

use battle_core::{Element, StatKind, Stats};

use crate::tables::{ElementModifiers, element_modifiers, stat_rows};
use crate::traits::TraitSet;

/// Signed working copy of the six stats. Deltas may push a value below zero
/// before the final floor clamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatSheet([i32; 6]);

impl StatSheet {
    pub fn from_stats(stats: Stats) -> Self {
        let mut sheet = Self::default();
        for stat in StatKind::ALL {
            sheet.0[stat.as_index()] = stats.get(stat).min(i32::MAX as u32) as i32;
        }
        sheet
    }

    pub fn get(&self, stat: StatKind) -> i32 {
        self.0[stat.as_index()]
    }

    pub fn add(&mut self, stat: StatKind, delta: i32) {
        let value = &mut self.0[stat.as_index()];
        *value = value.saturating_add(delta);
    }

    /// Applies a percentage change, truncating toward zero.
    pub fn scale_percent(&mut self, stat: StatKind, percent: i32) {
        let value = &mut self.0[stat.as_index()];
        let scaled = *value as i64 * (100 + percent as i64) / 100;
        *value = scaled.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    }

    pub fn clamp(&mut self, stat: StatKind, min: i32, max: i32) {
        let value = &mut self.0[stat.as_index()];
        *value = (*value).clamp(min, max);
    }

    /// Flat deltas, then percentages, then range clamps.
    pub fn apply_modifiers(&mut self, modifiers: &ElementModifiers) {
        for (stat, delta) in modifiers.flat {
            self.add(*stat, *delta);
        }
        for (stat, percent) in modifiers.percent {
            self.scale_percent(*stat, *percent);
        }
        for (stat, min, max) in modifiers.clamp {
            self.clamp(*stat, *min, *max);
        }
    }

    /// Converts to [`Stats`], raising every value to [`Stats::FLOOR`].
    pub fn into_stats(self) -> Stats {
        let mut stats = Stats::default();
        for stat in StatKind::ALL {
            stats.set(stat, self.get(stat).max(0) as u32);
        }
        stats.clamp_to_floor()
    }
}

/// Derives stats from `base`, the element's modifiers and every trait that
/// has a stat row. Unmapped traits contribute nothing.
pub fn derive_stats(traits: &TraitSet, element: Element, base: Stats) -> Stats {
    let mut sheet = StatSheet::from_stats(base);
    sheet.apply_modifiers(&element_modifiers(element));

    for (category, value) in traits.iter() {
        for row in stat_rows(category, value) {
            for (stat, delta) in row.deltas {
                sheet.add(*stat, *delta);
            }
        }
    }

    sheet.into_stats()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::BaseStats;
    use crate::traits::TraitCategory::{Arm, Backpack, Body, Eyes};

    #[test]
    fn element_then_traits() {
        let traits = TraitSet::new()
            .with(Body, "chrome")
            .with(Arm, "tesla coil")
            .with(Backpack, "battery")
            .with(Eyes, "visor");
        let stats = derive_stats(&traits, Element::Surge, BaseStats::PRIMARY);
        // speed 50 + 10 - 5, attack 50 * 1.1 + 15, crit clamped into [5, 40] then + 5
        assert_eq!(stats, Stats::new(100, 70, 55, 55, 120, 15));
    }

    #[test]
    fn unmapped_traits_contribute_nothing() {
        let traits = TraitSet::new().with(Body, "cardboard").with(Eyes, "sleepy");
        assert_eq!(
            derive_stats(&traits, Element::Neutral, BaseStats::PRIMARY),
            BaseStats::PRIMARY
        );
    }

    #[test]
    fn negative_totals_clamp_to_floor() {
        let mut sheet = StatSheet::from_stats(Stats::new(40, 5, 0, 12, 0, 0));
        sheet.add(StatKind::Defense, -25);
        assert_eq!(sheet.get(StatKind::Defense), -25);
        assert_eq!(sheet.into_stats(), Stats::new(50, 10, 10, 12, 30, 1));
    }

    #[test]
    fn percent_truncates() {
        let mut sheet = StatSheet::from_stats(Stats::new(55, 10, 10, 10, 30, 1));
        sheet.scale_percent(StatKind::Hp, 10);
        assert_eq!(sheet.get(StatKind::Hp), 60);
    }
}
