//! Base stats and per-category trait stat deltas.

use battle_core::{StatKind, Stats, UnitKind};

use crate::traits::TraitCategory;

/// Starting stats before element and trait adjustments.
pub struct BaseStats;

impl BaseStats {
    pub const PRIMARY: Stats = Stats::new(100, 50, 40, 50, 100, 10);
    pub const COMPANION: Stats = Stats::new(80, 40, 35, 60, 80, 10);

    pub const fn for_kind(kind: UnitKind) -> Stats {
        match kind {
            UnitKind::Primary => Self::PRIMARY,
            UnitKind::Companion => Self::COMPANION,
        }
    }
}

/// Additive stat deltas granted by one trait value.
#[derive(Clone, Copy, Debug)]
pub struct StatRow {
    pub category: TraitCategory,
    pub value: &'static str,
    pub deltas: &'static [(StatKind, i32)],
}

const fn row(
    category: TraitCategory,
    value: &'static str,
    deltas: &'static [(StatKind, i32)],
) -> StatRow {
    StatRow {
        category,
        value,
        deltas,
    }
}

use StatKind::{Attack, Crit, Defense, Energy, Hp, Speed};
use TraitCategory::{Arm, Backpack, Body, Ears, Eyes, Helmet, Mouth, Special, Top, Type};

pub static STAT_TABLE: &[StatRow] = &[
    // Body
    row(Body, "plasma", &[(Attack, 10), (Defense, -5)]),
    row(Body, "copper", &[(Speed, 5), (Energy, 5)]),
    row(Body, "chrome", &[(Defense, 15), (Speed, -5)]),
    row(Body, "steel", &[(Hp, 20), (Defense, 10), (Speed, -10)]),
    row(Body, "rust", &[(Hp, 10), (Defense, -5)]),
    row(Body, "slime", &[(Hp, -10), (Energy, 15)]),
    row(Body, "circuit", &[(Energy, 10), (Crit, 3)]),
    row(Body, "hologram", &[(Hp, -20), (Defense, -10), (Speed, 20)]),
    // Arm
    row(Arm, "tesla coil", &[(Attack, 15)]),
    row(Arm, "claw", &[(Attack, 10), (Crit, 2)]),
    row(Arm, "drill", &[(Attack, 12), (Speed, -3)]),
    row(Arm, "syringe", &[(Attack, 5), (Energy, 10)]),
    row(Arm, "data spike", &[(Attack, 8), (Crit, 4)]),
    row(Arm, "shield", &[(Defense, 15), (Attack, -5)]),
    // Backpack
    row(Backpack, "battery", &[(Energy, 20)]),
    row(Backpack, "armor plate", &[(Defense, 12), (Speed, -5)]),
    row(Backpack, "canister", &[(Energy, 10), (Hp, 5)]),
    row(Backpack, "server rack", &[(Energy, 15), (Speed, -5)]),
    row(Backpack, "jetpack", &[(Speed, 15)]),
    row(Backpack, "med kit", &[(Hp, 15)]),
    // Eyes
    row(Eyes, "glow", &[(Crit, 3)]),
    row(Eyes, "bolted", &[(Defense, 3)]),
    row(Eyes, "goggles", &[(Crit, 2), (Speed, 2)]),
    row(Eyes, "visor", &[(Crit, 5)]),
    row(Eyes, "scanner", &[(Crit, 4), (Energy, 5)]),
    row(Eyes, "cyclops", &[(Attack, 5), (Crit, -2)]),
    // Ears
    row(Ears, "lightning rod", &[(Speed, 5), (Energy, 5)]),
    row(Ears, "antenna", &[(Energy, 8)]),
    row(Ears, "none", &[(Defense, -2)]),
    // Mouth
    row(Mouth, "grille", &[(Defense, 4)]),
    row(Mouth, "gas mask", &[(Hp, 8)]),
    row(Mouth, "fangs", &[(Attack, 6)]),
    row(Mouth, "smile", &[(Crit, 1)]),
    // Top
    row(Top, "halo", &[(Energy, 10), (Hp, 5)]),
    row(Top, "hard hat", &[(Defense, 6)]),
    row(Top, "crown", &[(Hp, 10), (Attack, 5), (Crit, 2)]),
    row(Top, "propeller", &[(Speed, 8)]),
    // Helmet
    row(Helmet, "knight", &[(Defense, 10), (Hp, 10)]),
    row(Helmet, "hazmat hood", &[(Hp, 10), (Energy, 5)]),
    row(Helmet, "neural cap", &[(Energy, 10), (Crit, 3)]),
    // Special
    row(Special, "overcharged", &[(Attack, 15), (Speed, 10)]),
    row(Special, "titanium", &[(Defense, 20), (Hp, 20)]),
    row(Special, "radioactive", &[(Attack, 10), (Energy, 15)]),
    row(Special, "glitched", &[(Crit, 8), (Speed, 10)]),
    row(Special, "legendary", &[(Hp, 15), (Attack, 10), (Defense, 10), (Speed, 10)]),
    // Companion types
    row(Type, "wolf", &[(Attack, 8)]),
    row(Type, "golem", &[(Hp, 20), (Speed, -20)]),
    row(Type, "owl", &[(Crit, 5)]),
];

/// Rows matching a normalized `(category, value)`.
pub fn stat_rows(category: TraitCategory, value: &str) -> impl Iterator<Item = &'static StatRow> {
    STAT_TABLE
        .iter()
        .filter(move |row| row.category == category && row.value == value)
}
