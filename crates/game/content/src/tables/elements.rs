//! Element affinity tables.

use battle_core::{Element, StatKind};

use crate::traits::TraitCategory;

/// One `(category, value) → element` weight.
#[derive(Clone, Copy, Debug)]
pub struct ElementWeight {
    pub category: TraitCategory,
    pub value: &'static str,
    pub element: Element,
    pub weight: u32,
}

const fn w(
    category: TraitCategory,
    value: &'static str,
    element: Element,
    weight: u32,
) -> ElementWeight {
    ElementWeight {
        category,
        value,
        element,
        weight,
    }
}

use Element::{Cyber, Metal, Surge, Toxic};
use TraitCategory::{Arm, Backpack, Body, Ears, Eyes, Helmet, Mouth, Special, Top};

/// Known trait values and the affinity they carry. A value may appear more
/// than once when it leans towards several elements.
pub static ELEMENT_WEIGHTS: &[ElementWeight] = &[
    // Body
    w(Body, "plasma", Surge, 3),
    w(Body, "copper", Surge, 2),
    w(Body, "chrome", Metal, 3),
    w(Body, "steel", Metal, 3),
    w(Body, "rust", Metal, 1),
    w(Body, "rust", Toxic, 2),
    w(Body, "slime", Toxic, 3),
    w(Body, "circuit", Cyber, 3),
    w(Body, "hologram", Cyber, 3),
    // Arm
    w(Arm, "tesla coil", Surge, 3),
    w(Arm, "claw", Metal, 2),
    w(Arm, "drill", Metal, 2),
    w(Arm, "syringe", Toxic, 3),
    w(Arm, "data spike", Cyber, 3),
    // Backpack
    w(Backpack, "battery", Surge, 3),
    w(Backpack, "armor plate", Metal, 3),
    w(Backpack, "canister", Toxic, 3),
    w(Backpack, "server rack", Cyber, 3),
    // Eyes
    w(Eyes, "glow", Surge, 1),
    w(Eyes, "bolted", Metal, 1),
    w(Eyes, "goggles", Toxic, 1),
    w(Eyes, "visor", Cyber, 2),
    // Ears
    w(Ears, "lightning rod", Surge, 2),
    w(Ears, "antenna", Cyber, 1),
    // Mouth
    w(Mouth, "grille", Metal, 1),
    w(Mouth, "gas mask", Toxic, 2),
    // Top
    w(Top, "halo", Surge, 1),
    w(Top, "hard hat", Metal, 2),
    // Helmet
    w(Helmet, "knight", Metal, 2),
    w(Helmet, "hazmat hood", Toxic, 2),
    w(Helmet, "neural cap", Cyber, 2),
    // Special
    w(Special, "overcharged", Surge, 4),
    w(Special, "titanium", Metal, 4),
    w(Special, "radioactive", Toxic, 4),
    w(Special, "glitched", Cyber, 4),
];

/// Substring buckets used to score unmapped values of important categories.
pub static KEYWORD_BUCKETS: &[(Element, &[&str])] = &[
    (
        Surge,
        &["laser", "volt", "spark", "bolt", "charge", "plasma", "lightning"],
    ),
    (Metal, &["iron", "steel", "chrome", "titan", "alloy", "gear"]),
    (Toxic, &["acid", "toxic", "venom", "sludge", "radium", "bio"]),
    (Cyber, &["cyber", "data", "neon", "pixel", "hack", "code", "glitch"]),
];

/// Trait combinations that add a fixed bonus on top of per-trait weights.
pub static ELEMENT_COMBOS: &[(&[(TraitCategory, &str)], Element, u32)] = &[
    (&[(Body, "chrome"), (Arm, "tesla coil")], Surge, 3),
    (&[(Body, "steel"), (Helmet, "knight")], Metal, 3),
    (&[(Body, "slime"), (Backpack, "canister")], Toxic, 4),
    (&[(Eyes, "visor"), (Backpack, "server rack")], Cyber, 4),
];

/// Stat adjustments an element applies before trait deltas, in order:
/// flat deltas, percentage deltas, then range clamps.
#[derive(Clone, Copy, Debug)]
pub struct ElementModifiers {
    pub flat: &'static [(StatKind, i32)],
    pub percent: &'static [(StatKind, i32)],
    pub clamp: &'static [(StatKind, i32, i32)],
}

impl ElementModifiers {
    pub const NONE: ElementModifiers = ElementModifiers {
        flat: &[],
        percent: &[],
        clamp: &[],
    };
}

pub fn element_modifiers(element: Element) -> ElementModifiers {
    match element {
        Element::Surge => ElementModifiers {
            flat: &[(StatKind::Speed, 10)],
            percent: &[(StatKind::Attack, 10)],
            clamp: &[(StatKind::Crit, 5, 40)],
        },
        Element::Metal => ElementModifiers {
            flat: &[(StatKind::Defense, 15)],
            percent: &[(StatKind::Hp, 10)],
            clamp: &[(StatKind::Speed, 10, 60)],
        },
        Element::Toxic => ElementModifiers {
            flat: &[(StatKind::Attack, 5)],
            percent: &[(StatKind::Energy, 10)],
            clamp: &[(StatKind::Defense, 10, 70)],
        },
        Element::Cyber => ElementModifiers {
            flat: &[(StatKind::Crit, 5)],
            percent: &[(StatKind::Speed, 10)],
            clamp: &[(StatKind::Hp, 50, 130)],
        },
        Element::Feral => ElementModifiers {
            flat: &[(StatKind::Attack, 5)],
            ..ElementModifiers::NONE
        },
        Element::Astral => ElementModifiers {
            flat: &[(StatKind::Energy, 10)],
            ..ElementModifiers::NONE
        },
        Element::Neutral => ElementModifiers::NONE,
    }
}

/// Presentation color and glyph of an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementDisplay {
    /// `#RRGGBB`.
    pub color: &'static str,
    pub symbol: &'static str,
}

pub const fn element_display(element: Element) -> ElementDisplay {
    let (color, symbol) = match element {
        Element::Surge => ("#FFD700", "⚡"),
        Element::Metal => ("#A8A9AD", "⚙"),
        Element::Toxic => ("#7CFC00", "☣"),
        Element::Cyber => ("#00E5FF", "◈"),
        Element::Neutral => ("#B0B0B0", "●"),
        Element::Feral => ("#C1440E", "🐾"),
        Element::Astral => ("#9370DB", "✦"),
    };
    ElementDisplay { color, symbol }
}
