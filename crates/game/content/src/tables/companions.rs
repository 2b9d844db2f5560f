//! Companion profiles keyed by the dominant `Type` trait.

use battle_core::Element;

/// What a companion type brings to battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompanionProfile {
    pub element: Element,
    /// Granted after the element's basic ability, in order.
    pub abilities: &'static [&'static str],
    /// Power tier; each tier adds 10% to every stat.
    pub tier: u32,
}

impl CompanionProfile {
    /// Used for companion types missing from [`COMPANION_PROFILES`].
    pub const FALLBACK: CompanionProfile = CompanionProfile {
        element: Element::Feral,
        abilities: &[],
        tier: 0,
    };

    /// Stat multiplier in percent: `100 + 10 × tier`.
    pub const fn multiplier_percent(&self) -> u32 {
        100 + 10 * self.tier
    }
}

const fn profile(
    element: Element,
    abilities: &'static [&'static str],
    tier: u32,
) -> CompanionProfile {
    CompanionProfile {
        element,
        abilities,
        tier,
    }
}

pub static COMPANION_PROFILES: &[(&str, CompanionProfile)] = &[
    ("pup", profile(Element::Feral, &["pack_howl"], 1)),
    ("wolf", profile(Element::Feral, &["pack_howl"], 2)),
    ("cat", profile(Element::Astral, &["moonlight"], 1)),
    ("owl", profile(Element::Astral, &["starfall", "moonlight"], 2)),
    ("drone", profile(Element::Cyber, &["hack"], 1)),
    ("beetle", profile(Element::Toxic, &["acid_splash"], 1)),
    ("sprite", profile(Element::Surge, &["overload"], 2)),
    ("golem", profile(Element::Metal, &["iron_wall", "fortify"], 3)),
];
