//! Element type chart.

use crate::state::Element;

/// Multiplier when the attacker's element beats the defender's.
pub const SUPER_EFFECTIVE: f64 = 1.5;
/// Multiplier when the defender's element beats the attacker's.
pub const NOT_VERY_EFFECTIVE: f64 = 0.67;
/// Multiplier for every other pairing.
pub const NEUTRAL: f64 = 1.0;

/// Damage multiplier of `attacker` hitting `defender`.
///
/// Element advantage cycle: Surge -> Metal -> Toxic -> Cyber -> Surge.
/// Elements outside the cycle are neutral both ways.
pub fn type_multiplier(attacker: Element, defender: Element) -> f64 {
    if attacker == defender {
        return NEUTRAL;
    }
    if attacker.beats() == Some(defender) {
        SUPER_EFFECTIVE
    } else if defender.beats() == Some(attacker) {
        NOT_VERY_EFFECTIVE
    } else {
        NEUTRAL
    }
}

/// Qualitative reading of a type multiplier, used for log text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effectiveness {
    Super,
    Neutral,
    Resisted,
}

impl Effectiveness {
    pub fn of(attacker: Element, defender: Element) -> Self {
        Self::from_multiplier(type_multiplier(attacker, defender))
    }

    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier > NEUTRAL {
            Effectiveness::Super
        } else if multiplier < NEUTRAL {
            Effectiveness::Resisted
        } else {
            Effectiveness::Neutral
        }
    }

    /// Log suffix, empty for neutral hits.
    pub const fn describe(self) -> &'static str {
        match self {
            Effectiveness::Super => " It's super effective!",
            Effectiveness::Neutral => "",
            Effectiveness::Resisted => " It's not very effective...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Element::*;

    #[test]
    fn all_combat_pairs() {
        // Same element = neutral
        for element in Element::ALL {
            assert_eq!(type_multiplier(element, element), NEUTRAL);
        }

        // Advantages
        assert_eq!(type_multiplier(Surge, Metal), SUPER_EFFECTIVE);
        assert_eq!(type_multiplier(Metal, Toxic), SUPER_EFFECTIVE);
        assert_eq!(type_multiplier(Toxic, Cyber), SUPER_EFFECTIVE);
        assert_eq!(type_multiplier(Cyber, Surge), SUPER_EFFECTIVE);

        // Disadvantages
        assert_eq!(type_multiplier(Metal, Surge), NOT_VERY_EFFECTIVE);
        assert_eq!(type_multiplier(Toxic, Metal), NOT_VERY_EFFECTIVE);
        assert_eq!(type_multiplier(Cyber, Toxic), NOT_VERY_EFFECTIVE);
        assert_eq!(type_multiplier(Surge, Cyber), NOT_VERY_EFFECTIVE);

        // Opposite corners of the cycle
        assert_eq!(type_multiplier(Surge, Toxic), NEUTRAL);
        assert_eq!(type_multiplier(Toxic, Surge), NEUTRAL);
        assert_eq!(type_multiplier(Metal, Cyber), NEUTRAL);
        assert_eq!(type_multiplier(Cyber, Metal), NEUTRAL);
    }

    #[test]
    fn each_combat_element_has_one_strength_and_one_weakness() {
        for attacker in Element::COMBAT {
            let strong = Element::ALL
                .into_iter()
                .filter(|&d| type_multiplier(attacker, d) == SUPER_EFFECTIVE)
                .count();
            let weak = Element::ALL
                .into_iter()
                .filter(|&d| type_multiplier(d, attacker) == SUPER_EFFECTIVE)
                .count();
            assert_eq!((strong, weak), (1, 1), "{attacker}");
        }
    }

    #[test]
    fn outsiders_are_neutral() {
        for outsider in [Neutral, Feral, Astral] {
            for other in Element::ALL {
                assert_eq!(type_multiplier(outsider, other), NEUTRAL);
                assert_eq!(type_multiplier(other, outsider), NEUTRAL);
            }
        }
    }

    #[test]
    fn effectiveness_text() {
        assert_eq!(Effectiveness::of(Surge, Metal), Effectiveness::Super);
        assert_eq!(Effectiveness::of(Metal, Surge), Effectiveness::Resisted);
        assert_eq!(Effectiveness::of(Surge, Surge).describe(), "");
    }
}
