//! Static ability definitions.

use std::fmt;
use std::str::FromStr;

use super::{AbilityId, Element, EffectTemplate};
use crate::config::BattleConfig;

/// What an ability does when it resolves.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbilityKind {
    Damage,
    Heal,
    Buff,
    Debuff,
    Field,
    Utility,
}

impl AbilityKind {
    /// Friendly abilities resolve single targets among allies.
    pub const fn is_friendly(self) -> bool {
        matches!(self, AbilityKind::Heal | AbilityKind::Buff | AbilityKind::Utility)
    }
}

/// How an ability selects its targets.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Targeting {
    /// One explicitly chosen unit.
    Single,
    /// Every living opponent.
    AllEnemies,
    /// Every living ally, including the caster.
    AllAllies,
    /// The caster only.
    SelfOnly,
    /// One living opponent chosen at random.
    Random,
}

/// Ability power: a fixed value or a uniformly rolled inclusive range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Power {
    Fixed(u32),
    Range { min: u32, max: u32 },
}

impl Default for Power {
    fn default() -> Self {
        Power::Fixed(0)
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Power::Fixed(value) => write!(f, "{value}"),
            Power::Range { min, max } => write!(f, "{min}-{max}"),
        }
    }
}

/// Error returned when a power string is neither `"n"` nor `"min-max"`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid ability power '{0}': expected a number or 'min-max'")]
pub struct ParsePowerError(pub String);

impl FromStr for Power {
    type Err = ParsePowerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePowerError(s.to_owned());
        let s = s.trim();
        match s.split_once('-') {
            Some((min, max)) => {
                let min: u32 = min.trim().parse().map_err(|_| err())?;
                let max: u32 = max.trim().parse().map_err(|_| err())?;
                if min > max {
                    return Err(err());
                }
                Ok(Power::Range { min, max })
            }
            None => s.parse().map(Power::Fixed).map_err(|_| err()),
        }
    }
}

/// Ability cooldown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cooldown {
    /// Unusable for this many of the owner's turns after use.
    Turns(u32),
    /// Usable once; afterwards the cooldown map holds
    /// [`BattleConfig::ONCE_PER_BATTLE`].
    #[default]
    OncePerBattle,
}

impl Cooldown {
    /// Value written to the cooldown map on use; `None` means nothing to track.
    pub const fn counter_on_use(self) -> Option<u32> {
        match self {
            Cooldown::Turns(0) => None,
            Cooldown::Turns(turns) => Some(turns),
            Cooldown::OncePerBattle => Some(BattleConfig::ONCE_PER_BATTLE),
        }
    }
}

/// Ability rarity. Ordered from least to most rare.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Utility behaviors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UtilityKind {
    /// Strips every non-positive status effect from the targets.
    Cleanse,
}

/// An effect an ability attaches, with its chance to land in percent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityEffect {
    pub template: EffectTemplate,
    pub chance: u32,
}

impl AbilityEffect {
    /// An effect that always lands.
    pub fn always(template: EffectTemplate) -> Self {
        Self {
            template,
            chance: 100,
        }
    }

    pub fn with_chance(template: EffectTemplate, chance: u32) -> Self {
        Self { template, chance }
    }
}

/// Static definition of an ability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub id: AbilityId,
    pub name: String,
    pub element: Element,
    pub kind: AbilityKind,
    pub targeting: Targeting,
    pub power: Power,
    /// Hit chance in percent.
    pub accuracy: u32,
    pub energy_cost: u32,
    pub cooldown: Cooldown,
    pub rarity: Rarity,
    /// For damage abilities these are secondary effects applied on hit; for
    /// buff, debuff and field abilities they are the effects attached.
    pub effects: Vec<AbilityEffect>,
    pub utility: Option<UtilityKind>,
}

impl Ability {
    /// Creates an ability with full accuracy, no cost and no cooldown.
    pub fn new(
        id: impl Into<AbilityId>,
        name: impl Into<String>,
        element: Element,
        kind: AbilityKind,
        targeting: Targeting,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            element,
            kind,
            targeting,
            power: Power::Fixed(0),
            accuracy: 100,
            energy_cost: 0,
            cooldown: Cooldown::Turns(0),
            rarity: Rarity::Common,
            effects: Vec::new(),
            utility: None,
        }
    }

    #[must_use]
    pub fn with_power(mut self, power: Power) -> Self {
        self.power = power;
        self
    }

    #[must_use]
    pub fn with_accuracy(mut self, accuracy: u32) -> Self {
        self.accuracy = accuracy;
        self
    }

    #[must_use]
    pub fn with_energy_cost(mut self, energy_cost: u32) -> Self {
        self.energy_cost = energy_cost;
        self
    }

    #[must_use]
    pub fn with_cooldown(mut self, cooldown: Cooldown) -> Self {
        self.cooldown = cooldown;
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: AbilityEffect) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_utility(mut self, utility: UtilityKind) -> Self {
        self.utility = Some(utility);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_power_strings() {
        assert_eq!("40".parse::<Power>().unwrap(), Power::Fixed(40));
        assert_eq!(
            " 20 - 35 ".parse::<Power>().unwrap(),
            Power::Range { min: 20, max: 35 }
        );
        assert!("35-20".parse::<Power>().is_err());
        assert!("strong".parse::<Power>().is_err());
        assert_eq!(Power::Range { min: 20, max: 35 }.to_string(), "20-35");
    }

    #[test]
    fn cooldown_counters() {
        assert_eq!(Cooldown::Turns(0).counter_on_use(), None);
        assert_eq!(Cooldown::Turns(2).counter_on_use(), Some(2));
        assert_eq!(
            Cooldown::OncePerBattle.counter_on_use(),
            Some(BattleConfig::ONCE_PER_BATTLE)
        );
    }

    #[test]
    fn rarity_orders_by_scarcity() {
        assert!(Rarity::Legendary > Rarity::Epic);
        assert!(Rarity::Uncommon > Rarity::Common);
    }
}
