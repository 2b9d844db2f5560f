//! Append-only battle log entries consumed by presentation layers.

use super::{Element, UnitId};

/// Kind of a logged battle event.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BattleEventKind {
    BattleStart,
    CompanionBond,
    ComboBonus,
    RoundStart,
    Attack,
    CriticalHit,
    AbilityUsed,
    Damage,
    Miss,
    Heal,
    Buff,
    Debuff,
    StatusApplied,
    StatusResisted,
    StatusTick,
    StatusExpired,
    SkipTurnRolled,
    FieldEffect,
    FieldExpired,
    Cleanse,
    Ko,
    Rejected,
    Switch,
    Victory,
    Defeat,
}

impl BattleEventKind {
    pub const fn is_terminal(self) -> bool {
        matches!(self, BattleEventKind::Victory | BattleEventKind::Defeat)
    }
}

/// One entry of the battle log.
///
/// `timestamp` is a logical sequence number: strictly increasing within a
/// battle, starting at 1.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleEvent {
    pub kind: BattleEventKind,
    pub source: Option<UnitId>,
    pub target: Option<UnitId>,
    pub value: Option<i64>,
    pub element: Option<Element>,
    pub description: String,
    pub timestamp: u64,
}

impl BattleEvent {
    pub fn new(kind: BattleEventKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            source: None,
            target: None,
            value: None,
            element: None,
            description: description.into(),
            timestamp: 0,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: &UnitId) -> Self {
        self.source = Some(source.clone());
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: &UnitId) -> Self {
        self.target = Some(target.clone());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<i64>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }
}
