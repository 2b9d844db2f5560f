//! Actions submitted to the engine and their outcomes.

use crate::state::{AbilityId, UnitId};

/// The three things a unit can do with its turn.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    Attack,
    Ability,
    /// Bench swapping; accepted and logged but has no effect.
    Switch,
}

/// One action submitted for a unit.
///
/// `timing_bonus` and `defense_bonus` are multipliers produced outside the
/// engine (reflex minigames); absent values count as 1.0.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleAction {
    pub kind: ActionKind,
    pub source_id: UnitId,
    pub target_id: Option<UnitId>,
    pub ability_id: Option<AbilityId>,
    pub timing_bonus: Option<f64>,
    pub defense_bonus: Option<f64>,
}

impl BattleAction {
    /// Basic attack. Without a target the first living opponent is hit.
    pub fn attack(source: impl Into<UnitId>, target: Option<UnitId>) -> Self {
        Self {
            kind: ActionKind::Attack,
            source_id: source.into(),
            target_id: target,
            ability_id: None,
            timing_bonus: None,
            defense_bonus: None,
        }
    }

    pub fn ability(
        source: impl Into<UnitId>,
        ability: impl Into<AbilityId>,
        target: Option<UnitId>,
    ) -> Self {
        Self {
            kind: ActionKind::Ability,
            source_id: source.into(),
            target_id: target,
            ability_id: Some(ability.into()),
            timing_bonus: None,
            defense_bonus: None,
        }
    }

    pub fn switch(source: impl Into<UnitId>) -> Self {
        Self {
            kind: ActionKind::Switch,
            source_id: source.into(),
            target_id: None,
            ability_id: None,
            timing_bonus: None,
            defense_bonus: None,
        }
    }

    #[must_use]
    pub fn with_timing_bonus(mut self, bonus: f64) -> Self {
        self.timing_bonus = Some(bonus);
        self
    }

    #[must_use]
    pub fn with_defense_bonus(mut self, bonus: f64) -> Self {
        self.defense_bonus = Some(bonus);
        self
    }
}

/// Why an action was turned away without changing the battle.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RejectReason {
    SourceFallen,
    /// The source is alive but another unit is due to act.
    NotYourTurn,
    NoValidTarget,
    MissingAbility,
    UnknownAbility,
    AbilityNotOwned,
    OnCooldown,
    AlreadyUsed,
    InsufficientEnergy,
}

impl RejectReason {
    pub const fn describe(self) -> &'static str {
        match self {
            RejectReason::SourceFallen => "has fallen and cannot act",
            RejectReason::NotYourTurn => "must wait for its turn",
            RejectReason::NoValidTarget => "has no valid target",
            RejectReason::MissingAbility => "did not name an ability",
            RejectReason::UnknownAbility => "tried an ability that does not exist",
            RejectReason::AbilityNotOwned => "does not know that ability",
            RejectReason::OnCooldown => "must wait for that ability to recharge",
            RejectReason::AlreadyUsed => "already used that ability this battle",
            RejectReason::InsufficientEnergy => "does not have enough energy",
        }
    }
}

/// Result of a resolved (or rejected) action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Set when the action was rejected; nothing but the log changed.
    pub rejection: Option<RejectReason>,
    /// Whether resolution advanced to the next turn (abilities do, basic
    /// attacks do not).
    pub turn_advanced: bool,
    /// Range of `battle_log` indices produced by this action.
    pub log_start: usize,
    pub log_end: usize,
}

impl ActionOutcome {
    pub const fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }
}
