//! Authoritative battle state representation.
//!
//! [`BattleState`] is the aggregate root of a battle: both rosters, every
//! unit's runtime status, the turn order, field effects and the battle log.
//! Presentation layers read it freely but mutate it exclusively through the
//! engine.
pub mod types;

use std::collections::BTreeMap;

pub use types::{
    Ability, AbilityEffect, AbilityId, AbilityKind, AbilitySet, BattleEvent, BattleEventKind,
    CombatUnit, Cooldown, EffectPayload, EffectTemplate, Element, FieldEffect, ParsePowerError,
    Power, Rarity, Side, StatKind, Stats, StatusEffect, Targeting, UnitId, UnitKind, UnitStatus,
    UtilityKind, merge_effect, tick_durations,
};

/// Lifecycle of a battle. Transitions only move forward:
/// `Preparing → Active → {Victory | Defeat}`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BattleStatus {
    #[default]
    Preparing,
    Active,
    /// The opponent roster was wiped out.
    Victory,
    /// The player roster was wiped out.
    Defeat,
}

impl BattleStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, BattleStatus::Victory | BattleStatus::Defeat)
    }
}

/// A declarative element-combo passive unlocked by roster composition.
///
/// Combos are announced in the log but carry no mechanical effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComboPassive {
    pub side: Side,
    pub name: String,
    pub description: String,
    pub elements: Vec<Element>,
}

/// Canonical snapshot of one battle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    /// Seed the engine's random source was created from.
    pub seed: u64,
    /// The caller's roster.
    pub roster_a: Vec<CombatUnit>,
    /// The opposing roster.
    pub roster_b: Vec<CombatUnit>,
    pub unit_statuses: BTreeMap<UnitId, UnitStatus>,
    pub turn_order: Vec<UnitId>,
    /// Cursor into `turn_order`.
    pub turn_index: usize,
    pub battle_log: Vec<BattleEvent>,
    pub field_effects: Vec<FieldEffect>,
    /// Current round, starting at 1 once the battle is active.
    pub round: u32,
    pub status: BattleStatus,
    pub combo_passives: Vec<ComboPassive>,

    /// Ability used by the current unit during this turn; its fresh cooldown
    /// is not decremented when the turn ends.
    pub(crate) ability_used_this_turn: Option<AbilityId>,
    /// Last assigned event timestamp.
    pub(crate) clock: u64,
}

impl BattleState {
    /// Creates an empty, preparing battle.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            roster_a: Vec::new(),
            roster_b: Vec::new(),
            unit_statuses: BTreeMap::new(),
            turn_order: Vec::new(),
            turn_index: 0,
            battle_log: Vec::new(),
            field_effects: Vec::new(),
            round: 0,
            status: BattleStatus::Preparing,
            combo_passives: Vec::new(),
            ability_used_this_turn: None,
            clock: 0,
        }
    }

    pub fn roster(&self, side: Side) -> &[CombatUnit] {
        match side {
            Side::Player => &self.roster_a,
            Side::Opponent => &self.roster_b,
        }
    }

    /// Both rosters, player side first.
    pub fn units(&self) -> impl Iterator<Item = &CombatUnit> {
        self.roster_a.iter().chain(self.roster_b.iter())
    }

    pub fn unit(&self, id: &str) -> Option<&CombatUnit> {
        self.units().find(|unit| unit.id.as_str() == id)
    }

    pub fn side_of(&self, id: &str) -> Option<Side> {
        if self.roster_a.iter().any(|unit| unit.id.as_str() == id) {
            Some(Side::Player)
        } else if self.roster_b.iter().any(|unit| unit.id.as_str() == id) {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    pub fn status_of(&self, id: &str) -> Option<&UnitStatus> {
        self.unit_statuses.get(id)
    }

    pub(crate) fn status_mut(&mut self, id: &str) -> Option<&mut UnitStatus> {
        self.unit_statuses.get_mut(id)
    }

    pub fn is_alive(&self, id: &str) -> bool {
        self.status_of(id).is_some_and(|status| status.is_alive)
    }

    /// Living units of one side, in roster order.
    pub fn living(&self, side: Side) -> impl Iterator<Item = &CombatUnit> {
        self.roster(side)
            .iter()
            .filter(|unit| self.is_alive(unit.id.as_str()))
    }

    /// Living units of both sides, player side first.
    pub fn living_units(&self) -> impl Iterator<Item = &CombatUnit> {
        self.units().filter(|unit| self.is_alive(unit.id.as_str()))
    }

    /// Id of the unit whose turn it is, if the battle is active.
    pub fn current_unit_id(&self) -> Option<&UnitId> {
        if self.status != BattleStatus::Active {
            return None;
        }
        self.turn_order.get(self.turn_index)
    }

    /// Events appended after `cursor` (an index into the log).
    pub fn events_since(&self, cursor: usize) -> &[BattleEvent] {
        self.battle_log.get(cursor..).unwrap_or(&[])
    }

    /// Appends an event, stamping it with the next logical timestamp.
    pub(crate) fn push_event(&mut self, mut event: BattleEvent) {
        self.clock += 1;
        event.timestamp = self.clock;
        self.battle_log.push(event);
    }
}

impl Default for BattleState {
    fn default() -> Self {
        Self::new(0)
    }
}
