//! Deterministic battle rules shared by every host.
//!
//! `battle-core` defines the canonical battle data model (units, statuses,
//! abilities, events), the element type chart and damage formulas, and the
//! [`engine::BattleEngine`] that owns a [`BattleState`] from setup to victory
//! or defeat. It knows nothing about how units are derived from trait data:
//! any producer of [`CombatUnit`] values can feed it.
//!
//! Randomness and ability definitions are injected through the oracles in
//! [`env`], so a battle replays exactly from its seed.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use combat::{Effectiveness, effective_stats, type_multiplier};
pub use config::BattleConfig;
pub use engine::{
    ActionKind, ActionOutcome, AiTurn, BattleAction, BattleEngine, BattleError, CompanionPair,
    RejectReason, compute_turn_order, detect_combos, pair_companions,
};
pub use env::{AbilityOracle, PcgRng, RngOracle, compute_seed};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Ability, AbilityEffect, AbilityId, AbilityKind, AbilitySet, BattleEvent, BattleEventKind,
    BattleState, BattleStatus, CombatUnit, ComboPassive, Cooldown, EffectPayload, EffectTemplate,
    Element, FieldEffect, ParsePowerError, Power, Rarity, Side, StatKind, Stats, StatusEffect,
    Targeting, UnitId, UnitKind, UnitStatus, UtilityKind,
};
