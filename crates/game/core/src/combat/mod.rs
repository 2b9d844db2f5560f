//! Combat resolution formulas.
//!
//! This module provides pure functions for resolving combat interactions.
//! The engine rolls the dice and mutates state; everything here is
//! side-effect free.
//!
//! # Core Functions
//!
//! - `type_multiplier`: element-vs-element damage scaling
//! - `basic_attack_damage`: attack/defense formula with minigame bonuses
//! - `ability_damage`: power-based formula with defense mitigation
//! - `is_critical` / `is_miss`: percentage roll checks
//! - `effective_stats`: base stats with status and field deltas applied

pub mod damage;
pub mod hit;
pub mod modifiers;
pub mod type_chart;

pub use damage::{
    ABILITY_CRIT_MULTIPLIER, BASIC_CRIT_MULTIPLIER, ability_damage, basic_attack_damage,
    sanitize_bonus,
};
pub use hit::{is_critical, is_miss};
pub use modifiers::{effective_stats, field_applies};
pub use type_chart::{
    Effectiveness, NEUTRAL, NOT_VERY_EFFECTIVE, SUPER_EFFECTIVE, type_multiplier,
};
