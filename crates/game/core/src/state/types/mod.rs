pub mod ability;
pub mod common;
pub mod element;
pub mod event;
pub mod stats;
pub mod status;
pub mod unit;

// Re-export ability definitions
pub use ability::{
    Ability, AbilityEffect, AbilityKind, Cooldown, ParsePowerError, Power, Rarity, Targeting,
    UtilityKind,
};

// Re-export common types
pub use common::{AbilityId, Side, UnitId};

// Re-export element affinity
pub use element::Element;

// Re-export battle log types
pub use event::{BattleEvent, BattleEventKind};

// Re-export stats
pub use stats::{StatKind, Stats};

// Re-export runtime status and effects
pub use status::{
    EffectPayload, EffectTemplate, FieldEffect, StatusEffect, UnitStatus, merge_effect,
    tick_durations,
};

// Re-export unit identity
pub use unit::{AbilitySet, CombatUnit, UnitKind};
