//! Effective stats: base stats with status and field deltas folded in.

use crate::state::{CombatUnit, Element, FieldEffect, StatKind, Stats, UnitStatus};

/// Stats affected by timed deltas. Max HP and energy never move mid-battle.
const MODIFIABLE: [StatKind; 4] = [
    StatKind::Attack,
    StatKind::Defense,
    StatKind::Speed,
    StatKind::Crit,
];

/// Returns true if a field effect of `field` element reaches a unit of `unit`
/// element. Neutral fields reach everyone.
pub fn field_applies(field: Element, unit: Element) -> bool {
    field == Element::Neutral || field == unit
}

/// Computes the unit's stats as they stand right now.
///
/// Attack, defense, speed and crit add the unit's own stat deltas plus the
/// deltas of every field effect that reaches it, floored at zero.
pub fn effective_stats(unit: &CombatUnit, status: &UnitStatus, field: &[FieldEffect]) -> Stats {
    let mut stats = unit.stats;
    for stat in MODIFIABLE {
        let own = status.stat_delta(stat) as i64;
        let from_field: i64 = field
            .iter()
            .filter(|effect| field_applies(effect.element, unit.element))
            .map(|effect| effect.stat_delta(stat) as i64)
            .sum();
        let value = (unit.stats.get(stat) as i64 + own + from_field).clamp(0, u32::MAX as i64);
        stats.set(stat, value as u32);
    }
    stats
}
