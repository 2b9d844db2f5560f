//! Runtime status of units and the timed effects attached to them.
//!
//! # Turn-based Duration
//!
//! Effects count down in whole turns. A unit's own effects tick at the end of
//! that unit's turn (once per round); field effects tick when a round
//! completes. Both are removed when their duration reaches zero.

use std::collections::BTreeMap;

use super::{AbilityId, Element, StatKind, Stats, UnitId};
use crate::config::BattleConfig;

/// What a timed effect does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectPayload {
    /// HP lost at the end of each of the holder's turns.
    DamagePerTurn(u32),
    /// Chance, in percent, that the holder loses its turn. Rolled and logged;
    /// the turn itself is not skipped.
    SkipTurnChance(u32),
    /// Debuffs fail against the holder.
    DebuffImmunity,
    /// Additive change to one stat.
    StatDelta { stat: StatKind, amount: i32 },
}

impl EffectPayload {
    /// Positive effects survive a cleanse.
    pub const fn is_positive(&self) -> bool {
        match self {
            EffectPayload::DebuffImmunity => true,
            EffectPayload::StatDelta { amount, .. } => *amount > 0,
            EffectPayload::DamagePerTurn(_) | EffectPayload::SkipTurnChance(_) => false,
        }
    }
}

/// Blueprint for a timed effect, as stored on an ability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectTemplate {
    pub name: String,
    pub element: Element,
    pub duration: u32,
    pub payload: EffectPayload,
}

impl EffectTemplate {
    pub fn new(
        name: impl Into<String>,
        element: Element,
        duration: u32,
        payload: EffectPayload,
    ) -> Self {
        Self {
            name: name.into(),
            element,
            duration,
            payload,
        }
    }

    /// Creates a live effect from this template.
    pub fn instantiate(&self, source: Option<UnitId>) -> StatusEffect {
        StatusEffect {
            name: self.name.clone(),
            element: self.element,
            duration: self.duration,
            payload: self.payload,
            source,
        }
    }
}

/// A named, timed, element-tagged effect attached to a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub name: String,
    pub element: Element,
    /// Remaining whole turns.
    pub duration: u32,
    pub payload: EffectPayload,
    /// Unit whose ability attached the effect.
    pub source: Option<UnitId>,
}

impl StatusEffect {
    /// Effect name that grants debuff immunity regardless of payload.
    pub const ENCRYPTED: &'static str = "encrypted";

    pub const fn is_positive(&self) -> bool {
        self.payload.is_positive()
    }

    pub fn grants_debuff_immunity(&self) -> bool {
        matches!(self.payload, EffectPayload::DebuffImmunity)
            || self.name.eq_ignore_ascii_case(Self::ENCRYPTED)
    }

    /// Contribution of this effect to `stat`.
    pub fn stat_delta(&self, stat: StatKind) -> i32 {
        match self.payload {
            EffectPayload::StatDelta { stat: s, amount } if s == stat => amount,
            _ => 0,
        }
    }
}

/// Adds `effect` to `effects`, or refreshes an existing effect of the same
/// name to the later expiry. Returns true when the effect was new.
pub fn merge_effect(effects: &mut Vec<StatusEffect>, effect: StatusEffect) -> bool {
    match effects.iter_mut().find(|existing| existing.name == effect.name) {
        Some(existing) => {
            existing.duration = existing.duration.max(effect.duration);
            existing.payload = effect.payload;
            existing.source = effect.source;
            false
        }
        None => {
            effects.push(effect);
            true
        }
    }
}

/// Decrements every duration by one and removes effects that reach zero.
///
/// Returns the expired effects in their original order.
pub fn tick_durations(effects: &mut Vec<StatusEffect>) -> Vec<StatusEffect> {
    let mut expired = Vec::new();
    let mut kept = Vec::with_capacity(effects.len());
    for mut effect in effects.drain(..) {
        effect.duration = effect.duration.saturating_sub(1);
        if effect.duration == 0 {
            expired.push(effect);
        } else {
            kept.push(effect);
        }
    }
    *effects = kept;
    expired
}

/// A timed effect attached to the battle as a whole.
///
/// Field stat deltas apply to every unit sharing the field's element, or to
/// every unit when the field is `Neutral`.
pub type FieldEffect = StatusEffect;

/// Mutable battle-time record of a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitStatus {
    pub current_hp: u32,
    pub current_energy: u32,
    pub is_alive: bool,
    pub status_effects: Vec<StatusEffect>,
    /// Remaining cooldown turns per ability. [`BattleConfig::ONCE_PER_BATTLE`]
    /// marks a once-per-battle ability that was already used.
    pub cooldowns: BTreeMap<AbilityId, u32>,
}

impl UnitStatus {
    /// Full HP and energy, no effects, no cooldowns.
    pub fn fresh(stats: &Stats) -> Self {
        Self {
            current_hp: stats.hp,
            current_energy: stats.energy,
            is_alive: stats.hp > 0,
            status_effects: Vec::new(),
            cooldowns: BTreeMap::new(),
        }
    }

    /// Removes up to `amount` HP and returns the HP actually lost.
    ///
    /// Reaching zero marks the unit as fallen.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.current_hp);
        self.current_hp -= dealt;
        if self.current_hp == 0 {
            self.is_alive = false;
        }
        dealt
    }

    /// Restores up to `amount` HP without exceeding `max_hp`; returns HP gained.
    pub fn heal(&mut self, amount: u32, max_hp: u32) -> u32 {
        let gained = amount.min(max_hp.saturating_sub(self.current_hp));
        self.current_hp += gained;
        gained
    }

    /// Restores up to `amount` energy without exceeding `max_energy`.
    pub fn restore_energy(&mut self, amount: u32, max_energy: u32) -> u32 {
        let gained = amount.min(max_energy.saturating_sub(self.current_energy));
        self.current_energy += gained;
        gained
    }

    /// Remaining cooldown for `ability`, zero when absent.
    pub fn cooldown(&self, ability: &str) -> u32 {
        self.cooldowns.get(ability).copied().unwrap_or(0)
    }

    pub fn is_consumed(&self, ability: &str) -> bool {
        self.cooldown(ability) == BattleConfig::ONCE_PER_BATTLE
    }

    pub fn has_debuff_immunity(&self) -> bool {
        self.status_effects
            .iter()
            .any(StatusEffect::grants_debuff_immunity)
    }

    /// Sum of active stat deltas for `stat`.
    pub fn stat_delta(&self, stat: StatKind) -> i32 {
        self.status_effects
            .iter()
            .map(|effect| effect.stat_delta(stat))
            .sum()
    }

    /// Decrements every cooldown except the sentinel and `skip`, dropping zeros.
    pub fn tick_cooldowns(&mut self, skip: Option<&str>) {
        self.cooldowns.retain(|ability, turns| {
            if *turns == BattleConfig::ONCE_PER_BATTLE || Some(ability.as_str()) == skip {
                return true;
            }
            *turns = turns.saturating_sub(1);
            *turns > 0
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status() -> UnitStatus {
        UnitStatus::fresh(&Stats::new(40, 10, 10, 10, 50, 0))
    }

    #[test]
    fn damage_clamps_at_zero_and_kos() {
        let mut s = status();
        assert_eq!(s.take_damage(15), 15);
        assert_eq!(s.current_hp, 25);
        assert!(s.is_alive);
        assert_eq!(s.take_damage(100), 25);
        assert_eq!(s.current_hp, 0);
        assert!(!s.is_alive);
    }

    #[test]
    fn heal_never_exceeds_max() {
        let mut s = status();
        s.take_damage(10);
        assert_eq!(s.heal(50, 40), 10);
        assert_eq!(s.current_hp, 40);
    }

    #[test]
    fn cooldown_tick_keeps_sentinel_and_skip() {
        let mut s = status();
        s.cooldowns.insert("once".into(), BattleConfig::ONCE_PER_BATTLE);
        s.cooldowns.insert("short".into(), 1);
        s.cooldowns.insert("fresh".into(), 2);
        s.tick_cooldowns(Some("fresh"));
        assert!(s.is_consumed("once"));
        assert_eq!(s.cooldown("short"), 0);
        assert!(!s.cooldowns.contains_key("short"));
        assert_eq!(s.cooldown("fresh"), 2);
    }

    #[test]
    fn merge_refreshes_to_later_expiry() {
        let template = EffectTemplate::new(
            "Shocked",
            Element::Surge,
            2,
            EffectPayload::SkipTurnChance(25),
        );
        let mut effects = Vec::new();
        assert!(merge_effect(&mut effects, template.instantiate(None)));
        effects[0].duration = 1;
        assert!(!merge_effect(&mut effects, template.instantiate(None)));
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].duration, 2);
    }

    #[test]
    fn durations_tick_and_expire_in_order() {
        let effect = |name: &str, element: Element, duration: u32, payload: EffectPayload| {
            EffectTemplate::new(name, element, duration, payload).instantiate(None)
        };
        let mut effects = vec![
            effect("a", Element::Toxic, 1, EffectPayload::DamagePerTurn(3)),
            effect("b", Element::Toxic, 3, EffectPayload::DamagePerTurn(3)),
            effect("c", Element::Cyber, 1, EffectPayload::DebuffImmunity),
        ];
        let expired = tick_durations(&mut effects);
        let names: Vec<&str> = expired.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].duration, 2);
    }

    #[test]
    fn encrypted_grants_immunity() {
        let mut s = status();
        assert!(!s.has_debuff_immunity());
        s.status_effects.push(
            EffectTemplate::new(
                "Encrypted",
                Element::Cyber,
                2,
                EffectPayload::StatDelta {
                    stat: StatKind::Defense,
                    amount: 5,
                },
            )
            .instantiate(None),
        );
        assert!(s.has_debuff_immunity());
        assert_eq!(s.stat_delta(StatKind::Defense), 5);
    }
}
