//! Action resolution: basic attacks, abilities and switches.
//!
//! Every routine here takes the state and the borrowed environment
//! explicitly. Rejections are returned as [`RejectReason`] and turned into a
//! `Rejected` event by [`execute`]; they never touch anything but the log.

use tracing::debug;

use super::{ActionKind, ActionOutcome, BattleAction, BattleEnv, BattleError, RejectReason};
use super::{targeting, turns};
use crate::combat::{
    self, BASIC_CRIT_MULTIPLIER, Effectiveness, ability_damage, basic_attack_damage, is_critical,
    is_miss, sanitize_bonus, type_multiplier,
};
use crate::env::{AbilityOracle, RngOracle};
use crate::state::{
    Ability, AbilityEffect, AbilityKind, BattleEvent, BattleEventKind, BattleState, Element, Power,
    Side, Stats, UnitId, UtilityKind, merge_effect,
};

/// Snapshot of a unit taken at the start of a resolution step.
struct Combatant {
    name: String,
    element: Element,
    stats: Stats,
}

fn combatant(state: &BattleState, id: &UnitId) -> Option<Combatant> {
    let unit = state.unit(id.as_str())?;
    let status = state.status_of(id.as_str())?;
    Some(Combatant {
        name: unit.display_name.clone(),
        element: unit.element,
        stats: combat::effective_stats(unit, status, &state.field_effects),
    })
}

fn display_name(state: &BattleState, id: &UnitId) -> String {
    state
        .unit(id.as_str())
        .map_or_else(|| id.to_string(), |unit| unit.display_name.clone())
}

/// Applies damage and returns true if it knocked the unit out.
fn apply_damage(state: &mut BattleState, id: &UnitId, amount: u32) -> bool {
    let Some(status) = state.status_mut(id.as_str()) else {
        return false;
    };
    let was_alive = status.is_alive;
    status.take_damage(amount);
    was_alive && !status.is_alive
}

fn roll_power<R: RngOracle>(rng: &mut R, power: Power) -> u32 {
    match power {
        Power::Fixed(value) => value,
        Power::Range { min, max } => rng.range(min, max),
    }
}

/// Checks cooldown, once-per-battle use and energy for `ability`.
pub(super) fn check_usable(
    state: &BattleState,
    unit_id: &str,
    ability: &Ability,
) -> Result<(), RejectReason> {
    let status = state
        .status_of(unit_id)
        .filter(|status| status.is_alive)
        .ok_or(RejectReason::SourceFallen)?;

    if status.is_consumed(ability.id.as_str()) {
        return Err(RejectReason::AlreadyUsed);
    }
    if status.cooldown(ability.id.as_str()) > 0 {
        return Err(RejectReason::OnCooldown);
    }
    if status.current_energy < ability.energy_cost {
        return Err(RejectReason::InsufficientEnergy);
    }
    Ok(())
}

/// Resolves one action by the current unit and, for abilities, advances the
/// turn.
pub(super) fn execute<O: AbilityOracle, R: RngOracle>(
    state: &mut BattleState,
    env: &mut BattleEnv<'_, O, R>,
    action: &BattleAction,
) -> Result<ActionOutcome, BattleError> {
    super::ensure_active(state)?;

    let source_side = state
        .side_of(action.source_id.as_str())
        .ok_or_else(|| BattleError::UnknownUnit(action.source_id.clone()))?;
    if let Some(target) = &action.target_id {
        if state.unit(target.as_str()).is_none() {
            return Err(BattleError::UnknownUnit(target.clone()));
        }
    }

    let log_start = state.battle_log.len();

    let resolved = if !state.is_alive(action.source_id.as_str()) {
        Err(RejectReason::SourceFallen)
    } else if state.current_unit_id() != Some(&action.source_id) {
        Err(RejectReason::NotYourTurn)
    } else {
        match action.kind {
            ActionKind::Attack => basic_attack(state, env, action, source_side),
            ActionKind::Ability => use_ability(state, env, action, source_side),
            ActionKind::Switch => {
                switch(state, action);
                Ok(false)
            }
        }
    };

    let (rejection, turn_advanced) = match resolved {
        Ok(true) if !state.status.is_terminal() => {
            turns::advance(state, env);
            (None, true)
        }
        Ok(_) => (None, false),
        Err(reason) => {
            reject(state, action, reason);
            (Some(reason), false)
        }
    };

    Ok(ActionOutcome {
        rejection,
        turn_advanced,
        log_start,
        log_end: state.battle_log.len(),
    })
}

fn reject(state: &mut BattleState, action: &BattleAction, reason: RejectReason) {
    let name = display_name(state, &action.source_id);
    debug!(source = %action.source_id, %reason, "action rejected");
    state.push_event(
        BattleEvent::new(
            BattleEventKind::Rejected,
            format!("{name} {}.", reason.describe()),
        )
        .with_source(&action.source_id),
    );
}

fn switch(state: &mut BattleState, action: &BattleAction) {
    let name = display_name(state, &action.source_id);
    state.push_event(
        BattleEvent::new(
            BattleEventKind::Switch,
            format!("{name} holds position. Switching is not available."),
        )
        .with_source(&action.source_id),
    );
}

/// Basic attack. Never advances the turn.
fn basic_attack<O: AbilityOracle, R: RngOracle>(
    state: &mut BattleState,
    env: &mut BattleEnv<'_, O, R>,
    action: &BattleAction,
    source_side: Side,
) -> Result<bool, RejectReason> {
    let target =
        targeting::basic_attack_target(state, source_side, action.target_id.as_ref())?;
    let attacker = combatant(state, &action.source_id).ok_or(RejectReason::SourceFallen)?;
    let defender = combatant(state, &target).ok_or(RejectReason::NoValidTarget)?;

    let multiplier = type_multiplier(attacker.element, defender.element);
    let mut damage = basic_attack_damage(
        attacker.stats.attack,
        defender.stats.defense,
        env.config.basic_attack_floor,
        multiplier,
        sanitize_bonus(action.timing_bonus),
        sanitize_bonus(action.defense_bonus),
    );
    let critical = is_critical(env.rng.percent(), attacker.stats.crit);
    if critical {
        damage = damage.saturating_mul(BASIC_CRIT_MULTIPLIER);
    }

    let fell = apply_damage(state, &target, damage);
    let effectiveness = Effectiveness::from_multiplier(multiplier).describe();
    let (kind, description) = if critical {
        (
            BattleEventKind::CriticalHit,
            format!(
                "Critical hit! {} strikes {} for {damage} damage!{effectiveness}",
                attacker.name, defender.name
            ),
        )
    } else {
        (
            BattleEventKind::Attack,
            format!(
                "{} attacks {} for {damage} damage!{effectiveness}",
                attacker.name, defender.name
            ),
        )
    };
    debug!(source = %action.source_id, %target, damage, critical, multiplier, "basic attack");
    state.push_event(
        BattleEvent::new(kind, description)
            .with_source(&action.source_id)
            .with_target(&target)
            .with_value(damage)
            .with_element(attacker.element),
    );

    if fell {
        turns::knock_out(state, &target);
    }
    Ok(false)
}

/// Validates, pays for and resolves an ability. Returns true so the caller
/// advances the turn.
fn use_ability<O: AbilityOracle, R: RngOracle>(
    state: &mut BattleState,
    env: &mut BattleEnv<'_, O, R>,
    action: &BattleAction,
    source_side: Side,
) -> Result<bool, RejectReason> {
    let ability_id = action
        .ability_id
        .as_ref()
        .ok_or(RejectReason::MissingAbility)?;
    let abilities = env.abilities;
    let ability = abilities
        .ability(ability_id.as_str())
        .ok_or(RejectReason::UnknownAbility)?;

    let caster = &action.source_id;
    let owns = state
        .unit(caster.as_str())
        .is_some_and(|unit| unit.has_ability(ability.id.as_str()));
    if !owns {
        return Err(RejectReason::AbilityNotOwned);
    }
    check_usable(state, caster.as_str(), ability)?;

    let targets = if ability.kind == AbilityKind::Field {
        Vec::new()
    } else {
        targeting::ability_targets(
            state,
            &mut *env.rng,
            caster,
            source_side,
            ability,
            action.target_id.as_ref(),
        )?
    };
    let attacker = combatant(state, caster).ok_or(RejectReason::SourceFallen)?;

    let status = state
        .status_mut(caster.as_str())
        .ok_or(RejectReason::SourceFallen)?;
    status.current_energy -= ability.energy_cost;
    if let Some(counter) = ability.cooldown.counter_on_use() {
        status.cooldowns.insert(ability.id.clone(), counter);
    }
    state.ability_used_this_turn = Some(ability.id.clone());

    debug!(
        source = %caster,
        ability = %ability.id,
        kind = %ability.kind,
        targets = targets.len(),
        "ability used"
    );
    state.push_event(
        BattleEvent::new(
            BattleEventKind::AbilityUsed,
            format!("{} uses {}!", attacker.name, ability.name),
        )
        .with_source(caster)
        .with_value(ability.energy_cost)
        .with_element(ability.element),
    );

    match ability.kind {
        AbilityKind::Damage => damage_targets(state, env, caster, &attacker, ability, &targets),
        AbilityKind::Heal => heal_targets(state, env, ability, &targets),
        AbilityKind::Buff => {
            for target in &targets {
                for effect in &ability.effects {
                    attach_effect(state, env, caster, target, effect, BattleEventKind::Buff);
                }
            }
        }
        AbilityKind::Debuff => {
            for target in &targets {
                if resisted(state, target) {
                    continue;
                }
                for effect in &ability.effects {
                    attach_effect(state, env, caster, target, effect, BattleEventKind::Debuff);
                }
            }
        }
        AbilityKind::Field => apply_field(state, env, caster, ability),
        AbilityKind::Utility => match ability.utility {
            Some(UtilityKind::Cleanse) => cleanse_targets(state, &targets),
            None => {}
        },
    }

    Ok(true)
}

fn damage_targets<O: AbilityOracle, R: RngOracle>(
    state: &mut BattleState,
    env: &mut BattleEnv<'_, O, R>,
    caster: &UnitId,
    attacker: &Combatant,
    ability: &Ability,
    targets: &[UnitId],
) {
    for target in targets {
        if state.status.is_terminal() {
            break;
        }
        if !state.is_alive(target.as_str()) {
            continue;
        }
        let Some(defender) = combatant(state, target) else {
            continue;
        };

        if is_miss(env.rng.percent(), ability.accuracy) {
            state.push_event(
                BattleEvent::new(
                    BattleEventKind::Miss,
                    format!("{} missed {}!", ability.name, defender.name),
                )
                .with_source(caster)
                .with_target(target)
                .with_value(0)
                .with_element(ability.element),
            );
            continue;
        }

        let power = roll_power(&mut *env.rng, ability.power);
        let critical = is_critical(env.rng.percent(), attacker.stats.crit);
        let multiplier = type_multiplier(ability.element, defender.element);
        let damage = ability_damage(
            power,
            attacker.stats.attack,
            env.config.attack_baseline,
            multiplier,
            defender.stats.defense,
            critical,
        );
        let fell = apply_damage(state, target, damage);

        if critical {
            state.push_event(
                BattleEvent::new(
                    BattleEventKind::CriticalHit,
                    format!("A critical hit on {}!", defender.name),
                )
                .with_source(caster)
                .with_target(target),
            );
        }
        state.push_event(
            BattleEvent::new(
                BattleEventKind::Damage,
                format!(
                    "{} hits {} for {damage} damage!{}",
                    ability.name,
                    defender.name,
                    Effectiveness::from_multiplier(multiplier).describe()
                ),
            )
            .with_source(caster)
            .with_target(target)
            .with_value(damage)
            .with_element(ability.element),
        );

        if fell {
            turns::knock_out(state, target);
            continue;
        }

        for effect in &ability.effects {
            if !effect.template.payload.is_positive() && resisted(state, target) {
                continue;
            }
            attach_effect(
                state,
                env,
                caster,
                target,
                effect,
                BattleEventKind::StatusApplied,
            );
        }
    }
}

fn heal_targets<O: AbilityOracle, R: RngOracle>(
    state: &mut BattleState,
    env: &mut BattleEnv<'_, O, R>,
    ability: &Ability,
    targets: &[UnitId],
) {
    for target in targets {
        let Some(max_hp) = state.unit(target.as_str()).map(|unit| unit.stats.hp) else {
            continue;
        };
        let amount = roll_power(&mut *env.rng, ability.power);
        let Some(status) = state.status_mut(target.as_str()) else {
            continue;
        };
        if !status.is_alive {
            continue;
        }
        let gained = status.heal(amount, max_hp);

        let name = display_name(state, target);
        state.push_event(
            BattleEvent::new(
                BattleEventKind::Heal,
                format!("{name} recovers {gained} HP!"),
            )
            .with_target(target)
            .with_value(gained)
            .with_element(ability.element),
        );
    }
}

/// Logs and returns true when the target shrugs off debuffs.
fn resisted(state: &mut BattleState, target: &UnitId) -> bool {
    let immune = state
        .status_of(target.as_str())
        .is_some_and(|status| status.has_debuff_immunity());
    if immune {
        let name = display_name(state, target);
        state.push_event(
            BattleEvent::new(
                BattleEventKind::StatusResisted,
                format!("{name} is protected by encryption!"),
            )
            .with_target(target),
        );
    }
    immune
}

/// Rolls an effect's chance and attaches it to a living target.
fn attach_effect<O: AbilityOracle, R: RngOracle>(
    state: &mut BattleState,
    env: &mut BattleEnv<'_, O, R>,
    caster: &UnitId,
    target: &UnitId,
    effect: &AbilityEffect,
    kind: BattleEventKind,
) {
    if effect.chance < 100 && env.rng.percent() >= effect.chance as f64 {
        return;
    }
    let Some(status) = state.status_mut(target.as_str()) else {
        return;
    };
    if !status.is_alive {
        return;
    }
    merge_effect(
        &mut status.status_effects,
        effect.template.instantiate(Some(caster.clone())),
    );

    let name = display_name(state, target);
    let description = match kind {
        BattleEventKind::Buff => format!("{name} gains {}!", effect.template.name),
        _ => format!("{name} is afflicted with {}!", effect.template.name),
    };
    state.push_event(
        BattleEvent::new(kind, description)
            .with_source(caster)
            .with_target(target)
            .with_value(effect.template.duration)
            .with_element(effect.template.element),
    );
}

fn apply_field<O: AbilityOracle, R: RngOracle>(
    state: &mut BattleState,
    env: &mut BattleEnv<'_, O, R>,
    caster: &UnitId,
    ability: &Ability,
) {
    for effect in &ability.effects {
        if effect.chance < 100 && env.rng.percent() >= effect.chance as f64 {
            continue;
        }
        merge_effect(
            &mut state.field_effects,
            effect.template.instantiate(Some(caster.clone())),
        );
        state.push_event(
            BattleEvent::new(
                BattleEventKind::FieldEffect,
                format!("{} spreads across the battlefield!", effect.template.name),
            )
            .with_source(caster)
            .with_value(effect.template.duration)
            .with_element(effect.template.element),
        );
    }
}

fn cleanse_targets(state: &mut BattleState, targets: &[UnitId]) {
    for target in targets {
        let Some(status) = state.status_mut(target.as_str()) else {
            continue;
        };
        if !status.is_alive {
            continue;
        }
        let before = status.status_effects.len();
        status.status_effects.retain(|effect| effect.is_positive());
        let removed = before - status.status_effects.len();

        let name = display_name(state, target);
        state.push_event(
            BattleEvent::new(
                BattleEventKind::Cleanse,
                format!("{name} is cleansed of {removed} effect(s)!"),
            )
            .with_target(target)
            .with_value(removed as u32),
        );
    }
}
