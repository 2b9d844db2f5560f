//! Turn order, end-of-turn bookkeeping and battle-end detection.

use tracing::{debug, info};

use super::BattleEnv;
use crate::combat;
use crate::env::{AbilityOracle, RngOracle};
use crate::state::{
    BattleEvent, BattleEventKind, BattleState, BattleStatus, EffectPayload, Side, UnitId,
    tick_durations,
};

/// Orders every living unit by effective speed plus a fresh jitter roll,
/// fastest first. Equal keys keep roster order (player side first).
pub fn compute_turn_order<R: RngOracle>(
    state: &BattleState,
    rng: &mut R,
    jitter: f64,
) -> Vec<UnitId> {
    let mut keyed: Vec<(f64, UnitId)> = state
        .living_units()
        .filter_map(|unit| {
            let status = state.status_of(unit.id.as_str())?;
            let speed = combat::effective_stats(unit, status, &state.field_effects).speed;
            Some((speed as f64 + rng.uniform(jitter), unit.id.clone()))
        })
        .collect();

    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    keyed.into_iter().map(|(_, id)| id).collect()
}

/// Rolls a new turn order for the current round and logs its start.
pub(super) fn start_order<O: AbilityOracle, R: RngOracle>(
    state: &mut BattleState,
    env: &mut BattleEnv<'_, O, R>,
) {
    state.turn_order = compute_turn_order(state, &mut *env.rng, env.config.turn_jitter);
    state.turn_index = 0;

    debug!(round = state.round, order = ?state.turn_order, "turn order computed");
    let description = match state.current_unit_id().and_then(|id| state.unit(id.as_str())) {
        Some(first) => format!("Round {} begins! {} acts first.", state.round, first.display_name),
        None => format!("Round {} begins!", state.round),
    };
    state.push_event(
        BattleEvent::new(BattleEventKind::RoundStart, description).with_value(state.round),
    );
}

/// Ends the current unit's turn and moves the cursor to the next living unit,
/// starting a new round when the order is exhausted.
pub(super) fn advance<O: AbilityOracle, R: RngOracle>(
    state: &mut BattleState,
    env: &mut BattleEnv<'_, O, R>,
) {
    if let Some(ending) = state.current_unit_id().cloned() {
        if state.is_alive(ending.as_str()) {
            end_of_turn(state, env, &ending);
        }
    }
    state.ability_used_this_turn = None;

    if state.status.is_terminal() {
        return;
    }

    let mut index = state.turn_index + 1;
    while index < state.turn_order.len() && !state.is_alive(state.turn_order[index].as_str()) {
        index += 1;
    }

    if index < state.turn_order.len() {
        state.turn_index = index;
    } else {
        start_round(state, env);
    }
}

/// Damage over time, skip-turn rolls, effect expiry, cooldowns and energy
/// for the unit whose turn is ending.
fn end_of_turn<O: AbilityOracle, R: RngOracle>(
    state: &mut BattleState,
    env: &mut BattleEnv<'_, O, R>,
    unit_id: &UnitId,
) {
    let Some(unit) = state.unit(unit_id.as_str()) else {
        return;
    };
    let name = unit.display_name.clone();
    let max_energy = unit.stats.energy;

    let effects = state
        .status_of(unit_id.as_str())
        .map(|status| status.status_effects.clone())
        .unwrap_or_default();

    for effect in &effects {
        match effect.payload {
            EffectPayload::DamagePerTurn(amount) => {
                let Some(status) = state.status_mut(unit_id.as_str()) else {
                    return;
                };
                let dealt = status.take_damage(amount);
                let fell = !status.is_alive;
                state.push_event(
                    BattleEvent::new(
                        BattleEventKind::StatusTick,
                        format!("{name} takes {dealt} damage from {}!", effect.name),
                    )
                    .with_target(unit_id)
                    .with_value(dealt)
                    .with_element(effect.element),
                );
                if fell {
                    knock_out(state, unit_id);
                    return;
                }
            }
            EffectPayload::SkipTurnChance(chance) => {
                // Rolled for the log only; the unit still acts.
                if env.rng.percent() < chance as f64 {
                    state.push_event(
                        BattleEvent::new(
                            BattleEventKind::SkipTurnRolled,
                            format!("{name} is {} and may lose a turn!", effect.name),
                        )
                        .with_target(unit_id)
                        .with_value(chance)
                        .with_element(effect.element),
                    );
                }
            }
            EffectPayload::DebuffImmunity | EffectPayload::StatDelta { .. } => {}
        }
    }

    let skip = state.ability_used_this_turn.clone();
    let regen = env.config.energy_regen;
    let Some(status) = state.status_mut(unit_id.as_str()) else {
        return;
    };
    let expired = tick_durations(&mut status.status_effects);
    status.tick_cooldowns(skip.as_ref().map(|id| id.as_str()));
    status.restore_energy(regen, max_energy);

    for effect in expired {
        state.push_event(
            BattleEvent::new(
                BattleEventKind::StatusExpired,
                format!("{name}'s {} wore off.", effect.name),
            )
            .with_target(unit_id)
            .with_element(effect.element),
        );
    }
}

/// Completes a round: field effects tick, a new order is rolled.
fn start_round<O: AbilityOracle, R: RngOracle>(
    state: &mut BattleState,
    env: &mut BattleEnv<'_, O, R>,
) {
    state.round += 1;

    for effect in tick_durations(&mut state.field_effects) {
        state.push_event(
            BattleEvent::new(
                BattleEventKind::FieldExpired,
                format!("{} fades from the battlefield.", effect.name),
            )
            .with_element(effect.element),
        );
    }

    start_order(state, env);
}

/// Logs a KO and runs the battle-end check. Returns true if the battle ended.
pub(super) fn knock_out(state: &mut BattleState, unit_id: &UnitId) -> bool {
    let name = state
        .unit(unit_id.as_str())
        .map_or_else(|| unit_id.to_string(), |unit| unit.display_name.clone());
    state.push_event(
        BattleEvent::new(BattleEventKind::Ko, format!("{name} has been defeated!"))
            .with_target(unit_id),
    );
    check_battle_end(state)
}

/// Moves the battle to a terminal status once either roster is wiped out.
///
/// A wiped player roster is a defeat even if the opponent was wiped at the
/// same time.
pub(super) fn check_battle_end(state: &mut BattleState) -> bool {
    if state.status.is_terminal() {
        return true;
    }

    let (status, kind, description) = if state.living(Side::Player).next().is_none() {
        (
            BattleStatus::Defeat,
            BattleEventKind::Defeat,
            "Defeat! Your team has fallen.",
        )
    } else if state.living(Side::Opponent).next().is_none() {
        (
            BattleStatus::Victory,
            BattleEventKind::Victory,
            "Victory! The opposing team has fallen.",
        )
    } else {
        return false;
    };

    state.status = status;
    state.push_event(BattleEvent::new(kind, description));
    info!(%status, round = state.round, events = state.battle_log.len(), "battle ended");
    true
}
