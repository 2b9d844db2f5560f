//! Automated decision making.
//!
//! The engine drives the opponent side with it; hosts may also ask it for a
//! suggestion on the player side (autopilot, simulations).
//!
//! Each usable ability is scored, the best one wins and falls back to a
//! basic attack when nothing is usable:
//!
//! - +10 when the ability shares the caster's element
//! - +20 when it is super-effective against any living opponent
//! - a uniform jitter in `[0, ai_jitter)` so equal options vary
//!
//! Single targets are then picked by [`best_opponent`] or [`weakest_ally`].

use super::{ActionOutcome, BattleAction, BattleEnv, BattleError, resolve};
use crate::combat::{SUPER_EFFECTIVE, type_multiplier};
use crate::env::{AbilityOracle, RngOracle};
use crate::state::{Ability, BattleState, CombatUnit, Element, Side, Targeting, UnitId};

const SAME_ELEMENT_BONUS: f64 = 10.0;
const SUPER_EFFECTIVE_BONUS: f64 = 20.0;
/// Target priority added for opponents the attack is super-effective against.
const TARGET_ADVANTAGE_BONUS: i64 = 50;

/// The action the AI chose and how it resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct AiTurn {
    pub action: BattleAction,
    pub outcome: ActionOutcome,
}

/// Score breakdown for one candidate ability.
#[derive(Clone, Copy, Debug, PartialEq)]
struct AbilityScore {
    same_element: f64,
    super_effective: f64,
    jitter: f64,
}

impl AbilityScore {
    fn value(&self) -> f64 {
        self.same_element + self.super_effective + self.jitter
    }
}

fn beats_any(state: &BattleState, element: Element, opponents: Side) -> bool {
    state
        .living(opponents)
        .any(|opponent| type_multiplier(element, opponent.element) >= SUPER_EFFECTIVE)
}

fn score_ability<R: RngOracle>(
    state: &BattleState,
    rng: &mut R,
    unit: &CombatUnit,
    ability: &Ability,
    opponents: Side,
    jitter: f64,
) -> AbilityScore {
    AbilityScore {
        same_element: if ability.element == unit.element {
            SAME_ELEMENT_BONUS
        } else {
            0.0
        },
        super_effective: if beats_any(state, ability.element, opponents) {
            SUPER_EFFECTIVE_BONUS
        } else {
            0.0
        },
        jitter: rng.uniform(jitter),
    }
}

/// Opponent of `side` maximizing `(100 - current_hp) + 50 * super_effective`.
/// Ties go to the first in roster order.
pub(crate) fn best_opponent(state: &BattleState, side: Side, element: Element) -> Option<UnitId> {
    let mut best: Option<(i64, &CombatUnit)> = None;
    for opponent in state.living(side.opposite()) {
        let hp = state
            .status_of(opponent.id.as_str())
            .map_or(0, |status| status.current_hp as i64);
        let advantage = if type_multiplier(element, opponent.element) >= SUPER_EFFECTIVE {
            TARGET_ADVANTAGE_BONUS
        } else {
            0
        };
        let score = (100 - hp) + advantage;
        if best.is_none_or(|(top, _)| score > top) {
            best = Some((score, opponent));
        }
    }
    best.map(|(_, unit)| unit.id.clone())
}

/// Living ally of `side` with the lowest HP ratio. Ties go to the first.
pub(crate) fn weakest_ally(state: &BattleState, side: Side) -> Option<UnitId> {
    let mut best: Option<(f64, &CombatUnit)> = None;
    for ally in state.living(side) {
        let current = state
            .status_of(ally.id.as_str())
            .map_or(0, |status| status.current_hp);
        let ratio = current as f64 / ally.stats.hp.max(1) as f64;
        if best.is_none_or(|(low, _)| ratio < low) {
            best = Some((ratio, ally));
        }
    }
    best.map(|(_, unit)| unit.id.clone())
}

/// Basic attack on the most attractive opponent.
pub(super) fn default_action(state: &BattleState, unit: &CombatUnit, side: Side) -> BattleAction {
    BattleAction::attack(unit.id.clone(), best_opponent(state, side, unit.element))
}

/// Chooses an action for the current unit, on whichever side it fights.
pub(super) fn choose_action<O: AbilityOracle, R: RngOracle>(
    state: &BattleState,
    env: &mut BattleEnv<'_, O, R>,
) -> Result<BattleAction, BattleError> {
    let unit_id = state
        .current_unit_id()
        .ok_or(BattleError::NoCurrentUnit)?;
    let unit = state
        .unit(unit_id.as_str())
        .ok_or_else(|| BattleError::UnknownUnit(unit_id.clone()))?;
    let side = state
        .side_of(unit_id.as_str())
        .ok_or_else(|| BattleError::UnknownUnit(unit_id.clone()))?;

    tracing::debug!("AbilityScorer: Evaluating abilities for {}", unit.id);

    let abilities = env.abilities;
    let mut best: Option<(&Ability, AbilityScore)> = None;
    for id in &unit.abilities {
        let Some(ability) = abilities.ability(id.as_str()) else {
            continue;
        };
        if resolve::check_usable(state, unit_id.as_str(), ability).is_err() {
            continue;
        }

        let score = score_ability(
            state,
            &mut *env.rng,
            unit,
            ability,
            side.opposite(),
            env.config.ai_jitter,
        );
        tracing::debug!(
            "  Ability {}: score={:.2} (element={}, super={}, jitter={:.2})",
            ability.id,
            score.value(),
            score.same_element,
            score.super_effective,
            score.jitter
        );

        // In case of tie, first ability wins (slot order)
        if best.is_none_or(|(_, top)| score.value() > top.value()) {
            best = Some((ability, score));
        }
    }

    let action = match best {
        Some((ability, score)) => {
            tracing::debug!(
                "AbilityScorer: Best ability = {} (score={:.2})",
                ability.id,
                score.value()
            );
            let target = match ability.targeting {
                Targeting::Single if ability.kind.is_friendly() => weakest_ally(state, side),
                Targeting::Single => best_opponent(state, side, ability.element),
                _ => None,
            };
            BattleAction::ability(unit.id.clone(), ability.id.clone(), target)
        }
        None => {
            tracing::debug!("AbilityScorer: No usable ability, falling back to basic attack");
            default_action(state, unit, side)
        }
    };

    Ok(action)
}
