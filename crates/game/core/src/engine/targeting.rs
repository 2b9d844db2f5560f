//! Target resolution for basic attacks and abilities.

use super::RejectReason;
use crate::env::RngOracle;
use crate::state::{Ability, AbilityKind, BattleState, Side, Targeting, UnitId};

/// Which side an ability aims at by default.
fn aims_at_allies(kind: AbilityKind) -> bool {
    kind.is_friendly()
}

fn living_ids(state: &BattleState, side: Side) -> Vec<UnitId> {
    state.living(side).map(|unit| unit.id.clone()).collect()
}

/// Validates an explicit single target, or falls back to a default one.
///
/// An explicit target must be alive and on the `wanted` side.
fn single(
    state: &BattleState,
    wanted: Side,
    requested: Option<&UnitId>,
    fallback: Option<UnitId>,
) -> Result<UnitId, RejectReason> {
    match requested {
        Some(id) => {
            if state.is_alive(id.as_str()) && state.side_of(id.as_str()) == Some(wanted) {
                Ok(id.clone())
            } else {
                Err(RejectReason::NoValidTarget)
            }
        }
        None => fallback.ok_or(RejectReason::NoValidTarget),
    }
}

/// Target of a basic attack: the requested opponent, or the first living one.
pub(super) fn basic_attack_target(
    state: &BattleState,
    source_side: Side,
    requested: Option<&UnitId>,
) -> Result<UnitId, RejectReason> {
    let opponents = source_side.opposite();
    let fallback = state.living(opponents).next().map(|unit| unit.id.clone());
    single(state, opponents, requested, fallback)
}

/// Resolves the targets of `ability` cast by `source`.
///
/// Area modes return every living unit they cover and may be empty. A single
/// target defaults to the first living opponent for hostile abilities and to
/// the caster for friendly ones.
pub(super) fn ability_targets<R: RngOracle>(
    state: &BattleState,
    rng: &mut R,
    source: &UnitId,
    source_side: Side,
    ability: &Ability,
    requested: Option<&UnitId>,
) -> Result<Vec<UnitId>, RejectReason> {
    let allies = source_side;
    let opponents = source_side.opposite();

    match ability.targeting {
        Targeting::Single => {
            if aims_at_allies(ability.kind) {
                single(state, allies, requested, Some(source.clone())).map(|id| vec![id])
            } else {
                let fallback = state.living(opponents).next().map(|unit| unit.id.clone());
                single(state, opponents, requested, fallback).map(|id| vec![id])
            }
        }
        Targeting::AllEnemies => Ok(living_ids(state, opponents)),
        Targeting::AllAllies => Ok(living_ids(state, allies)),
        Targeting::SelfOnly => Ok(vec![source.clone()]),
        Targeting::Random => {
            let candidates = living_ids(state, opponents);
            if candidates.is_empty() {
                return Ok(Vec::new());
            }
            let pick = rng.range(0, candidates.len() as u32 - 1) as usize;
            Ok(candidates.into_iter().skip(pick).take(1).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::{CombatUnit, Element, Stats, UnitKind, UnitStatus};

    fn state() -> BattleState {
        let stats = Stats::new(100, 50, 40, 50, 100, 10);
        let mut state = BattleState::new(0);
        state.roster_a = vec![
            CombatUnit::new("a1", "A1", UnitKind::Primary, Element::Surge, stats),
            CombatUnit::new("a2", "A2", UnitKind::Primary, Element::Metal, stats),
        ];
        state.roster_b = vec![
            CombatUnit::new("b1", "B1", UnitKind::Primary, Element::Toxic, stats),
            CombatUnit::new("b2", "B2", UnitKind::Primary, Element::Cyber, stats),
        ];
        let ids: Vec<UnitId> = state.units().map(|unit| unit.id.clone()).collect();
        for id in ids {
            state.unit_statuses.insert(id, UnitStatus::fresh(&stats));
        }
        state
    }

    fn ability(kind: AbilityKind, targeting: Targeting) -> Ability {
        Ability::new("x", "X", Element::Surge, kind, targeting)
    }

    #[test]
    fn basic_attack_skips_fallen_opponents() {
        let mut state = state();
        state.unit_statuses.get_mut("b1").unwrap().take_damage(1000);
        assert_eq!(
            basic_attack_target(&state, Side::Player, None),
            Ok(UnitId::from("b2"))
        );
        assert_eq!(
            basic_attack_target(&state, Side::Player, Some(&"b1".into())),
            Err(RejectReason::NoValidTarget)
        );
    }

    #[test]
    fn explicit_target_must_be_on_the_right_side() {
        let state = state();
        let mut rng = PcgRng::seeded(1);
        let hostile = ability(AbilityKind::Damage, Targeting::Single);
        let friendly = ability(AbilityKind::Heal, Targeting::Single);
        let a1 = UnitId::from("a1");

        assert_eq!(
            ability_targets(&state, &mut rng, &a1, Side::Player, &hostile, Some(&"a2".into())),
            Err(RejectReason::NoValidTarget)
        );
        assert_eq!(
            ability_targets(&state, &mut rng, &a1, Side::Player, &friendly, Some(&"a2".into())),
            Ok(vec![UnitId::from("a2")])
        );
        assert_eq!(
            ability_targets(&state, &mut rng, &a1, Side::Player, &friendly, None),
            Ok(vec![a1.clone()])
        );
    }

    #[test]
    fn area_and_random_modes() {
        let state = state();
        let mut rng = PcgRng::seeded(7);
        let a1 = UnitId::from("a1");

        let all = ability_targets(
            &state,
            &mut rng,
            &a1,
            Side::Player,
            &ability(AbilityKind::Damage, Targeting::AllEnemies),
            None,
        )
        .unwrap();
        assert_eq!(all, vec![UnitId::from("b1"), UnitId::from("b2")]);

        let random = ability_targets(
            &state,
            &mut rng,
            &a1,
            Side::Player,
            &ability(AbilityKind::Damage, Targeting::Random),
            None,
        )
        .unwrap();
        assert_eq!(random.len(), 1);
        assert_eq!(state.side_of(random[0].as_str()), Some(Side::Opponent));
    }
}
