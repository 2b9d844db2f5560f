//! Battle setup: companion bonds, combo passives and the opening round.

use std::collections::BTreeSet;

use tracing::info;

use super::{BattleEnv, BattleError, turns};
use crate::env::{AbilityOracle, RngOracle};
use crate::state::{
    BattleEvent, BattleEventKind, BattleState, BattleStatus, CombatUnit, ComboPassive, Element,
    Side, UnitId, UnitKind, UnitStatus,
};

/// Units of one element needed for a resonance passive.
const RESONANCE_MIN: usize = 2;
/// Distinct non-neutral elements needed for the trinity passive.
const TRINITY_MIN: usize = 3;

/// A primary and companion that received the bond bonus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanionPair {
    pub primary: UnitId,
    pub companion: UnitId,
}

/// Boosts every primary/companion pair in `roster` that shares a base token
/// id by `percent` percent.
///
/// Pairing is greedy in roster order and each unit joins at most one pair,
/// so no unit is boosted twice.
pub fn pair_companions(roster: &mut [CombatUnit], percent: u32) -> Vec<CompanionPair> {
    let tokens: Vec<String> = roster.iter().map(CombatUnit::base_token_id).collect();
    let mut bonded = vec![false; roster.len()];
    let mut pairs = Vec::new();

    for primary in 0..roster.len() {
        if bonded[primary] || roster[primary].kind != UnitKind::Primary {
            continue;
        }
        let partner = (0..roster.len()).find(|&candidate| {
            !bonded[candidate]
                && roster[candidate].kind == UnitKind::Companion
                && tokens[candidate] == tokens[primary]
        });
        let Some(companion) = partner else {
            continue;
        };

        bonded[primary] = true;
        bonded[companion] = true;
        roster[primary] = roster[primary].boosted(100 + percent);
        roster[companion] = roster[companion].boosted(100 + percent);
        pairs.push(CompanionPair {
            primary: roster[primary].id.clone(),
            companion: roster[companion].id.clone(),
        });
    }

    pairs
}

/// Lists the combo passives a roster unlocks.
///
/// Every element held by two or more units yields "<Element> Resonance";
/// three or more distinct non-neutral elements yield "Trinity".
pub fn detect_combos(side: Side, roster: &[CombatUnit]) -> Vec<ComboPassive> {
    let mut combos = Vec::new();

    for element in Element::ALL {
        let count = roster.iter().filter(|unit| unit.element == element).count();
        if count >= RESONANCE_MIN {
            combos.push(ComboPassive {
                side,
                name: format!("{} Resonance", element.label()),
                description: format!("{count} {} units resonate together", element.label()),
                elements: vec![element],
            });
        }
    }

    let distinct: BTreeSet<Element> = roster
        .iter()
        .map(|unit| unit.element)
        .filter(|element| *element != Element::Neutral)
        .collect();
    if distinct.len() >= TRINITY_MIN {
        combos.push(ComboPassive {
            side,
            name: "Trinity".to_owned(),
            description: format!("{} elements stand united", distinct.len()),
            elements: distinct.into_iter().collect(),
        });
    }

    combos
}

fn validate_rosters(roster_a: &[CombatUnit], roster_b: &[CombatUnit]) -> Result<(), BattleError> {
    if roster_a.is_empty() {
        return Err(BattleError::EmptyRoster { side: Side::Player });
    }
    if roster_b.is_empty() {
        return Err(BattleError::EmptyRoster {
            side: Side::Opponent,
        });
    }

    let mut seen = BTreeSet::new();
    for unit in roster_a.iter().chain(roster_b) {
        if !seen.insert(unit.id.as_str()) {
            return Err(BattleError::DuplicateUnit(unit.id.clone()));
        }
    }
    Ok(())
}

pub(super) fn initialize<O: AbilityOracle, R: RngOracle>(
    state: &mut BattleState,
    env: &mut BattleEnv<'_, O, R>,
    mut roster_a: Vec<CombatUnit>,
    mut roster_b: Vec<CombatUnit>,
) -> Result<(), BattleError> {
    if state.status != BattleStatus::Preparing {
        return Err(BattleError::AlreadyInitialized);
    }
    validate_rosters(&roster_a, &roster_b)?;

    let percent = env.config.companion_bonus_percent;
    let bonds: Vec<CompanionPair> = pair_companions(&mut roster_a, percent)
        .into_iter()
        .chain(pair_companions(&mut roster_b, percent))
        .collect();

    let combos: Vec<ComboPassive> = detect_combos(Side::Player, &roster_a)
        .into_iter()
        .chain(detect_combos(Side::Opponent, &roster_b))
        .collect();

    state.unit_statuses = roster_a
        .iter()
        .chain(&roster_b)
        .map(|unit| (unit.id.clone(), UnitStatus::fresh(&unit.stats)))
        .collect();
    state.roster_a = roster_a;
    state.roster_b = roster_b;

    state.push_event(BattleEvent::new(
        BattleEventKind::BattleStart,
        format!(
            "Battle start! {} vs {}",
            state.roster_a.len(),
            state.roster_b.len()
        ),
    ));

    for bond in &bonds {
        let name_of = |id: &UnitId| {
            state
                .unit(id.as_str())
                .map_or_else(|| id.to_string(), |unit| unit.display_name.clone())
        };
        let description = format!(
            "{} and {} share a bond! (+{percent}% stats)",
            name_of(&bond.primary),
            name_of(&bond.companion)
        );
        state.push_event(
            BattleEvent::new(BattleEventKind::CompanionBond, description)
                .with_source(&bond.primary)
                .with_target(&bond.companion)
                .with_value(percent),
        );
    }

    for combo in &combos {
        state.push_event(BattleEvent::new(
            BattleEventKind::ComboBonus,
            format!("{} ({}): {}", combo.name, combo.side, combo.description),
        ));
    }
    state.combo_passives = combos;

    state.status = BattleStatus::Active;
    state.round = 1;
    turns::start_order(state, env);

    info!(
        seed = state.seed,
        player_units = state.roster_a.len(),
        opponent_units = state.roster_b.len(),
        bonds = bonds.len(),
        "battle initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Stats;

    fn unit(id: &str, kind: UnitKind, element: Element) -> CombatUnit {
        CombatUnit::new(id, id, kind, element, Stats::new(100, 50, 25, 75, 100, 10))
    }

    #[test]
    fn pairs_each_unit_at_most_once() {
        let mut roster = vec![
            unit("bot-7", UnitKind::Primary, Element::Surge),
            unit("pup-7", UnitKind::Companion, Element::Feral),
            unit("pup-07", UnitKind::Companion, Element::Feral),
            unit("bot-8", UnitKind::Primary, Element::Metal),
        ];
        let pairs = pair_companions(&mut roster, 2);

        assert_eq!(
            pairs,
            vec![CompanionPair {
                primary: "bot-7".into(),
                companion: "pup-7".into(),
            }]
        );
        assert_eq!(roster[0].stats, Stats::new(102, 51, 26, 77, 102, 10));
        assert_eq!(roster[1].stats, Stats::new(102, 51, 26, 77, 102, 10));
        assert_eq!(roster[2].stats, Stats::new(100, 50, 25, 75, 100, 10));
        assert_eq!(roster[3].stats, Stats::new(100, 50, 25, 75, 100, 10));
    }

    #[test]
    fn two_primaries_never_pair() {
        let mut roster = vec![
            unit("a-1", UnitKind::Primary, Element::Surge),
            unit("b-1", UnitKind::Primary, Element::Surge),
        ];
        assert!(pair_companions(&mut roster, 2).is_empty());
    }

    #[test]
    fn combos_by_composition() {
        let roster = vec![
            unit("1", UnitKind::Primary, Element::Surge),
            unit("2", UnitKind::Primary, Element::Surge),
            unit("3", UnitKind::Primary, Element::Toxic),
            unit("4", UnitKind::Companion, Element::Astral),
            unit("5", UnitKind::Primary, Element::Neutral),
        ];
        let names: Vec<String> = detect_combos(Side::Player, &roster)
            .into_iter()
            .map(|combo| combo.name)
            .collect();
        assert_eq!(names, vec!["Surge Resonance", "Trinity"]);
    }

    #[test]
    fn neutral_does_not_count_toward_trinity() {
        let roster = vec![
            unit("1", UnitKind::Primary, Element::Surge),
            unit("2", UnitKind::Primary, Element::Metal),
            unit("3", UnitKind::Primary, Element::Neutral),
        ];
        assert!(detect_combos(Side::Opponent, &roster).is_empty());
    }
}
