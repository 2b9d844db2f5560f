use std::io::Write;

use battle_content::{AbilityCatalog, RosterLoader, TraitAttribute, build_unit};
use battle_core::{BattleEventKind, BattleStatus, CombatUnit, Element, Stats, UnitKind};
use battle_runtime::{SimulationConfig, simulate, sweep};
use tempfile::NamedTempFile;

fn brawler(id: &str, element: Element, hp: u32, speed: u32) -> CombatUnit {
    CombatUnit::new(
        id,
        id.to_uppercase(),
        UnitKind::Primary,
        element,
        Stats::new(hp, 40, 20, speed, 100, 5),
    )
}

fn bot(id: &str, traits: &[(&str, &str)]) -> CombatUnit {
    let attributes: Vec<TraitAttribute> = traits
        .iter()
        .map(|(category, value)| TraitAttribute::new(*category, *value))
        .collect();
    build_unit(id, id, UnitKind::Primary, &attributes)
}

fn team_a() -> Vec<CombatUnit> {
    vec![
        bot("bot-1", &[("Body", "Chrome"), ("Arm", "Tesla Coil")]),
        bot("bot-2", &[("Backpack", "Slime"), ("Special", "Syringe")]),
    ]
}

fn team_b() -> Vec<CombatUnit> {
    vec![
        bot("bot-3", &[("Body", "Steel"), ("Special", "Armor Plate")]),
        bot("bot-4", &[("Eyes", "Visor"), ("Backpack", "Server Rack")]),
    ]
}

#[test]
fn basic_attackers_fight_to_a_finish() {
    let report = simulate(
        AbilityCatalog::standard(),
        vec![brawler("striker", Element::Surge, 120, 60)],
        vec![brawler("dummy", Element::Metal, 80, 10)],
        &SimulationConfig::new(3),
    )
    .unwrap();

    assert!(report.status.is_terminal());
    assert!(!report.timed_out());
    assert_eq!(report.status, BattleStatus::Victory);
    assert_eq!(report.survivors_b, 0);
    assert!(report.survivors_a > 0);
    assert!(report.events.iter().any(|e| e.kind == BattleEventKind::Ko));
}

#[test]
fn trait_built_rosters_finish_or_hit_the_limit() {
    let config = SimulationConfig::new(11);
    let report = simulate(AbilityCatalog::standard(), team_a(), team_b(), &config).unwrap();

    assert!(report.turns <= config.max_turns);
    assert!(report.status.is_terminal() || report.turns == config.max_turns);
    assert!(report.rounds >= 1);
    assert!(!report.events.is_empty());
}

#[test]
fn same_seed_replays_the_same_battle() {
    let config = SimulationConfig::new(99);
    let first = simulate(AbilityCatalog::standard(), team_a(), team_b(), &config).unwrap();
    let second = simulate(AbilityCatalog::standard(), team_a(), team_b(), &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn turn_limit_stops_a_long_battle() {
    let config = SimulationConfig::new(5).with_max_turns(3);
    let report = simulate(
        AbilityCatalog::standard(),
        vec![brawler("wall-a", Element::Metal, 5000, 30)],
        vec![brawler("wall-b", Element::Metal, 5000, 20)],
        &config,
    )
    .unwrap();

    assert_eq!(report.turns, 3);
    assert!(report.timed_out());
    assert_eq!(report.status, BattleStatus::Active);
    assert_eq!(report.survivors_a, 1);
    assert_eq!(report.survivors_b, 1);
}

#[test]
fn rosters_loaded_from_metadata_can_battle() {
    let mut roster_a = NamedTempFile::new().unwrap();
    roster_a
        .write_all(
            br#"[{ "id": "bot-0042", "name": "Bot #42",
                   "attributes": [{ "trait_type": "Body", "value": "Chrome" }] },
                 { "id": "pup-0042", "kind": "companion",
                   "attributes": [{ "trait_type": "Type", "value": "Pup" }] }]"#,
        )
        .unwrap();
    let mut roster_b = NamedTempFile::new().unwrap();
    roster_b
        .write_all(
            br#"[{ "id": "rival-7",
                   "attributes": [{ "trait_type": "Special", "value": "Plasma" }] }]"#,
        )
        .unwrap();

    let units_a = RosterLoader::load(roster_a.path()).unwrap();
    let units_b = RosterLoader::load(roster_b.path()).unwrap();
    let report = simulate(
        AbilityCatalog::standard(),
        units_a,
        units_b,
        &SimulationConfig::new(42),
    )
    .unwrap();

    assert!(
        report
            .events
            .iter()
            .any(|e| e.kind == BattleEventKind::CompanionBond)
    );
    assert!(report.turns > 0);
}

#[test]
fn sweep_tallies_every_battle() {
    let catalog = AbilityCatalog::standard();
    let striker = vec![brawler("striker", Element::Surge, 120, 60)];
    let dummy = vec![brawler("dummy", Element::Metal, 80, 10)];

    let summary = sweep(&catalog, &striker, &dummy, &SimulationConfig::new(8), 5).unwrap();
    assert_eq!(summary.battles, 5);
    assert_eq!(summary.victories, 5);
    assert_eq!(summary.defeats + summary.timeouts, 0);
    assert_eq!(summary.win_rate(), 100.0);
    assert!(summary.average_turns() >= 1.0);
}
