use battle_core::{
    BattleConfig, BattleEngine, BattleEventKind, Element, Stats, UnitKind,
};
use battle_content::{
    AbilityCatalog, TraitAttribute, TraitCategory, ability_by_id, build_unit, element_display,
};
use battle_content::tables::{ELEMENT_WEIGHTS, STAT_TABLE};
use proptest::prelude::*;

const CATEGORIES: [&str; 13] = [
    "Body", "Arm", "Backpack", "Eyes", "Ears", "Mouth", "Top", "Hat", "Helmet", "Special",
    "Rarity", "Type", "Background",
];

fn known_value() -> impl Strategy<Value = String> {
    let mut values: Vec<&'static str> = ELEMENT_WEIGHTS.iter().map(|entry| entry.value).collect();
    values.extend(STAT_TABLE.iter().map(|row| row.value));
    prop::sample::select(values).prop_map(str::to_owned)
}

fn attribute() -> impl Strategy<Value = TraitAttribute> {
    let value = prop_oneof![known_value(), "[ -~]{0,16}"];
    (prop::sample::select(CATEGORIES.to_vec()), value)
        .prop_map(|(category, value)| TraitAttribute::new(category, value))
}

proptest! {
    /// Derived stats never fall below the floor, whatever the metadata.
    #[test]
    fn derived_stats_respect_the_floor(
        attributes in prop::collection::vec(attribute(), 0..24),
        companion in any::<bool>()
    ) {
        let kind = if companion { UnitKind::Companion } else { UnitKind::Primary };
        let unit = build_unit("token-1", "Token", kind, &attributes);
        prop_assert!(unit.stats.meets_floor(), "{:?}", unit.stats);
        prop_assert!(!unit.abilities.is_empty());
        prop_assert!(unit.abilities.len() <= BattleConfig::MAX_ABILITIES);
        if kind == UnitKind::Primary {
            prop_assert!(!unit.element.is_companion_only());
        }
        for id in &unit.abilities {
            prop_assert!(ability_by_id(id.as_str()).is_some());
        }
    }
}

#[test]
fn stat_floor_holds_for_hostile_traits() {
    let attributes = [
        TraitAttribute::new("Body", "Hologram"),
        TraitAttribute::new("Body", "Slime"),
        TraitAttribute::new("Arm", "Shield"),
        TraitAttribute::new("Eyes", "Cyclops"),
        TraitAttribute::new("Ears", "None"),
    ];
    let unit = build_unit("t", "T", UnitKind::Primary, &attributes);
    assert!(unit.stats.meets_floor());
}

#[test]
fn built_units_pair_and_fight() {
    let primary = build_unit(
        "bot-0042",
        "Bot #42",
        UnitKind::Primary,
        &[
            TraitAttribute::new("Body", "Steel"),
            TraitAttribute::new("Backpack", "Armor Plate"),
        ],
    );
    let companion = build_unit(
        "pup-42",
        "Pup #42",
        UnitKind::Companion,
        &[TraitAttribute::new("Type", "Pup")],
    );
    let rival = build_unit(
        "bot-0099",
        "Bot #99",
        UnitKind::Primary,
        &[TraitAttribute::new("Body", "Plasma")],
    );
    let before = (primary.stats, companion.stats);

    let mut engine = BattleEngine::seeded(AbilityCatalog::standard(), 42);
    engine
        .initialize_battle(vec![primary, companion], vec![rival])
        .unwrap();

    let state = engine.state();
    assert_eq!(state.roster_a[0].stats, before.0.scaled_percent(102));
    assert_eq!(state.roster_a[1].stats, before.1.scaled_percent(102));
    assert!(
        state
            .battle_log
            .iter()
            .any(|event| event.kind == BattleEventKind::CompanionBond)
    );
    assert_eq!(state.roster_a[0].element, Element::Metal);
    assert_eq!(state.roster_b[0].element, Element::Surge);
}

#[test]
fn every_element_has_a_display() {
    for element in Element::ALL {
        let display = element_display(element);
        assert_eq!(display.color.len(), 7);
        assert!(display.color.starts_with('#'));
        assert!(!display.symbol.is_empty());
    }
}

#[test]
fn special_aliases_feed_the_same_tables() {
    let via_rarity = build_unit(
        "a",
        "A",
        UnitKind::Primary,
        &[TraitAttribute::new("Rarity", "Titanium")],
    );
    let via_special = build_unit(
        "b",
        "B",
        UnitKind::Primary,
        &[TraitAttribute::new("special", "titanium")],
    );
    assert_eq!(via_rarity.element, via_special.element);
    assert_eq!(via_rarity.stats, via_special.stats);
    assert_eq!(via_rarity.element, Element::Metal);
    assert_ne!(via_rarity.stats, Stats::default());
    assert_eq!(TraitCategory::Special.to_string(), "special");
}
