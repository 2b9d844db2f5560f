//! The standard ability catalog and the trait rules that unlock abilities.

use battle_core::{
    Ability, AbilityEffect, AbilityKind, Cooldown, EffectPayload, EffectTemplate, Element, Power,
    Rarity, StatKind, Targeting, UtilityKind,
};

use crate::traits::TraitCategory;

/// Id of the basic ability every unit of `element` starts with.
pub const fn basic_ability_id(element: Element) -> &'static str {
    match element {
        Element::Surge => "spark",
        Element::Metal => "bash",
        Element::Toxic => "spit",
        Element::Cyber => "byte",
        Element::Neutral => "strike",
        Element::Feral => "bite",
        Element::Astral => "glimmer",
    }
}

/// An ability unlocked when every requirement holds.
#[derive(Clone, Copy, Debug)]
pub struct AbilityRule {
    pub requirements: &'static [(TraitCategory, &'static str)],
    pub ability: &'static str,
}

const fn rule(
    requirements: &'static [(TraitCategory, &'static str)],
    ability: &'static str,
) -> AbilityRule {
    AbilityRule {
        requirements,
        ability,
    }
}

use TraitCategory::{Arm, Backpack, Body, Ears, Eyes, Helmet, Mouth, Special, Top};

/// Combinations observed on minted tokens. Scanned first.
pub static VERIFIED_RULES: &[AbilityRule] = &[
    rule(&[(Body, "chrome"), (Arm, "tesla coil")], "thunder_strike"),
    rule(&[(Backpack, "battery"), (Ears, "lightning rod")], "chain_lightning"),
    rule(&[(Body, "steel"), (Backpack, "armor plate")], "iron_wall"),
    rule(&[(Arm, "drill"), (Helmet, "knight")], "steel_crush"),
    rule(&[(Body, "slime"), (Backpack, "canister")], "toxic_cloud"),
    rule(&[(Arm, "syringe")], "acid_splash"),
    rule(&[(Eyes, "visor"), (Backpack, "server rack")], "firewall"),
    rule(&[(Arm, "data spike"), (Eyes, "visor")], "hack"),
    rule(&[(Special, "glitched")], "system_crash"),
    rule(&[(Special, "radioactive")], "meltdown"),
    rule(&[(Special, "legendary")], "mythic_overdrive"),
];

/// Single-trait rules that keep sparsely traited tokens interesting.
pub static FALLBACK_RULES: &[AbilityRule] = &[
    rule(&[(Backpack, "battery")], "overload"),
    rule(&[(Helmet, "knight")], "fortify"),
    rule(&[(Mouth, "gas mask")], "acid_splash"),
    rule(&[(Ears, "antenna")], "hack"),
    rule(&[(Top, "halo")], "repair"),
    rule(&[(Backpack, "med kit")], "repair"),
    rule(&[(Eyes, "scanner")], "debug"),
];

fn stat(
    name: &str,
    element: Element,
    duration: u32,
    stat: StatKind,
    amount: i32,
) -> EffectTemplate {
    EffectTemplate::new(name, element, duration, EffectPayload::StatDelta { stat, amount })
}

fn basic(id: &str, name: &str, element: Element, power: u32) -> Ability {
    Ability::new(id, name, element, AbilityKind::Damage, Targeting::Single)
        .with_power(Power::Fixed(power))
        .with_accuracy(95)
        .with_energy_cost(5)
        .with_cooldown(Cooldown::Turns(0))
}

/// Builds the standard ability definitions in catalog order.
pub fn standard_abilities() -> Vec<Ability> {
    use AbilityKind::{Buff, Damage, Debuff, Field, Heal, Utility};
    use Element::{Astral, Cyber, Feral, Metal, Neutral, Surge, Toxic};
    use Targeting::{AllAllies, AllEnemies, Random, SelfOnly, Single};

    vec![
        // Basic abilities
        basic("spark", "Spark", Surge, 20),
        basic("bash", "Bash", Metal, 20),
        basic("spit", "Spit", Toxic, 20),
        basic("byte", "Byte", Cyber, 20),
        basic("strike", "Strike", Neutral, 20),
        basic("bite", "Bite", Feral, 22),
        basic("glimmer", "Glimmer", Astral, 18),
        // Surge
        Ability::new("thunder_strike", "Thunder Strike", Surge, Damage, Single)
            .with_power(Power::Range { min: 40, max: 55 })
            .with_accuracy(90)
            .with_energy_cost(25)
            .with_cooldown(Cooldown::Turns(2))
            .with_rarity(Rarity::Rare)
            .with_effect(AbilityEffect::with_chance(
                EffectTemplate::new("Shocked", Surge, 2, EffectPayload::SkipTurnChance(25)),
                30,
            )),
        Ability::new("chain_lightning", "Chain Lightning", Surge, Damage, AllEnemies)
            .with_power(Power::Fixed(25))
            .with_accuracy(85)
            .with_energy_cost(35)
            .with_cooldown(Cooldown::Turns(3))
            .with_rarity(Rarity::Epic),
        Ability::new("overload", "Overload", Surge, Field, AllAllies)
            .with_energy_cost(30)
            .with_cooldown(Cooldown::Turns(4))
            .with_rarity(Rarity::Rare)
            .with_effect(AbilityEffect::always(stat(
                "Overload",
                Surge,
                3,
                StatKind::Speed,
                10,
            ))),
        // Metal
        Ability::new("iron_wall", "Iron Wall", Metal, Buff, SelfOnly)
            .with_energy_cost(20)
            .with_cooldown(Cooldown::Turns(3))
            .with_rarity(Rarity::Uncommon)
            .with_effect(AbilityEffect::always(stat(
                "Iron Wall",
                Metal,
                3,
                StatKind::Defense,
                20,
            ))),
        Ability::new("steel_crush", "Steel Crush", Metal, Damage, Single)
            .with_power(Power::Fixed(45))
            .with_accuracy(85)
            .with_energy_cost(25)
            .with_cooldown(Cooldown::Turns(2))
            .with_rarity(Rarity::Rare),
        Ability::new("fortify", "Fortify", Metal, Buff, AllAllies)
            .with_energy_cost(40)
            .with_cooldown(Cooldown::OncePerBattle)
            .with_rarity(Rarity::Epic)
            .with_effect(AbilityEffect::always(stat(
                "Fortified",
                Metal,
                2,
                StatKind::Defense,
                10,
            ))),
        // Toxic
        Ability::new("acid_splash", "Acid Splash", Toxic, Damage, Single)
            .with_power(Power::Fixed(30))
            .with_accuracy(95)
            .with_energy_cost(20)
            .with_cooldown(Cooldown::Turns(1))
            .with_rarity(Rarity::Uncommon)
            .with_effect(AbilityEffect::with_chance(
                EffectTemplate::new("Corroded", Toxic, 3, EffectPayload::DamagePerTurn(5)),
                50,
            )),
        Ability::new("toxic_cloud", "Toxic Cloud", Toxic, Debuff, AllEnemies)
            .with_accuracy(100)
            .with_energy_cost(30)
            .with_cooldown(Cooldown::Turns(3))
            .with_rarity(Rarity::Rare)
            .with_effect(AbilityEffect::always(EffectTemplate::new(
                "Poisoned",
                Toxic,
                3,
                EffectPayload::DamagePerTurn(6),
            ))),
        Ability::new("meltdown", "Meltdown", Toxic, Damage, AllEnemies)
            .with_power(Power::Range { min: 50, max: 70 })
            .with_accuracy(80)
            .with_energy_cost(50)
            .with_cooldown(Cooldown::OncePerBattle)
            .with_rarity(Rarity::Legendary),
        // Cyber
        Ability::new("firewall", "Firewall", Cyber, Buff, SelfOnly)
            .with_energy_cost(25)
            .with_cooldown(Cooldown::Turns(3))
            .with_rarity(Rarity::Rare)
            .with_effect(AbilityEffect::always(EffectTemplate::new(
                "Encrypted",
                Cyber,
                2,
                EffectPayload::DebuffImmunity,
            ))),
        Ability::new("hack", "Hack", Cyber, Debuff, Single)
            .with_energy_cost(20)
            .with_cooldown(Cooldown::Turns(2))
            .with_rarity(Rarity::Uncommon)
            .with_effect(AbilityEffect::always(stat(
                "Hacked",
                Cyber,
                2,
                StatKind::Attack,
                -10,
            ))),
        Ability::new("system_crash", "System Crash", Cyber, Damage, Random)
            .with_power(Power::Fixed(60))
            .with_accuracy(75)
            .with_energy_cost(40)
            .with_cooldown(Cooldown::Turns(3))
            .with_rarity(Rarity::Epic)
            .with_effect(AbilityEffect::with_chance(
                EffectTemplate::new("Crashed", Cyber, 1, EffectPayload::SkipTurnChance(30)),
                40,
            )),
        Ability::new("debug", "Debug", Cyber, Utility, AllAllies)
            .with_energy_cost(20)
            .with_cooldown(Cooldown::Turns(3))
            .with_rarity(Rarity::Rare)
            .with_utility(UtilityKind::Cleanse),
        // Neutral
        Ability::new("repair", "Repair", Neutral, Heal, Single)
            .with_power(Power::Fixed(30))
            .with_energy_cost(25)
            .with_cooldown(Cooldown::Turns(2))
            .with_rarity(Rarity::Uncommon),
        Ability::new("mythic_overdrive", "Mythic Overdrive", Neutral, Buff, SelfOnly)
            .with_energy_cost(40)
            .with_cooldown(Cooldown::OncePerBattle)
            .with_rarity(Rarity::Legendary)
            .with_effect(AbilityEffect::always(stat(
                "Overdrive",
                Neutral,
                3,
                StatKind::Attack,
                25,
            ))),
        // Companion
        Ability::new("pack_howl", "Pack Howl", Feral, Buff, AllAllies)
            .with_energy_cost(20)
            .with_cooldown(Cooldown::Turns(3))
            .with_rarity(Rarity::Uncommon)
            .with_effect(AbilityEffect::always(stat(
                "Pack Howl",
                Feral,
                2,
                StatKind::Attack,
                8,
            ))),
        Ability::new("starfall", "Starfall", Astral, Damage, AllEnemies)
            .with_power(Power::Fixed(35))
            .with_accuracy(90)
            .with_energy_cost(35)
            .with_cooldown(Cooldown::Turns(3))
            .with_rarity(Rarity::Epic),
        Ability::new("moonlight", "Moonlight", Astral, Heal, AllAllies)
            .with_power(Power::Fixed(20))
            .with_energy_cost(30)
            .with_cooldown(Cooldown::Turns(3))
            .with_rarity(Rarity::Rare),
    ]
}
