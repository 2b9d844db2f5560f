//! Damage calculation.

/// Basic attack crits double the final damage.
pub const BASIC_CRIT_MULTIPLIER: u32 = 2;

/// Ability crits scale damage by half again.
pub const ABILITY_CRIT_MULTIPLIER: f64 = 1.5;

/// Ability damage keeps at least this share of its value against any defense.
const MAX_MITIGATION: f64 = 0.5;

/// Normalizes an externally supplied minigame multiplier.
///
/// Missing, negative or non-finite values count as neutral.
pub fn sanitize_bonus(bonus: Option<f64>) -> f64 {
    match bonus {
        Some(value) if value.is_finite() && value >= 0.0 => value,
        _ => 1.0,
    }
}

/// Calculate basic attack damage (before crit).
///
/// # Formula
///
/// ```text
/// raw = max(floor, attack * 2 - defense)
/// damage = floor(raw * type_multiplier * timing_bonus * defense_bonus)
/// damage = max(damage, 1)
/// ```
pub fn basic_attack_damage(
    attack: u32,
    defense: u32,
    floor: u32,
    type_multiplier: f64,
    timing_bonus: f64,
    defense_bonus: f64,
) -> u32 {
    let raw = (attack as i64 * 2 - defense as i64).max(floor as i64) as f64;
    let modified = (raw * type_multiplier * timing_bonus * defense_bonus).floor();
    (modified.min(u32::MAX as f64) as u32).max(1)
}

/// Calculate damage dealt by a damage ability that hit.
///
/// # Formula
///
/// ```text
/// mitigation = 1 - defense / (defense + 100) * 0.5
/// damage = power * (attack / baseline) * type_multiplier * mitigation
/// if critical: damage *= 1.5
/// damage = max(floor(damage), 1)
/// ```
pub fn ability_damage(
    power: u32,
    attack: u32,
    baseline: u32,
    type_multiplier: f64,
    defense: u32,
    is_critical: bool,
) -> u32 {
    let defense = defense as f64;
    let mitigation = 1.0 - defense / (defense + 100.0) * MAX_MITIGATION;
    let scaling = attack as f64 / baseline.max(1) as f64;

    let mut damage = power as f64 * scaling * type_multiplier * mitigation;
    if is_critical {
        damage *= ABILITY_CRIT_MULTIPLIER;
    }

    (damage.floor().min(u32::MAX as f64) as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_attack_surge_vs_metal() {
        // max(5, 100 - 50) * 1.5 = 75
        assert_eq!(basic_attack_damage(50, 50, 5, 1.5, 1.0, 1.0), 75);
    }

    #[test]
    fn basic_attack_floor_applies_before_multipliers() {
        // 2*10 - 80 < 5 -> 5, * 0.67 = 3.35 -> 3
        assert_eq!(basic_attack_damage(10, 80, 5, 0.67, 1.0, 1.0), 3);
    }

    #[test]
    fn basic_attack_never_zero() {
        assert_eq!(basic_attack_damage(10, 80, 5, 1.0, 0.0, 1.0), 1);
    }

    #[test]
    fn minigame_bonuses_scale_damage() {
        assert_eq!(basic_attack_damage(50, 50, 5, 1.0, 1.5, 0.5), 37);
    }

    #[test]
    fn ability_damage_mitigates_and_crits() {
        // 40 * 1 * 1 * (1 - 100/200 * 0.5) = 30
        assert_eq!(ability_damage(40, 50, 50, 1.0, 100, false), 30);
        assert_eq!(ability_damage(40, 50, 50, 1.0, 100, true), 45);
        assert_eq!(ability_damage(40, 100, 50, 1.5, 0, false), 120);
    }

    #[test]
    fn bonuses_default_to_neutral() {
        assert_eq!(sanitize_bonus(None), 1.0);
        assert_eq!(sanitize_bonus(Some(f64::NAN)), 1.0);
        assert_eq!(sanitize_bonus(Some(-0.5)), 1.0);
        assert_eq!(sanitize_bonus(Some(1.3)), 1.3);
    }
}
