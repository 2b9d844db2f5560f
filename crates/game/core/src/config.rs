/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Energy restored to a unit at the end of each of its turns.
    pub energy_regen: u32,
    /// Lower bound of raw basic-attack damage before multipliers.
    pub basic_attack_floor: u32,
    /// Attack value at which ability power is dealt unscaled.
    pub attack_baseline: u32,
    /// Upper bound of the uniform jitter added to speed when ordering turns.
    pub turn_jitter: f64,
    /// Upper bound of the uniform jitter added to AI ability scores.
    pub ai_jitter: f64,
    /// Stat bonus, in percent, for a primary/companion pair sharing a token.
    pub companion_bonus_percent: u32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of abilities a unit can carry.
    pub const MAX_ABILITIES: usize = 5;
    /// Cooldown sentinel: a once-per-battle ability that was already used.
    pub const ONCE_PER_BATTLE: u32 = 999;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ENERGY_REGEN: u32 = 10;
    pub const DEFAULT_BASIC_ATTACK_FLOOR: u32 = 5;
    pub const DEFAULT_ATTACK_BASELINE: u32 = 50;
    pub const DEFAULT_TURN_JITTER: f64 = 10.0;
    pub const DEFAULT_AI_JITTER: f64 = 5.0;
    pub const DEFAULT_COMPANION_BONUS_PERCENT: u32 = 2;

    pub fn new() -> Self {
        Self {
            energy_regen: Self::DEFAULT_ENERGY_REGEN,
            basic_attack_floor: Self::DEFAULT_BASIC_ATTACK_FLOOR,
            attack_baseline: Self::DEFAULT_ATTACK_BASELINE,
            turn_jitter: Self::DEFAULT_TURN_JITTER,
            ai_jitter: Self::DEFAULT_AI_JITTER,
            companion_bonus_percent: Self::DEFAULT_COMPANION_BONUS_PERCENT,
        }
    }

    /// Disables every source of jitter; handy for scripted battles.
    pub fn without_jitter(mut self) -> Self {
        self.turn_jitter = 0.0;
        self.ai_jitter = 0.0;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
