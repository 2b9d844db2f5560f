//! Combat stats.

/// The six combat stats.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    Speed,
    Energy,
    Crit,
}

impl StatKind {
    pub const ALL: [StatKind; 6] = [
        StatKind::Hp,
        StatKind::Attack,
        StatKind::Defense,
        StatKind::Speed,
        StatKind::Energy,
        StatKind::Crit,
    ];

    /// Position of this stat in [`StatKind::ALL`].
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

/// Snapshot of a unit's six stats. `crit` is a percentage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub energy: u32,
    pub crit: u32,
}

impl Stats {
    /// Minimum value of every stat after derivation.
    pub const FLOOR: Stats = Stats::new(50, 10, 10, 10, 30, 1);

    pub const fn new(
        hp: u32,
        attack: u32,
        defense: u32,
        speed: u32,
        energy: u32,
        crit: u32,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            speed,
            energy,
            crit,
        }
    }

    pub const fn get(&self, stat: StatKind) -> u32 {
        match stat {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
            StatKind::Energy => self.energy,
            StatKind::Crit => self.crit,
        }
    }

    pub fn set(&mut self, stat: StatKind, value: u32) {
        match stat {
            StatKind::Hp => self.hp = value,
            StatKind::Attack => self.attack = value,
            StatKind::Defense => self.defense = value,
            StatKind::Speed => self.speed = value,
            StatKind::Energy => self.energy = value,
            StatKind::Crit => self.crit = value,
        }
    }

    /// Raises every stat to at least [`Stats::FLOOR`].
    #[must_use]
    pub fn clamp_to_floor(mut self) -> Self {
        for stat in StatKind::ALL {
            let value = self.get(stat).max(Self::FLOOR.get(stat));
            self.set(stat, value);
        }
        self
    }

    /// Returns true if every stat is at or above [`Stats::FLOOR`].
    pub fn meets_floor(&self) -> bool {
        StatKind::ALL
            .into_iter()
            .all(|stat| self.get(stat) >= Self::FLOOR.get(stat))
    }

    /// Scales every stat by `percent / 100`, rounding half up.
    #[must_use]
    pub fn scaled_percent(mut self, percent: u32) -> Self {
        for stat in StatKind::ALL {
            let scaled = (self.get(stat) as u64 * percent as u64 + 50) / 100;
            self.set(stat, scaled.min(u32::MAX as u64) as u32);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_raises_only_low_stats() {
        let stats = Stats::new(10, 80, 0, 12, 0, 0).clamp_to_floor();
        assert_eq!(stats, Stats::new(50, 80, 10, 12, 30, 1));
        assert!(stats.meets_floor());
    }

    #[test]
    fn scaled_percent_rounds_half_up() {
        let stats = Stats::new(100, 50, 25, 75, 100, 10).scaled_percent(102);
        // 25 * 1.02 = 25.5 -> 26, 75 * 1.02 = 76.5 -> 77, 10 * 1.02 = 10.2 -> 10
        assert_eq!(stats, Stats::new(102, 51, 26, 77, 102, 10));
    }
}
