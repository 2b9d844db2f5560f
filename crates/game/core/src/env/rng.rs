//! RNG oracle for seedable, replayable random number generation.
//!
//! Turn-order jitter, crit rolls, accuracy rolls, power ranges and AI jitter
//! all draw from one random source owned by the engine. Seeding it makes a
//! battle replayable: the same rosters, seed and action sequence always
//! produce the same event log.

/// Random source threaded through the battle engine.
///
/// Implementations must be deterministic for a given seed.
pub trait RngOracle {
    /// Generate the next random u32 value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Uniform value in `[0, 100)`.
    ///
    /// Used for percentage mechanics like crit and accuracy checks.
    fn percent(&mut self) -> f64 {
        self.unit() * 100.0
    }

    /// Uniform value in `[0, max)`.
    fn uniform(&mut self, max: f64) -> f64 {
        self.unit() * max
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = (max - min) as u64 + 1;
        min + (self.next_u32() as u64 % span) as u32
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

impl<R: RngOracle + ?Sized> RngOracle for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator whose sequence is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed.wrapping_add(Self::INCREMENT)),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::seeded(0)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// Derive a seed from a base seed and sequence components.
///
/// Hosts running several battles from one configured seed (a tournament, a
/// balancing sweep) use this to give each battle an independent stream.
///
/// * `base_seed` - Seed configured by the host
/// * `nonce` - Sequence number (battle index, match number)
/// * `context` - Additional context to separate independent streams
pub fn compute_seed(base_seed: u64, nonce: u64, context: u32) -> u64 {
    // SplitMix64 and FxHash multipliers
    let mut hash = base_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
