//! RNG oracle for deterministic random number generation.
//!
//! Prompt rotation is the only randomized rule in the turn cycle. Draws go
//! through [`RngOracle`] so tests can pin the sequence with a fixed seed and
//! hosts can swap in any generator they like.
//!
//! # Determinism
//!
//! Implementations must be pure functions of the seed: the same seed always
//! produces the same value.

/// RNG oracle for deterministic random number generation.
pub trait RngOracle {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }

    /// Pick an index into a collection of `len` elements.
    ///
    /// Returns 0 for empty or single-element collections.
    fn index(&self, seed: u64, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        let max = u32::try_from(len - 1).unwrap_or(u32::MAX);
        self.range(seed, 0, max) as usize
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &R {
    fn next_u32(&self, seed: u64) -> u32 {
        (**self).next_u32(seed)
    }
}

impl<R: RngOracle + ?Sized> RngOracle for Box<R> {
    fn next_u32(&self, seed: u64) -> u32 {
        (**self).next_u32(seed)
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Stateless: each call advances a fresh state derived from the seed, so the
/// caller controls the sequence through [`compute_seed`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a deterministic seed for one draw.
///
/// # Arguments
///
/// * `game_seed` - Base seed chosen when the orchestrator is built
/// * `week` - Week the draw belongs to
/// * `context` - Distinguishes several draws in the same week (attempt index)
pub fn compute_seed(game_seed: u64, week: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing constants
    let mut hash = game_seed;

    hash ^= (week as u64).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x517cc1b727220a95);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;

    hash
}
