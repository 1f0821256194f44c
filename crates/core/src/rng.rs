//! RNG module - seedable random sources for shape and tint draws
//!
//! Every random decision in the game goes through [`RandomSource::next_float`], so a
//! round can be replayed exactly from a seed.
//!
//! - [`SimpleRng`]: small LCG for deterministic testing and replays.
//! - [`EntropyRng`]: `rand`'s `StdRng`, seeded from the OS or from a `u64`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed floats in `[0, 1)`
pub trait RandomSource {
    fn next_float(&mut self) -> f64;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let idx = (self.next_float() * len as f64) as usize;
        idx.min(len - 1)
    }

    /// Fair coin flip
    fn next_bool(&mut self) -> bool {
        self.next_float() < 0.5
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_float(&mut self) -> f64 {
        (**self).next_float()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_float(&mut self) -> f64 {
        // The low bits of an LCG are weak; use the full word scaled into [0, 1).
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }
}

/// Entropy-backed source for production play
#[derive(Debug, Clone)]
pub struct EntropyRng {
    rng: StdRng,
}

impl EntropyRng {
    /// Seed from operating system entropy
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seed deterministically
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl EntropyRng {
    /// Full-width random word, e.g. for deriving seeds
    pub fn next_u64(&mut self) -> u64 {
        self.rng.random::<u64>()
    }
}

impl RandomSource for EntropyRng {
    fn next_float(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_float_in_unit_interval() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            let f = rng.next_float();
            assert!((0.0..1.0).contains(&f), "out of range: {}", f);
        }
    }

    #[test]
    fn test_next_index_covers_range() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 19];
        for _ in 0..2_000 {
            seen[rng.next_index(19)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_entropy_rng_seeded_is_deterministic() {
        let mut a = EntropyRng::seeded(42);
        let mut b = EntropyRng::seeded(42);
        for _ in 0..32 {
            let f = a.next_float();
            assert_eq!(f, b.next_float());
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn test_entropy_next_u64_uses_high_bits() {
        let mut a = EntropyRng::seeded(7);
        let mut b = EntropyRng::seeded(7);
        let words: Vec<u64> = (0..16).map(|_| a.next_u64()).collect();
        assert!(words.iter().all(|&w| w == b.next_u64()));
        assert!(words.iter().any(|&w| w > u32::MAX as u64));
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut rng = SimpleRng::new(5);
        let mut copy = rng.clone();
        let via_ref = (&mut rng).next_float();
        assert_eq!(via_ref, copy.next_float());
    }
}
