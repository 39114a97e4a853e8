use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// A source of uniform randomness threaded explicitly through selection, expansion and rollout.
pub trait RandomGenerator {
    /// Returns a uniform integer in `0..upper`. `upper` must be non-zero.
    fn next_range(&mut self, upper: usize) -> usize;

    /// Returns a uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Picks one element uniformly, or `None` for an empty slice.
    fn choose<'a, M>(&mut self, items: &'a [M]) -> Option<&'a M> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(items.len()))
    }
}

impl<R: RandomGenerator + ?Sized> RandomGenerator for &mut R {
    fn next_range(&mut self, upper: usize) -> usize {
        (**self).next_range(upper)
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Wraps `rand`'s standard generator.
pub struct StandardRandomGenerator {
    rng: StdRng,
}

impl Default for StandardRandomGenerator {
    fn default() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl StandardRandomGenerator {
    /// A reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomGenerator for StandardRandomGenerator {
    fn next_range(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// A tiny linear congruential generator with a fixed, platform-independent sequence.
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl CustomNumberGenerator {
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }

    fn advance(&mut self) -> i64 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C).rem_euclid(i32::MAX as i64);
        self.seed
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next_range(&mut self, upper: usize) -> usize {
        (self.advance() as usize) % upper
    }

    fn next_unit(&mut self) -> f64 {
        (self.advance() as f64) / (i32::MAX as f64)
    }
}
