//! # RandomNumberGenerator
//!
//! Every optimizer draws from one explicitly passed `RandomNumberGenerator`.
//! Seeding it makes a whole run reproducible, and two runs with separate
//! generators share no state.
//!
//! ## Example
//!
//! ```rust
//! use sigcga::rng::RandomNumberGenerator;
//!
//! let mut a = RandomNumberGenerator::from_seed(42);
//! let mut b = RandomNumberGenerator::from_seed(42);
//! assert_eq!(a.uniform(), b.uniform());
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng`.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible experiments and tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a uniform number in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Draws the number of failures before the first success of a Bernoulli
    /// process with success probability `p`.
    ///
    /// Used to jump directly to the next flipped bit during standard bit
    /// mutation. `p` must lie in `(0, 1]`.
    pub fn geometric(&mut self, p: f64) -> usize {
        if p >= 1.0 {
            return 0;
        }
        // 1 - u lies in (0, 1], so the logarithm is finite.
        let u = self.uniform();
        ((1.0 - u).ln() / (1.0 - p).ln()).floor() as usize
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
