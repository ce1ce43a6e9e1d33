//! # Candidate
//!
//! A `Candidate` is a fixed-length bit-vector together with a lazily cached
//! fitness score. The cache is filled by [`Candidate::evaluate`] and cleared
//! by anything that changes the bits, so a score is never read for a bit
//! pattern it was not computed on.
//!
//! ## Example
//!
//! ```rust
//! use sigcga::candidate::Candidate;
//!
//! let mut candidate = Candidate::from_bits(vec![1, 0, 1, 1]);
//! assert_eq!(candidate.fitness(), None);
//!
//! let score = candidate.evaluate(&|c: &Candidate| c.ones() as f64);
//! assert_eq!(score, 3.0);
//! assert_eq!(candidate.fitness(), Some(3.0));
//! ```

use std::fmt;

use crate::{optimizer::FitnessFunction, rng::RandomNumberGenerator};

/// A bit-vector under optimization.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    bits: Vec<u8>,
    fitness: Option<f64>,
}

impl Candidate {
    /// Creates an all-zero candidate of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self {
            bits: vec![0; n],
            fitness: None,
        }
    }

    /// Creates a candidate from explicit bits. Any non-zero byte counts as a 1.
    pub fn from_bits(bits: Vec<u8>) -> Self {
        let bits = bits.into_iter().map(|b| u8::from(b != 0)).collect();
        Self {
            bits,
            fitness: None,
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the bits, each 0 or 1.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Returns bit `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn bit(&self, i: usize) -> u8 {
        self.bits[i]
    }

    /// Sets bit `i` and invalidates the cached fitness.
    pub fn set_bit(&mut self, i: usize, value: bool) {
        self.bits[i] = u8::from(value);
        self.fitness = None;
    }

    /// Number of 1-bits.
    pub fn ones(&self) -> usize {
        self.bits.iter().map(|&b| b as usize).sum()
    }

    /// The cached fitness, or `None` if the candidate has not been evaluated
    /// since its bits last changed.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Returns the fitness, evaluating it with `f` only if no score is cached.
    ///
    /// # Arguments
    ///
    /// * `f` - The fitness function to evaluate with on a cache miss.
    ///
    /// # Returns
    ///
    /// The cached or freshly computed score.
    pub fn evaluate<F>(&mut self, f: &F) -> f64
    where
        F: FitnessFunction + ?Sized,
    {
        match self.fitness {
            Some(score) => score,
            None => {
                let score = f.score(self);
                self.fitness = Some(score);
                score
            }
        }
    }

    /// Standard bit mutation: every bit flips independently with
    /// probability `1/n`.
    ///
    /// Instead of drawing `n` coins, the positions of flipped bits are found
    /// by geometric jumps, so the expected cost is O(1).
    pub fn mutate(&mut self, rng: &mut RandomNumberGenerator) {
        let n = self.bits.len();
        if n == 0 {
            return;
        }
        let rate = 1.0 / n as f64;

        let mut next = rng.geometric(rate);
        while next < n {
            self.bits[next] ^= 1;
            next = next.saturating_add(1 + rng.geometric(rate));
        }
        self.fitness = None;
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.bits {
            write!(f, "{}", b)?;
        }
        Ok(())
    }
}
