//! # FrequencyVector
//!
//! One sampling probability per bit position. Every write is clamped into
//! `[1/n, 1 - 1/n]` so that both bit values stay reachable forever.

use crate::{candidate::Candidate, rng::RandomNumberGenerator};

/// Per-position sampling probabilities driving candidate generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyVector {
    p: Vec<f64>,
}

impl FrequencyVector {
    /// Creates a vector of `n` frequencies, all at 0.5.
    pub fn new(n: usize) -> Self {
        Self { p: vec![0.5; n] }
    }

    pub fn len(&self) -> usize {
        self.p.len()
    }

    pub fn is_empty(&self) -> bool {
        self.p.is_empty()
    }

    /// Returns the frequency of position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn get(&self, i: usize) -> f64 {
        self.p[i]
    }

    /// Returns all frequencies in position order.
    pub fn as_slice(&self) -> &[f64] {
        &self.p
    }

    /// Smallest value a frequency may take, `1/n`.
    pub fn lower_bound(&self) -> f64 {
        1.0 / self.p.len() as f64
    }

    /// Largest value a frequency may take, `1 - 1/n`.
    pub fn upper_bound(&self) -> f64 {
        1.0 - self.lower_bound()
    }

    /// Samples a candidate: bit `i` is 1 iff a uniform draw falls below `p[i]`.
    pub fn sample(&self, rng: &mut RandomNumberGenerator) -> Candidate {
        let bits = self
            .p
            .iter()
            .map(|&p| u8::from(rng.uniform() < p))
            .collect();
        Candidate::from_bits(bits)
    }

    /// Stores `raw` at position `i` after clamping it into the frequency bounds.
    ///
    /// # Arguments
    ///
    /// * `i` - The position to update.
    /// * `raw` - The unclamped new frequency; may lie outside `[0, 1]`.
    pub fn nudge(&mut self, i: usize, raw: f64) {
        let lower = self.lower_bound();
        let upper = self.upper_bound();
        self.p[i] = raw.max(lower).min(upper);
    }

    /// Sets every frequency back to 0.5.
    pub fn reset(&mut self) {
        self.p.iter_mut().for_each(|p| *p = 0.5);
    }
}
