//! # Significance-based compact genetic algorithm
//!
//! Each generation samples two candidates from the frequency vector, keeps
//! the fitter one and appends its bits to the per-position histories. A
//! frequency only moves when the significance test fires on one of its
//! history windows; it then jumps to the nearer boundary (`1 - 1/n` or
//! `1/n`) and the history of that position is wiped.

use tracing::{debug, info, trace};

use super::{
    evaluate_checked, options::SigCgaOptions, validate_problem_size, FitnessFunction, Optimizer,
    RunResult, TerminationCriterion,
};
use crate::{
    candidate::Candidate,
    error::{OptimizerError, Result},
    history::{History, HistoryKind},
    rng::RandomNumberGenerator,
    significance::{significance, Decision},
};

/// State of one bit position: its sampling frequency and the history of
/// winner bits observed there since the frequency last moved.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    frequency: f64,
    history: History,
}

impl Position {
    fn new(kind: HistoryKind, n: usize) -> Self {
        Self {
            frequency: 0.5,
            history: History::new(kind, n),
        }
    }

    /// Probability that a sampled candidate has a 1 at this position.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

/// The significance-based cGA.
#[derive(Debug, Clone)]
pub struct SigCga {
    options: SigCgaOptions,
    ln_n: f64,
    lower: f64,
    upper: f64,
    positions: Vec<Position>,
}

impl SigCga {
    /// Creates the optimizer.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the problem size is not greater
    /// than 1, and an `InvalidNumericValue` error if epsilon is not a
    /// positive finite number.
    pub fn new(options: SigCgaOptions) -> Result<Self> {
        let n = options.get_problem_size();
        validate_problem_size(n)?;

        let eps = options.get_epsilon();
        if !eps.is_finite() || eps <= 0.0 {
            return Err(OptimizerError::InvalidNumericValue(format!(
                "Epsilon must be a positive finite number, got {}",
                eps
            )));
        }

        let positions = (0..n)
            .map(|_| Position::new(options.get_history(), n))
            .collect();
        let lower = 1.0 / n as f64;

        Ok(Self {
            ln_n: (n as f64).ln(),
            lower,
            upper: 1.0 - lower,
            positions,
            options,
        })
    }

    pub fn options(&self) -> &SigCgaOptions {
        &self.options
    }

    /// Per-position state as left by the last generation.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Frequencies as left by the last generation, in position order.
    pub fn frequencies(&self) -> Vec<f64> {
        self.positions.iter().map(Position::frequency).collect()
    }

    fn reset(&mut self) {
        for position in &mut self.positions {
            position.frequency = 0.5;
            position.history.wipe();
        }
    }

    /// Bit `i` is 1 iff a uniform draw falls below the frequency of position `i`.
    fn sample(&self, rng: &mut RandomNumberGenerator) -> Candidate {
        let bits = self
            .positions
            .iter()
            .map(|position| u8::from(rng.uniform() < position.frequency))
            .collect();
        Candidate::from_bits(bits)
    }

    /// Runs the significance test on every position and applies at most one
    /// decision per position: the one of its newest firing window.
    fn check_significance(&mut self) {
        let eps = self.options.get_epsilon();
        let ln_n = self.ln_n;
        let (lower, upper) = (self.lower, self.upper);

        for (i, position) in self.positions.iter_mut().enumerate() {
            let p = position.frequency;
            let fired = position
                .history
                .iter()
                .map(|window| (window, significance(p, &window, eps, ln_n)))
                .find(|(_, decision)| *decision != Decision::Stay);

            let Some((window, decision)) = fired else {
                continue;
            };
            let target = match decision {
                Decision::Increase => upper,
                Decision::Decrease => lower,
                Decision::Stay => continue,
            };

            debug!(
                position = i,
                ?decision,
                ones = window.ones,
                zeros = window.zeros,
                span = window.span,
                "significance fired"
            );
            position.frequency = target;
            position.history.wipe();
        }
    }
}

impl Optimizer for SigCga {
    fn name(&self) -> &'static str {
        "sig-cGA"
    }

    fn run(
        &mut self,
        fitness: &dyn FitnessFunction,
        termination: &dyn TerminationCriterion,
        rng: &mut RandomNumberGenerator,
    ) -> Result<RunResult> {
        self.reset();

        let mut evaluations = 0;
        let mut best_fitness = f64::NEG_INFINITY;
        let mut generation = 0usize;

        while !termination.should_stop(evaluations, best_fitness) {
            let mut first = self.sample(rng);
            let mut second = self.sample(rng);

            let first_score = evaluate_checked(&mut first, fitness)?;
            let second_score = evaluate_checked(&mut second, fitness)?;
            evaluations += 2;

            // Ties keep the first draw.
            let (winner, winner_score) = if second_score > first_score {
                (second, second_score)
            } else {
                (first, first_score)
            };
            best_fitness = best_fitness.max(winner_score);

            for (position, &bit) in self.positions.iter_mut().zip(winner.bits()) {
                position.history.add(bit);
            }
            self.check_significance();

            trace!(generation, evaluations, best_fitness, "generation finished");
            generation += 1;
        }

        info!(
            algorithm = self.name(),
            problem_size = self.options.get_problem_size(),
            evaluations,
            best_fitness,
            "run finished"
        );

        Ok(RunResult {
            evaluations,
            best_fitness,
        })
    }
}
