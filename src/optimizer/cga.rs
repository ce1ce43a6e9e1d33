//! # Compact genetic algorithm
//!
//! The cGA samples two candidates per generation and shifts every frequency
//! by `1/K` towards the bit value of the winner wherever the two candidates
//! disagree.

use tracing::{info, trace};

use super::{
    evaluate_checked, options::CgaOptions, validate_problem_size, FitnessFunction, Optimizer,
    RunResult, TerminationCriterion,
};
use crate::{
    error::{OptimizerError, Result},
    frequency::FrequencyVector,
    rng::RandomNumberGenerator,
};

/// The plain compact genetic algorithm.
#[derive(Debug, Clone)]
pub struct Cga {
    options: CgaOptions,
    frequencies: FrequencyVector,
}

impl Cga {
    /// Creates the optimizer.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the problem size is not greater
    /// than 1, and an `InvalidNumericValue` error if `K` is not a positive
    /// finite number.
    pub fn new(options: CgaOptions) -> Result<Self> {
        validate_problem_size(options.get_problem_size())?;

        let k = options.get_k();
        if !k.is_finite() || k <= 0.0 {
            return Err(OptimizerError::InvalidNumericValue(format!(
                "K must be a positive finite number, got {}",
                k
            )));
        }

        Ok(Self {
            frequencies: FrequencyVector::new(options.get_problem_size()),
            options,
        })
    }

    pub fn options(&self) -> &CgaOptions {
        &self.options
    }

    pub fn frequencies(&self) -> &FrequencyVector {
        &self.frequencies
    }
}

impl Optimizer for Cga {
    fn name(&self) -> &'static str {
        "cGA"
    }

    fn run(
        &mut self,
        fitness: &dyn FitnessFunction,
        termination: &dyn TerminationCriterion,
        rng: &mut RandomNumberGenerator,
    ) -> Result<RunResult> {
        self.frequencies.reset();
        let k = self.options.get_k();

        let mut evaluations = 0;
        let mut best_fitness = f64::NEG_INFINITY;
        let mut generation = 0usize;

        while !termination.should_stop(evaluations, best_fitness) {
            let mut winner = self.frequencies.sample(rng);
            let mut loser = self.frequencies.sample(rng);

            let mut winner_score = evaluate_checked(&mut winner, fitness)?;
            let loser_score = evaluate_checked(&mut loser, fitness)?;
            evaluations += 2;

            if winner_score < loser_score {
                std::mem::swap(&mut winner, &mut loser);
                winner_score = loser_score;
            }
            best_fitness = best_fitness.max(winner_score);

            for (i, (&w, &l)) in winner.bits().iter().zip(loser.bits()).enumerate() {
                if w != l {
                    let step = (w as f64 - l as f64) / k;
                    self.frequencies.nudge(i, self.frequencies.get(i) + step);
                }
            }

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
