//! # Optimizers
//!
//! An [`Optimizer`] repeatedly queries a [`FitnessFunction`] over fixed-length
//! bit-vectors until a [`TerminationCriterion`] tells it to stop, and reports
//! the number of evaluations spent together with the best fitness reached.
//!
//! Three optimizers are provided:
//!
//! - [`SigCga`]: the significance-based compact genetic algorithm.
//! - [`Cga`]: the plain compact genetic algorithm.
//! - [`OnePlusOneEa`]: the (1+1) evolutionary algorithm, a randomized hill-climber.
//!
//! ## Example
//!
//! ```rust
//! use sigcga::candidate::Candidate;
//! use sigcga::history::HistoryKind;
//! use sigcga::optimizer::{Optimizer, SigCga, SigCgaOptions};
//! use sigcga::rng::RandomNumberGenerator;
//!
//! let options = SigCgaOptions::builder()
//!     .problem_size(20)
//!     .epsilon(1.0)
//!     .history(HistoryKind::Doubling)
//!     .build();
//! let mut optimizer = SigCga::new(options).unwrap();
//!
//! let one_max = |c: &Candidate| c.ones() as f64;
//! let stop = |evaluations: usize, best: f64| evaluations >= 1000 || best >= 20.0;
//! let mut rng = RandomNumberGenerator::from_seed(42);
//!
//! let result = optimizer.run(&one_max, &stop, &mut rng).unwrap();
//! assert!(result.evaluations <= 1000);
//! ```

pub mod cga;
pub mod one_plus_one;
pub mod options;
pub mod sig_cga;

use std::fmt::Debug;

use crate::{
    candidate::Candidate,
    error::{OptimizerError, Result},
    rng::RandomNumberGenerator,
};

pub use cga::Cga;
pub use one_plus_one::OnePlusOneEa;
pub use options::{CgaOptions, CgaOptionsBuilder, SigCgaOptions, SigCgaOptionsBuilder};
pub use sig_cga::{Position, SigCga};

/// Scores a candidate; larger is better.
///
/// Implemented for every `Fn(&Candidate) -> f64`.
pub trait FitnessFunction {
    fn score(&self, candidate: &Candidate) -> f64;
}

impl<F> FitnessFunction for F
where
    F: Fn(&Candidate) -> f64,
{
    fn score(&self, candidate: &Candidate) -> f64 {
        self(candidate)
    }
}

/// Decides, once per generation, whether a run should stop.
///
/// Implemented for every `Fn(usize, f64) -> bool` taking the evaluations
/// spent so far and the best fitness seen so far.
pub trait TerminationCriterion {
    fn should_stop(&self, evaluations: usize, best_fitness: f64) -> bool;
}

impl<F> TerminationCriterion for F
where
    F: Fn(usize, f64) -> bool,
{
    fn should_stop(&self, evaluations: usize, best_fitness: f64) -> bool {
        self(evaluations, best_fitness)
    }
}

/// The outcome of one optimizer run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunResult {
    /// Fitness evaluations spent.
    pub evaluations: usize,
    /// Best fitness seen; negative infinity if the run stopped before any evaluation.
    pub best_fitness: f64,
}

/// A black-box optimizer over bit-vectors.
pub trait Optimizer: Debug {
    /// Short algorithm name, used in reports.
    fn name(&self) -> &'static str;

    /// Runs the optimizer from a fresh state until `termination` says stop.
    ///
    /// # Errors
    ///
    /// Returns [`OptimizerError::FitnessCalculation`] if the fitness function
    /// produces a NaN or infinite score.
    fn run(
        &mut self,
        fitness: &dyn FitnessFunction,
        termination: &dyn TerminationCriterion,
        rng: &mut RandomNumberGenerator,
    ) -> Result<RunResult>;
}

/// Evaluates `candidate` and rejects non-finite scores.
pub(crate) fn evaluate_checked(
    candidate: &mut Candidate,
    fitness: &dyn FitnessFunction,
) -> Result<f64> {
    let score = candidate.evaluate(fitness);
    if !score.is_finite() {
        return Err(OptimizerError::FitnessCalculation(format!(
            "Non-finite fitness score encountered: {}",
            score
        )));
    }
    Ok(score)
}

/// Rejects problem sizes for which the frequency bounds `[1/n, 1 - 1/n]`
/// and `ln n` are degenerate.
pub(crate) fn validate_problem_size(n: usize) -> Result<()> {
    if n <= 1 {
        return Err(OptimizerError::Configuration(format!(
            "Problem size must be greater than 1, got {}",
            n
        )));
    }
    Ok(())
}
