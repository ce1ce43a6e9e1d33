//! # (1+1) EA
//!
//! A randomized hill-climber: start from a uniformly random candidate, create
//! one offspring per generation by standard bit mutation and keep it if it
//! is at least as fit as its parent.

use tracing::{info, trace};

use super::{
    evaluate_checked, validate_problem_size, FitnessFunction, Optimizer, RunResult,
    TerminationCriterion,
};
use crate::{error::Result, frequency::FrequencyVector, rng::RandomNumberGenerator};

/// The (1+1) evolutionary algorithm.
#[derive(Debug, Clone)]
pub struct OnePlusOneEa {
    problem_size: usize,
}

impl OnePlusOneEa {
    /// # Errors
    ///
    /// Returns a `Configuration` error if the problem size is not greater than 1.
    pub fn new(problem_size: usize) -> Result<Self> {
        validate_problem_size(problem_size)?;
        Ok(Self { problem_size })
    }

    pub fn problem_size(&self) -> usize {
        self.problem_size
    }
}

impl Optimizer for OnePlusOneEa {
    fn name(&self) -> &'static str {
        "1+1_EA"
    }

    fn run(
        &mut self,
        fitness: &dyn FitnessFunction,
        termination: &dyn TerminationCriterion,
        rng: &mut RandomNumberGenerator,
    ) -> Result<RunResult> {
        let mut parent = FrequencyVector::new(self.problem_size).sample(rng);
        let mut parent_score = evaluate_checked(&mut parent, fitness)?;
        let mut evaluations = 1;

        while !termination.should_stop(evaluations, parent_score) {
            let mut offspring = parent.clone();
            offspring.mutate(rng);
            let offspring_score = evaluate_checked(&mut offspring, fitness)?;
            evaluations += 1;

            if offspring_score >= parent_score {
                parent = offspring;
                parent_score = offspring_score;
            }
            trace!(evaluations, best_fitness = parent_score, "generation finished");
        }

        info!(
            algorithm = self.name(),
            problem_size = self.problem_size,
            evaluations,
            best_fitness = parent_score,
            "run finished"
        );

        Ok(RunResult {
            evaluations,
            best_fitness: parent_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Candidate;

    #[test]
    fn test_rejects_small_problem() {
        assert!(OnePlusOneEa::new(1).is_err());
        assert!(OnePlusOneEa::new(2).is_ok());
    }

    #[test]
    fn test_counts_initial_evaluation() {
        let mut ea = OnePlusOneEa::new(8).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);
        let f = |c: &Candidate| c.ones() as f64;
        let result = ea.run(&f, &|_: usize, _: f64| true, &mut rng).unwrap();
        assert_eq!(result.evaluations, 1);
    }

    #[test]
    fn test_fitness_never_decreases() {
        let mut ea = OnePlusOneEa::new(30).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(5);
        let f = |c: &Candidate| c.ones() as f64;
        let history = std::cell::RefCell::new(Vec::new());
        let stop = |evals: usize, best: f64| {
            history.borrow_mut().push(best);
            evals >= 300
        };
        ea.run(&f, &stop, &mut rng).unwrap();
        let seen = history.borrow();
        assert!(seen.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_solves_one_max() {
        let n = 30;
        let mut ea = OnePlusOneEa::new(n).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let f = |c: &Candidate| c.ones() as f64;
        let stop = |evals: usize, best: f64| evals >= 100 * n || best >= n as f64;
        let result = ea.run(&f, &stop, &mut rng).unwrap();
        assert_eq!(result.best_fitness, n as f64);
    }
}
