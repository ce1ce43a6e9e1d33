//! # Benchmark landscapes
//!
//! Toy fitness functions over bit-vectors whose optimum is always `n`, the
//! candidate length, together with the evaluation budgets the comparison
//! experiments grant each of them.
//!
//! ## Example
//!
//! ```rust
//! use sigcga::benchmarks::{jump, leading_ones, one_max, Problem};
//! use sigcga::candidate::Candidate;
//!
//! let c = Candidate::from_bits(vec![1, 1, 0, 1, 1]);
//! assert_eq!(one_max(&c), 4.0);
//! assert_eq!(leading_ones(&c), 2.0);
//! assert_eq!(jump(&c, 2), 1.0);
//!
//! let problem: Problem = "LeadingOnes".parse().unwrap();
//! assert_eq!(problem.evaluation_budget(10), Some(1500));
//! ```

use std::{fmt, str::FromStr};

use crate::{
    candidate::Candidate,
    error::{OptimizerError, OptionExt},
    optimizer::{FitnessFunction, TerminationCriterion},
};

/// Number of ones.
pub fn one_max(candidate: &Candidate) -> f64 {
    candidate.ones() as f64
}

/// Length of the longest all-ones prefix.
pub fn leading_ones(candidate: &Candidate) -> f64 {
    candidate.bits().iter().take_while(|&&b| b == 1).count() as f64
}

/// OneMax with a fitness valley of width `k - 1` just below the optimum.
pub fn jump(candidate: &Candidate, k: usize) -> f64 {
    let n = candidate.len();
    let ones = candidate.ones();
    if ones == n {
        n as f64
    } else if ones + k <= n {
        ones as f64
    } else {
        (n - ones) as f64
    }
}

/// The benchmark problems known to the experiment driver.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Problem {
    OneMax,
    LeadingOnes,
    JumpK2,
    JumpK3,
}

impl Problem {
    pub const ALL: [Problem; 4] = [
        Problem::OneMax,
        Problem::LeadingOnes,
        Problem::JumpK2,
        Problem::JumpK3,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Problem::OneMax => "OneMax",
            Problem::LeadingOnes => "LeadingOnes",
            Problem::JumpK2 => "JumpK2",
            Problem::JumpK3 => "JumpK3",
        }
    }

    pub fn fitness(&self, candidate: &Candidate) -> f64 {
        match self {
            Problem::OneMax => one_max(candidate),
            Problem::LeadingOnes => leading_ones(candidate),
            Problem::JumpK2 => jump(candidate, 2),
            Problem::JumpK3 => jump(candidate, 3),
        }
    }

    /// Fitness of the global optimum for length `n`.
    pub fn optimum(&self, n: usize) -> f64 {
        n as f64
    }

    /// Evaluations granted to one run on a problem of size `n`.
    ///
    /// # Returns
    ///
    /// `None` if the budget does not fit in a `usize`.
    pub fn evaluation_budget(&self, n: usize) -> Option<usize> {
        match self {
            Problem::OneMax => n.checked_mul(100),
            Problem::LeadingOnes => n.checked_mul(n)?.checked_mul(15),
            Problem::JumpK2 | Problem::JumpK3 => Some(500_000),
        }
    }

    /// Whether the cGA population size should scale with `n ln² n`
    /// rather than `sqrt(n) ln n`.
    pub fn needs_large_k(&self) -> bool {
        matches!(self, Problem::LeadingOnes)
    }

    /// The termination criterion of a run of size `n`.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the evaluation budget overflows.
    pub fn budget(&self, n: usize) -> Result<Budget, OptimizerError> {
        let max_evaluations = self.evaluation_budget(n).ok_or_else_optimizer(|| {
            OptimizerError::Configuration(format!(
                "Evaluation budget of {} overflows for n = {}",
                self, n
            ))
        })?;
        Ok(Budget::new(max_evaluations, self.optimum(n)))
    }
}

impl FitnessFunction for Problem {
    fn score(&self, candidate: &Candidate) -> f64 {
        self.fitness(candidate)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Problem {
    type Err = OptimizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Problem::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else_optimizer(|| {
                OptimizerError::Configuration(format!(
                    "Unknown problem '{}', expected one of: OneMax, LeadingOnes, JumpK2, JumpK3",
                    s
                ))
            })
    }
}

/// Stops once the optimum is reached or the evaluation budget is spent.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Budget {
    pub max_evaluations: usize,
    pub optimum: f64,
}

impl Budget {
    pub fn new(max_evaluations: usize, optimum: f64) -> Self {
        Self {
            max_evaluations,
            optimum,
        }
    }
}

impl TerminationCriterion for Budget {
    fn should_stop(&self, evaluations: usize, best_fitness: f64) -> bool {
        best_fitness >= self.optimum || evaluations >= self.max_evaluations
    }
}
