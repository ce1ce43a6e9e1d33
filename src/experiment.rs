//! # Comparison experiments
//!
//! Runs the (1+1) EA, the cGA with several population sizes and the
//! significance-based cGA with both history variants on the benchmark
//! problems, and writes one CSV row per run.
//!
//! Repetition `r` of every configuration is seeded with `base_seed + r`
//! (wrapping at `u64::MAX`), so all algorithms see the same sequence of seeds.
//!
//! ## Example
//!
//! ```rust
//! use sigcga::benchmarks::Problem;
//! use sigcga::experiment::{run_experiment, ExperimentConfig};
//!
//! let config = ExperimentConfig::builder()
//!     .problems(vec![Problem::OneMax])
//!     .sizes(vec![10])
//!     .repetitions(1)
//!     .build();
//!
//! let mut out = Vec::new();
//! run_experiment(&config, &mut out).unwrap();
//! let csv = String::from_utf8(out).unwrap();
//! assert!(csv.starts_with("Algorithm,Problem,N,Param,Repetition"));
//! ```

use std::io::Write;

use tracing::info;

use crate::{
    benchmarks::Problem,
    error::{OptimizerError, Result},
    history::HistoryKind,
    optimizer::{
        Cga, CgaOptions, OnePlusOneEa, Optimizer, RunResult, SigCga, SigCgaOptions,
    },
    rng::RandomNumberGenerator,
};

pub const CSV_HEADER: &str =
    "Algorithm,Problem,N,Param,Repetition,Evaluations,Success,BestFitness,Label";

/// What to run and how often.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    problems: Vec<Problem>,
    sizes: Vec<usize>,
    repetitions: usize,
    base_seed: u64,
    epsilons: Vec<f64>,
    k_multipliers: Vec<f64>,
}

impl ExperimentConfig {
    pub fn get_problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn get_sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn get_repetitions(&self) -> usize {
        self.repetitions
    }

    pub fn get_base_seed(&self) -> u64 {
        self.base_seed
    }

    pub fn get_epsilons(&self) -> &[f64] {
        &self.epsilons
    }

    pub fn get_k_multipliers(&self) -> &[f64] {
        &self.k_multipliers
    }

    pub fn builder() -> ExperimentConfigBuilder {
        ExperimentConfigBuilder::default()
    }

    /// # Errors
    ///
    /// Returns a `Configuration` error if nothing would run, a problem size
    /// is too small for the optimizers or an evaluation budget overflows.
    pub fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(OptimizerError::Configuration(
                "Repetitions must be greater than 0".to_string(),
            ));
        }
        if self.problems.is_empty() || self.sizes.is_empty() {
            return Err(OptimizerError::Configuration(
                "At least one problem and one size are required".to_string(),
            ));
        }
        if let Some(n) = self.sizes.iter().find(|&&n| n <= 1) {
            return Err(OptimizerError::Configuration(format!(
                "Problem sizes must be greater than 1, got {}",
                n
            )));
        }
        for problem in &self.problems {
            for &n in &self.sizes {
                problem.budget(n)?;
            }
        }
        Ok(())
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            problems: Problem::ALL.to_vec(),
            sizes: vec![50, 100, 150, 200],
            repetitions: 30,
            base_seed: 42,
            epsilons: vec![1.0, 5.0, 10.0],
            k_multipliers: vec![0.5, 1.0, 2.0],
        }
    }
}

/// Builder for [`ExperimentConfig`].
#[derive(Debug, Clone, Default)]
pub struct ExperimentConfigBuilder {
    problems: Option<Vec<Problem>>,
    sizes: Option<Vec<usize>>,
    repetitions: Option<usize>,
    base_seed: Option<u64>,
    epsilons: Option<Vec<f64>>,
    k_multipliers: Option<Vec<f64>>,
}

impl ExperimentConfigBuilder {
    pub fn problems(mut self, value: Vec<Problem>) -> Self {
        self.problems = Some(value);
        self
    }

    pub fn sizes(mut self, value: Vec<usize>) -> Self {
        self.sizes = Some(value);
        self
    }

    pub fn repetitions(mut self, value: usize) -> Self {
        self.repetitions = Some(value);
        self
    }

    pub fn base_seed(mut self, value: u64) -> Self {
        self.base_seed = Some(value);
        self
    }

    pub fn epsilons(mut self, value: Vec<f64>) -> Self {
        self.epsilons = Some(value);
        self
    }

    pub fn k_multipliers(mut self, value: Vec<f64>) -> Self {
        self.k_multipliers = Some(value);
        self
    }

    pub fn build(self) -> ExperimentConfig {
        let defaults = ExperimentConfig::default();
        ExperimentConfig {
            problems: self.problems.unwrap_or(defaults.problems),
            sizes: self.sizes.unwrap_or(defaults.sizes),
            repetitions: self.repetitions.unwrap_or(defaults.repetitions),
            base_seed: self.base_seed.unwrap_or(defaults.base_seed),
            epsilons: self.epsilons.unwrap_or(defaults.epsilons),
            k_multipliers: self.k_multipliers.unwrap_or(defaults.k_multipliers),
        }
    }
}

/// One line of the results table.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub algorithm: String,
    pub problem: Problem,
    pub n: usize,
    pub param: f64,
    pub repetition: usize,
    pub result: RunResult,
    pub label: String,
}

impl RunRecord {
    pub fn success(&self) -> bool {
        self.result.best_fitness >= self.problem.optimum(self.n)
    }

    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{}",
            self.algorithm,
            self.problem,
            self.n,
            self.param,
            self.repetition,
            self.result.evaluations,
            u8::from(self.success()),
            self.result.best_fitness,
            self.label
        )
    }
}

/// Base value of the cGA's `K` for a problem, with its formula for labels.
pub fn k_base(problem: Problem, n: usize) -> (f64, &'static str) {
    let n_f = n as f64;
    if problem.needs_large_k() {
        (n_f * n_f.ln().powi(2), "n ln^2(n)")
    } else {
        (n_f.sqrt() * n_f.ln(), "sqrt(n) ln(n)")
    }
}

fn k_label(multiplier: f64, formula: &str) -> String {
    if multiplier == 1.0 {
        format!("K ~ {}", formula)
    } else {
        format!("K ~ {:.1} {}", multiplier, formula)
    }
}

/// Runs `optimizer` once per repetition on `problem` of size `n`.
fn run_repetitions(
    optimizer: &mut dyn Optimizer,
    problem: Problem,
    n: usize,
    config: &ExperimentConfig,
) -> Result<Vec<RunResult>> {
    let budget = problem.budget(n)?;
    (0..config.repetitions)
        .map(|r| {
            let seed = config.base_seed.wrapping_add(r as u64);
            let mut rng = RandomNumberGenerator::from_seed(seed);
            optimizer.run(&problem, &budget, &mut rng)
        })
        .collect()
}

/// Runs every configured algorithm and returns the records in output order.
pub fn collect_records(config: &ExperimentConfig) -> Result<Vec<RunRecord>> {
    config.validate()?;
    let mut records = Vec::new();

    let mut push = |algorithm: &str,
                    problem: Problem,
                    n: usize,
                    param: f64,
                    label: &str,
                    results: Vec<RunResult>| {
        records.extend(results.into_iter().enumerate().map(|(repetition, result)| {
            RunRecord {
                algorithm: algorithm.to_string(),
                problem,
                n,
                param,
                repetition,
                result,
                label: label.to_string(),
            }
        }));
    };

    for &problem in &config.problems {
        for &n in &config.sizes {
            info!(%problem, n, "starting configuration");

            let mut ea = OnePlusOneEa::new(n)?;
            let results = run_repetitions(&mut ea, problem, n, config)?;
            push(ea.name(), problem, n, 0.0, "Standard", results);

            let (base, formula) = k_base(problem, n);
            for &multiplier in &config.k_multipliers {
                let k = base * multiplier;
                let mut cga = Cga::new(CgaOptions::new(n, k))?;
                let results = run_repetitions(&mut cga, problem, n, config)?;
                push(cga.name(), problem, n, k, &k_label(multiplier, formula), results);
            }

            for &eps in &config.epsilons {
                let label = format!("eps={:.1}", eps);
                for (history, algorithm) in [
                    (HistoryKind::Simple, "sig-cGA-Simp"),
                    (HistoryKind::Doubling, "sig-cGA-Orig"),
                ] {
                    let mut sig = SigCga::new(SigCgaOptions::new(n, eps, history))?;
                    let results = run_repetitions(&mut sig, problem, n, config)?;
                    push(algorithm, problem, n, eps, &label, results);
                }
            }
        }
    }

    Ok(records)
}

/// Runs the experiment and writes the CSV table to `writer`.
pub fn run_experiment<W: Write>(config: &ExperimentConfig, writer: &mut W) -> Result<()> {
    let records = collect_records(config)?;
    writeln!(writer, "{}", CSV_HEADER)?;
    for record in &records {
        writeln!(writer, "{}", record.to_csv_row())?;
    }
    info!(rows = records.len(), "experiment finished");
    Ok(())
}
