//! # Optimizer options
//!
//! Configuration for the compact genetic algorithms. Options are plain data
//! built either directly or through a fluent builder; they are validated
//! when the optimizer is constructed.
//!
//! ## Example
//!
//! ```rust
//! use sigcga::history::HistoryKind;
//! use sigcga::optimizer::options::{CgaOptions, SigCgaOptions};
//!
//! let sig = SigCgaOptions::builder()
//!     .problem_size(100)
//!     .epsilon(5.0)
//!     .history(HistoryKind::Simple)
//!     .build();
//! assert_eq!(sig.get_epsilon(), 5.0);
//!
//! let cga = CgaOptions::new(100, 46.0);
//! assert_eq!(cga.get_k(), 46.0);
//! ```

use crate::history::HistoryKind;

/// Options for the significance-based cGA.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SigCgaOptions {
    problem_size: usize,
    epsilon: f64,
    history: HistoryKind,
}

impl SigCgaOptions {
    /// Creates a new `SigCgaOptions` instance with all parameters specified.
    ///
    /// # Arguments
    ///
    /// * `problem_size` - The number of bit positions, `n`.
    /// * `epsilon` - The sensitivity of the significance test.
    /// * `history` - Which history variant each position keeps.
    pub fn new(problem_size: usize, epsilon: f64, history: HistoryKind) -> Self {
        Self {
            problem_size,
            epsilon,
            history,
        }
    }

    pub fn get_problem_size(&self) -> usize {
        self.problem_size
    }

    /// Sensitivity of the significance test; larger values demand stronger evidence.
    pub fn get_epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the history variant each position keeps.
    pub fn get_history(&self) -> HistoryKind {
        self.history
    }

    /// Sets the problem size.
    pub fn set_problem_size(&mut self, problem_size: usize) {
        self.problem_size = problem_size;
    }

    /// Sets the significance sensitivity.
    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.epsilon = epsilon;
    }

    /// Sets the history variant.
    pub fn set_history(&mut self, history: HistoryKind) {
        self.history = history;
    }

    pub fn builder() -> SigCgaOptionsBuilder {
        SigCgaOptionsBuilder::default()
    }
}

impl Default for SigCgaOptions {
    fn default() -> Self {
        Self {
            problem_size: 100,
            epsilon: 1.0,
            history: HistoryKind::Doubling,
        }
    }
}

/// Builder for [`SigCgaOptions`].
#[derive(Debug, Clone, Default)]
pub struct SigCgaOptionsBuilder {
    problem_size: Option<usize>,
    epsilon: Option<f64>,
    history: Option<HistoryKind>,
}

impl SigCgaOptionsBuilder {
    pub fn problem_size(mut self, value: usize) -> Self {
        self.problem_size = Some(value);
        self
    }

    pub fn epsilon(mut self, value: f64) -> Self {
        self.epsilon = Some(value);
        self
    }

    pub fn history(mut self, value: HistoryKind) -> Self {
        self.history = Some(value);
        self
    }

    /// Builds the options, filling unset fields from [`SigCgaOptions::default`].
    pub fn build(self) -> SigCgaOptions {
        let defaults = SigCgaOptions::default();
        SigCgaOptions {
            problem_size: self.problem_size.unwrap_or(defaults.problem_size),
            epsilon: self.epsilon.unwrap_or(defaults.epsilon),
            history: self.history.unwrap_or(defaults.history),
        }
    }
}

/// Options for the plain cGA.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CgaOptions {
    problem_size: usize,
    k: f64,
}

impl CgaOptions {
    /// Creates a new `CgaOptions` instance with all parameters specified.
    ///
    /// # Arguments
    ///
    /// * `problem_size` - The number of bit positions, `n`.
    /// * `k` - The hypothetical population size.
    pub fn new(problem_size: usize, k: f64) -> Self {
        Self { problem_size, k }
    }

    pub fn get_problem_size(&self) -> usize {
        self.problem_size
    }

    /// Hypothetical population size; every frequency moves by at most `1/K` per generation.
    pub fn get_k(&self) -> f64 {
        self.k
    }

    /// Sets the problem size.
    pub fn set_problem_size(&mut self, problem_size: usize) {
        self.problem_size = problem_size;
    }

    /// Sets the hypothetical population size.
    pub fn set_k(&mut self, k: f64) {
        self.k = k;
    }

    pub fn builder() -> CgaOptionsBuilder {
        CgaOptionsBuilder::default()
    }
}

impl Default for CgaOptions {
    /// `K = sqrt(n) ln n` for the default `n = 100`.
    fn default() -> Self {
        let n = 100usize;
        Self {
            problem_size: n,
            k: (n as f64).sqrt() * (n as f64).ln(),
        }
    }
}

/// Builder for [`CgaOptions`].
#[derive(Debug, Clone, Default)]
pub struct CgaOptionsBuilder {
    problem_size: Option<usize>,
    k: Option<f64>,
}

impl CgaOptionsBuilder {
    pub fn problem_size(mut self, value: usize) -> Self {
        self.problem_size = Some(value);
        self
    }

    pub fn k(mut self, value: f64) -> Self {
        self.k = Some(value);
        self
    }

    /// Builds the options, filling unset fields from [`CgaOptions::default`].
    pub fn build(self) -> CgaOptions {
        let defaults = CgaOptions::default();
        CgaOptions {
            problem_size: self.problem_size.unwrap_or(defaults.problem_size),
            k: self.k.unwrap_or(defaults.k),
        }
    }
}
