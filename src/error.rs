//! # Error Types
//!
//! This module defines the error type shared by every optimizer, the history
//! structures and the experiment driver.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use sigcga::error::{OptimizerError, Result};
//!
//! fn check_size(n: usize) -> Result<()> {
//!     if n <= 1 {
//!         return Err(OptimizerError::Configuration(
//!             "Problem size must be greater than 1".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_size(1).is_err());
//! assert!(check_size(10).is_ok());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use sigcga::error::{OptimizerError, OptionExt};
//!
//! fn best_score(scores: &[f64]) -> sigcga::error::Result<f64> {
//!     scores
//!         .iter()
//!         .cloned()
//!         .reduce(f64::max)
//!         .ok_or_else_optimizer(|| OptimizerError::Other("no scores".to_string()))
//! }
//!
//! assert_eq!(best_score(&[1.0, 3.0, 2.0]).unwrap(), 3.0);
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while configuring or running an optimizer.
#[derive(Error, Debug)]
pub enum OptimizerError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a fitness evaluation yields an unusable score.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when NaN or infinity values are encountered in a parameter.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for optimizer operations.
pub type Result<T> = std::result::Result<T, OptimizerError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use sigcga::error::ResultExt;
///
/// fn parse_size(raw: &str) -> sigcga::error::Result<usize> {
///     raw.parse::<usize>().context("Invalid problem size")
/// }
///
/// assert!(parse_size("12").is_ok());
/// assert!(parse_size("twelve").is_err());
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to an `OptimizerError` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| OptimizerError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T>` using `err_fn` to build the error.
    fn ok_or_else_optimizer<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> OptimizerError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_optimizer<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> OptimizerError,
    {
        self.ok_or_else(err_fn)
    }
}
