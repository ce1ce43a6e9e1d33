//! # Significance test
//!
//! Decides whether the bits recorded in one history window deviate from the
//! current frequency by more than a Chernoff-style margin. Only then does the
//! significance-based cGA move a frequency, and it moves it all the way to
//! the nearer boundary.
//!
//! For a window with `m` observed bits, the margin for an expected rate `q`
//! is `eps * max(sqrt(m * q * ln n), ln n)`.
//!
//! ## Example
//!
//! ```rust
//! use sigcga::history::HistorySummary;
//! use sigcga::significance::{significance, Decision};
//!
//! let ln_n = (50f64).ln();
//! let window = HistorySummary::new(40, 10);
//! assert_eq!(significance(0.5, &window, 1.0, ln_n), Decision::Increase);
//! assert_eq!(significance(0.5, &window, 5.0, ln_n), Decision::Stay);
//! ```

use crate::history::HistorySummary;

/// Outcome of a significance test.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Significantly many 1-bits: move the frequency to its upper bound.
    Increase,
    /// Significantly many 0-bits: move the frequency to its lower bound.
    Decrease,
    /// No significant deviation.
    Stay,
}

/// Deviation margin for a window of `span` bits with expected rate `q`.
pub fn deviation(span: u64, q: f64, eps: f64, ln_n: f64) -> f64 {
    eps * (span as f64 * q * ln_n).sqrt().max(ln_n)
}

/// Tests a window against the frequency `p`.
///
/// The `Increase` branch is checked first, which matters only at `p == 0.5`
/// where both branches apply.
pub fn significance(p: f64, window: &HistorySummary, eps: f64, ln_n: f64) -> Decision {
    let m = window.span as f64;

    if p <= 0.5 && window.ones as f64 >= m * p + deviation(window.span, p, eps, ln_n) {
        return Decision::Increase;
    }

    let q = 1.0 - p;
    if p >= 0.5 && window.zeros as f64 >= m * q + deviation(window.span, q, eps, ln_n) {
        return Decision::Decrease;
    }

    Decision::Stay
}
