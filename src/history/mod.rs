//! # History
//!
//! Each bit position keeps a compressed record of the bit values the winning
//! candidates had there. The record is exposed as a sequence of disjoint
//! windows, newest first, each summarized by a [`HistorySummary`].
//!
//! Two variants are available and selected through [`HistoryKind`]:
//!
//! - [`SimpleHistory`] keeps a single window covering everything since the
//!   last wipe.
//! - [`DoublingHistory`] keeps a chain of windows whose spans double towards
//!   the past, giving the significance test access to recent windows at
//!   every scale with O(1) amortized insertion cost.
//!
//! ## Example
//!
//! ```rust
//! use sigcga::history::{History, HistoryKind};
//!
//! let mut history = History::new(HistoryKind::Doubling, 50);
//! for bit in [1, 1, 0, 1, 1] {
//!     history.add(bit);
//! }
//! let windows = history.windows();
//! assert_eq!(windows.iter().map(|w| w.ones).sum::<u64>(), 4);
//! ```

pub mod doubling;
pub mod simple;

pub use doubling::DoublingHistory;
pub use simple::SimpleHistory;

/// Counts of one contiguous window of observed bits.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistorySummary {
    /// Number of 1-bits observed in the window.
    pub ones: u64,
    /// Number of 0-bits observed in the window.
    pub zeros: u64,
    /// Number of bits observed in the window; always `ones + zeros`.
    pub span: u64,
}

impl HistorySummary {
    pub fn new(ones: u64, zeros: u64) -> Self {
        Self {
            ones,
            zeros,
            span: ones + zeros,
        }
    }

    pub(crate) fn record(&mut self, bit: u8) {
        self.span += 1;
        if bit != 0 {
            self.ones += 1;
        } else {
            self.zeros += 1;
        }
    }

    pub(crate) fn absorb(&mut self, other: &HistorySummary) {
        self.ones += other.ones;
        self.zeros += other.zeros;
        self.span += other.span;
    }
}

/// Selects which history variant an optimizer uses.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryKind {
    /// A single ever-growing window.
    Simple,
    /// A chain of windows of doubling size.
    #[default]
    Doubling,
}

/// The per-position history, dispatched by variant.
#[derive(Debug, Clone, PartialEq)]
pub enum History {
    Simple(SimpleHistory),
    Doubling(DoublingHistory),
}

impl History {
    /// Creates an empty history of the given kind for a problem of size `n`.
    pub fn new(kind: HistoryKind, n: usize) -> Self {
        match kind {
            HistoryKind::Simple => History::Simple(SimpleHistory::new()),
            HistoryKind::Doubling => History::Doubling(DoublingHistory::new(n)),
        }
    }

    pub fn kind(&self) -> HistoryKind {
        match self {
            History::Simple(_) => HistoryKind::Simple,
            History::Doubling(_) => HistoryKind::Doubling,
        }
    }

    /// Records one more observed bit.
    pub fn add(&mut self, bit: u8) {
        match self {
            History::Simple(h) => h.add(bit),
            History::Doubling(h) => h.add(bit),
        }
    }

    /// Discards everything recorded so far.
    pub fn wipe(&mut self) {
        match self {
            History::Simple(h) => h.wipe(),
            History::Doubling(h) => h.wipe(),
        }
    }

    /// A snapshot of the current windows, newest first.
    pub fn windows(&self) -> Vec<HistorySummary> {
        self.iter().collect()
    }

    /// Iterates over the current windows, newest first, without allocating.
    pub fn iter(&self) -> Windows<'_> {
        match self {
            History::Simple(h) => Windows::Simple(Some(h.summary())),
            History::Doubling(h) => Windows::Doubling(h.iter()),
        }
    }
}

/// Iterator over the windows of a [`History`], newest first.
#[derive(Debug, Clone)]
pub enum Windows<'a> {
    Simple(Option<HistorySummary>),
    Doubling(doubling::Iter<'a>),
}

impl Iterator for Windows<'_> {
    type Item = HistorySummary;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Windows::Simple(summary) => summary.take(),
            Windows::Doubling(iter) => iter.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RandomNumberGenerator;

    fn random_bits(count: usize, seed: u64) -> Vec<u8> {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        (0..count).map(|_| u8::from(rng.uniform() < 0.5)).collect()
    }

    #[test]
    fn test_summary_new() {
        let s = HistorySummary::new(3, 4);
        assert_eq!(s.span, 7);
    }

    #[test]
    fn test_kind_roundtrip() {
        assert_eq!(History::new(HistoryKind::Simple, 10).kind(), HistoryKind::Simple);
        assert_eq!(
            History::new(HistoryKind::Doubling, 10).kind(),
            HistoryKind::Doubling
        );
    }

    #[test]
    fn test_triple_invariant_and_conservation() {
        for kind in [HistoryKind::Simple, HistoryKind::Doubling] {
            let mut history = History::new(kind, 100);
            let bits = random_bits(3000, 17);
            let mut ones_added = 0;
            for (i, &bit) in bits.iter().enumerate() {
                history.add(bit);
                ones_added += bit as u64;

                let windows = history.windows();
                assert!(windows.iter().all(|w| w.ones + w.zeros == w.span));
                assert_eq!(windows.iter().map(|w| w.ones).sum::<u64>(), ones_added);
                assert_eq!(windows.iter().map(|w| w.span).sum::<u64>(), i as u64 + 1);
            }
        }
    }

    #[test]
    fn test_wipe_idempotent() {
        for kind in [HistoryKind::Simple, HistoryKind::Doubling] {
            let fresh = History::new(kind, 64);
            let mut history = History::new(kind, 64);
            for bit in random_bits(500, 2) {
                history.add(bit);
            }
            history.wipe();
            let once = history.clone();
            history.wipe();
            assert_eq!(history, once);
            assert_eq!(history, fresh);
        }
    }

    #[test]
    fn test_windows_is_a_snapshot() {
        let mut history = History::new(HistoryKind::Doubling, 20);
        for bit in random_bits(40, 8) {
            history.add(bit);
        }
        let before = history.windows();
        let again = history.windows();
        assert_eq!(before, again);
        history.add(1);
        assert_ne!(before, history.windows());
    }

    #[test]
    fn test_simple_has_one_window() {
        let mut history = History::new(HistoryKind::Simple, 20);
        assert_eq!(history.windows(), vec![HistorySummary::default()]);
        history.add(1);
        history.add(0);
        assert_eq!(history.windows(), vec![HistorySummary::new(1, 1)]);
    }
}
