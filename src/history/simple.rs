use super::HistorySummary;

/// A history with a single window covering every bit since the last wipe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleHistory {
    summary: HistorySummary,
}

impl SimpleHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, bit: u8) {
        self.summary.record(bit);
    }

    pub fn wipe(&mut self) {
        self.summary = HistorySummary::default();
    }

    pub fn summary(&self) -> HistorySummary {
        self.summary
    }
}
