//! Doubling history: a chain of windows kept in an index-addressed arena.
//!
//! The newest window absorbs observations in place until it spans
//! `min_size` bits. After that every observation opens a new window of span
//! 1 and triggers [`DoublingHistory::consolidate`], which merges windows of
//! equal span like carries in a binary counter. After each consolidation no
//! span occurs more than twice and spans are non-decreasing from newest to
//! oldest, so the chain holds O(log t) windows after t observations and each
//! insertion costs O(1) amortized.

use super::HistorySummary;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    summary: HistorySummary,
    next: Option<usize>,
}

/// Chain of windows of doubling span, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoublingHistory {
    nodes: Vec<Node>,
    head: usize,
    free: Vec<usize>,
    min_size: u64,
}

impl DoublingHistory {
    /// Creates a history for a problem of size `n`, batching the first
    /// `floor(ln n)` observations of each window (at least one).
    pub fn new(n: usize) -> Self {
        let min_size = (n as f64).ln().floor().max(1.0) as u64;
        Self::with_min_size(min_size)
    }

    /// Creates a history with an explicit batching size.
    pub fn with_min_size(min_size: u64) -> Self {
        Self {
            nodes: vec![Node {
                summary: HistorySummary::default(),
                next: None,
            }],
            head: 0,
            free: Vec::new(),
            min_size: min_size.max(1),
        }
    }

    pub fn min_size(&self) -> u64 {
        self.min_size
    }

    /// Number of windows currently in the chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false: the chain holds at least the (possibly empty) newest window.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn add(&mut self, bit: u8) {
        let head = &mut self.nodes[self.head].summary;
        if head.span < self.min_size {
            head.record(bit);
            return;
        }

        let mut summary = HistorySummary::default();
        summary.record(bit);
        self.head = self.alloc(Node {
            summary,
            next: Some(self.head),
        });
        self.consolidate();
    }

    pub fn wipe(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.nodes.push(Node {
            summary: HistorySummary::default(),
            next: None,
        });
        self.head = 0;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: Some(self.head),
        }
    }

    /// Merges the second of three consecutive equal-span windows into the
    /// first, walking from newest to oldest. A merged window stays current so
    /// that its doubled span can cascade into the next merge.
    fn consolidate(&mut self) {
        let mut curr = self.head;
        let mut seen_pair = false;

        while let Some(next) = self.nodes[curr].next {
            if self.nodes[curr].summary.span == self.nodes[next].summary.span {
                if seen_pair {
                    let absorbed = self.nodes[next].summary;
                    self.nodes[curr].summary.absorb(&absorbed);
                    self.nodes[curr].next = self.nodes[next].next;
                    self.release(next);
                    seen_pair = false;
                    continue;
                }
                seen_pair = true;
            } else {
                seen_pair = false;
            }
            curr = next;
        }
    }

    fn alloc(&mut self, node: Node) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, slot: usize) {
        self.nodes[slot].next = None;
        self.free.push(slot);
    }
}

/// Iterator over the windows of a [`DoublingHistory`], newest first.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    nodes: &'a [Node],
    cursor: Option<usize>,
}

impl Iterator for Iter<'_> {
    type Item = HistorySummary;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.cursor?];
        self.cursor = node.next;
        Some(node.summary)
    }
}
