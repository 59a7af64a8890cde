//! Min-priority frontier for the weighted searches.
//!
//! Entries are ordered by `(priority, seq)`: lower priorities are popped
//! first, and among equal priorities the entry pushed earlier wins (FIFO).

use std::collections::BinaryHeap;

/// A cell waiting on the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    pub(crate) priority: u32,
    /// Monotonically increasing insertion counter used to break ties.
    pub(crate) seq: u64,
    pub(crate) idx: usize,
    /// Accumulated cost when the entry was pushed.
    pub(crate) cost: u32,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (priority, seq) first.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of [`FrontierEntry`] values with its insertion counter.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, idx: usize, cost: u32, priority: u32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(FrontierEntry {
            priority,
            seq,
            idx,
            cost,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_first() {
        let mut f = Frontier::new();
        f.push(0, 5, 5);
        f.push(1, 1, 1);
        f.push(2, 3, 3);
        let order: Vec<_> = std::iter::from_fn(|| f.pop()).map(|e| e.idx).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn equal_priorities_are_fifo() {
        let mut f = Frontier::new();
        for idx in [7, 3, 9, 1] {
            f.push(idx, 2, 2);
        }
        f.push(4, 0, 1);
        assert_eq!(f.len(), 5);
        let order: Vec<_> = std::iter::from_fn(|| f.pop()).map(|e| e.idx).collect();
        assert_eq!(order, vec![4, 7, 3, 9, 1]);
    }

    #[test]
    fn sequence_is_strictly_increasing() {
        let mut f = Frontier::new();
        f.push(0, 0, 0);
        f.push(1, 0, 0);
        let a = f.pop().unwrap();
        let b = f.pop().unwrap();
        assert!(a.seq < b.seq);
    }
}
