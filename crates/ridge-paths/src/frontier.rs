//! Min-priority frontier of discovered-but-unexpanded search nodes.
//!
//! Supports insert and extract-minimum only; there is no decrease-key.
//! Equal priorities are served in insertion order, so identical inputs
//! always expand nodes in the same sequence.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::SearchError;

/// A heap entry. Ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// priority first, and among equal priorities the earliest insertion.
#[derive(Debug)]
struct FrontierEntry<T> {
    priority: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Best-first frontier keyed by an `f64` priority.
#[derive(Debug)]
pub struct Frontier<T> {
    heap: BinaryHeap<FrontierEntry<T>>,
    next_seq: u64,
    high_water: usize,
}

impl<T> Frontier<T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            high_water: 0,
        }
    }

    /// Queue `item` with the given priority.
    pub fn insert(&mut self, item: T, priority: f64) {
        self.heap.push(FrontierEntry {
            priority,
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove and return the item with the smallest priority.
    pub fn extract_min(&mut self) -> Result<T, SearchError> {
        self.heap
            .pop()
            .map(|e| e.item)
            .ok_or(SearchError::EmptyFrontier)
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_lowest_priority_first() {
        let mut f = Frontier::new();
        f.insert("b", 10.0);
        f.insert("a", 5.0);
        f.insert("c", 15.0);
        assert_eq!(f.extract_min(), Ok("a"));
        assert_eq!(f.extract_min(), Ok("b"));
        assert_eq!(f.extract_min(), Ok("c"));
    }

    #[test]
    fn ties_are_first_in_first_out() {
        let mut f = Frontier::new();
        for i in 0..6 {
            f.insert(i, 1.0);
        }
        f.insert(99, 0.5);
        assert_eq!(f.extract_min(), Ok(99));
        for i in 0..6 {
            assert_eq!(f.extract_min(), Ok(i), "tie must pop in insertion order");
        }
    }

    #[test]
    fn empty_frontier_reports_error() {
        let mut f: Frontier<u32> = Frontier::default();
        assert!(f.is_empty());
        assert_eq!(f.extract_min(), Err(SearchError::EmptyFrontier));

        f.insert(1, 0.0);
        assert_eq!(f.extract_min(), Ok(1));
        assert_eq!(f.extract_min(), Err(SearchError::EmptyFrontier));
    }

    #[test]
    fn high_water_tracks_max_size() {
        let mut f = Frontier::new();
        f.insert(0, 1.0);
        f.insert(1, 2.0);
        f.insert(2, 3.0);
        assert_eq!(f.high_water(), 3);

        let _ = f.extract_min();
        assert_eq!(f.len(), 2);
        assert_eq!(f.high_water(), 3, "high water should not decrease on pop");
    }

    #[test]
    fn infinite_priorities_sort_last() {
        let mut f = Frontier::new();
        f.insert("inf", f64::INFINITY);
        f.insert("big", 1e300);
        assert_eq!(f.extract_min(), Ok("big"));
        assert_eq!(f.extract_min(), Ok("inf"));
    }
}
