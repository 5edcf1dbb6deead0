//! Best-first frontier (open list) with FIFO tie-breaking.
//!
//! Entries are ordered by ascending `f`; among equal `f`, earlier insertions
//! come out first. A monotonically increasing insertion sequence number is the
//! tie-break key, which gives the same observable order as a sorted list with
//! stable insertion while keeping push/pop at O(log n).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::SearchError;
use crate::node::{FrontierKey, SearchState};

/// A frontier entry wrapping a state with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f` first).
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    state: SearchState,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Priority-ordered open list. Owned by a single search call.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
    high_water: usize,
}

impl Frontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `state` behind every entry with `f <= state.f()`.
    pub fn insert(&mut self, state: SearchState) {
        let key = FrontierKey {
            f: state.f(),
            insertion_seq: self.next_seq,
        };
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            state,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove and return the lowest-`f` entry (oldest on ties).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyFrontier`] if the frontier is empty.
    pub fn extract_min(&mut self) -> Result<SearchState, SearchError> {
        self.heap
            .pop()
            .map(|e| e.state)
            .ok_or(SearchError::EmptyFrontier)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Current contents in extraction order.
    #[must_use]
    pub fn ordered(&self) -> Vec<SearchState> {
        let mut entries: Vec<&FrontierEntry> = self.heap.iter().collect();
        entries.sort_by(|a, b| a.key.0.cmp(&b.key.0));
        entries.into_iter().map(|e| e.state).collect()
    }
}
