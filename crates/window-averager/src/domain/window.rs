//! Bounded, deduplicated, insertion-ordered number window

use std::collections::{HashSet, VecDeque};

/// Window contents captured around a single merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowMerge {
    /// Contents before the merge
    pub previous: Vec<i64>,
    /// Contents after the merge
    pub current: Vec<i64>,
}

/// Ordered set of recently accepted numbers for one category.
///
/// Holds at most `capacity` unique values. New unique arrivals are appended
/// at the back; overflow is evicted from the front (oldest first).
#[derive(Debug, Clone)]
pub struct NumberWindow {
    values: VecDeque<i64>,
    capacity: usize,
}

impl NumberWindow {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Fold `candidates` into the window and trim it back to capacity.
    ///
    /// Candidates already present (or repeated earlier in `candidates`) are
    /// skipped; survivors keep their relative order.
    pub fn merge(&mut self, candidates: &[i64]) -> WindowMerge {
        let previous = self.to_vec();

        let mut seen: HashSet<i64> = self.values.iter().copied().collect();
        for &candidate in candidates {
            if seen.insert(candidate) {
                self.values.push_back(candidate);
            }
        }

        if self.values.len() > self.capacity {
            let overflow = self.values.len() - self.capacity;
            self.values.drain(..overflow);
        }

        WindowMerge {
            previous,
            current: self.to_vec(),
        }
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.values.iter().copied().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
