//! Min-priority queue used by the shortest-path search

use crate::error::{GraphError, GraphResult};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A min-priority queue over `(item, priority)` pairs.
///
/// Backed by a binary heap. Entries with equal priority come out in the
/// order they were inserted; callers should not rely on that beyond
/// determinism. Duplicate items may coexist, the queue never deduplicates.
#[derive(Debug)]
pub struct MinPriorityQueue<T, P: Ord> {
    heap: BinaryHeap<Reverse<Entry<T, P>>>,
    next_seq: u64,
}

#[derive(Debug)]
struct Entry<T, P> {
    priority: P,
    seq: u64,
    item: T,
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

impl<T, P: Ord> MinPriorityQueue<T, P> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Add `item` with `priority`. O(log n).
    pub fn insert(&mut self, item: T, priority: P) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.heap.push(Reverse(Entry {
            priority,
            seq,
            item,
        }));
    }

    /// Remove and return the entry with the smallest priority.
    pub fn extract_min(&mut self) -> GraphResult<(T, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.priority))
            .ok_or(GraphError::EmptyQueue)
    }

    /// Smallest priority currently queued
    pub fn peek_priority(&self) -> Option<&P> {
        self.heap.peek().map(|Reverse(entry)| &entry.priority)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T, P: Ord> Default for MinPriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
