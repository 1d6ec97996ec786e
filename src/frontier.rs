//! Minimum-priority frontiers for best-first search.
//!
//! The solver only needs `insert` and `extract_min`; `Frontier` captures that
//! contract so the search loop does not depend on a particular queue.
//! `HeapFrontier` is the binary-heap implementation used by default.
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

/// An item that carries its own search priority (lower is better).
pub trait Prioritized {
    fn priority(&self) -> u32;
}

impl<T: Prioritized> Prioritized for Rc<T> {
    fn priority(&self) -> u32 {
        (**self).priority()
    }
}

/// Open set of a best-first search.
pub trait Frontier<T: Prioritized> {
    /// Adds `item` to the frontier.
    fn insert(&mut self, item: T);

    /// Removes and returns the item with the lowest priority, or `None` if empty.
    fn extract_min(&mut self) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct Entry<T> {
    priority: u32,
    sequence: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reversed so that `BinaryHeap` (a max-heap) pops the lowest priority first,
/// and among equal priorities the earliest insertion.
impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Binary-heap frontier with first-in, first-out tie-breaking.
///
/// Both operations are O(log n). The priority of each item is read once at
/// insertion; items must not change priority while queued.
pub struct HeapFrontier<T> {
    heap: BinaryHeap<Entry<T>>,
    inserted: u64,
}

impl<T> HeapFrontier<T> {
    pub fn new() -> Self {
        HeapFrontier {
            heap: BinaryHeap::new(),
            inserted: 0,
        }
    }
}

impl<T> Default for HeapFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Prioritized> Frontier<T> for HeapFrontier<T> {
    fn insert(&mut self, item: T) {
        let entry = Entry {
            priority: item.priority(),
            sequence: self.inserted,
            item,
        };
        self.inserted += 1;
        self.heap.push(entry);
    }

    fn extract_min(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
