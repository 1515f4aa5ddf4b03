//! Indexed binary min-heap with decrease-key, keyed by dense ids.
//!
//! Prim's engine keeps one entry per vertex and lowers its priority as
//! cheaper connecting edges are discovered. A position table maps each key
//! to its heap slot so `decrease_key` and `contains` are direct lookups.
//! Equal priorities leave the heap in insertion order.

use std::cmp::Ordering;

use crate::graph::{EdgeId, edge_order};

const ABSENT: usize = usize::MAX;

/// A totally ordered queue priority.
pub trait Priority: Copy {
    /// Compares two priorities; `Less` is extracted first.
    fn compare(&self, other: &Self) -> Ordering;
}

impl Priority for f64 {
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// `(weight, EdgeId)`, the edge order shared by the spanning-tree engines.
impl Priority for (f64, EdgeId) {
    fn compare(&self, other: &Self) -> Ordering {
        edge_order(*self, *other)
    }
}

#[derive(Clone, Copy, Debug)]
struct Slot<P> {
    key: usize,
    priority: P,
    stamp: u64,
}

impl<P: Priority> Slot<P> {
    fn precedes(&self, other: &Self) -> bool {
        self.priority
            .compare(&other.priority)
            .then_with(|| self.stamp.cmp(&other.stamp))
            == Ordering::Less
    }
}

/// Min-priority queue over keys in `[0, capacity)`.
///
/// # Examples
/// ```
/// use spanwood_core::IndexedMinQueue;
///
/// let mut queue = IndexedMinQueue::with_capacity(3);
/// queue.insert(0, 5.0);
/// queue.insert(1, 2.0);
/// queue.insert(2, 2.0);
/// assert!(queue.decrease_key(0, 1.0));
/// assert_eq!(queue.extract_min(), Some((0, 1.0)));
/// assert_eq!(queue.extract_min(), Some((1, 2.0)));
/// assert_eq!(queue.extract_min(), Some((2, 2.0)));
/// assert!(queue.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct IndexedMinQueue<P = f64> {
    heap: Vec<Slot<P>>,
    positions: Vec<usize>,
    next_stamp: u64,
}

impl<P: Priority> IndexedMinQueue<P> {
    /// Creates an empty queue accepting keys below `capacity`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: vec![ABSENT; capacity],
            next_stamp: 0,
        }
    }

    /// Returns the number of queued entries.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.heap.len() }

    /// Returns `true` when nothing is queued.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.heap.is_empty() }

    /// Returns `true` when `key` is queued. Keys beyond capacity are never
    /// queued.
    #[must_use]
    pub fn contains(&self, key: usize) -> bool {
        self.positions.get(key).is_some_and(|&slot| slot != ABSENT)
    }

    /// Returns the current priority of `key`, if queued.
    #[must_use]
    pub fn priority(&self, key: usize) -> Option<P> {
        let slot = *self.positions.get(key)?;
        self.heap.get(slot).map(|entry| entry.priority)
    }

    /// Queues `key` with `priority`.
    ///
    /// # Panics
    /// Panics when `key` is beyond capacity or already queued.
    pub fn insert(&mut self, key: usize, priority: P) {
        assert!(
            key < self.positions.len(),
            "key {key} exceeds queue capacity {}",
            self.positions.len()
        );
        assert!(!self.contains(key), "key {key} is already queued");

        let slot = self.heap.len();
        self.heap.push(Slot {
            key,
            priority,
            stamp: self.next_stamp,
        });
        self.next_stamp += 1;
        self.positions[key] = slot;
        self.sift_up(slot);
    }

    /// Removes and returns the entry with the lowest priority; among equal
    /// priorities the earliest inserted wins.
    pub fn extract_min(&mut self) -> Option<(usize, P)> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap_slots(0, last);
        let min = self.heap.pop()?;
        self.positions[min.key] = ABSENT;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((min.key, min.priority))
    }

    /// Lowers the priority of a queued `key`.
    ///
    /// Returns `true` when the priority changed, and `false` when `key` is
    /// not queued or `priority` is not strictly lower than the current one.
    /// The entry keeps its original insertion rank for tie-breaking.
    pub fn decrease_key(&mut self, key: usize, priority: P) -> bool {
        let Some(&slot) = self.positions.get(key) else {
            return false;
        };
        if slot == ABSENT || priority.compare(&self.heap[slot].priority) != Ordering::Less {
            return false;
        }
        self.heap[slot].priority = priority;
        self.sift_up(slot);
        true
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.heap[slot].precedes(&self.heap[parent]) {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.heap[left].precedes(&self.heap[smallest]) {
                smallest = left;
            }
            if right < len && self.heap[right].precedes(&self.heap[smallest]) {
                smallest = right;
            }
            if smallest == slot {
                return;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].key] = a;
        self.positions[self.heap[b].key] = b;
    }
}
