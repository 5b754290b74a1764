//! Array-backed binary heap with optional priorities
//!
//! A binary max-heap stored in a `Vec` using the implicit tree layout:
//! the node at index `i` has its parent at `(i - 1) / 2` and its children at
//! `2i + 1` and `2i + 2`. Node identity is the index, so restructuring is a
//! sequence of `Vec::swap` calls.
//!
//! Each entry is stamped with a per-queue insertion sequence number. The
//! ranking rule (see [`PriorityQueue`]) uses it to serve equal priorities,
//! and entries without a priority, in insertion order.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `insert`          | O(log n)   |
//! | `extract_max`     | O(log n)   |
//! | `peek`            | O(1)       |
//! | `size`            | O(1)       |
//! | `is_heap_ordered` | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use heap_queue::HeapQueue;
//!
//! let mut queue = HeapQueue::new();
//! queue.insert("a", Some(5));
//! queue.insert("b", None);
//! queue.insert("c", Some(5));
//! queue.insert("d", Some(9));
//!
//! assert_eq!(queue.extract_max(), Ok("d"));
//! assert_eq!(queue.extract_max(), Ok("a"));
//! assert_eq!(queue.extract_max(), Ok("c"));
//! assert_eq!(queue.extract_max(), Ok("b"));
//! assert!(queue.extract_max().is_err());
//! ```

use crate::entry::{Entry, EntryRef};
use crate::traits::{PriorityQueue, QueueError, Result};
use std::fmt;
use std::iter::FusedIterator;
use std::slice;

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right(index: usize) -> usize {
    2 * index + 2
}

/// A binary max-heap priority queue
///
/// Stores values with an optional priority and always yields the
/// highest-ranked value first. Entries with a priority outrank entries
/// without one; ties are served oldest first.
///
/// The queue performs no internal synchronization. Wrap it in a `Mutex` to
/// share one instance between threads.
pub struct HeapQueue<V, P: Ord> {
    /// Entries in implicit binary tree layout
    entries: Vec<Entry<V, P>>,
    /// Sequence number handed to the next inserted entry
    next_sequence: u64,
}

impl<V, P: Ord> HeapQueue<V, P> {
    /// Creates a new empty queue
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_sequence: 0,
        }
    }

    /// Creates a new empty queue with room for `capacity` entries
    ///
    /// The capacity is only a pre-allocation hint; the queue still grows
    /// past it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    /// Reserves room for at least `additional` more entries
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    /// Returns the number of entries the queue can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns the number of entries in the queue
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of entries in the queue
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the queue holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts a value with an optional priority
    ///
    /// The new entry is appended as the last leaf and moved up past every
    /// ancestor it outranks.
    pub fn insert(&mut self, value: V, priority: Option<P>) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.entries.push(Entry::new(value, priority, sequence));
        let index = self.sift_up(self.entries.len() - 1);

        tracing::trace!(sequence, index, len = self.entries.len(), "inserted entry");
        self.check_invariants();
    }

    /// Returns the highest-ranked value without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue holds no entries.
    pub fn peek(&self) -> Result<&V> {
        self.entries
            .first()
            .map(|entry| &entry.value)
            .ok_or(QueueError::EmptyQueue)
    }

    /// Removes and returns the highest-ranked value
    ///
    /// The last leaf replaces the root and is moved down until no child
    /// outranks it.
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue holds no entries.
    pub fn extract_max(&mut self) -> Result<V> {
        if self.entries.is_empty() {
            tracing::debug!("extract_max on empty queue");
            return Err(QueueError::EmptyQueue);
        }

        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let root = self.entries.pop().ok_or(QueueError::EmptyQueue)?;

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        tracing::trace!(
            sequence = root.sequence,
            len = self.entries.len(),
            "extracted entry"
        );
        self.check_invariants();
        Ok(root.value)
    }

    /// Checks that no entry is outranked by one of its children
    ///
    /// Intended for tests and debugging; walks the whole array.
    pub fn is_heap_ordered(&self) -> bool {
        (1..self.entries.len()).all(|index| {
            !self.entries[index].outranks(&self.entries[parent(index)])
        })
    }

    /// Returns an iterator over the entries in array (heap) order
    ///
    /// The order is the internal tree layout, not extraction order. Call
    /// `iter` again, or clone the iterator, to restart the traversal.
    pub fn iter(&self) -> Iter<'_, V, P> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Consumes the queue and returns its values in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<V> {
        let mut sorted = Vec::with_capacity(self.entries.len());
        while !self.entries.is_empty() {
            match self.extract_max() {
                Ok(value) => sorted.push(value),
                Err(_) => break,
            }
        }
        sorted
    }

    /// Move entry at index up while it outranks its parent; returns its final index
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent_index = parent(index);
            if self.entries[index].outranks(&self.entries[parent_index]) {
                self.entries.swap(index, parent_index);
                index = parent_index;
            } else {
                break;
            }
        }
        index
    }

    /// Move entry at index down while one of its children outranks it
    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left_index = left(index);
            let right_index = right(index);
            let mut highest = index;

            if left_index < len && self.entries[left_index].outranks(&self.entries[highest]) {
                highest = left_index;
            }
            if right_index < len && self.entries[right_index].outranks(&self.entries[highest]) {
                highest = right_index;
            }

            if highest != index {
                self.entries.swap(index, highest);
                index = highest;
            } else {
                break;
            }
        }
    }

    #[inline]
    fn check_invariants(&self) {
        #[cfg(feature = "verify-invariants")]
        debug_assert!(
            self.is_heap_ordered(),
            "heap order violated with {} entries",
            self.entries.len()
        );
    }
}

impl<V, P: Ord> PriorityQueue<V, P> for HeapQueue<V, P> {
    fn insert(&mut self, value: V, priority: Option<P>) {
        HeapQueue::insert(self, value, priority)
    }

    fn peek(&self) -> Result<&V> {
        HeapQueue::peek(self)
    }

    fn extract_max(&mut self) -> Result<V> {
        HeapQueue::extract_max(self)
    }

    fn size(&self) -> usize {
        HeapQueue::size(self)
    }

    fn is_empty(&self) -> bool {
        HeapQueue::is_empty(self)
    }
}

impl<V, P: Ord> Default for HeapQueue<V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug, P: Ord + fmt::Debug> fmt::Debug for HeapQueue<V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapQueue")
            .field("entries", &self.entries)
            .field("next_sequence", &self.next_sequence)
            .finish()
    }
}

impl<V, P: Ord> Extend<(V, Option<P>)> for HeapQueue<V, P> {
    fn extend<I: IntoIterator<Item = (V, Option<P>)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (value, priority) in iter {
            self.insert(value, priority);
        }
    }
}

impl<V, P: Ord> FromIterator<(V, Option<P>)> for HeapQueue<V, P> {
    fn from_iter<I: IntoIterator<Item = (V, Option<P>)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, V, P: Ord> IntoIterator for &'a HeapQueue<V, P> {
    type Item = EntryRef<'a, V, P>;
    type IntoIter = Iter<'a, V, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over queue entries in array order
///
/// Created by [`HeapQueue::iter`].
pub struct Iter<'a, V, P> {
    inner: slice::Iter<'a, Entry<V, P>>,
}

impl<'a, V, P> Iterator for Iter<'a, V, P> {
    type Item = EntryRef<'a, V, P>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(EntryRef::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, P> ExactSizeIterator for Iter<'_, V, P> {}

impl<V, P> FusedIterator for Iter<'_, V, P> {}

impl<V, P> Clone for Iter<'_, V, P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<V: fmt::Debug, P: fmt::Debug> fmt::Debug for Iter<'_, V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_arithmetic() {
        for index in 1..64 {
            let p = parent(index);
            assert!(left(p) == index || right(p) == index);
        }
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(5), 2);
        assert_eq!(parent(6), 2);
    }

    #[test]
    fn test_basic_operations() {
        let mut queue = HeapQueue::new();

        assert!(queue.is_empty());
        assert_eq!(queue.size(), 0);

        queue.insert("three", Some(3));
        queue.insert("one", Some(1));
        queue.insert("two", Some(2));

        assert!(!queue.is_empty());
        assert_eq!(queue.size(), 3);
        assert_eq!(queue.peek(), Ok(&"three"));

        assert_eq!(queue.extract_max(), Ok("three"));
        assert_eq!(queue.extract_max(), Ok("two"));
        assert_eq!(queue.extract_max(), Ok("one"));
        assert_eq!(queue.extract_max(), Err(QueueError::EmptyQueue));
    }

    #[test]
    fn test_duplicate_priorities_fifo() {
        let mut queue = HeapQueue::new();

        queue.insert("a", Some(1));
        queue.insert("b", Some(1));
        queue.insert("c", Some(1));

        assert_eq!(queue.extract_max(), Ok("a"));
        assert_eq!(queue.extract_max(), Ok("b"));
        assert_eq!(queue.extract_max(), Ok("c"));
    }

    #[test]
    fn test_sequence_counts_insertions_only() {
        let mut queue = HeapQueue::new();
        for i in 0..10 {
            queue.insert(i, Some(10 - i));
        }
        for _ in 0..5 {
            queue.extract_max().unwrap();
        }
        assert_eq!(queue.next_sequence, 10);

        let mut sequences: Vec<u64> = queue.entries.iter().map(|e| e.sequence).collect();
        sequences.sort_unstable();
        assert_eq!(sequences, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_left_child_only() {
        let mut queue = HeapQueue::new();
        queue.insert("root", Some(10));
        queue.insert("left", Some(5));
        queue.insert("right", Some(1));

        // Leaves root with a single left child
        assert_eq!(queue.extract_max(), Ok("root"));
        assert_eq!(queue.size(), 2);
        assert!(queue.is_heap_ordered());
        assert_eq!(queue.peek(), Ok(&"left"));
        assert_eq!(queue.extract_max(), Ok("left"));
        assert_eq!(queue.extract_max(), Ok("right"));
    }

    #[test]
    fn test_ascending_insertion() {
        let mut queue = HeapQueue::new();

        for i in 0..100 {
            queue.insert(i, Some(i));
            assert!(queue.is_heap_ordered());
        }

        for i in (0..100).rev() {
            assert_eq!(queue.extract_max(), Ok(i));
            assert!(queue.is_heap_ordered());
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut queue = HeapQueue::new();

        for i in (0..100).rev() {
            queue.insert(i, Some(i));
        }

        for i in (0..100).rev() {
            assert_eq!(queue.extract_max(), Ok(i));
        }
    }

    #[test]
    fn test_is_heap_ordered_detects_violation() {
        let mut queue = HeapQueue::new();
        queue.insert("high", Some(9));
        queue.insert("low", Some(1));
        assert!(queue.is_heap_ordered());

        queue.entries.swap(0, 1);
        assert!(!queue.is_heap_ordered());
    }

    #[test]
    fn test_iter_is_restartable() {
        let queue: HeapQueue<&str, i32> =
            vec![("a", Some(1)), ("b", None), ("c", Some(3))].into_iter().collect();

        let iter = queue.iter();
        assert_eq!(iter.len(), 3);

        let first: Vec<&str> = iter.clone().map(|e| *e.value()).collect();
        let second: Vec<&str> = iter.map(|e| *e.value()).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], "c");

        let again: Vec<Option<i32>> = (&queue).into_iter().map(|e| e.priority().copied()).collect();
        assert_eq!(again.len(), 3);
        assert!(again.contains(&None));
    }

    #[test]
    fn test_into_sorted_vec() {
        let mut queue = HeapQueue::with_capacity(8);
        queue.extend(vec![(1, Some(2)), (2, None), (3, Some(7)), (4, Some(2))]);
        assert!(queue.capacity() >= 8);
        assert_eq!(queue.into_sorted_vec(), vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_debug_lists_entries() {
        let mut queue = HeapQueue::new();
        queue.insert("x", Some(1));
        let rendered = format!("{:?}", queue);
        assert!(rendered.contains("\"x\""));
        assert!(rendered.contains("Some(1)"));
        assert!(rendered.contains("sequence: 0"));
    }

    #[test]
    fn test_generic_over_trait() {
        fn drain<Q: PriorityQueue<u8, u8>>(queue: &mut Q) -> Vec<u8> {
            let mut out = Vec::new();
            while !queue.is_empty() {
                out.push(queue.extract_max().unwrap());
            }
            out
        }

        let mut queue: HeapQueue<u8, u8> = HeapQueue::default();
        PriorityQueue::insert(&mut queue, 1, None);
        PriorityQueue::insert(&mut queue, 2, Some(0));
        assert_eq!(PriorityQueue::size(&queue), 2);
        assert_eq!(drain(&mut queue), vec![2, 1]);
    }
}
