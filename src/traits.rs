//! Common traits for priority queues
//!
//! This module provides the [`PriorityQueue`] contract and the single error
//! type shared by its operations.
//!
//! Unlike `std::collections::BinaryHeap`, which orders the stored items
//! themselves, a [`PriorityQueue`] keeps the ordering key apart from the
//! payload, and the key is optional: an entry inserted without a priority
//! ranks below every entry that has one.

use thiserror::Error;

/// Error type for priority queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// `peek` or `extract_max` was called on a queue holding no entries
    #[error("priority queue is empty")]
    EmptyQueue,
}

/// Result alias for priority queue operations
pub type Result<T> = std::result::Result<T, QueueError>;

/// Base trait for priority queues with optional priorities
///
/// The queue always yields the highest-ranked entry first:
/// - entries with a priority rank above entries without one
/// - higher priorities rank above lower ones
/// - among equal priorities (or among entries without one), the entry
///   inserted first ranks highest
///
/// # Example
///
/// ```rust
/// use heap_queue::{HeapQueue, PriorityQueue, QueueError};
///
/// let mut queue = HeapQueue::new();
/// queue.insert("low", Some(1));
/// queue.insert("none", None);
/// queue.insert("high", Some(7));
///
/// assert_eq!(queue.peek(), Ok(&"high"));
/// assert_eq!(queue.extract_max(), Ok("high"));
/// assert_eq!(queue.extract_max(), Ok("low"));
/// assert_eq!(queue.extract_max(), Ok("none"));
/// assert_eq!(queue.extract_max(), Err(QueueError::EmptyQueue));
/// ```
pub trait PriorityQueue<V, P: Ord> {
    /// Inserts a value with an optional priority
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, value: V, priority: Option<P>);

    /// Returns the highest-ranked value without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue holds no entries.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<&V>;

    /// Removes and returns the highest-ranked value
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue holds no entries.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_max(&mut self) -> Result<V>;

    /// Returns the number of entries in the queue
    fn size(&self) -> usize;

    /// Returns true if the queue holds no entries
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
