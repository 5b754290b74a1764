//! Binary Heap Priority Queue with Optional Priorities
//!
//! This crate provides [`HeapQueue`], an array-backed binary max-heap that
//! stores values together with an optional priority and always yields the
//! highest-ranked value first.
//!
//! # Ranking
//!
//! - An entry with a priority ranks above any entry without one
//! - Between two priorities, the greater one (by `Ord`) ranks higher
//! - Ties, and entries without a priority, are served in insertion order
//!
//! # Example
//!
//! ```rust
//! use heap_queue::{HeapQueue, QueueError};
//!
//! let mut queue = HeapQueue::new();
//! queue.insert("x", Some(1));
//!
//! assert_eq!(queue.peek(), Ok(&"x"));
//! assert_eq!(queue.size(), 1);
//! assert_eq!(queue.extract_max(), Ok("x"));
//! assert_eq!(queue.size(), 0);
//! assert_eq!(queue.extract_max(), Err(QueueError::EmptyQueue));
//! ```
//!
//! # Diagnostics
//!
//! Insertions and extractions emit `trace`-level [`tracing`] events. Enable the
//! `verify-invariants` feature to re-check heap order after every mutation in
//! debug builds.

mod entry;
pub mod heap_queue;
pub mod traits;

pub use entry::EntryRef;
pub use heap_queue::{HeapQueue, Iter};
pub use traits::{PriorityQueue, QueueError, Result};
