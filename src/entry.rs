//! Queue entries and the ranking rule between them
//!
//! Each entry carries a payload, an optional priority and the insertion
//! sequence number assigned by its queue. Ranking is spelled out over both
//! `Option` variants instead of using the derived `Ord` for `Option`; ties,
//! including ties between two absent priorities, go to the older entry.

use std::cmp::Ordering;
use std::fmt;

/// A stored (value, priority, sequence) triple
///
/// Entries are immutable once created; the heap only moves them around.
pub(crate) struct Entry<V, P> {
    pub(crate) value: V,
    pub(crate) priority: Option<P>,
    pub(crate) sequence: u64,
}

impl<V, P: Ord> Entry<V, P> {
    pub(crate) fn new(value: V, priority: Option<P>, sequence: u64) -> Self {
        Self {
            value,
            priority,
            sequence,
        }
    }

    /// Total order over entries: `Greater` means `self` ranks higher.
    ///
    /// Only returns `Equal` when both entries share a sequence number, which
    /// cannot happen for two distinct entries of the same queue.
    pub(crate) fn rank(&self, other: &Self) -> Ordering {
        match (&self.priority, &other.priority) {
            // Older entries first among unprioritized ones
            (None, None) => other.sequence.cmp(&self.sequence),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (Some(mine), Some(theirs)) => mine
                .cmp(theirs)
                .then_with(|| other.sequence.cmp(&self.sequence)),
        }
    }

    /// True if `self` must sit above `other` in the heap
    #[inline]
    pub(crate) fn outranks(&self, other: &Self) -> bool {
        self.rank(other) == Ordering::Greater
    }
}

impl<V: fmt::Debug, P: fmt::Debug> fmt::Debug for Entry<V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("value", &self.value)
            .field("priority", &self.priority)
            .field("sequence", &self.sequence)
            .finish()
    }
}

/// Read-only view of an entry, yielded by [`HeapQueue::iter`](crate::HeapQueue::iter)
///
/// The insertion sequence number stays private to the queue.
pub struct EntryRef<'a, V, P> {
    entry: &'a Entry<V, P>,
}

impl<'a, V, P> EntryRef<'a, V, P> {
    pub(crate) fn new(entry: &'a Entry<V, P>) -> Self {
        Self { entry }
    }

    /// The stored value
    pub fn value(&self) -> &'a V {
        &self.entry.value
    }

    /// The stored priority, `None` if the entry was inserted without one
    pub fn priority(&self) -> Option<&'a P> {
        self.entry.priority.as_ref()
    }
}

impl<V, P> Clone for EntryRef<'_, V, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, P> Copy for EntryRef<'_, V, P> {}

impl<V: fmt::Debug, P: fmt::Debug> fmt::Debug for EntryRef<'_, V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryRef")
            .field("value", &self.entry.value)
            .field("priority", &self.entry.priority)
            .finish()
    }
}
