//! Common traits for indexed priority queues
//!
//! The search engine in [`pathfinding`](crate::pathfinding) never holds
//! handles into its open set. Instead, elements are their own identity: an
//! [`IndexedHeap`] keeps an element→position lookup so that any queued element
//! can have its priority lowered in place.
//!
//! All misuse of a heap (duplicate insertion, reading from an empty heap, a
//! "decrease" that does not decrease) is reported through [`HeapError`].

use std::fmt;
use std::hash::Hash;

/// Error type for heap operations
///
/// Every variant describes a broken caller contract rather than a condition
/// the caller is expected to recover from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The element is already present in the heap
    DuplicateElement,
    /// The heap holds no elements
    EmptyHeap,
    /// The new priority is not less than the current priority
    PriorityNotDecreased,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::DuplicateElement => {
                write!(f, "element is already present in the heap")
            }
            HeapError::EmptyHeap => write!(f, "no elements in heap"),
            HeapError::PriorityNotDecreased => {
                write!(f, "new priority is not less than current priority")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A min-priority queue whose elements double as their own handles
///
/// Elements must be hashable so the heap can find them again for
/// [`decrease_key`](IndexedHeap::decrease_key). Each element may be present at
/// most once.
///
/// # Example
///
/// ```rust
/// use indexed_astar::IndexedHeap;
/// use indexed_astar::indexed_binary::IndexedBinaryHeap;
///
/// let mut heap = IndexedBinaryHeap::new();
/// heap.insert("x", 5).unwrap();
/// heap.insert("y", 2).unwrap();
/// heap.insert("z", 8).unwrap();
/// heap.decrease_key("x", 1).unwrap();
///
/// assert_eq!(heap.pop_min(), Ok("x"));
/// assert_eq!(heap.pop_min(), Ok("y"));
/// ```
pub trait IndexedHeap<T: Eq + Hash + Clone, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns true if `element` is currently queued
    fn contains(&self, element: &T) -> bool;

    /// Inserts `element` with priority `key`
    ///
    /// # Errors
    /// Returns [`HeapError::DuplicateElement`] if `element` is already queued.
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, element: T, key: P) -> Result<(), HeapError>;

    /// Returns the element with the minimum priority without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if there is nothing to peek at.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_min(&self) -> Result<&T, HeapError>;

    /// Removes and returns the element with the minimum priority
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if there is nothing to pop.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop_min(&mut self) -> Result<T, HeapError>;

    /// Lowers the priority of `element` to `new_key`
    ///
    /// If `element` is not queued it is inserted with `new_key` instead. The
    /// search engine relies on this: it relaxes an edge without first asking
    /// whether the neighbor is already in the open set.
    ///
    /// # Errors
    /// Returns [`HeapError::PriorityNotDecreased`] if `element` is queued and
    /// `new_key` is not strictly lower than its current priority.
    ///
    /// # Time Complexity
    /// O(log n)
    fn decrease_key(&mut self, element: T, new_key: P) -> Result<(), HeapError>;

    /// Inserts an element with the given priority, key first
    ///
    /// Mirrors the argument order of `push` on the other heaps in the
    /// ecosystem.
    fn push(&mut self, key: P, element: T) -> Result<(), HeapError> {
        self.insert(element, key)
    }

    /// Removes the minimum element, discarding it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if there is nothing to delete.
    fn delete_min(&mut self) -> Result<(), HeapError> {
        self.pop_min().map(drop)
    }
}
