//! Indexed Binary Heap implementation
//!
//! A binary min-heap stored breadth-first in a `Vec`, augmented with an
//! element→position lookup table. The lookup table is what makes
//! [`decrease_key`](IndexedHeap::decrease_key) O(log n): the node is found in
//! O(1) and sifted up from where it sits, with no linear scan and no
//! remove-and-reinsert.
//!
//! # Layout
//!
//! Index `i` has children `2i + 1` and `2i + 2` and parent `(i - 1) / 2`.
//! Every swap during a sift updates the lookup entries of both nodes, so the
//! node at index `i` is always the one whose element maps to `i`.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(log n)   |
//! | `pop_min`      | O(log n)   |
//! | `peek_min`     | O(1)       |
//! | `decrease_key` | O(log n)   |
//! | `contains`     | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_astar::IndexedHeap;
//! use indexed_astar::indexed_binary::IndexedBinaryHeap;
//!
//! let mut heap = IndexedBinaryHeap::new();
//! heap.insert('a', 30).unwrap();
//! heap.insert('b', 10).unwrap();
//! heap.insert('c', 20).unwrap();
//!
//! heap.decrease_key('a', 5).unwrap();
//! assert_eq!(heap.peek(), Some((&5, &'a')));
//! assert_eq!(heap.pop_min(), Ok('a'));
//! assert_eq!(heap.pop_min(), Ok('b'));
//! ```

use crate::traits::{HeapError, IndexedHeap};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// One queued element and its priority.
#[derive(Debug, Clone)]
struct HeapNode<T, P> {
    element: T,
    key: P,
}

/// A binary min-heap with an element→position index
///
/// Elements are cloned once on insertion so that they can key the lookup
/// table; cheap-to-clone states (small vectors, tuples, ids) are the intended
/// use.
#[derive(Debug, Clone)]
pub struct IndexedBinaryHeap<T, P> {
    /// Heap-ordered nodes, breadth-first
    nodes: Vec<HeapNode<T, P>>,
    /// Where each element currently lives in `nodes`
    positions: FxHashMap<T, usize>,
}

impl<T: Eq + Hash + Clone, P: Ord> IndexedHeap<T, P> for IndexedBinaryHeap<T, P> {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn contains(&self, element: &T) -> bool {
        self.positions.contains_key(element)
    }

    fn insert(&mut self, element: T, key: P) -> Result<(), HeapError> {
        if self.positions.contains_key(&element) {
            return Err(HeapError::DuplicateElement);
        }

        let index = self.nodes.len();
        self.positions.insert(element.clone(), index);
        self.nodes.push(HeapNode { element, key });
        self.sift_up(index);
        Ok(())
    }

    fn peek_min(&self) -> Result<&T, HeapError> {
        self.nodes
            .first()
            .map(|node| &node.element)
            .ok_or(HeapError::EmptyHeap)
    }

    fn pop_min(&mut self) -> Result<T, HeapError> {
        self.pop()
            .map(|(_, element)| element)
            .ok_or(HeapError::EmptyHeap)
    }

    fn decrease_key(&mut self, element: T, new_key: P) -> Result<(), HeapError> {
        let Some(&index) = self.positions.get(&element) else {
            return self.insert(element, new_key);
        };

        if new_key >= self.nodes[index].key {
            return Err(HeapError::PriorityNotDecreased);
        }

        self.nodes[index].key = new_key;
        self.sift_up(index);
        Ok(())
    }
}

impl<T: Eq + Hash + Clone, P: Ord> IndexedBinaryHeap<T, P> {
    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the minimum priority and its element without removing them
    pub fn peek(&self) -> Option<(&P, &T)> {
        self.nodes.first().map(|node| (&node.key, &node.element))
    }

    /// Removes and returns the minimum priority and its element
    pub fn pop(&mut self) -> Option<(P, T)> {
        if self.nodes.is_empty() {
            return None;
        }

        let last_idx = self.nodes.len() - 1;
        self.swap_nodes(0, last_idx);
        let node = self.nodes.pop()?;
        self.positions.remove(&node.element);

        if !self.nodes.is_empty() {
            self.sift_down(0);
        }

        Some((node.key, node.element))
    }

    /// Returns the current priority of `element`, if it is queued
    pub fn key_of(&self, element: &T) -> Option<&P> {
        self.positions
            .get(element)
            .map(|&index| &self.nodes[index].key)
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.positions.clear();
    }

    /// Swaps two nodes and repoints both lookup entries
    fn swap_nodes(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
        for index in [a, b] {
            let slot = self.positions.get_mut(&self.nodes[index].element);
            debug_assert!(slot.is_some(), "heap node missing from lookup table");
            if let Some(position) = slot {
                *position = index;
            }
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.nodes[index].key < self.nodes[parent].key {
                self.swap_nodes(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.nodes[left].key < self.nodes[smallest].key {
                smallest = left;
            }
            if right < len && self.nodes[right].key < self.nodes[smallest].key {
                smallest = right;
            }

            if smallest != index {
                self.swap_nodes(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<T: Eq + Hash + Clone, P: Ord> Default for IndexedBinaryHeap<T, P> {
    fn default() -> Self {
        <Self as IndexedHeap<T, P>>::new()
    }
}
