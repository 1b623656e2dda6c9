//! Best-first search over implicit graphs
//!
//! This crate provides an A* search engine and the priority queue it runs on:
//!
//! - **Indexed Binary Heap**: a binary min-heap with an element→position
//!   lookup, giving O(log n) insert, delete-min and decrease_key, and O(1)
//!   membership tests
//! - **A\* / Dijkstra**: shortest paths over graphs generated on demand by
//!   caller-supplied closures, with optional expansion and cost limits
//! - **Reachability**: the same search, answering only "is a goal reachable?"
//!
//! States never need to be enumerated up front. Anything `Clone + Eq + Hash`
//! can be a state: grid positions, tuples, or whole requirement vectors.
//!
//! # Example
//!
//! ```rust
//! use indexed_astar::pathfinding::{astar, SearchBuilder, SearchOutcome};
//!
//! // Reduce every counter to zero; pressing a button decrements the counters
//! // it is wired to, and costs one press.
//! let buttons: [&[usize]; 3] = [&[0, 1], &[1], &[0]];
//! let start = vec![2u32, 3];
//!
//! let neighbors = |state: &Vec<u32>| {
//!     buttons
//!         .iter()
//!         .filter(|wires| wires.iter().all(|&i| state[i] > 0))
//!         .map(|wires| {
//!             let mut next = state.clone();
//!             wires.iter().for_each(|&i| next[i] -= 1);
//!             (next, 1u32)
//!         })
//!         .collect::<Vec<_>>()
//! };
//! let goal = |state: &Vec<u32>| state.iter().all(|&c| c == 0);
//! let heuristic = |state: &Vec<u32>| state.iter().copied().max().unwrap_or(0);
//!
//! let result = astar(start.clone(), goal, heuristic, neighbors).into_found().unwrap();
//! assert_eq!(result.cost, 3);
//!
//! let bounded = SearchBuilder::new(start).expansion_limit(1).astar(goal, heuristic, neighbors);
//! assert!(matches!(bounded, SearchOutcome::BudgetExceeded { .. }));
//! ```

pub mod indexed_binary;
pub mod pathfinding;
pub mod traits;

// Re-export the main types for convenience
pub use indexed_binary::IndexedBinaryHeap;
pub use pathfinding::{PathResult, SearchBuilder, SearchOutcome};
pub use traits::{HeapError, IndexedHeap};
