//! A* and Dijkstra search over implicit graphs
//!
//! This module provides a best-first search engine whose graph is never
//! materialised: the caller supplies a start state and three closures,
//!
//! - `goal(&state) -> bool`, the goal test,
//! - `heuristic(&state) -> C`, an estimate of the remaining cost,
//! - `neighbors(&state) -> impl IntoIterator<Item = (state, edge_cost)>`,
//!
//! and the engine generates states on demand while driving an
//! [`IndexedBinaryHeap`] as its open set.
//!
//! # Design
//!
//! The open set is keyed by f-score (`g + h`) and holds the states themselves.
//! Each time an edge relaxation finds a strictly cheaper route to a state the
//! engine calls `decrease_key` on it unconditionally; the heap inserts the
//! state if it is not already queued. A state with no recorded g-score is
//! treated as infinitely far away, so there is no finite sentinel that a real
//! cost could collide with.
//!
//! Dijkstra is A* with h(n) = 0. The heuristic must be a pure function of the
//! state; for the returned path to be optimal it must also be admissible.
//! Edge costs must be non-negative.
//!
//! # Example
//!
//! ```rust
//! use indexed_astar::pathfinding::{astar, SearchOutcome};
//!
//! // Walk a number line from 0 to 7 in steps of +1 (cost 1) or +3 (cost 2).
//! let outcome = astar(
//!     0i32,
//!     |&n| n == 7,
//!     |&n| ((7 - n).max(0) as u32 + 2) / 3,
//!     |&n| [(n + 1, 1u32), (n + 3, 2u32)],
//! );
//!
//! let result = outcome.into_found().unwrap();
//! assert_eq!(result.cost, 5);
//! assert_eq!(result.path.first(), Some(&0));
//! assert_eq!(result.path.last(), Some(&7));
//! ```

use crate::indexed_binary::IndexedBinaryHeap;
use crate::traits::{HeapError, IndexedHeap};
use log::{debug, trace};
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

/// Trait for types that can be used as costs in pathfinding algorithms.
///
/// Costs are accumulated with [`checked_add`](Cost::checked_add). An
/// overflowing sum would silently break the ordering of the open set, so the
/// engine panics instead. With `u64` costs this leaves room for paths up to
/// roughly 1.8e19; pick a wider type if path costs can approach that.
pub trait Cost: Ord + Copy + Default + Debug {
    /// Adds two costs, returning `None` on overflow
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_cost {
    ($($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

impl_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[inline]
fn add_cost<C: Cost>(a: C, b: C) -> C {
    a.checked_add(b)
        .unwrap_or_else(|| panic!("path cost overflowed: {a:?} + {b:?}"))
}

/// Heap errors inside the engine mean the open set and score maps disagree.
fn open_set_defect(err: HeapError) -> ! {
    panic!("open set out of sync with search state: {err}")
}

/// How a single search call ended.
///
/// Only `Found` carries data; running out of states and running out of budget
/// are ordinary outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<T> {
    /// A goal state was expanded
    Found(T),
    /// The open set emptied without any state satisfying the goal
    NotFound,
    /// The expansion limit was reached before a goal state was expanded
    BudgetExceeded {
        /// Number of states expanded before giving up
        expansions: usize,
    },
}

impl<T> SearchOutcome<T> {
    /// Returns true if a goal state was found.
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// Returns a reference to the found value, if any.
    pub fn found(&self) -> Option<&T> {
        match self {
            SearchOutcome::Found(value) => Some(value),
            _ => None,
        }
    }

    /// Consumes the outcome, returning the found value, if any.
    pub fn into_found(self) -> Option<T> {
        match self {
            SearchOutcome::Found(value) => Some(value),
            _ => None,
        }
    }

    /// Maps the found value, leaving the other outcomes untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SearchOutcome<U> {
        match self {
            SearchOutcome::Found(value) => SearchOutcome::Found(f(value)),
            SearchOutcome::NotFound => SearchOutcome::NotFound,
            SearchOutcome::BudgetExceeded { expansions } => {
                SearchOutcome::BudgetExceeded { expansions }
            }
        }
    }
}

/// Result of a successful pathfinding search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult<S, C> {
    /// The path from start to goal (inclusive)
    pub path: Vec<S>,
    /// Total cost of the path
    pub cost: C,
    /// Number of states popped from the open set, goal included
    pub expansions: usize,
}

/// Rebuilds the path ending at `end` by following predecessor links.
///
/// The walk stops at the first state with no recorded predecessor, which for
/// a map produced by a search is the start state. The result is ordered from
/// that state to `end`, both inclusive.
pub fn reconstruct_path<S, B>(came_from: &HashMap<S, S, B>, end: S) -> Vec<S>
where
    S: Clone + Eq + Hash,
    B: BuildHasher,
{
    let mut path = Vec::new();
    let mut current = Some(end);

    while let Some(state) = current {
        current = came_from.get(&state).cloned();
        path.push(state);
    }

    path.reverse();
    path
}

/// What the frontier produced when asked for the next state.
enum Step<S, C> {
    Expand(S, C),
    Exhausted,
    OverBudget,
}

/// Per-call search state: the open set plus the score and parent maps.
struct Frontier<S, C, H> {
    open: H,
    g_score: FxHashMap<S, C>,
    came_from: FxHashMap<S, S>,
    track_parents: bool,
    expansions: usize,
}

impl<S, C, H> Frontier<S, C, H>
where
    S: Clone + Eq + Hash,
    C: Cost,
    H: IndexedHeap<S, C>,
{
    fn new(track_parents: bool) -> Self {
        Frontier {
            open: H::new(),
            g_score: FxHashMap::default(),
            came_from: FxHashMap::default(),
            track_parents,
            expansions: 0,
        }
    }

    fn open_start(&mut self, start: S, estimate: C) {
        self.g_score.insert(start.clone(), C::default());
        self.open
            .insert(start, estimate)
            .unwrap_or_else(|err| open_set_defect(err));
    }

    /// Pops the next state, unless the open set is empty or the budget spent.
    fn next(&mut self, expansion_limit: Option<usize>) -> Step<S, C> {
        if self.open.is_empty() {
            return Step::Exhausted;
        }
        if expansion_limit.is_some_and(|limit| self.expansions >= limit) {
            return Step::OverBudget;
        }

        let current = self
            .open
            .pop_min()
            .unwrap_or_else(|err| open_set_defect(err));
        self.expansions += 1;

        let Some(&current_g) = self.g_score.get(&current) else {
            panic!("expanded a state with no recorded cost");
        };
        trace!("expansion {} at g = {:?}", self.expansions, current_g);

        Step::Expand(current, current_g)
    }

    /// Relaxes the edge `current -> neighbor`.
    fn relax<F>(
        &mut self,
        current: &S,
        current_g: C,
        neighbor: S,
        edge_cost: C,
        heuristic: &mut F,
        max_cost: Option<C>,
    ) where
        F: FnMut(&S) -> C,
    {
        let tentative_g = add_cost(current_g, edge_cost);

        if max_cost.is_some_and(|max| tentative_g > max) {
            return;
        }
        if self
            .g_score
            .get(&neighbor)
            .is_some_and(|&known| tentative_g >= known)
        {
            return;
        }

        if self.track_parents {
            self.came_from.insert(neighbor.clone(), current.clone());
        }
        self.g_score.insert(neighbor.clone(), tentative_g);

        let f_score = add_cost(tentative_g, heuristic(&neighbor));
        self.open
            .decrease_key(neighbor, f_score)
            .unwrap_or_else(|err| open_set_defect(err));
    }
}

/// Builder for pathfinding queries with more configuration options.
///
/// Provides a fluent API for bounding a search before running it:
///
/// - [`expansion_limit`](SearchBuilder::expansion_limit) caps the number of
///   states popped from the open set. Once that many have been expanded
///   without reaching a goal, the search stops with
///   [`SearchOutcome::BudgetExceeded`].
/// - [`max_cost`](SearchBuilder::max_cost) drops any route whose cost from
///   the start would exceed the ceiling.
///
/// # Example
///
/// ```rust
/// use indexed_astar::pathfinding::{SearchBuilder, SearchOutcome};
///
/// // An unbounded chain with an unreachable goal.
/// let outcome = SearchBuilder::new(0u64)
///     .expansion_limit(50)
///     .dijkstra(|&n| n == u64::MAX, |&n| [(n + 1, 1u64)]);
///
/// assert_eq!(outcome, SearchOutcome::BudgetExceeded { expansions: 50 });
/// ```
#[derive(Debug, Clone)]
pub struct SearchBuilder<S, C> {
    start: S,
    expansion_limit: Option<usize>,
    max_cost: Option<C>,
}

impl<S, C> SearchBuilder<S, C>
where
    S: Clone + Eq + Hash,
    C: Cost,
{
    /// Creates a new builder starting from the given state.
    pub fn new(start: S) -> Self {
        SearchBuilder {
            start,
            expansion_limit: None,
            max_cost: None,
        }
    }

    /// Sets the maximum number of states to expand.
    pub fn expansion_limit(mut self, count: usize) -> Self {
        self.expansion_limit = Some(count);
        self
    }

    /// Sets the maximum cost to explore.
    pub fn max_cost(mut self, cost: C) -> Self {
        self.max_cost = Some(cost);
        self
    }

    /// Runs A* with the configured settings.
    pub fn astar<G, F, N, I>(
        self,
        goal: G,
        heuristic: F,
        neighbors: N,
    ) -> SearchOutcome<PathResult<S, C>>
    where
        G: FnMut(&S) -> bool,
        F: FnMut(&S) -> C,
        N: FnMut(&S) -> I,
        I: IntoIterator<Item = (S, C)>,
    {
        self.astar_with_heap::<IndexedBinaryHeap<S, C>, _, _, _, _>(goal, heuristic, neighbors)
    }

    /// Runs A* using `H` as the open set.
    pub fn astar_with_heap<H, G, F, N, I>(
        self,
        goal: G,
        heuristic: F,
        neighbors: N,
    ) -> SearchOutcome<PathResult<S, C>>
    where
        H: IndexedHeap<S, C>,
        G: FnMut(&S) -> bool,
        F: FnMut(&S) -> C,
        N: FnMut(&S) -> I,
        I: IntoIterator<Item = (S, C)>,
    {
        let mut frontier: Frontier<S, C, H> = Frontier::new(true);
        let outcome = self.drive(&mut frontier, goal, heuristic, neighbors);

        outcome.map(|(goal_state, cost)| PathResult {
            path: reconstruct_path(&frontier.came_from, goal_state),
            cost,
            expansions: frontier.expansions,
        })
    }

    /// Runs Dijkstra's algorithm with the configured settings.
    pub fn dijkstra<G, N, I>(self, goal: G, neighbors: N) -> SearchOutcome<PathResult<S, C>>
    where
        G: FnMut(&S) -> bool,
        N: FnMut(&S) -> I,
        I: IntoIterator<Item = (S, C)>,
    {
        self.astar(goal, |_| C::default(), neighbors)
    }

    /// Searches for any goal state without building a path.
    ///
    /// Returns the first goal state expanded. No predecessor links are kept.
    pub fn reach<G, F, N, I>(self, goal: G, heuristic: F, neighbors: N) -> SearchOutcome<S>
    where
        G: FnMut(&S) -> bool,
        F: FnMut(&S) -> C,
        N: FnMut(&S) -> I,
        I: IntoIterator<Item = (S, C)>,
    {
        let mut frontier: Frontier<S, C, IndexedBinaryHeap<S, C>> = Frontier::new(false);
        self.drive(&mut frontier, goal, heuristic, neighbors)
            .map(|(goal_state, _)| goal_state)
    }

    /// The expand loop shared by every search flavour.
    fn drive<H, G, F, N, I>(
        self,
        frontier: &mut Frontier<S, C, H>,
        mut goal: G,
        mut heuristic: F,
        mut neighbors: N,
    ) -> SearchOutcome<(S, C)>
    where
        H: IndexedHeap<S, C>,
        G: FnMut(&S) -> bool,
        F: FnMut(&S) -> C,
        N: FnMut(&S) -> I,
        I: IntoIterator<Item = (S, C)>,
    {
        let max_cost = self.max_cost;
        let estimate = heuristic(&self.start);
        frontier.open_start(self.start, estimate);

        loop {
            match frontier.next(self.expansion_limit) {
                Step::Exhausted => {
                    debug!(
                        "open set exhausted after {} expansions",
                        frontier.expansions
                    );
                    return SearchOutcome::NotFound;
                }
                Step::OverBudget => {
                    debug!(
                        "expansion budget spent after {} expansions",
                        frontier.expansions
                    );
                    return SearchOutcome::BudgetExceeded {
                        expansions: frontier.expansions,
                    };
                }
                Step::Expand(current, current_g) => {
                    if goal(&current) {
                        debug!(
                            "goal reached after {} expansions at cost {:?}",
                            frontier.expansions, current_g
                        );
                        return SearchOutcome::Found((current, current_g));
                    }

                    for (neighbor, edge_cost) in neighbors(&current) {
                        frontier.relax(
                            &current,
                            current_g,
                            neighbor,
                            edge_cost,
                            &mut heuristic,
                            max_cost,
                        );
                    }
                }
            }
        }
    }
}

/// Runs A* search from `start` until a state satisfies `goal`.
///
/// # Returns
/// - `Found(PathResult)` with the cheapest path if the heuristic is admissible
/// - `NotFound` if every reachable state was expanded without meeting the goal
///
/// This variant is unbounded; use [`SearchBuilder::expansion_limit`] when the
/// state space may be infinite or combinatorially large.
pub fn astar<S, C, G, F, N, I>(
    start: S,
    goal: G,
    heuristic: F,
    neighbors: N,
) -> SearchOutcome<PathResult<S, C>>
where
    S: Clone + Eq + Hash,
    C: Cost,
    G: FnMut(&S) -> bool,
    F: FnMut(&S) -> C,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, C)>,
{
    SearchBuilder::new(start).astar(goal, heuristic, neighbors)
}

/// Runs Dijkstra's algorithm from `start` until a state satisfies `goal`.
///
/// # Example
/// ```rust
/// use indexed_astar::pathfinding::dijkstra;
///
/// let edges = |&n: &char| match n {
///     'A' => vec![('B', 1u32), ('C', 4)],
///     'B' => vec![('C', 1), ('D', 5)],
///     'C' => vec![('D', 1)],
///     _ => vec![],
/// };
///
/// let result = dijkstra('A', |&n| n == 'D', edges).into_found().unwrap();
/// assert_eq!(result.path, vec!['A', 'B', 'C', 'D']);
/// assert_eq!(result.cost, 3);
/// ```
pub fn dijkstra<S, C, G, N, I>(start: S, goal: G, neighbors: N) -> SearchOutcome<PathResult<S, C>>
where
    S: Clone + Eq + Hash,
    C: Cost,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, C)>,
{
    SearchBuilder::new(start).dijkstra(goal, neighbors)
}

/// Returns true if some state satisfying `goal` is reachable from `start`.
///
/// Runs the same loop as [`astar`] but keeps no predecessor links and stops
/// at the first goal state expanded.
pub fn is_reachable<S, C, G, F, N, I>(start: S, goal: G, heuristic: F, neighbors: N) -> bool
where
    S: Clone + Eq + Hash,
    C: Cost,
    G: FnMut(&S) -> bool,
    F: FnMut(&S) -> C,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, C)>,
{
    SearchBuilder::new(start)
        .reach(goal, heuristic, neighbors)
        .is_found()
}

/// Returns all states reachable from the start within a given cost budget.
///
/// Each state is reported once with its cheapest cost, in non-decreasing
/// order of cost. This is useful for "what's nearby" queries.
pub fn reachable_within<S, C, N, I>(start: S, max_cost: C, mut neighbors: N) -> Vec<(S, C)>
where
    S: Clone + Eq + Hash,
    C: Cost,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, C)>,
{
    let mut reached = Vec::new();
    if C::default() > max_cost {
        return reached;
    }

    let mut frontier: Frontier<S, C, IndexedBinaryHeap<S, C>> = Frontier::new(false);
    let mut no_estimate = |_: &S| C::default();
    frontier.open_start(start, C::default());

    while let Step::Expand(current, current_g) = frontier.next(None) {
        for (neighbor, edge_cost) in neighbors(&current) {
            frontier.relax(
                &current,
                current_g,
                neighbor,
                edge_cost,
                &mut no_estimate,
                Some(max_cost),
            );
        }
        reached.push((current, current_g));
    }

    reached
}
