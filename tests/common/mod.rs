//! Shared helpers for integration tests

#![allow(dead_code)]

use indexed_astar::{HeapError, IndexedHeap};
use std::hash::Hash;

/// Reference open set: an unordered `Vec` searched linearly on every query.
///
/// Slow, but obviously correct, so the real heap can be checked against it.
#[derive(Debug)]
pub struct ScanHeap<T, P> {
    entries: Vec<(T, P)>,
}

impl<T, P: Ord> ScanHeap<T, P> {
    fn min_index(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .min_by(|a, b| a.1 .1.cmp(&b.1 .1))
            .map(|(index, _)| index)
    }

    pub fn min_key(&self) -> Option<&P> {
        self.min_index().map(|index| &self.entries[index].1)
    }
}

impl<T: Eq + Hash + Clone, P: Ord> IndexedHeap<T, P> for ScanHeap<T, P> {
    fn new() -> Self {
        ScanHeap { entries: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains(&self, element: &T) -> bool {
        self.entries.iter().any(|(e, _)| e == element)
    }

    fn insert(&mut self, element: T, key: P) -> Result<(), HeapError> {
        if self.contains(&element) {
            return Err(HeapError::DuplicateElement);
        }
        self.entries.push((element, key));
        Ok(())
    }

    fn peek_min(&self) -> Result<&T, HeapError> {
        self.min_index()
            .map(|index| &self.entries[index].0)
            .ok_or(HeapError::EmptyHeap)
    }

    fn pop_min(&mut self) -> Result<T, HeapError> {
        let index = self.min_index().ok_or(HeapError::EmptyHeap)?;
        Ok(self.entries.swap_remove(index).0)
    }

    fn decrease_key(&mut self, element: T, new_key: P) -> Result<(), HeapError> {
        match self.entries.iter_mut().find(|(e, _)| *e == element) {
            None => self.insert(element, new_key),
            Some((_, key)) if new_key >= *key => Err(HeapError::PriorityNotDecreased),
            Some((_, key)) => {
                *key = new_key;
                Ok(())
            }
        }
    }
}

/// A small explicit digraph over `u8` vertices, for brute-force comparisons.
#[derive(Debug, Clone)]
pub struct EdgeList {
    pub vertices: u8,
    pub edges: Vec<(u8, u8, u32)>,
}

impl EdgeList {
    pub fn neighbors(&self, from: u8) -> Vec<(u8, u32)> {
        self.edges
            .iter()
            .filter(|&&(a, _, _)| a == from)
            .map(|&(_, b, w)| (b, w))
            .collect()
    }

    /// Bellman-Ford distances from `source`; `None` marks unreachable vertices.
    pub fn distances(&self, source: u8) -> Vec<Option<u32>> {
        let mut dist = vec![None; self.vertices as usize];
        dist[source as usize] = Some(0);
        for _ in 0..self.vertices {
            for &(a, b, w) in &self.edges {
                if let Some(da) = dist[a as usize] {
                    let candidate = da + w;
                    if dist[b as usize].map_or(true, |db| candidate < db) {
                        dist[b as usize] = Some(candidate);
                    }
                }
            }
        }
        dist
    }

    /// Cost of walking `path`, or `None` if some step is not an edge.
    ///
    /// With parallel edges the cheapest one is taken.
    pub fn path_cost(&self, path: &[u8]) -> Option<u32> {
        path.windows(2).try_fold(0u32, |total, step| {
            self.edges
                .iter()
                .filter(|&&(a, b, _)| a == step[0] && b == step[1])
                .map(|&(_, _, w)| w)
                .min()
                .map(|w| total + w)
        })
    }
}
