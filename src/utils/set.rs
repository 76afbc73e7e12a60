/*!
# Generalized Sets

Traversals record visited vertices in a [`Set`] they own for the duration of one search,
so graphs carry no mutable marks and can be traversed by several searches at once.

Implementations:
- [`VertexSet`]: dense, one flag per vertex (default),
- [`HashSet`] (e.g. `FxHashSet<VertexIdx>`): sparse, for huge graphs with small searches.
*/

use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
};

use crate::graph::VertexIdx;

/// Minimalist trait for a set-like collection.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was already present.
    fn insert(&mut self, value: T) -> bool;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        !HashSet::insert(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

/// A set of vertices `0..n` with `O(1)` insertion and membership.
#[derive(Debug, Clone, Default)]
pub struct VertexSet {
    marked: Vec<bool>,
    len: usize,
}

impl VertexSet {
    /// Creates an empty set over the vertices `0..n`
    pub fn new(n: usize) -> Self {
        Self {
            marked: vec![false; n],
            len: 0,
        }
    }
}

impl Set<VertexIdx> for VertexSet {
    fn insert(&mut self, value: VertexIdx) -> bool {
        let slot = &mut self.marked[value as usize];
        if *slot {
            return true;
        }

        *slot = true;
        self.len += 1;
        false
    }

    fn contains(&self, value: &VertexIdx) -> bool {
        self.marked[*value as usize]
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;

    fn exercise<S: Set<VertexIdx>>(mut set: S) {
        assert!(set.is_empty());
        assert!(!set.insert(3));
        assert!(!set.insert(7));
        assert!(set.insert(3));
        assert!(!set.insert(0));
        assert_eq!(set.len(), 3);

        assert!(set.contains(&7));
        assert!(set.contains(&0));
        assert!(!set.contains(&1));
    }

    #[test]
    fn vertex_set() {
        exercise(VertexSet::new(10));
    }

    #[test]
    fn hash_set() {
        exercise(FxHashSet::<VertexIdx>::default());
    }
}
