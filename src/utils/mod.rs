/*!
# Utilities

Provides the [`Set`] abstraction used for traversal-scoped visited sets and
[`FromCapacity`] to create them for a given graph size.
*/

use std::collections::HashSet;

use fxhash::FxBuildHasher;

pub mod set;

pub use set::{Set, VertexSet};

/// Helper trait for datastructure that can be initialized with capacity.
///
/// `total` is the number of vertices of the graph (the largest possible element),
/// `used` the number of elements expected to be stored.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity and the actual capacity that will be used.
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl FromCapacity for VertexSet {
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // A dense set needs one slot per possible element
        Self::new(total)
    }
}

impl<T> FromCapacity for HashSet<T, FxBuildHasher> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        // A hash set only needs room for the stored elements
        Self::with_capacity_and_hasher(used, FxBuildHasher::default())
    }
}
