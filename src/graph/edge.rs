use std::fmt::Display;

use super::*;

/// A directed, weighted edge stored in the edge arena of a [`Graph`].
/// Endpoints are arena indices; resolve them with [`Graph::edge_ref`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Edge {
    pub source: VertexIdx,
    pub destination: VertexIdx,
    pub weight: Weight,
}

impl Edge {
    /// Returns the same edge pointing the other way
    pub fn reverse(&self) -> Self {
        Edge {
            source: self.destination,
            destination: self.source,
            weight: self.weight,
        }
    }

    /// Returns the endpoint opposite to `u`, treating the edge as undirected
    pub fn other(&self, u: VertexIdx) -> VertexIdx {
        if self.source == u {
            self.destination
        } else {
            self.source
        }
    }
}

/// An edge as seen from outside the graph: endpoints resolved to vertex ids.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EdgeRef<'a, K> {
    pub source: &'a K,
    pub destination: &'a K,
    pub weight: Weight,
}

impl<K> EdgeRef<'_, K> {
    /// Returns `(source, destination)`, cloned
    pub fn endpoints(&self) -> (K, K)
    where
        K: Clone,
    {
        (self.source.clone(), self.destination.clone())
    }
}

impl<K: Display> Display for EdgeRef<'_, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.source, self.destination, self.weight)
    }
}
