/*!
# Graph Engine

A [`Graph`] is a weighted, directed graph whose vertices are identified by keys of
type `K` and carry a payload of type `V`. Vertices and edges live in arenas and
reference each other by [`VertexIdx`] and [`EdgeIdx`]:

- a [`LinearProbing`] table maps every id to its arena index,
- every [`Vertex`] maps the ids of its out-neighbors to edge indices
  in a [`SeparateChaining`] table and lists its incoming edges,
- all [`Edge`]s are kept in one flat list in insertion order.

The graph only grows: vertices and edges are never removed. Mutations that
would break the model are ignored rather than reported: inserting an existing id
or adding an edge with an unknown endpoint or an already present `src -> dst`
leaves the graph unchanged.

```
use kgraphs::graph::Graph;

let mut graph = Graph::new(4);
graph.insert_vertex("a", 1);
graph.insert_vertex("b", 2);
graph.add_edge(&"a", &"b", 0.5);
graph.add_edge(&"a", &"c", 1.0); // "c" is unknown: ignored

assert_eq!(graph.num_vertices(), 2);
assert_eq!(graph.num_edges(), 1);
assert_eq!(graph.get_edge(&"a", &"b").map(|e| e.weight), Some(0.5));
```

The algorithms (traversals, components, spanning trees, shortest paths) are
implemented on [`Graph`] in [`crate::algo`].
*/

use std::hash::Hash;

use tracing::trace;

use crate::{
    seq::{ArrayList, Sequence},
    table::{LinearProbing, SeparateChaining, SymbolTable, chaining},
};

mod edge;
mod vertex;

pub use edge::*;
pub use vertex::*;

/// Index of a vertex in the vertex arena
pub type VertexIdx = u32;

/// Index of an edge in the edge arena
pub type EdgeIdx = u32;

/// Edge weights
pub type Weight = f64;

/// Weighted, directed graph with vertex ids `K` and vertex payloads `V`.
#[derive(Debug, Clone)]
pub struct Graph<K, V> {
    index: LinearProbing<K, VertexIdx>,
    vertices: Vec<Vertex<K, V>>,
    edges: ArrayList<Edge>,
}

impl<K, V> Default for Graph<K, V>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new(crate::table::DEFAULT_CAPACITY)
    }
}

impl<K, V> Graph<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Creates an empty graph with room for about `capacity` vertices
    pub fn new(capacity: usize) -> Self {
        Self {
            index: LinearProbing::with_capacity(capacity),
            vertices: Vec::with_capacity(capacity),
            edges: ArrayList::new(),
        }
    }

    /// Returns the number of vertices
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges
    pub fn num_edges(&self) -> usize {
        self.edges.size()
    }

    /// Returns *true* if the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns *true* if a vertex with this id exists
    pub fn contains_vertex(&self, id: &K) -> bool {
        self.index.contains(id)
    }

    /// Adds a vertex; does nothing if `id` is already present
    pub fn insert_vertex(&mut self, id: K, value: V) {
        if self.index.contains(&id) {
            trace!(vertices = self.vertices.len(), "ignoring duplicate vertex");
            return;
        }

        let u = self.vertices.len() as VertexIdx;
        self.index.put(id.clone(), u);
        self.vertices.push(Vertex::new(id, value));
    }

    /// Adds the edge `source -> destination` with the given weight.
    ///
    /// Does nothing if either endpoint is unknown or the edge already exists.
    pub fn add_edge(&mut self, source: &K, destination: &K, weight: Weight) {
        let (Some(u), Some(v)) = (self.index_of(source), self.index_of(destination)) else {
            trace!(weight, "ignoring edge with unknown endpoint");
            return;
        };

        if self.vertices[u as usize].has_edge_to(destination) {
            trace!(source = u, destination = v, "ignoring duplicate edge");
            return;
        }

        let e = self.edges.size() as EdgeIdx;
        self.edges.add_last(Edge {
            source: u,
            destination: v,
            weight,
        });
        self.vertices[u as usize].link_out(destination.clone(), e);
        self.vertices[v as usize].link_in(e);
    }

    /// Returns the vertex with this id
    pub fn get_vertex(&self, id: &K) -> Option<&Vertex<K, V>> {
        self.index_of(id).map(|u| self.vertex_at(u))
    }

    /// Returns the payload of the vertex with this id for modification
    pub fn vertex_value_mut(&mut self, id: &K) -> Option<&mut V> {
        let u = self.index_of(id)?;
        Some(self.vertices[u as usize].value_mut())
    }

    /// Returns the edge `source -> destination` if present
    pub fn get_edge(&self, source: &K, destination: &K) -> Option<EdgeRef<'_, K>> {
        let e = self.get_vertex(source)?.edge_to(destination)?;
        Some(self.edge_ref(e))
    }

    /// Returns the outgoing edges of `id`; empty if `id` is unknown
    pub fn adjacent_edges(&self, id: &K) -> ArrayList<EdgeRef<'_, K>> {
        match self.index_of(id) {
            Some(u) => self.out_edges(u).map(|(e, _)| self.edge_ref(e)).collect(),
            None => ArrayList::new(),
        }
    }

    /// Returns the out-neighbors of `id`; empty if `id` is unknown
    pub fn adjacent_vertices(&self, id: &K) -> ArrayList<&K> {
        match self.index_of(id) {
            Some(u) => self
                .out_edges(u)
                .map(|(_, edge)| self.id_at(edge.destination))
                .collect(),
            None => ArrayList::new(),
        }
    }

    /// Returns the number of outgoing edges of `id`
    pub fn out_degree(&self, id: &K) -> Option<usize> {
        self.get_vertex(id).map(Vertex::out_degree)
    }

    /// Returns the number of incoming edges of `id`
    pub fn in_degree(&self, id: &K) -> Option<usize> {
        self.get_vertex(id).map(Vertex::in_degree)
    }

    /// Returns an iterator over all vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<K, V>> + '_ {
        self.vertices.iter()
    }

    /// Returns an iterator over all edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, K>> + '_ {
        (0..self.edges.size() as EdgeIdx).map(|e| self.edge_ref(e))
    }

    /// Returns the first edge of minimum weight in insertion order; `None` without edges
    pub fn min_edge(&self) -> Option<EdgeRef<'_, K>> {
        self.find_edge_by_weight(|candidate, best| candidate < best)
    }

    /// Returns the first edge of maximum weight in insertion order; `None` without edges
    pub fn max_edge(&self) -> Option<EdgeRef<'_, K>> {
        self.find_edge_by_weight(|candidate, best| candidate > best)
    }

    fn find_edge_by_weight(
        &self,
        replaces: impl Fn(Weight, Weight) -> bool,
    ) -> Option<EdgeRef<'_, K>> {
        let edges = self.edges.as_slice();
        let mut best = 0;
        for (e, edge) in edges.iter().enumerate().skip(1) {
            if replaces(edge.weight, edges[best].weight) {
                best = e;
            }
        }
        (!edges.is_empty()).then(|| self.edge_ref(best as EdgeIdx))
    }

    /// Returns a new graph with the same vertices, inserted in the same order,
    /// and every edge `u -> v` replaced by `v -> u`.
    pub fn reverse(&self) -> Graph<K, V>
    where
        V: Clone,
    {
        self.reverse_with(V::clone)
    }

    /// Like [`Graph::reverse`], mapping every payload through `payload`.
    ///
    /// Vertex and edge indices of the result match those of `self`.
    pub fn reverse_with<W>(&self, mut payload: impl FnMut(&V) -> W) -> Graph<K, W> {
        let mut reversed = Graph::new(self.num_vertices());
        for vertex in &self.vertices {
            reversed.insert_vertex(vertex.id().clone(), payload(vertex.value()));
        }
        for edge in self.edges.iter().map(Edge::reverse) {
            reversed.add_edge(self.id_at(edge.source), self.id_at(edge.destination), edge.weight);
        }
        reversed
    }

    pub(crate) fn index_of(&self, id: &K) -> Option<VertexIdx> {
        self.index.get(id).copied()
    }

    pub(crate) fn vertex_at(&self, u: VertexIdx) -> &Vertex<K, V> {
        &self.vertices[u as usize]
    }

    pub(crate) fn id_at(&self, u: VertexIdx) -> &K {
        self.vertices[u as usize].id()
    }

    pub(crate) fn edge_at(&self, e: EdgeIdx) -> &Edge {
        &self.edges.as_slice()[e as usize]
    }

    /// Resolves the endpoints of the edge at arena index `e`
    pub(crate) fn edge_ref(&self, e: EdgeIdx) -> EdgeRef<'_, K> {
        let edge = self.edge_at(e);
        EdgeRef {
            source: self.id_at(edge.source),
            destination: self.id_at(edge.destination),
            weight: edge.weight,
        }
    }

    /// Returns the outgoing edges of the vertex at arena index `u`
    pub(crate) fn out_edges(&self, u: VertexIdx) -> OutEdges<'_, K> {
        OutEdges {
            edges: self.edges.as_slice(),
            inner: self.vertex_at(u).out_edge_indices(),
        }
    }

    /// Returns the incoming edges of the vertex at arena index `u`
    pub(crate) fn in_edges(&self, u: VertexIdx) -> impl Iterator<Item = (EdgeIdx, &Edge)> + '_ {
        self.vertex_at(u)
            .in_edge_indices()
            .map(|&e| (e, self.edge_at(e)))
    }
}

/// Iterator over the outgoing edges of one vertex as `(index, edge)` pairs.
pub struct OutEdges<'a, K> {
    edges: &'a [Edge],
    inner: chaining::Iter<'a, K, EdgeIdx>,
}

impl<'a, K> Iterator for OutEdges<'a, K> {
    type Item = (EdgeIdx, &'a Edge);

    fn next(&mut self) -> Option<Self::Item> {
        let edges: &'a [Edge] = self.edges;
        let (_, &e) = self.inner.next()?;
        Some((e, &edges[e as usize]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn sample() -> Graph<&'static str, u32> {
        let mut graph = Graph::new(4);
        for (i, id) in ["a", "b", "c", "d"].into_iter().enumerate() {
            graph.insert_vertex(id, i as u32);
        }
        for (u, v, w) in [("a", "b", 2.0), ("a", "c", 1.0), ("b", "c", 4.0), ("c", "d", 1.0)] {
            graph.add_edge(&u, &v, w);
        }
        graph
    }

    #[test]
    fn construction() {
        let graph = sample();
        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.num_edges(), 4);
        assert!(graph.contains_vertex(&"d"));
        assert!(!graph.contains_vertex(&"e"));
        assert_eq!(graph.get_vertex(&"c").map(|v| *v.value()), Some(2));
        assert_eq!(graph.out_degree(&"a"), Some(2));
        assert_eq!(graph.in_degree(&"c"), Some(2));
        assert_eq!(graph.out_degree(&"e"), None);
    }

    #[test]
    fn insert_vertex_is_idempotent() {
        let mut graph = sample();
        graph.insert_vertex("a", 99);
        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.get_vertex(&"a").map(|v| *v.value()), Some(0));
    }

    #[test]
    fn add_edge_ignores_invalid_input() {
        let mut graph = sample();
        graph.add_edge(&"a", &"x", 1.0);
        graph.add_edge(&"x", &"a", 1.0);
        graph.add_edge(&"a", &"b", 7.0);
        assert_eq!(graph.num_edges(), 4);
        assert_eq!(graph.get_edge(&"a", &"b").map(|e| e.weight), Some(2.0));

        // the opposite direction is a different edge
        graph.add_edge(&"b", &"a", 7.0);
        assert_eq!(graph.num_edges(), 5);
    }

    #[test]
    fn adjacency() {
        let graph = sample();
        let neighbors = graph.adjacent_vertices(&"a").into_iter().copied().sorted().collect_vec();
        assert_eq!(neighbors, vec!["b", "c"]);

        let edges = graph
            .adjacent_edges(&"b")
            .into_iter()
            .map(|e| (*e.source, *e.destination, e.weight))
            .collect_vec();
        assert_eq!(edges, vec![("b", "c", 4.0)]);

        assert!(graph.adjacent_vertices(&"x").is_empty());
        assert!(graph.get_edge(&"c", &"a").is_none());
    }

    #[test]
    fn many_neighbors() {
        let mut graph = Graph::new(2);
        for u in 0..200u32 {
            graph.insert_vertex(u, ());
        }
        for v in 1..200u32 {
            graph.add_edge(&0, &v, v as f64);
        }
        assert_eq!(graph.out_degree(&0), Some(199));
        assert_eq!(
            graph.adjacent_vertices(&0).into_iter().copied().sorted().collect_vec(),
            (1..200).collect_vec()
        );
        assert_eq!(graph.get_edge(&0, &150).map(|e| e.weight), Some(150.0));
    }

    #[test]
    fn extreme_edges() {
        let mut graph = sample();
        assert_eq!(graph.min_edge().map(|e| e.endpoints()), Some(("a", "c")));
        assert_eq!(graph.max_edge().map(|e| e.endpoints()), Some(("b", "c")));

        // ties resolve to the earliest edge
        graph.add_edge(&"d", &"a", 4.0);
        assert_eq!(graph.max_edge().map(|e| e.endpoints()), Some(("b", "c")));

        let empty: Graph<u32, ()> = Graph::new(1);
        assert!(empty.min_edge().is_none());
        assert!(empty.max_edge().is_none());
    }

    #[test]
    fn reverse_is_independent() {
        let graph = sample();
        let mut reversed = graph.reverse();

        assert_eq!(reversed.num_vertices(), graph.num_vertices());
        assert_eq!(reversed.num_edges(), graph.num_edges());
        for edge in graph.edges() {
            let back = reversed.get_edge(edge.destination, edge.source);
            assert_eq!(back.map(|e| e.weight), Some(edge.weight));
        }
        // edges keep their positions in the edge list
        for (edge, back) in graph.edges().zip(reversed.edges()) {
            assert_eq!((edge.source, edge.destination), (back.destination, back.source));
        }
        assert!(
            graph
                .vertices()
                .map(Vertex::id)
                .eq(reversed.vertices().map(Vertex::id))
        );

        reversed.insert_vertex("e", 4);
        reversed.add_edge(&"e", &"a", 1.0);
        if let Some(value) = reversed.vertex_value_mut(&"a") {
            *value = 42;
        }
        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.num_edges(), 4);
        assert_eq!(graph.get_vertex(&"a").map(|v| *v.value()), Some(0));
    }

    #[test]
    fn edges_in_insertion_order() {
        let graph = sample();
        let weights = graph.edges().map(|e| e.weight).collect_vec();
        assert_eq!(weights, vec![2.0, 1.0, 4.0, 1.0]);

        let incoming = graph.in_edges(2).map(|(_, e)| e.source).collect_vec();
        assert_eq!(incoming, vec![0, 1]);
    }
}
