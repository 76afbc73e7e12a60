use super::*;

/// A vertex of a [`Graph`]: its id, its payload and its incident edges.
///
/// Outgoing edges are kept in a [`SeparateChaining`] table keyed by the id of the
/// neighbor, so `src -> dst` is found in `O(1)` expected time. Incoming edges are
/// only listed; they serve the undirected view used by spanning trees.
#[derive(Debug, Clone)]
pub struct Vertex<K, V> {
    id: K,
    value: V,
    out_edges: SeparateChaining<K, EdgeIdx>,
    in_edges: ArrayList<EdgeIdx>,
}

/// Initial number of slots of a vertex' adjacency table
const ADJACENCY_CAPACITY: usize = 2;

impl<K, V> Vertex<K, V>
where
    K: Hash + Eq,
{
    pub(crate) fn new(id: K, value: V) -> Self {
        Self {
            id,
            value,
            out_edges: SeparateChaining::with_capacity(ADJACENCY_CAPACITY),
            in_edges: ArrayList::new(),
        }
    }

    pub fn id(&self) -> &K {
        &self.id
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Returns the number of outgoing edges
    pub fn out_degree(&self) -> usize {
        self.out_edges.size()
    }

    /// Returns the number of incoming edges
    pub fn in_degree(&self) -> usize {
        self.in_edges.size()
    }

    /// Returns *true* if there is an edge from this vertex to `neighbor`
    pub fn has_edge_to(&self, neighbor: &K) -> bool {
        self.out_edges.contains(neighbor)
    }

    pub(crate) fn edge_to(&self, neighbor: &K) -> Option<EdgeIdx> {
        self.out_edges.get(neighbor).copied()
    }

    pub(crate) fn link_out(&mut self, neighbor: K, edge: EdgeIdx) {
        self.out_edges.put(neighbor, edge);
    }

    pub(crate) fn link_in(&mut self, edge: EdgeIdx) {
        self.in_edges.add_last(edge);
    }

    pub(crate) fn out_edge_indices(&self) -> chaining::Iter<'_, K, EdgeIdx> {
        self.out_edges.iter()
    }

    pub(crate) fn in_edge_indices(&self) -> std::slice::Iter<'_, EdgeIdx> {
        self.in_edges.iter()
    }
}
