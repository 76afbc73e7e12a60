/*!
Single-source shortest paths with Dijkstra's algorithm.

The search is lazy: instead of decreasing keys, an improved vertex is pushed
again and outdated queue entries are skipped when popped. Edge weights are
required to be non-negative; a negative cycle would keep the search from
terminating, so debug builds reject negative weights.
*/

use super::*;

/// Shortest-path tree rooted at a source vertex.
///
/// Stores for every vertex its distance from the source and the last edge of a
/// shortest path to it; the source and unreachable vertices have no such edge.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'a, K, V> {
    graph: &'a Graph<K, V>,
    source: VertexIdx,
    distance: Vec<Weight>,
    parent: Vec<Option<EdgeIdx>>,
}

impl<'a, K, V> ShortestPathTree<'a, K, V>
where
    K: Hash + Eq + Clone,
{
    /// Runs Dijkstra's algorithm from the vertex at arena index `source`
    pub(crate) fn new(graph: &'a Graph<K, V>, source: VertexIdx) -> Self {
        let n = graph.num_vertices();
        let mut distance = vec![Weight::INFINITY; n];
        let mut parent = vec![None; n];
        let mut frontier = MinPQ::new();

        distance[source as usize] = 0.0;
        frontier.insert(0.0, source);

        while let Some((dist, u)) = frontier.del_min() {
            if dist > distance[u as usize] {
                continue;
            }

            for (e, edge) in graph.out_edges(u) {
                debug_assert!(edge.weight >= 0.0, "negative edge weight {}", edge.weight);
                let v = edge.destination as usize;
                let candidate = dist + edge.weight;
                if candidate < distance[v] {
                    distance[v] = candidate;
                    parent[v] = Some(e);
                    frontier.insert(candidate, edge.destination);
                }
            }
        }

        debug!(
            reached = distance.iter().filter(|d| d.is_finite()).count(),
            vertices = n,
            "computed shortest path tree"
        );

        Self {
            graph,
            source,
            distance,
            parent,
        }
    }

    /// Returns the id of the root
    pub fn source(&self) -> &'a K {
        self.graph.id_at(self.source)
    }

    /// Returns the length of a shortest path to `id`, or `None` if `id` is
    /// unknown or unreachable
    pub fn distance_to(&self, id: &K) -> Option<Weight> {
        let u = self.graph.index_of(id)?;
        let distance = self.distance[u as usize];
        distance.is_finite().then_some(distance)
    }

    /// Returns *true* if there is a path from the source to `id`
    pub fn has_path_to(&self, id: &K) -> bool {
        self.distance_to(id).is_some()
    }

    /// Returns the last edge of a shortest path to `id`
    pub fn parent_edge(&self, id: &K) -> Option<EdgeRef<'a, K>> {
        let u = self.graph.index_of(id)?;
        self.parent[u as usize].map(|e| self.graph.edge_ref(e))
    }

    /// Returns the edges of a shortest path to `id` on a stack whose top is the
    /// edge leaving the source, so popping yields the path from source to `id`.
    ///
    /// The stack is empty if `id` is the source, unknown or unreachable.
    pub fn path_to(&self, id: &K) -> Stack<EdgeRef<'a, K>> {
        let graph: &'a Graph<K, V> = self.graph;
        let mut path = Stack::new();
        let Some(mut u) = graph.index_of(id) else {
            return path;
        };

        while let Some(e) = self.parent[u as usize] {
            path.push(graph.edge_ref(e));
            u = graph.edge_at(e).source;
        }
        path
    }
}

impl<K, V> Graph<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Computes the shortest-path tree rooted at `source`, `None` if `source` is unknown.
    pub fn shortest_path_tree(&self, source: &K) -> Option<ShortestPathTree<'_, K, V>> {
        self.index_of(source).map(|s| ShortestPathTree::new(self, s))
    }

    /// Returns a shortest path from `source` to `destination` as a stack that pops
    /// its edges in order from `source` to `destination`.
    ///
    /// The stack is empty if either vertex is unknown, if `destination` is not
    /// reachable, or if both are the same vertex.
    ///
    /// # Examples
    /// ```
    /// use kgraphs::graph::Graph;
    ///
    /// let mut graph = Graph::new(3);
    /// for id in ["a", "b", "c"] {
    ///     graph.insert_vertex(id, ());
    /// }
    /// graph.add_edge(&"a", &"b", 1.0);
    /// graph.add_edge(&"b", &"c", 1.0);
    /// graph.add_edge(&"a", &"c", 5.0);
    ///
    /// let hops: Vec<_> = graph
    ///     .shortest_path(&"a", &"c")
    ///     .into_iter()
    ///     .map(|e| (*e.source, *e.destination))
    ///     .collect();
    /// assert_eq!(hops, vec![("a", "b"), ("b", "c")]);
    /// ```
    pub fn shortest_path(&self, source: &K, destination: &K) -> Stack<EdgeRef<'_, K>> {
        self.shortest_path_tree(source)
            .map(|tree| tree.path_to(destination))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::weighted_graph;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn hops<K: Copy>(path: Stack<EdgeRef<'_, K>>) -> Vec<(K, K)> {
        path.into_iter()
            .map(|e| (*e.source, *e.destination))
            .collect_vec()
    }

    #[test]
    fn prefers_cheaper_detour() {
        let mut graph = Graph::new(3);
        for id in ["A", "B", "C"] {
            graph.insert_vertex(id, ());
        }
        graph.add_edge(&"A", &"B", 1.0);
        graph.add_edge(&"B", &"C", 1.0);
        graph.add_edge(&"A", &"C", 5.0);

        let path = graph.shortest_path(&"A", &"C");
        assert_eq!(path.size(), 2);
        assert_eq!(hops(path), vec![("A", "B"), ("B", "C")]);

        let tree = graph.shortest_path_tree(&"A").unwrap();
        assert_eq!(*tree.source(), "A");
        assert_eq!(tree.distance_to(&"C"), Some(2.0));
        assert_eq!(tree.parent_edge(&"C").map(|e| *e.source), Some("B"));
        assert!(tree.parent_edge(&"A").is_none());
    }

    #[test]
    fn unreachable_and_unknown() {
        let graph = weighted_graph(4, [(0, 1, 1.0), (2, 3, 1.0)]);

        assert!(graph.shortest_path(&0, &3).is_empty());
        assert!(graph.shortest_path(&1, &0).is_empty());
        assert!(graph.shortest_path(&9, &0).is_empty());
        assert!(graph.shortest_path(&0, &9).is_empty());
        assert!(graph.shortest_path(&0, &0).is_empty());
        assert!(graph.shortest_path_tree(&9).is_none());

        let tree = graph.shortest_path_tree(&0).unwrap();
        assert!(tree.has_path_to(&1));
        assert!(!tree.has_path_to(&2));
        assert_eq!(tree.distance_to(&0), Some(0.0));
        assert_eq!(tree.distance_to(&3), None);
    }

    #[test]
    fn path_is_connected() {
        let graph = weighted_graph(
            6,
            [
                (0, 1, 7.0),
                (0, 2, 9.0),
                (0, 5, 14.0),
                (1, 2, 10.0),
                (1, 3, 15.0),
                (2, 3, 11.0),
                (2, 5, 2.0),
                (3, 4, 6.0),
                (5, 4, 9.0),
            ],
        );

        let path = hops(graph.shortest_path(&0, &4));
        assert_eq!(path, vec![(0, 2), (2, 5), (5, 4)]);
        assert_eq!(graph.shortest_path_tree(&0).unwrap().distance_to(&4), Some(20.0));
    }

    #[test]
    fn zero_weight_cycle() {
        let graph = weighted_graph(3, [(0, 1, 0.0), (1, 0, 0.0), (1, 2, 0.0), (2, 2, 0.0)]);
        assert_eq!(hops(graph.shortest_path(&0, &2)), vec![(0, 1), (1, 2)]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "negative edge weight")]
    fn rejects_negative_cycle() {
        let graph = weighted_graph(3, [(0, 1, 1.0), (1, 2, -3.0), (2, 0, 1.0)]);
        let _ = graph.shortest_path_tree(&0);
    }

    #[test]
    fn matches_bellman_ford() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);

        for _ in 0..10 {
            let n = 50u32;
            let edges = (0..200)
                .map(|_| {
                    (
                        rng.random_range(0..n),
                        rng.random_range(0..n),
                        rng.random_range(0..100) as f64,
                    )
                })
                .collect_vec();
            let graph = weighted_graph(n, edges);

            // relax every edge n times
            let mut expected = vec![f64::INFINITY; n as usize];
            expected[0] = 0.0;
            for _ in 0..n {
                for edge in graph.edges() {
                    let (u, v) = (*edge.source as usize, *edge.destination as usize);
                    expected[v] = expected[v].min(expected[u] + edge.weight);
                }
            }

            let tree = graph.shortest_path_tree(&0).unwrap();
            for v in 0..n {
                let expected = expected[v as usize];
                assert_eq!(tree.distance_to(&v), expected.is_finite().then_some(expected));

                let path = hops(tree.path_to(&v));
                if v != 0 && expected.is_finite() {
                    assert_eq!(path.first().map(|e| e.0), Some(0));
                    assert_eq!(path.last().map(|e| e.1), Some(v));
                    assert!(path.windows(2).all(|w| w[0].1 == w[1].0));
                } else {
                    assert!(path.is_empty());
                }
            }
        }
    }
}
