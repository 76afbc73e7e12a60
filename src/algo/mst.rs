use super::*;

impl<K, V> Graph<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Computes a minimum spanning tree of the vertices reachable from `origin`
    /// with the lazy variant of Prim's algorithm.
    ///
    /// Edges are treated as undirected: whenever a vertex joins the tree, its
    /// outgoing and incoming edges towards vertices outside the tree enter a
    /// [`MinPQ`] keyed by weight. Popped edges whose endpoints both joined the
    /// tree in the meantime are skipped. The accepted edges are returned in the
    /// order they were accepted; the list is empty if `origin` is unknown.
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
    /// graph.add_edge(&"b", &"c", 2.0);
    /// graph.add_edge(&"a", &"c", 3.0);
    ///
    /// let tree = graph.mst_prim_lazy(&"a");
    /// assert_eq!(tree.iter().map(|e| e.weight).sum::<f64>(), 3.0);
    /// ```
    pub fn mst_prim_lazy(&self, origin: &K) -> ArrayList<EdgeRef<'_, K>> {
        let mut tree = ArrayList::new();
        let Some(root) = self.index_of(origin) else {
            return tree;
        };

        let mut in_tree = VertexSet::new(self.num_vertices());
        let mut crossing = MinPQ::new();
        self.grow_tree(root, &mut in_tree, &mut crossing);

        while let Some((_, e)) = crossing.del_min() {
            let edge = self.edge_at(e);
            let next = match (
                in_tree.contains(&edge.source),
                in_tree.contains(&edge.destination),
            ) {
                (true, false) => edge.destination,
                (false, true) => edge.source,
                _ => continue,
            };

            tree.add_last(self.edge_ref(e));
            self.grow_tree(next, &mut in_tree, &mut crossing);
        }

        debug!(
            edges = tree.size(),
            vertices = in_tree.len(),
            "computed minimum spanning tree"
        );
        tree
    }

    /// Adds `u` to the tree and queues every edge leaving the tree at `u`
    fn grow_tree(
        &self,
        u: VertexIdx,
        in_tree: &mut VertexSet,
        crossing: &mut MinPQ<Weight, EdgeIdx>,
    ) {
        in_tree.insert(u);
        for (e, edge) in self.out_edges(u).chain(self.in_edges(u)) {
            if !in_tree.contains(&edge.other(u)) {
                crossing.insert(edge.weight, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::weighted_graph;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn total_weight(tree: &ArrayList<EdgeRef<'_, u32>>) -> Weight {
        tree.iter().map(|e| e.weight).sum()
    }

    #[test]
    fn triangle() {
        let mut graph = Graph::new(3);
        for id in ["A", "B", "C"] {
            graph.insert_vertex(id, ());
        }
        for (u, v, w) in [("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 3.0)] {
            graph.add_edge(&u, &v, w);
            graph.add_edge(&v, &u, w);
        }

        let tree = graph.mst_prim_lazy(&"A");
        assert_eq!(tree.size(), 2);
        assert_eq!(tree.iter().map(|e| e.weight).sum::<f64>(), 3.0);
        assert!(tree.iter().all(|e| e.weight < 3.0));
        assert_eq!(tree.iter().map(|e| e.weight).collect_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn unknown_origin() {
        let graph = weighted_graph(2, [(0, 1, 1.0)]);
        assert!(graph.mst_prim_lazy(&5).is_empty());
    }

    #[test]
    fn unreachable_vertices_are_excluded() {
        // 3 and 4 form a separate component
        let graph = weighted_graph(5, [(0, 1, 4.0), (2, 1, 1.0), (3, 4, 1.0)]);
        let tree = graph.mst_prim_lazy(&0);

        assert_eq!(tree.size(), 2);
        assert_eq!(total_weight(&tree), 5.0);
        assert!(tree.iter().all(|e| *e.source < 3 && *e.destination < 3));
    }

    #[test]
    fn isolated_origin() {
        let graph = weighted_graph(3, [(1, 2, 1.0)]);
        assert!(graph.mst_prim_lazy(&0).is_empty());
    }

    #[test]
    fn matches_exhaustive_search() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..20 {
            let n = 6u32;
            let mut edges = Vec::new();
            for u in 0..n {
                for v in u + 1..n {
                    if rng.random_bool(0.6) {
                        edges.push((u, v, rng.random_range(1..20) as f64));
                    }
                }
            }
            let graph = weighted_graph(n, edges.iter().copied());
            let tree = graph.mst_prim_lazy(&0);

            // the tree spans the component of 0
            let both_ways = |(u, v, w): (u32, u32, f64)| [(u, v, w), (v, u, w)];
            let undirected = weighted_graph(n, edges.iter().copied().flat_map(both_ways));
            let reachable = undirected.dfs(&0).size();
            assert_eq!(tree.size(), reachable - 1);

            // and no spanning subset of edges of the component is lighter
            let inside = edges
                .iter()
                .copied()
                .filter(|&(u, _, _)| undirected.bfs(&0).iter().any(|&&x| x == u))
                .collect_vec();
            let best = (0..1u32 << inside.len())
                .filter_map(|mask| {
                    let chosen = inside
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| mask & (1 << i) != 0)
                        .map(|(_, e)| *e)
                        .collect_vec();
                    if chosen.len() != reachable - 1 {
                        return None;
                    }
                    let forest = weighted_graph(n, chosen.iter().copied().flat_map(both_ways));
                    (forest.dfs(&0).size() == reachable)
                        .then(|| chosen.iter().map(|e| e.2).sum::<f64>())
                })
                .fold(f64::INFINITY, f64::min);

            assert_eq!(total_weight(&tree), best);
        }
    }
}
