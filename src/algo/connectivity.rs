use super::*;

impl<K, V> Graph<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Computes the strongly connected components with Kosaraju's algorithm.
    ///
    /// The reversed graph is searched in depth-first post-order; walking that order
    /// backwards, every vertex not yet assigned starts a depth-first search on this
    /// graph that labels everything it reaches with the next component id.
    /// Component ids are assigned from `1` upwards and two vertices share an id
    /// iff they are mutually reachable.
    ///
    /// # Examples
    /// ```
    /// use kgraphs::{graph::Graph, table::SymbolTable};
    ///
    /// let mut graph = Graph::new(3);
    /// for id in ["a", "b", "c"] {
    ///     graph.insert_vertex(id, ());
    /// }
    /// graph.add_edge(&"a", &"b", 1.0);
    /// graph.add_edge(&"b", &"a", 1.0);
    ///
    /// let components = graph.strongly_connected_components();
    /// assert_eq!(components.get(&"a"), components.get(&"b"));
    /// assert_ne!(components.get(&"a"), components.get(&"c"));
    /// ```
    pub fn strongly_connected_components(&self) -> LinearProbing<K, usize> {
        let reversed = self.reverse_with(|_| ());
        let mut post_order = reversed.post_order();
        let mut order = Vec::with_capacity(self.num_vertices());
        while let Some(u) = post_order.next_vertex() {
            order.push(u);
        }

        let mut components = LinearProbing::with_capacity(self.num_vertices());
        let mut search = Dfs::empty(self);
        let mut num_components = 0;

        for &root in order.iter().rev() {
            if !search.restart_at(root) {
                continue;
            }

            num_components += 1;
            while let Some(u) = search.next_vertex() {
                components.put(self.id_at(u).clone(), num_components);
            }
        }

        debug!(
            vertices = self.num_vertices(),
            components = num_components,
            "computed strongly connected components"
        );
        components
    }

    /// Returns the number of strongly connected components.
    pub fn number_of_strongly_connected_components(&self) -> usize {
        self.strongly_connected_components()
            .values()
            .copied()
            .max()
            .unwrap_or(0)
    }
}

/// Groups a component labelling into sorted components, ordered by their smallest member.
pub fn sort_components<K>(labels: &LinearProbing<K, usize>) -> Vec<Vec<K>>
where
    K: Hash + Eq + Ord + Clone,
{
    let mut components = labels
        .iter()
        .map(|(id, &c)| (c, id.clone()))
        .into_group_map()
        .into_values()
        .collect_vec();
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}
