/*!
Graph traversals and traversal-derived orderings.

This module provides:
- [`TraversalSearch`], a lazy BFS/DFS iterator parameterized by its frontier
  ([`Queue`] for BFS, [`Stack`] for DFS) and its visited [`Set`],
- [`PostOrderSearch`], a depth-first post-order over all vertices,
- [`TopoSearch`], Kahn's algorithm, used to decide acyclicity.

Every search owns its visited set, so a graph can be traversed any number of
times, even by several searches at once.
*/

use super::*;

/// Abstraction for the traversal frontier.
///
/// The frontier determines the order of the traversal:
/// - [`Queue`] -> FIFO -> **BFS**
/// - [`Stack`] -> LIFO -> **DFS**
pub trait VertexSequencer: Default {
    /// If *true*, vertices are marked when they enter the frontier. Otherwise they
    /// are marked when they leave it, and entries that were marked in between are skipped.
    const MARK_ON_PUSH: bool;

    /// Pushes a vertex into the frontier.
    fn push(&mut self, u: VertexIdx);

    /// Removes and returns the next vertex of the frontier.
    fn pop(&mut self) -> Option<VertexIdx>;

    /// Returns the number of vertices currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl VertexSequencer for Queue<VertexIdx> {
    const MARK_ON_PUSH: bool = true;

    fn push(&mut self, u: VertexIdx) {
        self.enqueue(u)
    }
    fn pop(&mut self) -> Option<VertexIdx> {
        self.dequeue()
    }
    fn cardinality(&self) -> usize {
        self.size()
    }
}

// A vertex may sit on the stack several times; only its topmost copy is
// entered, which keeps the order a depth-first preorder.
impl VertexSequencer for Stack<VertexIdx> {
    const MARK_ON_PUSH: bool = false;

    fn push(&mut self, u: VertexIdx) {
        Stack::push(self, u)
    }
    fn pop(&mut self) -> Option<VertexIdx> {
        Stack::pop(self)
    }
    fn cardinality(&self) -> usize {
        self.size()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// BFS marks vertices when they enter the frontier, DFS when they are entered.
/// Either way every reachable vertex is yielded exactly once.
pub struct TraversalSearch<'a, K, V, S, VS = VertexSet> {
    graph: &'a Graph<K, V>,
    visited: VS,
    sequencer: S,
}

/// A **breadth-first search** iterator using a [`Queue`].
pub type Bfs<'a, K, V> = TraversalSearch<'a, K, V, Queue<VertexIdx>>;

/// A **depth-first search** iterator using a [`Stack`].
pub type Dfs<'a, K, V> = TraversalSearch<'a, K, V, Stack<VertexIdx>>;

impl<'a, K, V, S, VS> TraversalSearch<'a, K, V, S, VS>
where
    K: Hash + Eq + Clone,
    S: VertexSequencer,
    VS: Set<VertexIdx> + FromCapacity,
{
    /// Creates a search that has no start vertex yet; see [`TraversalSearch::restart_at`].
    pub(crate) fn empty(graph: &'a Graph<K, V>) -> Self {
        Self {
            graph,
            visited: VS::from_capacity(graph.num_vertices()),
            sequencer: S::default(),
        }
    }

    /// Creates a search starting at the vertex at arena index `start`.
    pub(crate) fn new(graph: &'a Graph<K, V>, start: VertexIdx) -> Self {
        let mut search = Self::empty(graph);
        search.restart_at(start);
        search
    }
}

impl<'a, K, V, S, VS> TraversalSearch<'a, K, V, S, VS>
where
    K: Hash + Eq + Clone,
    S: VertexSequencer,
    VS: Set<VertexIdx>,
{
    /// Continues the search at `u` and returns *true*, unless `u` was already visited.
    /// Only meaningful once the search came to a halt.
    pub(crate) fn restart_at(&mut self, u: VertexIdx) -> bool {
        if S::MARK_ON_PUSH {
            if self.visited.insert(u) {
                return false;
            }
        } else if self.visited.contains(&u) {
            return false;
        }
        self.sequencer.push(u);
        true
    }

    /// Returns the set of vertices discovered so far: for BFS those that entered
    /// the frontier, for DFS those that were yielded.
    pub fn visited(&self) -> &VS {
        &self.visited
    }

    /// Returns *true* if the vertex with this id was discovered so far.
    pub fn did_visit(&self, id: &K) -> bool {
        self.graph
            .index_of(id)
            .is_some_and(|u| self.visited.contains(&u))
    }

    /// Returns the arena index of the next vertex.
    pub(crate) fn next_vertex(&mut self) -> Option<VertexIdx> {
        let u = loop {
            let u = self.sequencer.pop()?;
            if S::MARK_ON_PUSH || !self.visited.insert(u) {
                break u;
            }
        };

        for (_, edge) in self.graph.out_edges(u) {
            let v = edge.destination;
            if S::MARK_ON_PUSH {
                if !self.visited.insert(v) {
                    self.sequencer.push(v);
                }
            } else if !self.visited.contains(&v) {
                self.sequencer.push(v);
            }
        }
        Some(u)
    }
}

impl<'a, K, V, S, VS> Iterator for TraversalSearch<'a, K, V, S, VS>
where
    K: Hash + Eq + Clone,
    S: VertexSequencer,
    VS: Set<VertexIdx>,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let graph: &'a Graph<K, V> = self.graph;
        self.next_vertex().map(|u| graph.id_at(u))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let unvisited = self.graph.num_vertices() - self.visited.len();
        if S::MARK_ON_PUSH {
            let pending = self.sequencer.cardinality();
            (pending, Some(unvisited + pending))
        } else {
            // stacked entries may be stale
            (0, Some(unvisited))
        }
    }
}

/// Iterator yielding every vertex in depth-first post-order.
///
/// Roots are taken in insertion order; a vertex is yielded once all its
/// out-neighbors have been yielded or are on the current path. The search keeps
/// its own stack of frames, so path length is not limited by the call stack.
pub struct PostOrderSearch<'a, K, V> {
    graph: &'a Graph<K, V>,
    visited: VertexSet,
    frames: Vec<(VertexIdx, OutEdges<'a, K>)>,
    next_root: VertexIdx,
}

impl<'a, K, V> PostOrderSearch<'a, K, V>
where
    K: Hash + Eq + Clone,
{
    pub(crate) fn new(graph: &'a Graph<K, V>) -> Self {
        Self {
            graph,
            visited: VertexSet::new(graph.num_vertices()),
            frames: Vec::new(),
            next_root: 0,
        }
    }

    /// Returns the arena index of the next vertex.
    pub(crate) fn next_vertex(&mut self) -> Option<VertexIdx> {
        let graph = self.graph;
        let n = graph.num_vertices() as VertexIdx;

        loop {
            if self.frames.is_empty() {
                while self.next_root < n && self.visited.contains(&self.next_root) {
                    self.next_root += 1;
                }
                if self.next_root == n {
                    return None;
                }

                let root = self.next_root;
                self.visited.insert(root);
                self.frames.push((root, graph.out_edges(root)));
            }

            let visited = &mut self.visited;
            let (u, out_edges) = self.frames.last_mut()?;
            match out_edges.find(|(_, edge)| !visited.contains(&edge.destination)) {
                Some((_, edge)) => {
                    let v = edge.destination;
                    visited.insert(v);
                    self.frames.push((v, graph.out_edges(v)));
                }
                None => {
                    let u = *u;
                    self.frames.pop();
                    return Some(u);
                }
            }
        }
    }
}

impl<'a, K, V> Iterator for PostOrderSearch<'a, K, V>
where
    K: Hash + Eq + Clone,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let graph: &'a Graph<K, V> = self.graph;
        self.next_vertex().map(|u| graph.id_at(u))
    }
}

/// Iterator implementing topological ordering over a directed acyclic graph.
///
/// Uses Kahn's algorithm:
/// - Initializes with all vertices of in-degree 0.
/// - Repeatedly removes a vertex, decreasing the in-degrees of its successors,
///   and pushes successors that reach in-degree 0.
/// - Stops once all vertices are output or only cycles remain.
pub struct TopoSearch<'a, K, V> {
    graph: &'a Graph<K, V>,
    in_degs: Vec<usize>,
    stack: Stack<VertexIdx>,
}

impl<'a, K, V> TopoSearch<'a, K, V>
where
    K: Hash + Eq + Clone,
{
    fn new(graph: &'a Graph<K, V>) -> Self {
        let in_degs = graph.vertices().map(Vertex::in_degree).collect_vec();

        let mut stack = Stack::new();
        for (u, _) in in_degs.iter().enumerate().filter(|(_, d)| **d == 0) {
            stack.push(u as VertexIdx);
        }

        Self {
            graph,
            in_degs,
            stack,
        }
    }
}

impl<'a, K, V> Iterator for TopoSearch<'a, K, V>
where
    K: Hash + Eq + Clone,
{
    type Item = &'a K;

    /// Returns the next vertex in topological order, if available.
    ///
    /// If the graph has a cycle, iteration terminates without covering all vertices.
    fn next(&mut self) -> Option<Self::Item> {
        let graph: &'a Graph<K, V> = self.graph;
        let u = self.stack.pop()?;

        for (_, edge) in graph.out_edges(u) {
            let v = edge.destination as usize;
            self.in_degs[v] -= 1;
            if self.in_degs[v] == 0 {
                self.stack.push(edge.destination);
            }
        }

        Some(graph.id_at(u))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.size(), Some(self.graph.num_vertices()))
    }
}

impl<K, V> Graph<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Returns an iterator over the vertices reachable from `start` in
    /// **breadth-first** order, or `None` if `start` is unknown.
    pub fn bfs_search(&self, start: &K) -> Option<Bfs<'_, K, V>> {
        self.index_of(start).map(|u| Bfs::new(self, u))
    }

    /// Returns an iterator over the vertices reachable from `start` in
    /// **depth-first** order, or `None` if `start` is unknown.
    pub fn dfs_search(&self, start: &K) -> Option<Dfs<'_, K, V>> {
        self.index_of(start).map(|u| Dfs::new(self, u))
    }

    /// Returns the ids of all vertices reachable from `start` in breadth-first
    /// visiting order, `start` first. Empty if `start` is unknown.
    ///
    /// # Examples
    /// ```
    /// use kgraphs::graph::Graph;
    /// use kgraphs::seq::Sequence;
    ///
    /// let mut graph = Graph::new(3);
    /// for id in ['a', 'b', 'c'] {
    ///     graph.insert_vertex(id, ());
    /// }
    /// graph.add_edge(&'a', &'b', 1.0);
    /// graph.add_edge(&'b', &'c', 1.0);
    ///
    /// let order: Vec<char> = graph.bfs(&'a').into_iter().copied().collect();
    /// assert_eq!(order, vec!['a', 'b', 'c']);
    /// assert!(graph.bfs(&'z').is_empty());
    /// ```
    pub fn bfs(&self, start: &K) -> ArrayList<&K> {
        self.bfs_search(start)
            .map(|search| search.collect())
            .unwrap_or_default()
    }

    /// Returns the ids of all vertices reachable from `start` in depth-first
    /// visiting order, `start` first. Empty if `start` is unknown.
    pub fn dfs(&self, start: &K) -> ArrayList<&K> {
        self.dfs_search(start)
            .map(|search| search.collect())
            .unwrap_or_default()
    }

    /// Returns an iterator over all vertices in depth-first post-order.
    pub fn post_order(&self) -> PostOrderSearch<'_, K, V> {
        PostOrderSearch::new(self)
    }

    /// Returns a stack of all vertex ids that pops them in reverse post-order.
    ///
    /// For an acyclic graph, popping the stack yields a topological order: every
    /// vertex is popped before all of its out-neighbors. For a graph with cycles
    /// the stack still holds every vertex once, but without that guarantee;
    /// check with [`Graph::is_acyclic`].
    ///
    /// # Examples
    /// ```
    /// use kgraphs::graph::Graph;
    ///
    /// let mut graph = Graph::new(3);
    /// for id in [1, 2, 3] {
    ///     graph.insert_vertex(id, ());
    /// }
    /// graph.add_edge(&3, &1, 1.0);
    /// graph.add_edge(&1, &2, 1.0);
    ///
    /// let order: Vec<i32> = graph.topological_order().into_iter().copied().collect();
    /// assert_eq!(order, vec![3, 1, 2]);
    /// ```
    pub fn topological_order(&self) -> Stack<&K> {
        let mut order = Stack::new();
        for id in self.post_order() {
            order.push(id);
        }
        order
    }

    /// Returns an iterator that yields the vertices in topological order.
    /// On a graph with cycles, the vertices on or behind a cycle are never yielded.
    pub fn topo_search(&self) -> TopoSearch<'_, K, V> {
        TopoSearch::new(self)
    }

    /// Returns *true* if the graph has no directed cycle.
    pub fn is_acyclic(&self) -> bool {
        self.topo_search().count() == self.num_vertices()
    }
}
