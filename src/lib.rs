/*!
`kgraphs` is a data structure & algorithms library for **k**eyed, weighted, directed graphs
and the containers they are built from.

# Representation

Vertices are identified by arbitrary hashable keys `K` and carry a payload `V`.
Internally, vertices and edges live in arenas addressed by `u32` indices
([`VertexIdx`](graph::VertexIdx), [`EdgeIdx`](graph::EdgeIdx)); a hash table
maps keys to vertex indices and every vertex maps the keys of its out-neighbors
to edge indices. Edge weights are `f64`.

Graphs only grow. Inserting an existing vertex, or adding an edge whose
endpoints are unknown or which already exists, leaves the graph unchanged.

# Containers

Everything is built on the crate's own containers, which can also be used on their own:
- [`seq`]: the 1-indexed [`Sequence`](seq::Sequence) trait with [`ArrayList`](seq::ArrayList),
  plus [`Stack`](seq::Stack) and [`Queue`](seq::Queue),
- [`table`]: hash tables with separate chaining and with linear probing behind the
  common [`SymbolTable`](table::SymbolTable) trait; both keep a prime number of slots
  and grow once their load factor exceeds `0.7`,
- [`pq`]: a binary min-heap [`MinPQ`](pq::MinPQ) with pluggable comparator,
- [`sort`]: classic comparison sorts over any `Sequence`, configurable via [`Sorter`](sort::Sorter).

# Usage

- [`graph`] includes the [`Graph`](graph::Graph) type and its construction and query operations,
- [`algo`] implements traversals (`graph.bfs(&start)`), topological orders, strongly
  connected components, minimum spanning trees and shortest paths on `Graph`,
- [`utils`] includes the [`Set`](utils::Set) abstraction used as visited set by traversals.

In most use-cases, `use kgraphs::prelude::*;` suffices for your needs.

```
use kgraphs::prelude::*;

let mut graph = Graph::new(3);
for id in ["A", "B", "C"] {
    graph.insert_vertex(id, ());
}
graph.add_edge(&"A", &"B", 1.0);
graph.add_edge(&"B", &"A", 1.0);

let components = graph.strongly_connected_components();
assert_eq!(components.get(&"A"), components.get(&"B"));
assert_ne!(components.get(&"A"), components.get(&"C"));
```

# Logging
The crate emits [`tracing`] events (rehashes and algorithm summaries at `debug`,
ignored graph mutations at `trace`) and leaves the choice of subscriber to the caller.
*/

pub mod algo;
pub mod error;
pub mod graph;
pub mod pq;
pub mod seq;
pub mod sort;
pub mod table;
pub(crate) mod testing;
pub mod utils;

/// `kgraphs::prelude` includes the graph, the containers and the traits needed to use them.
pub mod prelude {
    pub use super::{
        error::{ContainerError, Result},
        graph::*,
        pq::MinPQ,
        seq::{ArrayList, Queue, Sequence, Stack},
        sort::{SortAlgorithm, Sorter},
        table::{LinearProbing, SeparateChaining, SymbolTable},
    };
}
