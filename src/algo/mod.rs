/*!
# Graph Algorithms

All algorithms are implemented as methods on [`Graph`], so after
```rust
use kgraphs::graph::Graph;
```
traversals (`graph.bfs(&start)`), topological orders, strongly connected
components, minimum spanning trees and shortest paths are at hand.
If possible, algorithms are also provided as **iterators**
(e.g. [`TraversalSearch`], [`PostOrderSearch`], [`TopoSearch`]), making it easy to
consume results lazily.

Visited state is never stored in the graph: every search allocates its own
[`Set`], so searches are reentrant and leave the graph untouched.
*/

mod connectivity;
mod mst;
mod shortest_path;
mod traversal;

use std::hash::Hash;

use itertools::Itertools;
use tracing::debug;

use crate::{
    graph::*,
    pq::MinPQ,
    seq::{ArrayList, Queue, Sequence, Stack},
    table::{LinearProbing, SymbolTable},
    utils::*,
};

pub use connectivity::*;
pub use mst::*;
pub use shortest_path::*;
pub use traversal::*;
