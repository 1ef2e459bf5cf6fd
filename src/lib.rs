/*!
`lexgraphs` recognizes structural classes of **undirected graphs** via
**lex**icographic breadth-first search:

- it computes Lex-BFS orderings by partition refinement,
- it decides whether a graph is **chordal** (has no induced cycle of length at least 4),
- it decides whether a graph is an **interval graph** (chordal and free of asteroidal triples).

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; `Edge(u, v)` and `Edge(v, u)`
describe the same edge.
Input files may use arbitrary integer ids; [`io`] maps them onto `0..n` and returns the mapping
([`utils::NodeLabels`]) along with the graph.

### Available Representations

See the [`repr`] module for the full list of graph storage backends:

- [`AdjArrayUndir`](crate::repr::AdjArrayUndir)
- [`SparseAdjArrayUndir`](crate::repr::SparseAdjArrayUndir)
- [`AdjMatrixUndir`](crate::repr::AdjMatrixUndir)

Every algorithm works on all of them.

# Design

Algorithms are provided as configurable structs/iterators (e.g. [`algo::LexBFS`],
[`algo::IntervalRecognition`]), and additionally via traits implemented on the graph itself,
making them usable without configuring anything beforehand.
Algorithms only fail if a precondition is violated (see [`error::RecognitionError`]).

# Usage

- [`prelude`] includes definitions for nodes, edges, basic graph operations, and all graph representations,
- [`algo`] includes the recognition algorithms such as `graph.lex_bfs_order()`, `graph.is_chordal()` and `graph.is_interval()`,
- [`gens`] includes generators for random graphs and deterministic substructures such as paths/cycles/cliques,
- [`io`] includes readers for edge lists,
- [`report`] formats results for printing.

```rust
use lexgraphs::{prelude::*, algo::*};

// a path with a triangle on its end
let g = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (2, 4)]);

assert_eq!(g.lex_bfs_order().unwrap(), vec![0, 1, 2, 3, 4]);
assert!(g.is_chordal().unwrap());
assert!(g.is_interval().unwrap());
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod report;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `lexgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
