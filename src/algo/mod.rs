/*!
# Graph Algorithms

Algorithms are implemented as **extension traits** on every graph that provides the required
basic operations, and additionally as configurable structs/iterators. All of them are
re-exported at the top level of this module, so you can simply do:
```rust
use lexgraphs::algo::*;
```

- [`Traversal`] and [`Connectivity`]: breadth-first search and connected components, optionally
  with some nodes excluded,
- [`LexicographicSearch`]: Lex-BFS orderings by partition refinement,
- [`Chordality`]: perfect elimination orderings and chordal graph recognition,
- [`ComponentLabels`]: components of `G - N[x]` for every node `x`,
- [`IntervalTest`]: interval graph recognition via asteroidal triples.

If possible, results are provided as **iterators**, making it easy to consume them lazily.
*/

mod chordal;
mod components;
mod connectivity;
mod interval;
mod lex_bfs;
mod traversal;

use tracing::{debug, trace};

use crate::{error::*, prelude::*};

pub use chordal::*;
pub use components::*;
pub use connectivity::*;
pub use interval::*;
pub use lex_bfs::*;
pub use traversal::*;
