/*!
# Graph Representations

All representations store an undirected graph over the dense node range `0..n`.
They only differ in how a single neighborhood is stored:

- [`AdjArrayUndir`]: neighborhoods as `Vec<Node>` (insertion order),
- [`SparseAdjArrayUndir`]: neighborhoods as `SmallVec` (inline for small degrees),
- [`AdjMatrixUndir`]: neighborhoods as [`NodeBitSet`] (constant time adjacency tests).
*/

use crate::{ops::*, *};

mod neighborhood;
mod undirected;

pub use neighborhood::*;
pub use undirected::*;
