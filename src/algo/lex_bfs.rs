/*!
# Lexicographic Breadth-First Search

Lex-BFS by **partition refinement**. The unvisited nodes are kept in an ordered sequence of
cells, initially a single cell holding `0..n` in increasing order. Each step takes the first
node `u` of the first cell and splits every cell into the unvisited neighbors of `u` (which
move into a new cell directly in front) and the rest. Within a cell nodes keep their relative
order, so the produced ordering is fully determined by the graph.

The reversed ordering is a perfect elimination ordering iff the graph is chordal,
see [`Chordality`](super::Chordality).

# Example
```rust
use lexgraphs::{prelude::*, algo::*};

// triangle 0-1-2 with a pendant node 3 at 2
let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]);
assert_eq!(g.lex_bfs_order().unwrap(), vec![0, 1, 2, 3]);
```
*/

use std::collections::VecDeque;

use stream_bitset::prelude::*;

use super::*;

/// Iterator over the nodes of a graph in Lex-BFS order.
///
/// Every node is yielded exactly once; the iterator is exhausted when no cells remain.
pub struct LexBFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    /// Ordered cells of unvisited nodes; none of them is empty
    cells: VecDeque<VecDeque<Node>>,
    unvisited: NodeBitSet,
    /// Scratch space marking the unvisited neighbors of the current node
    marked: NodeBitSet,
}

impl<'a, G> LexBFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates the search with a single initial cell containing all nodes in increasing order
    pub fn new(graph: &'a G) -> Self {
        let mut cells = VecDeque::new();
        if !graph.is_empty() {
            cells.push_back(graph.vertices_range().collect());
        }

        Self {
            graph,
            cells,
            unvisited: NodeBitSet::new_all_set(graph.number_of_nodes()),
            marked: graph.vertex_bitset_unset(),
        }
    }

    /// Number of nodes not yet yielded
    pub fn remaining(&self) -> usize {
        self.unvisited.cardinality() as usize
    }

    /// Number of cells of the current partition
    pub fn number_of_cells(&self) -> usize {
        self.cells.len()
    }

    /// Splits all cells by the unvisited neighbors of `u` (which must already be visited)
    fn refine(&mut self, u: Node) {
        let mut pending = 0usize;
        for v in self.graph.neighbors_of(u) {
            if self.unvisited.get_bit(v) && !self.marked.set_bit(v) {
                pending += 1;
            }
        }

        let mut i = 0;
        while pending > 0 && i < self.cells.len() {
            let (moved, kept): (VecDeque<Node>, VecDeque<Node>) = self.cells[i]
                .iter()
                .partition(|&&v| self.marked.get_bit(v));

            if moved.is_empty() {
                i += 1;
                continue;
            }

            pending -= moved.len();
            for &v in &moved {
                self.marked.clear_bit(v);
            }

            if kept.is_empty() {
                // the whole cell consists of neighbors; splitting would leave an empty cell
                i += 1;
            } else {
                self.cells[i] = kept;
                self.cells.insert(i, moved);
                i += 2;
            }
        }

        debug_assert_eq!(pending, 0);
    }
}

impl<G> Iterator for LexBFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.cells.front_mut()?;
        let u = first.pop_front()?;
        if first.is_empty() {
            self.cells.pop_front();
        }

        self.unvisited.clear_bit(u);
        self.refine(u);

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<G> ExactSizeIterator for LexBFS<'_, G> where G: AdjacencyList {}

/// Provides Lex-BFS directly on graphs
pub trait LexicographicSearch: AdjacencyList + Sized {
    /// Returns an iterator over all nodes in Lex-BFS order.
    /// Yields nothing for a graph without nodes.
    fn lex_bfs(&self) -> LexBFS<'_, Self> {
        LexBFS::new(self)
    }

    /// Computes the complete Lex-BFS ordering.
    ///
    /// # Errors
    /// Returns [`RecognitionError::EmptyGraph`] if the graph has no nodes.
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 3), (3, 1), (1, 2)]);
    /// assert_eq!(g.lex_bfs_order().unwrap(), vec![0, 3, 1, 2]);
    /// assert!(AdjArrayUndir::new(0).lex_bfs_order().is_err());
    /// ```
    fn lex_bfs_order(&self) -> Result<Vec<Node>> {
        if self.is_empty() {
            return Err(RecognitionError::EmptyGraph);
        }

        let order: Vec<Node> = self.lex_bfs().collect();
        debug!(nodes = order.len(), "computed Lex-BFS ordering");
        Ok(order)
    }
}

impl<G> LexicographicSearch for G where G: AdjacencyList + Sized {}
