use super::*;

/// Chordality tests based on perfect elimination orderings.
///
/// A graph is chordal iff the reverse of any of its Lex-BFS orderings is a perfect
/// elimination ordering, i.e. every node forms a clique with its neighbors that are
/// eliminated after it.
pub trait Chordality: AdjacencyList + AdjacencyTest + Sized {
    /// Checks the **reverse** of `order` for being a perfect elimination ordering and returns
    /// the first node whose later neighbors do not form a clique (or `None` if there is none).
    ///
    /// For each node `v` let `later(v)` be its neighbors eliminated after `v` and `u` the first
    /// of them. It suffices to check that `later(v) \ {u}` is contained in `N(u)`; the
    /// remaining adjacencies follow from the check of `u` itself.
    ///
    /// # Errors
    /// Returns [`RecognitionError::InvalidOrdering`] if `order` is not a permutation of `0..n`.
    fn find_non_simplicial_vertex(&self, order: &[Node]) -> Result<Option<Node>> {
        let rank = elimination_ranks(self.number_of_nodes(), order)?;

        for &v in order.iter().rev() {
            let rank_v = rank[v as usize];

            let Some(u) = self
                .neighbors_of(v)
                .filter(|&w| rank[w as usize] > rank_v)
                .min_by_key(|&w| rank[w as usize])
            else {
                continue;
            };

            if self
                .neighbors_of(v)
                .any(|w| rank[w as usize] > rank_v && w != u && !self.has_edge(u, w))
            {
                trace!(node = v, parent = u, "later neighbors do not form a clique");
                return Ok(Some(v));
            }
        }

        Ok(None)
    }

    /// Returns *true* if the reverse of `order` is a perfect elimination ordering.
    ///
    /// # Errors
    /// Returns [`RecognitionError::InvalidOrdering`] if `order` is not a permutation of `0..n`.
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*};
    ///
    /// // two triangles sharing the edge (1, 2)
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)]);
    /// assert!(g.is_perfect_elimination_order(&[0, 1, 2, 3]).unwrap());
    /// // eliminating 1 first leaves 0 and 3 unconnected
    /// assert!(!g.is_perfect_elimination_order(&[0, 2, 3, 1]).unwrap());
    /// ```
    fn is_perfect_elimination_order(&self, order: &[Node]) -> Result<bool> {
        Ok(self.find_non_simplicial_vertex(order)?.is_none())
    }

    /// Returns *true* if the graph has no induced cycle of length at least 4.
    ///
    /// # Errors
    /// Returns [`RecognitionError::EmptyGraph`] if the graph has no nodes.
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(4);
    /// g.connect_cycle([0, 1, 2, 3]);
    /// assert!(!g.is_chordal().unwrap());
    ///
    /// g.add_edge(0, 2);
    /// assert!(g.is_chordal().unwrap());
    /// ```
    fn is_chordal(&self) -> Result<bool> {
        let order = self.lex_bfs_order()?;
        self.is_perfect_elimination_order(&order)
    }
}

impl<G> Chordality for G where G: AdjacencyList + AdjacencyTest + Sized {}

/// Maps every node to its position in the **reversed** ordering.
fn elimination_ranks(n: NumNodes, order: &[Node]) -> Result<Vec<NumNodes>> {
    let invalid = || RecognitionError::InvalidOrdering {
        expected: n,
        found: order.len(),
    };

    if order.len() != n as usize {
        return Err(invalid());
    }

    let mut rank = vec![INVALID_NODE; n as usize];
    for (i, &v) in order.iter().rev().enumerate() {
        match rank.get_mut(v as usize) {
            Some(r) if *r == INVALID_NODE => *r = i as NumNodes,
            _ => return Err(invalid()),
        }
    }

    Ok(rank)
}
