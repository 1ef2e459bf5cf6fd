use itertools::Itertools;

use super::*;

/// Connected components of an undirected graph, optionally restricted to the subgraph
/// induced by all nodes that are **not** excluded.
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over the connected components of the graph.
    /// Components are discovered by increasing smallest member.
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (2, 3)]);
    /// assert_eq!(g.connected_components().count(), 2);
    /// ```
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns an iterator over the connected components of `G - ignore`,
    /// i.e. of the subgraph induced by all nodes not in `ignore`.
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*};
    ///
    /// // path 0 - 1 - 2 - 3 - 4 falls apart at 2
    /// let g = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);
    /// let ccs: Vec<_> = g.connected_components_excluding([2]).collect();
    /// assert_eq!(ccs, vec![vec![0, 1], vec![3, 4]]);
    /// ```
    fn connected_components_excluding<I>(&self, ignore: I) -> ConnectedComponents<'_, Self>
    where
        I: IntoIterator<Item = Node>,
    {
        ConnectedComponents::new(self).exclude_nodes(ignore)
    }

    /// Returns *true* if the graph has exactly one connected component
    fn is_connected(&self) -> bool {
        !self.is_empty() && self.bfs(0).count() == self.len()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Iterator over connected components; each component is reported in BFS order
/// starting at its smallest node.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: BFS<'a, G>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    /// Creates an iterator over all components of `graph`
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: BFS::idle(graph),
        }
    }

    /// Excludes nodes from all components.
    /// Must be called before the first component is requested.
    pub fn set_exclude_nodes<I>(&mut self, exclude: I)
    where
        I: IntoIterator<Item = Node>,
    {
        self.bfs.exclude_nodes(exclude);
    }

    /// Builder-variant of [`ConnectedComponents::set_exclude_nodes`]
    pub fn exclude_nodes<I>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.set_exclude_nodes(exclude);
        self
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cc = self.bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !self.bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}
