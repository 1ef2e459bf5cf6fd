/*!
Breadth-first traversal.

[`BFS`] is an iterator over all nodes reachable from a start node. Nodes can be excluded
from the search beforehand, which turns the traversal into a traversal of the subgraph
induced by the remaining nodes without materializing that subgraph. After the search came
to a hold, it can be restarted at a yet unvisited node, which is what
[`ConnectedComponents`](super::ConnectedComponents) builds upon.
*/

use std::collections::VecDeque;

use stream_bitset::prelude::*;

use super::*;

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub struct BFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
    /// All nodes `< restart_from` are known to be visited
    restart_from: Node,
}

impl<G> Iterator for BFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.queue.len()),
        )
    }
}

impl<'a, G> BFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal iterator starting from `start`.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut bfs = Self::idle(graph);
        bfs.visited.set_bit(start);
        bfs.queue.push_back(start);
        bfs
    }

    /// Creates a traversal iterator without a start node.
    /// It yields nothing until [`BFS::try_restart_at_unvisited`] succeeds.
    pub fn idle(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            queue: VecDeque::with_capacity(graph.len()),
            restart_from: 0,
        }
    }

    /// Returns *true* if `u` was already discovered (or excluded)
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Tries to restart the search at the smallest yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.queue.is_empty());

        let n = self.graph.number_of_nodes();
        while self.restart_from < n && self.visited.get_bit(self.restart_from) {
            self.restart_from += 1;
        }

        if self.restart_from == n {
            return false;
        }

        self.visited.set_bit(self.restart_from);
        self.queue.push_back(self.restart_from);
        true
    }

    /// Excludes a node from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that node will be taken. If the node was already visited,
    /// this is a non-op.
    ///
    /// # Warning
    /// Calling this method has no effect if the node is already in the queue. It is therefore highly
    /// recommended to call this method directly after the constructor.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.set_bit(u);
    }

    /// Exclude multiple nodes from traversal. It is functionally equivalent to repeatedly
    /// calling [`BFS::exclude_node`].
    pub fn exclude_nodes<N>(&mut self, us: N)
    where
        N: IntoIterator<Item = Node>,
    {
        for u in us {
            self.exclude_node(u);
        }
    }

    /// Builder-variant of [`BFS::exclude_nodes`]
    pub fn with_nodes_excluded<N>(mut self, us: N) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        self.exclude_nodes(us);
        self
    }

    /// Consumes the traversal and returns true iff `target` is reachable from the start node
    /// without passing through excluded nodes.
    ///
    /// # Warning
    /// It is undefined behavior to call the method on a partially executed iterator.
    pub fn is_node_reachable(mut self, target: Node) -> bool {
        self.any(|u| u == target)
    }
}

/// Provides convenient traversal methods directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = AdjArrayUndir::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let order = graph.bfs(1).collect_vec();
        assert_eq!(order.len(), 6);

        assert_eq!(order[0], 1);
        assert!((order[1] == 0 && order[2] == 2) || (order[2] == 0 && order[1] == 2));
        assert!((order[3] == 4 && order[4] == 5) || (order[4] == 4 && order[3] == 5));
        assert_eq!(order[5], 3);
    }

    #[test]
    fn excluded_nodes_block_paths() {
        let graph = AdjMatrixUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);

        assert_eq!(graph.bfs(0).with_nodes_excluded([2]).collect_vec(), vec![0, 1]);
        assert!(!graph.bfs(0).with_nodes_excluded([2]).is_node_reachable(4));
        assert!(graph.bfs(0).is_node_reachable(4));
    }

    #[test]
    fn restart() {
        let graph = AdjArrayUndir::from_edges(5, [(0, 1), (3, 4)]);

        let mut bfs = graph.bfs(3);
        assert_eq!(bfs.by_ref().collect_vec(), vec![3, 4]);
        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![0, 1]);
        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![2]);
        assert!(!bfs.try_restart_at_unvisited());
        assert!(bfs.did_visit_node(2));
    }

    #[test]
    fn idle_yields_nothing() {
        let graph = AdjArrayUndir::from_edges(2, [(0, 1)]);
        let mut bfs = BFS::idle(&graph).with_nodes_excluded([0, 1]);
        assert_eq!(bfs.next(), None);
        assert!(!bfs.try_restart_at_unvisited());
    }
}
