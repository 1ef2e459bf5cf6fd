/*!
# Interval Graph Recognition

A graph is an interval graph iff it is chordal and free of asteroidal triples
(Lekkerkerker & Boland). An **asteroidal triple** is a set of three nodes such that any two of
them are connected by a path avoiding the closed neighborhood of the third.

[`IntervalRecognition`] runs the complete pipeline on a single graph:
1. compute a Lex-BFS ordering,
2. test its reverse for being a perfect elimination ordering,
3. label the components of `G - N[x]` for every node `x` (see [`ComponentLabels`]),
4. search all triples `(x, y, z)` for an asteroidal triple.

The label matrix and registry are owned by the recognition value; separate runs share nothing.

# Example
```rust
use lexgraphs::{prelude::*, algo::*};

// the sun S3: a triangle with a node attached to each of its edges
let sun = AdjArrayUndir::from_edges(
    6,
    [(0, 1), (1, 2), (2, 0), (3, 0), (3, 1), (4, 1), (4, 2), (5, 2), (5, 0)],
);

let result = IntervalRecognition::new(&sun).classify().unwrap();
assert!(result.chordal);
assert!(!result.interval);
assert_eq!(IntervalRecognition::new(&sun).find_asteroidal_triple().unwrap(), Some((3, 4, 5)));
```
*/

use itertools::iproduct;

use super::*;

/// Verdicts of one run of the recognition pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The Lex-BFS ordering all verdicts are based on
    pub lex_bfs_order: Vec<Node>,
    /// Whether the reverse of `lex_bfs_order` is a perfect elimination ordering
    pub chordal: bool,
    /// Whether the graph is chordal and has no asteroidal triple
    pub interval: bool,
}

/// Interval graph recognition for a single graph
pub struct IntervalRecognition<'a, G> {
    graph: &'a G,
    labels: Option<ComponentLabels>,
    registry: LabelRegistry,
}

impl<'a, G> IntervalRecognition<'a, G>
where
    G: AdjacencyList + AdjacencyTest,
{
    /// Prepares the recognition; no work is done until one of the queries is issued
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            labels: None,
            registry: LabelRegistry::new(),
        }
    }

    /// Runs the full pipeline and reports the ordering along with both verdicts.
    /// The asteroidal triple search is skipped for non-chordal graphs.
    ///
    /// # Errors
    /// Returns [`RecognitionError::EmptyGraph`] if the graph has no nodes.
    pub fn classify(&mut self) -> Result<Classification> {
        let lex_bfs_order = self.graph.lex_bfs_order()?;
        let chordal = self.graph.is_perfect_elimination_order(&lex_bfs_order)?;

        let interval = chordal && self.find_asteroidal_triple()?.is_none();
        debug!(chordal, interval, "classified graph");

        Ok(Classification {
            lex_bfs_order,
            chordal,
            interval,
        })
    }

    /// Returns *true* if the graph is an interval graph
    ///
    /// # Errors
    /// Returns [`RecognitionError::EmptyGraph`] if the graph has no nodes.
    pub fn run(&mut self) -> Result<bool> {
        Ok(self.classify()?.interval)
    }

    /// Searches for an asteroidal triple and returns the first one found in lexicographic
    /// order of `(x, y, z)`.
    ///
    /// `(x, y, z)` is reported iff for each of the three nodes the other two lie in a common
    /// component of the graph without the closed neighborhood of the former. All ordered
    /// triples are considered; triples with repeated nodes never qualify since a node is
    /// part of its own closed neighborhood.
    ///
    /// # Errors
    /// Returns [`RecognitionError::EmptyGraph`] if the graph has no nodes.
    pub fn find_asteroidal_triple(&mut self) -> Result<Option<(Node, Node, Node)>> {
        if self.graph.is_empty() {
            return Err(RecognitionError::EmptyGraph);
        }

        let labels = self.component_labels();
        let n = labels.number_of_nodes();

        let triple = iproduct!(0..n, 0..n, 0..n).find(|&(x, y, z)| {
            labels.are_connected_avoiding(x, y, z)
                && labels.are_connected_avoiding(y, x, z)
                && labels.are_connected_avoiding(z, x, y)
        });

        if let Some((x, y, z)) = triple {
            trace!(x, y, z, "found asteroidal triple");
        }

        Ok(triple)
    }

    /// Returns the component label matrix, computing it on first use
    pub fn component_labels(&mut self) -> &ComponentLabels {
        let graph = self.graph;
        let registry = &mut self.registry;
        self.labels
            .get_or_insert_with(|| ComponentLabels::for_graph(graph, registry))
    }
}

/// Provides interval graph recognition directly on graphs
pub trait IntervalTest: AdjacencyList + AdjacencyTest + Sized {
    /// Returns *true* if the graph is an interval graph.
    ///
    /// # Errors
    /// Returns [`RecognitionError::EmptyGraph`] if the graph has no nodes.
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(5);
    /// g.connect_path(0..5);
    /// assert!(g.is_interval().unwrap());
    /// ```
    fn is_interval(&self) -> Result<bool> {
        IntervalRecognition::new(self).run()
    }

    /// Runs the complete pipeline, see [`IntervalRecognition::classify`]
    fn classify(&self) -> Result<Classification> {
        IntervalRecognition::new(self).classify()
    }
}

impl<G> IntervalTest for G where G: AdjacencyList + AdjacencyTest + Sized {}
