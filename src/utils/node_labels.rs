/*!
# Node Labels

Input files name vertices by arbitrary integers, whereas all graphs and algorithms in this crate
assume the dense node range `0..n`. [`NodeLabels`] is the bijection between both worlds.

Labels are assigned to nodes in **increasing label order**. Hence, if the labels already are
exactly `0..n`, the mapping is the identity and no translation is observable.
*/

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::node::*;

/// Vertex id as it appears in an input file
pub type RawLabel = i64;

/// A bijection between raw input labels and dense nodes `0..n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeLabels {
    /// `labels[u]` is the raw label of node `u`; sorted increasingly
    labels: Vec<RawLabel>,
    /// Inverse of `labels`
    nodes: FxHashMap<RawLabel, Node>,
}

impl NodeLabels {
    /// Creates a mapping from an arbitrary collection of labels.
    /// Duplicates are ignored and nodes are assigned in increasing label order.
    ///
    /// # Example
    /// ```
    /// use lexgraphs::utils::NodeLabels;
    ///
    /// let labels = NodeLabels::from_labels([10, -3, 7, 10]);
    /// assert_eq!(labels.len(), 3);
    /// assert_eq!(labels.node_of(-3), Some(0));
    /// assert_eq!(labels.node_of(10), Some(2));
    /// assert_eq!(labels.label_of(1), Some(7));
    /// ```
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = RawLabel>,
    {
        let labels = labels.into_iter().sorted_unstable().dedup().collect_vec();
        let nodes = labels
            .iter()
            .enumerate()
            .map(|(u, &label)| (label, u as Node))
            .collect();

        Self { labels, nodes }
    }

    /// Creates the identity mapping `u <-> u` for all `u` in `0..n`
    pub fn identity(n: NumNodes) -> Self {
        Self::from_labels((0..n).map(RawLabel::from))
    }

    /// Returns the dense node assigned to `label`, if any
    pub fn node_of(&self, label: RawLabel) -> Option<Node> {
        self.nodes.get(&label).copied()
    }

    /// Returns the raw label of node `u`, if `u < n`
    pub fn label_of(&self, u: Node) -> Option<RawLabel> {
        self.labels.get(u as usize).copied()
    }

    /// Translates a sequence of nodes back into their raw labels.
    /// ** Panics if any node is `>= n` **
    pub fn labels_of<I>(&self, nodes: I) -> impl Iterator<Item = RawLabel>
    where
        I: IntoIterator<Item = Node>,
    {
        nodes.into_iter().map(|u| self.labels[u as usize])
    }

    /// Returns the number of mapped nodes
    pub fn len(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    /// Returns the number of mapped labels without truncating it to [`NumNodes`]
    pub fn number_of_labels(&self) -> usize {
        self.labels.len()
    }

    /// Returns *true* if no label is mapped
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns *true* if every node is mapped onto itself
    pub fn is_identity(&self) -> bool {
        self.labels
            .iter()
            .enumerate()
            .all(|(u, &label)| label == u as RawLabel)
    }
}
