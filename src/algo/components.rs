/*!
# Component Labels

For every node `x`, [`ComponentLabels`] records which connected component of `G - N[x]` each
other node belongs to. Row `x` of the matrix holds for every `y` the label of `y`'s component in
`G - N[x]`, or [`NO_COMPONENT`] if `y` is in `N[x]`.

Labels are handed out by a [`LabelRegistry`] which assigns the same label to the same vertex
set, no matter for which row it was discovered. Two nodes `y, z` are thus connected by a path
avoiding `N[x]` iff `C[x][y] == C[x][z] != NO_COMPONENT`.

# Example
```rust
use lexgraphs::{prelude::*, algo::*};

// path 0 - 1 - 2 - 3 - 4
let g = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);
let mut registry = LabelRegistry::new();
let labels = ComponentLabels::for_graph(&g, &mut registry);

// removing N[2] = {1, 2, 3} separates 0 from 4
assert_ne!(labels.get(2, 0), labels.get(2, 4));
// removing N[0] = {0, 1} leaves 2, 3, 4 connected
assert!(labels.are_connected_avoiding(0, 2, 4));
assert_eq!(labels.get(0, 1), NO_COMPONENT);
```
*/

use fxhash::FxHashMap;

use super::*;

/// Label of a connected component; labels start at `1`
pub type ComponentLabel = u32;

/// Placeholder for nodes that do not belong to any component of a row
pub const NO_COMPONENT: ComponentLabel = 0;

/// Assigns a unique label to every distinct component vertex set.
///
/// The registry persists across rows: a vertex set that shows up again (for a different
/// excluded node) receives its previous label.
#[derive(Debug, Clone, Default)]
pub struct LabelRegistry {
    labels: FxHashMap<Vec<Node>, ComponentLabel>,
    last_label: ComponentLabel,
}

impl LabelRegistry {
    /// Creates an empty registry; the first label handed out is `1`
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the label of the vertex set `component`, allocating the next free label
    /// if the set was not registered before. The order of `component` is irrelevant.
    pub fn label_of(&mut self, mut component: Vec<Node>) -> ComponentLabel {
        component.sort_unstable();

        if let Some(&label) = self.labels.get(&component) {
            return label;
        }

        self.last_label += 1;
        self.labels.insert(component, self.last_label);
        self.last_label
    }

    /// Returns the label of an already registered vertex set (which has to be sorted)
    pub fn get(&self, sorted_component: &[Node]) -> Option<ComponentLabel> {
        self.labels.get(sorted_component).copied()
    }

    /// Number of distinct vertex sets registered so far
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns *true* if no label was handed out yet
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Row-major `n x n` matrix of component labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentLabels {
    n: NumNodes,
    labels: Vec<ComponentLabel>,
}

impl ComponentLabels {
    /// Creates a matrix for `n` nodes where every entry is [`NO_COMPONENT`]
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            labels: vec![NO_COMPONENT; n as usize * n as usize],
        }
    }

    /// Creates the matrix and fills every row
    pub fn for_graph<G>(graph: &G, registry: &mut LabelRegistry) -> Self
    where
        G: AdjacencyList,
    {
        let mut labels = Self::new(graph.number_of_nodes());
        for x in graph.vertices_range() {
            labels.label_components(graph, x, registry);
        }

        debug!(
            nodes = graph.number_of_nodes(),
            distinct_components = registry.len(),
            "labelled components of all closed-neighborhood deletions"
        );
        labels
    }

    /// Number of rows (and columns)
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns `C[x][y]`
    /// ** Panics if `x >= n || y >= n` **
    pub fn get(&self, x: Node, y: Node) -> ComponentLabel {
        assert!(y < self.n);
        self.labels[self.index(x, y)]
    }

    /// Returns row `x`
    /// ** Panics if `x >= n` **
    pub fn row(&self, x: Node) -> &[ComponentLabel] {
        let start = self.index(x, 0);
        &self.labels[start..start + self.n as usize]
    }

    /// Returns *true* if `y` and `z` lie in the same component of `G - N[x]`
    pub fn are_connected_avoiding(&self, x: Node, y: Node, z: Node) -> bool {
        let label = self.get(x, y);
        label != NO_COMPONENT && label == self.get(x, z)
    }

    /// Computes the connected components of `G - N[excluded]` and stores their labels in
    /// row `excluded`. Nodes of `N[excluded]` receive [`NO_COMPONENT`].
    /// ** Panics if `excluded >= n` or the graph does not have `n` nodes **
    pub fn label_components<G>(&mut self, graph: &G, excluded: Node, registry: &mut LabelRegistry)
    where
        G: AdjacencyList,
    {
        assert_eq!(graph.number_of_nodes(), self.n);

        let start = self.index(excluded, 0);
        let row = &mut self.labels[start..start + self.n as usize];
        row.fill(NO_COMPONENT);

        let mut num_components = 0;
        for component in graph.connected_components_excluding(graph.closed_neighbors_of(excluded))
        {
            let members = component.clone();
            let label = registry.label_of(component);
            for y in members {
                row[y as usize] = label;
            }
            num_components += 1;
        }

        trace!(node = excluded, num_components, "labelled components");
    }

    fn index(&self, x: Node, y: Node) -> usize {
        assert!(x < self.n);
        x as usize * self.n as usize + y as usize
    }
}
