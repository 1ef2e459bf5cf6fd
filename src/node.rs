/*!
# Node Representation

We choose `Node = u32` as the graphs we classify rarely exceed `2^32` nodes (and the
interval test is cubic in the number of nodes anyway).
Nodes are always dense, i.e. a graph with `n` nodes uses exactly the ids `0..n`.
Arbitrary input ids are mapped onto this range by [`NodeLabels`](crate::utils::NodeLabels).
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
