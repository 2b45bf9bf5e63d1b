/*!
# Node Representation

We choose `Node = u32` as graphs handled here are tiny: every exhaustive routine in this crate is
exponential in the number of nodes, so `2^32` nodes is far beyond anything we will see.
Nodes of a graph with `n` nodes are always numbered `0..n`.
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
