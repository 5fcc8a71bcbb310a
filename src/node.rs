/*!
# Node Representation

We choose `Node = u32` as almost all flow networks we care about have less than `2^32` nodes.
This allows us to (1) save space by not using `usize` or `u64` and (2) directly index per-node
arrays (excess, heights, arc lists) without abstracting over them.

By convention, node `0` of every flow network is the **source** and node `n - 1` is the **sink**.
Callers have to relabel their own graphs to match.
*/

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Height labels are strictly larger than nodes: the initial label of an inner node is `2n`,
/// which does not fit into a `Node` for very large graphs.
pub type Height = u64;

/// BitSet for Nodes
pub type NodeBitSet = FixedBitSet;

/// The source of a flow network with `n` nodes
pub const fn source_of(_n: NumNodes) -> Node {
    0
}

/// The sink of a flow network with `n` nodes.
/// ** Expects `n >= 1` **
pub const fn sink_of(n: NumNodes) -> Node {
    n - 1
}

/// Shorthand for creating an empty [`NodeBitSet`] with one entry per node
pub fn node_bitset(n: NumNodes) -> NodeBitSet {
    NodeBitSet::with_capacity(n as usize)
}

/// Shorthand for creating a [`NodeBitSet`] with one entry per node where exactly the given nodes are set
pub fn node_bitset_with<I>(n: NumNodes, nodes: I) -> NodeBitSet
where
    I: IntoIterator<Item = Node>,
{
    let mut bitset = node_bitset(n);
    for u in nodes {
        bitset.insert(u as usize);
    }
    bitset
}
