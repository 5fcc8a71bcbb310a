use std::ops::Range;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all vertices.
    /// In contrast to an iterator borrowing `self`, the range may be used where additional
    /// mutable references of `self` are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        node_bitset(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Provides accessors for the source and sink of a flow network.
///
/// By convention, the source is node `0` and the sink is node `n - 1`.
pub trait Terminals: GraphNodeOrder {
    /// Returns the source node
    fn source(&self) -> Node {
        source_of(self.number_of_nodes())
    }

    /// Returns the sink node
    fn sink(&self) -> Node {
        sink_of(self.number_of_nodes())
    }

    /// Returns *true* if `u` is either the source or the sink
    fn is_terminal(&self, u: Node) -> bool {
        u == self.source() || u == self.sink()
    }

    /// Returns an iterator over all non-terminal nodes
    fn inner_vertices(&self) -> Range<Node> {
        let n = self.number_of_nodes();
        1..n.saturating_sub(1).max(1)
    }
}
