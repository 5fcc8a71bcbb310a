//! Error types for building and solving flow networks.
//!
//! Push-relabel is deterministic and exact: every error is either a contract violation by the
//! caller (rejected before any discharge work begins) or a bookkeeping bug surfaced at the
//! arc-lookup boundary. There are no retries and no degraded modes.

use thiserror::Error;

use crate::{Node, NumNodes};

/// Result type alias for flow operations
pub type Result<T> = std::result::Result<T, FlowError>;

/// Errors raised while building or querying a flow network
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// Capacity of a `(tail, head)` pair without an arc was queried or set
    #[error("arc ({tail},{head}) not found in residual graph")]
    ArcNotFound {
        /// Tail of the missing arc
        tail: Node,
        /// Head of the missing arc
        head: Node,
    },

    /// The network cannot be built
    #[error("invalid graph: {0}")]
    InvalidGraph(#[from] InvalidGraphReason),

    /// The initial flow cannot be merged into the network
    #[error("invalid warm start: {0}")]
    InvalidWarmStart(#[from] InvalidWarmStartReason),
}

/// Why a network was rejected at construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidGraphReason {
    /// A flow network needs a distinct source and sink
    #[error("a flow network needs at least 2 vertices, got {vertex_count}")]
    TooFewVertices {
        /// Number of vertices requested
        vertex_count: NumNodes,
    },

    /// An edge references a vertex outside `[0, vertex_count)`
    #[error("edge ({tail},{head}) references a vertex outside [0, {vertex_count})")]
    VertexOutOfRange {
        /// Tail of the offending edge
        tail: Node,
        /// Head of the offending edge
        head: Node,
        /// Number of vertices of the network
        vertex_count: NumNodes,
    },

    /// The sum of all capacities does not fit into the capacity type
    #[error("total capacity overflows the capacity type")]
    CapacityOverflow,
}

/// Why an initial flow was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidWarmStartReason {
    /// The flow references a pair without an arc
    #[error("flow on ({tail},{head}) has no corresponding arc")]
    MissingArc {
        /// Tail of the offending flow entry
        tail: Node,
        /// Head of the offending flow entry
        head: Node,
    },

    /// The flow amount is larger than the remaining capacity of its arc
    #[error("flow {amount} on ({tail},{head}) exceeds its capacity {capacity}")]
    ExceedsCapacity {
        /// Tail of the offending flow entry
        tail: Node,
        /// Head of the offending flow entry
        head: Node,
        /// Requested flow amount
        amount: u128,
        /// Residual capacity of the arc at merge time
        capacity: u128,
    },
}

impl FlowError {
    /// Shorthand for [`FlowError::ArcNotFound`]
    pub fn arc_not_found(tail: Node, head: Node) -> Self {
        Self::ArcNotFound { tail, head }
    }

    /// Returns *true* if this error was raised while validating the network
    pub fn is_invalid_graph(&self) -> bool {
        matches!(self, Self::InvalidGraph(_))
    }

    /// Returns *true* if this error was raised while merging an initial flow
    pub fn is_invalid_warm_start(&self) -> bool {
        matches!(self, Self::InvalidWarmStart(_))
    }
}
