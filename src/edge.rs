use std::fmt::{Debug, Display};

use num::{PrimInt, Unsigned};

use crate::Node;

/// An edge is defined by two nodes/endpoints.
/// In a flow network, edges are always directed from `self.0` to `self.1`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (which it usually should).
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Attaches a capacity to the edge
    pub fn with_capacity<C: Capacity>(self, capacity: C) -> CapacitatedEdge<C> {
        CapacitatedEdge::new(self.0, self.1, capacity)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

/// Values that can be used as arc capacities, excesses and flow amounts.
///
/// Any unsigned primitive integer qualifies. Floating point capacities are deliberately not
/// supported: push-relabel relies on exact arithmetic to decide whether an arc is saturated.
pub trait Capacity: PrimInt + Unsigned + Default + Debug + Display + Send + Sync + 'static {}

impl<C> Capacity for C where C: PrimInt + Unsigned + Default + Debug + Display + Send + Sync + 'static {}

/// A directed edge `tail -> head` carrying a capacity.
///
/// The same record is used for the input network, for warm-start flows and for the realized
/// flow reported after a solve (in which case `capacity` holds the flow amount).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CapacitatedEdge<C> {
    pub tail: Node,
    pub head: Node,
    pub capacity: C,
}

impl<C: Capacity> CapacitatedEdge<C> {
    /// Creates a new edge `tail -> head` with the given capacity
    pub fn new(tail: Node, head: Node, capacity: C) -> Self {
        Self {
            tail,
            head,
            capacity,
        }
    }

    /// Drops the capacity
    pub fn edge(&self) -> Edge {
        Edge(self.tail, self.head)
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.tail == self.head
    }
}

impl<C: Display> Display for CapacitatedEdge<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.tail, self.head, self.capacity)
    }
}

impl<C: Debug> Debug for CapacitatedEdge<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{:?})", self.tail, self.head, self.capacity)
    }
}

impl<C: Capacity> From<(Node, Node, C)> for CapacitatedEdge<C> {
    fn from(value: (Node, Node, C)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl<C: Capacity> From<&(Node, Node, C)> for CapacitatedEdge<C> {
    fn from(value: &(Node, Node, C)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl<C: Capacity> From<&CapacitatedEdge<C>> for CapacitatedEdge<C> {
    fn from(value: &CapacitatedEdge<C>) -> Self {
        *value
    }
}

impl<C: Capacity> From<CapacitatedEdge<C>> for (Node, Node, C) {
    fn from(value: CapacitatedEdge<C>) -> Self {
        (value.tail, value.head, value.capacity)
    }
}
