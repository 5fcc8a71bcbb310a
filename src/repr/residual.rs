/*!
# Residual Graph

A vertex-indexed adjacency structure in which every arc knows its **paired arc**, i.e. the arc
of opposite direction between the same two vertices. Pushing flow along an arc moves residual
capacity from the arc to its pair, so that

```text
capacity(u -> v) + capacity(v -> u) == const
```

holds for every pair at all times.

Arcs are stored in a flat arena of per-vertex arc lists. The pair of an arc is not referenced
directly but by its *slot*, i.e. its position within the arc list of the arc's head. Together
with the head, this forms an [`ArcLocator`] `(vertex, slot)`. This way, both arcs of a pair can
be mutated one after another without any aliasing and without reference cycles.

Additionally, an index maps `(tail, head)` to the slot of the arc, allowing *O(1)* lookups when
only the endpoints are known (warm starts, flow extraction).
*/

use fxhash::FxHashMap;
use smallvec::SmallVec;

use crate::{
    error::{InvalidGraphReason, InvalidWarmStartReason, Result},
    *,
};

/// Position of an arc within the arc list of its tail
pub type ArcSlot = NumEdges;

/// Locates an arc by its tail and its slot within the arc list of the tail
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArcLocator {
    pub tail: Node,
    pub slot: ArcSlot,
}

impl ArcLocator {
    /// Creates a new locator
    pub fn new(tail: Node, slot: ArcSlot) -> Self {
        Self { tail, slot }
    }
}

/// A residual arc `tail -> head`. The tail is implicit in the arc list the arc is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidualArc<C> {
    head: Node,
    capacity: C,
    pair: ArcSlot,
}

impl<C: Capacity> ResidualArc<C> {
    /// Head of the arc
    pub fn head(&self) -> Node {
        self.head
    }

    /// Remaining residual capacity of the arc
    pub fn capacity(&self) -> C {
        self.capacity
    }

    /// Slot of the paired arc in the arc list of `self.head()`
    pub fn pair(&self) -> ArcSlot {
        self.pair
    }

    /// Returns *true* if the arc admits more flow
    pub fn is_residual(&self) -> bool {
        !self.capacity.is_zero()
    }
}

// Grid networks (the main use case) have at most 6 arcs per vertex
type ArcList<C> = SmallVec<[ResidualArc<C>; 6]>;

/// Residual graph of a flow network with source `0` and sink `n - 1`.
///
/// There is at most one arc per ordered pair of distinct vertices: parallel input edges are
/// merged into the same arc (the last capacity wins) and self-loops are dropped, as they can
/// never carry flow between different vertices.
#[derive(Debug, Clone)]
pub struct ResidualGraph<C> {
    arcs: Vec<ArcList<C>>,
    index: FxHashMap<(Node, Node), ArcSlot>,
    num_arcs: NumEdges,
}

impl<C: Capacity> ResidualGraph<C> {
    /// Creates a residual graph with `n` vertices and no arcs.
    ///
    /// # Errors
    /// Fails with [`InvalidGraphReason::TooFewVertices`] if `n < 2`.
    pub fn new(n: NumNodes) -> Result<Self> {
        if n < 2 {
            return Err(InvalidGraphReason::TooFewVertices { vertex_count: n }.into());
        }

        Ok(Self {
            arcs: vec![ArcList::new(); n as usize],
            index: FxHashMap::default(),
            num_arcs: 0,
        })
    }

    /// Builds the residual graph of a network with `n` vertices from an edge list.
    ///
    /// For every edge `(u, v, c)`, the arc `u -> v` receives capacity `c` and its pair `v -> u`
    /// is created with capacity `0` if it does not exist yet.
    ///
    /// # Errors
    /// Fails with [`FlowError::InvalidGraph`] if `n < 2`, if an edge references a vertex
    /// outside `[0, n)` or if the sum of all capacities does not fit into `C`.
    pub fn from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<CapacitatedEdge<C>>,
    {
        let mut graph = Self::new(n)?;
        let mut total = C::zero();
        for edge in edges {
            let edge: CapacitatedEdge<C> = edge.into();
            total = total
                .checked_add(&edge.capacity)
                .ok_or(InvalidGraphReason::CapacityOverflow)?;
            graph.insert_edge(edge.tail, edge.head, edge.capacity)?;
        }
        Ok(graph)
    }

    /// Inserts the arc `tail -> head` with the given capacity.
    /// If the arc already exists, its capacity is overwritten.
    ///
    /// # Errors
    /// Fails with [`InvalidGraphReason::VertexOutOfRange`] if an endpoint is not a vertex.
    pub fn insert_edge(&mut self, tail: Node, head: Node, capacity: C) -> Result<()> {
        let n = self.number_of_nodes();
        if tail >= n || head >= n {
            return Err(InvalidGraphReason::VertexOutOfRange {
                tail,
                head,
                vertex_count: n,
            }
            .into());
        }

        if tail == head {
            return Ok(());
        }

        if let Some(&slot) = self.index.get(&(tail, head)) {
            self.arcs[tail as usize][slot as usize].capacity = capacity;
            return Ok(());
        }

        let forward = self.arcs[tail as usize].len() as ArcSlot;
        let backward = self.arcs[head as usize].len() as ArcSlot;

        self.arcs[tail as usize].push(ResidualArc {
            head,
            capacity,
            pair: backward,
        });
        self.arcs[head as usize].push(ResidualArc {
            head: tail,
            capacity: C::zero(),
            pair: forward,
        });

        self.index.insert((tail, head), forward);
        self.index.insert((head, tail), backward);
        self.num_arcs += 2;

        Ok(())
    }

    /// Returns the locator of the arc `tail -> head`.
    ///
    /// # Errors
    /// Fails with [`FlowError::ArcNotFound`] if no such arc exists.
    pub fn locate(&self, tail: Node, head: Node) -> Result<ArcLocator> {
        self.index
            .get(&(tail, head))
            .map(|&slot| ArcLocator::new(tail, slot))
            .ok_or(FlowError::arc_not_found(tail, head))
    }

    /// Returns the residual capacity of the arc `tail -> head`.
    ///
    /// # Errors
    /// Fails with [`FlowError::ArcNotFound`] if no such arc exists. A missing arc is never
    /// treated as an arc of capacity zero.
    pub fn capacity(&self, tail: Node, head: Node) -> Result<C> {
        Ok(self.arc(self.locate(tail, head)?).capacity)
    }

    /// Overwrites the residual capacity of the arc `tail -> head`.
    ///
    /// # Errors
    /// Fails with [`FlowError::ArcNotFound`] if no such arc exists.
    pub fn set_capacity(&mut self, tail: Node, head: Node, capacity: C) -> Result<()> {
        let loc = self.locate(tail, head)?;
        self.arcs[loc.tail as usize][loc.slot as usize].capacity = capacity;
        Ok(())
    }

    /// Returns all arcs leaving `u` (including arcs without residual capacity).
    /// ** Panics if `u >= n` **
    pub fn arcs_of(&self, u: Node) -> &[ResidualArc<C>] {
        &self.arcs[u as usize]
    }

    /// Returns the number of arcs leaving `u`.
    /// ** Panics if `u >= n` **
    pub fn out_degree_of(&self, u: Node) -> NumEdges {
        self.arcs[u as usize].len() as NumEdges
    }

    /// Returns an iterator over all heads reachable from `u` via an arc with residual capacity.
    /// ** Panics if `u >= n` **
    pub fn residual_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.arcs_of(u)
            .iter()
            .filter(|arc| arc.is_residual())
            .map(|arc| arc.head)
    }

    /// Returns the arc at the given location.
    /// ** Panics if the locator is invalid **
    pub fn arc(&self, loc: ArcLocator) -> &ResidualArc<C> {
        &self.arcs[loc.tail as usize][loc.slot as usize]
    }

    /// Returns the locator of the paired arc.
    /// ** Panics if the locator is invalid **
    pub fn pair_locator(&self, loc: ArcLocator) -> ArcLocator {
        let arc = self.arc(loc);
        ArcLocator::new(arc.head, arc.pair)
    }

    /// Returns the paired arc of the arc at the given location.
    /// ** Panics if the locator is invalid **
    pub fn pair_of(&self, loc: ArcLocator) -> &ResidualArc<C> {
        self.arc(self.pair_locator(loc))
    }

    /// Moves `delta` units of residual capacity from the arc at `loc` to its pair.
    /// ** Panics (in debug builds) if `delta` exceeds the residual capacity **
    pub fn push_along(&mut self, loc: ArcLocator, delta: C) {
        let pair = self.pair_locator(loc);

        let arc = &mut self.arcs[loc.tail as usize][loc.slot as usize];
        debug_assert!(delta <= arc.capacity);
        arc.capacity = arc.capacity - delta;

        let arc = &mut self.arcs[pair.tail as usize][pair.slot as usize];
        arc.capacity = arc.capacity + delta;
    }

    /// Merges `amount` units of an externally computed flow on `tail -> head` into the residual
    /// graph: the arc loses `amount` units of capacity and its pair gains them.
    ///
    /// # Errors
    /// Fails with [`FlowError::InvalidWarmStart`] if no arc `tail -> head` exists or if `amount`
    /// exceeds its residual capacity.
    pub fn apply_flow(&mut self, tail: Node, head: Node, amount: C) -> Result<()> {
        let loc = self
            .locate(tail, head)
            .map_err(|_| InvalidWarmStartReason::MissingArc { tail, head })?;

        let capacity = self.arc(loc).capacity;
        if amount > capacity {
            return Err(InvalidWarmStartReason::ExceedsCapacity {
                tail,
                head,
                amount: amount.to_u128().unwrap_or(u128::MAX),
                capacity: capacity.to_u128().unwrap_or(u128::MAX),
            }
            .into());
        }

        self.push_along(loc, amount);
        Ok(())
    }
}

impl<C> GraphNodeOrder for ResidualGraph<C> {
    fn number_of_nodes(&self) -> NumNodes {
        self.arcs.len() as NumNodes
    }
}

impl<C> GraphEdgeOrder for ResidualGraph<C> {
    /// Number of stored arcs, i.e. twice the number of distinct vertex pairs
    fn number_of_edges(&self) -> NumEdges {
        self.num_arcs
    }
}

impl<C> Terminals for ResidualGraph<C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn pair_sum(graph: &ResidualGraph<u32>, u: Node, v: Node) -> u32 {
        graph.capacity(u, v).unwrap() + graph.capacity(v, u).unwrap()
    }

    #[test]
    fn builds_paired_arcs() {
        let graph = ResidualGraph::<u32>::from_edges(4, [(0, 1, 5), (1, 3, 2), (0, 2, 4)]).unwrap();

        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.number_of_edges(), 6);
        assert_eq!(graph.source(), 0);
        assert_eq!(graph.sink(), 3);

        assert_eq!(graph.capacity(0, 1), Ok(5));
        assert_eq!(graph.capacity(1, 0), Ok(0));
        assert_eq!(graph.capacity(3, 1), Ok(0));

        for u in graph.vertices_range() {
            for (slot, arc) in graph.arcs_of(u).iter().enumerate() {
                let loc = ArcLocator::new(u, slot as ArcSlot);
                let pair = graph.pair_locator(loc);
                assert_eq!(pair.tail, arc.head());
                assert_eq!(graph.pair_locator(pair), loc);
                assert_eq!(graph.arc(pair).head(), u);
            }
        }

        assert_eq!(graph.residual_neighbors_of(0).collect_vec(), vec![1, 2]);
        assert_eq!(graph.residual_neighbors_of(3).count(), 0);
    }

    #[test]
    fn last_write_wins() {
        let graph = ResidualGraph::<u32>::from_edges(3, [(0, 1, 5), (0, 1, 3)]).unwrap();
        assert_eq!(graph.capacity(0, 1), Ok(3));
        assert_eq!(graph.out_degree_of(0), 1);
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn opposite_edges_share_a_pair() {
        let graph = ResidualGraph::<u32>::from_edges(3, [(1, 2, 10), (2, 1, 4)]).unwrap();
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.capacity(1, 2), Ok(10));
        assert_eq!(graph.capacity(2, 1), Ok(4));
    }

    #[test]
    fn self_loops_are_dropped() {
        let graph = ResidualGraph::<u32>::from_edges(3, [(1, 1, 10)]).unwrap();
        assert!(graph.is_singleton());
        assert_eq!(graph.capacity(1, 1), Err(FlowError::arc_not_found(1, 1)));
    }

    #[test]
    fn missing_arcs_are_errors() {
        let mut graph = ResidualGraph::<u32>::from_edges(3, [(0, 1, 5)]).unwrap();
        assert_eq!(graph.capacity(0, 2), Err(FlowError::arc_not_found(0, 2)));
        assert_eq!(
            graph.set_capacity(2, 1, 3),
            Err(FlowError::arc_not_found(2, 1))
        );

        assert!(graph.set_capacity(1, 0, 3).is_ok());
        assert_eq!(graph.capacity(1, 0), Ok(3));
    }

    #[test]
    fn invalid_graphs() {
        assert_eq!(
            ResidualGraph::<u32>::new(1).unwrap_err(),
            FlowError::from(InvalidGraphReason::TooFewVertices { vertex_count: 1 })
        );

        assert_eq!(
            ResidualGraph::<u32>::from_edges(3, [(0, 5, 1)]).unwrap_err(),
            FlowError::from(InvalidGraphReason::VertexOutOfRange {
                tail: 0,
                head: 5,
                vertex_count: 3
            })
        );

        assert_eq!(
            ResidualGraph::<u8>::from_edges(3, [(0, 1, 200), (1, 2, 100)]).unwrap_err(),
            FlowError::from(InvalidGraphReason::CapacityOverflow)
        );
    }

    #[test]
    fn push_along_keeps_pair_sum() {
        let mut graph = ResidualGraph::<u32>::from_edges(3, [(0, 1, 5), (1, 0, 2)]).unwrap();
        let loc = graph.locate(0, 1).unwrap();

        graph.push_along(loc, 4);
        assert_eq!(graph.capacity(0, 1), Ok(1));
        assert_eq!(graph.capacity(1, 0), Ok(6));
        assert_eq!(pair_sum(&graph, 0, 1), 7);

        graph.push_along(graph.pair_locator(loc), 6);
        assert_eq!(graph.capacity(0, 1), Ok(7));
        assert_eq!(graph.capacity(1, 0), Ok(0));
        assert!(!graph.pair_of(loc).is_residual());
    }

    #[test]
    fn apply_flow() {
        let mut graph = ResidualGraph::<u32>::from_edges(3, [(0, 1, 5), (1, 2, 3)]).unwrap();

        graph.apply_flow(1, 2, 2).unwrap();
        assert_eq!(graph.capacity(1, 2), Ok(1));
        assert_eq!(graph.capacity(2, 1), Ok(2));

        assert_eq!(
            graph.apply_flow(0, 2, 1).unwrap_err(),
            FlowError::from(InvalidWarmStartReason::MissingArc { tail: 0, head: 2 })
        );
        assert_eq!(
            graph.apply_flow(0, 1, 6).unwrap_err(),
            FlowError::from(InvalidWarmStartReason::ExceedsCapacity {
                tail: 0,
                head: 1,
                amount: 6,
                capacity: 5
            })
        );
    }
}
