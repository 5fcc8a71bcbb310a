/*!
# Min-Cut and Flow Extraction

Once push-relabel has converged, the residual graph holds all information about the maximum
flow:
- the **source side** of a minimum cut consists of all vertices reachable from the source via
  arcs with residual capacity,
- the **realized flow** on an input edge is the amount by which the residual capacity of its
  arc decreased.

These functions only read the residual graph and can be used with any residual graph that
results from a converged maximum flow computation.
*/

use std::collections::VecDeque;

use fxhash::FxHashMap;

use super::*;

/// Returns all vertices reachable from the source via arcs with residual capacity, in
/// ascending order. For a converged maximum flow, this is the source side of a minimum cut.
pub fn source_side<C: Capacity>(graph: &ResidualGraph<C>) -> Vec<Node> {
    let source = graph.source();

    let mut visited = graph.vertex_bitset_unset();
    visited.insert(source as usize);
    let mut queue = VecDeque::from([source]);

    while let Some(u) = queue.pop_front() {
        for v in graph.residual_neighbors_of(u) {
            if !visited.put(v as usize) {
                queue.push_back(v);
            }
        }
    }

    visited.ones().map(|u| u as Node).collect()
}

/// Reports the realized flow on every input edge, in input order.
///
/// The flow on `(tail, head, capacity)` is `capacity - residual(tail, head)`, clamped to `0`
/// when the residual capacity exceeds the original capacity (which happens if flow was routed
/// over an opposite input edge). Self-loops never carry flow.
///
/// If the same `(tail, head)` occurs several times, only its last occurrence defines the arc.
/// The flow is reported on that occurrence and all earlier ones report `0`.
///
/// # Errors
/// Fails with [`FlowError::ArcNotFound`] if an input edge has no arc in the residual graph.
pub fn realized_flow<C: Capacity>(
    graph: &ResidualGraph<C>,
    edges: &[CapacitatedEdge<C>],
) -> Result<Vec<CapacitatedEdge<C>>> {
    let last_occurrence: FxHashMap<(Node, Node), usize> = edges
        .iter()
        .enumerate()
        .map(|(i, e)| ((e.tail, e.head), i))
        .collect();

    edges
        .iter()
        .enumerate()
        .map(|(i, edge)| {
            let residual = graph.capacity(edge.tail, edge.head);
            let amount = if edge.is_loop() || last_occurrence[&(edge.tail, edge.head)] != i {
                C::zero()
            } else {
                edge.capacity.saturating_sub(residual?)
            };
            Ok(CapacitatedEdge::new(edge.tail, edge.head, amount))
        })
        .collect()
}

/// Returns the total capacity of all edges leaving `side`, i.e. edges whose tail is in `side`
/// and whose head is not.
///
/// Returns `None` if the sum does not fit into `C`.
pub fn cut_capacity<C: Capacity>(edges: &[CapacitatedEdge<C>], side: &[Node]) -> Option<C> {
    let n = edges
        .iter()
        .flat_map(|e| [e.tail, e.head])
        .chain(side.iter().copied())
        .max()
        .map_or(0, |u| u + 1);
    let side = node_bitset_with(n, side.iter().copied());

    edges
        .iter()
        .filter(|e| side.contains(e.tail as usize) && !side.contains(e.head as usize))
        .try_fold(C::zero(), |acc, e| acc.checked_add(&e.capacity))
}
