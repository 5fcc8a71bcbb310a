//! Shared helpers for unit tests: an independent max-flow oracle, random networks and
//! validity checks for converged solvers.

use std::collections::VecDeque;

use fxhash::FxHashMap;
use itertools::Itertools;
use rand::Rng;

use crate::{algo::*, gens::*, prelude::*};

/// Creates a random network with at most `m` edges on `n` vertices. The list may contain
/// self-loops, parallel and opposite edges as well as edges into the source or out of the sink.
pub fn random_network<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m: NumEdges,
    max_capacity: u32,
) -> Vec<CapacitatedEdge<u32>> {
    RandomNetwork::new()
        .nodes(n)
        .edges(m)
        .max_capacity(max_capacity)
        .generate(rng)
}

/// Merges parallel edges (last write wins) and drops self-loops, i.e. returns exactly the
/// edges the residual graph is built from.
pub fn simple_edges(edges: &[CapacitatedEdge<u32>]) -> Vec<CapacitatedEdge<u32>> {
    let mut merged: FxHashMap<(Node, Node), u32> = FxHashMap::default();
    for e in edges.iter().filter(|e| !e.is_loop()) {
        merged.insert((e.tail, e.head), e.capacity);
    }

    merged
        .into_iter()
        .map(|((u, v), c)| CapacitatedEdge::new(u, v, c))
        .sorted()
        .collect()
}

/// Plain Edmonds-Karp on a dense capacity matrix, used to cross-check results
pub struct EdmondsKarp {
    capacity: Vec<Vec<u32>>,
    residual: Vec<Vec<u32>>,
    limit: Option<u32>,
}

impl EdmondsKarp {
    /// Builds the oracle with the same merging rules as [`ResidualGraph`]
    pub fn new(n: NumNodes, edges: &[CapacitatedEdge<u32>]) -> Self {
        let mut capacity = vec![vec![0; n as usize]; n as usize];
        for e in simple_edges(edges) {
            capacity[e.tail as usize][e.head as usize] = e.capacity;
        }

        Self {
            residual: capacity.clone(),
            capacity,
            limit: None,
        }
    }

    /// Stops augmenting once `limit` units have been routed
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns the value of the (possibly limited) maximum flow
    pub fn max_flow(mut self) -> u32 {
        self.run()
    }

    /// Returns the net flow of the (possibly limited) maximum flow as a list of positive
    /// `(tail, head, amount)` entries
    pub fn flow(mut self) -> Vec<CapacitatedEdge<u32>> {
        self.run();

        let n = self.capacity.len();
        (0..n)
            .cartesian_product(0..n)
            .filter_map(|(u, v)| {
                // flow moved from the arc u -> v to its pair
                let sent = self.capacity[u][v].checked_sub(self.residual[u][v])?;
                (sent > 0).then(|| CapacitatedEdge::new(u as Node, v as Node, sent))
            })
            .collect()
    }

    fn run(&mut self) -> u32 {
        let n = self.capacity.len();
        let (source, sink) = (0, n - 1);
        let mut total = 0;

        loop {
            let remaining = self.limit.map_or(u32::MAX, |l| l - total);
            if remaining == 0 {
                break;
            }

            let mut predecessor = vec![usize::MAX; n];
            predecessor[source] = source;
            let mut queue = VecDeque::from([source]);
            while let Some(u) = queue.pop_front() {
                for v in 0..n {
                    if predecessor[v] == usize::MAX && self.residual[u][v] > 0 {
                        predecessor[v] = u;
                        queue.push_back(v);
                    }
                }
            }

            if predecessor[sink] == usize::MAX {
                break;
            }

            let mut bottleneck = remaining;
            let mut v = sink;
            while v != source {
                let u = predecessor[v];
                bottleneck = bottleneck.min(self.residual[u][v]);
                v = u;
            }

            let mut v = sink;
            while v != source {
                let u = predecessor[v];
                self.residual[u][v] -= bottleneck;
                self.residual[v][u] += bottleneck;
                v = u;
            }

            total += bottleneck;
        }

        total
    }
}

/// Checks capacity bounds and conservation of the reported flow of a converged solver
pub fn assert_flow_is_valid(solver: &PushRelabel<u32>) {
    assert!(solver.is_converged());

    let graph = solver.residual();
    let n = graph.number_of_nodes();
    let flow = realized_flow(graph, solver.edges()).unwrap();

    let mut balance = vec![0i64; n as usize];
    for (f, e) in flow.iter().zip(solver.edges()) {
        assert!(f.capacity <= e.capacity, "{f} exceeds {e}");
        balance[f.tail as usize] -= f.capacity as i64;
        balance[f.head as usize] += f.capacity as i64;
    }

    for u in graph.inner_vertices() {
        assert_eq!(balance[u as usize], 0, "conservation violated at {u}");
        assert_eq!(solver.excess(u), 0, "vertex {u} is still active");
    }

    assert_eq!(balance[graph.sink() as usize], solver.excess(graph.sink()) as i64);
    assert_eq!(balance[graph.source() as usize], -(solver.excess(graph.sink()) as i64));
}

/// Checks that `height(u) <= height(v) + 1` holds for every residual arc `u -> v`
pub fn assert_labels_are_valid(solver: &PushRelabel<u32>) {
    let graph = solver.residual();
    for u in graph.vertices_range() {
        for arc in graph.arcs_of(u).iter().filter(|arc| arc.is_residual()) {
            assert!(
                solver.height(u) <= solver.height(arc.head()) + 1,
                "arc {u} -> {} is too steep",
                arc.head()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle() {
        let edges = [(0, 1, 3u32), (0, 2, 2), (1, 3, 2), (2, 3, 3), (1, 2, 1)]
            .map(|(u, v, c)| CapacitatedEdge::new(u, v, c));

        assert_eq!(EdmondsKarp::new(4, &edges).max_flow(), 5);
        assert_eq!(EdmondsKarp::new(4, &edges).limit(2).max_flow(), 2);

        let flow = EdmondsKarp::new(4, &edges).flow();
        let into_sink: u32 = flow.iter().filter(|e| e.head == 3).map(|e| e.capacity).sum();
        assert_eq!(into_sink, 5);
    }

    #[test]
    fn merging() {
        let edges =
            [(0, 1, 3u32), (1, 1, 2), (0, 1, 5), (1, 0, 1)].map(|(u, v, c)| CapacitatedEdge::new(u, v, c));
        assert_eq!(
            simple_edges(&edges),
            vec![CapacitatedEdge::new(0, 1, 5), CapacitatedEdge::new(1, 0, 1)]
        );
    }
}
