/*!
# Height Labels

Maintains the height (label) of every vertex and periodically recomputes exact labels from
the residual graph (*global relabeling*).

Local relabels only provide valid lower bounds on the distance to the sink. Recomputing the
labels from true residual distances every `n + m - 1` operations keeps them tight, which bounds
the number of relabels and pushes.

A global relabel performs two breadth-first traversals *against* the direction of residual
arcs: one rooted at the sink, one rooted at the source. A vertex `x` is reached from `y` if the
arc `x -> y` has residual capacity, and receives `height(y) + 1`. Vertices that are reached by
neither traversal can reach neither terminal; they are parked at the `2n` sentinel, which keeps
the labeling valid and excludes them from all admissible arcs.
*/

use std::collections::VecDeque;

use super::*;

/// Height labels of all vertices of a flow network, together with the global relabel cadence
#[derive(Debug, Clone)]
pub struct HeightLabels {
    heights: Vec<Height>,
    counter: u64,
    interval: u64,
    global_relabels: u64,
}

impl HeightLabels {
    /// Creates the initial labeling for `n` vertices: the source is at `n`, the sink at `0`
    /// and all other vertices at the `2n` sentinel.
    ///
    /// A global relabel is performed every `interval` calls to
    /// [`HeightLabels::recompute_if_due`], starting with the very first call.
    pub fn new(n: NumNodes, interval: u64) -> Self {
        let interval = interval.max(1);
        let mut heights = vec![2 * n as Height; n as usize];
        heights[source_of(n) as usize] = n as Height;
        heights[sink_of(n) as usize] = 0;

        Self {
            heights,
            counter: interval - 1,
            interval,
            global_relabels: 0,
        }
    }

    /// Returns the height of `u`.
    /// ** Panics if `u >= n` **
    pub fn height(&self, u: Node) -> Height {
        self.heights[u as usize]
    }

    /// Overwrites the height of `u`.
    /// ** Panics if `u >= n` **
    pub fn set_height(&mut self, u: Node, height: Height) {
        self.heights[u as usize] = height;
    }

    /// Returns all heights indexed by vertex
    pub fn heights(&self) -> &[Height] {
        &self.heights
    }

    /// The label all vertices start with and that unreachable vertices are parked at
    pub fn sentinel(&self) -> Height {
        2 * self.heights.len() as Height
    }

    /// Number of calls between two global relabels
    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Number of global relabels performed so far
    pub fn global_relabels(&self) -> u64 {
        self.global_relabels
    }

    /// Returns *true* if the arc `u -> v` goes exactly one level downhill.
    /// Whether the arc has residual capacity has to be checked by the caller.
    pub fn is_downhill(&self, u: Node, v: Node) -> bool {
        self.height(u) == self.height(v) + 1
    }

    /// Counts one operation and performs a global relabel once `interval` operations have
    /// accumulated. Returns *true* if the labels were recomputed.
    pub fn recompute_if_due<C: Capacity>(&mut self, graph: &ResidualGraph<C>) -> bool {
        self.counter += 1;
        if self.counter < self.interval {
            return false;
        }

        self.counter = 0;
        self.recompute(graph);
        true
    }

    /// Recomputes all labels as residual distances to the sink (or `n` plus the residual
    /// distance to the source for vertices that cannot reach the sink).
    pub fn recompute<C: Capacity>(&mut self, graph: &ResidualGraph<C>) {
        let mut visited = graph.vertex_bitset_unset();
        visited.insert(graph.source() as usize);
        visited.insert(graph.sink() as usize);

        let reached_sink = self.distances_towards(graph, graph.sink(), &mut visited);
        let reached_source = self.distances_towards(graph, graph.source(), &mut visited);

        let sentinel = self.sentinel();
        for u in graph.inner_vertices() {
            if !visited.contains(u as usize) {
                self.heights[u as usize] = sentinel;
            }
        }

        self.global_relabels += 1;
        trace!(
            reached_sink,
            reached_source,
            round = self.global_relabels,
            "global relabel"
        );
    }

    /// Breadth-first traversal from `root` over reversed residual arcs. Assigns
    /// `height(predecessor) + 1` to every newly reached vertex and returns their number.
    fn distances_towards<C: Capacity>(
        &mut self,
        graph: &ResidualGraph<C>,
        root: Node,
        visited: &mut NodeBitSet,
    ) -> NumNodes {
        let mut queue = VecDeque::from([root]);
        let mut reached = 0;

        while let Some(u) = queue.pop_front() {
            for (slot, arc) in graph.arcs_of(u).iter().enumerate() {
                let v = arc.head();
                if visited.contains(v as usize) {
                    continue;
                }

                // `v` can push towards `u` iff the pair `v -> u` has residual capacity
                if !graph
                    .pair_of(ArcLocator::new(u, slot as ArcSlot))
                    .is_residual()
                {
                    continue;
                }

                visited.insert(v as usize);
                self.heights[v as usize] = self.heights[u as usize] + 1;
                queue.push_back(v);
                reached += 1;
            }
        }

        reached
    }
}
