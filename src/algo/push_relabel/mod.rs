/*!
# Push-Relabel (Highest Label)

Computes a maximum flow and a minimum cut using the push-relabel (preflow-push) method with
the **highest-label** vertex selection rule and periodic **global relabeling**.

## Algorithm
1. Build the [`ResidualGraph`] from the input edges (optionally merging an initial flow).
2. Saturate all arcs leaving the source: their capacity becomes excess at their heads.
3. Perform a global relabel so that all heights are exact residual distances.
4. While an active vertex (non-terminal with positive excess) exists, pick the one with the
   largest height and *discharge* it: push excess along admissible arcs
   (`height(u) == height(v) + 1`) and relabel the vertex once none is left.
   Every push and every relabel counts towards the global relabel cadence of
   [`HeightLabels`].
5. Once no active vertex remains, the excess of the sink is the value of a maximum flow.

## Usage
```
use preflow::prelude::*;

let mut solver = PushRelabel::<u32>::new(4, [(0, 1, 3u32), (0, 2, 2), (1, 3, 2), (2, 3, 3)]).unwrap();
assert_eq!(solver.max_flow(), 4);
assert_eq!(solver.min_cut(), &[0, 1]);
```

Results are computed on first request and cached afterwards.
*/

mod active;
mod labels;

pub use active::*;
pub use labels::*;

use super::*;

/// Counters collected while solving
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PushRelabelStats {
    /// Number of vertices taken from the scheduler and discharged
    pub discharges: u64,
    /// Number of pushes (saturating and non-saturating)
    pub pushes: u64,
    /// Number of local relabels
    pub relabels: u64,
    /// Number of global relabels (including the initial one)
    pub global_relabels: u64,
}

/// Configures a [`PushRelabel`] solver.
///
/// ```
/// use preflow::prelude::*;
///
/// let edges = [(0, 1, 5u32), (1, 2, 3)];
/// let mut solver = PushRelabel::<u32>::builder(3)
///     .initial_flow([(0, 1, 2u32), (1, 2, 2)])
///     .global_relabel_interval(4)
///     .build(edges)
///     .unwrap();
///
/// assert_eq!(solver.max_flow(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PushRelabelBuilder<C> {
    n: NumNodes,
    initial_flow: Vec<CapacitatedEdge<C>>,
    global_relabel_interval: Option<u64>,
}

impl<C: Capacity> PushRelabelBuilder<C> {
    /// Creates a new builder for a network with `n` vertices
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            initial_flow: Vec::new(),
            global_relabel_interval: None,
        }
    }

    /// Warm-starts the solver from a previously computed (possibly sub-optimal) flow.
    /// Each entry `(tail, head, amount)` moves `amount` units of capacity from the arc
    /// `tail -> head` to its pair.
    pub fn initial_flow<I, E>(mut self, flow: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<CapacitatedEdge<C>>,
    {
        self.initial_flow = flow.into_iter().map(Into::into).collect();
        self
    }

    /// Performs a global relabel every `interval` pushes/relabels instead of every `n + m - 1`.
    /// An interval of `0` is treated as `1`.
    pub fn global_relabel_interval(mut self, interval: u64) -> Self {
        self.global_relabel_interval = Some(interval);
        self
    }

    /// Builds the residual graph, merges the initial flow and saturates the source.
    /// No discharge work is performed yet.
    ///
    /// # Errors
    /// Fails with [`FlowError::InvalidGraph`] if the network is malformed and with
    /// [`FlowError::InvalidWarmStart`] if the initial flow cannot be merged.
    pub fn build<I, E>(self, edges: I) -> Result<PushRelabel<C>>
    where
        I: IntoIterator<Item = E>,
        E: Into<CapacitatedEdge<C>>,
    {
        let edges: Vec<CapacitatedEdge<C>> = edges.into_iter().map(Into::into).collect();
        let graph = ResidualGraph::from_edges(self.n, edges.iter())?;

        let n = graph.number_of_nodes();
        let interval = self
            .global_relabel_interval
            .unwrap_or(n as u64 + edges.len() as u64 - 1);

        let mut solver = PushRelabel {
            labels: HeightLabels::new(n, interval),
            active: ActiveVertices::new(n),
            excess: vec![C::zero(); n as usize],
            graph,
            edges,
            stats: PushRelabelStats::default(),
            max_flow: None,
            min_cut: None,
        };

        for flow in &self.initial_flow {
            solver.merge_flow(flow)?;
        }

        solver.saturate_source();
        Ok(solver)
    }
}

/// Highest-label push-relabel solver for a single flow network.
///
/// The solver exclusively owns the residual graph, the excesses, the labels and the scheduler
/// of one solve. See the [module documentation](self) for details.
#[derive(Debug, Clone)]
pub struct PushRelabel<C> {
    graph: ResidualGraph<C>,
    edges: Vec<CapacitatedEdge<C>>,
    excess: Vec<C>,
    labels: HeightLabels,
    active: ActiveVertices,
    stats: PushRelabelStats,
    max_flow: Option<C>,
    min_cut: Option<Vec<Node>>,
}

impl<C: Capacity> PushRelabel<C> {
    /// Creates a builder for a network with `n` vertices
    pub fn builder(n: NumNodes) -> PushRelabelBuilder<C> {
        PushRelabelBuilder::new(n)
    }

    /// Creates a solver with default settings for a network with `n` vertices, source `0` and
    /// sink `n - 1`.
    ///
    /// # Errors
    /// Fails with [`FlowError::InvalidGraph`] if `n < 2` or if an edge references a vertex
    /// outside `[0, n)`.
    pub fn new<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<CapacitatedEdge<C>>,
    {
        Self::builder(n).build(edges)
    }

    /// Returns the value of a maximum flow, running the discharge loop to convergence first
    /// if necessary.
    pub fn max_flow(&mut self) -> C {
        if let Some(value) = self.max_flow {
            return value;
        }

        self.run();

        let value = self.excess[self.graph.sink() as usize];
        self.max_flow = Some(value);

        debug!(
            nodes = self.graph.number_of_nodes(),
            arcs = self.graph.number_of_edges(),
            discharges = self.stats.discharges,
            pushes = self.stats.pushes,
            relabels = self.stats.relabels,
            global_relabels = self.stats.global_relabels,
            max_flow = %value,
            "push-relabel converged"
        );

        value
    }

    /// Returns the source side of a minimum cut in ascending order.
    pub fn min_cut(&mut self) -> &[Node] {
        if self.min_cut.is_none() {
            self.max_flow();
            self.min_cut = Some(source_side(&self.graph));
        }

        self.min_cut.as_deref().unwrap_or_default()
    }

    /// Returns the realized flow on every input edge, in input order.
    ///
    /// # Errors
    /// Fails with [`FlowError::ArcNotFound`] if an input edge lost its arc, which indicates a
    /// bookkeeping bug.
    pub fn flow(&mut self) -> Result<Vec<CapacitatedEdge<C>>> {
        self.max_flow();
        realized_flow(&self.graph, &self.edges)
    }

    /// Returns *true* once the discharge loop has run to completion
    pub fn is_converged(&self) -> bool {
        self.max_flow.is_some()
    }

    /// Returns the current excess of `u`.
    /// ** Panics if `u >= n` **
    pub fn excess(&self, u: Node) -> C {
        self.excess[u as usize]
    }

    /// Returns the current height of `u`.
    /// ** Panics if `u >= n` **
    pub fn height(&self, u: Node) -> Height {
        self.labels.height(u)
    }

    /// Read-only access to the residual graph
    pub fn residual(&self) -> &ResidualGraph<C> {
        &self.graph
    }

    /// The input edges in input order
    pub fn edges(&self) -> &[CapacitatedEdge<C>] {
        &self.edges
    }

    /// Counters collected so far
    pub fn stats(&self) -> &PushRelabelStats {
        &self.stats
    }

    /// Merges one entry of an initial flow into the residual graph
    fn merge_flow(&mut self, flow: &CapacitatedEdge<C>) -> Result<()> {
        self.graph.apply_flow(flow.tail, flow.head, flow.capacity)?;

        if flow.head == self.graph.sink() {
            let sink = self.graph.sink() as usize;
            self.excess[sink] = self.excess[sink] + flow.capacity;
        }

        Ok(())
    }

    /// Moves the full residual capacity of every arc leaving the source into the excess of its
    /// head, then relabels globally and activates all heads that received excess.
    fn saturate_source(&mut self) {
        let source = self.graph.source();

        let mut heads = Vec::new();
        for slot in 0..self.graph.out_degree_of(source) {
            let loc = ArcLocator::new(source, slot);
            let arc = *self.graph.arc(loc);
            if !arc.is_residual() {
                continue;
            }

            self.graph.push_along(loc, arc.capacity());
            let head = arc.head() as usize;
            self.excess[head] = self.excess[head] + arc.capacity();
            heads.push(arc.head());
        }

        self.labels.recompute_if_due(&self.graph);
        self.stats.global_relabels = self.labels.global_relabels();

        for u in heads {
            self.activate(u);
        }
    }

    /// Enqueues `u` if it is a non-terminal vertex with positive excess
    fn activate(&mut self, u: Node) {
        if self.graph.is_terminal(u) || self.excess[u as usize].is_zero() {
            return;
        }

        self.active.push(u, self.labels.height(u));
    }

    /// Counts one operation towards the global relabel cadence
    fn tick(&mut self) {
        if self.labels.recompute_if_due(&self.graph) {
            self.stats.global_relabels += 1;
        }
    }

    /// Runs the scheduler/discharge loop until no active vertex remains
    fn run(&mut self) {
        debug!(
            nodes = self.graph.number_of_nodes(),
            arcs = self.graph.number_of_edges(),
            active = self.active.len(),
            "push-relabel started"
        );

        while let Some(u) = self.active.pop() {
            if self.graph.is_terminal(u) {
                continue;
            }

            self.stats.discharges += 1;
            self.discharge(u);
        }
    }

    /// Eliminates the excess of `u` by pushing along admissible arcs and relabeling `u`
    /// whenever no admissible arc is left.
    fn discharge(&mut self, u: Node) {
        while !self.excess[u as usize].is_zero() {
            for slot in 0..self.graph.out_degree_of(u) {
                let loc = ArcLocator::new(u, slot);
                let arc = *self.graph.arc(loc);
                if !arc.is_residual() || !self.labels.is_downhill(u, arc.head()) {
                    continue;
                }

                self.push(loc, arc);

                if self.excess[u as usize].is_zero() {
                    return;
                }
            }

            let Some(lowest) = self
                .graph
                .arcs_of(u)
                .iter()
                .filter(|arc| arc.is_residual())
                .map(|arc| self.labels.height(arc.head()))
                .min()
            else {
                warn!(
                    vertex = u,
                    excess = %self.excess[u as usize],
                    "no residual arc left, excess is stranded"
                );
                return;
            };

            // a global relabel during the scan may have made an arc admissible again
            if lowest + 1 <= self.labels.height(u) {
                continue;
            }

            self.labels.set_height(u, lowest + 1);
            self.stats.relabels += 1;
            self.tick();
        }
    }

    /// Pushes `min(excess(u), capacity)` units along the arc at `loc`
    fn push(&mut self, loc: ArcLocator, arc: ResidualArc<C>) {
        let (u, v) = (loc.tail as usize, arc.head() as usize);
        let delta = self.excess[u].min(arc.capacity());

        self.graph.push_along(loc, delta);
        self.excess[u] = self.excess[u] - delta;
        self.excess[v] = self.excess[v] + delta;
        self.stats.pushes += 1;

        self.activate(arc.head());
        self.tick();
    }
}
