use rand::distr::uniform::SampleUniform;

use super::*;

/// Generator for random flow networks with `n` vertices and `m` arcs.
///
/// Both endpoints of every arc are drawn uniformly from `0..n` and its capacity uniformly from
/// `0..=max_capacity`. The resulting list may therefore contain self-loops, parallel and opposite
/// arcs as well as arcs into the source or out of the sink, all of which the solver has to
/// cope with.
///
/// # Panics
/// `generate` and `stream` panic if fewer than 2 nodes were configured.
///
/// ```
/// use preflow::{gens::*, prelude::*};
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// let rng = &mut Pcg64Mcg::seed_from_u64(1);
/// let edges = RandomNetwork::new().nodes(10).edges(30).max_capacity(5u32).generate(rng);
///
/// assert_eq!(edges.len(), 30);
/// assert!(edges.iter().all(|e| e.tail < 10 && e.head < 10 && e.capacity <= 5));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNetwork<C> {
    n: NumNodes,
    m: NumEdges,
    max_capacity: C,
}

impl<C: Capacity> RandomNetwork<C> {
    /// Creates a new empty generator
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C> NumNodesGen for RandomNetwork<C> {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl<C> NumEdgesGen for RandomNetwork<C> {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m;
    }
}

impl<C> MaxCapacityGen<C> for RandomNetwork<C> {
    fn set_max_capacity(&mut self, max: C) {
        self.max_capacity = max;
    }
}

impl<C> NetworkGenerator<C> for RandomNetwork<C>
where
    C: Capacity + SampleUniform,
{
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = CapacitatedEdge<C>>
    where
        R: Rng,
    {
        assert!(self.n >= 2, "A flow network needs a source and a sink!");

        let (n, max) = (self.n, self.max_capacity);
        (0..self.m).map(move |_| {
            CapacitatedEdge::new(
                rng.random_range(0..n),
                rng.random_range(0..n),
                rng.random_range(C::zero()..=max),
            )
        })
    }
}
