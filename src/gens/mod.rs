/*!
# Network Generators

This module provides builders that produce edge lists of flow networks.

Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `RandomNetwork::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).edges(m).max_capacity(c)`).
3. Generate edges via `generate()` or `stream()`.

Supported networks:
- [`RandomNetwork`]: uniformly random arcs with uniformly random capacities
- [`GridNetwork`]: the 4-neighbourhood pixel grid used for image segmentation, with one arc
  from the source into every pixel and one arc from every pixel into the sink
*/

use rand::Rng;

use crate::prelude::*;

mod grid;
mod random;

pub use grid::*;
pub use random::*;

/// Trait for generators that allow setting the number of nodes.
///
/// Setters are used to implement the builder-style methods.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the generator
    fn set_nodes(&mut self, n: NumNodes);

    /// Builder-style variant of [`NumNodesGen::set_nodes`]
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen: Sized {
    /// Sets the number of edges in the generator
    fn set_edges(&mut self, m: NumEdges);

    /// Builder-style variant of [`NumEdgesGen::set_edges`]
    fn edges(mut self, m: NumEdges) -> Self {
        self.set_edges(m);
        self
    }
}

/// Trait for generators that draw capacities from `0..=max`.
pub trait MaxCapacityGen<C>: Sized {
    /// Sets the largest capacity that may be generated
    fn set_max_capacity(&mut self, max: C);

    /// Builder-style variant of [`MaxCapacityGen::set_max_capacity`]
    fn max_capacity(mut self, max: C) -> Self {
        self.set_max_capacity(max);
        self
    }
}

/// General trait for a configurable random network generator.
pub trait NetworkGenerator<C: Capacity> {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<CapacitatedEdge<C>>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = CapacitatedEdge<C>>
    where
        R: Rng;
}
