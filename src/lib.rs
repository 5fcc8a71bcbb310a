/*!
`preflow` computes **maximum flows** and **minimum cuts** of directed networks with
non-negative integer capacities using the *highest-label push-relabel* algorithm with
periodic *global relabeling*.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the
network. Node `0` is always the **source** and node `n - 1` is always the **sink**.
Edges are given as [`CapacitatedEdge`]s `(tail, head, capacity)`, where the capacity can be any
unsigned primitive integer (see [`Capacity`]).

Parallel edges are merged (the last capacity wins) and self-loops are ignored.

# Design

The solver is provided as a configurable struct that one can alter using the *Builder* pattern
before running it on a network:

```
use preflow::prelude::*;

let edges = [(0, 1, 16u32), (0, 2, 13), (1, 2, 10), (2, 1, 4), (1, 3, 12),
             (3, 2, 9), (2, 4, 14), (4, 3, 7), (3, 5, 20), (4, 5, 4)];

let mut solver = PushRelabel::<u32>::builder(6)
    .global_relabel_interval(8)
    .build(edges)
    .unwrap();

assert_eq!(solver.max_flow(), 23);
assert_eq!(solver.min_cut(), &[0, 1, 2, 4]);
```

Results are computed lazily on the first query and cached afterwards.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, the residual
  graph and the solver,
- [`algo`] includes the solver, cut/flow extraction and mask comparison metrics,
- [`gens`] includes generators for random networks and pixel grid networks.

Progress is reported via [`tracing`]: a `debug` event when a solve starts and ends, a `trace`
event per global relabel and a `warn` event if excess gets stranded.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::{FlowError, InvalidGraphReason, InvalidWarmStartReason};
pub use node::*;
pub use ops::*;

/// `preflow::prelude` includes definitions for nodes, edges and errors, all basic graph operation
/// traits, the residual graph as well as the solver.
pub mod prelude {
    pub use super::{
        algo::{PushRelabel, PushRelabelBuilder, PushRelabelStats},
        edge::*,
        error::FlowError,
        node::*,
        ops::*,
        repr::*,
    };
}
