/*!
# Flow Algorithms

This module provides the maximum flow / minimum cut solver and the routines built around it.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use preflow::algo::*;
```
and gain access to the push-relabel solver, cut extraction and mask comparison.
*/

mod cut;
mod push_relabel;
mod segmentation;

use crate::{error::Result, gens::*, prelude::*};
use tracing::{debug, trace, warn};

pub use cut::*;
pub use push_relabel::*;
pub use segmentation::*;
