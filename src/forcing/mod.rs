/*!
# Zero Forcing and its Variants

This module contains the combinatorial search engine of the crate:

- [`AdjacencyModel`] holds the neighborhoods of a validated graph as [`VertexSubset`]s,
- [`PushRule`] applies the color-change rule (optionally with loop labels) to a fixed point,
- [`components`] splits the uncolored region into connected pieces,
- [`Zq`] computes `Zq(G)` with a dynamic program over all vertex subsets,
- [`Zqhat`] maximizes `Zq` over all loop/unloop labelings with a branch and bound search,
- [`zero_forcing_number`] and [`ZeroForcingSets`] compute the ordinary `Z(G)` exhaustively.

All solvers are configured with the builder pattern before being run on a model:
```
use zqforce::{prelude::*, forcing::*, gens};

let model = AdjacencyModel::new(&gens::cycle(6)).unwrap();

assert_eq!(Zq::new(0).solve(&model).value, 2);
assert_eq!(zero_forcing_number(&model), 2);
```
*/

use itertools::Itertools;

use crate::prelude::*;

mod adjacency;
mod bruteforce;
mod canon;
mod components;
mod push;
mod trace;
mod zq;
mod zqhat;

pub use adjacency::*;
pub use bruteforce::*;
pub use canon::*;
pub use components::*;
pub use push::*;
pub use trace::*;
pub use zq::*;
pub use zqhat::*;
