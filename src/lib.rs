/*!
`zqforce` computes zero forcing type graph invariants that bound the minimum rank and the
inertia set of symmetric matrices with a given graph:

- the zero forcing number `Z(G)` and all minimum zero forcing sets,
- `Zq(G)`, the value of a forcing game in which an adversary picks among `q + 1` components
  of the uncolored region, with `Zq(G, 0) = Z+(G)` the positive semidefinite variant,
- `Zqhat(G)`, the largest `Zq(G)` over all ways to put loops onto the vertices of `G`.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph
and **edges** as a simple tuple-struct `Edge(Node, Node)`; all graphs are simple and undirected.
General graphs are stored as an [`AdjArray`](crate::repr::AdjArray).

The solvers work on an [`AdjacencyModel`](crate::forcing::AdjacencyModel), which stores
each neighborhood as a [`VertexSubset`](crate::subset::VertexSubset) bitmask. This limits
graphs to at most 64 vertices, which is far beyond what the exponential algorithms can handle
anyway.

# Design

All algorithms are provided as configurable structs that one can alter to their needs using the
*Builder* / *Setter* pattern before calling the configured algorithm on a model:

```
use zqforce::{prelude::*, forcing::*, gens};

let model = AdjacencyModel::new(&gens::star(3)).unwrap();

assert_eq!(Zq::new(0).solve(&model).value, 1);
assert_eq!(Zq::new(3).solve(&model).value, 2);
assert_eq!(zero_forcing_number(&model), 2);
```

# Usage

- [`prelude`] includes definitions for nodes, edges, vertex subsets, errors, basic graph
  operations and the graph representation,
- [`algo`] includes traversal and connectivity algorithms implemented on graphs,
- [`gens`] includes named graph families and a random graph generator,
- [`forcing`] includes the forcing rules and the `Z`, `Zq` and `Zqhat` solvers,
- [`inertia`], [`bounds`] and [`batch`] build on the solvers.

The crate logs through the [`log`](https://crates.io/crates/log) facade and never installs a
logger itself.
*/

pub mod algo;
pub mod batch;
pub mod bounds;
pub mod edge;
pub mod error;
pub mod forcing;
pub mod gens;
pub mod inertia;
pub mod node;
pub mod ops;
pub mod repr;
pub mod subset;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `zqforce::prelude` includes definitions for nodes, edges, vertex subsets and errors, all basic
/// graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*, subset::*};
}
