/*!
# Graph Generators

Deterministic families of graphs that frequently show up in zero forcing literature
(paths, cycles, complete graphs, stars, complete bipartite graphs, the Petersen graph, ...)
as well as the random [`Gnp`] model used for randomized testing.

All families return an [`AdjArray`] with nodes `0..n` and are built from the
[`GeneratorSubstructures`] primitives.
*/

use crate::{algo::*, prelude::*};

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Path `0 - 1 - ... - (n-1)`
pub fn path(n: NumNodes) -> AdjArray {
    let mut graph = AdjArray::new(n);
    graph.connect_path(0..n);
    graph
}

/// Cycle `0 - 1 - ... - (n-1) - 0`
///
/// ** Panics if `n < 3` **
pub fn cycle(n: NumNodes) -> AdjArray {
    assert!(n >= 3, "A cycle needs at least 3 nodes");
    let mut graph = AdjArray::new(n);
    graph.connect_cycle(0..n);
    graph
}

/// Complete graph `K_n`
pub fn complete(n: NumNodes) -> AdjArray {
    let mut graph = AdjArray::new(n);
    graph.connect_clique(0..n);
    graph
}

/// Star `K_{1,leaves}` with center `0`
pub fn star(leaves: NumNodes) -> AdjArray {
    AdjArray::from_edges(leaves + 1, (1..=leaves).map(|v| (0, v)))
}

/// Complete bipartite graph `K_{a,b}` with parts `0..a` and `a..a+b`
pub fn complete_bipartite(a: NumNodes, b: NumNodes) -> AdjArray {
    AdjArray::from_edges(a + b, (0..a).flat_map(|u| (a..a + b).map(move |v| (u, v))))
}

/// Wheel on `n` nodes: a cycle on `1..n` and a hub `0` adjacent to all of them
///
/// ** Panics if `n < 4` **
pub fn wheel(n: NumNodes) -> AdjArray {
    assert!(n >= 4, "A wheel needs at least 4 nodes");
    let mut graph = star(n - 1);
    graph.connect_cycle(1..n);
    graph
}

/// Petersen graph: outer 5-cycle `0..5`, inner pentagram `5..10`, spokes `i - (i+5)`
pub fn petersen() -> AdjArray {
    let mut graph = AdjArray::new(10);
    graph.connect_cycle(0..5);
    graph.connect_cycle([5, 7, 9, 6, 8]);
    graph.add_edges((0..5).map(|i| (i, i + 5)));
    graph
}
