use smallvec::SmallVec;

use super::*;

/// Connected components of a vertex subset, typically found on the stack
pub type Components = SmallVec<[VertexSubset; 8]>;

/// Partitions `free` into the vertex sets of the connected components of the subgraph induced
/// by `free`. Components are ordered by their smallest vertex.
pub fn components(model: &AdjacencyModel, free: VertexSubset) -> Components {
    let mut result = Components::new();
    let mut remaining = free;

    while let Some(start) = remaining.first() {
        let mut component = VertexSubset::singleton(start);
        let mut frontier = component;

        while !frontier.is_empty() {
            let reached = frontier
                .iter()
                .fold(VertexSubset::EMPTY, |acc, u| acc | model.neighbors_of(u));
            frontier = reached.intersection(remaining).difference(component);
            component = component | frontier;
        }

        remaining = remaining - component;
        result.push(component);
    }

    result
}
