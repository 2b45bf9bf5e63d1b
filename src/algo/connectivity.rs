use itertools::Itertools;
use stream_bitset::prelude::*;

use super::*;

/// Connectivity queries on undirected graphs
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns an iterator over the connected components of the graph.
    /// Each component is returned as a sorted list of nodes; components are ordered by their
    /// smallest node.
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns *true* if the graph is non-empty and connected
    fn is_connected(&self) -> bool {
        !self.is_empty() && self.bfs(0).count() == self.len()
    }

    /// Returns *true* if the graph is a tree, i.e. connected with `n - 1` edges
    fn is_tree(&self) -> bool
    where
        Self: GraphEdgeOrder,
    {
        self.is_connected() && self.number_of_edges() as usize + 1 == self.len()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    next_start: Node,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            next_start: 0,
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.graph.number_of_nodes();
        while self.next_start < n && self.visited.get_bit(self.next_start) {
            self.next_start += 1;
        }
        if self.next_start >= n {
            return None;
        }

        let component = BFS::new(self.graph, self.next_start)
            .with_nodes_excluded(self.visited.iter_set_bits().collect_vec())
            .map(|(u, _)| u)
            .sorted()
            .collect_vec();

        for &u in &component {
            self.visited.set_bit(u);
        }

        Some(component)
    }
}
