/*!
Breadth-first traversal and traversal-derived utilities (distances, eccentricities, diameter).
*/

use super::*;
use std::collections::VecDeque;

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
///
/// Each item is a pair `(node, distance from start)`.
pub struct BFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<(Node, NumNodes)>,
}

impl<'a, G> BFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal iterator starting from `start`.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![(start, 0)]),
        }
    }

    /// Excludes nodes from the search. They will be treated as if they were already visited,
    /// i.e. no edges to or from that node will be taken.
    ///
    /// # Warning
    /// Calling this method has no effect for nodes that are already in the queue. It is
    /// therefore highly recommended to call this method directly after the constructor.
    pub fn with_nodes_excluded<N>(mut self, us: N) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        for u in us {
            self.visited.set_bit(u);
        }
        self
    }

    /// Returns the number of discovered nodes so far
    pub fn number_of_visited_nodes(&self) -> NumNodes {
        self.visited.cardinality()
    }
}

impl<G> Iterator for BFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = (Node, NumNodes);

    fn next(&mut self) -> Option<Self::Item> {
        let (u, dist) = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.queue.push_back((v, dist + 1));
            }
        }

        Some((u, dist))
    }
}

/// High-level traversal methods available directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns a BFS iterator starting at `start`
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns the diameter of the graph or `None` if the graph is empty or disconnected
    fn diameter(&self) -> Option<NumNodes> {
        let mut diameter = 0;
        for u in self.vertices_range() {
            let mut bfs = self.bfs(u);
            let ecc = bfs.by_ref().map(|(_, d)| d).max().unwrap_or(0);
            if bfs.number_of_visited_nodes() != self.number_of_nodes() {
                return None;
            }
            diameter = diameter.max(ecc);
        }

        (!self.is_empty()).then_some(diameter)
    }
}

impl<G: AdjacencyList + Sized> Traversal for G {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn bfs_order() {
        let graph = AdjArray::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);
        let order = graph.bfs(1).collect_vec();

        assert_eq!(order.len(), 6);
        assert_eq!(order[0], (1, 0));
        assert_eq!(
            order.iter().map(|&(_, d)| d).collect_vec(),
            vec![0, 1, 1, 2, 2, 3]
        );
        assert_eq!(order[5], (3, 3));
    }

    #[test]
    fn bfs_excluded() {
        let graph = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        let order = graph.bfs(0).with_nodes_excluded([2]).map(|(u, _)| u).collect_vec();
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn diameter() {
        let path = AdjArray::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);
        assert_eq!(path.diameter(), Some(4));

        let cycle = AdjArray::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]);
        assert_eq!(cycle.diameter(), Some(3));

        let disconnected = AdjArray::from_edges(4, [(0, 1), (2, 3)]);
        assert_eq!(disconnected.diameter(), None);

        assert_eq!(AdjArray::new(0).diameter(), None);
    }
}
