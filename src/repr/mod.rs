/*!
# Graph Representations

All computations in this crate run on tiny, simple, undirected graphs, so a single
representation suffices: [`AdjArray`] stores one neighbor list per node.
Self-loops are rejected; loops in the sense of Zqhat are *labels* on vertices and are
carried separately by [`PushRule`](crate::forcing::PushRule).

[`digest`] computes hash digests of graphs (and of canonical certificates).
*/

use crate::{ops::*, *};

pub mod digest;

/// An undirected simple graph stored as an adjacency array
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct AdjArray {
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl GraphNodeOrder for AdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjArray {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjArray {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl GraphNew for AdjArray {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphEdgeEditing for AdjArray {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        assert_ne!(u, v, "self-loops are not supported");
        if self.nbs[u as usize].contains(&v) {
            true
        } else {
            self.nbs[u as usize].push(v);
            self.nbs[v as usize].push(u);
            self.num_edges += 1;
            false
        }
    }
}
