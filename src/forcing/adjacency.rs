use std::{collections::BTreeSet, fmt::Display};

use log::debug;

use super::*;

/// Everything the forcing solvers need to know about a graph: the number of vertices and the
/// neighborhood of each vertex as a [`VertexSubset`].
///
/// Building the model relabels the graph to `0..n` and validates it; this is the dominant fixed
/// cost of a solve, so a model is built once and then shared (read-only) across all
/// `q`/push-rule variants computed on the same graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyModel {
    neighbors: Vec<VertexSubset>,
    labels: Vec<String>,
}

impl AdjacencyModel {
    /// Builds the model of a graph whose vertices are already numbered `0..n`.
    ///
    /// # Errors
    /// Returns [`InvalidGraph`] if the graph has fewer than 2 vertices, more than
    /// [`MAX_VERTICES`] vertices, or is disconnected.
    pub fn new<G: AdjacencyList>(graph: &G) -> Result<Self> {
        let n = graph.number_of_nodes();
        validate_order(n)?;

        let neighbors = graph
            .vertices()
            .map(|u| {
                let mut nbs = VertexSetBuilder::from(&graph.neighbors_of_as_bitset(u));
                nbs.remove(u);
                nbs.freeze()
            })
            .collect_vec();

        Self::from_parts(neighbors, (0..n).map(|u| u.to_string()).collect())
    }

    /// Builds the model of a graph given as a list of edges over arbitrary labels.
    ///
    /// Labels are sorted and relabelled to `0..n` in that order; the original labels are kept
    /// for reporting (see [`AdjacencyModel::label`]). Self-loops are ignored.
    ///
    /// # Errors
    /// Same as [`AdjacencyModel::new`].
    pub fn from_labeled_edges<L, I>(edges: I) -> Result<Self>
    where
        L: Ord + Clone + Display,
        I: IntoIterator<Item = (L, L)>,
    {
        let edges = edges.into_iter().collect_vec();
        let labels: BTreeSet<L> = edges
            .iter()
            .flat_map(|(u, v)| [u.clone(), v.clone()])
            .collect();
        let labels = labels.into_iter().collect_vec();

        let n = labels.len() as NumNodes;
        validate_order(n)?;

        let index_of = |label: &L| labels.binary_search(label).map(|i| i as Node).ok();

        let mut neighbors = vec![VertexSubset::EMPTY; labels.len()];
        for (u, v) in &edges {
            let (Some(u), Some(v)) = (index_of(u), index_of(v)) else {
                continue;
            };
            if u != v {
                neighbors[u as usize] = neighbors[u as usize].with(v);
                neighbors[v as usize] = neighbors[v as usize].with(u);
            }
        }

        Self::from_parts(neighbors, labels.iter().map(|l| l.to_string()).collect())
    }

    fn from_parts(neighbors: Vec<VertexSubset>, labels: Vec<String>) -> Result<Self> {
        let model = Self { neighbors, labels };
        if components(&model, model.vertices()).len() != 1 {
            return Err(InvalidGraph::Disconnected.into());
        }

        debug!(
            "Built adjacency model with {} vertices and {} edges",
            model.number_of_nodes(),
            model.number_of_edges()
        );
        Ok(model)
    }

    /// Returns the number of vertices
    pub fn number_of_nodes(&self) -> NumNodes {
        self.neighbors.len() as NumNodes
    }

    /// Returns the number of edges
    pub fn number_of_edges(&self) -> NumEdges {
        self.neighbors.iter().map(|nb| nb.len()).sum::<NumNodes>() / 2
    }

    /// Returns the set of all vertices
    pub fn vertices(&self) -> VertexSubset {
        VertexSubset::full(self.number_of_nodes())
    }

    /// Returns the (open) neighborhood of `u`
    /// ** Panics if `u >= n` **
    pub fn neighbors_of(&self, u: Node) -> VertexSubset {
        self.neighbors[u as usize]
    }

    /// Converts the model back into an [`AdjArray`] over the internal vertex numbering
    pub fn to_graph(&self) -> AdjArray {
        let edges = self.vertices().iter().flat_map(|u| {
            self.neighbors_of(u)
                .iter()
                .filter(move |&v| u < v)
                .map(move |v| Edge(u, v))
        });
        AdjArray::from_edges(self.number_of_nodes(), edges)
    }

    /// Returns the original label of `u`
    /// ** Panics if `u >= n` **
    pub fn label(&self, u: Node) -> &str {
        &self.labels[u as usize]
    }

    /// Renders a subset using the original labels, e.g. `{a, c}`
    pub fn display_subset(&self, subset: VertexSubset) -> String {
        format!("{{{}}}", subset.iter().map(|u| self.label(u)).join(", "))
    }

    /// Returns the minimum degree of the graph
    pub fn min_degree(&self) -> NumNodes {
        self.neighbors.iter().map(|nb| nb.len()).min().unwrap_or(0)
    }

    /// Returns *true* if every vertex is adjacent to all other vertices
    pub fn is_complete(&self) -> bool {
        let n = self.number_of_nodes();
        self.neighbors.iter().all(|nb| nb.len() + 1 == n)
    }
}

fn validate_order(n: NumNodes) -> Result<()> {
    if n < 2 {
        Err(InvalidGraph::TooFewVertices(n).into())
    } else if n > MAX_VERTICES {
        Err(InvalidGraph::TooManyVertices { n, max: MAX_VERTICES }.into())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens;

    #[test]
    fn model_of_path() {
        let model = AdjacencyModel::new(&gens::path(4)).unwrap();
        assert_eq!(model.number_of_nodes(), 4);
        assert_eq!(model.number_of_edges(), 3);
        assert_eq!(model.neighbors_of(1).iter().collect_vec(), vec![0, 2]);
        assert_eq!(model.vertices().len(), 4);
        assert_eq!(model.min_degree(), 1);
        assert_eq!(model.label(3), "3");
        assert!(!model.is_complete());
        assert!(AdjacencyModel::new(&gens::complete(4)).unwrap().is_complete());

        let graph = model.to_graph();
        assert_eq!(graph.ordered_edges(true), gens::path(4).ordered_edges(true));
    }

    #[test]
    fn rejects_invalid_graphs() {
        assert_eq!(
            AdjacencyModel::new(&AdjArray::new(0)),
            Err(ZqError::InvalidGraph(InvalidGraph::TooFewVertices(0)))
        );
        assert_eq!(
            AdjacencyModel::new(&AdjArray::new(1)),
            Err(ZqError::InvalidGraph(InvalidGraph::TooFewVertices(1)))
        );
        assert_eq!(
            AdjacencyModel::new(&AdjArray::from_edges(4, [(0, 1), (2, 3)])),
            Err(ZqError::InvalidGraph(InvalidGraph::Disconnected))
        );
        assert_eq!(
            AdjacencyModel::new(&gens::path(65)),
            Err(ZqError::InvalidGraph(InvalidGraph::TooManyVertices {
                n: 65,
                max: 64
            }))
        );
    }

    #[test]
    fn labeled_edges_are_relabelled_in_order() {
        let model =
            AdjacencyModel::from_labeled_edges([("d", "b"), ("b", "a"), ("a", "c")]).unwrap();

        assert_eq!(model.number_of_nodes(), 4);
        assert_eq!(model.label(0), "a");
        assert_eq!(model.label(3), "d");
        // a=0, b=1, c=2, d=3
        assert_eq!(model.neighbors_of(0).iter().collect_vec(), vec![1, 2]);
        assert_eq!(model.neighbors_of(3).iter().collect_vec(), vec![1]);
        assert_eq!(model.display_subset([0, 3].into_iter().collect()), "{a, d}");

        assert_eq!(
            AdjacencyModel::from_labeled_edges(Vec::<(u32, u32)>::new()),
            Err(ZqError::InvalidGraph(InvalidGraph::TooFewVertices(0)))
        );
        assert_eq!(
            AdjacencyModel::from_labeled_edges([(1, 2), (3, 4)]),
            Err(ZqError::InvalidGraph(InvalidGraph::Disconnected))
        );
    }
}
