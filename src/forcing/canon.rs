/*!
# Canonical Forms of Labeled Graphs

Two loop labelings that differ only by an automorphism of `G` have the same value of `Zq`.
[`CanonicalForm`] relabels a graph whose vertices are partitioned into *looped*, *unlooped*
and *unmarked* vertices such that isomorphic inputs receive the same relabelling certificate.

We use color refinement followed by individualization of the vertices of the first
non-singleton cell. Branches for twins (`N(u) \ {v} == N(v) \ {u}`) of an already explored
vertex of the same cell are skipped, as swapping two twins is an automorphism.
Among all leaves the lexicographically smallest certificate is kept.

Equal certificates always imply isomorphic inputs since the certificate fully describes the
relabelled graph; the search is exact for all graphs we can handle in reasonable time.
*/

use ::digest::Digest;

use super::*;
use crate::repr::digest::GraphDigest;

const LOOPED: u8 = 0;
const UNLOOPED: u8 = 1;
const UNMARKED: u8 = 2;

/// Canonical relabelling of a graph together with a loop labeling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalForm {
    /// `order[i]` is the vertex placed at position `i`
    order: Vec<Node>,
    /// Class of the vertex at each position
    classes: Vec<u8>,
    /// Neighborhood of the vertex at each position, as a set of positions
    rows: Vec<u64>,
}

impl CanonicalForm {
    /// Computes the canonical form of `model` with the given looped and unlooped vertices
    pub fn new(model: &AdjacencyModel, looped: VertexSubset, unlooped: VertexSubset) -> Self {
        let class_of = |v: Node| {
            if looped.contains(v) {
                LOOPED
            } else if unlooped.contains(v) {
                UNLOOPED
            } else {
                UNMARKED
            }
        };

        let initial = model.vertices().iter().map(|v| class_of(v) as u32).collect_vec();
        let colors = refine(model, initial);

        let mut search = Search {
            model,
            classes: model.vertices().iter().map(class_of).collect(),
            best: None,
        };
        search.individualize(colors);

        if let Some(best) = search.best.take() {
            best
        } else {
            search.leaf(&model.vertices().iter().collect_vec())
        }
    }

    /// Returns the vertex placed at each position
    pub fn order(&self) -> &[Node] {
        &self.order
    }

    /// Returns the relabelled graph, where vertex `i` is the vertex at position `i`
    pub fn graph(&self) -> AdjArray {
        let n = self.rows.len() as NumNodes;
        let edges = self.rows.iter().enumerate().flat_map(|(i, &row)| {
            VertexSubset::from_bits(row)
                .iter()
                .filter(move |&j| (i as Node) < j)
                .map(move |j| Edge(i as Node, j))
        });
        AdjArray::from_edges(n, edges)
    }

    /// Returns the SHA-256 digest (as hex string) of the relabelled graph and its classes
    pub fn signature(&self) -> String {
        let mut hasher = sha2::Sha256::new();
        self.graph().update_digest(&mut hasher);
        hasher.update(&self.classes);
        format!("{:x}", hasher.finalize())
    }

    fn certificate(&self) -> (&[u8], &[u64]) {
        (&self.classes, &self.rows)
    }
}

struct Search<'a> {
    model: &'a AdjacencyModel,
    classes: Vec<u8>,
    best: Option<CanonicalForm>,
}

impl Search<'_> {
    fn individualize(&mut self, colors: Vec<u32>) {
        let n = colors.len();

        let mut cell_sizes = vec![0usize; n];
        for &c in &colors {
            cell_sizes[c as usize] += 1;
        }

        let Some(target) = (0..n).find(|&c| cell_sizes[c] > 1) else {
            // discrete coloring: position of a vertex is its color
            let mut order = vec![INVALID_NODE; n];
            for (v, &c) in colors.iter().enumerate() {
                order[c as usize] = v as Node;
            }
            let candidate = self.leaf(&order);
            if self
                .best
                .as_ref()
                .is_none_or(|best| candidate.certificate() < best.certificate())
            {
                self.best = Some(candidate);
            }
            return;
        };

        let cell = (0..n as Node)
            .filter(|&v| colors[v as usize] as usize == target)
            .collect_vec();
        let mut explored: Vec<Node> = Vec::with_capacity(cell.len());

        for &v in &cell {
            if explored.iter().any(|&u| self.are_twins(u, v)) {
                continue;
            }
            explored.push(v);

            let split = colors
                .iter()
                .enumerate()
                .map(|(u, &c)| 2 * c + (c as usize == target && u != v as usize) as u32)
                .collect_vec();
            self.individualize(refine(self.model, split));
        }
    }

    fn are_twins(&self, u: Node, v: Node) -> bool {
        self.model.neighbors_of(u).without(v) == self.model.neighbors_of(v).without(u)
    }

    fn leaf(&self, order: &[Node]) -> CanonicalForm {
        let mut position = vec![0 as Node; order.len()];
        for (i, &v) in order.iter().enumerate() {
            position[v as usize] = i as Node;
        }

        let rows = order
            .iter()
            .map(|&v| {
                self.model
                    .neighbors_of(v)
                    .iter()
                    .fold(0u64, |row, u| row | (1u64 << position[u as usize]))
            })
            .collect();

        CanonicalForm {
            order: order.to_vec(),
            classes: order.iter().map(|&v| self.classes[v as usize]).collect(),
            rows,
        }
    }
}

/// Refines `colors` until the coloring is equitable.
/// Colors of the result are `0..k` and ordered consistently with the input colors.
fn refine(model: &AdjacencyModel, mut colors: Vec<u32>) -> Vec<u32> {
    let mut num_colors = renumber(&mut colors);

    loop {
        let signatures = model
            .vertices()
            .iter()
            .map(|v| {
                let neighbor_colors = model
                    .neighbors_of(v)
                    .iter()
                    .map(|u| colors[u as usize])
                    .sorted_unstable()
                    .collect_vec();
                (colors[v as usize], neighbor_colors)
            })
            .collect_vec();

        let distinct = signatures.iter().sorted().dedup().collect_vec();
        if distinct.len() == num_colors {
            return colors;
        }

        colors = signatures
            .iter()
            .map(|sig| distinct.binary_search(&sig).unwrap_or(0) as u32)
            .collect();
        num_colors = distinct.len();
    }
}

/// Maps colors onto `0..k` preserving their order and returns `k`
fn renumber(colors: &mut [u32]) -> usize {
    let distinct = colors.iter().copied().sorted_unstable().dedup().collect_vec();
    for c in colors.iter_mut() {
        *c = distinct.binary_search(c).unwrap_or(0) as u32;
    }
    distinct.len()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, seq::SliceRandom};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens, testing::random_models};

    /// Relabels `model` with `perm[v]` as the new name of `v`
    fn permute(model: &AdjacencyModel, perm: &[Node]) -> AdjacencyModel {
        let graph = AdjArray::from_edges(
            model.number_of_nodes(),
            model
                .to_graph()
                .ordered_edges(true)
                .into_iter()
                .map(|Edge(u, v)| Edge(perm[u as usize], perm[v as usize])),
        );
        AdjacencyModel::new(&graph).unwrap()
    }

    fn map_subset(subset: VertexSubset, perm: &[Node]) -> VertexSubset {
        subset.iter().map(|v| perm[v as usize]).collect()
    }

    #[test]
    fn invariant_under_relabelling() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0xca707);
        for model in random_models(rng, 40, 2..12) {
            let n = model.number_of_nodes();
            let looped = model.vertices().iter().filter(|v| v % 3 == 0).collect();
            let unlooped = model.vertices().iter().filter(|v| v % 3 == 1).collect();

            let mut perm = (0..n).collect_vec();
            perm.shuffle(rng);
            let other = permute(&model, &perm);

            let a = CanonicalForm::new(&model, looped, unlooped);
            let b = CanonicalForm::new(
                &other,
                map_subset(looped, &perm),
                map_subset(unlooped, &perm),
            );

            assert_eq!(a.signature(), b.signature());
            assert_eq!(a.graph().ordered_edges(true), b.graph().ordered_edges(true));
        }
    }

    #[test]
    fn distinguishes_labelings() {
        let model = AdjacencyModel::new(&gens::path(3)).unwrap();
        let at = |vs: &[Node]| vs.iter().copied().collect::<VertexSubset>();

        let end = CanonicalForm::new(&model, at(&[0]), VertexSubset::EMPTY).signature();
        let other_end = CanonicalForm::new(&model, at(&[2]), VertexSubset::EMPTY).signature();
        let center = CanonicalForm::new(&model, at(&[1]), VertexSubset::EMPTY).signature();
        let unlooped = CanonicalForm::new(&model, VertexSubset::EMPTY, at(&[0])).signature();

        assert_eq!(end, other_end);
        assert_ne!(end, center);
        assert_ne!(end, unlooped);
        assert_eq!(end.len(), 64);
    }

    #[test]
    fn symmetric_graphs() {
        for graph in [gens::complete(7), gens::petersen(), gens::cycle(9)] {
            let model = AdjacencyModel::new(&graph).unwrap();
            let form = CanonicalForm::new(&model, VertexSubset::EMPTY, VertexSubset::EMPTY);

            assert_eq!(
                form.order().iter().copied().sorted().collect_vec(),
                model.vertices().iter().collect_vec()
            );
            assert_eq!(form.graph().number_of_edges(), model.number_of_edges());
            assert_eq!(
                form.graph().degrees().sorted().collect_vec(),
                model.to_graph().degrees().sorted().collect_vec()
            );
        }
    }
}
