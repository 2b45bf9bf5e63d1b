//! Random instances and slow reference implementations used by the tests of this crate

use std::ops::Range;

use rand::Rng;

use crate::{forcing::*, gens::Gnp, prelude::*};

/// Samples `count` random connected graphs whose number of nodes is drawn from `nodes`
pub fn random_models<R: Rng>(
    rng: &mut R,
    count: usize,
    nodes: Range<NumNodes>,
) -> Vec<AdjacencyModel> {
    (0..count)
        .map(|_| {
            let n = rng.random_range(nodes.clone());
            let p = rng.random_range(0.25..0.75);
            let graph: AdjArray = Gnp::new().nodes(n).prob(p).generate_connected(rng);
            AdjacencyModel::new(&graph).unwrap()
        })
        .collect()
}

/// Closes `filled` under the positive semidefinite color change rule: a filled vertex forces
/// its only white neighbor within a component of the white region
pub fn psd_closure(model: &AdjacencyModel, mut filled: VertexSubset) -> VertexSubset {
    let all = model.vertices();
    loop {
        let mut next = filled;
        for white in components(model, all - filled) {
            for u in filled {
                if let Some(w) = (model.neighbors_of(u) & white).single() {
                    next = next.with(w);
                }
            }
        }

        if next == filled {
            return filled;
        }
        filled = next;
    }
}

/// Computes `Z+(G)` by trying all subsets by increasing size
pub fn psd_zero_forcing_number(model: &AdjacencyModel) -> NumNodes {
    let n = model.number_of_nodes();
    (0..=n)
        .find(|&k| SubsetsOfSize::new(n, k).any(|z| psd_closure(model, z) == model.vertices()))
        .unwrap()
}

/// Computes `Zqhat(G)` by evaluating every complete labeling
pub fn max_zq_over_labelings(model: &AdjacencyModel, q: NumNodes) -> NumNodes {
    let all = model.vertices();
    (0..(1u64 << model.number_of_nodes()))
        .map(|bits| {
            let looped = VertexSubset::from_bits(bits);
            Zq::new(q)
                .rule(PushRule::looped(looped, all - looped))
                .solve(model)
                .value
        })
        .max()
        .unwrap()
}
