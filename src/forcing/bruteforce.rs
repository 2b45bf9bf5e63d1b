use log::debug;

use super::*;

/// All minimum zero forcing sets of a graph, found by exhaustive search.
///
/// Since every vertex outside of a zero forcing set needs to be forced by a neighbor, a set of
/// size less than the minimum degree can never force the whole graph; the search therefore
/// starts at sets of size `δ(G)` and stops at the first size for which a forcing set exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroForcingSets {
    /// The zero forcing number `Z(G)`
    pub number: NumNodes,
    /// All zero forcing sets of size `Z(G)` in increasing order of their bit pattern
    pub sets: Vec<VertexSubset>,
}

impl ZeroForcingSets {
    /// Finds `Z(G)` and all minimum zero forcing sets of `model`
    pub fn compute(model: &AdjacencyModel) -> Self {
        let n = model.number_of_nodes();
        let all = model.vertices();

        for size in model.min_degree()..=n {
            let sets = SubsetsOfSize::new(n, size)
                .filter(|&z| PushRule::Plain.close_all(model, z) == all)
                .collect_vec();

            if !sets.is_empty() {
                debug!("Z(G) = {size} with {} minimum forcing sets", sets.len());
                return Self { number: size, sets };
            }
        }

        // the whole vertex set is always forcing
        Self {
            number: n,
            sets: vec![all],
        }
    }

    /// Returns one minimum zero forcing set
    pub fn witness(&self) -> VertexSubset {
        self.sets[0]
    }
}

/// Returns the zero forcing number `Z(G)`
pub fn zero_forcing_number(model: &AdjacencyModel) -> NumNodes {
    ZeroForcingSets::compute(model).number
}

/// Returns the positive semidefinite zero forcing number `Z+(G)`, i.e. `Zq(G)` with `q = 0`
pub fn zplus(model: &AdjacencyModel) -> NumNodes {
    Zq::new(0).solve(model).value
}
