/*!
# Inertia Lower Bound

The inertia set of a graph `G` contains all pairs `(p, r)` such that some symmetric matrix
with graph `G` has `p` positive and `r` negative eigenvalues. Each `Zq(G)` rules out the pairs
`(x, q)` and `(q, x)` with `x = n - q - Zq(G) - 1`, and by the southwest lemma everything
below and to the left of an excluded pair is excluded as well.

[`zq_inertia_lower_bound`] collects these pairs for `q = 0..=n/2` and closes them into a
staircase.

```
use zqforce::{gens, inertia::zq_inertia_lower_bound};

let excluded = zq_inertia_lower_bound(&gens::path(3)).unwrap();
assert_eq!(excluded.pairs().collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
```
*/

use std::{collections::BTreeSet, fmt::Display};

use itertools::Itertools;
use log::debug;

use crate::{forcing::*, prelude::*};

/// Set of `(positive, negative)` pairs excluded from the inertia set
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InertiaExclusion {
    pairs: BTreeSet<(NumNodes, NumNodes)>,
}

impl InertiaExclusion {
    /// Computes the excluded pairs of a validated graph
    pub fn from_model(model: &AdjacencyModel) -> Self {
        let n = model.number_of_nodes() as i64;
        let z = zero_forcing_number(model);

        let mut pairs = BTreeSet::new();
        let mut saturated = false;
        for q in 0..=(n / 2) {
            let zq = if saturated {
                z
            } else {
                Zq::new(q as NumNodes).solve(model).value
            };
            saturated = zq == z;

            let x = n - q - zq as i64 - 1;
            debug!("Inertia: q = {q}, Zq = {zq}, x = {x}");

            if x < q {
                break;
            }
            pairs.insert((x as NumNodes, q as NumNodes));
            pairs.insert((q as NumNodes, x as NumNodes));
            if x == q {
                break;
            }
        }

        let mut exclusion = Self { pairs };
        exclusion.close_staircase();
        exclusion
    }

    /// Creates an exclusion set from arbitrary pairs and closes it into a staircase
    pub fn from_pairs(pairs: impl IntoIterator<Item = (NumNodes, NumNodes)>) -> Self {
        let mut exclusion = Self {
            pairs: pairs.into_iter().collect(),
        };
        exclusion.close_staircase();
        exclusion
    }

    /// Walking the points in decreasing order, fills the gaps on the rows between
    /// two consecutive points (and symmetrically on the columns)
    fn close_staircase(&mut self) {
        let points = self.pairs.iter().rev().copied().collect_vec();
        let Some((&first, rest)) = points.split_first() else {
            return;
        };

        let mut current = first;
        for &point in rest {
            if point.0 + 1 < current.0 {
                for i in (point.0 + 1)..current.0 {
                    self.pairs.insert((i, current.1));
                    self.pairs.insert((current.1, i));
                }
            }
            current = point;
        }
    }

    /// Returns *true* if `(positive, negative)` is excluded
    pub fn contains(&self, positive: NumNodes, negative: NumNodes) -> bool {
        self.pairs.contains(&(positive, negative))
    }

    /// Iterates over the excluded pairs in increasing order
    pub fn pairs(&self) -> impl Iterator<Item = (NumNodes, NumNodes)> + '_ {
        self.pairs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Display for InertiaExclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.pairs.iter().map(|(p, r)| format!("({p}, {r})")).join(", ")
        )
    }
}

/// Computes the pairs excluded from the inertia set of `graph` by the `Zq` bounds
///
/// # Errors
/// Returns [`InvalidGraph`] if `graph` is not connected or has fewer than two vertices.
pub fn zq_inertia_lower_bound<G: AdjacencyList>(graph: &G) -> Result<InertiaExclusion> {
    let model = AdjacencyModel::new(graph)?;
    Ok(InertiaExclusion::from_model(&model))
}
