/*!
# Minimum Rank Bounds

Collects simple combinatorial bounds on the minimum rank `mr(G)` over all real symmetric
matrices whose off-diagonal nonzero pattern is given by `G`. Each bound is recorded with the
name of the rule that produced it.

| Name                  | Kind  | Value                               |
|-----------------------|-------|-------------------------------------|
| `order`               | upper | `n - 1`                             |
| `zero forcing`        | lower | `n - Z(G)`                          |
| `zero forcing (tree)` | upper | `n - Z(G)`, if `G` is a tree        |
| `not path`            | upper | `n - 2`, if `G` is not a path       |
| `diameter`            | lower | `diam(G)`                           |
*/

use log::debug;

use crate::{algo::*, forcing::*, prelude::*};

/// A single bound on the minimum rank together with the rule that produced it
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bound {
    pub name: &'static str,
    pub value: NumNodes,
}

/// All lower and upper bounds on `mr(G)` known for a graph
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MinRankBounds {
    lower: Vec<Bound>,
    upper: Vec<Bound>,
}

impl MinRankBounds {
    /// Computes all bounds for `model`
    ///
    /// # Errors
    /// Returns [`ZqError::InconsistentBounds`] if the best lower bound exceeds the best upper
    /// bound.
    pub fn from_model(model: &AdjacencyModel) -> Result<Self> {
        let n = model.number_of_nodes();
        let graph = model.to_graph();
        let z = zero_forcing_number(model);

        let mut bounds = Self::default();
        bounds.add_upper("order", n - 1);
        bounds.add_lower("zero forcing", n - z);

        if graph.is_tree() {
            bounds.add_upper("zero forcing (tree)", n - z);
        }

        if let Some(diameter) = graph.diameter() {
            if diameter + 1 < n {
                bounds.add_upper("not path", n - 2);
            }
            bounds.add_lower("diameter", diameter);
        }

        bounds.check()?;
        debug!(
            "Minimum rank bounds: {} <= mr(G) <= {}",
            bounds.lower_bound(),
            bounds.upper_bound()
        );
        Ok(bounds)
    }

    pub fn add_lower(&mut self, name: &'static str, value: NumNodes) {
        self.lower.push(Bound { name, value });
    }

    pub fn add_upper(&mut self, name: &'static str, value: NumNodes) {
        self.upper.push(Bound { name, value });
    }

    /// Returns an error if the best lower bound exceeds the best upper bound
    pub fn check(&self) -> Result<()> {
        let (lower, upper) = (self.lower_bound(), self.upper_bound());
        if lower > upper {
            Err(ZqError::InconsistentBounds { lower, upper })
        } else {
            Ok(())
        }
    }

    /// Returns the largest lower bound (`0` if none is known)
    pub fn lower_bound(&self) -> NumNodes {
        self.lower.iter().map(|b| b.value).max().unwrap_or(0)
    }

    /// Returns the smallest upper bound (`NumNodes::MAX` if none is known)
    pub fn upper_bound(&self) -> NumNodes {
        self.upper
            .iter()
            .map(|b| b.value)
            .min()
            .unwrap_or(NumNodes::MAX)
    }

    pub fn lower(&self) -> &[Bound] {
        &self.lower
    }

    pub fn upper(&self) -> &[Bound] {
        &self.upper
    }

    /// Returns *true* if the lower and upper bounds coincide
    pub fn is_tight(&self) -> bool {
        self.lower_bound() == self.upper_bound()
    }
}
