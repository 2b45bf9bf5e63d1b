/*!
# Batch Evaluation

[`BatchEvaluator`] computes `Z`, `Zq` for a range of `q` and optionally `Zqhat` for many
independent graphs in parallel. Each graph is validated on its own; an invalid graph yields an
error in its slot without affecting the others.

```
use zqforce::{batch::BatchEvaluator, gens};

let graphs = vec![gens::path(4), gens::cycle(5), gens::complete(4)];
let reports = BatchEvaluator::new().max_q(1).evaluate(&graphs);

let zq: Vec<_> = reports.iter().map(|r| r.as_ref().unwrap().zq.clone()).collect();
assert_eq!(zq, vec![vec![1, 1], vec![2, 2], vec![3, 3]]);
```
*/

use log::info;
use rayon::prelude::*;

use crate::{forcing::*, prelude::*};

/// Builder for evaluating invariants of many graphs
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchEvaluator {
    max_q: NumNodes,
    zqhat: bool,
    parallel: bool,
}

/// Invariants computed for a single graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphReport {
    pub nodes: NumNodes,
    pub edges: NumEdges,
    /// `Z(G)`
    pub zero_forcing: NumNodes,
    /// `Zq(G)` for `q = 0..=max_q`
    pub zq: Vec<NumNodes>,
    /// `Zqhat(G)` for `q = 0..=max_q`, if requested
    pub zqhat: Option<Vec<NumNodes>>,
}

impl BatchEvaluator {
    /// Creates an evaluator computing only `Z` and `Zq` with `q = 0` that processes
    /// graphs in parallel
    pub fn new() -> Self {
        Self {
            parallel: true,
            ..Default::default()
        }
    }

    /// Updates the largest `q` to evaluate
    pub fn max_q(mut self, max_q: NumNodes) -> Self {
        self.max_q = max_q;
        self
    }

    /// If *true*, `Zqhat` is computed as well
    pub fn zqhat(mut self, zqhat: bool) -> Self {
        self.zqhat = zqhat;
        self
    }

    /// If *true*, graphs are distributed over the `rayon` thread pool
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Evaluates all graphs and returns one report per graph in input order
    pub fn evaluate<G>(&self, graphs: &[G]) -> Vec<Result<GraphReport>>
    where
        G: AdjacencyList + Sync,
    {
        info!("Evaluating {} graphs", graphs.len());
        if self.parallel {
            graphs.par_iter().map(|g| self.evaluate_one(g)).collect()
        } else {
            graphs.iter().map(|g| self.evaluate_one(g)).collect()
        }
    }

    /// Evaluates a single graph
    pub fn evaluate_one<G: AdjacencyList>(&self, graph: &G) -> Result<GraphReport> {
        let model = AdjacencyModel::new(graph)?;
        let qs = 0..=self.max_q;

        Ok(GraphReport {
            nodes: model.number_of_nodes(),
            edges: model.number_of_edges(),
            zero_forcing: zero_forcing_number(&model),
            zq: qs.clone().map(|q| Zq::new(q).solve(&model).value).collect(),
            zqhat: self
                .zqhat
                .then(|| qs.map(|q| Zqhat::new(q).solve(&model).value).collect()),
        })
    }
}
