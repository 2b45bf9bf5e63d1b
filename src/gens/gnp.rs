use rand::Rng;

use super::*;

/// `G(n,p)` graphs generate every possible edge in a graph with `n` nodes with probability `p`
/// independent from each other.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: f64,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `n`
    pub fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "Invalid probability {prob}");
        self.p = prob;
        self
    }

    /// Generates the list of normalized random edges
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Edge> {
        let mut edges = Vec::new();
        for u in 0..self.n {
            for v in (u + 1)..self.n {
                if rng.random_bool(self.p) {
                    edges.push(Edge(u, v));
                }
            }
        }
        edges
    }

    /// Generates a random **connected** graph by rejection sampling.
    ///
    /// ** Panics if `n == 0` or `p == 0` while `n > 1` **
    pub fn generate_connected<G, R>(&self, rng: &mut R) -> G
    where
        G: GraphFromScratch + AdjacencyList,
        R: Rng,
    {
        assert!(self.n > 0, "At least one node must be generated!");
        assert!(self.n == 1 || self.p > 0.0, "Cannot sample connected graphs with p = 0");
        loop {
            let graph = G::from_edges(self.n, self.generate(rng));
            if graph.is_connected() {
                return graph;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        assert!(Gnp::new().nodes(10).prob(0.0).generate(rng).is_empty());
        assert_eq!(Gnp::new().nodes(10).prob(1.0).generate(rng).len(), 45);
    }

    #[test]
    fn connected_sampling() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        for n in 1..10 {
            let graph: AdjArray = Gnp::new().nodes(n).prob(0.4).generate_connected(rng);
            assert_eq!(graph.number_of_nodes(), n);
            assert!(graph.is_connected());
            assert!(graph.edges(false).all(|e| !e.is_loop()));
        }
    }
}
