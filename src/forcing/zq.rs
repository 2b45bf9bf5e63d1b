use fxhash::FxHashMap;
use log::{debug, trace};
use rayon::prelude::*;
use smallvec::SmallVec;

use super::*;

/// Computes `Zq(G)`, the value of the following game between a forcing player and an
/// adversary. Starting from the closure of the empty set, the player repeatedly either
/// - *spends* one unit to color an arbitrary vertex, or
/// - hands a menu of `q + 1` components of the uncolored region to the adversary, who returns
///   a non-empty selection of them, in which forcing is performed first before forcing
///   continues in the whole graph.
///
/// The player minimizes, the adversary maximizes the total amount spent until every vertex is
/// colored. Costs are computed for all closed subsets by decreasing cardinality.
///
/// `Zq(G, 0)` equals the positive semidefinite zero forcing number `Z+(G)`, `Zq` is
/// non-decreasing in `q`, and for `q >= n` it equals the ordinary zero forcing number `Z(G)`.
///
/// # Example
/// ```
/// use zqforce::{forcing::*, gens};
///
/// let model = AdjacencyModel::new(&gens::path(5)).unwrap();
/// let outcome = Zq::new(0).trace(true).solve(&model);
///
/// assert_eq!(outcome.value, 1);
/// assert_eq!(trail_cost(&outcome.trail.unwrap()), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Zq {
    q: NumNodes,
    rule: PushRule,
    trace: bool,
    parallel: bool,
}

/// Value of a [`Zq`] computation and, if requested, an optimal trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZqOutcome {
    pub value: NumNodes,
    pub trail: Option<Vec<Step>>,
}

type CostTable = FxHashMap<VertexSubset, NumNodes>;

impl Zq {
    /// Creates a new solver for the given `q`, using the plain push rule
    pub fn new(q: NumNodes) -> Self {
        Self {
            q,
            ..Default::default()
        }
    }

    /// Updates the push rule
    pub fn rule(mut self, rule: PushRule) -> Self {
        self.rule = rule;
        self
    }

    /// If *true*, the winning moves are recorded and an optimal trail is returned
    pub fn trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// If *true*, the subsets of each cardinality are evaluated in parallel
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Runs the dynamic program on `model`
    pub fn solve(&self, model: &AdjacencyModel) -> ZqOutcome {
        let n = model.number_of_nodes();
        let all = model.vertices();
        debug_assert!(self.rule.looped_vertices().is_subset_of(all));
        debug_assert!(self.rule.unlooped_vertices().is_subset_of(all));

        let mut costs = CostTable::default();
        let mut moves = FxHashMap::default();
        costs.insert(all, 0);

        for size in (0..n).rev() {
            let level = SubsetsOfSize::new(n, size)
                .filter(|&z| !self.rule.can_push(model, z))
                .collect_vec();

            let evaluated: Vec<(VertexSubset, NumNodes, Move)> = if self.parallel {
                level
                    .par_iter()
                    .map(|&z| self.evaluate(model, &costs, z))
                    .collect()
            } else {
                level
                    .iter()
                    .map(|&z| self.evaluate(model, &costs, z))
                    .collect()
            };

            trace!("Zq(q={}) level {size}: {} closed subsets", self.q, level.len());

            for (z, cost, play) in evaluated {
                costs.insert(z, cost);
                if self.trace {
                    moves.insert(z, play);
                }
            }
        }

        let start = self.rule.close_all(model, VertexSubset::EMPTY);
        let value = lookup(&costs, start, n);
        debug!(
            "Zq(q={}) = {value} with {} closed subsets",
            self.q,
            costs.len()
        );

        let trail = self.trace.then(|| {
            let mut trail = Vec::new();
            let mut current = start;
            while current != all {
                let Some(play) = moves.get(&current) else {
                    break;
                };
                let next = play.closure();
                trail.push(Step {
                    from: current,
                    play: play.clone(),
                });
                current = next;
            }
            debug_assert_eq!(trail_cost(&trail), value);
            trail
        });

        ZqOutcome { value, trail }
    }

    /// Computes the cost of the closed set `z` from the costs of all larger closed sets
    fn evaluate(
        &self,
        model: &AdjacencyModel,
        costs: &CostTable,
        z: VertexSubset,
    ) -> (VertexSubset, NumNodes, Move) {
        let n = model.number_of_nodes();
        let all = model.vertices();

        // spending a vertex is always possible as z != V
        let mut spend: Option<(NumNodes, Move)> = None;
        for v in all - z {
            let closure = self.rule.close_all(model, z.with(v));
            let cost = 1 + lookup(costs, closure, n);
            if spend.as_ref().is_none_or(|(best, _)| cost < *best) {
                spend = Some((cost, Move::Spend { vertex: v, closure }));
            }
        }

        let free = components(model, all - z);
        let mut hand: Option<(NumNodes, Move)> = None;
        for menu in free.iter().copied().combinations(self.q as usize + 1) {
            let mut worst: Option<(NumNodes, VertexSubset, VertexSubset)> = None;
            for choice in menu.iter().copied().powerset().skip(1) {
                let choice = choice.into_iter().fold(VertexSubset::EMPTY, |a, c| a | c);
                let inner = self.rule.close(model, z | choice, z).closure;
                let closure = self.rule.close_all(model, inner);

                let cost = if closure == z {
                    n
                } else {
                    lookup(costs, closure, n)
                };
                if worst.is_none_or(|(w, _, _)| cost > w) {
                    worst = Some((cost, choice, closure));
                }
            }

            let Some((cost, choice, closure)) = worst else {
                continue;
            };
            if hand.as_ref().is_none_or(|(best, _)| cost < *best) {
                hand = Some((
                    cost,
                    Move::Hand {
                        menu: SmallVec::from_vec(menu),
                        choice,
                        closure,
                    },
                ));
            }
        }

        match (spend, hand) {
            (Some(spend), Some(hand)) if hand.0 < spend.0 => (z, hand.0, hand.1),
            (Some(spend), _) => (z, spend.0, spend.1),
            (None, Some(hand)) => (z, hand.0, hand.1),
            (None, None) => (
                z,
                n,
                Move::Spend {
                    vertex: INVALID_NODE,
                    closure: all,
                },
            ),
        }
    }
}

/// Cost of a closed set; sets that were never evaluated count as the sentinel `n`
fn lookup(costs: &CostTable, closure: VertexSubset, n: NumNodes) -> NumNodes {
    let cost = costs.get(&closure).copied();
    debug_assert!(cost.is_some(), "closure {closure:?} was not evaluated");
    cost.unwrap_or(n)
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{
        gens,
        testing::{psd_zero_forcing_number, random_models},
    };

    fn zq(model: &AdjacencyModel, q: NumNodes) -> NumNodes {
        Zq::new(q).solve(model).value
    }

    #[test]
    fn named_graphs() {
        let path = AdjacencyModel::new(&gens::path(5)).unwrap();
        assert_eq!(zq(&path, 0), 1);
        assert_eq!(zq(&path, 5), 1);

        let complete = AdjacencyModel::new(&gens::complete(5)).unwrap();
        for q in 0..6 {
            assert_eq!(zq(&complete, q), 4);
        }

        let cycle = AdjacencyModel::new(&gens::cycle(6)).unwrap();
        assert_eq!(zq(&cycle, 0), 2);
        assert_eq!(zq(&cycle, 6), 2);

        // Z+(tree) = 1 while Z(star) = leaves - 1; already for q = 1 the adversary
        // may return two leaves at once, which the center cannot force
        let star = AdjacencyModel::new(&gens::star(5)).unwrap();
        assert_eq!(zq(&star, 0), 1);
        assert_eq!(zq(&star, 1), 4);
        assert_eq!(zq(&star, 6), 4);
    }

    #[test]
    fn q_zero_is_psd_forcing() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x5eed);
        for model in random_models(rng, 25, 2..9) {
            assert_eq!(zq(&model, 0), psd_zero_forcing_number(&model));
        }
    }

    #[test]
    fn monotone_in_q_and_bounded_by_z() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0xabc);
        for model in random_models(rng, 25, 2..9) {
            let n = model.number_of_nodes();
            let z = zero_forcing_number(&model);

            let values = (0..=n).map(|q| zq(&model, q)).collect_vec();
            assert!(values.iter().tuple_windows().all(|(a, b)| a <= b), "{values:?}");
            assert!(values.iter().all(|&v| v <= z));
            assert_eq!(values[n as usize], z);
        }
    }

    #[test]
    fn parallel_agrees_with_sequential() {
        let rng = &mut Pcg64Mcg::seed_from_u64(99);
        for model in random_models(rng, 10, 4..10) {
            for q in 0..3 {
                assert_eq!(
                    Zq::new(q).parallel(true).solve(&model),
                    Zq::new(q).solve(&model)
                );
            }
        }
    }

    /// Checks that a traced trail is a chain of strictly growing closed sets from the closure
    /// of the empty set to `V` whose cost is the value of the game
    fn assert_valid_trail(
        model: &AdjacencyModel,
        rule: PushRule,
        q: NumNodes,
        outcome: ZqOutcome,
    ) {
        let trail = outcome.trail.unwrap();
        assert_eq!(trail_cost(&trail), outcome.value);

        let start = rule.close_all(model, VertexSubset::EMPTY);
        if start == model.vertices() {
            assert!(trail.is_empty());
            return;
        }

        assert_eq!(trail[0].from, start);
        assert_eq!(trail.last().unwrap().play.closure(), model.vertices());
        for (a, b) in trail.iter().tuple_windows() {
            assert_eq!(a.play.closure(), b.from);
            assert!(a.from.is_subset_of(b.from) && a.from != b.from);
        }
        for step in &trail {
            assert!(!rule.can_push(model, step.from));
            if let Move::Hand { menu, choice, .. } = &step.play {
                assert_eq!(menu.len(), q as usize + 1);
                assert!(choice.is_subset_of(model.vertices() - step.from));
            }
        }
    }

    #[test]
    fn trail_reaches_all_vertices() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);
        for model in random_models(rng, 20, 2..9) {
            for q in 0..3 {
                let outcome = Zq::new(q).trace(true).solve(&model);
                assert_valid_trail(&model, PushRule::Plain, q, outcome);
            }
        }
    }

    #[test]
    fn looped_trail_reaches_all_vertices() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x1009);
        for model in random_models(rng, 20, 2..9) {
            let all = model.vertices();
            let looped = VertexSubset::from_bits(rng.random::<u64>()) & all;
            let unlooped = (all - looped) - VertexSubset::from_bits(rng.random::<u64>());
            let rule = PushRule::looped(looped, unlooped);

            for q in 0..3 {
                let outcome = Zq::new(q).rule(rule).trace(true).solve(&model);
                assert_eq!(outcome.value, Zq::new(q).rule(rule).solve(&model).value);
                assert_valid_trail(&model, rule, q, outcome);
            }
        }
    }

    #[test]
    fn looped_rule_exact_values() {
        let at = |vs: &[Node]| vs.iter().copied().collect::<VertexSubset>();

        // unlooped leaves force the center; handing one leaf back finishes for free
        let path = AdjacencyModel::new(&gens::path(3)).unwrap();
        let unlooped = PushRule::looped(VertexSubset::EMPTY, path.vertices());
        let outcome = Zq::new(0).rule(unlooped).trace(true).solve(&path);
        assert_eq!(outcome.value, 0);
        let trail = outcome.trail.unwrap();
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].from, at(&[1]));
        assert!(!trail[0].play.is_spend());
        assert_eq!(trail[0].play.closure(), path.vertices());

        // returning both leaves at once leaves the center with two white neighbors
        assert_eq!(Zq::new(1).rule(unlooped).solve(&path).value, 1);

        // nothing forces from the empty set, but every single vertex closes the path
        let mixed = PushRule::looped(at(&[0]), at(&[1]));
        assert_eq!(mixed.close_all(&path, VertexSubset::EMPTY), VertexSubset::EMPTY);
        assert_eq!(Zq::new(0).rule(mixed).solve(&path).value, 1);
        assert_eq!(Zq::new(3).rule(mixed).solve(&path).value, 1);

        let edge = AdjacencyModel::new(&gens::path(2)).unwrap();
        let looped = PushRule::looped(edge.vertices(), VertexSubset::EMPTY);
        assert_eq!(Zq::new(0).rule(looped).solve(&edge).value, 1);

        let unlooped = PushRule::looped(VertexSubset::EMPTY, edge.vertices());
        let outcome = Zq::new(0).rule(unlooped).trace(true).solve(&edge);
        assert_eq!(outcome.value, 0);
        assert_eq!(outcome.trail, Some(Vec::new()));
    }

    #[test]
    fn looped_rule_lowers_zq() {
        let model = AdjacencyModel::new(&gens::star(4)).unwrap();
        let all = model.vertices();

        let plain = zq(&model, 1);
        let looped = Zq::new(1)
            .rule(PushRule::looped(all, VertexSubset::EMPTY))
            .solve(&model)
            .value;
        let unlooped = Zq::new(1)
            .rule(PushRule::looped(VertexSubset::EMPTY, all))
            .solve(&model)
            .value;

        assert!(looped <= plain);
        assert!(unlooped <= plain);
    }
}
