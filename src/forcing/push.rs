use super::*;

/// The color-change rule that drives all forcing processes.
///
/// Let `white(v) = (N(v) ∩ active) \ filled`. Within the active subgraph the following forces are
/// applied until no more apply:
/// 1. a filled vertex `v` with `|white(v)| == 1` forces its white neighbor,
/// 2. *(looped rule)* an **unlooped** vertex `v`, filled or not, with `|white(v)| == 1` forces its
///    white neighbor,
/// 3. *(looped rule)* a **looped** non-filled vertex `v` with `white(v) = ∅` forces itself.
///
/// Vertices that are neither looped nor unlooped (*unmarked*) only follow the first rule.
/// All rules are monotone, so the closure does not depend on the order in which vertices are
/// scanned.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PushRule {
    /// Ordinary zero forcing
    #[default]
    Plain,
    /// Zero forcing with loop labels: `looped` and `unlooped` must be disjoint
    Looped {
        looped: VertexSubset,
        unlooped: VertexSubset,
    },
}

/// The result of closing a set under a [`PushRule`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Closure {
    /// *true* if at least one vertex was forced
    pub pushed: bool,
    /// The closed set (always a subset of the active vertices)
    pub closure: VertexSubset,
}

impl PushRule {
    /// Creates a looped rule
    pub fn looped(looped: VertexSubset, unlooped: VertexSubset) -> Self {
        debug_assert!(looped.is_disjoint(unlooped));
        Self::Looped { looped, unlooped }
    }

    /// Returns the set of looped vertices
    pub fn looped_vertices(&self) -> VertexSubset {
        match *self {
            Self::Plain => VertexSubset::EMPTY,
            Self::Looped { looped, .. } => looped,
        }
    }

    /// Returns the set of unlooped vertices
    pub fn unlooped_vertices(&self) -> VertexSubset {
        match *self {
            Self::Plain => VertexSubset::EMPTY,
            Self::Looped { unlooped, .. } => unlooped,
        }
    }

    /// Returns the vertex forced by `v`, if any, given the current coloring
    #[inline]
    fn force_of(
        &self,
        model: &AdjacencyModel,
        active: VertexSubset,
        filled: VertexSubset,
        v: Node,
    ) -> Option<Node> {
        let white = (model.neighbors_of(v) & active) - filled;
        let is_filled = filled.contains(v);

        if let Some(w) = white.single() {
            if is_filled || self.unlooped_vertices().contains(v) {
                return Some(w);
            }
        } else if white.is_empty() && !is_filled && self.looped_vertices().contains(v) {
            return Some(v);
        }

        None
    }

    /// Closes `filled` under the rule within the subgraph induced by `active`.
    /// Filled vertices outside of `active` are ignored.
    pub fn close(
        &self,
        model: &AdjacencyModel,
        active: VertexSubset,
        filled: VertexSubset,
    ) -> Closure {
        let start = filled & active;
        let mut filled = start;

        loop {
            let mut changed = false;
            for v in active {
                if let Some(w) = self.force_of(model, active, filled, v) {
                    filled = filled.with(w);
                    changed = true;
                }
            }

            if !changed {
                break;
            }
        }

        Closure {
            pushed: filled != start,
            closure: filled,
        }
    }

    /// Closes `filled` under the rule in the whole graph
    pub fn close_all(&self, model: &AdjacencyModel, filled: VertexSubset) -> VertexSubset {
        self.close(model, model.vertices(), filled).closure
    }

    /// Returns *true* if at least one force applies to `filled` in the whole graph.
    /// Equivalent to `self.close(model, model.vertices(), filled).pushed` but stops at the first
    /// applicable force.
    pub fn can_push(&self, model: &AdjacencyModel, filled: VertexSubset) -> bool {
        let active = model.vertices();
        active
            .iter()
            .any(|v| self.force_of(model, active, filled, v).is_some())
    }
}

/// Closes `filled` under the plain zero forcing rule within the subgraph induced by `active`
pub fn push(model: &AdjacencyModel, active: VertexSubset, filled: VertexSubset) -> Closure {
    PushRule::Plain.close(model, active, filled)
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens, testing::random_models};

    fn set(vs: &[Node]) -> VertexSubset {
        vs.iter().copied().collect()
    }

    #[test]
    fn plain_push_on_path() {
        let model = AdjacencyModel::new(&gens::path(5)).unwrap();
        let all = model.vertices();

        assert_eq!(
            push(&model, all, set(&[0])),
            Closure {
                pushed: true,
                closure: all
            }
        );

        // an inner vertex has two white neighbors
        assert_eq!(
            push(&model, all, set(&[2])),
            Closure {
                pushed: false,
                closure: set(&[2])
            }
        );

        // restricted to {2, 3, 4}, the vertex 2 is an endpoint
        assert_eq!(push(&model, set(&[2, 3, 4]), set(&[2])).closure, set(&[2, 3, 4]));

        // filled vertices outside of the active subgraph are dropped
        assert_eq!(push(&model, set(&[3, 4]), set(&[0, 4])).closure, set(&[3, 4]));
    }

    #[test]
    fn plain_push_on_star() {
        let model = AdjacencyModel::new(&gens::star(4)).unwrap();
        let all = model.vertices();

        assert!(!push(&model, all, set(&[0])).pushed);
        assert!(!PushRule::Plain.can_push(&model, set(&[0])));
        assert_eq!(push(&model, all, set(&[0, 1, 2])).closure, set(&[0, 1, 2]));
        assert!(!push(&model, all, set(&[0, 1, 2])).pushed);
        assert_eq!(push(&model, all, set(&[0, 1, 2, 3])).closure, all);
        assert_eq!(push(&model, all, set(&[1])).closure, set(&[0, 1]));
    }

    #[test]
    fn looped_rules() {
        let model = AdjacencyModel::new(&gens::path(2)).unwrap();
        let all = model.vertices();

        // unlooped vertices force without being filled
        let unlooped = PushRule::looped(VertexSubset::EMPTY, all);
        assert_eq!(unlooped.close(&model, all, VertexSubset::EMPTY).closure, all);

        // looped vertices without white neighbors fill themselves
        let looped = PushRule::looped(all, VertexSubset::EMPTY);
        assert!(!looped.close(&model, all, VertexSubset::EMPTY).pushed);
        assert_eq!(looped.close(&model, set(&[0]), VertexSubset::EMPTY).closure, set(&[0]));
        assert_eq!(looped.close(&model, all, set(&[0])).closure, all);

        // unmarked vertices behave like in the plain rule
        let mixed = PushRule::looped(set(&[1]), VertexSubset::EMPTY);
        assert!(!mixed.can_push(&model, VertexSubset::EMPTY));
        assert_eq!(mixed.close(&model, set(&[1]), VertexSubset::EMPTY).closure, set(&[1]));
    }

    #[test]
    fn looped_rule_on_path() {
        // 0 - 1 - 2 with 1 unlooped: the unfilled vertex 1 cannot force while both
        // of its neighbors are white, but 0 looped fills itself once 1 is filled
        let model = AdjacencyModel::new(&gens::path(3)).unwrap();
        let all = model.vertices();
        let rule = PushRule::looped(set(&[0]), set(&[1]));

        assert!(!rule.can_push(&model, VertexSubset::EMPTY));
        assert_eq!(rule.close(&model, all, set(&[2])).closure, all);
        assert_eq!(rule.close_all(&model, set(&[1])), all);
    }

    #[test]
    fn closure_is_idempotent() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x1234);
        for model in random_models(rng, 30, 2..10) {
            let n = model.number_of_nodes();
            let full = model.vertices().bits();

            for _ in 0..20 {
                let active = VertexSubset::from_bits(rng.random::<u64>() & full);
                let filled = VertexSubset::from_bits(rng.random::<u64>() & full);
                let looped = VertexSubset::from_bits(rng.random::<u64>() & full);
                let unlooped = VertexSubset::from_bits(rng.random::<u64>() & full) - looped;

                for rule in [PushRule::Plain, PushRule::looped(looped, unlooped)] {
                    let first = rule.close(&model, active, filled);
                    let second = rule.close(&model, active, first.closure);

                    assert!(first.closure.is_subset_of(active), "n={n}");
                    assert!((filled & active).is_subset_of(first.closure));
                    assert!(!second.pushed);
                    assert_eq!(second.closure, first.closure);
                    assert_eq!(
                        rule.can_push(&model, first.closure),
                        rule.close_all(&model, first.closure) != first.closure
                    );
                }
            }
        }
    }
}
