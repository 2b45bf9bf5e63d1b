use fxhash::FxHashSet;
use log::{debug, trace};

use super::*;

/// A loop labeling: every vertex is looped, unlooped or (while searching) unmarked
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Labeling {
    pub looped: VertexSubset,
    pub unlooped: VertexSubset,
}

impl Labeling {
    /// Creates a labeling from disjoint sets of looped and unlooped vertices
    pub fn new(looped: VertexSubset, unlooped: VertexSubset) -> Self {
        debug_assert!(looped.is_disjoint(unlooped));
        Self { looped, unlooped }
    }

    /// Returns the vertices of `model` that are neither looped nor unlooped
    pub fn unmarked(&self, model: &AdjacencyModel) -> VertexSubset {
        model.vertices() - self.looped - self.unlooped
    }

    /// Returns the push rule induced by the labeling
    pub fn rule(&self) -> PushRule {
        PushRule::looped(self.looped, self.unlooped)
    }
}

/// Best value found so far, together with the labelings achieving it
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BestBound {
    value: Option<NumNodes>,
    labelings: Vec<Labeling>,
}

impl BestBound {
    /// Returns the best value found so far, if any
    pub fn value(&self) -> Option<NumNodes> {
        self.value
    }

    /// Returns the labelings achieving the best value
    pub fn labelings(&self) -> &[Labeling] {
        &self.labelings
    }

    /// Offers a complete labeling with its value.
    /// A strict improvement replaces all stored labelings. If `collect`, ties are appended
    /// (each labeling at most once); otherwise only the first optimal labeling is kept.
    /// Returns *true* if the best value improved.
    pub fn offer(&mut self, value: NumNodes, labeling: Labeling, collect: bool) -> bool {
        match self.value {
            Some(best) if value < best => false,
            Some(best) if value == best => {
                if collect && !self.labelings.contains(&labeling) {
                    self.labelings.push(labeling);
                }
                false
            }
            _ => {
                self.value = Some(value);
                self.labelings.clear();
                self.labelings.push(labeling);
                true
            }
        }
    }

    /// Returns *true* if no completion of a partial labeling with the given value can be
    /// of interest anymore
    fn dominates(&self, value: NumNodes, collect: bool) -> bool {
        match self.value {
            None => false,
            Some(best) => value < best || (value == best && !collect),
        }
    }
}

/// Counters reported by a [`Zqhat`] search
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of partial labelings visited
    pub nodes: u64,
    /// Number of partial labelings skipped because an isomorphic one was visited before
    pub cache_hits: u64,
    /// Number of subtrees cut off by the bound
    pub pruned: u64,
}

/// Computes `Zqhat(G)`, the maximum of `Zq(G)` over all ways to mark every vertex as looped or
/// unlooped, with a branch and bound search.
///
/// Marking a vertex only enables additional forces, hence the value of a partial labeling
/// (unmarked vertices follow the plain rule) bounds the values of all its completions from
/// above. Partial labelings that are isomorphic to one visited before are skipped.
///
/// # Example
/// ```
/// use zqforce::{forcing::*, gens};
///
/// let model = AdjacencyModel::new(&gens::path(3)).unwrap();
/// let outcome = Zqhat::new(0).collect_labelings(true).solve(&model);
///
/// assert!(outcome.value <= Zq::new(0).solve(&model).value);
/// assert!(!outcome.labelings.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Zqhat {
    q: NumNodes,
    collect_labelings: bool,
    parallel: bool,
}

/// Result of a [`Zqhat`] search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZqhatOutcome {
    pub value: NumNodes,
    /// All optimal labelings up to isomorphism if collected, otherwise a single optimal one
    pub labelings: Vec<Labeling>,
    pub stats: SearchStats,
}

type SignatureCache = FxHashSet<(String, NumNodes, NumNodes)>;

impl Zqhat {
    /// Creates a new search for the given `q` that keeps a single optimal labeling
    pub fn new(q: NumNodes) -> Self {
        Self {
            q,
            ..Default::default()
        }
    }

    /// If *true*, all optimal labelings (up to isomorphism) are collected; this disables
    /// pruning of subtrees that can only tie the best value
    pub fn collect_labelings(mut self, collect: bool) -> Self {
        self.collect_labelings = collect;
        self
    }

    /// If *true*, each evaluation of `Zq` runs its levels in parallel
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Runs the branch and bound search on `model`, seeded with the all-looped and the
    /// all-unlooped labeling
    pub fn solve(&self, model: &AdjacencyModel) -> ZqhatOutcome {
        let mut best = BestBound::default();
        let mut cache = SignatureCache::default();
        let mut stats = SearchStats::default();

        let all = model.vertices();
        for seed in [
            Labeling::new(all, VertexSubset::EMPTY),
            Labeling::new(VertexSubset::EMPTY, all),
        ] {
            let value = self.zq(model, &seed);
            if best.offer(value, seed, self.collect_labelings) {
                trace!("Zqhat seed {seed:?} improved the bound to {value}");
            }
        }

        self.search(
            model,
            Labeling::default(),
            &mut best,
            &mut cache,
            &mut stats,
        );

        let value = best.value().unwrap_or(0);
        debug!(
            "Zqhat(q={}) = {value}: {} nodes, {} cache hits, {} pruned",
            self.q, stats.nodes, stats.cache_hits, stats.pruned
        );

        ZqhatOutcome {
            value,
            labelings: best.labelings,
            stats,
        }
    }

    fn zq(&self, model: &AdjacencyModel, labeling: &Labeling) -> NumNodes {
        Zq::new(self.q)
            .rule(labeling.rule())
            .parallel(self.parallel)
            .solve(model)
            .value
    }

    fn search(
        &self,
        model: &AdjacencyModel,
        labeling: Labeling,
        best: &mut BestBound,
        cache: &mut SignatureCache,
        stats: &mut SearchStats,
    ) {
        stats.nodes += 1;

        let form = CanonicalForm::new(model, labeling.looped, labeling.unlooped);
        let key = (
            form.signature(),
            labeling.looped.len(),
            labeling.unlooped.len(),
        );
        if !cache.insert(key) {
            stats.cache_hits += 1;
            return;
        }

        let value = self.zq(model, &labeling);
        if best.dominates(value, self.collect_labelings) {
            stats.pruned += 1;
            return;
        }

        let Some(v) = labeling.unmarked(model).first() else {
            if best.offer(value, labeling, self.collect_labelings) {
                trace!("Zqhat labeling {labeling:?} improved the bound to {value}");
            }
            return;
        };

        self.search(
            model,
            Labeling::new(labeling.looped.with(v), labeling.unlooped),
            best,
            cache,
            stats,
        );

        if !self.collect_labelings && best.value().is_some_and(|b| value <= b) {
            stats.pruned += 1;
            return;
        }

        self.search(
            model,
            Labeling::new(labeling.looped, labeling.unlooped.with(v)),
            best,
            cache,
            stats,
        );
    }
}
