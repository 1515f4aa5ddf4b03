//! Karger's randomized minimum cut.
//!
//! Each trial contracts uniformly random edges of the multigraph until two
//! super-vertices remain; the edges between them form a cut. Contraction
//! picks edges by count, not by weight, so on weighted graphs a trial
//! favours cuts with few crossing edges. The best of many trials is an
//! upper bound on the true minimum cut weight, never below it.
//!
//! Trials are independent and seeded from `(base seed, trial index)`, which
//! makes the result a pure function of the graph and [`KargerConfig`]
//! whether trials run sequentially or on the rayon pool.

mod rng;

use std::{cmp::Ordering, num::NonZeroUsize};

use rand::{Rng, SeedableRng, rngs::SmallRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{Span, debug, field, instrument, trace};

use crate::{
    dsu::DisjointSet,
    error::CutError,
    graph::{EdgeId, Graph, VertexId, WeightedEdge},
};

use self::rng::mix_trial_seed;

/// Trial count used by [`KargerConfig::default`]: sixteen.
pub const DEFAULT_TRIALS: NonZeroUsize = NonZeroUsize::MIN.saturating_add(15);

/// Base seed used by [`KargerConfig::default`].
pub const DEFAULT_SEED: u64 = 0x5EED_CAFE_F00D_D00D;

/// Parameters for [`karger_min_cut`].
///
/// # Examples
/// ```
/// use spanwood_core::KargerConfig;
///
/// let config = KargerConfig::new(64)?.with_seed(7).with_parallel_trials(false);
/// assert_eq!(config.trials().get(), 64);
/// assert_eq!(config.seed(), 7);
/// assert!(!config.parallel_trials());
/// # Ok::<(), spanwood_core::CutError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KargerConfig {
    trials: NonZeroUsize,
    seed: u64,
    parallel_trials: bool,
}

impl KargerConfig {
    /// Creates a configuration running `trials` independent contractions.
    ///
    /// # Errors
    /// Returns [`CutError::ZeroTrials`] when `trials` is zero.
    pub fn new(trials: usize) -> Result<Self, CutError> {
        let trials = NonZeroUsize::new(trials).ok_or(CutError::ZeroTrials)?;
        Ok(Self {
            trials,
            ..Self::default()
        })
    }

    /// Sets the base seed from which every trial seed is derived.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Chooses whether trials may run on the rayon pool. Has no effect
    /// without the `parallel` feature; the result is the same either way.
    #[must_use]
    pub const fn with_parallel_trials(mut self, parallel_trials: bool) -> Self {
        self.parallel_trials = parallel_trials;
        self
    }

    /// Returns the number of trials.
    #[must_use]
    #[rustfmt::skip]
    pub const fn trials(&self) -> NonZeroUsize { self.trials }

    /// Returns the base seed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> u64 { self.seed }

    /// Returns whether trials may run in parallel.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parallel_trials(&self) -> bool { self.parallel_trials }
}

impl Default for KargerConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: DEFAULT_SEED,
            parallel_trials: true,
        }
    }
}

/// A two-sided partition of the vertices and the edges crossing it.
#[derive(Clone, Debug, PartialEq)]
pub struct MinCut {
    side: Vec<bool>,
    crossing: Vec<WeightedEdge>,
    weight: f64,
    contractions: usize,
    trial: usize,
    trials: usize,
}

impl MinCut {
    /// Returns the vertices on the same side as vertex 0, ascending.
    #[must_use]
    pub fn source_side(&self) -> Vec<VertexId> {
        self.members(false)
    }

    /// Returns the vertices on the far side from vertex 0, ascending.
    #[must_use]
    pub fn sink_side(&self) -> Vec<VertexId> {
        self.members(true)
    }

    /// Returns `true` when `left` and `right` lie on different sides.
    ///
    /// # Panics
    /// Panics when either vertex is out of range.
    #[must_use]
    pub fn separates(&self, left: VertexId, right: VertexId) -> bool {
        self.side[left] != self.side[right]
    }

    /// Returns the crossing edges sorted by `(weight, EdgeId)`.
    #[must_use]
    #[rustfmt::skip]
    pub fn crossing_edges(&self) -> &[WeightedEdge] { &self.crossing }

    /// Returns the summed weight of the crossing edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }

    /// Returns how many contractions the winning trial performed.
    #[must_use]
    #[rustfmt::skip]
    pub fn contractions(&self) -> usize { self.contractions }

    /// Returns the zero-based index of the winning trial.
    #[must_use]
    #[rustfmt::skip]
    pub fn trial(&self) -> usize { self.trial }

    /// Returns the number of trials that were run.
    #[must_use]
    #[rustfmt::skip]
    pub fn trials(&self) -> usize { self.trials }

    fn members(&self, far: bool) -> Vec<VertexId> {
        self.side
            .iter()
            .enumerate()
            .filter_map(|(vertex, &side)| (side == far).then_some(vertex))
            .collect()
    }

    /// Orders candidate cuts by `(weight, trial)`.
    fn compare(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.trial.cmp(&other.trial))
    }
}

/// Runs a single contraction trial seeded with `seed`.
///
/// If the edges run out before two super-vertices remain, the graph is
/// disconnected and the result separates the super-vertex holding vertex 0
/// from everything else, with weight 0.
///
/// # Errors
/// Returns [`CutError::TooFewVertices`] when `graph` has fewer than two
/// vertices.
pub fn contract_once(graph: &Graph, seed: u64) -> Result<MinCut, CutError> {
    ensure_cuttable(graph)?;
    Ok(run_trial(graph, seed, 0, 1))
}

/// Runs `config.trials()` independent contraction trials and returns the
/// lightest cut found, preferring the earliest trial on ties.
///
/// # Errors
/// Returns [`CutError::TooFewVertices`] when `graph` has fewer than two
/// vertices.
///
/// # Examples
/// ```
/// use spanwood_core::{Edge, Graph, KargerConfig, karger_min_cut};
///
/// // Two triangles joined by a single light bridge.
/// let graph = Graph::load(
///     6,
///     [
///         Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0), Edge::new(0, 2, 1.0),
///         Edge::new(3, 4, 1.0), Edge::new(4, 5, 1.0), Edge::new(3, 5, 1.0),
///         Edge::new(2, 3, 1.0),
///     ],
/// )?;
/// let cut = karger_min_cut(&graph, &KargerConfig::new(200)?.with_seed(1))?;
/// assert_eq!(cut.weight(), 1.0);
/// assert_eq!(cut.source_side(), vec![0, 1, 2]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "cut.karger",
    err,
    skip(graph, config),
    fields(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        trials = config.trials.get(),
        seed = config.seed,
        weight = field::Empty,
    ),
)]
pub fn karger_min_cut(graph: &Graph, config: &KargerConfig) -> Result<MinCut, CutError> {
    ensure_cuttable(graph)?;
    let trials = config.trials.get();
    let trial = |index: usize| {
        let cut = run_trial(graph, mix_trial_seed(config.seed, index), index, trials);
        trace!(trial = index, weight = cut.weight, "karger trial finished");
        cut
    };

    #[cfg(feature = "parallel")]
    let best = if config.parallel_trials {
        (0..trials).into_par_iter().map(trial).min_by(MinCut::compare)
    } else {
        (0..trials).map(trial).min_by(MinCut::compare)
    };
    #[cfg(not(feature = "parallel"))]
    let best = (0..trials).map(trial).min_by(MinCut::compare);

    let best = best.ok_or(CutError::ZeroTrials)?;
    Span::current().record("weight", best.weight);
    debug!(
        trial = best.trial,
        crossing = best.crossing.len(),
        "karger selected best cut"
    );
    Ok(best)
}

fn ensure_cuttable(graph: &Graph) -> Result<(), CutError> {
    if graph.vertex_count() < 2 {
        return Err(CutError::TooFewVertices {
            vertex_count: graph.vertex_count(),
        });
    }
    Ok(())
}

/// Contracts random edges until two super-vertices remain.
///
/// The edge pool shrinks lazily: a drawn edge whose endpoints already share
/// a super-vertex is a self-loop and is swap-removed, and drawing again is
/// equivalent to sampling uniformly from the surviving edges.
fn run_trial(graph: &Graph, seed: u64, trial: usize, trials: usize) -> MinCut {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut sets = DisjointSet::new(graph.vertex_count());
    let mut pool: Vec<EdgeId> = (0..graph.edge_count()).collect();
    let mut contractions = 0_usize;

    while sets.component_count() > 2 && !pool.is_empty() {
        let slot = rng.gen_range(0..pool.len());
        let edge = graph.resolve(pool[slot]);
        if sets.union(edge.source(), edge.target()) {
            contractions += 1;
        } else {
            pool.swap_remove(slot);
        }
    }

    let anchor = sets.find(0);
    let side: Vec<bool> = (0..graph.vertex_count())
        .map(|vertex| sets.find(vertex) != anchor)
        .collect();

    let mut crossing: Vec<WeightedEdge> = graph
        .iter()
        .filter(|(_, edge)| side[edge.source()] != side[edge.target()])
        .map(|(id, _)| graph.resolve(id))
        .collect();
    crossing.sort_unstable();
    let weight = crossing.iter().map(WeightedEdge::weight).sum();

    MinCut {
        side,
        crossing,
        weight,
        contractions,
        trial,
        trials,
    }
}
