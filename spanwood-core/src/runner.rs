//! Uniform, timed entry point over every engine.
//!
//! Benchmark drivers name an [`Algorithm`], hand over a loaded [`Graph`]
//! and get back the engine's result, the wall-clock time it took and the
//! empirical cost estimate used for cross-algorithm comparison.

use std::{
    fmt,
    str::FromStr,
    time::{Duration, Instant},
};

use tracing::{Span, field, info, instrument};

use crate::{
    cut::{KargerConfig, MinCut, karger_min_cut},
    error::{RunError, UnknownAlgorithm},
    graph::Graph,
    mst::{PrimConfig, SpanningForest, boruvka, kruskal, prim_with, reverse_delete},
};

/// The engines a [`run`] can dispatch to.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Algorithm {
    /// Global sort plus union-find.
    Kruskal,
    /// Heap-driven tree growth from a start vertex.
    Prim,
    /// Parallel-friendly cheapest-edge rounds.
    Boruvka,
    /// Heaviest-first edge removal with connectivity probes.
    ReverseDelete,
    /// Randomized contraction; yields a cut, not a spanning tree.
    Karger,
}

impl Algorithm {
    /// Every algorithm, in reporting order.
    pub const ALL: [Self; 5] = [
        Self::Kruskal,
        Self::Prim,
        Self::Boruvka,
        Self::ReverseDelete,
        Self::Karger,
    ];

    /// Returns the stable lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
            Self::Boruvka => "boruvka",
            Self::ReverseDelete => "reverse-delete",
            Self::Karger => "karger",
        }
    }

    /// Returns `true` for the engines that compute a minimum spanning
    /// forest.
    #[must_use]
    pub const fn is_exact(self) -> bool {
        !matches!(self, Self::Karger)
    }

    /// Empirical operation-count estimate for a graph of the given size:
    /// Kruskal `E·ln E`, Prim `E·log₂ V`, Borůvka `E·ln V`, Reverse-Delete
    /// `E·V`, Karger `V²`. Logarithms of zero count as zero.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "cost estimates are reported as approximate floating-point figures."
    )]
    pub fn estimated_cost(self, vertex_count: usize, edge_count: usize) -> f64 {
        let vertices = vertex_count as f64;
        let edges = edge_count as f64;
        let ln = |value: f64| if value > 0.0 { value.ln() } else { 0.0 };
        match self {
            Self::Kruskal => edges * ln(edges),
            Self::Prim => edges * if vertices > 0.0 { vertices.log2() } else { 0.0 },
            Self::Boruvka => edges * ln(vertices),
            Self::ReverseDelete => edges * vertices,
            Self::Karger => vertices * vertices,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Parses a name case-insensitively; `_` and `-` are interchangeable
    /// and `borůvka` is accepted alongside `boruvka`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalised = raw.trim().to_lowercase().replace('_', "-");
        match normalised.as_str() {
            "kruskal" => Ok(Self::Kruskal),
            "prim" => Ok(Self::Prim),
            "boruvka" | "borůvka" => Ok(Self::Boruvka),
            "reverse-delete" | "reverse" => Ok(Self::ReverseDelete),
            "karger" => Ok(Self::Karger),
            _ => Err(UnknownAlgorithm::new(raw)),
        }
    }
}

/// Per-engine options for [`run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    prim: PrimConfig,
    karger: KargerConfig,
}

impl RunConfig {
    /// Replaces the Prim options.
    #[must_use]
    pub const fn with_prim(mut self, prim: PrimConfig) -> Self {
        self.prim = prim;
        self
    }

    /// Replaces the Karger options.
    #[must_use]
    pub const fn with_karger(mut self, karger: KargerConfig) -> Self {
        self.karger = karger;
        self
    }

    /// Returns the Prim options.
    #[must_use]
    #[rustfmt::skip]
    pub const fn prim(&self) -> PrimConfig { self.prim }

    /// Returns the Karger options.
    #[must_use]
    #[rustfmt::skip]
    pub const fn karger(&self) -> KargerConfig { self.karger }
}

/// What an engine produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A minimum spanning forest from one of the exact engines.
    Spanning(SpanningForest),
    /// An approximate minimum cut from Karger.
    Cut(MinCut),
}

impl Outcome {
    /// Returns the forest total weight or the cut weight.
    ///
    /// The two are not comparable with each other.
    #[must_use]
    pub fn weight(&self) -> f64 {
        match self {
            Self::Spanning(forest) => forest.total_weight(),
            Self::Cut(cut) => cut.weight(),
        }
    }

    /// Returns the number of forest edges or crossing edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        match self {
            Self::Spanning(forest) => forest.len(),
            Self::Cut(cut) => cut.crossing_edges().len(),
        }
    }

    /// Returns the forest when this is a spanning outcome.
    #[must_use]
    pub const fn as_spanning(&self) -> Option<&SpanningForest> {
        match self {
            Self::Spanning(forest) => Some(forest),
            Self::Cut(_) => None,
        }
    }

    /// Returns the cut when this is a cut outcome.
    #[must_use]
    pub const fn as_cut(&self) -> Option<&MinCut> {
        match self {
            Self::Cut(cut) => Some(cut),
            Self::Spanning(_) => None,
        }
    }
}

/// A completed, timed engine invocation.
#[derive(Clone, Debug)]
pub struct Run {
    algorithm: Algorithm,
    outcome: Outcome,
    elapsed: Duration,
    estimated_cost: f64,
}

impl Run {
    /// Returns the engine that ran.
    #[must_use]
    #[rustfmt::skip]
    pub const fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns the engine result.
    #[must_use]
    #[rustfmt::skip]
    pub const fn outcome(&self) -> &Outcome { &self.outcome }

    /// Consumes the run and returns the engine result.
    #[must_use]
    pub fn into_outcome(self) -> Outcome {
        self.outcome
    }

    /// Returns the wall-clock time spent inside the engine.
    #[must_use]
    #[rustfmt::skip]
    pub const fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns [`Algorithm::estimated_cost`] for the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn estimated_cost(&self) -> f64 { self.estimated_cost }
}

/// Runs `algorithm` on `graph` and times it.
///
/// Only the engine call is timed; the cost estimate is computed outside
/// the measured window.
///
/// # Errors
/// Returns [`RunError::Cut`] when Karger rejects the graph (fewer than two
/// vertices). The exact engines accept every loaded graph.
///
/// # Panics
/// Panics when the Prim start vertex is out of range for a non-empty graph.
///
/// # Examples
/// ```
/// use spanwood_core::{Algorithm, Edge, Graph, RunConfig, run};
///
/// let graph = Graph::load(3, [Edge::new(0, 1, 1.0), Edge::new(1, 2, 2.0)])?;
/// let run = run(Algorithm::Kruskal, &graph, &RunConfig::default())?;
/// assert_eq!(run.outcome().weight(), 3.0);
/// assert_eq!(run.outcome().edge_count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "runner.run",
    err,
    skip(algorithm, graph, config),
    fields(
        algorithm = %algorithm,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        elapsed_us = field::Empty,
    ),
)]
pub fn run(algorithm: Algorithm, graph: &Graph, config: &RunConfig) -> Result<Run, RunError> {
    let started = Instant::now();
    let outcome = match algorithm {
        Algorithm::Kruskal => Outcome::Spanning(kruskal(graph)),
        Algorithm::Prim => Outcome::Spanning(prim_with(graph, config.prim)),
        Algorithm::Boruvka => Outcome::Spanning(boruvka(graph)),
        Algorithm::ReverseDelete => Outcome::Spanning(reverse_delete(graph)),
        Algorithm::Karger => Outcome::Cut(karger_min_cut(graph, &config.karger)?),
    };
    let elapsed = started.elapsed();

    let estimated_cost = algorithm.estimated_cost(graph.vertex_count(), graph.edge_count());
    Span::current().record(
        "elapsed_us",
        u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
    );
    info!(
        weight = outcome.weight(),
        edges = outcome.edge_count(),
        estimated_cost,
        "run completed"
    );
    Ok(Run {
        algorithm,
        outcome,
        elapsed,
        estimated_cost,
    })
}
