//! Benchmark parameter types.

use std::fmt;

/// Parameters for a graph engine benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Number of edges in the generated graph.
    pub edge_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertex_count, self.edge_count)
    }
}

/// Parameters for a Karger benchmark run.
#[derive(Clone, Debug)]
pub struct CutBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Contraction trials per run.
    pub trials: usize,
    /// Whether trials ran on the rayon pool.
    pub parallel: bool,
}

impl fmt::Display for CutBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.parallel { "par" } else { "seq" };
        write!(f, "n={},t={},{mode}", self.vertex_count, self.trials)
    }
}
