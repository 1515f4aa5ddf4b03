//! Type definitions for spanning-forest property tests.

use crate::graph::{Edge, Graph};

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a distinct weight drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaks.
    ManyIdentical,
    /// Random spanning tree plus roughly `0.5n` to `n` extra edges.
    Sparse,
    /// Close to a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Several components with no edges between them.
    Disconnected,
    /// Parallel edges between the same endpoints, with small integer
    /// weights.
    Multigraph,
}

/// Fixture for spanning-forest property tests.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated edges in id order.
    pub edges: Vec<Edge>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Loads the fixture into a [`Graph`].
    ///
    /// # Panics
    /// Panics when the generator produced a malformed edge.
    pub(super) fn graph(&self) -> Graph {
        Graph::load(self.vertex_count, self.edges.iter().copied())
            .expect("generated fixtures must be valid graphs")
    }

    /// Short description used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len()
        )
    }
}
