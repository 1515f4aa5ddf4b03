//! Prim's algorithm over an indexed min-heap, restarted per component.

use tracing::{debug, instrument};

use super::SpanningForest;
use crate::{
    graph::{EdgeId, Graph, VertexId},
    queue::IndexedMinQueue,
};

/// Priority of a vertex no tree edge reaches yet. Restarts therefore fall
/// back to insertion order, which is ascending vertex id.
const UNREACHED: (f64, EdgeId) = (f64::INFINITY, EdgeId::MAX);

/// Options for [`prim_with`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PrimConfig {
    start: VertexId,
}

impl PrimConfig {
    /// Grows the first tree from `start` instead of vertex 0.
    #[must_use]
    pub const fn with_start(mut self, start: VertexId) -> Self {
        self.start = start;
        self
    }

    /// Returns the configured start vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> VertexId { self.start }
}

/// Computes the minimum spanning forest of `graph` with Prim's algorithm,
/// starting from vertex 0.
#[must_use]
pub fn prim(graph: &Graph) -> SpanningForest {
    prim_with(graph, PrimConfig::default())
}

/// Computes the minimum spanning forest of `graph` with Prim's algorithm.
///
/// Every vertex is queued with priority `+∞` and the start vertex with 0.
/// Priorities are `(weight, EdgeId)` pairs, so relaxation only replaces a
/// vertex's connecting edge with one that is strictly cheaper under the
/// shared tie-break. A vertex extracted without a connecting edge opens a
/// new tree; later trees of a disconnected graph start at the lowest
/// unvisited vertex id. O(E log V).
///
/// # Panics
/// Panics when `config.start()` is not a vertex of a non-empty `graph`.
#[must_use]
#[instrument(
    name = "mst.prim",
    skip(graph, config),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count(), start = config.start),
)]
pub fn prim_with(graph: &Graph, config: PrimConfig) -> SpanningForest {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return SpanningForest::new(Vec::new(), 0);
    }
    assert!(
        config.start < vertex_count,
        "start vertex {} is out of range for {vertex_count} vertices",
        config.start
    );

    let mut queue: IndexedMinQueue<(f64, EdgeId)> = IndexedMinQueue::with_capacity(vertex_count);
    let mut via: Vec<Option<EdgeId>> = vec![None; vertex_count];
    queue.insert(config.start, (0.0, 0));
    for vertex in (0..vertex_count).filter(|&vertex| vertex != config.start) {
        queue.insert(vertex, UNREACHED);
    }

    let mut accepted = Vec::with_capacity(vertex_count - 1);
    let mut trees = 0_usize;
    while let Some((vertex, _)) = queue.extract_min() {
        match via[vertex] {
            Some(edge) => accepted.push(graph.resolve(edge)),
            None => trees += 1,
        }

        for incidence in graph.neighbours(vertex) {
            let (next, edge) = (incidence.neighbour(), incidence.edge());
            let weight = graph.resolve(edge).weight();
            // Vertices already in a tree are no longer queued, so this is a no-op for them.
            if queue.decrease_key(next, (weight, edge)) {
                via[next] = Some(edge);
            }
        }
    }

    debug!(trees, accepted = accepted.len(), "prim finished");
    SpanningForest::new(accepted, trees)
}
