//! Reverse-Delete: drop the heaviest edges that do not disconnect anything.

use tracing::{debug, instrument};

use super::{SpanningForest, ascending_order};
use crate::{
    connectivity::{ConnectivityProbe, ExcludedEdges},
    graph::Graph,
};

/// Computes the minimum spanning forest of `graph` with the Reverse-Delete
/// algorithm.
///
/// Edges are visited in descending `(weight, EdgeId)` order, the exact
/// reverse of Kruskal's scan. Each is removed tentatively; if its endpoints
/// are still connected the removal stands, otherwise the edge is restored
/// and kept. One probe per edge makes this O(E·(V + E)). It is the
/// reference baseline and is not optimised further.
#[must_use]
#[instrument(
    name = "mst.reverse_delete",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn reverse_delete(graph: &Graph) -> SpanningForest {
    let mut excluded = ExcludedEdges::for_graph(graph);
    let mut probe = ConnectivityProbe::new(graph.vertex_count());
    let mut kept = Vec::new();

    for id in ascending_order(graph).into_iter().rev() {
        let edge = graph.resolve(id);
        excluded.exclude(id);
        if !probe.reaches(graph, &excluded, edge.source(), edge.target()) {
            excluded.restore(id);
            kept.push(edge);
        }
    }

    let component_count = graph.vertex_count() - kept.len();
    debug!(removed = excluded.len(), kept = kept.len(), component_count, "reverse-delete finished");
    SpanningForest::new(kept, component_count)
}
