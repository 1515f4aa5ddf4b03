//! Kruskal's algorithm: global sort, then greedy acceptance over a DSU.

use tracing::{debug, instrument};

use super::{SpanningForest, ascending_order};
use crate::{connectivity::count_components, dsu::DisjointSet, graph::Graph};

/// Computes the minimum spanning forest of `graph` with Kruskal's algorithm.
///
/// Edges are scanned ascending by `(weight, EdgeId)` and accepted whenever
/// they join two different sets. The scan stops as soon as `V − c` edges
/// are accepted. O(E log E).
///
/// # Examples
/// ```
/// use spanwood_core::{Edge, Graph, kruskal};
///
/// let graph = Graph::load(
///     3,
///     [Edge::new(0, 1, 1.0), Edge::new(1, 2, 2.0), Edge::new(0, 2, 3.0)],
/// )?;
/// let forest = kruskal(&graph);
/// assert_eq!(forest.edge_ids(), vec![0, 1]);
/// assert_eq!(forest.total_weight(), 3.0);
/// # Ok::<(), spanwood_core::MalformedGraph>(())
/// ```
#[must_use]
#[instrument(
    name = "mst.kruskal",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn kruskal(graph: &Graph) -> SpanningForest {
    let component_count = count_components(graph);
    let target = graph.vertex_count() - component_count;
    let mut sets = DisjointSet::new(graph.vertex_count());
    let mut accepted = Vec::with_capacity(target);

    let mut scanned = 0_usize;
    for id in ascending_order(graph) {
        if accepted.len() == target {
            break;
        }
        scanned += 1;
        let edge = graph.resolve(id);
        if sets.union(edge.source(), edge.target()) {
            accepted.push(edge);
        }
    }

    debug!(scanned, accepted = accepted.len(), component_count, "kruskal finished");
    SpanningForest::new(accepted, component_count)
}
