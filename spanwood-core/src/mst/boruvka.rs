//! Borůvka's algorithm: every component grabs its cheapest leaving edge
//! each round.

use tracing::{debug, instrument, trace};

use super::SpanningForest;
use crate::{
    dsu::DisjointSet,
    graph::{EdgeId, Graph},
};

/// Computes the minimum spanning forest of `graph` with Borůvka's
/// algorithm.
///
/// Each round scans every edge once to find, for every component, its
/// cheapest leaving edge by `(weight, EdgeId)`. The candidates are merged
/// in that same order. Because the order is strict, the chosen edges never
/// close a cycle and the component count at least halves per productive
/// round. Rounds stop when nothing merges. O(E log V).
#[must_use]
#[instrument(
    name = "mst.boruvka",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn boruvka(graph: &Graph) -> SpanningForest {
    let vertex_count = graph.vertex_count();
    let mut sets = DisjointSet::new(vertex_count);
    let mut cheapest: Vec<Option<EdgeId>> = vec![None; vertex_count];
    let mut accepted = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut rounds = 0_usize;

    loop {
        cheapest.fill(None);
        for (id, edge) in graph.iter() {
            let left = sets.find(edge.source());
            let right = sets.find(edge.target());
            if left == right {
                continue;
            }
            for root in [left, right] {
                let slot = &mut cheapest[root];
                if slot.is_none_or(|current| graph.compare_edges(id, current).is_lt()) {
                    *slot = Some(id);
                }
            }
        }

        let mut candidates: Vec<EdgeId> = cheapest.iter().flatten().copied().collect();
        candidates.sort_unstable_by(|&left, &right| graph.compare_edges(left, right));
        candidates.dedup();

        let before = accepted.len();
        for id in candidates {
            let edge = graph.resolve(id);
            if sets.union(edge.source(), edge.target()) {
                accepted.push(edge);
            }
        }
        rounds += 1;
        let merged = accepted.len() - before;
        trace!(round = rounds, merged, components = sets.component_count(), "boruvka round");
        if merged == 0 {
            break;
        }
    }

    debug!(rounds, accepted = accepted.len(), "boruvka finished");
    SpanningForest::new(accepted, sets.component_count())
}
