//! Sequential Kruskal oracle for spanning-forest property verification.
//!
//! A deliberately plain implementation over the raw edge list: stable sort
//! by weight (so equal weights stay in id order), then greedy acceptance
//! over a union-find with no rank heuristic.

use crate::graph::{Edge, EdgeId};

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Accepted edge ids, sorted ascending.
    pub edge_ids: Vec<EdgeId>,
    /// Total weight summed in acceptance order.
    pub total_weight: f64,
    /// Number of connected components of the input.
    pub component_count: usize,
}

/// Computes a minimum spanning forest with sequential Kruskal.
pub(super) fn sequential_kruskal(vertex_count: usize, edges: &[Edge]) -> SequentialMstResult {
    let mut order: Vec<EdgeId> = (0..edges.len()).collect();
    order.sort_by(|&left, &right| edges[left].weight().total_cmp(&edges[right].weight()));

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    let mut total_weight = 0.0;
    let mut edge_ids = Vec::new();

    for id in order {
        let edge = &edges[id];
        let ra = find_root(&mut parent, edge.source());
        let rb = find_root(&mut parent, edge.target());
        if ra != rb {
            parent[rb] = ra;
            components -= 1;
            total_weight += edge.weight();
            edge_ids.push(id);
        }
    }

    edge_ids.sort_unstable();
    SequentialMstResult {
        edge_ids,
        total_weight,
        component_count: components,
    }
}
