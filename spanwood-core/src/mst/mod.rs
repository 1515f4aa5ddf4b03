//! Minimum spanning tree/forest engines.
//!
//! Four exact engines share one output type, [`SpanningForest`], and one
//! tie-break rule: edges compare by `(weight, EdgeId)`. Under that strict
//! total order the minimum spanning forest is unique, so Kruskal, Prim,
//! Borůvka and Reverse-Delete return the same edge set, not just the same
//! total weight. Disconnected input yields one tree per component.

mod boruvka;
mod kruskal;
mod prim;
mod reverse_delete;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::graph::{EdgeId, Graph, WeightedEdge, edge_order};

pub use self::{
    boruvka::boruvka,
    kruskal::kruskal,
    prim::{PrimConfig, prim, prim_with},
    reverse_delete::reverse_delete,
};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
/// Edges are kept sorted by `(weight, EdgeId)` and the total weight is
/// summed in that order, so equal edge sets always report bit-identical
/// totals.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    edges: Vec<WeightedEdge>,
    component_count: usize,
    total_weight: f64,
}

impl SpanningForest {
    pub(crate) fn new(mut edges: Vec<WeightedEdge>, component_count: usize) -> Self {
        edges.sort_unstable();
        let total_weight = edges.iter().map(WeightedEdge::weight).sum();
        Self {
            edges,
            component_count,
            total_weight,
        }
    }

    /// Returns the forest edges sorted by `(weight, EdgeId)`.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[WeightedEdge] { &self.edges }

    /// Returns the number of trees, i.e. connected components of the input.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns the summed weight of the forest edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of forest edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when the forest has no edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the ids of the forest edges in ascending id order.
    #[must_use]
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        let mut ids: Vec<EdgeId> = self.edges.iter().map(WeightedEdge::id).collect();
        ids.sort_unstable();
        ids
    }
}

/// Returns every edge id sorted ascending by `(weight, EdgeId)`.
pub(crate) fn ascending_order(graph: &Graph) -> Vec<EdgeId> {
    let mut keyed: Vec<(f64, EdgeId)> = graph
        .iter()
        .map(|(id, edge)| (edge.weight(), id))
        .collect();
    let compare = |left: &(f64, EdgeId), right: &(f64, EdgeId)| edge_order(*left, *right);

    #[cfg(feature = "parallel")]
    keyed.par_sort_unstable_by(compare);
    #[cfg(not(feature = "parallel"))]
    keyed.sort_unstable_by(compare);

    keyed.into_iter().map(|(_, id)| id).collect()
}

#[cfg(test)]
mod property;
