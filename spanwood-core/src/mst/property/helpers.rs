//! Shared helpers for spanning-forest property tests.

use crate::{
    graph::Graph,
    mst::{SpanningForest, boruvka, kruskal, prim, reverse_delete},
};

/// An exact engine under test.
pub(super) type Engine = fn(&Graph) -> SpanningForest;

/// Every exact engine, with the name used in failure messages.
pub(super) const ENGINES: [(&str, Engine); 4] = [
    ("kruskal", kruskal),
    ("prim", prim),
    ("boruvka", boruvka),
    ("reverse_delete", reverse_delete),
];

/// Path-halving find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}
