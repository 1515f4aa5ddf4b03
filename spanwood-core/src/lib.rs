//! Spanwood core library: minimum spanning forests and randomized minimum
//! cuts over weighted undirected graphs.
//!
//! A [`Graph`] is validated once at load time and then shared read-only by
//! every engine. Four exact engines ([`kruskal`], [`prim`], [`boruvka`],
//! [`reverse_delete`]) return the same [`SpanningForest`] for the same
//! input; [`karger_min_cut`] returns a [`MinCut`]. [`run`] wraps any of
//! them with wall-clock timing for benchmark drivers.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod connectivity;
mod cut;
mod dsu;
mod error;
mod graph;
mod mst;
mod queue;
mod runner;
#[cfg(test)]
mod test_utils;

pub use crate::{
    connectivity::{ConnectivityProbe, ExcludedEdges, count_components, is_connected},
    cut::{DEFAULT_SEED, DEFAULT_TRIALS, KargerConfig, MinCut, contract_once, karger_min_cut},
    dsu::DisjointSet,
    error::{
        CutError, CutErrorCode, MalformedGraph, MalformedGraphCode, RunError, RunErrorCode,
        UnknownAlgorithm,
    },
    graph::{Edge, EdgeId, Graph, Incidence, VertexId, WeightedEdge},
    mst::{PrimConfig, SpanningForest, boruvka, kruskal, prim, prim_with, reverse_delete},
    queue::{IndexedMinQueue, Priority},
    runner::{Algorithm, Outcome, Run, RunConfig, run},
};
