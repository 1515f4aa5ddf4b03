//! Unit tests for the connectivity probe.

use rstest::rstest;

use super::{ConnectivityProbe, ExcludedEdges, count_components, is_connected};
use crate::{graph::Graph, test_utils::graph_from as graph};

fn square_with_diagonal() -> Graph {
    graph(
        4,
        &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0), (0, 2, 1.0)],
    )
}

#[rstest]
#[case::empty(0, &[], true)]
#[case::single_vertex(1, &[], true)]
#[case::pair(2, &[(0, 1, 1.0)], true)]
#[case::isolated_vertex(3, &[(0, 1, 1.0)], false)]
#[case::two_triangles(
    6,
    &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (3, 4, 1.0), (4, 5, 1.0), (5, 3, 1.0)],
    false,
)]
fn detects_connectivity(
    #[case] vertex_count: usize,
    #[case] raw: &[(usize, usize, f64)],
    #[case] expected: bool,
) {
    let graph = graph(vertex_count, raw);
    assert_eq!(
        is_connected(&graph, &ExcludedEdges::for_graph(&graph)),
        expected
    );
}

#[test]
fn exclusions_remove_edges_logically() {
    let graph = square_with_diagonal();
    let mut excluded = ExcludedEdges::for_graph(&graph);
    let mut probe = ConnectivityProbe::new(graph.vertex_count());

    assert!(excluded.exclude(4));
    assert!(!excluded.exclude(4));
    assert!(excluded.exclude(0));
    assert_eq!(excluded.len(), 2);
    assert!(probe.is_connected(&graph, &excluded));

    assert!(excluded.exclude(3));
    assert!(!probe.is_connected(&graph, &excluded));
    assert!(!probe.reaches(&graph, &excluded, 1, 0));
    assert!(probe.reaches(&graph, &excluded, 1, 3));

    assert!(excluded.restore(4));
    assert!(!excluded.restore(4));
    assert!(probe.is_connected(&graph, &excluded));
}

#[test]
fn reaches_ignores_other_components() {
    let graph = graph(5, &[(0, 1, 1.0), (2, 3, 1.0), (3, 4, 1.0)]);
    let excluded = ExcludedEdges::for_graph(&graph);
    let mut probe = ConnectivityProbe::default();
    assert!(probe.reaches(&graph, &excluded, 2, 4));
    assert!(!probe.reaches(&graph, &excluded, 0, 4));
    assert!(probe.reaches(&graph, &excluded, 3, 3));
}

#[test]
fn parallel_edges_keep_connectivity() {
    let graph = graph(2, &[(0, 1, 1.0), (0, 1, 2.0)]);
    let mut excluded = ExcludedEdges::for_graph(&graph);
    excluded.exclude(0);
    assert!(is_connected(&graph, &excluded));
    excluded.exclude(1);
    assert!(!is_connected(&graph, &excluded));
}

#[test]
fn counts_components() {
    assert_eq!(count_components(&square_with_diagonal()), 1);
    assert_eq!(count_components(&graph(5, &[(0, 1, 1.0), (2, 3, 1.0)])), 3);
    assert_eq!(count_components(&graph(0, &[])), 0);
}

#[test]
fn probe_survives_many_generations() {
    let graph = square_with_diagonal();
    let excluded = ExcludedEdges::for_graph(&graph);
    let mut probe = ConnectivityProbe::new(graph.vertex_count());
    probe.generation = u32::MAX - 2;
    for _ in 0..8 {
        assert!(probe.is_connected(&graph, &excluded));
    }
    assert!(probe.generation < 8);
}
