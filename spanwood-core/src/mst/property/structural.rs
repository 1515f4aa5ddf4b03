//! Property 2: structural invariants of every forest.
//!
//! - **Acyclicity**: no edge closes a cycle.
//! - **Edge count**: `V − c` edges for `c` input components.
//! - **Canonical form**: `source < target`, matching the input edge.
//! - **Ordering**: edges sorted by `(weight, EdgeId)`.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    connectivity::count_components,
    graph::{Graph, WeightedEdge},
    mst::SpanningForest,
};

use super::helpers::{ENGINES, find_root};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let input_components = count_components(&graph);

    for (name, engine) in ENGINES {
        let forest = engine(&graph);
        let context = |detail: String| {
            TestCaseError::fail(format!("{name}: {detail} ({})", fixture.describe()))
        };

        validate_against_input(&graph, forest.edges()).map_err(context)?;
        validate_acyclicity(graph.vertex_count(), forest.edges()).map_err(context)?;
        validate_counts(&graph, &forest, input_components).map_err(context)?;
        validate_ordering(forest.edges()).map_err(context)?;
    }

    Ok(())
}

/// Every forest edge must be the canonical form of the input edge it names.
fn validate_against_input(graph: &Graph, edges: &[WeightedEdge]) -> Result<(), String> {
    for edge in edges {
        let Some(input) = graph.edge(edge.id()) else {
            return Err(format!("edge id {} does not exist", edge.id()));
        };
        if edge.source() >= edge.target() {
            return Err(format!(
                "edge {} not canonical ({} >= {})",
                edge.id(),
                edge.source(),
                edge.target()
            ));
        }
        if input.canonical() != (edge.source(), edge.target())
            || input.weight().to_bits() != edge.weight().to_bits()
        {
            return Err(format!("edge {} does not match its input", edge.id()));
        }
    }
    Ok(())
}

fn validate_acyclicity(vertex_count: usize, edges: &[WeightedEdge]) -> Result<(), String> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for edge in edges {
        let ra = find_root(&mut parent, edge.source());
        let rb = find_root(&mut parent, edge.target());
        if ra == rb {
            return Err(format!(
                "edge {} ({}, {}) creates a cycle",
                edge.id(),
                edge.source(),
                edge.target()
            ));
        }
        parent[rb] = ra;
    }
    Ok(())
}

fn validate_counts(
    graph: &Graph,
    forest: &SpanningForest,
    input_components: usize,
) -> Result<(), String> {
    if forest.component_count() != input_components {
        return Err(format!(
            "component count {}, input has {input_components}",
            forest.component_count()
        ));
    }
    let expected = graph.vertex_count() - input_components;
    if forest.len() != expected {
        return Err(format!(
            "edge count {}, expected V - c = {expected}",
            forest.len()
        ));
    }
    if input_components == 1 && !forest.is_tree() {
        return Err("connected input did not produce a tree".to_owned());
    }
    Ok(())
}

fn validate_ordering(edges: &[WeightedEdge]) -> Result<(), String> {
    match edges.windows(2).position(|pair| pair[0] >= pair[1]) {
        Some(index) => Err(format!("edges out of order at position {index}")),
        None => Ok(()),
    }
}
