//! Property 1: every exact engine matches the sequential oracle.
//!
//! The `(weight, EdgeId)` order is strict, so the minimum spanning forest
//! is unique: engines must return the oracle's exact edge set, its
//! component count, and a bit-identical total weight.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::helpers::ENGINES;
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    for (name, engine) in ENGINES {
        let forest = engine(&graph);

        if forest.edge_ids() != oracle.edge_ids {
            return Err(TestCaseError::fail(format!(
                "{name}: edge set {:?} differs from oracle {:?} ({})",
                forest.edge_ids(),
                oracle.edge_ids,
                fixture.describe(),
            )));
        }

        if forest.total_weight().to_bits() != oracle.total_weight.to_bits() {
            return Err(TestCaseError::fail(format!(
                "{name}: total weight {} differs from oracle {} ({})",
                forest.total_weight(),
                oracle.total_weight,
                fixture.describe(),
            )));
        }

        if forest.component_count() != oracle.component_count {
            return Err(TestCaseError::fail(format!(
                "{name}: component count {} differs from oracle {} ({})",
                forest.component_count(),
                oracle.component_count,
                fixture.describe(),
            )));
        }
    }

    Ok(())
}
