//! Property 3: repeated and concurrent runs are bit-identical.
//!
//! Each engine runs several times sequentially and then from several
//! threads sharing one `&Graph`; every run must equal the first. Prim is
//! additionally started from every vertex of small graphs, which must not
//! change the forest.

use std::thread;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::{PrimConfig, SpanningForest, prim_with};

use super::helpers::ENGINES;
use super::types::MstFixture;

/// Number of sequential repetitions and concurrent threads per engine.
const REPETITIONS: usize = 3;
/// Largest graph on which Prim is restarted from every vertex.
const PRIM_START_SWEEP_LIMIT: usize = 16;

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();

    for (name, engine) in ENGINES {
        let baseline = engine(&graph);

        for run in 1..REPETITIONS {
            ensure_identical(name, run, &baseline, &engine(&graph), fixture)?;
        }

        let concurrent: Vec<SpanningForest> = thread::scope(|scope| {
            let handles: Vec<_> = (0..REPETITIONS)
                .map(|_| scope.spawn(|| engine(&graph)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("engine thread must not panic"))
                .collect()
        });
        for (run, forest) in concurrent.iter().enumerate() {
            ensure_identical(name, run, &baseline, forest, fixture)?;
        }
    }

    if fixture.vertex_count <= PRIM_START_SWEEP_LIMIT {
        let baseline = prim_with(&graph, PrimConfig::default());
        for start in 1..fixture.vertex_count {
            let forest = prim_with(&graph, PrimConfig::default().with_start(start));
            ensure_identical("prim", start, &baseline, &forest, fixture)?;
        }
    }

    Ok(())
}

fn ensure_identical(
    name: &str,
    run: usize,
    baseline: &SpanningForest,
    candidate: &SpanningForest,
    fixture: &MstFixture,
) -> TestCaseResult {
    let same_weight = baseline.total_weight().to_bits() == candidate.total_weight().to_bits();
    if candidate != baseline || !same_weight {
        return Err(TestCaseError::fail(format!(
            "{name} run {run}: forest diverged from baseline ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}
