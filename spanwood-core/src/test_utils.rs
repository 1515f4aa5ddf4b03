//! Shared test utilities for `spanwood-core`.

use std::env;

use proptest::test_runner::Config as ProptestConfig;

use crate::graph::{Edge, Graph};

/// Environment variable overriding the proptest case count of every suite.
pub(crate) const PBT_CASES_ENV_KEY: &str = "SPANWOOD_PBT_CASES";

/// Builds the proptest configuration shared by the property suites.
///
/// `SPANWOOD_PBT_CASES` overrides `default_cases`; invalid overrides are
/// logged and ignored.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases: cases_from_env(default_cases),
        ..ProptestConfig::default()
    }
}

fn cases_from_env(default_cases: u32) -> u32 {
    let Ok(raw) = env::var(PBT_CASES_ENV_KEY) else {
        return default_cases;
    };
    match parse_cases(&raw) {
        Ok(cases) => cases,
        Err(reason) => {
            tracing::warn!(
                env = PBT_CASES_ENV_KEY,
                raw = %raw,
                reason = %reason,
                "invalid property-test case override; using default",
            );
            default_cases
        }
    }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == 0 {
        return Err("cases must be > 0".to_owned());
    }
    Ok(parsed)
}

/// Loads a fixture graph from `(source, target, weight)` triples.
///
/// # Panics
/// Panics when the triples do not form a valid graph.
pub(crate) fn graph_from(vertex_count: usize, raw: &[(usize, usize, f64)]) -> Graph {
    Graph::load(
        vertex_count,
        raw.iter()
            .map(|&(source, target, weight)| Edge::new(source, target, weight)),
    )
    .expect("fixture graph must be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("64", Ok(64))]
    #[case(" 12 ", Ok(12))]
    #[case("0", Err("cases must be > 0"))]
    fn parses_case_overrides(#[case] raw: &str, #[case] expected: Result<u32, &str>) {
        assert_eq!(parse_cases(raw), expected.map_err(str::to_owned));
    }

    #[test]
    fn rejects_non_numeric_case_overrides() {
        let error = parse_cases("many").expect_err("non-numeric input must fail");
        assert!(error.starts_with("parse error"));
    }
}
