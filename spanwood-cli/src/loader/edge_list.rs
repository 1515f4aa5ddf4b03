//! Whitespace edge-list reader: `u v [w]` per line, 0-based vertex ids,
//! weight 1 when omitted. Lines starting with `#` or `%` are comments.
//!
//! The vertex count is one past the largest id mentioned. A
//! `vertices N` directive raises it to `N` so trailing isolated vertices
//! survive.

use spanwood_core::{Edge, VertexId};

use super::{LoadError, LoadOptions, RawGraph, parse_field};

const VERTICES_DIRECTIVE: &str = "vertices";

pub(super) fn parse(
    lines: impl IntoIterator<Item = Result<String, LoadError>>,
    options: LoadOptions,
) -> Result<RawGraph, LoadError> {
    let mut raw = RawGraph::default();
    for (index, line) in lines.into_iter().enumerate() {
        let number = index + 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(['#', '%']) {
            continue;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        match fields.as_slice() {
            &[VERTICES_DIRECTIVE, count] => {
                let count: usize = parse_field(count, number, "vertex count")?;
                raw.vertex_count = raw.vertex_count.max(count);
            }
            &[source, target] => push_edge(&mut raw, number, source, target, None, options)?,
            &[source, target, weight] => {
                push_edge(&mut raw, number, source, target, Some(weight), options)?;
            }
            _ => {
                return Err(LoadError::FieldCount {
                    line: number,
                    expected: "2 or 3",
                    found: fields.len(),
                });
            }
        }
    }
    Ok(raw)
}

fn push_edge(
    raw: &mut RawGraph,
    number: usize,
    source: &str,
    target: &str,
    weight: Option<&str>,
    options: LoadOptions,
) -> Result<(), LoadError> {
    let source: VertexId = parse_field(source, number, "vertex")?;
    let target: VertexId = parse_field(target, number, "vertex")?;
    let weight = match weight {
        Some(token) => parse_field::<f64>(token, number, "weight")?,
        None => 1.0,
    };
    raw.vertex_count = raw.vertex_count.max(source.max(target).saturating_add(1));
    raw.edges.push(Edge::new(source, target, options.adjust(weight)));
    Ok(())
}
