//! Matrix Market coordinate reader.
//!
//! The file is read as a dense adjacency matrix would be: an entry `(i, j)`
//! with a non-zero value is an undirected edge between `i - 1` and `j - 1`.
//! Diagonal entries and zeros carry no edge and are skipped, as is the
//! mirror of a pair already seen, so a `general` matrix storing both
//! triangles yields each edge once with the weight written first.

use std::collections::HashSet;

use spanwood_core::{Edge, VertexId};
use tracing::debug;

use super::{LoadError, LoadOptions, RawGraph, parse_field};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Field {
    Real,
    Integer,
    Pattern,
}

impl Field {
    const fn arity(self) -> (usize, &'static str) {
        match self {
            Self::Pattern => (2, "2 (pattern)"),
            Self::Real | Self::Integer => (3, "3"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Symmetry {
    General,
    Symmetric,
}

#[derive(Debug)]
struct Header {
    field: Field,
    symmetry: Symmetry,
}

pub(super) fn parse(
    lines: impl IntoIterator<Item = Result<String, LoadError>>,
    options: LoadOptions,
) -> Result<RawGraph, LoadError> {
    let mut lines = lines.into_iter().enumerate().map(|(index, line)| (index + 1, line));

    let header = match lines.next() {
        Some((number, line)) => parse_header(number, &line?)?,
        None => return Err(LoadError::MissingBanner { line: 1 }),
    };

    let mut size = None;
    let mut declared = 0_usize;
    let mut found = 0_usize;
    let mut raw = RawGraph::default();
    let mut seen: HashSet<(VertexId, VertexId)> = HashSet::new();

    for (number, line) in lines {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();

        let Some(dimension) = size else {
            let (dimension, entries) = parse_size(number, &fields)?;
            size = Some(dimension);
            declared = entries;
            raw.vertex_count = dimension;
            continue;
        };

        found += 1;
        let (arity, expected) = header.field.arity();
        if fields.len() != arity {
            return Err(LoadError::FieldCount {
                line: number,
                expected,
                found: fields.len(),
            });
        }
        let row = parse_index(fields[0], number, dimension)?;
        let column = parse_index(fields[1], number, dimension)?;
        let weight = match header.field {
            Field::Pattern => 1.0,
            Field::Real | Field::Integer => parse_field::<f64>(fields[2], number, "weight")?,
        };

        let pair = (row.min(column), row.max(column));
        if row == column || weight == 0.0 || !seen.insert(pair) {
            raw.skipped += 1;
            continue;
        }
        raw.edges.push(Edge::new(pair.0, pair.1, options.adjust(weight)));
    }

    if size.is_none() {
        return Err(LoadError::MissingSize);
    }
    if found != declared {
        return Err(LoadError::EntryCount {
            expected: declared,
            found,
        });
    }
    debug!(
        field = ?header.field,
        symmetry = ?header.symmetry,
        entries = found,
        "matrix market body parsed"
    );
    Ok(raw)
}

fn parse_header(number: usize, line: &str) -> Result<Header, LoadError> {
    let tokens: Vec<String> = line
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect();
    if tokens.first().map(String::as_str) != Some("%%matrixmarket") {
        return Err(LoadError::MissingBanner { line: number });
    }
    let unsupported = || LoadError::UnsupportedHeader {
        line: number,
        header: line.trim().to_owned(),
    };
    let [_, object, layout, field, symmetry] = tokens.as_slice() else {
        return Err(unsupported());
    };
    if object != "matrix" || layout != "coordinate" {
        return Err(unsupported());
    }
    let field = match field.as_str() {
        "real" => Field::Real,
        "integer" => Field::Integer,
        "pattern" => Field::Pattern,
        _ => return Err(unsupported()),
    };
    let symmetry = match symmetry.as_str() {
        "general" => Symmetry::General,
        "symmetric" => Symmetry::Symmetric,
        _ => return Err(unsupported()),
    };
    Ok(Header { field, symmetry })
}

fn parse_size(number: usize, fields: &[&str]) -> Result<(usize, usize), LoadError> {
    let &[rows, columns, entries] = fields else {
        return Err(LoadError::FieldCount {
            line: number,
            expected: "3 (rows columns entries)",
            found: fields.len(),
        });
    };
    let rows: usize = parse_field(rows, number, "row count")?;
    let columns: usize = parse_field(columns, number, "column count")?;
    let entries: usize = parse_field(entries, number, "entry count")?;
    if rows != columns {
        return Err(LoadError::NotSquare {
            line: number,
            rows,
            columns,
        });
    }
    Ok((rows, entries))
}

/// Converts a 1-based Matrix Market index to a vertex id.
fn parse_index(token: &str, number: usize, size: usize) -> Result<VertexId, LoadError> {
    let index: usize = parse_field(token, number, "index")?;
    if index == 0 || index > size {
        return Err(LoadError::IndexOutOfRange {
            line: number,
            index,
            size,
        });
    }
    Ok(index - 1)
}
