//! Graph file ingestion.
//!
//! Two formats are understood: Matrix Market coordinate files (`.mtx`, the
//! format of the benchmark datasets) and plain whitespace edge lists of the
//! form `u v [w]`. Both produce a validated [`Graph`]; structural problems
//! the loader does not filter itself surface as [`MalformedGraph`].

mod edge_list;
mod matrix_market;

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use spanwood_core::{Edge, Graph, MalformedGraph};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Amount added to a negative weight when [`LoadOptions::shift_negative`]
/// is enabled.
pub const NEGATIVE_WEIGHT_SHIFT: f64 = 1.5;

/// Supported on-disk graph encodings.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum GraphFormat {
    /// Matrix Market coordinate format with 1-based indices.
    #[value(name = "mtx")]
    MatrixMarket,
    /// One `u v [w]` edge per line with 0-based vertex ids.
    #[value(name = "edges")]
    EdgeList,
}

impl GraphFormat {
    /// Picks a format from the file extension: `.mtx` is Matrix Market,
    /// anything else an edge list.
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("mtx") => Self::MatrixMarket,
            _ => Self::EdgeList,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::MatrixMarket => "mtx",
            Self::EdgeList => "edges",
        }
    }
}

/// Options applied while turning file entries into edges.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LoadOptions {
    shift_negative: bool,
}

impl LoadOptions {
    /// Adds [`NEGATIVE_WEIGHT_SHIFT`] to every negative weight before the
    /// graph is validated. Weights below `-1.5` stay negative and are still
    /// rejected.
    #[must_use]
    pub const fn with_shift_negative(mut self, shift_negative: bool) -> Self {
        self.shift_negative = shift_negative;
        self
    }

    /// Returns whether negative weights are shifted.
    #[must_use]
    #[rustfmt::skip]
    pub const fn shift_negative(&self) -> bool { self.shift_negative }

    fn adjust(self, weight: f64) -> f64 {
        if self.shift_negative && weight < 0.0 {
            weight + NEGATIVE_WEIGHT_SHIFT
        } else {
            weight
        }
    }
}

/// Errors raised while reading a graph file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The input could not be opened or read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path being read, or `<reader>` for in-memory input.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The first line is not a Matrix Market banner.
    #[error("line {line}: expected a `%%MatrixMarket` banner")]
    MissingBanner {
        /// 1-based line number.
        line: usize,
    },
    /// The banner names a matrix layout the loader does not handle.
    #[error("line {line}: unsupported Matrix Market header `{header}`")]
    UnsupportedHeader {
        /// 1-based line number.
        line: usize,
        /// The offending banner, trimmed.
        header: String,
    },
    /// The input ended before the Matrix Market size line.
    #[error("missing Matrix Market size line")]
    MissingSize,
    /// An adjacency matrix must be square.
    #[error("line {line}: matrix is {rows}x{columns}, expected a square adjacency matrix")]
    NotSquare {
        /// 1-based line number.
        line: usize,
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        columns: usize,
    },
    /// A line carries the wrong number of fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        /// 1-based line number.
        line: usize,
        /// Human-readable description of the expected count.
        expected: &'static str,
        /// Number of fields present.
        found: usize,
    },
    /// A field failed to parse.
    #[error("line {line}: invalid {what} `{token}`")]
    InvalidToken {
        /// 1-based line number.
        line: usize,
        /// Which field was being parsed.
        what: &'static str,
        /// The raw token.
        token: String,
    },
    /// A Matrix Market index lies outside `1..=size`.
    #[error("line {line}: index {index} outside 1..={size}")]
    IndexOutOfRange {
        /// 1-based line number.
        line: usize,
        /// The offending index as written.
        index: usize,
        /// Declared matrix dimension.
        size: usize,
    },
    /// The number of entries disagrees with the size line.
    #[error("expected {expected} matrix entries, found {found}")]
    EntryCount {
        /// Entry count declared in the size line.
        expected: usize,
        /// Entries actually present.
        found: usize,
    },
    /// The parsed edges do not form a valid graph.
    #[error(transparent)]
    Graph(#[from] MalformedGraph),
}

impl LoadError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Vertex count and edges decoded from a file, before validation.
#[derive(Debug, Default)]
struct RawGraph {
    vertex_count: usize,
    edges: Vec<Edge>,
    skipped: usize,
}

/// Opens `path` and loads it as `format`, or as the format implied by its
/// extension when `format` is `None`.
///
/// # Errors
/// Returns [`LoadError`] when the file cannot be read, fails to parse, or
/// describes an invalid graph.
#[instrument(
    name = "loader.load_path",
    err,
    skip(path, options),
    fields(path = %path.display(), format = field::Empty),
)]
pub fn load_path(
    path: &Path,
    format: Option<GraphFormat>,
    options: LoadOptions,
) -> Result<Graph, LoadError> {
    let format = format.unwrap_or_else(|| GraphFormat::detect(path));
    Span::current().record("format", format.label());
    let file = File::open(path).map_err(|source| LoadError::io(path, source))?;
    decode(BufReader::new(file), path, format, options)
}

/// Loads a graph from an in-memory or streaming reader.
///
/// # Errors
/// Returns [`LoadError`] when reading fails, the input does not parse, or
/// the edges describe an invalid graph.
///
/// # Examples
/// ```
/// use spanwood_cli::loader::{GraphFormat, LoadOptions, load_reader};
///
/// let input = "0 1 2.5\n1 2 1\n";
/// let graph = load_reader(input.as_bytes(), GraphFormat::EdgeList, LoadOptions::default())?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), spanwood_cli::loader::LoadError>(())
/// ```
pub fn load_reader(
    reader: impl BufRead,
    format: GraphFormat,
    options: LoadOptions,
) -> Result<Graph, LoadError> {
    decode(reader, Path::new("<reader>"), format, options)
}

fn decode(
    reader: impl BufRead,
    origin: &Path,
    format: GraphFormat,
    options: LoadOptions,
) -> Result<Graph, LoadError> {
    let lines = reader
        .lines()
        .map(|line| line.map_err(|source| LoadError::io(origin, source)));
    let raw = match format {
        GraphFormat::MatrixMarket => matrix_market::parse(lines, options)?,
        GraphFormat::EdgeList => edge_list::parse(lines, options)?,
    };
    let graph = Graph::load(raw.vertex_count, raw.edges)?;
    info!(
        format = format.label(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        skipped = raw.skipped,
        "graph loaded"
    );
    Ok(graph)
}

/// Parses a numeric field, reporting the line and field name on failure.
fn parse_field<T: std::str::FromStr>(
    token: &str,
    line: usize,
    what: &'static str,
) -> Result<T, LoadError> {
    token.parse().map_err(|_| LoadError::InvalidToken {
        line,
        what,
        token: token.to_owned(),
    })
}
