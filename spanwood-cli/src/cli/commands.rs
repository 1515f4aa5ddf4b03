//! Command implementations and argument parsing for the spanwood CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use spanwood_core::{
    Algorithm, CutError, DEFAULT_SEED, DEFAULT_TRIALS, Graph, KargerConfig, Outcome, PrimConfig,
    Run, RunConfig, RunError, VertexId, run,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::loader::{GraphFormat, LoadError, LoadOptions, load_path};

const MIN_CUT_VERTICES: usize = 2;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwood",
    about = "Run minimum spanning forest and minimum cut engines over a graph file."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load a graph and run one or more engines over it.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Graph file: Matrix Market (`.mtx`) or a `u v [w]` edge list.
    pub path: PathBuf,

    /// Engine to run; repeat to run several. Defaults to every engine.
    #[arg(long = "algorithm", short = 'a', value_enum)]
    pub algorithms: Vec<AlgorithmArg>,

    /// Input format; inferred from the file extension when omitted.
    #[arg(long, value_enum)]
    pub format: Option<GraphFormat>,

    /// Independent Karger contraction trials.
    #[arg(long, default_value_t = DEFAULT_TRIALS.get())]
    pub trials: usize,

    /// Base seed for Karger trials.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Start vertex for Prim.
    #[arg(long, default_value_t = 0)]
    pub start: VertexId,

    /// Add 1.5 to negative weights before validation.
    #[arg(long)]
    pub shift_negative: bool,

    /// Run Karger trials on the calling thread only.
    #[arg(long)]
    pub sequential_trials: bool,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Engines selectable on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum AlgorithmArg {
    /// Kruskal's algorithm.
    Kruskal,
    /// Prim's algorithm.
    Prim,
    /// Borůvka's algorithm.
    Boruvka,
    /// Reverse-delete.
    ReverseDelete,
    /// Karger's randomized minimum cut.
    Karger,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Kruskal => Self::Kruskal,
            AlgorithmArg::Prim => Self::Prim,
            AlgorithmArg::Boruvka => Self::Boruvka,
            AlgorithmArg::ReverseDelete => Self::ReverseDelete,
            AlgorithmArg::Karger => Self::Karger,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph file could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Karger options were rejected.
    #[error("invalid karger options: {0}")]
    Karger(#[source] CutError),
    /// The Prim start vertex is not a vertex of the loaded graph.
    #[error("start vertex {start} is out of range for {vertex_count} vertices")]
    StartOutOfRange {
        /// Requested start vertex.
        start: VertexId,
        /// Vertex count of the loaded graph.
        vertex_count: usize,
    },
    /// An engine failed on the loaded graph.
    #[error("{algorithm} failed: {source}")]
    Run {
        /// Engine that failed.
        algorithm: Algorithm,
        /// Error reported by the engine.
        #[source]
        source: RunError,
    },
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the loaded data source.
    pub data_source: String,
    /// Vertex count of the loaded graph.
    pub vertex_count: usize,
    /// Edge count of the loaded graph.
    pub edge_count: usize,
    /// One timed run per requested engine, in request order.
    pub runs: Vec<Run>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the graph, validating options, or
/// running an engine fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwood_cli::cli::{AlgorithmArg, Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0 1 1\n1 2 2\n0 2 3\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         algorithms: vec![AlgorithmArg::Kruskal],
///         format: None,
///         trials: 16,
///         seed: 7,
///         start: 0,
///         shift_negative: false,
///         sequential_trials: false,
///         name: Some("triangle".into()),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.runs.len(), 1);
/// assert_eq!(summary.runs[0].outcome().weight(), 3.0);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(command) => {
            Span::current().record("command", field::display("run"));
            run_command(&command)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = %command.path.display(), algorithms = field::Empty),
)]
pub(super) fn run_command(command: &RunCommand) -> Result<ExecutionSummary, CliError> {
    let karger = KargerConfig::new(command.trials)
        .map_err(CliError::Karger)?
        .with_seed(command.seed)
        .with_parallel_trials(!command.sequential_trials);
    let options = LoadOptions::default().with_shift_negative(command.shift_negative);
    let graph = load_path(&command.path, command.format, options)?;
    let algorithms = selected_algorithms(&command.algorithms, graph.vertex_count());
    Span::current().record("algorithms", field::debug(&algorithms));
    let config = RunConfig::default()
        .with_prim(checked_prim_config(&graph, command.start)?)
        .with_karger(karger);

    let runs = algorithms
        .into_iter()
        .map(|algorithm| {
            run(algorithm, &graph, &config).map_err(|source| CliError::Run { algorithm, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let summary = ExecutionSummary {
        data_source: derive_data_source_name(&command.path, command.name.as_deref()),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        runs,
    };
    info!(
        data_source = summary.data_source.as_str(),
        runs = summary.runs.len(),
        "command completed"
    );
    Ok(summary)
}

/// Deduplicates the requested engines, keeping first-mention order, and
/// falls back to every engine when none was named.
///
/// The fallback leaves Karger out when the graph has fewer than two
/// vertices; naming it explicitly still runs it and reports the failure.
pub(super) fn selected_algorithms(
    requested: &[AlgorithmArg],
    vertex_count: usize,
) -> Vec<Algorithm> {
    if requested.is_empty() {
        let defaults: Vec<Algorithm> = Algorithm::ALL
            .into_iter()
            .filter(|algorithm| algorithm.is_exact() || vertex_count >= MIN_CUT_VERTICES)
            .collect();
        if defaults.len() < Algorithm::ALL.len() {
            info!(vertex_count, "karger skipped: a cut needs two vertices");
        }
        return defaults;
    }
    let mut selected: Vec<Algorithm> = Vec::with_capacity(requested.len());
    for algorithm in requested.iter().copied().map(Algorithm::from) {
        if !selected.contains(&algorithm) {
            selected.push(algorithm);
        }
    }
    selected
}

fn checked_prim_config(graph: &Graph, start: VertexId) -> Result<PrimConfig, CliError> {
    if !graph.is_empty() && start >= graph.vertex_count() {
        return Err(CliError::StartOutOfRange {
            start,
            vertex_count: graph.vertex_count(),
        });
    }
    Ok(PrimConfig::default().with_start(start))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` as a tab-separated table, one row per run.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use spanwood_cli::cli::{ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     vertex_count: 3,
///     edge_count: 2,
///     runs: Vec::new(),
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.starts_with("data source: demo\nvertices: 3\nedges: 2\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "vertices: {}", summary.vertex_count)?;
    writeln!(writer, "edges: {}", summary.edge_count)?;
    writeln!(
        writer,
        "algorithm\tweight\tedges\tdetail\telapsed_us\testimated_cost"
    )?;
    for entry in &summary.runs {
        let outcome = entry.outcome();
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{:.0}",
            entry.algorithm(),
            outcome.weight(),
            outcome.edge_count(),
            outcome_detail(outcome),
            entry.elapsed().as_micros(),
            entry.estimated_cost(),
        )?;
    }
    Ok(())
}

fn outcome_detail(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Spanning(forest) => format!("components={}", forest.component_count()),
        Outcome::Cut(cut) => format!(
            "sides={}/{} trial={}/{}",
            cut.source_side().len(),
            cut.sink_side().len(),
            cut.trial() + 1,
            cut.trials()
        ),
    }
}
