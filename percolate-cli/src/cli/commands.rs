//! Command implementations and argument parsing for the percolate CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use percolate_core::{
    Canvas, EdgeList, MaxSizeTracking, Partition, PercolateError, PercolationBuilder, StepTable,
    covered_node_count, edges_to_cover,
};
use percolate_providers_edgelist::{
    Delimiter, EdgeListError, EdgeListFormat, EdgeListProvider, read_node_list,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "percolate",
    about = "Explore how a strength-ordered association network fragments into subgraphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print per-edge subgraph statistics for the whole edge list.
    Steps(StepsCommand),
    /// Print the partition after a prefix of the edge list as JSON.
    Snapshot(SnapshotCommand),
    /// Report how many nodes an edge prefix covers.
    Coverage(CoverageCommand),
}

/// Edge-list input shared by every command.
#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// Path to the edge list, strongest edge first.
    pub path: PathBuf,

    /// Field separator used in the edge list.
    #[arg(long, value_enum, default_value_t = DelimiterArg::Tab)]
    pub delimiter: DelimiterArg,

    /// Skip the first non-comment row as a header.
    #[arg(long)]
    pub header: bool,
}

/// Field separators accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DelimiterArg {
    /// Tab-separated values.
    Tab,
    /// Comma-separated values.
    Comma,
    /// Any run of whitespace.
    Whitespace,
}

impl From<DelimiterArg> for Delimiter {
    fn from(value: DelimiterArg) -> Self {
        match value {
            DelimiterArg::Tab => Self::Tab,
            DelimiterArg::Comma => Self::Comma,
            DelimiterArg::Whitespace => Self::Whitespace,
        }
    }
}

/// Largest-subgraph tracking strategies accepted on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TrackingArg {
    /// Update the maximum from merge outcomes.
    #[default]
    Incremental,
    /// Rescan live subgraphs after every edge.
    Scan,
}

impl From<TrackingArg> for MaxSizeTracking {
    fn from(value: TrackingArg) -> Self {
        match value {
            TrackingArg::Incremental => Self::Incremental,
            TrackingArg::Scan => Self::Scan,
        }
    }
}

/// Output formats for the step table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    /// Tab-separated values with a header row.
    #[default]
    Tsv,
    /// A JSON array of step records.
    Json,
}

/// Options accepted by the `steps` command.
#[derive(Debug, Args, Clone)]
pub struct StepsCommand {
    /// Edge-list input.
    #[command(flatten)]
    pub input: InputArgs,

    /// How the largest subgraph size is tracked.
    #[arg(long, value_enum, default_value_t)]
    pub tracking: TrackingArg,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: TableFormat,
}

/// Options accepted by the `snapshot` command.
#[derive(Debug, Args, Clone)]
pub struct SnapshotCommand {
    /// Edge-list input.
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of edges to admit (defaults to all).
    #[arg(long)]
    pub edges: Option<usize>,

    /// File listing the full node universe, one label per line.
    #[arg(long)]
    pub nodes: Option<PathBuf>,

    /// Canvas width used for subgraph placement.
    #[arg(long, default_value_t = Canvas::DEFAULT_WIDTH)]
    pub width: f64,

    /// Canvas height used for subgraph placement.
    #[arg(long, default_value_t = Canvas::DEFAULT_HEIGHT)]
    pub height: f64,
}

/// Options accepted by the `coverage` command.
#[derive(Debug, Args, Clone)]
pub struct CoverageCommand {
    /// Edge-list input.
    #[command(flatten)]
    pub input: InputArgs,

    /// Total number of nodes in the universe.
    #[arg(long)]
    pub universe: usize,

    /// Number of leading edges to count (defaults to all).
    #[arg(long)]
    pub edges: Option<usize>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening an input file failed.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge or node list parsing failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// Engine configuration failed.
    #[error(transparent)]
    Core(#[from] PercolateError),
}

/// Node coverage of an edge prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageReport {
    /// Number of leading edges that were counted.
    pub edges_considered: usize,
    /// Declared universe size.
    pub universe: usize,
    /// Distinct nodes touched by the counted edges, capped at `universe`.
    pub covered_nodes: usize,
    /// Shortest prefix of the whole list that covers the universe.
    pub edges_to_cover: usize,
}

/// Result payload of a command.
#[derive(Debug, Clone)]
pub enum CommandOutput {
    /// Step table and the format it should be printed in.
    Steps {
        /// Per-edge statistics.
        table: StepTable,
        /// Requested output format.
        format: TableFormat,
    },
    /// Snapshot partition.
    Snapshot(Partition<String>),
    /// Coverage report.
    Coverage(CoverageReport),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name derived from the input file.
    pub data_source: String,
    /// Command payload.
    pub output: CommandOutput,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading input or configuring the engine fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use percolate_cli::cli::{
/// #     Cli, Command, CommandOutput, DelimiterArg, InputArgs, StepsCommand, TableFormat,
/// #     TrackingArg, run_cli,
/// # };
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "a\tb\t3\nb\tc\t2\n")?;
/// let cli = Cli {
///     command: Command::Steps(StepsCommand {
///         input: InputArgs {
///             path: file.path().to_path_buf(),
///             delimiter: DelimiterArg::Tab,
///             header: false,
///         },
///         tracking: TrackingArg::Incremental,
///         format: TableFormat::Tsv,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert!(matches!(summary.output, CommandOutput::Steps { ref table, .. } if table.len() == 2));
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Steps(command) => {
            span.record("command", "steps");
            run_steps(command)
        }
        Command::Snapshot(command) => {
            span.record("command", "snapshot");
            run_snapshot(command)
        }
        Command::Coverage(command) => {
            span.record("command", "coverage");
            run_coverage(command)
        }
    }
}

#[instrument(
    name = "cli.steps",
    err,
    skip(command),
    fields(tracking = field::Empty, records = field::Empty),
)]
pub(super) fn run_steps(command: StepsCommand) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    span.record("tracking", field::debug(command.tracking));
    let engine = PercolationBuilder::new()
        .with_max_size_tracking(command.tracking.into())
        .build()?;
    let (data_source, edges) = load_edges(&command.input)?;
    let table = engine.steps(&edges);
    span.record("records", table.len());
    Ok(ExecutionSummary {
        data_source,
        output: CommandOutput::Steps {
            table,
            format: command.format,
        },
    })
}

#[instrument(
    name = "cli.snapshot",
    err,
    skip(command),
    fields(prefix = field::Empty, universe = field::Empty, subgraphs = field::Empty),
)]
pub(super) fn run_snapshot(command: SnapshotCommand) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    span.record(
        "prefix",
        field::display(
            command
                .edges
                .map_or_else(|| "<all>".to_owned(), |edges| edges.to_string()),
        ),
    );
    let engine = PercolationBuilder::new()
        .with_canvas(command.width, command.height)
        .build()?;
    let (data_source, edges) = load_edges(&command.input)?;
    let universe = command.nodes.as_deref().map(load_nodes).transpose()?;
    if let Some(nodes) = &universe {
        span.record("universe", nodes.len());
    }
    let partition = engine.snapshot(&edges, command.edges, universe.as_deref());
    span.record("subgraphs", partition.subgraph_count());
    Ok(ExecutionSummary {
        data_source,
        output: CommandOutput::Snapshot(partition),
    })
}

#[instrument(name = "cli.coverage", err, skip(command), fields(universe = command.universe))]
pub(super) fn run_coverage(command: CoverageCommand) -> Result<ExecutionSummary, CliError> {
    let (data_source, edges) = load_edges(&command.input)?;
    let considered = edges.prefix(command.edges);
    let report = CoverageReport {
        edges_considered: considered.len(),
        universe: command.universe,
        covered_nodes: covered_node_count(considered, command.universe),
        edges_to_cover: edges_to_cover(edges.as_slice(), command.universe),
    };
    info!(
        covered_nodes = report.covered_nodes,
        edges_to_cover = report.edges_to_cover,
        "coverage computed"
    );
    Ok(ExecutionSummary {
        data_source,
        output: CommandOutput::Coverage(report),
    })
}

#[instrument(name = "cli.load_edges", err, skip(input), fields(path = %input.path.display()))]
pub(super) fn load_edges(input: &InputArgs) -> Result<(String, EdgeList<String>), CliError> {
    let format = EdgeListFormat::default()
        .with_delimiter(input.delimiter.into())
        .with_header(input.header);
    let name = derive_data_source_name(&input.path);
    let provider = EdgeListProvider::try_from_reader(name, open_reader(&input.path)?, &format)?;
    if !provider.edges().is_sorted_by_strength() {
        warn!(
            data_source = provider.name(),
            "edges are not sorted by descending strength; statistics assume they are"
        );
    }
    info!(
        data_source = provider.name(),
        edges = provider.edges().len(),
        "edge list loaded"
    );
    let name = provider.name().to_owned();
    Ok((name, provider.into_edges()))
}

fn load_nodes(path: &Path) -> Result<Vec<String>, CliError> {
    Ok(read_node_list(open_reader(path)?)?)
}

pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "edges".to_owned(), ToOwned::to_owned)
}
