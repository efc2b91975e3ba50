//! Unit tests for the CLI commands and rendering helpers.

use super::commands::{derive_data_source_name, load_edges, run_snapshot};
use super::{
    Cli, CliError, Command, CommandOutput, CoverageCommand, CoverageReport, DelimiterArg,
    ExecutionSummary, InputArgs, SnapshotCommand, StepsCommand, TableFormat, TrackingArg,
    render_summary, run_cli,
};

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use percolate_core::{
    Edge, EdgeList, MaxSizeTracking, PercolateError, StepTable, accumulate_steps,
};
use percolate_providers_edgelist::EdgeListError;
use rstest::{fixture, rstest};
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use percolate_test_support::tracing::RecordingLayer;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const TWO_PAIRS_THEN_BRIDGE: &str = "# source\ttarget\tstrength\nA\tB\t5\nC\tD\t4\nB\tC\t3\nD\tE\t2\n";

#[fixture]
fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

#[rstest]
#[case::stem_with_extension("/tmp/network.tsv", "network")]
#[case::stem_without_extension("/tmp/network", "network")]
#[case::missing_stem("", "edges")]
fn derive_data_source_name_selects_expected_name(#[case] raw_path: &str, #[case] expected: &str) {
    assert_eq!(derive_data_source_name(Path::new(raw_path)), expected);
}

#[rstest]
#[case::incremental(TrackingArg::Incremental)]
#[case::scan(TrackingArg::Scan)]
fn steps_reports_one_record_per_edge(temp_dir: TempDir, #[case] tracking: TrackingArg) -> TestResult {
    let path = create_file(&temp_dir, "network.tsv", TWO_PAIRS_THEN_BRIDGE)?;
    let summary = run_cli(steps_cli(path, tracking, TableFormat::Tsv))?;
    assert_eq!(summary.data_source, "network");

    let table = expect_steps(&summary);
    assert_eq!(table.len(), 4);
    let counts: Vec<usize> = table.iter().map(|step| step.subgraph_count).collect();
    assert_eq!(counts, vec![1, 2, 1, 1]);
    let last = table.last().expect("table is non-empty");
    assert_eq!(last.nodes_seen, 5);
    assert_eq!(last.max_subgraph_size, 5);
    assert!((last.relative_max_size - 1.0).abs() < f64::EPSILON);
    Ok(())
}

#[rstest]
fn steps_accepts_comma_separated_input_with_header(temp_dir: TempDir) -> TestResult {
    let path = create_file(
        &temp_dir,
        "network.csv",
        "source,target,strength\nA,B,3\nB,C,2\nD,E,1\n",
    )?;
    let cli = Cli::try_parse_from([
        "percolate",
        "steps",
        path_str(&path)?,
        "--delimiter",
        "comma",
        "--header",
    ])?;
    let summary = run_cli(cli)?;
    let table = expect_steps(&summary);
    let last = table.last().expect("table is non-empty");
    assert_eq!(last.nodes_seen, 5);
    assert_eq!(last.subgraph_count, 2);
    assert!((last.relative_max_size - 0.6).abs() < 1e-12);
    Ok(())
}

#[rstest]
fn steps_surfaces_parse_errors(temp_dir: TempDir) -> TestResult {
    let path = create_file(&temp_dir, "broken.tsv", "A\tB\t1\nC\tD\tstrong\n")?;
    let err = run_cli_expecting_error(
        steps_cli(path, TrackingArg::Incremental, TableFormat::Tsv),
        "invalid strength must fail",
    );
    assert!(matches!(
        err,
        CliError::EdgeList(EdgeListError::InvalidStrength { line: 2, .. })
    ));
    Ok(())
}

#[rstest]
fn missing_input_reports_path(temp_dir: TempDir) {
    let missing = temp_dir.path().join("missing.tsv");
    let err = run_cli_expecting_error(
        steps_cli(missing, TrackingArg::Incremental, TableFormat::Tsv),
        "missing file must fail",
    );
    match err {
        CliError::Io { path, .. } => assert!(path.ends_with("missing.tsv")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn snapshot_groups_prefix_and_adds_universe(temp_dir: TempDir) -> TestResult {
    let edges = create_file(&temp_dir, "network.tsv", TWO_PAIRS_THEN_BRIDGE)?;
    let nodes = create_file(&temp_dir, "nodes.txt", "A\nB\nC\nD\nE\nF\n")?;
    let summary = run_cli(Cli {
        command: Command::Snapshot(SnapshotCommand {
            input: input(edges),
            edges: Some(2),
            nodes: Some(nodes),
            width: 800.0,
            height: 600.0,
        }),
    })?;
    let CommandOutput::Snapshot(partition) = &summary.output else {
        panic!("expected snapshot output");
    };
    assert_eq!(partition.edges_admitted(), 2);
    assert_eq!(partition.node_count(), 6);
    // {A, B}, {C, D} and the singletons E and F.
    assert_eq!(partition.subgraph_count(), 4);
    let a = partition.subgraph_of(&"A".to_owned());
    assert_eq!(a, partition.subgraph_of(&"B".to_owned()));
    assert_ne!(a, partition.subgraph_of(&"C".to_owned()));
    Ok(())
}

#[rstest]
fn snapshot_rejects_degenerate_canvas(temp_dir: TempDir) -> TestResult {
    let edges = create_file(&temp_dir, "network.tsv", TWO_PAIRS_THEN_BRIDGE)?;
    let command = SnapshotCommand {
        input: input(edges),
        edges: None,
        nodes: None,
        width: 0.0,
        height: 600.0,
    };
    let err = match run_snapshot(command) {
        Ok(_) => panic!("zero-width canvas must fail"),
        Err(err) => err,
    };
    assert!(matches!(
        err,
        CliError::Core(PercolateError::InvalidCanvas { .. })
    ));
    Ok(())
}

#[rstest]
#[case::partial_prefix(Some(1), 6, 2, 4)]
#[case::whole_list(None, 4, 4, 2)]
#[case::oversized_prefix(Some(99), 6, 5, 4)]
#[case::capped(None, 3, 3, 2)]
fn coverage_reports_capped_counts(
    temp_dir: TempDir,
    #[case] prefix: Option<usize>,
    #[case] universe: usize,
    #[case] expected_covered: usize,
    #[case] expected_to_cover: usize,
) -> TestResult {
    let edges = create_file(&temp_dir, "network.tsv", TWO_PAIRS_THEN_BRIDGE)?;
    let summary = run_cli(Cli {
        command: Command::Coverage(CoverageCommand {
            input: input(edges),
            universe,
            edges: prefix,
        }),
    })?;
    let CommandOutput::Coverage(report) = summary.output else {
        panic!("expected coverage output");
    };
    assert_eq!(report.covered_nodes, expected_covered);
    assert_eq!(report.edges_to_cover, expected_to_cover);
    assert!(report.edges_considered <= 4);
    Ok(())
}

#[rstest]
fn render_steps_as_tsv() -> TestResult {
    let table = sample_table();
    let summary = ExecutionSummary {
        data_source: "demo".into(),
        output: CommandOutput::Steps {
            table,
            format: TableFormat::Tsv,
        },
    };
    let text = render_to_string(&summary)?;
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("edges_admitted\tnodes_seen\tsubgraph_count\tmax_subgraph_size\trelative_max_size")
    );
    assert_eq!(lines.next(), Some("1\t2\t1\t2\t1"));
    assert_eq!(lines.next(), Some("2\t3\t1\t3\t1"));
    assert_eq!(lines.next(), Some("3\t5\t2\t3\t0.6"));
    assert_eq!(lines.next(), None);
    Ok(())
}

#[rstest]
fn render_steps_as_json() -> TestResult {
    let summary = ExecutionSummary {
        data_source: "demo".into(),
        output: CommandOutput::Steps {
            table: sample_table(),
            format: TableFormat::Json,
        },
    };
    let text = render_to_string(&summary)?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    let records = value.as_array().expect("step table renders as an array");
    assert_eq!(records.len(), 3);
    assert_eq!(records[2]["subgraph_count"], 2);
    assert_eq!(records[2]["max_subgraph_size"], 3);
    Ok(())
}

#[rstest]
fn render_coverage_lines() -> TestResult {
    let summary = ExecutionSummary {
        data_source: "demo".into(),
        output: CommandOutput::Coverage(CoverageReport {
            edges_considered: 2,
            universe: 10,
            covered_nodes: 4,
            edges_to_cover: 4,
        }),
    };
    let text = render_to_string(&summary)?;
    assert!(text.contains("data source: demo"));
    assert!(text.contains("covered nodes: 4"));
    assert!(text.contains("edges to cover: 4"));
    Ok(())
}

#[rstest]
#[case::unknown_tracking(&["percolate", "steps", "edges.tsv", "--tracking", "guess"])]
#[case::unknown_delimiter(&["percolate", "steps", "edges.tsv", "--delimiter", "pipe"])]
#[case::missing_universe(&["percolate", "coverage", "edges.tsv"])]
fn clap_rejects_invalid_arguments(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[rstest]
fn clap_applies_snapshot_defaults() -> TestResult {
    let cli = Cli::try_parse_from(["percolate", "snapshot", "edges.tsv"])?;
    let Command::Snapshot(command) = cli.command else {
        panic!("expected snapshot command");
    };
    assert_eq!(command.input.delimiter, DelimiterArg::Tab);
    assert!(!command.input.header);
    assert_eq!(command.edges, None);
    assert!((command.width - 800.0).abs() < f64::EPSILON);
    assert!((command.height - 600.0).abs() < f64::EPSILON);
    Ok(())
}

#[rstest]
fn run_cli_emits_tracing_fields(temp_dir: TempDir) -> TestResult {
    let path = create_file(&temp_dir, "network.tsv", TWO_PAIRS_THEN_BRIDGE)?;
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let cli = steps_cli(path, TrackingArg::Scan, TableFormat::Tsv);
    tracing::subscriber::with_default(subscriber, || run_cli(cli))?;

    let run = layer.span("cli.run").expect("cli.run span must exist");
    assert_eq!(run.field("command"), Some("steps"));
    let steps = layer.span("cli.steps").expect("cli.steps span must exist");
    assert_eq!(steps.field("tracking"), Some("Scan"));
    assert_eq!(steps.field("records"), Some("4"));
    let load = layer
        .span("cli.load_edges")
        .expect("cli.load_edges span must exist");
    assert!(load.field("path").is_some_and(|path| path.ends_with("network.tsv")));

    let loaded = layer.events_with_message("edge list loaded");
    assert!(loaded.iter().any(|event| {
        event.level == Level::INFO
            && event.field("data_source") == Some("network")
            && event.field("edges") == Some("4")
    }));
    Ok(())
}

#[rstest]
fn unsorted_input_is_flagged(temp_dir: TempDir) -> TestResult {
    let path = create_file(&temp_dir, "unsorted.tsv", "A\tB\t1\nC\tD\t2\n")?;
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let (_, edges) =
        tracing::subscriber::with_default(subscriber, || load_edges(&input(path)))?;
    assert_eq!(edges.len(), 2);
    assert!(layer.events().iter().any(|event| event.level == Level::WARN));
    Ok(())
}

fn sample_table() -> StepTable {
    let edges = EdgeList::new(vec![
        Edge::new("A", "B", 3.0),
        Edge::new("B", "C", 2.0),
        Edge::new("D", "E", 1.0),
    ]);
    accumulate_steps(&edges, MaxSizeTracking::Incremental)
}

fn input(path: PathBuf) -> InputArgs {
    InputArgs {
        path,
        delimiter: DelimiterArg::Tab,
        header: false,
    }
}

fn steps_cli(path: PathBuf, tracking: TrackingArg, format: TableFormat) -> Cli {
    Cli {
        command: Command::Steps(StepsCommand {
            input: input(path),
            tracking,
            format,
        }),
    }
}

fn expect_steps(summary: &ExecutionSummary) -> &StepTable {
    match &summary.output {
        CommandOutput::Steps { table, .. } => table,
        other => panic!("expected steps output, got {other:?}"),
    }
}

fn render_to_string(summary: &ExecutionSummary) -> Result<String, Box<dyn std::error::Error>> {
    let mut buffer = Vec::new();
    render_summary(summary, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn create_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

fn path_str(path: &Path) -> io::Result<&str> {
    path.to_str()
        .ok_or_else(|| io::Error::other("temporary path is not UTF-8"))
}

/// Run the CLI and expect an error, panicking with the given message if it succeeds.
fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{}", panic_msg),
        Err(err) => err,
    }
}
