//! Rendering of command results to an output stream.

use std::io::{self, Write};

use percolate_core::StepTable;

use super::commands::{CommandOutput, CoverageReport, ExecutionSummary, TableFormat};

const STEP_HEADER: &str =
    "edges_admitted\tnodes_seen\tsubgraph_count\tmax_subgraph_size\trelative_max_size";

/// Writes the command result to the provided writer.
///
/// Step tables are printed as TSV with a header row or as a JSON array,
/// snapshots as a JSON document, and coverage as `key: value` lines.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails or a payload
/// cannot be serialised.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use percolate_cli::cli::{CommandOutput, CoverageReport, ExecutionSummary, render_summary};
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     output: CommandOutput::Coverage(CoverageReport {
///         edges_considered: 2,
///         universe: 4,
///         covered_nodes: 3,
///         edges_to_cover: 3,
///     }),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("covered nodes: 3"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match &summary.output {
        CommandOutput::Steps { table, format } => match format {
            TableFormat::Tsv => render_step_tsv(table, &mut writer),
            TableFormat::Json => write_json(&mut writer, table),
        },
        CommandOutput::Snapshot(partition) => write_json(&mut writer, partition),
        CommandOutput::Coverage(report) => {
            render_coverage(&summary.data_source, report, &mut writer)
        }
    }
}

fn render_step_tsv(table: &StepTable, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "{STEP_HEADER}")?;
    for record in table {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            record.edges_admitted,
            record.nodes_seen,
            record.subgraph_count,
            record.max_subgraph_size,
            record.relative_max_size,
        )?;
    }
    Ok(())
}

fn render_coverage(
    data_source: &str,
    report: &CoverageReport,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer, "data source: {data_source}")?;
    writeln!(writer, "edges considered: {}", report.edges_considered)?;
    writeln!(writer, "universe: {}", report.universe)?;
    writeln!(writer, "covered nodes: {}", report.covered_nodes)?;
    writeln!(writer, "edges to cover: {}", report.edges_to_cover)
}

fn write_json(writer: &mut impl Write, value: &impl serde::Serialize) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value).map_err(io::Error::from)?;
    writeln!(writer)
}
