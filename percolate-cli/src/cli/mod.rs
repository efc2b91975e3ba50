//! Command-line interface orchestration for percolate.
//!
//! Loads a strength-ordered edge list from delimited text and runs one of
//! the engine's modes: the full step table, a single snapshot partition, or
//! the node coverage report.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, CommandOutput, CoverageCommand, CoverageReport, DelimiterArg,
    ExecutionSummary, InputArgs, SnapshotCommand, StepsCommand, TableFormat, TrackingArg,
    run_cli,
};
pub use render::render_summary;

#[cfg(test)]
mod tests;
