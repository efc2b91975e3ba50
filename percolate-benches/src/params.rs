//! Benchmark parameter types.

use std::fmt;

/// Parameters for a step-table or snapshot benchmark run.
#[derive(Clone, Debug)]
pub struct NetworkBenchParams {
    /// Number of distinct node labels.
    pub node_count: usize,
    /// Number of edges in the stream.
    pub edge_count: usize,
}

impl fmt::Display for NetworkBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},e={}", self.node_count, self.edge_count)
    }
}
