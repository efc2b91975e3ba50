//! Benchmark setup error type.

use percolate_core::PercolateError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// Engine configuration was rejected.
    #[error("engine configuration failed: {0}")]
    Engine(#[from] PercolateError),
}
