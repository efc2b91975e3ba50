//! Engine entry point tying the two computation modes together.
//!
//! A [`Percolation`] holds configuration only. Every call builds its own
//! disjoint-set state from the start of the edge stream and drops it
//! afterwards, so an engine can be shared freely and calls never interfere.

use tracing::{info, instrument};

use crate::{
    edge::{EdgeList, NodeLabel},
    partition::{Canvas, Partition, materialize},
    stats::{MaxSizeTracking, StepTable, accumulate_steps},
};

/// Configured percolation engine.
///
/// # Examples
/// ```
/// use percolate_core::{Edge, EdgeList, PercolationBuilder};
///
/// let edges = EdgeList::new(vec![
///     Edge::new("A", "B", 3.0),
///     Edge::new("B", "C", 2.0),
///     Edge::new("D", "E", 1.0),
/// ]);
/// let engine = PercolationBuilder::new().build()?;
///
/// let table = engine.steps(&edges);
/// assert_eq!(table.last().map(|step| step.relative_max_size), Some(0.6));
///
/// let partition = engine.snapshot(&edges, Some(2), None);
/// assert_eq!(partition.subgraph_count(), 1);
/// # Ok::<(), percolate_core::PercolateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Percolation {
    tracking: MaxSizeTracking,
    canvas: Canvas,
}

impl Percolation {
    pub(crate) const fn new(tracking: MaxSizeTracking, canvas: Canvas) -> Self {
        Self { tracking, canvas }
    }

    /// Returns the tracking strategy used by [`Self::steps`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_size_tracking(&self) -> MaxSizeTracking { self.tracking }

    /// Returns the canvas used by [`Self::snapshot`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn canvas(&self) -> &Canvas { &self.canvas }

    /// Computes the step table for the whole edge stream.
    ///
    /// `edges` must be sorted by non-increasing strength.
    #[instrument(name = "percolation.steps", skip_all, fields(edges = edges.len()))]
    pub fn steps<N: NodeLabel>(&self, edges: &EdgeList<N>) -> StepTable {
        let table = accumulate_steps(edges, self.tracking);
        if let Some(last) = table.last() {
            info!(
                nodes = last.nodes_seen,
                subgraphs = last.subgraph_count,
                relative_max_size = last.relative_max_size,
                "step table computed"
            );
        }
        table
    }

    /// Computes the partition after the first `prefix` edges.
    ///
    /// See [`materialize`] for the meaning of `prefix` and `universe`.
    #[instrument(name = "percolation.snapshot", skip_all, fields(edges = edges.len()))]
    pub fn snapshot<N: NodeLabel>(
        &self,
        edges: &EdgeList<N>,
        prefix: Option<usize>,
        universe: Option<&[N]>,
    ) -> Partition<N> {
        let partition = materialize(edges, prefix, universe, &self.canvas);
        info!(
            edges_admitted = partition.edges_admitted(),
            subgraphs = partition.subgraph_count(),
            "snapshot computed"
        );
        partition
    }
}
