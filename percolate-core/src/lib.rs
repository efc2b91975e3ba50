//! Percolate core library.
//!
//! Tracks how a weighted association network splits into connected
//! subgraphs as edges are admitted from strongest to weakest. Two modes share
//! one disjoint-set core:
//!
//! - [`accumulate_steps`] walks the whole stream and reports, per edge, the
//!   nodes seen, the live subgraph count and the largest subgraph.
//! - [`materialize`] admits a prefix and returns the concrete partition with
//!   per-subgraph edge membership and grid centers for rendering.
//!
//! Every entry point expects its [`EdgeList`] sorted by non-increasing
//! strength. The order is neither checked nor repaired; an unsorted stream
//! yields wrong results without any error.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod coverage;
mod edge;
mod error;
mod partition;
mod percolation;
mod stats;
mod union_find;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::PercolationBuilder,
    coverage::{covered_node_count, edges_to_cover},
    edge::{Edge, EdgeList, NodeLabel},
    error::{PercolateError, PercolateErrorCode, Result},
    partition::{
        Canvas, NodeAssignment, Partition, Point, Subgraph, grid_centers, grid_dimensions,
        materialize,
    },
    percolation::Percolation,
    stats::{MaxSizeTracking, StepAccumulator, StepRecord, StepTable, accumulate_steps},
    union_find::{SubgraphId, UnionFind, UnionOutcome},
};
