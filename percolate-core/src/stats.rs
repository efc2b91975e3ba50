//! Full-history step statistics.
//!
//! Walks a strength-ordered edge stream once and records, after every edge,
//! the global subgraph structure: nodes seen, live subgraph count and the
//! size of the largest subgraph. The resulting [`StepTable`] is the
//! exploration table from which a user picks a cut point.

use tracing::{debug, instrument};

use crate::{
    edge::{Edge, EdgeList, NodeLabel},
    union_find::{UnionFind, UnionOutcome},
};

/// How the running largest-subgraph size is maintained.
///
/// Subgraphs only grow and are never split, so the largest size can only
/// rise, and only to the size produced by a merge. `Incremental` uses that to
/// update the maximum in O(1) per edge. `Scan` recomputes it from every live
/// subgraph after each edge, O(nodes seen) per edge; it exists as a
/// cross-check for the incremental path.
///
/// # Examples
/// ```
/// use percolate_core::MaxSizeTracking;
///
/// assert_eq!(MaxSizeTracking::default(), MaxSizeTracking::Incremental);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MaxSizeTracking {
    /// Track the maximum from merge outcomes.
    #[default]
    Incremental,
    /// Recompute the maximum by scanning live subgraphs.
    Scan,
}

/// Global structure after a number of edges has been admitted.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepRecord {
    /// Edges admitted so far (1-based position in the stream).
    pub edges_admitted: usize,
    /// Distinct nodes touched by the admitted edges.
    pub nodes_seen: usize,
    /// Number of live subgraphs.
    pub subgraph_count: usize,
    /// Size of the largest live subgraph.
    pub max_subgraph_size: usize,
    /// `max_subgraph_size / nodes_seen`, in `(0, 1]`.
    pub relative_max_size: f64,
}

/// Step records in stream order, one per admitted edge.
///
/// # Examples
/// ```
/// use percolate_core::{Edge, EdgeList, MaxSizeTracking, accumulate_steps};
///
/// let edges = EdgeList::new(vec![Edge::new("a", "b", 2.0), Edge::new("c", "d", 1.0)]);
/// let table = accumulate_steps(&edges, MaxSizeTracking::Incremental);
/// assert_eq!(table.len(), 2);
/// let last = table.at(2).expect("two edges were admitted");
/// assert_eq!(last.subgraph_count, 2);
/// assert_eq!(last.relative_max_size, 0.5);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StepTable(Vec<StepRecord>);

impl StepTable {
    /// Returns all records in stream order.
    #[must_use]
    #[rustfmt::skip]
    pub fn records(&self) -> &[StepRecord] { &self.0 }

    /// Returns the number of records (equal to the number of edges walked).
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns whether the table holds no records.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Returns the record after `edges_admitted` edges, if that many were walked.
    #[must_use]
    pub fn at(&self, edges_admitted: usize) -> Option<&StepRecord> {
        self.0.get(edges_admitted.checked_sub(1)?)
    }

    /// Returns the record after the final edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn last(&self) -> Option<&StepRecord> { self.0.last() }

    /// Returns an iterator over the records.
    #[rustfmt::skip]
    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> { self.0.iter() }

    /// Consumes the table and returns the records.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_inner(self) -> Vec<StepRecord> { self.0 }
}

impl<'a> IntoIterator for &'a StepTable {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Streaming builder for a [`StepTable`].
///
/// Owns the disjoint-set state for one pass over an edge stream. Feed edges
/// strongest first with [`StepAccumulator::admit`].
///
/// # Examples
/// ```
/// use percolate_core::{Edge, MaxSizeTracking, StepAccumulator};
///
/// let mut accumulator = StepAccumulator::new(MaxSizeTracking::Scan);
/// let record = accumulator.admit(&Edge::new(1u32, 2u32, 0.9));
/// assert_eq!(record.nodes_seen, 2);
/// assert_eq!(accumulator.finish().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct StepAccumulator<N> {
    union_find: UnionFind<N>,
    tracking: MaxSizeTracking,
    max_size: usize,
    records: Vec<StepRecord>,
}

impl<N: NodeLabel> StepAccumulator<N> {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new(tracking: MaxSizeTracking) -> Self {
        Self::with_capacity(tracking, 0)
    }

    /// Creates an empty accumulator sized for `edges` admissions.
    #[must_use]
    pub fn with_capacity(tracking: MaxSizeTracking, edges: usize) -> Self {
        Self {
            union_find: UnionFind::new(),
            tracking,
            max_size: 0,
            records: Vec::with_capacity(edges),
        }
    }

    /// Admits the next edge and returns the resulting step record.
    pub fn admit(&mut self, edge: &Edge<N>) -> StepRecord {
        let outcome = self.union_find.union(edge.source(), edge.target());
        self.max_size = match self.tracking {
            MaxSizeTracking::Incremental => {
                let candidate = match outcome {
                    UnionOutcome::Merged { size, .. } => size,
                    UnionOutcome::Unchanged { .. } => 1,
                };
                self.max_size.max(candidate)
            }
            MaxSizeTracking::Scan => self
                .union_find
                .live_subgraphs()
                .map(|(_, size)| size)
                .max()
                .unwrap_or(0),
        };

        let nodes_seen = self.union_find.seen_node_count();
        let record = StepRecord {
            edges_admitted: self.records.len() + 1,
            nodes_seen,
            subgraph_count: self.union_find.live_subgraph_count(),
            max_subgraph_size: self.max_size,
            relative_max_size: self.max_size as f64 / nodes_seen as f64,
        };
        self.records.push(record);
        record
    }

    /// Returns the disjoint-set state built so far.
    #[must_use]
    #[rustfmt::skip]
    pub const fn union_find(&self) -> &UnionFind<N> { &self.union_find }

    /// Consumes the accumulator and returns the step table.
    #[must_use]
    pub fn finish(self) -> StepTable {
        StepTable(self.records)
    }
}

/// Builds the full step table for `edges`.
///
/// `edges` must be sorted by non-increasing strength; see
/// [`EdgeList`] for the consequences of violating that.
#[instrument(
    name = "percolate.steps",
    skip_all,
    fields(edges = edges.len(), tracking = ?tracking),
)]
pub fn accumulate_steps<N: NodeLabel>(edges: &EdgeList<N>, tracking: MaxSizeTracking) -> StepTable {
    let mut accumulator = StepAccumulator::with_capacity(tracking, edges.len());
    for edge in edges {
        accumulator.admit(edge);
    }
    let table = accumulator.finish();
    if let Some(last) = table.last() {
        debug!(
            nodes_seen = last.nodes_seen,
            subgraphs = last.subgraph_count,
            max_subgraph_size = last.max_subgraph_size,
            "step table complete"
        );
    }
    table
}
