//! Strategy builders for percolation property tests.
//!
//! Generates small edge streams over integer labels with non-increasing
//! strengths. Small label ranges produce plenty of self loops, duplicate
//! edges and merges of already-connected nodes.

use proptest::prelude::*;

use crate::{Edge, EdgeList};

/// Largest label drawn for generated nodes.
const MAX_LABEL: u32 = 24;
/// Longest generated edge stream.
const MAX_EDGES: usize = 64;

/// Generates a strength-ordered edge stream.
///
/// Strengths are derived from a sorted list of small integers so ties are
/// common, then reversed into non-increasing order.
pub(super) fn edge_stream() -> impl Strategy<Value = EdgeList<u32>> {
    (1..=MAX_LABEL).prop_flat_map(|labels| {
        prop::collection::vec((0..labels, 0..labels, 0u8..8), 0..=MAX_EDGES).prop_map(
            |mut raw| {
                raw.sort_by(|left, right| right.2.cmp(&left.2));
                raw.into_iter()
                    .map(|(source, target, strength)| {
                        Edge::new(source, target, f64::from(strength))
                    })
                    .collect()
            },
        )
    })
}

/// Generates a stream together with a prefix length that may exceed it.
pub(super) fn stream_with_prefix() -> impl Strategy<Value = (EdgeList<u32>, usize)> {
    edge_stream().prop_flat_map(|edges| {
        let upper = edges.len() + 2;
        (Just(edges), 0..=upper)
    })
}
