//! Node coverage of edge subsets.
//!
//! Visualisations rarely need the whole edge stream: once the strongest
//! edges touch every node of the universe, weaker edges add no new nodes.
//! These helpers count distinct endpoints and find that cut-off. They do not
//! use the disjoint-set structure.

use std::collections::HashSet;

use crate::edge::{Edge, NodeLabel};

/// Counts the distinct nodes touched by `edges`, capped at `universe_size`.
///
/// A subset touching more labels than the declared universe is not an error;
/// the result is simply capped.
///
/// # Examples
/// ```
/// use percolate_core::{Edge, covered_node_count};
///
/// let edges = [Edge::new("a", "b", 2.0), Edge::new("b", "c", 1.0)];
/// assert_eq!(covered_node_count(&edges, 10), 3);
/// assert_eq!(covered_node_count(&edges, 2), 2);
/// ```
#[must_use]
pub fn covered_node_count<N: NodeLabel>(edges: &[Edge<N>], universe_size: usize) -> usize {
    let mut seen: HashSet<&N> = HashSet::new();
    for edge in edges {
        seen.insert(edge.source());
        seen.insert(edge.target());
        if seen.len() >= universe_size {
            return universe_size;
        }
    }
    seen.len()
}

/// Returns the shortest prefix length of `edges` that touches
/// `universe_size` distinct nodes.
///
/// Returns `0` for an empty universe and `edges.len()` when the edges never
/// reach full coverage.
///
/// # Examples
/// ```
/// use percolate_core::{Edge, edges_to_cover};
///
/// let edges = [
///     Edge::new("a", "b", 3.0),
///     Edge::new("a", "c", 2.0),
///     Edge::new("b", "c", 1.0),
/// ];
/// assert_eq!(edges_to_cover(&edges, 3), 2);
/// assert_eq!(edges_to_cover(&edges, 5), 3);
/// ```
#[must_use]
pub fn edges_to_cover<N: NodeLabel>(edges: &[Edge<N>], universe_size: usize) -> usize {
    if universe_size == 0 {
        return 0;
    }
    let mut seen: HashSet<&N> = HashSet::new();
    for (index, edge) in edges.iter().enumerate() {
        seen.insert(edge.source());
        seen.insert(edge.target());
        if seen.len() >= universe_size {
            return index + 1;
        }
    }
    edges.len()
}
