//! Weighted association edges and the ordered edge stream consumed by the
//! engine.
//!
//! # Ordering precondition
//!
//! Every operation in this crate assumes its [`EdgeList`] is already sorted by
//! **non-increasing strength**. Nothing sorts or validates the order: feeding
//! an unsorted stream does not fail, it silently produces step statistics and
//! partitions for the wrong thresholds. [`EdgeList::is_sorted_by_strength`]
//! exists so callers can check and report the precondition themselves.

use std::hash::Hash;

/// Marker for types usable as node labels.
///
/// Labels are opaque: the engine only hashes, compares and clones them.
/// Strings and integers both qualify.
pub trait NodeLabel: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> NodeLabel for T {}

/// An association between two nodes with a strength (higher is stronger).
///
/// # Examples
/// ```
/// use percolate_core::Edge;
///
/// let edge = Edge::new("a", "b", 0.75);
/// assert_eq!(*edge.source(), "a");
/// assert_eq!(*edge.target(), "b");
/// assert!(!edge.is_self_loop());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<N> {
    source: N,
    target: N,
    strength: f64,
}

impl<N> Edge<N> {
    /// Creates a new edge.
    #[must_use]
    pub const fn new(source: N, target: N, strength: f64) -> Self {
        Self {
            source,
            target,
            strength,
        }
    }

    /// Returns the source node label.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> &N { &self.source }

    /// Returns the target node label.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> &N { &self.target }

    /// Returns the association strength.
    #[must_use]
    #[rustfmt::skip]
    pub const fn strength(&self) -> f64 { self.strength }
}

impl<N: PartialEq> Edge<N> {
    /// Returns `true` when both endpoints carry the same label.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Ordered sequence of edges, strongest first.
///
/// Wraps a `Vec<Edge<N>>` without touching its order; see the module
/// documentation for the ordering precondition.
///
/// # Examples
/// ```
/// use percolate_core::{Edge, EdgeList};
///
/// let edges = EdgeList::new(vec![
///     Edge::new("a", "b", 3.0),
///     Edge::new("b", "c", 2.0),
/// ]);
/// assert_eq!(edges.len(), 2);
/// assert!(edges.is_sorted_by_strength());
/// assert_eq!(edges.prefix(Some(10)).len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EdgeList<N>(Vec<Edge<N>>);

impl<N> Default for EdgeList<N> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<N> EdgeList<N> {
    /// Wraps `edges` as-is. The caller guarantees non-increasing strength.
    #[must_use]
    pub const fn new(edges: Vec<Edge<N>>) -> Self {
        Self(edges)
    }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns whether the list contains no edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Returns an iterator over the edges in stream order.
    #[rustfmt::skip]
    pub fn iter(&self) -> std::slice::Iter<'_, Edge<N>> { self.0.iter() }

    /// Returns the edges as a slice.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_slice(&self) -> &[Edge<N>] { &self.0 }

    /// Consumes the list and returns the underlying edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_inner(self) -> Vec<Edge<N>> { self.0 }

    /// Returns the first `len` edges, or all of them when `len` is `None`.
    ///
    /// A length beyond the end is clamped rather than rejected.
    #[must_use]
    pub fn prefix(&self, len: Option<usize>) -> &[Edge<N>] {
        let end = clamp_prefix(len, self.0.len());
        &self.0[..end]
    }

    /// Returns `true` when strengths never increase along the list.
    ///
    /// Diagnostic only; the engine never calls it. `NaN` strengths compare
    /// via [`f64::total_cmp`].
    #[must_use]
    pub fn is_sorted_by_strength(&self) -> bool {
        self.0
            .windows(2)
            .all(|pair| pair[0].strength.total_cmp(&pair[1].strength).is_ge())
    }
}

pub(crate) fn clamp_prefix(len: Option<usize>, available: usize) -> usize {
    len.map_or(available, |requested| requested.min(available))
}

impl<N> From<Vec<Edge<N>>> for EdgeList<N> {
    fn from(edges: Vec<Edge<N>>) -> Self {
        Self::new(edges)
    }
}

impl<N> FromIterator<Edge<N>> for EdgeList<N> {
    fn from_iter<I: IntoIterator<Item = Edge<N>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<N> IntoIterator for EdgeList<N> {
    type Item = Edge<N>;
    type IntoIter = std::vec::IntoIter<Edge<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a EdgeList<N> {
    type Item = &'a Edge<N>;
    type IntoIter = std::slice::Iter<'a, Edge<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
