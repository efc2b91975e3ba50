//! Growable disjoint-set structure keyed by opaque node labels.
//!
//! Nodes are interned into a dense arena in first-seen order; `parent` and
//! `size` are parallel vectors indexed by that arena position, so parent
//! links are plain indices and no ownership cycles arise. A subgraph is
//! identified by the arena index of its root. Because indices are handed out
//! once and a root that has been absorbed never becomes a root again, a
//! retired [`SubgraphId`] is never reused.
//!
//! Merges use union by size (the first argument absorbs on ties) and lookups
//! compress paths, giving near-constant amortised cost over an edge stream.

use std::{collections::HashMap, fmt};

use crate::{
    Result,
    edge::NodeLabel,
    error::PercolateError,
};

/// Identifier of a subgraph within one [`UnionFind`].
///
/// Ids are only meaningful for the structure (or result) that issued them and
/// are not stable across separate computations.
///
/// # Examples
/// ```
/// use percolate_core::UnionFind;
///
/// let mut union_find = UnionFind::new();
/// let id = union_find.find_or_create(&"a");
/// assert_eq!(id.get(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SubgraphId(usize);

impl SubgraphId {
    /// Creates an identifier from a raw index.
    #[must_use]
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for SubgraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structural effect of a single [`UnionFind::union`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnionOutcome {
    /// Both endpoints were already in the same subgraph.
    Unchanged {
        /// The subgraph holding both endpoints.
        subgraph: SubgraphId,
    },
    /// Two subgraphs were merged.
    Merged {
        /// The surviving subgraph.
        absorbing: SubgraphId,
        /// The subgraph that was absorbed and retired.
        absorbed: SubgraphId,
        /// Size of the surviving subgraph after the merge.
        size: usize,
    },
}

impl UnionOutcome {
    /// Returns the subgraph that holds both endpoints after the call.
    #[must_use]
    pub const fn subgraph(self) -> SubgraphId {
        match self {
            Self::Unchanged { subgraph } => subgraph,
            Self::Merged { absorbing, .. } => absorbing,
        }
    }

    /// Returns `true` when the call merged two subgraphs.
    #[must_use]
    pub const fn is_merge(self) -> bool {
        matches!(self, Self::Merged { .. })
    }
}

/// Disjoint-set structure over a lazily discovered node universe.
///
/// # Examples
/// ```
/// use percolate_core::{UnionFind, UnionOutcome};
///
/// let mut union_find = UnionFind::new();
/// let outcome = union_find.union(&"a", &"b");
/// assert!(outcome.is_merge());
/// assert_eq!(union_find.seen_node_count(), 2);
/// assert_eq!(union_find.live_subgraph_count(), 1);
///
/// let again = union_find.union(&"b", &"a");
/// assert!(matches!(again, UnionOutcome::Unchanged { .. }));
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind<N> {
    index: HashMap<N, usize>,
    labels: Vec<N>,
    parent: Vec<usize>,
    size: Vec<usize>,
    live: usize,
}

impl<N: NodeLabel> Default for UnionFind<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeLabel> UnionFind<N> {
    /// Creates an empty structure.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty structure with room for `nodes` labels.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            index: HashMap::with_capacity(nodes),
            labels: Vec::with_capacity(nodes),
            parent: Vec::with_capacity(nodes),
            size: Vec::with_capacity(nodes),
            live: 0,
        }
    }

    /// Returns the subgraph containing `node`, creating a singleton subgraph
    /// first if the node has not been seen.
    pub fn find_or_create(&mut self, node: &N) -> SubgraphId {
        let slot = self.intern(node);
        SubgraphId(self.root(slot))
    }

    /// Returns the subgraph containing `node` without creating it.
    pub fn find(&mut self, node: &N) -> Option<SubgraphId> {
        let slot = *self.index.get(node)?;
        Some(SubgraphId(self.root(slot)))
    }

    /// Merges the subgraphs containing `left` and `right`.
    ///
    /// Unseen endpoints are created first, `left` before `right`. The larger
    /// subgraph absorbs the smaller one; on equal sizes `left`'s subgraph
    /// survives. A self loop or an already-connected pair reports
    /// [`UnionOutcome::Unchanged`].
    pub fn union(&mut self, left: &N, right: &N) -> UnionOutcome {
        let left_root = self.find_or_create(left).0;
        let right_root = self.find_or_create(right).0;
        if left_root == right_root {
            return UnionOutcome::Unchanged {
                subgraph: SubgraphId(left_root),
            };
        }

        let (absorbing, absorbed) = if self.size[left_root] >= self.size[right_root] {
            (left_root, right_root)
        } else {
            (right_root, left_root)
        };
        self.parent[absorbed] = absorbing;
        self.size[absorbing] += self.size[absorbed];
        self.live -= 1;

        UnionOutcome::Merged {
            absorbing: SubgraphId(absorbing),
            absorbed: SubgraphId(absorbed),
            size: self.size[absorbing],
        }
    }

    /// Returns the size of a live subgraph.
    ///
    /// # Errors
    /// Returns [`PercolateError::RetiredSubgraph`] when `id` has been absorbed
    /// and [`PercolateError::UnknownSubgraph`] when it was never issued.
    pub fn subgraph_size(&self, id: SubgraphId) -> Result<usize> {
        let raw = id.get();
        match self.parent.get(raw) {
            None => Err(PercolateError::UnknownSubgraph {
                id: raw,
                issued: self.parent.len(),
            }),
            Some(&parent) if parent != raw => Err(PercolateError::RetiredSubgraph { id: raw }),
            Some(_) => Ok(self.size[raw]),
        }
    }

    /// Returns the number of live subgraphs.
    #[must_use]
    #[rustfmt::skip]
    pub const fn live_subgraph_count(&self) -> usize { self.live }

    /// Returns the number of distinct nodes seen so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn seen_node_count(&self) -> usize { self.labels.len() }

    /// Returns the seen node labels in first-seen order.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[N] { &self.labels }

    /// Iterates over live subgraphs and their sizes in id order.
    ///
    /// This scans the whole arena and costs O(seen nodes).
    pub fn live_subgraphs(&self) -> impl Iterator<Item = (SubgraphId, usize)> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(slot, &parent)| slot == parent)
            .map(|(slot, _)| (SubgraphId(slot), self.size[slot]))
    }

    /// Resolves the subgraph of the node at arena position `slot`.
    pub(crate) fn find_slot(&mut self, slot: usize) -> SubgraphId {
        SubgraphId(self.root(slot))
    }

    fn intern(&mut self, node: &N) -> usize {
        if let Some(&slot) = self.index.get(node) {
            return slot;
        }
        let slot = self.labels.len();
        self.index.insert(node.clone(), slot);
        self.labels.push(node.clone());
        self.parent.push(slot);
        self.size.push(1);
        self.live += 1;
        slot
    }

    fn root(&mut self, mut slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[slot] != root {
            let next = self.parent[slot];
            self.parent[slot] = root;
            slot = next;
        }

        root
    }
}
