//! Single-snapshot partition materialisation.
//!
//! Admits a prefix of the strength-ordered edge stream, then reads the
//! disjoint-set state back out as a concrete partition: which subgraph every
//! touched node belongs to, which admitted edges fall inside each subgraph,
//! and a grid center per subgraph for the renderer.
//!
//! Subgraphs are listed in order of first appearance when walking nodes in
//! first-seen order. Within one snapshot that order, the ids and the centers
//! are deterministic; ids are not comparable across snapshots.

mod layout;

use std::collections::HashMap;

use tracing::{Span, debug, field, instrument};

use crate::{
    edge::{EdgeList, NodeLabel, clamp_prefix},
    union_find::{SubgraphId, UnionFind},
};

pub use self::layout::{Canvas, Point, grid_centers, grid_dimensions};

/// A node and the subgraph it belongs to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeAssignment<N> {
    /// The node label.
    pub node: N,
    /// The subgraph holding the node.
    pub subgraph: SubgraphId,
}

/// One connected subgraph of a snapshot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Subgraph<N> {
    id: SubgraphId,
    nodes: Vec<N>,
    edges: Vec<usize>,
    center: Point,
}

impl<N> Subgraph<N> {
    /// Returns the subgraph id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> SubgraphId { self.id }

    /// Returns the member nodes in first-seen order.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[N] { &self.nodes }

    /// Returns the stream positions of the admitted edges inside this subgraph.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[usize] { &self.edges }

    /// Returns the grid center assigned to this subgraph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn center(&self) -> Point { self.center }

    /// Returns the number of member nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn size(&self) -> usize { self.nodes.len() }
}

/// Concrete partition of the nodes touched by an edge prefix.
///
/// # Examples
/// ```
/// use percolate_core::{Canvas, Edge, EdgeList, materialize};
///
/// let edges = EdgeList::new(vec![
///     Edge::new("a", "b", 3.0),
///     Edge::new("c", "d", 2.0),
///     Edge::new("b", "c", 1.0),
/// ]);
/// let partition = materialize(&edges, Some(2), None, &Canvas::default());
/// assert_eq!(partition.edges_admitted(), 2);
/// assert_eq!(partition.subgraph_count(), 2);
/// assert_eq!(partition.subgraph_of(&"b"), partition.subgraph_of(&"a"));
/// assert_ne!(partition.subgraph_of(&"c"), partition.subgraph_of(&"a"));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Partition<N> {
    edges_admitted: usize,
    assignments: Vec<NodeAssignment<N>>,
    subgraphs: Vec<Subgraph<N>>,
}

impl<N> Partition<N> {
    /// Returns how many edges were admitted to build the partition.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges_admitted(&self) -> usize { self.edges_admitted }

    /// Returns every node with its subgraph, in first-seen order.
    #[must_use]
    #[rustfmt::skip]
    pub fn assignments(&self) -> &[NodeAssignment<N>] { &self.assignments }

    /// Returns the subgraphs in first-appearance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn subgraphs(&self) -> &[Subgraph<N>] { &self.subgraphs }

    /// Returns the number of subgraphs.
    #[must_use]
    #[rustfmt::skip]
    pub fn subgraph_count(&self) -> usize { self.subgraphs.len() }

    /// Returns the number of nodes in the partition.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.assignments.len() }

    /// Returns the subgraph with the given id.
    #[must_use]
    pub fn subgraph(&self, id: SubgraphId) -> Option<&Subgraph<N>> {
        self.subgraphs.iter().find(|subgraph| subgraph.id == id)
    }
}

impl<N: NodeLabel> Partition<N> {
    /// Returns the subgraph holding `node`, if the node is part of the partition.
    #[must_use]
    pub fn subgraph_of(&self, node: &N) -> Option<SubgraphId> {
        self.assignments
            .iter()
            .find(|assignment| assignment.node == *node)
            .map(|assignment| assignment.subgraph)
    }

    /// Returns the node to subgraph mapping as a hash map.
    #[must_use]
    pub fn assignment_map(&self) -> HashMap<&N, SubgraphId> {
        self.assignments
            .iter()
            .map(|assignment| (&assignment.node, assignment.subgraph))
            .collect()
    }
}

/// Builds the partition produced by the first `prefix` edges.
///
/// `prefix` of `None` admits every edge and a prefix beyond the end is
/// clamped. When `universe` is given, its nodes that no admitted edge touches
/// are added afterwards as singleton subgraphs. `edges` must be sorted by
/// non-increasing strength.
#[instrument(
    name = "percolate.snapshot",
    skip_all,
    fields(edges = edges.len(), prefix = field::Empty, subgraphs = field::Empty),
)]
pub fn materialize<N: NodeLabel>(
    edges: &EdgeList<N>,
    prefix: Option<usize>,
    universe: Option<&[N]>,
    canvas: &Canvas,
) -> Partition<N> {
    let admitted = edges.prefix(prefix);
    let span = Span::current();
    span.record("prefix", clamp_prefix(prefix, edges.len()));

    let capacity = universe.map_or(admitted.len(), <[N]>::len);
    let mut union_find = UnionFind::with_capacity(capacity);
    for edge in admitted {
        union_find.union(edge.source(), edge.target());
    }
    let touched = union_find.seen_node_count();
    for node in universe.unwrap_or_default() {
        union_find.find_or_create(node);
    }

    let mut positions: HashMap<SubgraphId, usize> = HashMap::new();
    let mut groups: Vec<(SubgraphId, Vec<N>, Vec<usize>)> = Vec::new();
    let mut assignments = Vec::with_capacity(union_find.seen_node_count());
    for slot in 0..union_find.seen_node_count() {
        let id = union_find.find_slot(slot);
        let node = union_find.nodes()[slot].clone();
        let position = *positions.entry(id).or_insert_with(|| {
            groups.push((id, Vec::new(), Vec::new()));
            groups.len() - 1
        });
        groups[position].1.push(node.clone());
        assignments.push(NodeAssignment { node, subgraph: id });
    }

    for (index, edge) in admitted.iter().enumerate() {
        let id = union_find.find_or_create(edge.source());
        if let Some(&position) = positions.get(&id) {
            groups[position].2.push(index);
        }
    }

    let centers = grid_centers(groups.len(), canvas);
    let subgraphs: Vec<_> = groups
        .into_iter()
        .zip(centers)
        .map(|((id, nodes, member_edges), center)| Subgraph {
            id,
            nodes,
            edges: member_edges,
            center,
        })
        .collect();

    span.record("subgraphs", subgraphs.len());
    debug!(
        nodes = assignments.len(),
        isolated = assignments.len() - touched,
        "snapshot materialised"
    );

    Partition {
        edges_admitted: admitted.len(),
        assignments,
        subgraphs,
    }
}
