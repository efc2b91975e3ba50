//! Breadth-first search oracle for connectivity.
//!
//! Builds an adjacency list from the admitted edges and labels components
//! by flood fill. Deliberately independent of the disjoint-set code.

use std::collections::{HashMap, VecDeque};

use crate::Edge;

/// Connected components of the nodes touched by a set of edges.
pub(super) struct ComponentOracle {
    component: HashMap<u32, usize>,
    sizes: Vec<usize>,
}

impl ComponentOracle {
    /// Labels the components induced by `edges`.
    pub(super) fn from_edges(edges: &[Edge<u32>]) -> Self {
        let mut adjacency: HashMap<u32, Vec<u32>> = HashMap::new();
        let mut order = Vec::new();
        for edge in edges {
            for node in [*edge.source(), *edge.target()] {
                adjacency.entry(node).or_insert_with(|| {
                    order.push(node);
                    Vec::new()
                });
            }
            if let Some(neighbours) = adjacency.get_mut(edge.source()) {
                neighbours.push(*edge.target());
            }
            if let Some(neighbours) = adjacency.get_mut(edge.target()) {
                neighbours.push(*edge.source());
            }
        }

        let mut component = HashMap::new();
        let mut sizes = Vec::new();
        for start in order {
            if component.contains_key(&start) {
                continue;
            }
            let label = sizes.len();
            let mut size = 0;
            let mut queue = VecDeque::from([start]);
            component.insert(start, label);
            while let Some(node) = queue.pop_front() {
                size += 1;
                for &next in adjacency.get(&node).map_or(&[][..], Vec::as_slice) {
                    if !component.contains_key(&next) {
                        component.insert(next, label);
                        queue.push_back(next);
                    }
                }
            }
            sizes.push(size);
        }

        Self { component, sizes }
    }

    /// Returns the component label of `node`, if it was touched.
    pub(super) fn component_of(&self, node: u32) -> Option<usize> {
        self.component.get(&node).copied()
    }

    /// Returns the number of touched nodes.
    pub(super) fn node_count(&self) -> usize {
        self.component.len()
    }

    /// Returns the number of components.
    pub(super) fn component_count(&self) -> usize {
        self.sizes.len()
    }

    /// Returns the size of the largest component, or zero without nodes.
    pub(super) fn max_component_size(&self) -> usize {
        self.sizes.iter().copied().max().unwrap_or(0)
    }
}
