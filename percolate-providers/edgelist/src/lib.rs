//! Delimited text provider for strength-ordered edge lists.
//!
//! Reads `source, target, strength` rows into a [`percolate_core::EdgeList`]
//! without reordering them, plus one-label-per-line node lists used as the
//! node universe for snapshots.

mod errors;
mod format;
mod provider;

pub use crate::{
    errors::EdgeListError,
    format::{Delimiter, EdgeListFormat},
    provider::{EdgeListProvider, read_node_list},
};
