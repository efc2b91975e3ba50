use std::io;

use thiserror::Error;

/// Errors raised while reading edge or node lists.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// Reading from the underlying source failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// A row had fewer than three fields.
    #[error("line {line}: missing {field} field")]
    MissingField {
        /// 1-based line number.
        line: usize,
        /// Name of the first missing field.
        field: &'static str,
    },
    /// A node label was empty after trimming.
    #[error("line {line}: {field} label is empty")]
    EmptyLabel {
        /// 1-based line number.
        line: usize,
        /// Which endpoint was empty.
        field: &'static str,
    },
    /// The strength column did not parse as a number.
    #[error("line {line}: strength `{value}` is not a number")]
    InvalidStrength {
        /// 1-based line number.
        line: usize,
        /// Raw strength text.
        value: String,
    },
    /// The strength parsed but is NaN or infinite.
    #[error("line {line}: strength must be finite")]
    NonFiniteStrength {
        /// 1-based line number.
        line: usize,
    },
}

impl EdgeListError {
    /// Returns the stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "EDGE_LIST_IO",
            Self::MissingField { .. } => "EDGE_LIST_MISSING_FIELD",
            Self::EmptyLabel { .. } => "EDGE_LIST_EMPTY_LABEL",
            Self::InvalidStrength { .. } => "EDGE_LIST_INVALID_STRENGTH",
            Self::NonFiniteStrength { .. } => "EDGE_LIST_NON_FINITE_STRENGTH",
        }
    }
}
