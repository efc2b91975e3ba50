//! Error types for the percolate core library.
//!
//! Defines the error enum exposed by the public API and a convenient result
//! alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by the percolation engine.
///
/// Nothing in the engine fails on edge content: self loops, duplicate edges,
/// empty input and oversize prefixes are all accepted. The variants here cover
/// invalid layout configuration and misuse of retired subgraph ids.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PercolateError {
    /// Canvas dimensions must be finite and strictly positive.
    #[error("canvas must have finite positive dimensions (got {width} x {height})")]
    InvalidCanvas {
        /// Requested canvas width.
        width: f64,
        /// Requested canvas height.
        height: f64,
    },
    /// The subgraph id was absorbed by a larger subgraph and is no longer live.
    #[error("subgraph {id} has been absorbed and is no longer live")]
    RetiredSubgraph {
        /// The retired subgraph id.
        id: usize,
    },
    /// The subgraph id was never issued by this structure.
    #[error("subgraph {id} was never issued (only {issued} ids exist)")]
    UnknownSubgraph {
        /// The unknown subgraph id.
        id: usize,
        /// Number of ids issued so far.
        issued: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`PercolateError`] variants.
    enum PercolateErrorCode for PercolateError {
        /// Canvas dimensions must be finite and strictly positive.
        InvalidCanvas => InvalidCanvas { .. } => "PERCOLATE_INVALID_CANVAS",
        /// The subgraph id is no longer live.
        RetiredSubgraph => RetiredSubgraph { .. } => "PERCOLATE_RETIRED_SUBGRAPH",
        /// The subgraph id was never issued.
        UnknownSubgraph => UnknownSubgraph { .. } => "PERCOLATE_UNKNOWN_SUBGRAPH",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, PercolateError>;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::canvas(
        PercolateError::InvalidCanvas { width: 0.0, height: 1.0 },
        "PERCOLATE_INVALID_CANVAS"
    )]
    #[case::retired(PercolateError::RetiredSubgraph { id: 3 }, "PERCOLATE_RETIRED_SUBGRAPH")]
    #[case::unknown(
        PercolateError::UnknownSubgraph { id: 9, issued: 2 },
        "PERCOLATE_UNKNOWN_SUBGRAPH"
    )]
    fn codes_are_stable(#[case] error: PercolateError, #[case] expected: &str) {
        assert_eq!(error.code().as_str(), expected);
        assert_eq!(error.code().to_string(), expected);
    }

    #[test]
    fn retired_message_names_the_id() {
        let error = PercolateError::RetiredSubgraph { id: 7 };
        assert_eq!(
            error.to_string(),
            "subgraph 7 has been absorbed and is no longer live"
        );
    }
}
