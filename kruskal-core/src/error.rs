//! Error types for the Kruskal core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

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

/// Errors returned while building graphs or computing spanning forests.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// A disjoint-set query referenced an element outside `0..vertex_count`.
    #[error("vertex {vertex} is out of range for {vertex_count} elements")]
    OutOfRange {
        /// The element that was requested.
        vertex: usize,
        /// The number of elements tracked by the structure.
        vertex_count: usize,
    },
    /// An edge endpoint fell outside `0..vertex_count`.
    #[error("invalid edge: {u} -- {v} (vertex_count is {vertex_count})")]
    InvalidEdge {
        /// First endpoint as supplied, widened so unsigned and signed input
        /// both fit.
        u: i128,
        /// Second endpoint as supplied.
        v: i128,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// Summing the accepted edge weights overflowed the weight type.
    #[error("total weight overflowed after {accepted} accepted edges")]
    WeightOverflow {
        /// Number of edges accepted before the overflow.
        accepted: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// A disjoint-set query referenced an element outside the structure.
        OutOfRange => OutOfRange { .. } => "MST_OUT_OF_RANGE",
        /// An edge endpoint fell outside the graph.
        InvalidEdge => InvalidEdge { .. } => "MST_INVALID_EDGE",
        /// Summing the accepted edge weights overflowed.
        WeightOverflow => WeightOverflow { .. } => "MST_WEIGHT_OVERFLOW",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MstError>;
