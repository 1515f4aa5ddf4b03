//! Error types for the spanwood core library.
//!
//! Graph validation failures surface once, at load time, as
//! [`MalformedGraph`]. Engines never re-validate; the only engine that can
//! refuse an input is the Karger min-cut engine ([`CutError`]).

use std::fmt;

use thiserror::Error;

use crate::graph::{EdgeId, VertexId};

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

/// The edge list handed to [`crate::Graph::load`] does not describe a valid
/// weighted undirected graph.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MalformedGraph {
    /// An edge joined a vertex to itself.
    #[error("edge {edge} is a self-loop on vertex {vertex}")]
    SelfLoop {
        /// Input position of the offending edge.
        edge: EdgeId,
        /// The vertex referenced by both endpoints.
        vertex: VertexId,
    },
    /// An edge referenced a vertex id outside `[0, vertex_count)`.
    #[error("edge {edge} references vertex {vertex}, but vertex_count is {vertex_count}")]
    VertexOutOfRange {
        /// Input position of the offending edge.
        edge: EdgeId,
        /// The out-of-range vertex id.
        vertex: VertexId,
        /// The declared vertex count.
        vertex_count: usize,
    },
    /// An edge carried a negative weight.
    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight {
        /// Input position of the offending edge.
        edge: EdgeId,
        /// The rejected weight.
        weight: f64,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge {edge} has non-finite weight {weight}")]
    NonFiniteWeight {
        /// Input position of the offending edge.
        edge: EdgeId,
        /// The rejected weight.
        weight: f64,
    },
    /// The declared vertex count cannot be backed by an adjacency index.
    #[error("vertex count {vertex_count} is too large to index")]
    VertexCountTooLarge {
        /// The declared vertex count.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MalformedGraph`] variants.
    enum MalformedGraphCode for MalformedGraph {
        /// An edge joined a vertex to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An edge referenced a vertex id outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// An edge carried a negative weight.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// The declared vertex count cannot be indexed.
        VertexCountTooLarge => VertexCountTooLarge { .. } => "GRAPH_VERTEX_COUNT_TOO_LARGE",
    }
}

impl MalformedGraph {
    /// Returns the input position of the edge that failed validation, or
    /// `None` when the failure concerns the graph as a whole.
    #[must_use]
    pub const fn edge(&self) -> Option<EdgeId> {
        match self {
            Self::SelfLoop { edge, .. }
            | Self::VertexOutOfRange { edge, .. }
            | Self::NegativeWeight { edge, .. }
            | Self::NonFiniteWeight { edge, .. } => Some(*edge),
            Self::VertexCountTooLarge { .. } => None,
        }
    }
}

/// Errors returned by the Karger min-cut engine.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CutError {
    /// A cut needs two non-empty sides, so at least two vertices.
    #[error("a cut needs at least two vertices (got {vertex_count})")]
    TooFewVertices {
        /// The vertex count of the rejected graph.
        vertex_count: usize,
    },
    /// The trial count must be positive.
    #[error("karger trial count must be at least 1")]
    ZeroTrials,
}

define_error_codes! {
    /// Stable codes describing [`CutError`] variants.
    enum CutErrorCode for CutError {
        /// A cut needs at least two vertices.
        TooFewVertices => TooFewVertices { .. } => "CUT_TOO_FEW_VERTICES",
        /// The trial count must be positive.
        ZeroTrials => ZeroTrials => "CUT_ZERO_TRIALS",
    }
}

/// Errors surfaced by [`crate::runner::run`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RunError {
    /// The Karger engine rejected its input.
    #[error(transparent)]
    Cut(#[from] CutError),
}

define_error_codes! {
    /// Stable codes describing [`RunError`] variants.
    enum RunErrorCode for RunError {
        /// The Karger engine rejected its input.
        CutFailure => Cut { .. } => "RUN_CUT_FAILURE",
    }
}

impl RunError {
    /// Retrieve the inner [`CutErrorCode`] when the failure came from the
    /// Karger engine.
    #[must_use]
    pub const fn cut_code(&self) -> Option<CutErrorCode> {
        match self {
            Self::Cut(error) => Some(error.code()),
        }
    }
}

/// A string did not name a known [`crate::Algorithm`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error(
    "unknown algorithm `{name}` (expected one of kruskal, prim, boruvka, reverse-delete, karger)"
)]
pub struct UnknownAlgorithm {
    name: String,
}

impl UnknownAlgorithm {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the rejected name.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }
}
