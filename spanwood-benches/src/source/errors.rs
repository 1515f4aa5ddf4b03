//! Error types for synthetic benchmark graph generation.

use spanwood_core::MalformedGraph;

/// Errors that may occur while generating a synthetic benchmark graph.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested component count was zero.
    #[error("component count must be greater than zero")]
    ZeroComponents,
    /// The configured component count exceeded the available vertices.
    #[error("component count ({components}) must not exceed vertex count ({vertex_count})")]
    ComponentCountExceedsVertexCount {
        /// Number of components requested.
        components: usize,
        /// Number of vertices requested.
        vertex_count: usize,
    },
    /// A weight profile parameter was invalid.
    #[error("invalid weight parameter `{parameter}`")]
    InvalidWeightParameter {
        /// Name of the invalid parameter.
        parameter: &'static str,
    },
    /// The generated edges were rejected by the graph store.
    #[error("generated graph is malformed: {0}")]
    Graph(#[from] MalformedGraph),
}
