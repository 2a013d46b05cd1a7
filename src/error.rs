//! Error types for procedural planet generation

use std::path::PathBuf;

/// Errors that can occur during planet generation
#[derive(Debug, thiserror::Error)]
pub enum PlanetError {
    /// A vertex could not be projected onto the unit sphere (zero length or non-finite)
    #[error("degenerate vertex: cannot normalize a zero-length or non-finite point")]
    DegenerateVertex,
    /// A midpoint lookup referenced a vertex that does not exist
    #[error("vertex index {index} out of range (pool holds {len} vertices)")]
    VertexIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of vertices in the pool
        len: usize,
    },
    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Color gradient construction failed
    #[error("invalid color gradient: {0}")]
    InvalidGradient(String),
    /// A shader source file could not be read
    #[error("failed to read shader source '{}': {source}", .path.display())]
    ShaderSource {
        /// File that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for planet operations
pub type Result<T> = std::result::Result<T, PlanetError>;
