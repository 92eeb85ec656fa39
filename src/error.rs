use thiserror::Error;

/// Top-level error type for corridor path extraction.
#[derive(Debug, Error)]
pub enum CorridorError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Errors related to geometric construction and computation.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to corridor traversal input.
#[derive(Debug, Error, PartialEq)]
pub enum NavigationError {
    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),

    #[error("tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
}

/// Convenience type alias for results using [`CorridorError`].
pub type Result<T> = std::result::Result<T, CorridorError>;
