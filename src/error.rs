use thiserror::Error;

/// Top-level error type for the Geoform kernel.
#[derive(Debug, Error)]
pub enum GeoformError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Construction-time invalidity of a geometric value.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("vector length {length} is not 1")]
    NotUnitLength { length: f64 },

    #[error("points coincide: {0}")]
    CoincidentPoints(String),

    #[error("points are collinear: {0}")]
    Collinear(String),

    #[error("points are not coplanar: {0}")]
    NonCoplanar(String),

    #[error("{kind} needs at least {min} vertices, got {got}")]
    TooFewVertices {
        kind: &'static str,
        min: usize,
        got: usize,
    },

    #[error("lines do not intersect: {0}")]
    NotIntersecting(String),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised by algorithms over valid geometry.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

/// Convenience type alias for results using [`GeoformError`].
pub type Result<T> = std::result::Result<T, GeoformError>;
