use thiserror::Error;

/// Top-level error type for route geometry and map editing.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to chaining path segments.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("no straight or arc segment to continue from")]
    UnsupportedPredecessor,
}

/// Errors related to the route map graph.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`RouteError`].
pub type Result<T> = std::result::Result<T, RouteError>;
