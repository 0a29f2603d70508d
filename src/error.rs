use thiserror::Error;

/// Top-level error type for polytrace.
#[derive(Debug, Error)]
pub enum PolytraceError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Operation(#[from] OperationError),
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

/// Errors raised while walking a segment graph.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no unvisited neighbor at node ({x}, {y}) after {step} steps")]
    Disconnected { x: f64, y: f64, step: usize },

    #[error("cycle did not close within {limit} steps")]
    IterationLimit { limit: usize },
}

/// Errors related to operation inputs.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl PolytraceError {
    /// Returns `true` for degenerate-geometry failures (zero-length vectors,
    /// coincident points where a direction is required).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Self::Geometry(GeometryError::Degenerate(_) | GeometryError::ZeroVector)
        )
    }

    /// Returns `true` when a graph walk ran out of candidates.
    #[must_use]
    pub fn is_disconnected(&self) -> bool {
        matches!(self, Self::Graph(_))
    }

    /// Returns `true` for rejected inputs.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Operation(OperationError::InvalidInput(_)))
    }
}

/// Convenience type alias for results using [`PolytraceError`].
pub type Result<T> = std::result::Result<T, PolytraceError>;
