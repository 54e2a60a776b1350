use crate::geometry::Point2;
use thiserror::Error;

/// Errors surfaced by construction operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConstructionError {
    /// A postulate argument is not in the accessible point set.
    #[error("Inaccessible point: ({}, {})", .0.x, .0.y)]
    InaccessiblePoint(Point2),

    /// Unsupported primitive kind or malformed input.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ConstructionError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// The offending point, if this is an accessibility failure.
    pub fn point(&self) -> Option<Point2> {
        match self {
            Self::InaccessiblePoint(p) => Some(*p),
            Self::Configuration(_) => None,
        }
    }
}

/// Result type for construction operations.
pub type ConstructionResult<T> = Result<T, ConstructionError>;
