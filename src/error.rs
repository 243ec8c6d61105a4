use thiserror::Error;

use crate::math::Vector3;

/// Errors raised by the vector algebra and the intersection kernel.
///
/// These are precondition violations, not geometric outcomes: a disjoint
/// or overlapping configuration is reported through the relation types,
/// never through this enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate line: both defining points are {point}")]
    DegenerateLine { point: Vector3 },

    #[error("degenerate plane: zero-length normal")]
    DegeneratePlane,

    #[error("invalid tolerance {0}: must be finite and non-negative")]
    InvalidTolerance(f64),

    #[error("ill-conditioned computation: {0}")]
    IllConditioned(&'static str),
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
