use crate::error::{GeometryError, Result};

/// Default epsilon for every "is zero" test in the kernel.
pub const TOLERANCE: f64 = 1e-10;

/// The epsilon policy shared by all intersection predicates.
///
/// One value serves two roles: it bounds the sine of the angle between two
/// directions in parallelism tests, and it bounds Euclidean distances in
/// coplanarity and containment tests. Results for configurations whose
/// measured quantity sits within a few ulps of `eps` may flip between
/// neighbouring classifications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    eps: f64,
}

impl Tolerance {
    /// Creates a tolerance with the given epsilon.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidTolerance`] if `eps` is negative,
    /// NaN or infinite.
    pub fn new(eps: f64) -> Result<Self> {
        if !eps.is_finite() || eps < 0.0 {
            return Err(GeometryError::InvalidTolerance(eps));
        }
        Ok(Self { eps })
    }

    /// Returns the epsilon value.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns `true` if `value` is within epsilon of zero.
    #[must_use]
    pub fn is_zero(&self, value: f64) -> bool {
        value.abs() <= self.eps
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { eps: TOLERANCE }
    }
}
