use crate::error::{GeometryError, Result};
use crate::math::{Tolerance, Vector3};

/// An infinite line through two distinct points `a` and `b`.
///
/// The parametric form is: `P(t) = a + t * (b - a)`. Nothing is checked at
/// construction; the intersection predicates reject a line whose points
/// coincide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a: Vector3,
    pub b: Vector3,
}

impl Line {
    /// Creates the line through `a` and `b`.
    #[must_use]
    pub fn new(a: Vector3, b: Vector3) -> Self {
        Self { a, b }
    }

    /// Returns the (non-normalized) direction `b - a`.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.b - self.a
    }

    /// Evaluates the line at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Vector3 {
        self.a + self.direction() * t
    }

    /// Checks that `a` and `b` are further apart than `tol`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if the two points coincide.
    pub fn validate(&self, tol: Tolerance) -> Result<()> {
        if tol.is_zero(self.direction().norm()) {
            tracing::debug!(point = %self.a, "rejecting line with coincident points");
            return Err(GeometryError::DegenerateLine { point: self.a });
        }
        Ok(())
    }

    /// Returns the unit direction of the line.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if the two points are within
    /// `tol` of each other.
    pub fn unit_direction(&self, tol: Tolerance) -> Result<Vector3> {
        self.validate(tol)?;
        self.direction()
            .normalize()
            .map_err(|_| GeometryError::DegenerateLine { point: self.a })
    }

    /// Returns the orthogonal projection of `p` onto the line.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if the line is degenerate.
    pub fn closest_point(&self, p: Vector3) -> Result<Vector3> {
        let u = self.unit_direction(Tolerance::default())?;
        Ok(self.a + u * (p - self.a).dot(u))
    }

    /// Euclidean distance from `p` to the line.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if the line is degenerate.
    pub fn distance_to_point(&self, p: Vector3) -> Result<f64> {
        self.distance_with_tolerance(p, Tolerance::default())
    }

    /// Returns `true` if `p` lies within `tol` of the line.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if the two points are within
    /// `tol` of each other.
    pub fn contains_point(&self, p: Vector3, tol: Tolerance) -> Result<bool> {
        Ok(tol.is_zero(self.distance_with_tolerance(p, tol)?))
    }

    pub(crate) fn distance_with_tolerance(&self, p: Vector3, tol: Tolerance) -> Result<f64> {
        let u = self.unit_direction(tol)?;
        Ok((p - self.a).cross(u).norm())
    }
}
