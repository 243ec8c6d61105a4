use crate::error::{GeometryError, Result};
use crate::math::{Tolerance, Vector3};

/// An infinite plane: the set of points `x` with `normal · x = distance`.
///
/// The normal need not be unit length; `distance` is then scaled by the
/// same factor. For a unit normal, `distance` is the signed distance from
/// the origin to the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vector3,
    pub distance: f64,
}

/// Which side of a plane a point falls on, as returned by
/// [`Plane::classify_point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointPlaneClassification {
    /// Signed distance above the tolerance.
    Front,
    /// Signed distance below minus the tolerance.
    Back,
    /// Signed distance within the tolerance of zero.
    On,
}

impl Plane {
    /// Creates the plane `normal · x = distance`.
    #[must_use]
    pub fn new(normal: Vector3, distance: f64) -> Self {
        Self { normal, distance }
    }

    /// Creates the plane through `point` with the given normal.
    #[must_use]
    pub fn from_point_normal(point: Vector3, normal: Vector3) -> Self {
        Self {
            normal,
            distance: normal.dot(point),
        }
    }

    /// Checks that the normal is longer than `tol`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegeneratePlane`] if the normal is zero.
    pub fn validate(&self, tol: Tolerance) -> Result<()> {
        if tol.is_zero(self.normal.norm()) {
            tracing::debug!(normal = %self.normal, "rejecting plane with zero normal");
            return Err(GeometryError::DegeneratePlane);
        }
        Ok(())
    }

    /// Returns the same plane with a unit normal and rescaled distance.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegeneratePlane`] if the normal is zero.
    pub fn normalized(&self) -> Result<Self> {
        let len = self.normal.norm();
        if len <= 0.0 {
            return Err(GeometryError::DegeneratePlane);
        }
        Ok(Self {
            normal: Vector3::new(
                self.normal.x / len,
                self.normal.y / len,
                self.normal.z / len,
            ),
            distance: self.distance / len,
        })
    }

    /// Euclidean distance from `p` to the plane, negative when `p` is
    /// behind the normal.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegeneratePlane`] if the normal is zero.
    pub fn signed_distance(&self, p: Vector3) -> Result<f64> {
        let unit = self.normalized()?;
        Ok(unit.normal.dot(p) - unit.distance)
    }

    /// Orthogonal projection of `p` onto the plane.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegeneratePlane`] if the normal is zero.
    pub fn project_point(&self, p: Vector3) -> Result<Vector3> {
        let unit = self.normalized()?;
        Ok(p - unit.normal * (unit.normal.dot(p) - unit.distance))
    }

    /// Returns `true` if `p` lies within `tol` of the plane.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegeneratePlane`] if the normal is zero.
    pub fn contains_point(&self, p: Vector3, tol: Tolerance) -> Result<bool> {
        Ok(tol.is_zero(self.signed_distance(p)?))
    }

    /// Classifies a point relative to the plane.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegeneratePlane`] if the normal is zero.
    pub fn classify_point(&self, p: Vector3, tol: Tolerance) -> Result<PointPlaneClassification> {
        let dist = self.signed_distance(p)?;
        Ok(if tol.is_zero(dist) {
            PointPlaneClassification::On
        } else if dist > 0.0 {
            PointPlaneClassification::Front
        } else {
            PointPlaneClassification::Back
        })
    }
}
