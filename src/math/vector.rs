use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{GeometryError, Result};

use super::Tolerance;

/// A 3-component vector of `f64`, used both as a point and as a direction.
///
/// Equality (`==`) is exact, component by component. Use
/// [`approx_eq`](Self::approx_eq) for a tolerance-aware comparison.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self::splat(0.0);
    /// Unit vector along +X.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along +Y.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along +Z.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from its three components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all three components equal to `s`.
    #[must_use]
    pub const fn splat(s: f64) -> Self {
        Self { x: s, y: s, z: s }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Component-wise product.
    #[must_use]
    pub fn multiply(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Multiplies every component by `s`.
    #[must_use]
    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - other.y * self.z,
            self.z * other.x - other.z * self.x,
            self.x * other.y - other.x * self.y,
        )
    }

    #[must_use]
    pub fn norm_squared(self) -> f64 {
        self.dot(self)
    }

    /// Largest absolute component.
    #[must_use]
    pub fn amax(self) -> f64 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    /// Euclidean length, computed on the vector rescaled by [`amax`](Self::amax)
    /// so that large finite components do not overflow.
    #[must_use]
    pub fn norm(self) -> f64 {
        let m = self.amax();
        if m <= 0.0 {
            return 0.0;
        }
        let scaled = Self::new(self.x / m, self.y / m, self.z / m);
        m * scaled.norm_squared().sqrt()
    }

    /// Returns the unit vector pointing the same way as `self`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the vector has zero length.
    pub fn normalize(self) -> Result<Self> {
        let len = self.norm();
        if len <= 0.0 {
            return Err(GeometryError::ZeroVector);
        }
        Ok(Self::new(self.x / len, self.y / len, self.z / len))
    }

    /// Returns `true` if every component is within `tol` of zero.
    #[must_use]
    pub fn is_zero(self, tol: Tolerance) -> bool {
        tol.is_zero(self.x) && tol.is_zero(self.y) && tol.is_zero(self.z)
    }

    /// Tolerance-aware comparison: every component of `self - other` is
    /// within `tol` of zero.
    #[must_use]
    pub fn approx_eq(self, other: Self, tol: Tolerance) -> bool {
        self.subtract(other).is_zero(tol)
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul for Vector3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Point3<f64>> for Vector3 {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Vector3> for nalgebra::Point3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Point3::new(v.x, v.y, v.z)
    }
}
