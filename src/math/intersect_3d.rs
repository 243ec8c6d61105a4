use crate::error::{GeometryError, Result};
use crate::geometry::{Line, Plane};

use super::{Matrix2, Tolerance, Vector2, Vector3};

/// The discriminant shared by every intersection predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum IntersectionKind {
    /// The primitives have no point in common.
    Disjoint = 0,
    /// The primitives meet in a single point (or a single line, for two planes).
    Unique = 1,
    /// One primitive lies in the other (collinear lines, line in plane,
    /// coincident planes).
    Overlap = 2,
}

impl IntersectionKind {
    /// Returns the numeric code: 0 = disjoint, 1 = unique, 2 = overlap.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Relationship between two lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinePairRelation {
    /// Lines are parallel but not collinear.
    Parallel { distance: f64 },
    /// Lines are neither parallel nor coplanar.
    Skew { distance: f64 },
    /// Lines cross at `point = l1.point_at(t1) ≈ l2.point_at(t2)`.
    Point { point: Vector3, t1: f64, t2: f64 },
    /// Lines are the same infinite line. `p1` and `p2` are the defining
    /// points of the first line.
    Collinear { p1: Vector3, p2: Vector3 },
}

impl LinePairRelation {
    #[must_use]
    pub fn kind(&self) -> IntersectionKind {
        match self {
            Self::Parallel { .. } | Self::Skew { .. } => IntersectionKind::Disjoint,
            Self::Point { .. } => IntersectionKind::Unique,
            Self::Collinear { .. } => IntersectionKind::Overlap,
        }
    }

    #[must_use]
    pub fn code(&self) -> u8 {
        self.kind().code()
    }
}

/// Relationship of a line with a plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinePlaneRelation {
    /// Line is parallel to the plane (does not intersect).
    Parallel { distance: f64 },
    /// Line intersects the plane at `point = line.point_at(t)`.
    Point { point: Vector3, t: f64 },
    /// Line lies entirely on the plane.
    OnPlane,
}

impl LinePlaneRelation {
    #[must_use]
    pub fn kind(&self) -> IntersectionKind {
        match self {
            Self::Parallel { .. } => IntersectionKind::Disjoint,
            Self::Point { .. } => IntersectionKind::Unique,
            Self::OnPlane => IntersectionKind::Overlap,
        }
    }

    #[must_use]
    pub fn code(&self) -> u8 {
        self.kind().code()
    }
}

/// Relationship between two planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlanePairRelation {
    /// Planes are parallel but not coincident.
    Parallel { distance: f64 },
    /// Planes cross along `line`; `line.b - line.a` is the unit direction
    /// `n1 × n2`.
    IntersectionLine { line: Line },
    /// Planes are the same (coincident).
    Coincident,
}

impl PlanePairRelation {
    #[must_use]
    pub fn kind(&self) -> IntersectionKind {
        match self {
            Self::Parallel { .. } => IntersectionKind::Disjoint,
            Self::IntersectionLine { .. } => IntersectionKind::Unique,
            Self::Coincident => IntersectionKind::Overlap,
        }
    }

    #[must_use]
    pub fn code(&self) -> u8 {
        self.kind().code()
    }
}

/// Computes the intersection of two lines with the default tolerance.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateLine`] if either line has coincident
/// defining points.
pub fn line_line_intersect(l1: &Line, l2: &Line) -> Result<LinePairRelation> {
    line_line_intersect_with_tolerance(l1, l2, Tolerance::default())
}

/// Computes the intersection of two lines.
///
/// Lines are parallel when the sine of the angle between their directions
/// is within `tol`; parallel lines are collinear when every defining point
/// lies within `tol` of the other line. Non-parallel lines whose separation
/// along the common normal exceeds `tol` are skew.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateLine`] if either line has coincident
/// defining points.
pub fn line_line_intersect_with_tolerance(
    l1: &Line,
    l2: &Line,
    tol: Tolerance,
) -> Result<LinePairRelation> {
    let u1 = l1.unit_direction(tol)?;
    let u2 = l2.unit_direction(tol)?;
    let w = l2.a - l1.a;

    let n = u1.cross(u2);
    let sin = n.norm();

    let relation = if tol.is_zero(sin) {
        // Largest offset of any defining point from the other line.
        let distance = [
            l1.distance_with_tolerance(l2.a, tol)?,
            l1.distance_with_tolerance(l2.b, tol)?,
            l2.distance_with_tolerance(l1.a, tol)?,
            l2.distance_with_tolerance(l1.b, tol)?,
        ]
        .into_iter()
        .fold(0.0, f64::max);
        if tol.is_zero(distance) {
            LinePairRelation::Collinear { p1: l1.a, p2: l1.b }
        } else {
            LinePairRelation::Parallel { distance }
        }
    } else {
        // Scalar triple product over |n|: separation along the common normal.
        let distance = w.dot(n).abs() / sin;
        if tol.is_zero(distance) {
            // l1.a + s1 * u1 = l2.a + s2 * u2, solved by crossing both sides
            // with u2 (resp. u1) and projecting onto n.
            let n_sq = sin * sin;
            let s1 = w.cross(u2).dot(n) / n_sq;
            let s2 = w.cross(u1).dot(n) / n_sq;
            LinePairRelation::Point {
                point: l1.a + u1 * s1,
                t1: s1 / l1.direction().norm(),
                t2: s2 / l2.direction().norm(),
            }
        } else {
            LinePairRelation::Skew { distance }
        }
    };

    tracing::trace!(?relation, "line-line classified");
    Ok(relation)
}

/// Computes the intersection of a line with a plane using the default tolerance.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateLine`] or
/// [`GeometryError::DegeneratePlane`] for degenerate inputs.
pub fn line_plane_intersect(line: &Line, plane: &Plane) -> Result<LinePlaneRelation> {
    line_plane_intersect_with_tolerance(line, plane, Tolerance::default())
}

/// Computes the intersection of a line with a plane.
///
/// The line is parallel when the sine of the angle between its direction and
/// the plane is within `tol`; a parallel line lies on the plane when both
/// defining points are within `tol` of it.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateLine`] or
/// [`GeometryError::DegeneratePlane`] for degenerate inputs.
pub fn line_plane_intersect_with_tolerance(
    line: &Line,
    plane: &Plane,
    tol: Tolerance,
) -> Result<LinePlaneRelation> {
    let u = line.unit_direction(tol)?;
    plane.validate(tol)?;
    let plane = plane.normalized()?;

    let relation = if tol.is_zero(plane.normal.dot(u)) {
        // Offset of the farther defining point.
        let distance = (plane.normal.dot(line.a) - plane.distance)
            .abs()
            .max((plane.normal.dot(line.b) - plane.distance).abs());
        if tol.is_zero(distance) {
            LinePlaneRelation::OnPlane
        } else {
            LinePlaneRelation::Parallel { distance }
        }
    } else {
        let dir = line.direction();
        let t = (plane.distance - plane.normal.dot(line.a)) / plane.normal.dot(dir);
        LinePlaneRelation::Point {
            point: line.point_at(t),
            t,
        }
    };

    tracing::trace!(?relation, "line-plane classified");
    Ok(relation)
}

/// Computes the intersection of two planes using the default tolerance.
///
/// # Errors
///
/// Returns [`GeometryError::DegeneratePlane`] if either normal is zero.
pub fn plane_plane_intersect(pn1: &Plane, pn2: &Plane) -> Result<PlanePairRelation> {
    plane_plane_intersect_with_tolerance(pn1, pn2, Tolerance::default())
}

/// Computes the intersection of two planes.
///
/// Planes are parallel when the sine of the angle between their normals is
/// within `tol`; parallel planes closer than `tol` coincide. Otherwise the
/// intersection line is returned with a unit direction `n1 × n2`.
///
/// # Errors
///
/// Returns [`GeometryError::DegeneratePlane`] if either normal is zero, or
/// [`GeometryError::IllConditioned`] if no point on the line can be solved for.
pub fn plane_plane_intersect_with_tolerance(
    pn1: &Plane,
    pn2: &Plane,
    tol: Tolerance,
) -> Result<PlanePairRelation> {
    pn1.validate(tol)?;
    pn2.validate(tol)?;
    let a = pn1.normalized()?;
    let b = pn2.normalized()?;

    let dir = a.normal.cross(b.normal);

    let relation = if tol.is_zero(dir.norm()) {
        // Normals are (anti-)parallel: bring b's offset into a's orientation.
        let offset = if a.normal.dot(b.normal) < 0.0 {
            -b.distance
        } else {
            b.distance
        };
        let distance = (offset - a.distance).abs();
        if tol.is_zero(distance) {
            PlanePairRelation::Coincident
        } else {
            PlanePairRelation::Parallel { distance }
        }
    } else {
        let origin = point_on_both_planes(&a, &b, dir)?;
        let line = Line::new(origin, origin + dir.normalize()?);
        PlanePairRelation::IntersectionLine { line }
    };

    tracing::trace!(?relation, "plane-plane classified");
    Ok(relation)
}

/// Solves `n1 · x = d1, n2 · x = d2` with the coordinate along the dominant
/// axis of `dir` fixed at zero. The 2x2 determinant on the remaining axes is
/// exactly that dominant component of `n1 × n2`.
fn point_on_both_planes(a: &Plane, b: &Plane, dir: Vector3) -> Result<Vector3> {
    let n1: nalgebra::Vector3<f64> = a.normal.into();
    let n2: nalgebra::Vector3<f64> = b.normal.into();
    let k = nalgebra::Vector3::<f64>::from(dir).iamax();
    let (i, j) = ((k + 1) % 3, (k + 2) % 3);

    let m = Matrix2::new(n1[i], n1[j], n2[i], n2[j]);
    let rhs = Vector2::new(a.distance, b.distance);
    let sol = m
        .lu()
        .solve(&rhs)
        .ok_or(GeometryError::IllConditioned("plane-plane system is singular"))?;

    let mut origin = nalgebra::Vector3::<f64>::zeros();
    origin[i] = sol[0];
    origin[j] = sol[1];
    Ok(origin.into())
}
