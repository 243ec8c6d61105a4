//! A small analytic-geometry kernel: a 3D vector type and intersection
//! predicates between infinite lines and planes.
//!
//! ```
//! use intersect3d::{line_plane_intersect, Line, LinePlaneRelation, Plane, Vector3};
//!
//! let line = Line::new(Vector3::new(0.0, 0.0, -1.0), Vector3::new(0.0, 0.0, 1.0));
//! let ground = Plane::new(Vector3::Z, 0.0);
//!
//! let relation = line_plane_intersect(&line, &ground)?;
//! assert_eq!(relation.code(), 1);
//! if let LinePlaneRelation::Point { point, .. } = relation {
//!     assert_eq!(point, Vector3::ZERO);
//! }
//! # Ok::<(), intersect3d::GeometryError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, Result};
pub use geometry::{Line, Plane, PointPlaneClassification};
pub use math::intersect_3d::{
    line_line_intersect, line_line_intersect_with_tolerance, line_plane_intersect,
    line_plane_intersect_with_tolerance, plane_plane_intersect,
    plane_plane_intersect_with_tolerance, IntersectionKind, LinePairRelation, LinePlaneRelation,
    PlanePairRelation,
};
pub use math::{Tolerance, Vector3, TOLERANCE};
