pub mod intersect_3d;
mod tolerance;
mod vector;

pub use tolerance::{Tolerance, TOLERANCE};
pub use vector::Vector3;

/// 2D vector type used by the small linear solves.
pub(crate) type Vector2 = nalgebra::Vector2<f64>;

/// 2x2 matrix type used by the small linear solves.
pub(crate) type Matrix2 = nalgebra::Matrix2<f64>;
