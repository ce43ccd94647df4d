pub mod aabb;
pub mod angle;
pub mod classify;
pub mod intersect_2d;
pub mod intersect_3d;
pub mod points;
pub mod tolerance;
pub mod vector;

pub use aabb::{Aabb2, Aabb3};
pub use angle::Angle;
pub use classify::{Location, Orientation};
pub use tolerance::{almost_equals, round_to, AlmostEq, Tolerance};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 2D vector of length 1. Obtain through [`vector::unit2`] or [`vector::normalize2`].
pub type UnitVector2 = nalgebra::Unit<Vector2>;

/// 3D vector of length 1. Obtain through [`vector::unit3`] or [`vector::normalize3`].
pub type UnitVector3 = nalgebra::Unit<Vector3>;
