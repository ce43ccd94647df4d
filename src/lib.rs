//! Planar and spatial computational geometry.
//!
//! Every comparison runs through one decimal-rounding [`Tolerance`]. Shapes
//! are immutable values validated at construction; pairwise queries go
//! through the closed [`Geometry2`] and [`Geometry3`] sum types.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeoformError, GeometryError, OperationError, Result};
pub use geometry::{Geometry2, Geometry3};
pub use math::{AlmostEq, Tolerance};
pub use operations::{Intersection2, Intersection3, ToWkt};
