pub mod d2;
pub mod d3;
pub mod shape;

pub use d2::{Line2, Polygon2, Polyline2, Ray2, Segment2, Triangle2};
pub use d3::{Line3, Plane, Polygon3, Polyline3, Ray3, Segment3, Triangle3};
pub use shape::{Geometry2, Geometry3};
