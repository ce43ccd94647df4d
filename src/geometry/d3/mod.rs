//! Spatial primitives.

mod line;
mod plane;
mod polygon;
mod polyline;
mod ray;
mod segment;
mod triangle;

pub use line::Line3;
pub use plane::Plane;
pub use polygon::Polygon3;
pub use polyline::Polyline3;
pub use ray::Ray3;
pub use segment::Segment3;
pub use triangle::Triangle3;
