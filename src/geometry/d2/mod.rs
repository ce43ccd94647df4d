//! Planar primitives.

mod line;
mod polygon;
mod polyline;
mod ray;
mod segment;
mod triangle;

pub use line::Line2;
pub use polygon::Polygon2;
pub use polyline::Polyline2;
pub use ray::Ray2;
pub use segment::Segment2;
pub use triangle::Triangle2;
