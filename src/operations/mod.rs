pub mod contains;
pub mod hull;
pub mod intersect;
pub mod overlap;
pub mod wkt;

pub use contains::{contains_2d, contains_3d};
pub use hull::{best_fit_plane, sort_ccw, sort_cw, ConcaveHull2, ConcaveHull3, ConvexHull2, ConvexHull3};
pub use intersect::{intersection_2d, intersection_3d, intersects_2d, intersects_3d, Intersection2, Intersection3};
pub use overlap::{overlap_2d, overlap_3d, overlaps_2d, overlaps_3d};
pub use wkt::ToWkt;
