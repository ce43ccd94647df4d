//! Angular sorting and hulls of point sets.

mod concave;
mod convex;
mod fit;
mod sort;

pub use concave::{ConcaveHull2, ConcaveHull3};
pub use convex::{ConvexHull2, ConvexHull3};
pub use fit::best_fit_plane;
pub use sort::{sort_ccw, sort_cw};
