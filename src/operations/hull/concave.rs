use tracing::debug;

use crate::error::Result;
use crate::geometry::{Geometry3, Polygon2};
use crate::math::{AlmostEq, Point2, Point3, Tolerance};

use super::convex::area_from_vertices;
use super::fit::best_fit_plane;
use super::sort::angular_order;

/// Angular order around the centroid with repeated points dropped.
fn star_indices(points: &[Point2], tol: Tolerance) -> Vec<usize> {
    let mut kept: Vec<usize> = Vec::with_capacity(points.len());
    for i in angular_order(points, tol, true) {
        if !kept.iter().any(|&j| points[j].almost_eq(&points[i], tol)) {
            kept.push(i);
        }
    }
    kept
}

/// Simple polygon through every input point, in counter-clockwise order
/// around the centroid.
///
/// This is the star-shaped outline of the set rather than a tight
/// alpha-shape: interior points become reflex vertices.
#[derive(Debug)]
pub struct ConcaveHull2 {
    points: Vec<Point2>,
    tol: Tolerance,
}

impl ConcaveHull2 {
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self {
            points,
            tol: Tolerance::default(),
        }
    }

    #[must_use]
    pub fn with_tolerance(mut self, tol: Tolerance) -> Self {
        self.tol = tol;
        self
    }

    /// # Errors
    ///
    /// Returns a `GeometryError` when fewer than three non-collinear points
    /// remain.
    pub fn execute(&self) -> Result<Polygon2> {
        debug!(points = self.points.len(), "concave hull 2d");
        let outline: Vec<Point2> = star_indices(&self.points, self.tol)
            .into_iter()
            .map(|i| self.points[i])
            .collect();
        let polygon = Polygon2::new_with(&outline, self.tol)?;
        debug!(vertices = polygon.len(), "concave hull 2d done");
        Ok(polygon)
    }
}

/// Spatial counterpart of [`ConcaveHull2`], solved in the best-fit plane.
#[derive(Debug)]
pub struct ConcaveHull3 {
    points: Vec<Point3>,
    tol: Tolerance,
}

impl ConcaveHull3 {
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self {
            points,
            tol: Tolerance::default(),
        }
    }

    #[must_use]
    pub fn with_tolerance(mut self, tol: Tolerance) -> Self {
        self.tol = tol;
        self
    }

    /// # Errors
    ///
    /// Returns a `GeometryError` when the points do not span a plane or the
    /// outline vertices are not coplanar.
    pub fn execute(&self) -> Result<Geometry3> {
        debug!(points = self.points.len(), "concave hull 3d");
        let plane = best_fit_plane(&self.points, self.tol)?;
        let flat: Vec<Point2> = self.points.iter().map(|p| plane.project_into(p)).collect();
        let outline: Vec<Point3> = star_indices(&flat, self.tol)
            .into_iter()
            .map(|i| self.points[i])
            .collect();
        let shape = area_from_vertices(&outline, self.tol)?;
        debug!(kind = shape.kind(), "concave hull 3d done");
        Ok(shape)
    }
}
