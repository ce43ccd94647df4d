use tracing::debug;

use crate::error::Result;
use crate::geometry::{Geometry3, Polygon2, Polygon3, Triangle3};
use crate::math::classify::orientation2;
use crate::math::{round_to, AlmostEq, Orientation, Point2, Point3, Tolerance};

use super::fit::best_fit_plane;

/// Indices of the convex hull vertices of `points`, counter-clockwise,
/// starting from the lowest point (lowest `y`, then lowest `x`).
///
/// Graham scan: the remaining points are ordered by the angle they make at
/// the start point, nearer first on equal angles, and a point is popped
/// while it does not make a strict left turn with its neighbours.
pub(crate) fn graham_indices(points: &[Point2], tol: Tolerance) -> Vec<usize> {
    let mut unique: Vec<usize> = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if !unique.iter().any(|&j| points[j].almost_eq(p, tol)) {
            unique.push(i);
        }
    }
    let lowest = |&i: &usize| (tol.round(points[i].y), tol.round(points[i].x));
    let Some(start) = unique
        .iter()
        .copied()
        .min_by(|a, b| {
            let (ka, kb) = (lowest(a), lowest(b));
            ka.0.total_cmp(&kb.0).then(ka.1.total_cmp(&kb.1))
        })
    else {
        return Vec::new();
    };

    let origin = points[start];
    let angle_key = |i: usize| {
        let d = points[i] - origin;
        (round_to(d.y.atan2(d.x), tol.direction()), d.norm())
    };
    let mut rest: Vec<usize> = unique.into_iter().filter(|&i| i != start).collect();
    rest.sort_by(|&a, &b| {
        let (ka, kb) = (angle_key(a), angle_key(b));
        ka.0.total_cmp(&kb.0).then(ka.1.total_cmp(&kb.1))
    });

    let mut hull = vec![start];
    for i in rest {
        while hull.len() >= 2
            && orientation2(
                &points[hull[hull.len() - 2]],
                &points[hull[hull.len() - 1]],
                &points[i],
                tol,
            ) != Orientation::CounterClockwise
        {
            hull.pop();
        }
        hull.push(i);
    }
    hull
}

/// Convex hull of a planar point set.
#[derive(Debug)]
pub struct ConvexHull2 {
    points: Vec<Point2>,
    tol: Tolerance,
}

impl ConvexHull2 {
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

    /// Executes the hull computation.
    ///
    /// The hull is counter-clockwise, every vertex is an input point and no
    /// three consecutive vertices are collinear.
    ///
    /// # Errors
    ///
    /// Returns a `GeometryError` when fewer than three non-collinear points
    /// remain.
    pub fn execute(&self) -> Result<Polygon2> {
        debug!(points = self.points.len(), "convex hull 2d");
        let hull: Vec<Point2> = graham_indices(&self.points, self.tol)
            .into_iter()
            .map(|i| self.points[i])
            .collect();
        let polygon = Polygon2::new_with(&hull, self.tol)?;
        debug!(vertices = polygon.len(), "convex hull 2d done");
        Ok(polygon)
    }
}

/// Convex hull of a roughly planar point cloud.
///
/// The cloud is projected into its best-fit plane, hulled there, and the
/// hull vertices are taken back from the input.
#[derive(Debug)]
pub struct ConvexHull3 {
    points: Vec<Point3>,
    tol: Tolerance,
}

impl ConvexHull3 {
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

    /// Executes the hull computation: a triangle for three hull vertices,
    /// a polygon otherwise.
    ///
    /// # Errors
    ///
    /// Returns a `GeometryError` when the points do not span a plane or the
    /// hull vertices are not coplanar.
    pub fn execute(&self) -> Result<Geometry3> {
        debug!(points = self.points.len(), "convex hull 3d");
        let plane = best_fit_plane(&self.points, self.tol)?;
        let flat: Vec<Point2> = self.points.iter().map(|p| plane.project_into(p)).collect();
        let hull: Vec<Point3> = graham_indices(&flat, self.tol)
            .into_iter()
            .map(|i| self.points[i])
            .collect();
        let shape = area_from_vertices(&hull, self.tol)?;
        debug!(kind = shape.kind(), "convex hull 3d done");
        Ok(shape)
    }
}

/// A triangle for three vertices, a polygon for more.
pub(crate) fn area_from_vertices(vertices: &[Point3], tol: Tolerance) -> Result<Geometry3> {
    match vertices {
        [a, b, c] => Ok(Geometry3::Triangle(Triangle3::new_with(*a, *b, *c, tol)?)),
        _ => Ok(Geometry3::Polygon(Polygon3::new_with(vertices, tol)?)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn drops_interior_and_edge_points() {
        let pts = vec![
            p(1.0, 1.0),
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 2.0),
            p(0.5, 1.5),
            p(0.0, 2.0),
            p(2.0, 1.0),
            p(0.0, 0.0),
        ];
        let hull = ConvexHull2::new(pts).execute().unwrap();
        assert_eq!(hull.vertices(), &[p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]);
    }

    #[test]
    fn small_triangle_hull() {
        let pts = vec![p(0.0, 0.0), p(0.02, 0.0), p(0.0, 0.02), p(0.005, 0.005)];
        let hull = ConvexHull2::new(pts).execute().unwrap();
        assert_eq!(hull.vertices(), &[p(0.0, 0.0), p(0.02, 0.0), p(0.0, 0.02)]);
    }

    #[test]
    fn collinear_input_has_no_hull() {
        let pts = vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)];
        assert!(ConvexHull2::new(pts).execute().is_err());
        assert!(ConvexHull2::new(Vec::new()).execute().is_err());
    }

    #[test]
    fn spatial_hull_lifts_back_input_points() {
        let q = |x: f64, y: f64| Point3::new(x, y, 5.0);
        let pts = vec![q(0.0, 0.0), q(3.0, 0.0), q(1.0, 1.0), q(0.0, 3.0)];
        match ConvexHull3::new(pts).execute().unwrap() {
            Geometry3::Triangle(t) => {
                assert!(t.vertices().iter().all(|v| v.z == 5.0));
                assert!((t.area() - 4.5).abs() < 1e-9);
            }
            other => panic!("expected triangle, got {other:?}"),
        }
    }
}
