use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::geometry::Plane;
use crate::math::points::{centroid, dedup_consecutive};
use crate::math::{Point3, Tolerance, Vector3};

/// Approximate plane through a point cloud.
///
/// Each run of three consecutive points (cyclically) contributes its unit
/// normal, flipped to agree with the first contribution; the average is the
/// plane normal and the centroid its origin. Repeated consecutive points
/// and collinear runs are skipped.
///
/// # Errors
///
/// Returns `GeometryError::Collinear` when no run of three points spans a
/// plane.
pub fn best_fit_plane(points: &[Point3], tol: Tolerance) -> Result<Plane> {
    let pts = dedup_consecutive(points, true, tol);
    let n = pts.len();
    let mut sum = Vector3::zeros();
    let mut reference: Option<Vector3> = None;

    for i in 0..n {
        let (a, b, c) = (&pts[i], &pts[(i + 1) % n], &pts[(i + 2) % n]);
        let normal = (b - a).cross(&(c - a));
        let norm = normal.norm();
        if tol.dir_is_zero(norm) {
            trace!(i, "skipping degenerate run");
            continue;
        }
        let mut unit = normal / norm;
        match reference {
            Some(r) if unit.dot(&r) < 0.0 => unit = -unit,
            Some(_) => {}
            None => reference = Some(unit),
        }
        sum += unit;
    }

    let origin = centroid(&pts).ok_or(GeometryError::TooFewVertices {
        kind: "point cloud",
        min: 3,
        got: 0,
    })?;
    if reference.is_none() {
        return Err(GeometryError::Collinear("point cloud".into()).into());
    }
    Plane::from_normal(origin, sum)
}
