use crate::math::points::centroid;
use crate::math::{round_to, Angle, Point2, Tolerance, Vector2};

/// Indices of `points` in angular order around their centroid, measured
/// from the +x axis. Equal angles keep their input order.
pub(crate) fn angular_order(points: &[Point2], tol: Tolerance, counter_clockwise: bool) -> Vec<usize> {
    let Some(center) = centroid(points) else {
        return Vec::new();
    };
    let keys: Vec<f64> = points
        .iter()
        .map(|p| {
            let angle = Angle::signed_2d(&Vector2::x(), &(p - center)).normalized();
            round_to(angle.radians(), tol.position())
        })
        .collect();

    let mut order: Vec<usize> = (0..points.len()).collect();
    if counter_clockwise {
        order.sort_by(|&a, &b| keys[a].total_cmp(&keys[b]));
    } else {
        order.sort_by(|&a, &b| keys[b].total_cmp(&keys[a]));
    }
    order
}

/// Sorts points counter-clockwise around their centroid.
#[must_use]
pub fn sort_ccw(points: &[Point2], tol: Tolerance) -> Vec<Point2> {
    angular_order(points, tol, true).into_iter().map(|i| points[i]).collect()
}

/// Sorts points clockwise around their centroid.
#[must_use]
pub fn sort_cw(points: &[Point2], tol: Tolerance) -> Vec<Point2> {
    angular_order(points, tol, false).into_iter().map(|i| points[i]).collect()
}
