//! Point-list utilities shared by constructors, hulls and containment.

use nalgebra::Point;

use super::{AlmostEq, Tolerance};

/// Arithmetic mean of a point list, or `None` when empty.
#[must_use]
pub fn centroid<const D: usize>(points: &[Point<f64, D>]) -> Option<Point<f64, D>> {
    let (first, rest) = points.split_first()?;
    let mut sum = first.coords;
    for p in rest {
        sum += p.coords;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    Some(Point::from(sum / n))
}

/// Distance from `b` to the line through `a` and `c`.
///
/// When `a` and `c` coincide this is the distance from `b` to `a`.
#[must_use]
pub fn distance_to_chord<const D: usize>(
    a: &Point<f64, D>,
    b: &Point<f64, D>,
    c: &Point<f64, D>,
) -> f64 {
    let ac = c - a;
    let ab = b - a;
    let len = ac.norm();
    if len == 0.0 {
        return ab.norm();
    }
    let along = ab.dot(&ac) / len;
    (ab - ac * (along / len)).norm()
}

/// Whether `a`, `b`, `c` lie on one line within tolerance.
///
/// A triple containing two coincident points counts as collinear.
#[must_use]
pub fn is_collinear<const D: usize>(
    a: &Point<f64, D>,
    b: &Point<f64, D>,
    c: &Point<f64, D>,
    tol: Tolerance,
) -> bool {
    if a.almost_eq(b, tol) || b.almost_eq(c, tol) || a.almost_eq(c, tol) {
        return true;
    }
    tol.is_zero(distance_to_chord(a, b, c))
}

/// Removes consecutive duplicates. For a `closed` cycle the last point is
/// also dropped when it repeats the first.
#[must_use]
pub fn dedup_consecutive<const D: usize>(
    points: &[Point<f64, D>],
    closed: bool,
    tol: Tolerance,
) -> Vec<Point<f64, D>> {
    let mut out: Vec<Point<f64, D>> = Vec::with_capacity(points.len());
    for p in points {
        if out.last().is_none_or(|last| !last.almost_eq(p, tol)) {
            out.push(*p);
        }
    }
    if closed {
        while out.len() > 1 && out[0].almost_eq(&out[out.len() - 1], tol) {
            out.pop();
        }
    }
    out
}

/// Removes every repeated point, keeping first occurrences in order.
#[must_use]
pub fn dedup_all<const D: usize>(points: &[Point<f64, D>], tol: Tolerance) -> Vec<Point<f64, D>> {
    let mut out: Vec<Point<f64, D>> = Vec::with_capacity(points.len());
    for p in points {
        if !out.iter().any(|q| q.almost_eq(p, tol)) {
            out.push(*p);
        }
    }
    out
}

/// Removes duplicates and every vertex that is collinear with its neighbours.
///
/// For an open chain the two end points are kept. For a `closed` cycle the
/// wrap-around neighbours are considered as well.
#[must_use]
pub fn remove_collinear<const D: usize>(
    points: &[Point<f64, D>],
    closed: bool,
    tol: Tolerance,
) -> Vec<Point<f64, D>> {
    let mut pts = dedup_consecutive(points, closed, tol);
    loop {
        let n = pts.len();
        if n < 3 {
            break;
        }
        let range = if closed { 0..n } else { 1..n - 1 };
        let hit = range.into_iter().find(|&i| {
            let prev = &pts[(i + n - 1) % n];
            let next = &pts[(i + 1) % n];
            is_collinear(prev, &pts[i], next, tol)
        });
        match hit {
            Some(i) => {
                pts.remove(i);
                // Removing a spike can leave its two neighbours adjacent and equal.
                pts = dedup_consecutive(&pts, closed, tol);
            }
            None => break,
        }
    }
    pts
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point2, Point3};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn centroid_of_square() {
        let c = centroid(&[p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]).unwrap();
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 1.0);
        assert!(centroid::<2>(&[]).is_none());
    }

    #[test]
    fn chord_distance() {
        assert_relative_eq!(distance_to_chord(&p(0.0, 0.0), &p(1.0, 1.0), &p(2.0, 0.0)), 1.0);
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(0.0, 3.0, 4.0);
        assert_relative_eq!(distance_to_chord(&a, &b, &a), 5.0);
    }

    #[test]
    fn collinear_detection() {
        let tol = Tolerance::default();
        assert!(is_collinear(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0), tol));
        assert!(is_collinear(&p(0.0, 0.0), &p(1.0, 0.0004), &p(2.0, 0.0), tol));
        assert!(!is_collinear(&p(0.0, 0.0), &p(1.0, 0.1), &p(2.0, 0.0), tol));
        assert!(is_collinear(&p(0.0, 0.0), &p(0.0, 0.0), &p(2.0, 5.0), tol));
    }

    #[test]
    fn dedup_closed_cycle() {
        let tol = Tolerance::default();
        let pts = [p(0.0, 0.0), p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)];
        assert_eq!(dedup_consecutive(&pts, true, tol).len(), 3);
        assert_eq!(dedup_consecutive(&pts, false, tol).len(), 4);
    }

    #[test]
    fn dedup_all_keeps_first_occurrence() {
        let tol = Tolerance::default();
        let pts = [p(1.0, 0.0), p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0002)];
        let out = dedup_all(&pts, tol);
        assert_eq!(out, vec![p(1.0, 0.0), p(0.0, 0.0)]);
    }

    #[test]
    fn collinear_removal_closed() {
        let tol = Tolerance::default();
        let pts = [
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 1.0),
            p(2.0, 2.0),
            p(0.0, 2.0),
            p(0.0, 1.0),
        ];
        let out = remove_collinear(&pts, true, tol);
        assert_eq!(out, vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]);
    }

    #[test]
    fn collinear_removal_open_keeps_ends() {
        let tol = Tolerance::default();
        let pts = [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(2.0, 1.0)];
        let out = remove_collinear(&pts, false, tol);
        assert_eq!(out, vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 1.0)]);

        let line = [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)];
        assert_eq!(remove_collinear(&line, false, tol), vec![p(0.0, 0.0), p(2.0, 0.0)]);
    }

    #[test]
    fn collinear_removal_collapses_flat_ring() {
        let tol = Tolerance::default();
        let pts = [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)];
        assert!(remove_collinear(&pts, true, tol).len() < 3);
    }
}
