use super::vector::perp_product;
use super::{Point2, Tolerance, Vector2};

/// Parametric 2D line-line intersection.
///
/// Given lines `o1 + t * d1` and `o2 + u * d2`, returns `(t, u)` if not
/// parallel. Directions are expected to be unit length so that the
/// parallelism test runs at the directional precision.
#[must_use]
pub fn line_line_intersect_2d(
    o1: &Point2,
    d1: &Vector2,
    o2: &Point2,
    d2: &Vector2,
    tol: Tolerance,
) -> Option<(f64, f64)> {
    let cross = perp_product(d1, d2);
    if tol.dir_is_zero(cross) {
        return None;
    }
    let w = o2 - o1;
    let t = perp_product(&w, d2) / cross;
    let u = perp_product(&w, d1) / cross;
    Some((t, u))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn line_line_perpendicular() {
        let p1 = Point2::new(0.0, 0.0);
        let d1 = Vector2::new(1.0, 0.0);
        let p2 = Point2::new(0.5, -1.0);
        let d2 = Vector2::new(0.0, 1.0);
        let (t, u) = line_line_intersect_2d(&p1, &d1, &p2, &d2, Tolerance::default()).unwrap();
        assert_relative_eq!(t, 0.5);
        assert_relative_eq!(u, 1.0);
    }

    #[test]
    fn line_line_parallel_returns_none() {
        let p1 = Point2::new(0.0, 0.0);
        let d1 = Vector2::new(1.0, 0.0);
        let p2 = Point2::new(0.0, 1.0);
        let d2 = Vector2::new(-1.0, 0.0);
        assert!(line_line_intersect_2d(&p1, &d1, &p2, &d2, Tolerance::default()).is_none());
    }

    #[test]
    fn diagonal_crossing_point() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let o1 = Point2::new(0.0, 0.0);
        let d1 = Vector2::new(s, s);
        let o2 = Point2::new(0.0, 2.0);
        let d2 = Vector2::new(s, -s);
        let (t, _) = line_line_intersect_2d(&o1, &d1, &o2, &d2, Tolerance::default()).unwrap();
        let pt = point_at(&o1, &d1, t);
        assert_relative_eq!(pt.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(pt.y, 1.0, epsilon = 1e-12);
    }
}
