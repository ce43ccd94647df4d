use nalgebra::{Matrix3, Matrix3x2};

use crate::geometry::Plane;

use super::{AlmostEq, Point3, Tolerance, Vector3};

/// Relationship between two planes.
#[derive(Debug)]
pub enum PlanePairRelation {
    /// Planes intersect along a line.
    IntersectionLine { origin: Point3, direction: Vector3 },
    /// Planes are parallel but not coincident.
    Parallel { distance: f64 },
    /// Planes are the same (coincident).
    Coincident,
}

/// Computes the intersection of two planes.
///
/// The line direction is `na × nb`. Its origin is the unique point lying on
/// both planes and on the auxiliary plane through the world origin whose
/// normal is that direction.
#[must_use]
pub fn plane_plane_intersect(a: &Plane, b: &Plane, tol: Tolerance) -> PlanePairRelation {
    let na = a.normal();
    let nb = b.normal();

    let dir = na.cross(nb);
    if tol.dir_is_zero(dir.norm()) {
        let dist = b.origin() - a.origin();
        let dist = dist.dot(na).abs();
        return if tol.is_zero(dist) {
            PlanePairRelation::Coincident
        } else {
            PlanePairRelation::Parallel { distance: dist }
        };
    }
    let dir = dir.normalize();

    let m = Matrix3::from_rows(&[na.transpose(), nb.transpose(), dir.transpose()]);
    let rhs = Vector3::new(na.dot(&a.origin().coords), nb.dot(&b.origin().coords), 0.0);
    let origin = match m.try_inverse() {
        Some(inv) => Point3::from(inv * rhs),
        // Three independent normals by construction; fall back to a's origin.
        None => *a.origin(),
    };
    debug_assert!(a.contains(&origin, tol) && b.contains(&origin, tol));

    PlanePairRelation::IntersectionLine {
        origin,
        direction: dir,
    }
}

/// Relationship of a line with a plane.
#[derive(Debug)]
pub enum LinePlaneRelation {
    /// Line intersects the plane at a single point.
    Point { point: Point3, t: f64 },
    /// Line is parallel to the plane (does not intersect).
    Parallel,
    /// Line lies entirely on the plane.
    OnPlane,
}

/// Computes the intersection of a line `origin + t * dir` with a plane.
///
/// With `W = origin - plane.origin` the parameter is `t = -(n · W) / (n · dir)`.
#[must_use]
pub fn line_plane_intersect(
    origin: &Point3,
    dir: &Vector3,
    plane: &Plane,
    tol: Tolerance,
) -> LinePlaneRelation {
    let normal = plane.normal();
    let denom = normal.dot(dir);
    let w = origin - plane.origin();
    let numer = -normal.dot(&w);

    if tol.dir_is_zero(denom) {
        if tol.is_zero(numer) {
            LinePlaneRelation::OnPlane
        } else {
            LinePlaneRelation::Parallel
        }
    } else {
        let t = numer / denom;
        let point = origin + dir * t;
        LinePlaneRelation::Point { point, t }
    }
}

/// Intersection parameters of two 3D lines `o1 + t * d1` and `o2 + s * d2`.
///
/// Solves `[d1 | -d2] (t, s)ᵀ = o2 - o1` in the least-squares sense and
/// accepts the solution only if both candidate points coincide within
/// tolerance. Parallel or skew lines give `None`.
#[must_use]
pub fn line_line_intersect_3d(
    o1: &Point3,
    d1: &Vector3,
    o2: &Point3,
    d2: &Vector3,
    tol: Tolerance,
) -> Option<(f64, f64)> {
    if tol.dir_is_zero(d1.cross(d2).norm() / (d1.norm() * d2.norm())) {
        return None;
    }
    let a = Matrix3x2::from_columns(&[*d1, -d2]);
    let b = o2 - o1;
    let at = a.transpose();
    let params = (at * a).try_inverse()? * (at * b);
    let (t, s) = (params[0], params[1]);

    let on_first = o1 + d1 * t;
    let on_second = o2 + d2 * s;
    on_first.almost_eq(&on_second, tol).then_some((t, s))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    fn tol() -> Tolerance {
        Tolerance::default()
    }

    // ── plane_plane_intersect ──

    #[test]
    fn perpendicular_planes_intersect() {
        let xy = Plane::from_normal(p(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0)).unwrap();
        let xz = Plane::from_normal(p(0.0, 0.0, 0.0), v(0.0, 1.0, 0.0)).unwrap();
        match plane_plane_intersect(&xy, &xz, tol()) {
            PlanePairRelation::IntersectionLine { direction, .. } => {
                assert!(direction.x.abs() > 0.99, "expected X-axis direction, got {direction:?}");
            }
            other => panic!("expected IntersectionLine, got {other:?}"),
        }
    }

    #[test]
    fn intersection_point_lies_on_both_planes() {
        let a = Plane::from_normal(p(1.0, 0.0, 0.0), v(1.0, 0.0, 0.0)).unwrap();
        let b = Plane::from_normal(p(0.0, 2.0, 0.0), v(0.0, 1.0, 0.0)).unwrap();
        match plane_plane_intersect(&a, &b, tol()) {
            PlanePairRelation::IntersectionLine { origin, direction } => {
                assert_relative_eq!(origin.x, 1.0, epsilon = 1e-12);
                assert_relative_eq!(origin.y, 2.0, epsilon = 1e-12);
                // auxiliary plane through the world origin pins z
                assert_relative_eq!(origin.z, 0.0, epsilon = 1e-12);
                assert!(direction.z.abs() > 0.99);
            }
            other => panic!("expected IntersectionLine, got {other:?}"),
        }
    }

    #[test]
    fn parallel_and_coincident_planes() {
        let a = Plane::from_normal(p(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0)).unwrap();
        let b = Plane::from_normal(p(0.0, 0.0, 3.0), v(0.0, 0.0, -1.0)).unwrap();
        let c = Plane::from_normal(p(4.0, 5.0, 0.0), v(0.0, 0.0, 1.0)).unwrap();
        match plane_plane_intersect(&a, &b, tol()) {
            PlanePairRelation::Parallel { distance } => assert_relative_eq!(distance, 3.0),
            other => panic!("expected Parallel, got {other:?}"),
        }
        assert!(matches!(plane_plane_intersect(&a, &c, tol()), PlanePairRelation::Coincident));
    }

    // ── line_plane_intersect ──

    #[test]
    fn vertical_line_hits_xy_plane() {
        let xy = Plane::from_normal(p(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0)).unwrap();
        match line_plane_intersect(&p(1.0, 1.0, 1.0), &v(0.0, 0.0, 1.0), &xy, tol()) {
            LinePlaneRelation::Point { point, t } => {
                assert_relative_eq!(t, -1.0);
                assert!(point.almost_eq(&p(1.0, 1.0, 0.0), tol()));
            }
            other => panic!("expected Point, got {other:?}"),
        }
    }

    #[test]
    fn line_parallel_or_on_plane() {
        let plane = Plane::from_normal(p(0.0, 0.0, 5.0), v(0.0, 0.0, 1.0)).unwrap();
        assert!(matches!(
            line_plane_intersect(&p(0.0, 0.0, 0.0), &v(1.0, 0.0, 0.0), &plane, tol()),
            LinePlaneRelation::Parallel
        ));
        assert!(matches!(
            line_plane_intersect(&p(1.0, 2.0, 5.0), &v(1.0, 1.0, 0.0), &plane, tol()),
            LinePlaneRelation::OnPlane
        ));
    }

    // ── line_line_intersect_3d ──

    #[test]
    fn crossing_lines_meet() {
        let (t, s) = line_line_intersect_3d(
            &p(0.0, 0.0, 1.0),
            &v(1.0, 0.0, 0.0),
            &p(2.0, -1.0, 1.0),
            &v(0.0, 1.0, 0.0),
            tol(),
        )
        .unwrap();
        assert_relative_eq!(t, 2.0, epsilon = 1e-12);
        assert_relative_eq!(s, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn skew_lines_do_not_meet() {
        assert!(line_line_intersect_3d(
            &p(0.0, 0.0, 0.0),
            &v(1.0, 0.0, 0.0),
            &p(0.0, 0.0, 1.0),
            &v(0.0, 1.0, 0.0),
            tol(),
        )
        .is_none());
    }

    #[test]
    fn parallel_lines_do_not_meet() {
        assert!(line_line_intersect_3d(
            &p(0.0, 0.0, 0.0),
            &v(1.0, 1.0, 0.0),
            &p(0.0, 1.0, 0.0),
            &v(-2.0, -2.0, 0.0),
            tol(),
        )
        .is_none());
    }
}
