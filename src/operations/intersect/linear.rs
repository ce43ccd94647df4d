//! Parametric view of lines, rays and segments.
//!
//! Every linear primitive becomes `origin + t * direction` with `t` in
//! `[start, end]`, infinite bounds marking unbounded ends. Parameters are arc
//! lengths, so they compare at the positional precision.

use nalgebra::Unit;

use crate::geometry::{Geometry2, Geometry3, Line2, Line3, Plane, Ray2, Ray3, Segment2, Segment3};
use crate::math::classify::side_of_line;
use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::intersect_3d::line_line_intersect_3d;
use crate::math::vector::{is_parallel2, is_parallel3};
use crate::math::{AlmostEq, Location, Point2, Point3, Tolerance, UnitVector2, UnitVector3};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Linear2 {
    pub(crate) origin: Point2,
    pub(crate) direction: UnitVector2,
    pub(crate) start: f64,
    pub(crate) end: f64,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Linear3 {
    pub(crate) origin: Point3,
    pub(crate) direction: UnitVector3,
    pub(crate) start: f64,
    pub(crate) end: f64,
}

impl Linear2 {
    pub(crate) fn line(line: &Line2) -> Self {
        Self {
            origin: *line.origin(),
            direction: *line.direction(),
            start: f64::NEG_INFINITY,
            end: f64::INFINITY,
        }
    }

    pub(crate) fn ray(ray: &Ray2) -> Self {
        Self {
            origin: *ray.origin(),
            direction: *ray.direction(),
            start: 0.0,
            end: f64::INFINITY,
        }
    }

    pub(crate) fn segment(segment: &Segment2) -> Self {
        Self {
            origin: *segment.p0(),
            direction: *segment.direction(),
            start: 0.0,
            end: segment.length(),
        }
    }

    /// The unbounded carrier line.
    pub(crate) fn carrier(&self) -> Self {
        Self {
            start: f64::NEG_INFINITY,
            end: f64::INFINITY,
            ..*self
        }
    }

    pub(crate) fn point_at(&self, t: f64) -> Point2 {
        self.origin + self.direction.into_inner() * t
    }

    pub(crate) fn parameter_of(&self, point: &Point2) -> f64 {
        (point - self.origin).dot(&self.direction)
    }

    pub(crate) fn covers(&self, t: f64, tol: Tolerance) -> bool {
        tol.ge(t, self.start) && tol.le(t, self.end)
    }

    pub(crate) fn contains(&self, point: &Point2, tol: Tolerance) -> bool {
        side_of_line(&self.origin, &self.direction, point, tol) == Location::OnLine
            && self.covers(self.parameter_of(point), tol)
    }

    /// The part of the carrier between `from` and `to`.
    pub(crate) fn piece(&self, from: f64, to: f64, tol: Tolerance) -> Geometry2 {
        match (from.is_finite(), to.is_finite()) {
            (false, false) => Geometry2::Line(Line2::from_unit(self.origin, self.direction)),
            (true, false) => Geometry2::Ray(Ray2::from_unit(self.point_at(from), self.direction)),
            (false, true) => Geometry2::Ray(Ray2::from_unit(self.point_at(to), -self.direction)),
            (true, true) => {
                let (a, b) = (self.point_at(from), self.point_at(to));
                if a.almost_eq(&b, tol) {
                    Geometry2::Point(a)
                } else {
                    Geometry2::Segment(Segment2::new_unchecked(a, b))
                }
            }
        }
    }
}

impl Linear3 {
    pub(crate) fn line(line: &Line3) -> Self {
        Self {
            origin: *line.origin(),
            direction: *line.direction(),
            start: f64::NEG_INFINITY,
            end: f64::INFINITY,
        }
    }

    pub(crate) fn ray(ray: &Ray3) -> Self {
        Self {
            origin: *ray.origin(),
            direction: *ray.direction(),
            start: 0.0,
            end: f64::INFINITY,
        }
    }

    pub(crate) fn segment(segment: &Segment3) -> Self {
        Self {
            origin: *segment.p0(),
            direction: *segment.direction(),
            start: 0.0,
            end: segment.length(),
        }
    }

    pub(crate) fn point_at(&self, t: f64) -> Point3 {
        self.origin + self.direction.into_inner() * t
    }

    pub(crate) fn parameter_of(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(&self.direction)
    }

    pub(crate) fn covers(&self, t: f64, tol: Tolerance) -> bool {
        tol.ge(t, self.start) && tol.le(t, self.end)
    }

    pub(crate) fn contains(&self, point: &Point3, tol: Tolerance) -> bool {
        let t = self.parameter_of(point);
        let foot = self.point_at(t);
        foot.almost_eq(point, tol) && self.covers(t, tol)
    }

    /// The same parametrisation in the local frame of `plane`.
    ///
    /// Only meaningful when the linear lies in the plane: the in-plane
    /// direction then keeps unit length and parameters carry over unchanged.
    pub(crate) fn project_into(&self, plane: &Plane) -> Linear2 {
        Linear2 {
            origin: plane.project_into(&self.origin),
            direction: Unit::new_normalize(plane.project_vector_into(&self.direction)),
            start: self.start,
            end: self.end,
        }
    }

    pub(crate) fn piece(&self, from: f64, to: f64, tol: Tolerance) -> Geometry3 {
        match (from.is_finite(), to.is_finite()) {
            (false, false) => Geometry3::Line(Line3::from_unit(self.origin, self.direction)),
            (true, false) => Geometry3::Ray(Ray3::from_unit(self.point_at(from), self.direction)),
            (false, true) => Geometry3::Ray(Ray3::from_unit(self.point_at(to), -self.direction)),
            (true, true) => {
                let (a, b) = (self.point_at(from), self.point_at(to));
                if a.almost_eq(&b, tol) {
                    Geometry3::Point(a)
                } else {
                    Geometry3::Segment(Segment3::new_unchecked(a, b))
                }
            }
        }
    }

    pub(crate) fn whole(&self, tol: Tolerance) -> Geometry3 {
        self.piece(self.start, self.end, tol)
    }
}

/// Overlap of `b`'s parameter range with `a`'s, expressed on a collinear `a`.
///
/// `offset` is the parameter of `b`'s origin on `a` and `sign` the relative
/// sense of the two directions.
fn collinear_interval(
    a: (f64, f64),
    b: (f64, f64),
    offset: f64,
    sign: f64,
    tol: Tolerance,
) -> Option<(f64, f64)> {
    let (p, q) = (offset + sign * b.0, offset + sign * b.1);
    let lo = a.0.max(p.min(q));
    let hi = a.1.min(p.max(q));
    if tol.gt(lo, hi) {
        None
    } else {
        Some((lo, hi.max(lo)))
    }
}

/// Parameter interval on `a` shared with `b`. A crossing gives `(t, t)`.
pub(crate) fn common_interval_2d(a: &Linear2, b: &Linear2, tol: Tolerance) -> Option<(f64, f64)> {
    if is_parallel2(&a.direction, &b.direction, tol) {
        if side_of_line(&a.origin, &a.direction, &b.origin, tol) != Location::OnLine {
            return None;
        }
        let sign = a.direction.dot(&b.direction).signum();
        let offset = a.parameter_of(&b.origin);
        return collinear_interval((a.start, a.end), (b.start, b.end), offset, sign, tol);
    }
    let (t, u) = line_line_intersect_2d(&a.origin, &a.direction, &b.origin, &b.direction, tol)?;
    if !(a.covers(t, tol) && b.covers(u, tol)) {
        return None;
    }
    debug_assert!(a.point_at(t).almost_eq(&b.point_at(u), tol));
    Some((t, t))
}

pub(crate) fn common_interval_3d(a: &Linear3, b: &Linear3, tol: Tolerance) -> Option<(f64, f64)> {
    if is_parallel3(&a.direction, &b.direction, tol) {
        let offset = a.parameter_of(&b.origin);
        if !a.point_at(offset).almost_eq(&b.origin, tol) {
            return None;
        }
        let sign = a.direction.dot(&b.direction).signum();
        return collinear_interval((a.start, a.end), (b.start, b.end), offset, sign, tol);
    }
    let (t, s) = line_line_intersect_3d(&a.origin, &a.direction, &b.origin, &b.direction, tol)?;
    if !(a.covers(t, tol) && b.covers(s, tol)) {
        return None;
    }
    Some((t, t))
}

/// Whether `intervals` leave no gap in `[start, end]`.
pub(crate) fn intervals_cover(mut intervals: Vec<(f64, f64)>, start: f64, end: f64, tol: Tolerance) -> bool {
    intervals.sort_by(|a, b| a.0.total_cmp(&b.0));
    let mut reach = start;
    for (lo, hi) in intervals {
        if tol.gt(lo, reach) {
            break;
        }
        reach = reach.max(hi);
    }
    tol.ge(reach, end)
}

/// Intersection of two planar linears, described along `a`.
pub(crate) fn linear_linear_2d(a: &Linear2, b: &Linear2, tol: Tolerance) -> Option<Geometry2> {
    common_interval_2d(a, b, tol).map(|(lo, hi)| a.piece(lo, hi, tol))
}

/// Intersection of two spatial linears, described along `a`. Skew lines give `None`.
pub(crate) fn linear_linear_3d(a: &Linear3, b: &Linear3, tol: Tolerance) -> Option<Geometry3> {
    common_interval_3d(a, b, tol).map(|(lo, hi)| a.piece(lo, hi, tol))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Vector2, Vector3};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn seg(a: (f64, f64), b: (f64, f64)) -> Linear2 {
        Linear2::segment(&Segment2::new(p(a.0, a.1), p(b.0, b.1)).unwrap())
    }

    #[test]
    fn crossing_segments_meet_in_a_point() {
        let tol = Tolerance::default();
        let hit = linear_linear_2d(&seg((0.0, 0.0), (2.0, 2.0)), &seg((0.0, 2.0), (2.0, 0.0)), tol);
        assert!(matches!(hit, Some(Geometry2::Point(q)) if q.almost_eq(&p(1.0, 1.0), tol)));
    }

    #[test]
    fn collinear_disjoint_segments_miss() {
        let tol = Tolerance::default();
        assert!(linear_linear_2d(&seg((0.0, 0.0), (1.0, 0.0)), &seg((2.0, 0.0), (3.0, 0.0)), tol).is_none());
    }

    #[test]
    fn collinear_overlap_and_touch() {
        let tol = Tolerance::default();
        let overlap = linear_linear_2d(&seg((0.0, 0.0), (2.0, 0.0)), &seg((3.0, 0.0), (1.0, 0.0)), tol);
        let expected = Segment2::new(p(1.0, 0.0), p(2.0, 0.0)).unwrap();
        assert!(matches!(overlap, Some(Geometry2::Segment(s)) if s.almost_eq(&expected, tol)));
        let touch = linear_linear_2d(&seg((0.0, 0.0), (1.0, 0.0)), &seg((1.0, 0.0), (2.0, 0.0)), tol);
        assert!(matches!(touch, Some(Geometry2::Point(q)) if q.almost_eq(&p(1.0, 0.0), tol)));
    }

    #[test]
    fn opposite_rays_share_a_segment() {
        let tol = Tolerance::default();
        let a = Linear2::ray(&Ray2::new(p(0.0, 0.0), Vector2::new(1.0, 0.0)).unwrap());
        let b = Linear2::ray(&Ray2::new(p(4.0, 0.0), Vector2::new(-1.0, 0.0)).unwrap());
        let expected = Segment2::new(p(0.0, 0.0), p(4.0, 0.0)).unwrap();
        assert!(matches!(linear_linear_2d(&a, &b, tol), Some(Geometry2::Segment(s)) if s.almost_eq(&expected, tol)));
        let line = Linear2::line(&Line2::new(p(0.0, 0.0), Vector2::new(-2.0, 0.0)).unwrap());
        assert!(matches!(linear_linear_2d(&line, &a, tol), Some(Geometry2::Ray(_))));
        assert!(matches!(linear_linear_2d(&line, &line, tol), Some(Geometry2::Line(_))));
    }

    #[test]
    fn crossing_outside_segment_range_misses() {
        let tol = Tolerance::default();
        assert!(linear_linear_2d(&seg((0.0, 0.0), (1.0, 0.0)), &seg((2.0, -1.0), (2.0, 1.0)), tol).is_none());
    }

    #[test]
    fn spatial_lines_cross_or_skew() {
        let tol = Tolerance::default();
        let a = Linear3::line(&Line3::new(Point3::new(0.0, 0.0, 1.0), Vector3::x()).unwrap());
        let b = Linear3::segment(&Segment3::new(Point3::new(2.0, -1.0, 1.0), Point3::new(2.0, 1.0, 1.0)).unwrap());
        assert!(matches!(linear_linear_3d(&a, &b, tol), Some(Geometry3::Point(q)) if q.almost_eq(&Point3::new(2.0, 0.0, 1.0), tol)));
        let skew = Linear3::line(&Line3::new(Point3::new(0.0, 0.0, 2.0), Vector3::y()).unwrap());
        assert!(linear_linear_3d(&a, &skew, tol).is_none());
        let overlap = Linear3::segment(&Segment3::new(Point3::new(-1.0, 0.0, 1.0), Point3::new(3.0, 0.0, 1.0)).unwrap());
        assert!(matches!(linear_linear_3d(&a, &overlap, tol), Some(Geometry3::Segment(_))));
    }
}
