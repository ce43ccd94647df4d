//! Spatial areas, reduced to planar problems in their support plane.

use nalgebra::Unit;

use crate::error::Result;
use crate::geometry::{Geometry3, Line3, Plane, Polygon2, Polygon3, Triangle3};
use crate::math::intersect_3d::{line_plane_intersect, plane_plane_intersect, LinePlaneRelation, PlanePairRelation};
use crate::math::{Point3, Tolerance, Vector3};

use super::area_2d::{area_area, clip_intervals, clip_linear};
use super::linear::Linear3;

/// A triangle or polygon together with its support plane and its outline in
/// that plane's `(u, v)` frame.
#[derive(Debug, Clone)]
pub(crate) struct Area3 {
    pub(crate) source: Geometry3,
    pub(crate) plane: Plane,
    pub(crate) vertices: Vec<Point3>,
    pub(crate) outline: Polygon2,
}

impl Area3 {
    pub(crate) fn triangle(triangle: &Triangle3) -> Self {
        let plane = triangle.plane();
        Self {
            source: Geometry3::Triangle(*triangle),
            outline: triangle.project_into(&plane).to_polygon(),
            vertices: triangle.vertices().to_vec(),
            plane,
        }
    }

    pub(crate) fn polygon(polygon: &Polygon3) -> Self {
        let plane = polygon.plane();
        Self {
            source: Geometry3::Polygon(polygon.clone()),
            outline: polygon.project_into(&plane),
            vertices: polygon.vertices().to_vec(),
            plane,
        }
    }

    pub(crate) fn contains(&self, point: &Point3, tol: Tolerance) -> bool {
        self.plane.contains(point, tol) && self.outline.contains(&self.plane.project_into(point), tol)
    }

    /// The outline expressed in the frame of another, coincident plane.
    pub(crate) fn outline_in(&self, plane: &Plane) -> Polygon2 {
        Polygon2::from_vertices_unchecked(self.vertices.iter().map(|p| plane.project_into(p)).collect())
    }

    pub(crate) fn is_coplanar(&self, other: &Self, tol: Tolerance) -> bool {
        matches!(
            plane_plane_intersect(&self.plane, &other.plane, tol),
            PlanePairRelation::Coincident
        )
    }

    /// Parameter intervals of a linear lying in the support plane.
    pub(crate) fn intervals(&self, linear: &Linear3, tol: Tolerance) -> Vec<(f64, f64)> {
        clip_intervals(&self.outline, &linear.project_into(&self.plane), tol)
    }
}

fn full_line(origin: Point3, direction: Vector3) -> Linear3 {
    Linear3 {
        origin,
        direction: Unit::new_normalize(direction),
        start: f64::NEG_INFINITY,
        end: f64::INFINITY,
    }
}

fn common_intervals(a: &[(f64, f64)], b: &[(f64, f64)], tol: Tolerance) -> Vec<(f64, f64)> {
    let mut out = Vec::new();
    for &(a0, a1) in a {
        for &(b0, b1) in b {
            let lo = a0.max(b0);
            let hi = a1.min(b1);
            if tol.le(lo, hi) {
                out.push((lo, hi.max(lo)));
            }
        }
    }
    out.sort_by(|x, y| x.0.total_cmp(&y.0));
    out
}

/// The parts of `linear` inside or on `area`.
///
/// A linear lying in the support plane is clipped in the plane frame and
/// the planar parts are lifted back; any other linear meets the plane in at
/// most one point.
pub(crate) fn clip_linear_3d(area: &Area3, linear: &Linear3, tol: Tolerance) -> Vec<Geometry3> {
    match line_plane_intersect(&linear.origin, &linear.direction, &area.plane, tol) {
        LinePlaneRelation::OnPlane => {
            let flat = linear.project_into(&area.plane);
            clip_linear(&area.outline, &flat, tol)
                .iter()
                .map(|g| g.lift(&area.plane))
                .collect()
        }
        LinePlaneRelation::Point { point, t } => {
            if linear.covers(t, tol) && area.contains(&point, tol) {
                vec![Geometry3::Point(point)]
            } else {
                Vec::new()
            }
        }
        LinePlaneRelation::Parallel => Vec::new(),
    }
}

/// Intersection of two spatial areas.
///
/// Coplanar areas are solved in the plane of `a`. Otherwise both areas are
/// cut along the line where their planes meet and the two sets of
/// intervals are intersected.
///
/// # Errors
///
/// Propagates the planar failure for partially overlapping non-convex
/// coplanar polygons.
pub(crate) fn area_area_3d(a: &Area3, b: &Area3, tol: Tolerance) -> Result<Vec<Geometry3>> {
    match plane_plane_intersect(&a.plane, &b.plane, tol) {
        PlanePairRelation::Coincident => Ok(area_area(&a.outline, &b.outline_in(&a.plane), tol)?
            .iter()
            .map(|g| g.lift(&a.plane))
            .collect()),
        PlanePairRelation::Parallel { .. } => Ok(Vec::new()),
        PlanePairRelation::IntersectionLine { origin, direction } => {
            let line = full_line(origin, direction);
            let on_a = a.intervals(&line, tol);
            let on_b = b.intervals(&line, tol);
            Ok(common_intervals(&on_a, &on_b, tol)
                .into_iter()
                .map(|(lo, hi)| line.piece(lo, hi, tol))
                .collect())
        }
    }
}

pub(crate) fn plane_plane(a: &Plane, b: &Plane, tol: Tolerance) -> Vec<Geometry3> {
    match plane_plane_intersect(a, b, tol) {
        PlanePairRelation::Coincident => vec![Geometry3::Plane(*a)],
        PlanePairRelation::Parallel { .. } => Vec::new(),
        PlanePairRelation::IntersectionLine { origin, direction } => {
            vec![Geometry3::Line(Line3::from_unit(origin, Unit::new_normalize(direction)))]
        }
    }
}

/// A ray meeting the plane behind its origin misses it.
pub(crate) fn plane_linear(plane: &Plane, linear: &Linear3, tol: Tolerance) -> Vec<Geometry3> {
    match line_plane_intersect(&linear.origin, &linear.direction, plane, tol) {
        LinePlaneRelation::OnPlane => vec![linear.whole(tol)],
        LinePlaneRelation::Point { point, t } if linear.covers(t, tol) => vec![Geometry3::Point(point)],
        LinePlaneRelation::Point { .. } | LinePlaneRelation::Parallel => Vec::new(),
    }
}

pub(crate) fn plane_area(plane: &Plane, area: &Area3, tol: Tolerance) -> Vec<Geometry3> {
    match plane_plane_intersect(plane, &area.plane, tol) {
        PlanePairRelation::Coincident => vec![area.source.clone()],
        PlanePairRelation::Parallel { .. } => Vec::new(),
        PlanePairRelation::IntersectionLine { origin, direction } => {
            let line = full_line(origin, direction);
            area.intervals(&line, tol)
                .into_iter()
                .map(|(lo, hi)| line.piece(lo, hi, tol))
                .collect()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Ray3, Segment3};
    use crate::math::AlmostEq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn square_at_z(z: f64) -> Area3 {
        Area3::polygon(&Polygon3::new(&[p(-1.0, -1.0, z), p(1.0, -1.0, z), p(1.0, 1.0, z), p(-1.0, 1.0, z)]).unwrap())
    }

    fn wall() -> Area3 {
        // the square standing in the y = 0 plane
        Area3::polygon(&Polygon3::new(&[p(-1.0, 0.0, -1.0), p(1.0, 0.0, -1.0), p(1.0, 0.0, 1.0), p(-1.0, 0.0, 1.0)]).unwrap())
    }

    #[test]
    fn ray_pierces_triangle() {
        let tol = Tolerance::default();
        let tri = Area3::triangle(&Triangle3::new(p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(0.0, 4.0, 0.0)).unwrap());
        let down = Linear3::ray(&Ray3::new(p(1.0, 1.0, 5.0), Vector3::new(0.0, 0.0, -1.0)).unwrap());
        let hit = clip_linear_3d(&tri, &down, tol);
        assert!(matches!(hit.as_slice(), [Geometry3::Point(q)] if q.almost_eq(&p(1.0, 1.0, 0.0), tol)));
        let up = Linear3::ray(&Ray3::new(p(1.0, 1.0, 5.0), Vector3::z()).unwrap());
        assert!(clip_linear_3d(&tri, &up, tol).is_empty());
    }

    #[test]
    fn coplanar_segment_is_clipped_in_plane() {
        let tol = Tolerance::default();
        let area = square_at_z(2.0);
        let seg = Linear3::segment(&Segment3::new(p(-3.0, 0.0, 2.0), p(0.0, 0.0, 2.0)).unwrap());
        let parts = clip_linear_3d(&area, &seg, tol);
        let expected = Segment3::new(p(-1.0, 0.0, 2.0), p(0.0, 0.0, 2.0)).unwrap();
        assert!(matches!(parts.as_slice(), [Geometry3::Segment(s)] if s.almost_eq(&expected, tol)));
    }

    #[test]
    fn crossing_squares_share_a_segment() {
        let tol = Tolerance::default();
        let parts = area_area_3d(&square_at_z(0.0), &wall(), tol).unwrap();
        let expected = Segment3::new(p(-1.0, 0.0, 0.0), p(1.0, 0.0, 0.0)).unwrap();
        assert!(matches!(parts.as_slice(), [Geometry3::Segment(s)] if s.almost_eq(&expected, tol)));
        assert!(area_area_3d(&square_at_z(0.0), &square_at_z(1.0), tol).unwrap().is_empty());
        assert!(area_area_3d(&square_at_z(2.0), &wall(), tol).unwrap().is_empty());
    }

    #[test]
    fn coplanar_squares_overlap_in_plane() {
        let tol = Tolerance::default();
        let shifted = Area3::polygon(
            &Polygon3::new(&[p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(2.0, 2.0, 0.0), p(0.0, 2.0, 0.0)]).unwrap(),
        );
        let parts = area_area_3d(&square_at_z(0.0), &shifted, tol).unwrap();
        match parts.as_slice() {
            [Geometry3::Polygon(poly)] => assert!((poly.area() - 1.0).abs() < 1e-9),
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn plane_cuts_area_and_plane() {
        let tol = Tolerance::default();
        let cut = Plane::from_normal(p(0.5, 0.0, 0.0), Vector3::x()).unwrap();
        let parts = plane_area(&cut, &square_at_z(0.0), tol);
        let expected = Segment3::new(p(0.5, -1.0, 0.0), p(0.5, 1.0, 0.0)).unwrap();
        assert!(matches!(parts.as_slice(), [Geometry3::Segment(s)] if s.almost_eq(&expected, tol)));
        let floor = Plane::from_normal(p(0.0, 0.0, 0.0), Vector3::z()).unwrap();
        assert!(matches!(plane_area(&floor, &square_at_z(0.0), tol).as_slice(), [Geometry3::Polygon(_)]));
        assert!(plane_area(&floor, &square_at_z(3.0), tol).is_empty());
        assert!(matches!(plane_plane(&floor, &cut, tol).as_slice(), [Geometry3::Line(_)]));
    }
}
