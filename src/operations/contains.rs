//! Containment across every primitive pair: `a` contains `b` when every
//! point of `b` lies in `a` within tolerance.

use crate::geometry::{Geometry2, Geometry3, Plane};
use crate::math::intersect_3d::{line_plane_intersect, LinePlaneRelation};
use crate::math::{AlmostEq, Tolerance};

use super::intersect::{
    clip_intervals, common_interval_2d, common_interval_3d, covers_polygon, intervals_cover, Linear2, Linear3,
    Shape2, Shape3,
};

/// Whether every point of `b` lies in `a`.
#[must_use]
pub fn contains_2d(a: &Geometry2, b: &Geometry2, tol: Tolerance) -> bool {
    let outer = Shape2::of(a);
    match Shape2::of(b) {
        Shape2::Point(q) => outer.contains_point(&q, tol),
        Shape2::Linear(inner) => covers_linear_2d(&outer, &inner, tol),
        Shape2::Chain(chain) => chain.iter().all(|s| covers_linear_2d(&outer, s, tol)),
        Shape2::Area(inner) => match &outer {
            Shape2::Area(polygon) => covers_polygon(polygon, &inner, tol),
            _ => false,
        },
    }
}

/// Whether every point of `b` lies in `a`.
#[must_use]
pub fn contains_3d(a: &Geometry3, b: &Geometry3, tol: Tolerance) -> bool {
    let outer = Shape3::of(a);
    match Shape3::of(b) {
        Shape3::Point(q) => outer.contains_point(&q, tol),
        Shape3::Linear(inner) => covers_linear_3d(&outer, &inner, tol),
        Shape3::Chain(chain) => chain.iter().all(|s| covers_linear_3d(&outer, s, tol)),
        Shape3::Area(inner) => match &outer {
            Shape3::Area(area) => {
                area.is_coplanar(&inner, tol)
                    && covers_polygon(&area.outline, &inner.outline_in(&area.plane), tol)
            }
            Shape3::Plane(plane) => plane.almost_eq(&inner.plane, tol),
            _ => false,
        },
        Shape3::Plane(inner) => matches!(&outer, Shape3::Plane(plane) if plane.almost_eq(&inner, tol)),
    }
}

fn covers_linear_2d(outer: &Shape2, inner: &Linear2, tol: Tolerance) -> bool {
    let intervals = match outer {
        Shape2::Point(_) => return false,
        Shape2::Linear(l) => common_interval_2d(inner, l, tol).into_iter().collect(),
        Shape2::Chain(chain) => chain
            .iter()
            .filter_map(|s| common_interval_2d(inner, s, tol))
            .collect(),
        Shape2::Area(polygon) => clip_intervals(polygon, inner, tol),
    };
    intervals_cover(intervals, inner.start, inner.end, tol)
}

fn covers_linear_3d(outer: &Shape3, inner: &Linear3, tol: Tolerance) -> bool {
    let intervals = match outer {
        Shape3::Point(_) => return false,
        Shape3::Linear(l) => common_interval_3d(inner, l, tol).into_iter().collect(),
        Shape3::Chain(chain) => chain
            .iter()
            .filter_map(|s| common_interval_3d(inner, s, tol))
            .collect(),
        Shape3::Area(area) => {
            if !lies_in(inner, &area.plane, tol) {
                return false;
            }
            area.intervals(inner, tol)
        }
        Shape3::Plane(plane) => return lies_in(inner, plane, tol),
    };
    intervals_cover(intervals, inner.start, inner.end, tol)
}

fn lies_in(linear: &Linear3, plane: &Plane, tol: Tolerance) -> bool {
    matches!(
        line_plane_intersect(&linear.origin, &linear.direction, plane, tol),
        LinePlaneRelation::OnPlane
    )
}

impl Geometry2 {
    /// See [`contains_2d`].
    #[must_use]
    pub fn contains(&self, other: &Self, tol: Tolerance) -> bool {
        contains_2d(self, other, tol)
    }
}

impl Geometry3 {
    /// See [`contains_3d`].
    #[must_use]
    pub fn contains(&self, other: &Self, tol: Tolerance) -> bool {
        contains_3d(self, other, tol)
    }
}
