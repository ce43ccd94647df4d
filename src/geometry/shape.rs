//! Closed sum types over the primitives of each dimension.
//!
//! The pairwise operations in [`crate::operations`] match on these, so every
//! variant pair is handled explicitly.

use nalgebra::Unit;

use crate::math::{AlmostEq, Point2, Point3, Tolerance, Vector2};

use super::d2::{Line2, Polygon2, Polyline2, Ray2, Segment2, Triangle2};
use super::d3::{Line3, Plane, Polygon3, Polyline3, Ray3, Segment3, Triangle3};

/// Any planar primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry2 {
    Point(Point2),
    Line(Line2),
    Ray(Ray2),
    Segment(Segment2),
    Triangle(Triangle2),
    Polygon(Polygon2),
    Polyline(Polyline2),
}

/// Any spatial primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry3 {
    Point(Point3),
    Line(Line3),
    Ray(Ray3),
    Segment(Segment3),
    Triangle(Triangle3),
    Polygon(Polygon3),
    Polyline(Polyline3),
    Plane(Plane),
}

impl Geometry2 {
    /// Topological dimension: 0 for points, 1 for linear shapes, 2 for areas.
    #[must_use]
    pub fn dimension(&self) -> u8 {
        match self {
            Self::Point(_) => 0,
            Self::Line(_) | Self::Ray(_) | Self::Segment(_) | Self::Polyline(_) => 1,
            Self::Triangle(_) | Self::Polygon(_) => 2,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Point(_) => "point",
            Self::Line(_) => "line",
            Self::Ray(_) => "ray",
            Self::Segment(_) => "segment",
            Self::Triangle(_) => "triangle",
            Self::Polygon(_) => "polygon",
            Self::Polyline(_) => "polyline",
        }
    }

    /// Whether `point` lies on or inside the shape.
    #[must_use]
    pub fn contains_point(&self, point: &Point2, tol: Tolerance) -> bool {
        match self {
            Self::Point(p) => p.almost_eq(point, tol),
            Self::Line(l) => l.contains(point, tol),
            Self::Ray(r) => r.contains(point, tol),
            Self::Segment(s) => s.contains(point, tol),
            Self::Triangle(t) => t.contains(point, tol),
            Self::Polygon(p) => p.contains(point, tol),
            Self::Polyline(p) => p.contains(point, tol),
        }
    }

    /// Maps the shape from the local frame of `plane` into space.
    ///
    /// A three-corner polygon becomes a [`Triangle3`].
    #[must_use]
    pub fn lift(&self, plane: &Plane) -> Geometry3 {
        let lift_dir = |d: &Unit<Vector2>| Unit::new_normalize(plane.evaluate_vector(d));
        match self {
            Self::Point(p) => Geometry3::Point(plane.evaluate(p)),
            Self::Line(l) => Geometry3::Line(Line3::from_unit(plane.evaluate(l.origin()), lift_dir(l.direction()))),
            Self::Ray(r) => Geometry3::Ray(Ray3::from_unit(plane.evaluate(r.origin()), lift_dir(r.direction()))),
            Self::Segment(s) => {
                Geometry3::Segment(Segment3::new_unchecked(plane.evaluate(s.p0()), plane.evaluate(s.p1())))
            }
            Self::Triangle(t) => {
                let [a, b, c] = t.vertices();
                Geometry3::Triangle(Triangle3::new_unchecked(
                    plane.evaluate(a),
                    plane.evaluate(b),
                    plane.evaluate(c),
                ))
            }
            Self::Polygon(p) => match p.vertices() {
                [a, b, c] => Geometry3::Triangle(Triangle3::new_unchecked(
                    plane.evaluate(a),
                    plane.evaluate(b),
                    plane.evaluate(c),
                )),
                _ => Geometry3::Polygon(Polygon3::lift_unchecked(p, plane)),
            },
            Self::Polyline(p) => Geometry3::Polyline(Polyline3::from_vertices_unchecked(
                p.vertices().iter().map(|v| plane.evaluate(v)).collect(),
            )),
        }
    }
}

impl Geometry3 {
    /// Whether `point` lies on or inside the shape.
    #[must_use]
    pub fn contains_point(&self, point: &Point3, tol: Tolerance) -> bool {
        match self {
            Self::Point(p) => p.almost_eq(point, tol),
            Self::Line(l) => l.contains(point, tol),
            Self::Ray(r) => r.contains(point, tol),
            Self::Segment(s) => s.contains(point, tol),
            Self::Triangle(t) => t.contains(point, tol),
            Self::Polygon(p) => p.contains(point, tol),
            Self::Polyline(p) => p.contains(point, tol),
            Self::Plane(p) => p.contains(point, tol),
        }
    }

    /// Topological dimension: 0 for points, 1 for linear shapes, 2 for
    /// triangles, polygons and planes.
    #[must_use]
    pub fn dimension(&self) -> u8 {
        match self {
            Self::Point(_) => 0,
            Self::Line(_) | Self::Ray(_) | Self::Segment(_) | Self::Polyline(_) => 1,
            Self::Triangle(_) | Self::Polygon(_) | Self::Plane(_) => 2,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Point(_) => "point",
            Self::Line(_) => "line",
            Self::Ray(_) => "ray",
            Self::Segment(_) => "segment",
            Self::Triangle(_) => "triangle",
            Self::Polygon(_) => "polygon",
            Self::Polyline(_) => "polyline",
            Self::Plane(_) => "plane",
        }
    }
}

impl AlmostEq for Geometry2 {
    /// Equal only within the same variant.
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        match (self, other) {
            (Self::Point(a), Self::Point(b)) => a.almost_eq(b, tol),
            (Self::Line(a), Self::Line(b)) => a.almost_eq(b, tol),
            (Self::Ray(a), Self::Ray(b)) => a.almost_eq(b, tol),
            (Self::Segment(a), Self::Segment(b)) => a.almost_eq(b, tol),
            (Self::Triangle(a), Self::Triangle(b)) => a.almost_eq(b, tol),
            (Self::Polygon(a), Self::Polygon(b)) => a.almost_eq(b, tol),
            (Self::Polyline(a), Self::Polyline(b)) => a.almost_eq(b, tol),
            _ => false,
        }
    }
}

impl AlmostEq for Geometry3 {
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        match (self, other) {
            (Self::Point(a), Self::Point(b)) => a.almost_eq(b, tol),
            (Self::Line(a), Self::Line(b)) => a.almost_eq(b, tol),
            (Self::Ray(a), Self::Ray(b)) => a.almost_eq(b, tol),
            (Self::Segment(a), Self::Segment(b)) => a.almost_eq(b, tol),
            (Self::Triangle(a), Self::Triangle(b)) => a.almost_eq(b, tol),
            (Self::Polygon(a), Self::Polygon(b)) => a.almost_eq(b, tol),
            (Self::Polyline(a), Self::Polyline(b)) => a.almost_eq(b, tol),
            (Self::Plane(a), Self::Plane(b)) => a.almost_eq(b, tol),
            _ => false,
        }
    }
}

macro_rules! impl_from {
    ($target:ident { $($variant:ident($ty:ty)),* $(,)? }) => {
        $(
            impl From<$ty> for $target {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from!(Geometry2 {
    Point(Point2),
    Line(Line2),
    Ray(Ray2),
    Segment(Segment2),
    Triangle(Triangle2),
    Polygon(Polygon2),
    Polyline(Polyline2),
});

impl_from!(Geometry3 {
    Point(Point3),
    Line(Line3),
    Ray(Ray3),
    Segment(Segment3),
    Triangle(Triangle3),
    Polygon(Polygon3),
    Polyline(Polyline3),
    Plane(Plane),
});

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    #[test]
    fn dimensions() {
        let seg = Segment2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)).unwrap();
        assert_eq!(Geometry2::from(Point2::origin()).dimension(), 0);
        assert_eq!(Geometry2::from(seg).dimension(), 1);
        let tri = Triangle2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)).unwrap();
        assert_eq!(Geometry2::from(tri).dimension(), 2);
        let plane = Plane::from_normal(Point3::origin(), Vector3::z()).unwrap();
        assert_eq!(Geometry3::from(plane).dimension(), 2);
        assert_eq!(Geometry3::from(plane).kind(), "plane");
    }

    #[test]
    fn lift_maps_through_plane_frame() {
        let tol = Tolerance::default();
        let plane = Plane::from_normal(Point3::new(0.0, 0.0, 2.0), Vector3::z()).unwrap();
        let tri = Triangle2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)).unwrap();
        let Geometry3::Triangle(lifted) = Geometry2::from(tri).lift(&plane) else {
            panic!("expected triangle");
        };
        assert!(lifted.vertices().iter().all(|v| plane.contains(v, tol)));
        assert!((lifted.area() - 0.5).abs() < 1e-12);
        let square = Polygon2::new(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
        .unwrap();
        assert!(matches!(Geometry2::from(square).lift(&plane), Geometry3::Polygon(_)));
    }

    #[test]
    fn equality_needs_same_variant() {
        let tol = Tolerance::default();
        let a = Geometry2::from(Point2::new(1.0, 1.0));
        let b = Geometry2::from(Point2::new(1.0002, 1.0));
        assert!(a.almost_eq(&b, tol));
        let seg = Segment2::new(Point2::new(1.0, 1.0), Point2::new(2.0, 1.0)).unwrap();
        assert!(!a.almost_eq(&Geometry2::from(seg), tol));
    }
}
