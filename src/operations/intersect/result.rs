use crate::geometry::{
    Geometry2, Geometry3, Line2, Line3, Plane, Polygon2, Polygon3, Polyline2, Polyline3, Ray2, Ray3,
    Segment2, Segment3, Triangle2, Triangle3,
};
use crate::math::{AlmostEq, Point2, Point3, Tolerance};

/// Outcome of a planar intersection or overlap query.
///
/// `None` is an ordinary value: two shapes that do not meet are not an error.
/// Multi-part results are `Segments` when every part is a segment and
/// `Collection` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection2 {
    None,
    Point(Point2),
    Line(Line2),
    Ray(Ray2),
    Segment(Segment2),
    Triangle(Triangle2),
    Polygon(Polygon2),
    Polyline(Polyline2),
    Segments(Vec<Segment2>),
    Collection(Vec<Geometry2>),
}

/// Outcome of a spatial intersection or overlap query.
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection3 {
    None,
    Point(Point3),
    Line(Line3),
    Ray(Ray3),
    Segment(Segment3),
    Triangle(Triangle3),
    Polygon(Polygon3),
    Polyline(Polyline3),
    Plane(Plane),
    Segments(Vec<Segment3>),
    Collection(Vec<Geometry3>),
}

impl Intersection2 {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Highest topological dimension among the parts; `None` when empty.
    #[must_use]
    pub fn dimension(&self) -> Option<u8> {
        self.geometries().iter().map(Geometry2::dimension).max()
    }

    /// The parts of the result as individual shapes.
    #[must_use]
    pub fn geometries(&self) -> Vec<Geometry2> {
        match self {
            Self::None => Vec::new(),
            Self::Point(p) => vec![Geometry2::Point(*p)],
            Self::Line(l) => vec![Geometry2::Line(*l)],
            Self::Ray(r) => vec![Geometry2::Ray(*r)],
            Self::Segment(s) => vec![Geometry2::Segment(*s)],
            Self::Triangle(t) => vec![Geometry2::Triangle(*t)],
            Self::Polygon(p) => vec![Geometry2::Polygon(p.clone())],
            Self::Polyline(p) => vec![Geometry2::Polyline(p.clone())],
            Self::Segments(segments) => segments.iter().copied().map(Geometry2::Segment).collect(),
            Self::Collection(parts) => parts.clone(),
        }
    }

    /// Builds a normalized result from loose parts.
    ///
    /// Repeated parts are dropped, as are points already covered by another
    /// part. One remaining part gives the matching single variant.
    #[must_use]
    pub fn from_pieces(pieces: Vec<Geometry2>, tol: Tolerance) -> Self {
        let (points, shapes): (Vec<_>, Vec<_>) = pieces
            .into_iter()
            .partition(|g| matches!(g, Geometry2::Point(_)));

        let mut kept: Vec<Geometry2> = Vec::new();
        for shape in shapes {
            if !kept.iter().any(|k| k.almost_eq(&shape, tol)) {
                kept.push(shape);
            }
        }
        for point in points {
            if let Geometry2::Point(p) = point {
                if !kept.iter().any(|k| k.contains_point(&p, tol)) {
                    kept.push(point);
                }
            }
        }

        if kept.len() > 1 && kept.iter().all(|g| matches!(g, Geometry2::Segment(_))) {
            return Self::Segments(
                kept.into_iter()
                    .filter_map(|g| match g {
                        Geometry2::Segment(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            );
        }
        match kept.len() {
            0 => Self::None,
            1 => kept.pop().map_or(Self::None, Self::from),
            _ => Self::Collection(kept),
        }
    }

    /// Maps the result from the local frame of `plane` into space.
    #[must_use]
    pub fn lift(&self, plane: &Plane) -> Intersection3 {
        match self {
            Self::None => Intersection3::None,
            Self::Segments(segments) => Intersection3::Segments(
                segments
                    .iter()
                    .map(|s| Segment3::new_unchecked(plane.evaluate(s.p0()), plane.evaluate(s.p1())))
                    .collect(),
            ),
            Self::Collection(parts) => {
                Intersection3::Collection(parts.iter().map(|g| g.lift(plane)).collect())
            }
            single => single
                .geometries()
                .first()
                .map_or(Intersection3::None, |g| Intersection3::from(g.lift(plane))),
        }
    }
}

impl Intersection3 {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    pub fn dimension(&self) -> Option<u8> {
        self.geometries().iter().map(Geometry3::dimension).max()
    }

    #[must_use]
    pub fn geometries(&self) -> Vec<Geometry3> {
        match self {
            Self::None => Vec::new(),
            Self::Point(p) => vec![Geometry3::Point(*p)],
            Self::Line(l) => vec![Geometry3::Line(*l)],
            Self::Ray(r) => vec![Geometry3::Ray(*r)],
            Self::Segment(s) => vec![Geometry3::Segment(*s)],
            Self::Triangle(t) => vec![Geometry3::Triangle(*t)],
            Self::Polygon(p) => vec![Geometry3::Polygon(p.clone())],
            Self::Polyline(p) => vec![Geometry3::Polyline(p.clone())],
            Self::Plane(p) => vec![Geometry3::Plane(*p)],
            Self::Segments(segments) => segments.iter().copied().map(Geometry3::Segment).collect(),
            Self::Collection(parts) => parts.clone(),
        }
    }

    /// Spatial counterpart of [`Intersection2::from_pieces`].
    #[must_use]
    pub fn from_pieces(pieces: Vec<Geometry3>, tol: Tolerance) -> Self {
        let (points, shapes): (Vec<_>, Vec<_>) = pieces
            .into_iter()
            .partition(|g| matches!(g, Geometry3::Point(_)));

        let mut kept: Vec<Geometry3> = Vec::new();
        for shape in shapes {
            if !kept.iter().any(|k| k.almost_eq(&shape, tol)) {
                kept.push(shape);
            }
        }
        for point in points {
            if let Geometry3::Point(p) = point {
                if !kept.iter().any(|k| k.contains_point(&p, tol)) {
                    kept.push(point);
                }
            }
        }

        if kept.len() > 1 && kept.iter().all(|g| matches!(g, Geometry3::Segment(_))) {
            return Self::Segments(
                kept.into_iter()
                    .filter_map(|g| match g {
                        Geometry3::Segment(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            );
        }
        match kept.len() {
            0 => Self::None,
            1 => kept.pop().map_or(Self::None, Self::from),
            _ => Self::Collection(kept),
        }
    }
}

impl From<Geometry2> for Intersection2 {
    fn from(geometry: Geometry2) -> Self {
        match geometry {
            Geometry2::Point(p) => Self::Point(p),
            Geometry2::Line(l) => Self::Line(l),
            Geometry2::Ray(r) => Self::Ray(r),
            Geometry2::Segment(s) => Self::Segment(s),
            Geometry2::Triangle(t) => Self::Triangle(t),
            Geometry2::Polygon(p) => Self::Polygon(p),
            Geometry2::Polyline(p) => Self::Polyline(p),
        }
    }
}

impl From<Geometry3> for Intersection3 {
    fn from(geometry: Geometry3) -> Self {
        match geometry {
            Geometry3::Point(p) => Self::Point(p),
            Geometry3::Line(l) => Self::Line(l),
            Geometry3::Ray(r) => Self::Ray(r),
            Geometry3::Segment(s) => Self::Segment(s),
            Geometry3::Triangle(t) => Self::Triangle(t),
            Geometry3::Polygon(p) => Self::Polygon(p),
            Geometry3::Polyline(p) => Self::Polyline(p),
            Geometry3::Plane(p) => Self::Plane(p),
        }
    }
}

impl AlmostEq for Intersection2 {
    /// Same parts in any order.
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        same_parts(&self.geometries(), &other.geometries(), tol)
    }
}

impl AlmostEq for Intersection3 {
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        same_parts(&self.geometries(), &other.geometries(), tol)
    }
}

fn same_parts<T: AlmostEq>(a: &[T], b: &[T], tol: Tolerance) -> bool {
    a.len() == b.len()
        && a.iter().all(|x| b.iter().any(|y| x.almost_eq(y, tol)))
        && b.iter().all(|y| a.iter().any(|x| y.almost_eq(x, tol)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn seg(a: (f64, f64), b: (f64, f64)) -> Geometry2 {
        Geometry2::Segment(Segment2::new(p(a.0, a.1), p(b.0, b.1)).unwrap())
    }

    #[test]
    fn empty_pieces_are_none() {
        let result = Intersection2::from_pieces(Vec::new(), Tolerance::default());
        assert!(result.is_none());
        assert_eq!(result.dimension(), None);
    }

    #[test]
    fn points_on_segments_are_absorbed() {
        let tol = Tolerance::default();
        let result = Intersection2::from_pieces(
            vec![
                Geometry2::Point(p(1.0, 0.0)),
                seg((0.0, 0.0), (2.0, 0.0)),
                Geometry2::Point(p(1.0002, 0.0)),
            ],
            tol,
        );
        assert!(matches!(result, Intersection2::Segment(_)));
    }

    #[test]
    fn several_segments_and_mixed_parts() {
        let tol = Tolerance::default();
        let segments = Intersection2::from_pieces(
            vec![seg((0.0, 0.0), (1.0, 0.0)), seg((2.0, 0.0), (3.0, 0.0)), seg((1.0, 0.0), (0.0, 0.0))],
            tol,
        );
        match &segments {
            Intersection2::Segments(s) => assert_eq!(s.len(), 2),
            other => panic!("expected segments, got {other:?}"),
        }
        let mixed = Intersection2::from_pieces(vec![seg((0.0, 0.0), (1.0, 0.0)), Geometry2::Point(p(5.0, 5.0))], tol);
        assert!(matches!(mixed, Intersection2::Collection(ref parts) if parts.len() == 2));
        assert_eq!(mixed.dimension(), Some(1));
    }

    #[test]
    fn lift_preserves_variant() {
        let plane = Plane::from_normal(Point3::new(0.0, 0.0, 1.0), Vector3::z()).unwrap();
        let lifted = Intersection2::Point(p(0.0, 0.0)).lift(&plane);
        assert!(matches!(lifted, Intersection3::Point(q) if q.almost_eq(&Point3::new(0.0, 0.0, 1.0), Tolerance::default())));
        let segments = Intersection2::from_pieces(
            vec![seg((0.0, 0.0), (1.0, 0.0)), seg((2.0, 0.0), (3.0, 0.0))],
            Tolerance::default(),
        );
        assert!(matches!(segments.lift(&plane), Intersection3::Segments(ref s) if s.len() == 2));
    }
}
