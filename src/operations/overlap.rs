//! Overlap: the part of an intersection with the lower of the two input
//! dimensions. Two segments crossing in a point intersect but do not
//! overlap; two collinear segments sharing a stretch do.

use crate::error::Result;
use crate::geometry::{Geometry2, Geometry3};
use crate::math::Tolerance;

use super::intersect::{areas_overlap, pieces_2d, pieces_3d, Intersection2, Intersection3, Shape2, Shape3};

/// The overlapping part of two planar geometries.
///
/// # Errors
///
/// Same as [`super::intersection_2d`].
pub fn overlap_2d(a: &Geometry2, b: &Geometry2, tol: Tolerance) -> Result<Intersection2> {
    let dim = a.dimension().min(b.dimension());
    let pieces = pieces_2d(&Shape2::of(a), &Shape2::of(b), tol)?;
    Ok(Intersection2::from_pieces(
        pieces.into_iter().filter(|g| g.dimension() == dim).collect(),
        tol,
    ))
}

/// The overlapping part of two spatial geometries.
///
/// # Errors
///
/// Same as [`super::intersection_3d`].
pub fn overlap_3d(a: &Geometry3, b: &Geometry3, tol: Tolerance) -> Result<Intersection3> {
    let dim = a.dimension().min(b.dimension());
    let pieces = pieces_3d(&Shape3::of(a), &Shape3::of(b), tol)?;
    Ok(Intersection3::from_pieces(
        pieces.into_iter().filter(|g| g.dimension() == dim).collect(),
        tol,
    ))
}

/// Whether two planar geometries overlap. Never fails.
#[must_use]
pub fn overlaps_2d(a: &Geometry2, b: &Geometry2, tol: Tolerance) -> bool {
    match (Shape2::of(a), Shape2::of(b)) {
        (Shape2::Area(p), Shape2::Area(q)) => areas_overlap(&p, &q, tol),
        (x, y) => {
            let dim = a.dimension().min(b.dimension());
            pieces_2d(&x, &y, tol).is_ok_and(|pieces| pieces.iter().any(|g| g.dimension() == dim))
        }
    }
}

/// Whether two spatial geometries overlap. Never fails.
#[must_use]
pub fn overlaps_3d(a: &Geometry3, b: &Geometry3, tol: Tolerance) -> bool {
    match (Shape3::of(a), Shape3::of(b)) {
        (Shape3::Area(p), Shape3::Area(q)) => {
            p.is_coplanar(&q, tol) && areas_overlap(&p.outline, &q.outline_in(&p.plane), tol)
        }
        (x, y) => {
            let dim = a.dimension().min(b.dimension());
            pieces_3d(&x, &y, tol).is_ok_and(|pieces| pieces.iter().any(|g| g.dimension() == dim))
        }
    }
}

impl Geometry2 {
    /// See [`overlap_2d`].
    ///
    /// # Errors
    ///
    /// Same as [`overlap_2d`].
    pub fn overlap(&self, other: &Self, tol: Tolerance) -> Result<Intersection2> {
        overlap_2d(self, other, tol)
    }

    #[must_use]
    pub fn overlaps(&self, other: &Self, tol: Tolerance) -> bool {
        overlaps_2d(self, other, tol)
    }
}

impl Geometry3 {
    /// See [`overlap_3d`].
    ///
    /// # Errors
    ///
    /// Same as [`overlap_3d`].
    pub fn overlap(&self, other: &Self, tol: Tolerance) -> Result<Intersection3> {
        overlap_3d(self, other, tol)
    }

    #[must_use]
    pub fn overlaps(&self, other: &Self, tol: Tolerance) -> bool {
        overlaps_3d(self, other, tol)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Plane, Polygon2, Polygon3, Segment2, Triangle2};
    use crate::math::{AlmostEq, Point2, Point3, Vector3};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn seg(a: Point2, b: Point2) -> Geometry2 {
        Geometry2::Segment(Segment2::new(a, b).unwrap())
    }

    #[test]
    fn crossing_segments_intersect_without_overlapping() {
        let tol = Tolerance::default();
        let a = seg(p(0.0, 0.0), p(2.0, 2.0));
        let b = seg(p(0.0, 2.0), p(2.0, 0.0));
        assert!(a.intersects(&b, tol));
        assert!(!a.overlaps(&b, tol));
        assert!(a.overlap(&b, tol).unwrap().is_none());
    }

    #[test]
    fn collinear_segments() {
        let tol = Tolerance::default();
        let a = seg(p(0.0, 0.0), p(2.0, 0.0));
        let shared = seg(p(1.0, 0.0), p(3.0, 0.0));
        let touching = seg(p(2.0, 0.0), p(3.0, 0.0));
        let apart = seg(p(2.5, 0.0), p(3.0, 0.0));
        let expected = Intersection2::Segment(Segment2::new(p(1.0, 0.0), p(2.0, 0.0)).unwrap());
        assert!(a.overlap(&shared, tol).unwrap().almost_eq(&expected, tol));
        assert!(a.overlaps(&shared, tol) && shared.overlaps(&a, tol));
        assert!(a.intersects(&touching, tol));
        assert!(!a.overlaps(&touching, tol));
        assert!(!a.intersects(&apart, tol) && !a.overlaps(&apart, tol));
    }

    #[test]
    fn segment_over_polygon_keeps_linear_part() {
        let tol = Tolerance::default();
        let tri = Geometry2::Triangle(Triangle2::new(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)).unwrap());
        let s = seg(p(-1.0, 1.0), p(5.0, 1.0));
        let expected = Intersection2::Segment(Segment2::new(p(0.0, 1.0), p(3.0, 1.0)).unwrap());
        assert!(s.overlap(&tri, tol).unwrap().almost_eq(&expected, tol));
        let corner = seg(p(4.0, 0.0), p(5.0, 1.0));
        assert!(corner.intersects(&tri, tol));
        assert!(!corner.overlaps(&tri, tol));
    }

    #[test]
    fn edge_sharing_squares_do_not_overlap() {
        let tol = Tolerance::default();
        let left = Geometry2::Polygon(Polygon2::new(&[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]).unwrap());
        let right = Geometry2::Polygon(Polygon2::new(&[p(1.0, 0.0), p(2.0, 0.0), p(2.0, 1.0), p(1.0, 1.0)]).unwrap());
        assert!(left.intersects(&right, tol));
        assert!(!left.overlaps(&right, tol));
        assert!(left.overlaps(&left, tol));
    }

    #[test]
    fn spatial_overlap_needs_coplanar_areas() {
        let tol = Tolerance::default();
        let q = |x: f64, y: f64, z: f64| Point3::new(x, y, z);
        let flat = Geometry3::Polygon(
            Polygon3::new(&[q(0.0, 0.0, 0.0), q(2.0, 0.0, 0.0), q(2.0, 2.0, 0.0), q(0.0, 2.0, 0.0)]).unwrap(),
        );
        let shifted = Geometry3::Polygon(
            Polygon3::new(&[q(1.0, 1.0, 0.0), q(3.0, 1.0, 0.0), q(3.0, 3.0, 0.0), q(1.0, 3.0, 0.0)]).unwrap(),
        );
        let wall = Geometry3::Polygon(
            Polygon3::new(&[q(1.0, -1.0, -1.0), q(1.0, 3.0, -1.0), q(1.0, 3.0, 1.0), q(1.0, -1.0, 1.0)]).unwrap(),
        );
        assert!(flat.overlaps(&shifted, tol) && shifted.overlaps(&flat, tol));
        assert!(flat.intersects(&wall, tol));
        assert!(!flat.overlaps(&wall, tol));
        let floor = Geometry3::Plane(Plane::from_normal(q(0.0, 0.0, 0.0), Vector3::z()).unwrap());
        assert!(floor.overlaps(&flat, tol));
        assert!(!floor.overlaps(&wall, tol));
    }
}
