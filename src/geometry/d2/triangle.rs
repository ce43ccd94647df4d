use crate::error::{GeometryError, Result};
use crate::math::points::is_collinear;
use crate::math::vector::perp_product;
use crate::math::{Aabb2, AlmostEq, Location, Orientation, Point2, Tolerance};

use super::{Polygon2, Segment2};

/// A non-degenerate 2D triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2 {
    vertices: [Point2; 3],
}

impl Triangle2 {
    /// # Errors
    ///
    /// Fails if two vertices coincide or all three are collinear.
    pub fn new(p0: Point2, p1: Point2, p2: Point2) -> Result<Self> {
        Self::new_with(p0, p1, p2, Tolerance::default())
    }

    /// # Errors
    ///
    /// Fails if two vertices coincide or all three are collinear at `tol`.
    pub fn new_with(p0: Point2, p1: Point2, p2: Point2, tol: Tolerance) -> Result<Self> {
        if p0.almost_eq(&p1, tol) || p1.almost_eq(&p2, tol) || p0.almost_eq(&p2, tol) {
            return Err(GeometryError::CoincidentPoints("triangle vertices".into()).into());
        }
        if is_collinear(&p0, &p1, &p2, tol) {
            return Err(GeometryError::Collinear(format!(
                "triangle ({}, {}), ({}, {}), ({}, {})",
                p0.x, p0.y, p1.x, p1.y, p2.x, p2.y
            ))
            .into());
        }
        Ok(Self {
            vertices: [p0, p1, p2],
        })
    }

    /// Builds a triangle from vertices already known to be a proper triangle.
    pub(crate) fn new_unchecked(p0: Point2, p1: Point2, p2: Point2) -> Self {
        Self {
            vertices: [p0, p1, p2],
        }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point2; 3] {
        &self.vertices
    }

    /// Half the perp product of the edges from `p0`; positive when counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        0.5 * perp_product(&(b - a), &(c - a))
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Never `Unknown`: construction rejects collinear vertices.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        if self.signed_area() > 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }

    #[must_use]
    pub fn centroid(&self) -> Point2 {
        let [a, b, c] = &self.vertices;
        Point2::from((a.coords + b.coords + c.coords) / 3.0)
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.edges().iter().map(Segment2::length).sum()
    }

    /// Edges `p0→p1`, `p1→p2`, `p2→p0`.
    #[must_use]
    pub fn edges(&self) -> [Segment2; 3] {
        let [a, b, c] = self.vertices;
        [
            Segment2::new_unchecked(a, b),
            Segment2::new_unchecked(b, c),
            Segment2::new_unchecked(c, a),
        ]
    }

    /// Whether `point` lies inside or on the border.
    ///
    /// The point must be on the interior side of every edge (left for
    /// counter-clockwise triangles, right for clockwise ones) or on the edge.
    #[must_use]
    pub fn contains(&self, point: &Point2, tol: Tolerance) -> bool {
        let inside = match self.orientation() {
            Orientation::Clockwise => Location::Right,
            _ => Location::Left,
        };
        self.edges().iter().all(|edge| {
            let loc = edge.location(point, tol);
            loc == inside || loc == Location::OnSegment
        })
    }

    #[must_use]
    pub fn bounding_box(&self) -> Aabb2 {
        let [a, b, c] = &self.vertices;
        Aabb2 {
            min: Point2::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y)),
            max: Point2::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y)),
        }
    }

    /// The same triangle as a three-vertex polygon.
    #[must_use]
    pub fn to_polygon(&self) -> Polygon2 {
        Polygon2::from_vertices_unchecked(self.vertices.to_vec())
    }
}

impl AlmostEq for Triangle2 {
    /// Same vertex cycle, starting anywhere.
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        (0..3).any(|shift| {
            (0..3).all(|i| self.vertices[i].almost_eq(&other.vertices[(i + shift) % 3], tol))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn collinear_points_rejected() {
        assert!(Triangle2::new(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)).is_err());
        assert!(Triangle2::new(p(0.0, 0.0), p(0.0, 0.0), p(2.0, 1.0)).is_err());
    }

    #[test]
    fn area_orientation_centroid() {
        let t = Triangle2::new(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 3.0)).unwrap();
        assert_relative_eq!(t.area(), 6.0);
        assert_eq!(t.orientation(), Orientation::CounterClockwise);
        assert_relative_eq!(t.centroid().x, 4.0 / 3.0);
        assert_relative_eq!(t.perimeter(), 12.0);

        let cw = Triangle2::new(p(0.0, 0.0), p(0.0, 3.0), p(4.0, 0.0)).unwrap();
        assert_eq!(cw.orientation(), Orientation::Clockwise);
        assert!(t.almost_eq(&Triangle2::new(p(4.0, 0.0), p(0.0, 3.0), p(0.0, 0.0)).unwrap(), Tolerance::default()));
        assert!(!t.almost_eq(&cw, Tolerance::default()));
    }

    #[test]
    fn containment_for_both_orientations() {
        let tol = Tolerance::default();
        let ccw = Triangle2::new(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)).unwrap();
        let cw = Triangle2::new(p(0.0, 0.0), p(0.0, 4.0), p(4.0, 0.0)).unwrap();
        for t in [ccw, cw] {
            assert!(t.contains(&p(1.0, 1.0), tol));
            assert!(t.contains(&p(2.0, 0.0), tol));
            assert!(t.contains(&p(0.0, 0.0), tol));
            assert!(t.contains(&p(2.0, 2.0), tol));
            assert!(!t.contains(&p(3.0, 3.0), tol));
            assert!(!t.contains(&p(5.0, 0.0), tol));
            assert!(!t.contains(&p(-1.0, 1.0), tol));
        }
    }
}
