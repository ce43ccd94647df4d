use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::classify::orientation2;
use crate::math::points::remove_collinear;
use crate::math::{Aabb2, AlmostEq, Angle, Location, Orientation, Point2, Tolerance};

use super::Segment2;

/// A simple 2D polygon given by its vertex cycle (no holes).
///
/// Construction removes repeated and collinear vertices, so every stored
/// vertex is a genuine corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2 {
    vertices: Vec<Point2>,
}

impl Polygon2 {
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` if fewer than three corners
    /// remain after collinear-point removal.
    pub fn new(vertices: &[Point2]) -> Result<Self> {
        Self::new_with(vertices, Tolerance::default())
    }

    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` if fewer than three corners
    /// remain after collinear-point removal at `tol`.
    pub fn new_with(vertices: &[Point2], tol: Tolerance) -> Result<Self> {
        let cleaned = remove_collinear(vertices, true, tol);
        if cleaned.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                kind: "polygon",
                min: 3,
                got: cleaned.len(),
            }
            .into());
        }
        Ok(Self { vertices: cleaned })
    }

    pub(crate) fn from_vertices_unchecked(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges in vertex order, closing back to the first vertex.
    #[must_use]
    pub fn edges(&self) -> Vec<Segment2> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Segment2::new_unchecked(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Shoelace area; positive for counter-clockwise vertex order.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let mut sum = 0.0;
        for i in 0..n {
            let a = &self.vertices[i];
            let b = &self.vertices[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        sum * 0.5
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        if self.signed_area() > 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.edges().iter().map(Segment2::length).sum()
    }

    /// Area centroid. Only meaningful for simple polygons.
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        let n = self.vertices.len();
        let (mut cx, mut cy) = (0.0, 0.0);
        for i in 0..n {
            let a = &self.vertices[i];
            let b = &self.vertices[(i + 1) % n];
            let cross = a.x * b.y - b.x * a.y;
            cx += (a.x + b.x) * cross;
            cy += (a.y + b.y) * cross;
        }
        let six_area = 6.0 * self.signed_area();
        Point2::new(cx / six_area, cy / six_area)
    }

    #[must_use]
    pub fn bounding_box(&self) -> Aabb2 {
        Aabb2::enclosing(&self.vertices[0], &self.vertices[1..])
    }

    /// Whether every corner turns the same way and the boundary winds
    /// around exactly once.
    ///
    /// The second condition rejects self-intersecting stars, whose corners
    /// all turn alike but whose total turning is a multiple of a full turn.
    #[must_use]
    pub fn is_convex(&self, tol: Tolerance) -> bool {
        let v = self.vertices.as_slice();
        let n = v.len();
        let prev = move |i: usize| &v[(i + n - 1) % n];
        let next = move |i: usize| &v[(i + 1) % n];
        let turn = |i: usize| orientation2(prev(i), &v[i], next(i), tol);
        let first = turn(0);
        if first == Orientation::Unknown || !(1..n).all(|i| turn(i) == first) {
            return false;
        }
        let total: f64 = (0..n)
            .map(|i| {
                let incoming = v[i] - prev(i);
                let outgoing = next(i) - v[i];
                Angle::signed_2d(&incoming, &outgoing).radians()
            })
            .sum();
        tol.equals(total.abs(), TAU)
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// The same polygon with counter-clockwise vertex order.
    #[must_use]
    pub fn to_ccw(&self) -> Self {
        if self.orientation() == Orientation::Clockwise {
            self.reversed()
        } else {
            self.clone()
        }
    }

    /// Whether `point` lies on one of the edges.
    #[must_use]
    pub fn on_boundary(&self, point: &Point2, tol: Tolerance) -> bool {
        self.edges().iter().any(|e| e.contains(point, tol))
    }

    /// Winding number of the boundary around `point`.
    ///
    /// Each edge crossing the horizontal through `point` upwards with the
    /// point on its left adds one; each downward crossing with the point on
    /// its right subtracts one. Points on the boundary give an unspecified
    /// value; use [`Polygon2::contains`] for boundary-inclusive membership.
    #[must_use]
    pub fn winding_number(&self, point: &Point2, tol: Tolerance) -> i32 {
        let mut winding = 0;
        for edge in self.edges() {
            let (a, b) = (edge.p0(), edge.p1());
            if a.y <= point.y {
                if b.y > point.y && edge.location(point, tol) == Location::Left {
                    winding += 1;
                }
            } else if b.y <= point.y && edge.location(point, tol) == Location::Right {
                winding -= 1;
            }
        }
        winding
    }

    /// Whether `point` lies inside or on the border.
    #[must_use]
    pub fn contains(&self, point: &Point2, tol: Tolerance) -> bool {
        if !self.bounding_box().contains(point, tol) {
            return false;
        }
        if self.on_boundary(point, tol) {
            return true;
        }
        self.winding_number(point, tol) != 0
    }

    /// Whether `point` lies strictly inside, off the border.
    #[must_use]
    pub fn contains_strictly(&self, point: &Point2, tol: Tolerance) -> bool {
        self.bounding_box().contains(point, tol)
            && !self.on_boundary(point, tol)
            && self.winding_number(point, tol) != 0
    }
}

impl AlmostEq for Polygon2 {
    /// Same vertex cycle, starting anywhere, same direction.
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        let n = self.vertices.len();
        if n != other.vertices.len() {
            return false;
        }
        (0..n).any(|shift| {
            (0..n).all(|i| self.vertices[i].almost_eq(&other.vertices[(i + shift) % n], tol))
        })
    }
}
