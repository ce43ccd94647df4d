use crate::error::{GeometryError, Result};
use crate::math::points::remove_collinear;
use crate::math::{Aabb2, AlmostEq, Point2, Tolerance};

use super::Segment2;

/// An open chain of 2D vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline2 {
    vertices: Vec<Point2>,
}

impl Polyline2 {
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` if fewer than two vertices
    /// remain after collinear-point removal.
    pub fn new(vertices: &[Point2]) -> Result<Self> {
        Self::new_with(vertices, Tolerance::default())
    }

    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` if fewer than two vertices
    /// remain after collinear-point removal at `tol`.
    pub fn new_with(vertices: &[Point2], tol: Tolerance) -> Result<Self> {
        let cleaned = remove_collinear(vertices, false, tol);
        if cleaned.len() < 2 {
            return Err(GeometryError::TooFewVertices {
                kind: "polyline",
                min: 2,
                got: cleaned.len(),
            }
            .into());
        }
        Ok(Self { vertices: cleaned })
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[must_use]
    pub fn segments(&self) -> Vec<Segment2> {
        self.vertices
            .windows(2)
            .map(|w| Segment2::new_unchecked(w[0], w[1]))
            .collect()
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments().iter().map(Segment2::length).sum()
    }

    #[must_use]
    pub fn contains(&self, point: &Point2, tol: Tolerance) -> bool {
        self.segments().iter().any(|s| s.contains(point, tol))
    }

    #[must_use]
    pub fn bounding_box(&self) -> Aabb2 {
        Aabb2::enclosing(&self.vertices[0], &self.vertices[1..])
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }
}

impl AlmostEq for Polyline2 {
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.vertices.almost_eq(&other.vertices, tol)
    }
}
