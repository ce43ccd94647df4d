use crate::error::{GeometryError, Result};
use crate::math::points::remove_collinear;
use crate::math::{Aabb3, AlmostEq, Point3, Tolerance};

use super::Segment3;

/// An open chain of 3D vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline3 {
    vertices: Vec<Point3>,
}

impl Polyline3 {
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` if fewer than two vertices
    /// remain after collinear-point removal.
    pub fn new(vertices: &[Point3]) -> Result<Self> {
        Self::new_with(vertices, Tolerance::default())
    }

    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` if fewer than two vertices
    /// remain after collinear-point removal at `tol`.
    pub fn new_with(vertices: &[Point3], tol: Tolerance) -> Result<Self> {
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

    pub(crate) fn from_vertices_unchecked(vertices: Vec<Point3>) -> Self {
        Self { vertices }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    #[must_use]
    pub fn segments(&self) -> Vec<Segment3> {
        self.vertices
            .windows(2)
            .map(|w| Segment3::new_unchecked(w[0], w[1]))
            .collect()
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments().iter().map(Segment3::length).sum()
    }

    #[must_use]
    pub fn contains(&self, point: &Point3, tol: Tolerance) -> bool {
        self.segments().iter().any(|s| s.contains(point, tol))
    }

    #[must_use]
    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::enclosing(&self.vertices[0], &self.vertices[1..])
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }
}

impl AlmostEq for Polyline3 {
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.vertices.almost_eq(&other.vertices, tol)
    }
}
