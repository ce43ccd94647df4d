use nalgebra::Unit;

use crate::error::{GeometryError, Result};
use crate::geometry::d2::Polygon2;
use crate::math::points::remove_collinear;
use crate::math::{Aabb3, AlmostEq, Point3, Tolerance, UnitVector3, Vector3};

use super::{Plane, Segment3};

/// A simple planar polygon in 3D space (no holes).
///
/// Needs at least four corners after collinear-point removal; three-corner
/// regions are [`Triangle3`](super::Triangle3). The normal is the Newell
/// normal of the vertex cycle, so it follows the right-hand rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon3 {
    vertices: Vec<Point3>,
    normal: UnitVector3,
}

impl Polygon3 {
    /// # Errors
    ///
    /// See [`Polygon3::new_with`].
    pub fn new(vertices: &[Point3]) -> Result<Self> {
        Self::new_with(vertices, Tolerance::default())
    }

    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` if fewer than four corners
    /// remain after collinear-point removal, `GeometryError::Degenerate` if
    /// the vertex cycle encloses no area and `GeometryError::NonCoplanar` if
    /// a vertex lies off the support plane.
    pub fn new_with(vertices: &[Point3], tol: Tolerance) -> Result<Self> {
        let cleaned = remove_collinear(vertices, true, tol);
        if cleaned.len() < 4 {
            return Err(GeometryError::TooFewVertices {
                kind: "3d polygon",
                min: 4,
                got: cleaned.len(),
            }
            .into());
        }
        let sum = newell_sum(&cleaned);
        if tol.is_zero(sum.norm()) {
            return Err(GeometryError::Degenerate("polygon encloses no area".into()).into());
        }
        let normal = Unit::new_normalize(sum);
        let plane = Plane::from_unit_normal(cleaned[0], normal);
        if let Some(off) = cleaned.iter().find(|p| !plane.contains(p, tol)) {
            return Err(GeometryError::NonCoplanar(format!(
                "vertex ({}, {}, {}) is {} off the polygon plane",
                off.x,
                off.y,
                off.z,
                plane.signed_distance(off)
            ))
            .into());
        }
        Ok(Self {
            vertices: cleaned,
            normal,
        })
    }

    /// Lifts a planar polygon into 3D through `plane`.
    pub(crate) fn lift_unchecked(polygon: &Polygon2, plane: &Plane) -> Self {
        let vertices: Vec<Point3> = polygon.vertices().iter().map(|p| plane.evaluate(p)).collect();
        let normal = Unit::try_new(newell_sum(&vertices), f64::EPSILON).unwrap_or(*plane.normal());
        Self { vertices, normal }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
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

    #[must_use]
    pub fn normal(&self) -> &UnitVector3 {
        &self.normal
    }

    /// Support plane through the first vertex.
    #[must_use]
    pub fn plane(&self) -> Plane {
        Plane::from_unit_normal(self.vertices[0], self.normal)
    }

    #[must_use]
    pub fn edges(&self) -> Vec<Segment3> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Segment3::new_unchecked(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Half the length of the summed edge cross products.
    #[must_use]
    pub fn area(&self) -> f64 {
        0.5 * newell_sum(&self.vertices).dot(&self.normal).abs()
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.edges().iter().map(Segment3::length).sum()
    }

    #[must_use]
    pub fn centroid(&self) -> Point3 {
        let plane = self.plane();
        plane.evaluate(&self.project_into(&plane).centroid())
    }

    #[must_use]
    pub fn is_convex(&self, tol: Tolerance) -> bool {
        self.project_into(&self.plane()).is_convex(tol)
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self {
            vertices,
            normal: -self.normal,
        }
    }

    /// The polygon in the local `(u, v)` frame of `plane`.
    pub(crate) fn project_into(&self, plane: &Plane) -> Polygon2 {
        Polygon2::from_vertices_unchecked(self.vertices.iter().map(|p| plane.project_into(p)).collect())
    }

    /// Whether `point` lies on the support plane and inside or on the border.
    #[must_use]
    pub fn contains(&self, point: &Point3, tol: Tolerance) -> bool {
        let plane = self.plane();
        plane.contains(point, tol) && self.project_into(&plane).contains(&plane.project_into(point), tol)
    }

    #[must_use]
    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::enclosing(&self.vertices[0], &self.vertices[1..])
    }
}

fn newell_sum(vertices: &[Point3]) -> Vector3 {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].coords.cross(&vertices[(i + 1) % n].coords))
        .sum()
}

impl AlmostEq for Polygon3 {
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn tilted_square() -> Polygon3 {
        Polygon3::new(&[p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(2.0, 2.0, 2.0), p(0.0, 2.0, 2.0)]).unwrap()
    }

    #[test]
    fn needs_four_corners() {
        let err = Polygon3::new(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]).unwrap_err();
        assert!(err.to_string().contains("at least 4"));
        // the midpoint is collinear and removed
        assert!(Polygon3::new(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]).is_err());
    }

    #[test]
    fn non_coplanar_rejected() {
        let err = Polygon3::new(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.5), p(0.0, 1.0, 0.0)]).unwrap_err();
        assert!(matches!(
            err,
            crate::error::GeoformError::Geometry(GeometryError::NonCoplanar(_))
        ));
    }

    #[test]
    fn newell_normal_and_area() {
        let poly = tilted_square();
        let expected = Vector3::new(0.0, -1.0, 1.0).normalize();
        assert!(poly.normal().into_inner().almost_eq(&expected, Tolerance::default()));
        assert_relative_eq!(poly.area(), 4.0 * 2.0_f64.sqrt(), epsilon = 1e-9);
        assert!(poly.centroid().almost_eq(&p(1.0, 1.0, 1.0), Tolerance::default()));
        assert!(poly.is_convex(Tolerance::default()));
    }

    #[test]
    fn contains_projects_into_plane() {
        let tol = Tolerance::default();
        let poly = tilted_square();
        assert!(poly.contains(&p(1.0, 1.0, 1.0), tol));
        assert!(poly.contains(&p(2.0, 1.0, 1.0), tol));
        assert!(!poly.contains(&p(1.0, 1.0, 0.0), tol));
        assert!(!poly.contains(&p(3.0, 1.0, 1.0), tol));
    }
}
