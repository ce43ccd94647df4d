use crate::error::{GeometryError, Result};
use crate::geometry::d2::Triangle2;
use crate::math::points::is_collinear;
use crate::math::{Aabb3, AlmostEq, Point3, Tolerance, UnitVector3};

use super::{Plane, Segment3};

/// A non-degenerate triangle in 3D space.
///
/// The unit normal follows the right-hand rule over `p0 → p1 → p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3 {
    vertices: [Point3; 3],
    normal: UnitVector3,
}

impl Triangle3 {
    /// # Errors
    ///
    /// Fails if two vertices coincide or all three are collinear.
    pub fn new(p0: Point3, p1: Point3, p2: Point3) -> Result<Self> {
        Self::new_with(p0, p1, p2, Tolerance::default())
    }

    /// # Errors
    ///
    /// Fails if two vertices coincide or all three are collinear at `tol`.
    pub fn new_with(p0: Point3, p1: Point3, p2: Point3, tol: Tolerance) -> Result<Self> {
        if p0.almost_eq(&p1, tol) || p1.almost_eq(&p2, tol) || p0.almost_eq(&p2, tol) {
            return Err(GeometryError::CoincidentPoints("triangle vertices".into()).into());
        }
        if is_collinear(&p0, &p1, &p2, tol) {
            return Err(GeometryError::Collinear(format!(
                "triangle ({}, {}, {}), ({}, {}, {}), ({}, {}, {})",
                p0.x, p0.y, p0.z, p1.x, p1.y, p1.z, p2.x, p2.y, p2.z
            ))
            .into());
        }
        Ok(Self::new_unchecked(p0, p1, p2))
    }

    pub(crate) fn new_unchecked(p0: Point3, p1: Point3, p2: Point3) -> Self {
        Self {
            vertices: [p0, p1, p2],
            normal: nalgebra::Unit::new_normalize((p1 - p0).cross(&(p2 - p0))),
        }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    #[must_use]
    pub fn normal(&self) -> &UnitVector3 {
        &self.normal
    }

    /// Support plane through `p0` with the triangle normal.
    #[must_use]
    pub fn plane(&self) -> Plane {
        Plane::from_unit_normal(self.vertices[0], self.normal)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        0.5 * (b - a).cross(&(c - a)).norm()
    }

    #[must_use]
    pub fn centroid(&self) -> Point3 {
        let [a, b, c] = &self.vertices;
        Point3::from((a.coords + b.coords + c.coords) / 3.0)
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.edges().iter().map(Segment3::length).sum()
    }

    #[must_use]
    pub fn edges(&self) -> [Segment3; 3] {
        let [a, b, c] = self.vertices;
        [
            Segment3::new_unchecked(a, b),
            Segment3::new_unchecked(b, c),
            Segment3::new_unchecked(c, a),
        ]
    }

    /// The triangle in the local `(u, v)` frame of `plane`.
    pub(crate) fn project_into(&self, plane: &Plane) -> Triangle2 {
        let [a, b, c] = &self.vertices;
        Triangle2::new_unchecked(plane.project_into(a), plane.project_into(b), plane.project_into(c))
    }

    /// Whether `point` lies on the support plane and inside or on the border.
    #[must_use]
    pub fn contains(&self, point: &Point3, tol: Tolerance) -> bool {
        let plane = self.plane();
        plane.contains(point, tol) && self.project_into(&plane).contains(&plane.project_into(point), tol)
    }

    #[must_use]
    pub fn bounding_box(&self) -> Aabb3 {
        let [a, b, c] = &self.vertices;
        Aabb3 {
            min: a.inf(b).inf(c),
            max: a.sup(b).sup(c),
        }
    }
}

impl AlmostEq for Triangle3 {
    /// Same vertex cycle, starting anywhere.
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        (0..3).any(|shift| {
            (0..3).all(|i| self.vertices[i].almost_eq(&other.vertices[(i + shift) % 3], tol))
        })
    }
}
