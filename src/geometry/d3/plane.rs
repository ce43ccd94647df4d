use nalgebra::Unit;

use crate::error::{GeometryError, Result};
use crate::math::intersect_3d::line_line_intersect_3d;
use crate::math::points::is_collinear;
use crate::math::vector::{is_parallel3, normalize3};
use crate::math::{AlmostEq, Point2, Point3, Tolerance, UnitVector3, Vector2, Vector3};

use super::Line3;

/// An infinite plane in 3D space.
///
/// Defined by an origin point and a unit normal. Two in-plane axes
/// (`axis_u`, `axis_v`) are derived from the normal so that
/// `(axis_u, axis_v, normal)` is a right-handed orthonormal frame.
///
/// Parametric form: `P(u, v) = origin + u * axis_u + v * axis_v`.
/// [`Plane::project_into`] and [`Plane::evaluate`] are mutually inverse on
/// points of the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    origin: Point3,
    normal: UnitVector3,
    axis_u: UnitVector3,
    axis_v: UnitVector3,
}

impl Plane {
    /// Creates a plane from an origin and a normal vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_normal(origin: Point3, normal: Vector3) -> Result<Self> {
        Ok(Self::from_unit_normal(origin, normalize3(&normal)?))
    }

    /// Creates a plane from an origin and a unit normal.
    #[must_use]
    pub fn from_unit_normal(origin: Point3, normal: UnitVector3) -> Self {
        // Choose a reference vector not parallel to the normal
        let reference = if normal.x.abs() < 0.9 {
            Vector3::x()
        } else {
            Vector3::y()
        };

        let axis_u = Unit::new_normalize(normal.cross(&reference));
        let axis_v = Unit::new_normalize(normal.cross(&axis_u));

        Self {
            origin,
            normal,
            axis_u,
            axis_v,
        }
    }

    /// Plane through three non-collinear points, normal `(b - a) × (c - a)`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Collinear` when the points are collinear or coincide.
    pub fn from_points(a: Point3, b: Point3, c: Point3, tol: Tolerance) -> Result<Self> {
        if is_collinear(&a, &b, &c, tol) {
            return Err(GeometryError::Collinear("plane points".into()).into());
        }
        Self::from_normal(a, (b - a).cross(&(c - a)))
    }

    /// Plane spanned by two intersecting lines, normal `d1 × d2`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Collinear` for parallel lines and
    /// `GeometryError::NotIntersecting` for skew lines.
    pub fn from_lines(first: &Line3, second: &Line3, tol: Tolerance) -> Result<Self> {
        if is_parallel3(first.direction(), second.direction(), tol) {
            return Err(GeometryError::Collinear("plane from parallel lines".into()).into());
        }
        let (t, _) = line_line_intersect_3d(
            first.origin(),
            first.direction(),
            second.origin(),
            second.direction(),
            tol,
        )
        .ok_or_else(|| GeometryError::NotIntersecting("plane from skew lines".into()))?;
        Self::from_normal(
            first.point_at(t),
            first.direction().cross(second.direction()),
        )
    }

    /// Returns the origin point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal(&self) -> &UnitVector3 {
        &self.normal
    }

    /// Returns the first in-plane axis.
    #[must_use]
    pub fn axis_u(&self) -> &UnitVector3 {
        &self.axis_u
    }

    /// Returns the second in-plane axis.
    #[must_use]
    pub fn axis_v(&self) -> &UnitVector3 {
        &self.axis_v
    }

    /// Signed distance from `point`; positive on the normal side.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(&self.normal)
    }

    #[must_use]
    pub fn distance_to(&self, point: &Point3) -> f64 {
        self.signed_distance(point).abs()
    }

    #[must_use]
    pub fn contains(&self, point: &Point3, tol: Tolerance) -> bool {
        tol.is_zero(self.signed_distance(point))
    }

    /// Orthogonal foot of `point` on the plane.
    #[must_use]
    pub fn project(&self, point: &Point3) -> Point3 {
        point - self.normal.into_inner() * self.signed_distance(point)
    }

    /// Local `(u, v)` coordinates of the foot of `point`.
    #[must_use]
    pub fn project_into(&self, point: &Point3) -> Point2 {
        let diff = point - self.origin;
        Point2::new(diff.dot(&self.axis_u), diff.dot(&self.axis_v))
    }

    /// In-plane components of a direction.
    #[must_use]
    pub fn project_vector_into(&self, v: &Vector3) -> Vector2 {
        Vector2::new(v.dot(&self.axis_u), v.dot(&self.axis_v))
    }

    /// `origin + u * axis_u + v * axis_v`.
    #[must_use]
    pub fn evaluate(&self, uv: &Point2) -> Point3 {
        self.origin + self.axis_u.into_inner() * uv.x + self.axis_v.into_inner() * uv.y
    }

    /// Lifts an in-plane direction back to 3D.
    #[must_use]
    pub fn evaluate_vector(&self, uv: &Vector2) -> Vector3 {
        self.axis_u.into_inner() * uv.x + self.axis_v.into_inner() * uv.y
    }

    #[must_use]
    pub fn is_parallel(&self, other: &Self, tol: Tolerance) -> bool {
        is_parallel3(&self.normal, &other.normal, tol)
    }

    /// Whether a direction lies in the plane.
    #[must_use]
    pub fn is_parallel_to_direction(&self, direction: &Vector3, tol: Tolerance) -> bool {
        tol.dir_is_zero(self.normal.dot(direction) / direction.norm())
    }

    /// The same plane with the opposite normal.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::from_unit_normal(self.origin, -self.normal)
    }
}

impl AlmostEq for Plane {
    /// Same point set, regardless of origin or normal sense.
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.is_parallel(other, tol) && self.contains(&other.origin, tol)
    }
}
