use crate::error::{GeometryError, Result};
use crate::math::vector::{is_parallel3, is_perpendicular, normalize3};
use crate::math::{AlmostEq, Point3, Tolerance, UnitVector3, Vector3};

/// An infinite 3D line defined by an origin point and a unit direction.
///
/// The parametric form is: `P(t) = origin + t * direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3 {
    origin: Point3,
    direction: UnitVector3,
}

impl Line3 {
    /// Creates a new line from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        Ok(Self {
            origin,
            direction: normalize3(&direction)?,
        })
    }

    #[must_use]
    pub fn from_unit(origin: Point3, direction: UnitVector3) -> Self {
        Self { origin, direction }
    }

    /// Creates the line through `a` and `b`, directed from `a` to `b`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::CoincidentPoints` if `a` and `b` coincide.
    pub fn from_points(a: Point3, b: Point3, tol: Tolerance) -> Result<Self> {
        if a.almost_eq(&b, tol) {
            return Err(GeometryError::CoincidentPoints(format!(
                "line through ({}, {}, {}) twice",
                a.x, a.y, a.z
            ))
            .into());
        }
        Self::new(a, b - a)
    }

    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    #[must_use]
    pub fn direction(&self) -> &UnitVector3 {
        &self.direction
    }

    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.origin + self.direction.into_inner() * t
    }

    #[must_use]
    pub fn parameter_of(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(&self.direction)
    }

    /// Orthogonal projection `p0 + ((p - p0) · d) d`.
    #[must_use]
    pub fn project(&self, point: &Point3) -> Point3 {
        self.point_at(self.parameter_of(point))
    }

    #[must_use]
    pub fn distance_to(&self, point: &Point3) -> f64 {
        (point - self.project(point)).norm()
    }

    #[must_use]
    pub fn contains(&self, point: &Point3, tol: Tolerance) -> bool {
        tol.is_zero(self.distance_to(point))
    }

    #[must_use]
    pub fn is_parallel(&self, other: &Self, tol: Tolerance) -> bool {
        is_parallel3(&self.direction, &other.direction, tol)
    }

    #[must_use]
    pub fn is_perpendicular(&self, other: &Self, tol: Tolerance) -> bool {
        is_perpendicular(&self.direction, &other.direction, tol)
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            origin: self.origin,
            direction: -self.direction,
        }
    }
}

impl AlmostEq for Line3 {
    /// Same point set, regardless of origin or sense.
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.is_parallel(other, tol) && self.contains(&other.origin, tol) && other.contains(&self.origin, tol)
    }
}
