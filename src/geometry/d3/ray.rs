use crate::error::Result;
use crate::math::vector::normalize3;
use crate::math::{AlmostEq, Point3, Tolerance, UnitVector3, Vector3};

use super::Line3;

/// A half-line starting at `origin` and extending along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray3 {
    origin: Point3,
    direction: UnitVector3,
}

impl Ray3 {
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

    /// Ray from `origin` through `through`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::CoincidentPoints` if the two points coincide.
    pub fn from_points(origin: Point3, through: Point3, tol: Tolerance) -> Result<Self> {
        let line = Line3::from_points(origin, through, tol)?;
        Ok(Self::from_unit(origin, *line.direction()))
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

    /// Closest point of the ray; points behind the origin project onto it.
    #[must_use]
    pub fn project(&self, point: &Point3) -> Point3 {
        self.point_at(self.parameter_of(point).max(0.0))
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
    pub fn to_line(&self) -> Line3 {
        Line3::from_unit(self.origin, self.direction)
    }
}

impl AlmostEq for Ray3 {
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.origin.almost_eq(&other.origin, tol) && self.direction.almost_eq(&other.direction, tol)
    }
}
