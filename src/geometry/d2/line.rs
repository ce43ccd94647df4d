use crate::error::{GeometryError, Result};
use crate::math::classify::side_of_line;
use crate::math::vector::{is_parallel2, is_perpendicular, normalize2};
use crate::math::{AlmostEq, Location, Point2, Tolerance, UnitVector2, Vector2};

/// An infinite 2D line defined by an origin point and a unit direction.
///
/// The parametric form is: `P(t) = origin + t * direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2 {
    origin: Point2,
    direction: UnitVector2,
}

impl Line2 {
    /// Creates a new line from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point2, direction: Vector2) -> Result<Self> {
        Ok(Self {
            origin,
            direction: normalize2(&direction)?,
        })
    }

    /// Creates a line from an origin and an already normalized direction.
    #[must_use]
    pub fn from_unit(origin: Point2, direction: UnitVector2) -> Self {
        Self { origin, direction }
    }

    /// Creates the line through `a` and `b`, directed from `a` to `b`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::CoincidentPoints` if `a` and `b` coincide.
    pub fn from_points(a: Point2, b: Point2, tol: Tolerance) -> Result<Self> {
        if a.almost_eq(&b, tol) {
            return Err(GeometryError::CoincidentPoints(format!(
                "line through ({}, {}) twice",
                a.x, a.y
            ))
            .into());
        }
        Self::new(a, b - a)
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &UnitVector2 {
        &self.direction
    }

    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.origin + self.direction.into_inner() * t
    }

    /// Signed distance from the origin to the foot of `point` along the direction.
    #[must_use]
    pub fn parameter_of(&self, point: &Point2) -> f64 {
        (point - self.origin).dot(&self.direction)
    }

    /// Orthogonal projection `p0 + ((p - p0) · d) d`.
    #[must_use]
    pub fn project(&self, point: &Point2) -> Point2 {
        self.point_at(self.parameter_of(point))
    }

    #[must_use]
    pub fn distance_to(&self, point: &Point2) -> f64 {
        (point - self.project(point)).norm()
    }

    /// Returns `Left`, `Right` or `OnLine`.
    #[must_use]
    pub fn location(&self, point: &Point2, tol: Tolerance) -> Location {
        side_of_line(&self.origin, &self.direction, point, tol)
    }

    #[must_use]
    pub fn contains(&self, point: &Point2, tol: Tolerance) -> bool {
        self.location(point, tol) == Location::OnLine
    }

    #[must_use]
    pub fn is_parallel(&self, other: &Self, tol: Tolerance) -> bool {
        is_parallel2(&self.direction, &other.direction, tol)
    }

    #[must_use]
    pub fn is_perpendicular(&self, other: &Self, tol: Tolerance) -> bool {
        is_perpendicular(&self.direction, &other.direction, tol)
    }

    /// The same point set with the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            origin: self.origin,
            direction: -self.direction,
        }
    }
}

impl AlmostEq for Line2 {
    /// Lines are equal when they describe the same point set, regardless of
    /// origin or sense.
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.is_parallel(other, tol) && self.contains(&other.origin, tol) && other.contains(&self.origin, tol)
    }
}
