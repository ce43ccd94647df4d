use crate::error::Result;
use crate::math::classify::side_of_line;
use crate::math::vector::normalize2;
use crate::math::{AlmostEq, Location, Point2, Tolerance, UnitVector2, Vector2};

use super::Line2;

/// A half-line starting at `origin` and extending along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2 {
    origin: Point2,
    direction: UnitVector2,
}

impl Ray2 {
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point2, direction: Vector2) -> Result<Self> {
        Ok(Self {
            origin,
            direction: normalize2(&direction)?,
        })
    }

    #[must_use]
    pub fn from_unit(origin: Point2, direction: UnitVector2) -> Self {
        Self { origin, direction }
    }

    /// Ray from `origin` through `through`.
    ///
    /// # Errors
    ///
    /// Fails when the two points coincide.
    pub fn from_points(origin: Point2, through: Point2, tol: Tolerance) -> Result<Self> {
        let line = Line2::from_points(origin, through, tol)?;
        Ok(Self::from_unit(origin, *line.direction()))
    }

    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    #[must_use]
    pub fn direction(&self) -> &UnitVector2 {
        &self.direction
    }

    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.origin + self.direction.into_inner() * t
    }

    #[must_use]
    pub fn parameter_of(&self, point: &Point2) -> f64 {
        (point - self.origin).dot(&self.direction)
    }

    /// Closest point on the ray; points behind the origin project onto it.
    #[must_use]
    pub fn project(&self, point: &Point2) -> Point2 {
        self.point_at(self.parameter_of(point).max(0.0))
    }

    #[must_use]
    pub fn distance_to(&self, point: &Point2) -> f64 {
        (point - self.project(point)).norm()
    }

    /// `Left`, `Right`, `OnLine` (on the ray) or `Behind` (collinear, before the origin).
    #[must_use]
    pub fn location(&self, point: &Point2, tol: Tolerance) -> Location {
        match side_of_line(&self.origin, &self.direction, point, tol) {
            Location::OnLine if tol.lt(self.parameter_of(point), 0.0) => Location::Behind,
            other => other,
        }
    }

    #[must_use]
    pub fn contains(&self, point: &Point2, tol: Tolerance) -> bool {
        self.location(point, tol) == Location::OnLine
    }

    /// The carrier line.
    #[must_use]
    pub fn to_line(&self) -> Line2 {
        Line2::from_unit(self.origin, self.direction)
    }
}

impl AlmostEq for Ray2 {
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.origin.almost_eq(&other.origin, tol) && self.direction.almost_eq(&other.direction, tol)
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
    fn behind_origin_is_not_on_ray() {
        let tol = Tolerance::default();
        let ray = Ray2::new(p(0.0, 0.0), Vector2::new(1.0, 0.0)).unwrap();
        assert_eq!(ray.location(&p(3.0, 0.0), tol), Location::OnLine);
        assert_eq!(ray.location(&p(-3.0, 0.0), tol), Location::Behind);
        assert_eq!(ray.location(&p(0.0, 0.0), tol), Location::OnLine);
        assert_eq!(ray.location(&p(1.0, 1.0), tol), Location::Left);
        assert!(!ray.contains(&p(-0.1, 0.0), tol));
    }

    #[test]
    fn projection_clamps_to_origin() {
        let ray = Ray2::from_points(p(1.0, 1.0), p(2.0, 1.0), Tolerance::default()).unwrap();
        let q = ray.project(&p(-5.0, 3.0));
        assert_relative_eq!(q.x, 1.0);
        assert_relative_eq!(q.y, 1.0);
        assert_relative_eq!(ray.distance_to(&p(4.0, 3.0)), 2.0);
    }
}
