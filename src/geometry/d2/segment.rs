use nalgebra::Unit;

use crate::error::{GeometryError, Result};
use crate::math::classify::side_of_line;
use crate::math::vector::normalize2;
use crate::math::{Aabb2, AlmostEq, Location, Point2, Tolerance, UnitVector2};

use super::Line2;

/// A bounded 2D line segment between two distinct points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    p0: Point2,
    p1: Point2,
    direction: UnitVector2,
    length: f64,
}

impl Segment2 {
    /// Creates a segment, validating with the default tolerance.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::CoincidentPoints` if `p0` and `p1` coincide.
    pub fn new(p0: Point2, p1: Point2) -> Result<Self> {
        Self::new_with(p0, p1, Tolerance::default())
    }

    /// Creates a segment, validating with `tol`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::CoincidentPoints` if `p0` and `p1` coincide.
    pub fn new_with(p0: Point2, p1: Point2, tol: Tolerance) -> Result<Self> {
        if p0.almost_eq(&p1, tol) {
            return Err(GeometryError::CoincidentPoints(format!(
                "segment endpoints ({}, {}) and ({}, {})",
                p0.x, p0.y, p1.x, p1.y
            ))
            .into());
        }
        let d = p1 - p0;
        Ok(Self {
            p0,
            p1,
            direction: normalize2(&d)?,
            length: d.norm(),
        })
    }

    /// Builds a segment between points already known to be distinct.
    pub(crate) fn new_unchecked(p0: Point2, p1: Point2) -> Self {
        let d = p1 - p0;
        Self {
            p0,
            p1,
            direction: Unit::new_normalize(d),
            length: d.norm(),
        }
    }

    #[must_use]
    pub fn p0(&self) -> &Point2 {
        &self.p0
    }

    #[must_use]
    pub fn p1(&self) -> &Point2 {
        &self.p1
    }

    /// Unit direction from `p0` to `p1`.
    #[must_use]
    pub fn direction(&self) -> &UnitVector2 {
        &self.direction
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.p0, &self.p1)
    }

    /// Point at arc-length `t` from `p0`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.p0 + self.direction.into_inner() * t
    }

    /// Arc-length parameter of the foot of `point` on the carrier line.
    #[must_use]
    pub fn parameter_of(&self, point: &Point2) -> f64 {
        (point - self.p0).dot(&self.direction)
    }

    /// Closest point of the segment; outside projections clamp to the nearest endpoint.
    #[must_use]
    pub fn project(&self, point: &Point2) -> Point2 {
        self.point_at(self.parameter_of(point).clamp(0.0, self.length))
    }

    #[must_use]
    pub fn distance_to(&self, point: &Point2) -> f64 {
        (point - self.project(point)).norm()
    }

    /// `Left`, `Right`, `OnSegment`, `Behind` (before `p0`) or `Ahead` (past `p1`).
    #[must_use]
    pub fn location(&self, point: &Point2, tol: Tolerance) -> Location {
        match side_of_line(&self.p0, &self.direction, point, tol) {
            Location::OnLine => {
                let t = self.parameter_of(point);
                if tol.lt(t, 0.0) {
                    Location::Behind
                } else if tol.gt(t, self.length) {
                    Location::Ahead
                } else {
                    Location::OnSegment
                }
            }
            other => other,
        }
    }

    #[must_use]
    pub fn contains(&self, point: &Point2, tol: Tolerance) -> bool {
        self.location(point, tol) == Location::OnSegment
    }

    /// The carrier line, directed from `p0` to `p1`.
    #[must_use]
    pub fn to_line(&self) -> Line2 {
        Line2::from_unit(self.p0, self.direction)
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            p0: self.p1,
            p1: self.p0,
            direction: -self.direction,
            length: self.length,
        }
    }

    #[must_use]
    pub fn bounding_box(&self) -> Aabb2 {
        Aabb2 {
            min: Point2::new(self.p0.x.min(self.p1.x), self.p0.y.min(self.p1.y)),
            max: Point2::new(self.p0.x.max(self.p1.x), self.p0.y.max(self.p1.y)),
        }
    }
}

impl AlmostEq for Segment2 {
    /// Endpoints are compared in either order.
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        (self.p0.almost_eq(&other.p0, tol) && self.p1.almost_eq(&other.p1, tol))
            || (self.p0.almost_eq(&other.p1, tol) && self.p1.almost_eq(&other.p0, tol))
    }
}
