use nalgebra::Unit;

use crate::error::{GeometryError, Result};
use crate::math::vector::normalize3;
use crate::math::{Aabb3, AlmostEq, Point3, Tolerance, UnitVector3};

use super::Line3;

/// A bounded 3D line segment between two distinct points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment3 {
    p0: Point3,
    p1: Point3,
    direction: UnitVector3,
    length: f64,
}

impl Segment3 {
    /// # Errors
    ///
    /// Returns `GeometryError::CoincidentPoints` if `p0` and `p1` coincide.
    pub fn new(p0: Point3, p1: Point3) -> Result<Self> {
        Self::new_with(p0, p1, Tolerance::default())
    }

    /// # Errors
    ///
    /// Returns `GeometryError::CoincidentPoints` if `p0` and `p1` coincide at `tol`.
    pub fn new_with(p0: Point3, p1: Point3, tol: Tolerance) -> Result<Self> {
        if p0.almost_eq(&p1, tol) {
            return Err(GeometryError::CoincidentPoints(format!(
                "segment endpoints ({}, {}, {}) and ({}, {}, {})",
                p0.x, p0.y, p0.z, p1.x, p1.y, p1.z
            ))
            .into());
        }
        let d = p1 - p0;
        Ok(Self {
            p0,
            p1,
            direction: normalize3(&d)?,
            length: d.norm(),
        })
    }

    pub(crate) fn new_unchecked(p0: Point3, p1: Point3) -> Self {
        let d = p1 - p0;
        Self {
            p0,
            p1,
            direction: Unit::new_normalize(d),
            length: d.norm(),
        }
    }

    #[must_use]
    pub fn p0(&self) -> &Point3 {
        &self.p0
    }

    #[must_use]
    pub fn p1(&self) -> &Point3 {
        &self.p1
    }

    #[must_use]
    pub fn direction(&self) -> &UnitVector3 {
        &self.direction
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn midpoint(&self) -> Point3 {
        nalgebra::center(&self.p0, &self.p1)
    }

    /// Point at arc-length `t` from `p0`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.p0 + self.direction.into_inner() * t
    }

    #[must_use]
    pub fn parameter_of(&self, point: &Point3) -> f64 {
        (point - self.p0).dot(&self.direction)
    }

    /// Closest point of the segment, clamped to the endpoints.
    #[must_use]
    pub fn project(&self, point: &Point3) -> Point3 {
        self.point_at(self.parameter_of(point).clamp(0.0, self.length))
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
        Line3::from_unit(self.p0, self.direction)
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
    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3 {
            min: self.p0.inf(&self.p1),
            max: self.p0.sup(&self.p1),
        }
    }
}

impl AlmostEq for Segment3 {
    /// Endpoints are compared in either order.
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        (self.p0.almost_eq(&other.p0, tol) && self.p1.almost_eq(&other.p1, tol))
            || (self.p0.almost_eq(&other.p1, tol) && self.p1.almost_eq(&other.p0, tol))
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

    #[test]
    fn coincident_endpoints_rejected() {
        assert!(Segment3::new(p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0)).is_err());
    }

    #[test]
    fn projection_clamps() {
        let tol = Tolerance::default();
        let s = Segment3::new(p(0.0, 0.0, 0.0), p(0.0, 0.0, 4.0)).unwrap();
        assert!(s.project(&p(1.0, 0.0, 9.0)).almost_eq(&p(0.0, 0.0, 4.0), tol));
        assert!(s.project(&p(1.0, 0.0, 1.0)).almost_eq(&p(0.0, 0.0, 1.0), tol));
        assert!(s.contains(&p(0.0, 0.0, 2.0), tol));
        assert!(!s.contains(&p(0.0, 0.0, 4.1), tol));
        assert_relative_eq!(s.length(), 4.0);
    }

    #[test]
    fn bounding_box_spans_endpoints() {
        let s = Segment3::new(p(3.0, -1.0, 2.0), p(0.0, 4.0, -2.0)).unwrap();
        let b = s.bounding_box();
        assert_eq!(b.min, p(0.0, -1.0, -2.0));
        assert_eq!(b.max, p(3.0, 4.0, 2.0));
    }
}
