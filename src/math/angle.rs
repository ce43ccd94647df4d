use std::cmp::Ordering;
use std::f64::consts::TAU;

use nalgebra::SVector;

use super::vector::perp_product;
use super::{AlmostEq, Tolerance, Vector2};
use crate::error::{GeometryError, Result};

/// A planar angle, stored in radians.
///
/// Comparisons round to the positional precision of the supplied
/// [`Tolerance`] (three decimals by default), so `0.1234` and `0.1231` rad
/// compare equal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub const ZERO: Self = Self { radians: 0.0 };

    #[must_use]
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    #[must_use]
    pub const fn radians(self) -> f64 {
        self.radians
    }

    #[must_use]
    pub fn degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        Self::from_radians(self.radians + other.radians)
    }

    #[must_use]
    pub fn minus(self, other: Self) -> Self {
        Self::from_radians(self.radians - other.radians)
    }

    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::from_radians(self.radians * factor)
    }

    /// The equivalent angle in `[0, 2π)`.
    #[must_use]
    pub fn normalized(self) -> Self {
        let r = self.radians.rem_euclid(TAU);
        // rem_euclid can return TAU itself for tiny negative inputs
        Self::from_radians(if r >= TAU { 0.0 } else { r })
    }

    /// Tolerance-aware ordering.
    #[must_use]
    pub fn compare(self, other: Self, tol: Tolerance) -> Ordering {
        tol.compare(self.radians, other.radians)
    }

    /// Unsigned angle in `[0, π]` between two vectors.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if either vector has zero length.
    pub fn between<const D: usize>(a: &SVector<f64, D>, b: &SVector<f64, D>) -> Result<Self> {
        let denom = a.norm() * b.norm();
        if denom == 0.0 || !denom.is_finite() {
            return Err(GeometryError::ZeroVector.into());
        }
        let cos = (a.dot(b) / denom).clamp(-1.0, 1.0);
        Ok(Self::from_radians(cos.acos()))
    }

    /// Signed angle in `(-π, π]` rotating `from` onto `to`, counter-clockwise positive.
    #[must_use]
    pub fn signed_2d(from: &Vector2, to: &Vector2) -> Self {
        Self::from_radians(perp_product(from, to).atan2(from.dot(to)))
    }
}

impl AlmostEq for Angle {
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        tol.equals(self.radians, other.radians)
    }
}
