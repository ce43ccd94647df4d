//! The tolerance kernel.
//!
//! Every geometric predicate in the crate reduces to one rule: round the
//! difference of two quantities to `n` decimal digits and compare it with
//! zero. Two digit counts are carried together in [`Tolerance`]: a coarse one
//! for positions, lengths and containment, and a fine one for directions and
//! unit-length checks.

use std::cmp::Ordering;

use nalgebra::{Point, SVector, Unit};

/// Default number of decimals for positional comparisons.
pub const DEFAULT_POSITION_DECIMALS: u8 = 3;

/// Default number of decimals for direction and unit-length comparisons.
pub const DEFAULT_DIRECTION_DECIMALS: u8 = 9;

/// Rounds `value` to `decimals` decimal digits (half away from zero).
#[must_use]
pub fn round_to(value: f64, decimals: u8) -> f64 {
    let scale = 10f64.powi(i32::from(decimals));
    (value * scale).round() / scale
}

/// Returns `true` when `a - b` rounds to zero at `decimals` digits.
#[must_use]
pub fn almost_equals(a: f64, b: f64, decimals: u8) -> bool {
    let scale = 10f64.powi(i32::from(decimals));
    // `round(x) == 0` exactly when `|x| < 0.5`.
    ((a - b) * scale).abs() < 0.5
}

/// Decimal precision used by comparisons.
///
/// `position` governs coordinates, lengths, distances and areas.
/// `direction` governs unit vectors, parallelism and perpendicularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tolerance {
    position: u8,
    direction: u8,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION_DECIMALS,
            direction: DEFAULT_DIRECTION_DECIMALS,
        }
    }
}

impl Tolerance {
    /// Creates a tolerance with explicit positional and directional digits.
    #[must_use]
    pub const fn new(position: u8, direction: u8) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Returns a copy with a different positional precision.
    #[must_use]
    pub const fn with_position(self, position: u8) -> Self {
        Self { position, ..self }
    }

    /// Returns a copy with a different directional precision.
    #[must_use]
    pub const fn with_direction(self, direction: u8) -> Self {
        Self { direction, ..self }
    }

    #[must_use]
    pub const fn position(self) -> u8 {
        self.position
    }

    #[must_use]
    pub const fn direction(self) -> u8 {
        self.direction
    }

    /// Rounds a positional quantity.
    #[must_use]
    pub fn round(self, value: f64) -> f64 {
        round_to(value, self.position)
    }

    /// Positional equality.
    #[must_use]
    pub fn equals(self, a: f64, b: f64) -> bool {
        almost_equals(a, b, self.position)
    }

    #[must_use]
    pub fn is_zero(self, value: f64) -> bool {
        almost_equals(value, 0.0, self.position)
    }

    /// Compares two positional quantities, treating near values as equal.
    #[must_use]
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        compare_at(a, b, self.position)
    }

    /// `a <= b` within tolerance.
    #[must_use]
    pub fn le(self, a: f64, b: f64) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    /// `a >= b` within tolerance.
    #[must_use]
    pub fn ge(self, a: f64, b: f64) -> bool {
        self.compare(a, b) != Ordering::Less
    }

    /// `a < b` and not within tolerance of `b`.
    #[must_use]
    pub fn lt(self, a: f64, b: f64) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// `a > b` and not within tolerance of `b`.
    #[must_use]
    pub fn gt(self, a: f64, b: f64) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// Directional equality.
    #[must_use]
    pub fn dir_equals(self, a: f64, b: f64) -> bool {
        almost_equals(a, b, self.direction)
    }

    #[must_use]
    pub fn dir_is_zero(self, value: f64) -> bool {
        almost_equals(value, 0.0, self.direction)
    }
}

#[allow(clippy::float_cmp)]
fn compare_at(a: f64, b: f64, decimals: u8) -> Ordering {
    // Exact equality first so that equal infinities compare equal.
    if a == b || almost_equals(a, b, decimals) {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Tolerance-based equality.
///
/// Implementations must be symmetric: `a.almost_eq(b, t) == b.almost_eq(a, t)`.
pub trait AlmostEq {
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool;
}

impl AlmostEq for f64 {
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        tol.equals(*self, *other)
    }
}

impl<const D: usize> AlmostEq for Point<f64, D> {
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| tol.equals(*a, *b))
    }
}

impl<const D: usize> AlmostEq for SVector<f64, D> {
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| tol.equals(*a, *b))
    }
}

impl<const D: usize> AlmostEq for Unit<SVector<f64, D>> {
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| tol.dir_equals(*a, *b))
    }
}

impl<T: AlmostEq> AlmostEq for [T] {
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.almost_eq(b, tol))
    }
}

impl<T: AlmostEq> AlmostEq for Vec<T> {
    fn almost_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.as_slice().almost_eq(other.as_slice(), tol)
    }
}
