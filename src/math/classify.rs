//! Sidedness and turning-direction classifiers.
//!
//! Both are derived from the sign of a rounded perp product taken against a
//! unit direction, so the rounded quantity is always a distance.

use std::cmp::Ordering;

use super::vector::perp_product;
use super::{Point2, Tolerance, Vector2};

/// Position of a point relative to a directed linear primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Strictly on the counter-clockwise side of the direction.
    Left,
    /// Strictly on the clockwise side of the direction.
    Right,
    /// On the carrier line (for rays: on the ray itself).
    OnLine,
    /// On a segment, between its endpoints inclusive.
    OnSegment,
    /// Collinear, past the end of a segment.
    Ahead,
    /// Collinear, before the start of a segment or ray.
    Behind,
}

impl Location {
    /// Whether the point lies on the primitive itself.
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::OnLine | Self::OnSegment)
    }

    /// Whether the point lies on the carrier line, on or off the primitive.
    #[must_use]
    pub fn is_collinear(self) -> bool {
        !matches!(self, Self::Left | Self::Right)
    }
}

/// Turning direction of an ordered point triple or vertex cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    /// Collinear or degenerate. Never produced by a constructed triangle or polygon.
    Unknown,
}

impl Orientation {
    /// Maps a signed quantity (area, perp product) to an orientation.
    #[must_use]
    pub fn from_signed(value: f64, tol: Tolerance) -> Self {
        match tol.compare(value, 0.0) {
            Ordering::Greater => Self::CounterClockwise,
            Ordering::Less => Self::Clockwise,
            Ordering::Equal => Self::Unknown,
        }
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
            Self::Unknown => Self::Unknown,
        }
    }

    /// The side of each edge on which the interior lies.
    #[must_use]
    pub fn interior_side(self) -> Option<Location> {
        match self {
            Self::CounterClockwise => Some(Location::Left),
            Self::Clockwise => Some(Location::Right),
            Self::Unknown => None,
        }
    }
}

/// Classifies `point` against the infinite line through `origin` along `direction`.
///
/// `direction` should have unit length so the rounded quantity is a distance.
#[must_use]
pub fn side_of_line(origin: &Point2, direction: &Vector2, point: &Point2, tol: Tolerance) -> Location {
    let offset = point - origin;
    match tol.compare(perp_product(direction, &offset), 0.0) {
        Ordering::Greater => Location::Left,
        Ordering::Less => Location::Right,
        Ordering::Equal => Location::OnLine,
    }
}

/// Orientation of the turn `a -> b -> c`.
///
/// Decided by the signed distance of `c` from the line through `a` and `b`,
/// so the result does not depend on the scale of the triple. Coincident `a`
/// and `b` give `Unknown`.
#[must_use]
pub fn orientation2(a: &Point2, b: &Point2, c: &Point2, tol: Tolerance) -> Orientation {
    let ab = b - a;
    let len = ab.norm();
    if len == 0.0 {
        return Orientation::Unknown;
    }
    Orientation::from_signed(perp_product(&ab, &(c - a)) / len, tol)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn side_of_horizontal_line() {
        let tol = Tolerance::default();
        let o = p(0.0, 0.0);
        let d = Vector2::new(1.0, 0.0);
        assert_eq!(side_of_line(&o, &d, &p(3.0, 1.0), tol), Location::Left);
        assert_eq!(side_of_line(&o, &d, &p(3.0, -1.0), tol), Location::Right);
        assert_eq!(side_of_line(&o, &d, &p(-7.0, 0.0004), tol), Location::OnLine);
    }

    #[test]
    fn orientation_of_triples() {
        let tol = Tolerance::default();
        assert_eq!(
            orientation2(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0), tol),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation2(&p(0.0, 0.0), &p(0.0, 1.0), &p(1.0, 0.0), tol),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation2(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0), tol),
            Orientation::Unknown
        );
    }

    #[test]
    fn orientation_holds_at_small_scale() {
        let tol = Tolerance::default();
        assert_eq!(
            orientation2(&p(0.0, 0.0), &p(0.02, 0.0), &p(0.0, 0.02), tol),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation2(&p(0.02, 0.02), &p(0.0, 0.02), &p(0.02, 0.0), tol),
            Orientation::Clockwise
        );
        // 0.0004 off the line is within tolerance
        assert_eq!(
            orientation2(&p(0.0, 0.0), &p(0.02, 0.0), &p(0.05, 0.0004), tol),
            Orientation::Unknown
        );
        assert_eq!(orientation2(&p(1.0, 1.0), &p(1.0, 1.0), &p(2.0, 0.0), tol), Orientation::Unknown);
    }

    #[test]
    fn interior_side_follows_orientation() {
        assert_eq!(Orientation::CounterClockwise.interior_side(), Some(Location::Left));
        assert_eq!(Orientation::Clockwise.interior_side(), Some(Location::Right));
        assert_eq!(Orientation::Unknown.interior_side(), None);
        assert_eq!(Orientation::Clockwise.reversed(), Orientation::CounterClockwise);
    }
}
