use nalgebra::{SVector, Unit};

use super::tolerance::{almost_equals, DEFAULT_DIRECTION_DECIMALS};
use super::{Tolerance, UnitVector2, UnitVector3, Vector2, Vector3};
use crate::error::{GeometryError, Result};

/// Normalizes `v` to unit length.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `v` has zero length at the fine
/// precision.
pub fn normalize<const D: usize>(v: &SVector<f64, D>) -> Result<Unit<SVector<f64, D>>> {
    let len = v.norm();
    if !len.is_finite() || almost_equals(len, 0.0, DEFAULT_DIRECTION_DECIMALS) {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(Unit::new_unchecked(v / len))
}

/// Wraps `v` as a unit vector, requiring it to already have length 1.
///
/// # Errors
///
/// Returns `GeometryError::NotUnitLength` if `|v|` differs from 1 at the fine
/// precision.
pub fn to_unit<const D: usize>(v: &SVector<f64, D>) -> Result<Unit<SVector<f64, D>>> {
    let length = v.norm();
    if !almost_equals(length, 1.0, DEFAULT_DIRECTION_DECIMALS) {
        return Err(GeometryError::NotUnitLength { length }.into());
    }
    Ok(Unit::new_unchecked(v / length))
}

/// Normalizes a 2D vector.
///
/// # Errors
///
/// Fails on a zero-length vector.
pub fn normalize2(v: &Vector2) -> Result<UnitVector2> {
    normalize(v)
}

/// Normalizes a 3D vector.
///
/// # Errors
///
/// Fails on a zero-length vector.
pub fn normalize3(v: &Vector3) -> Result<UnitVector3> {
    normalize(v)
}

/// Builds a 2D unit vector from raw components.
///
/// # Errors
///
/// Fails unless `(u, v)` already has length 1.
pub fn unit2(u: f64, v: f64) -> Result<UnitVector2> {
    to_unit(&Vector2::new(u, v))
}

/// Builds a 3D unit vector from raw components.
///
/// # Errors
///
/// Fails unless `(x, y, z)` already has length 1.
pub fn unit3(x: f64, y: f64, z: f64) -> Result<UnitVector3> {
    to_unit(&Vector3::new(x, y, z))
}

/// 2D perp product `a.x * b.y - a.y * b.x`.
///
/// Positive when `b` is counter-clockwise from `a`.
#[inline]
#[must_use]
pub fn perp_product(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Rotates `v` by +90°.
#[inline]
#[must_use]
pub fn perpendicular(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Whether two 2D directions are parallel or anti-parallel.
#[must_use]
pub fn is_parallel2(a: &UnitVector2, b: &UnitVector2, tol: Tolerance) -> bool {
    tol.dir_is_zero(perp_product(a, b))
}

/// Whether two 3D directions are parallel or anti-parallel.
#[must_use]
pub fn is_parallel3(a: &UnitVector3, b: &UnitVector3, tol: Tolerance) -> bool {
    tol.dir_is_zero(a.cross(b).norm())
}

/// Whether two directions are perpendicular.
#[must_use]
pub fn is_perpendicular<const D: usize>(
    a: &Unit<SVector<f64, D>>,
    b: &Unit<SVector<f64, D>>,
    tol: Tolerance,
) -> bool {
    tol.dir_is_zero(a.dot(b))
}

/// Whether two parallel directions also point the same way.
#[must_use]
pub fn is_same_direction<const D: usize>(
    a: &Unit<SVector<f64, D>>,
    b: &Unit<SVector<f64, D>>,
    tol: Tolerance,
) -> bool {
    tol.dir_equals(a.dot(b), 1.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_from_components() {
        let u = unit3(0.0, 0.6, 0.8).unwrap();
        assert_relative_eq!(u.norm(), 1.0);
        assert!(unit3(0.0, 0.6, 0.9).is_err());
        assert!(unit2(1.0, 1.0).is_err());
    }

    #[test]
    fn normalize_rejects_zero() {
        assert!(normalize2(&Vector2::zeros()).is_err());
        assert!(normalize3(&Vector3::new(0.0, 0.0, 1e-12)).is_err());
        let n = normalize3(&Vector3::new(3.0, 0.0, 4.0)).unwrap();
        assert_relative_eq!(n.x, 0.6);
        assert_relative_eq!(n.z, 0.8);
    }

    #[test]
    fn perp_product_sign() {
        let x = Vector2::new(1.0, 0.0);
        let y = Vector2::new(0.0, 1.0);
        assert!(perp_product(&x, &y) > 0.0);
        assert!(perp_product(&y, &x) < 0.0);
        assert_relative_eq!(perp_product(&x, &(x * 3.0)), 0.0);
    }

    #[test]
    fn parallel_and_perpendicular() {
        let tol = Tolerance::default();
        let a = normalize2(&Vector2::new(1.0, 1.0)).unwrap();
        let b = normalize2(&Vector2::new(-2.0, -2.0)).unwrap();
        let c = normalize2(&Vector2::new(1.0, -1.0)).unwrap();
        assert!(is_parallel2(&a, &b, tol));
        assert!(!is_same_direction(&a, &b, tol));
        assert!(is_perpendicular(&a, &c, tol));
        assert!(!is_parallel2(&a, &c, tol));

        let z = normalize3(&Vector3::z()).unwrap();
        let mz = normalize3(&-Vector3::z()).unwrap();
        assert!(is_parallel3(&z, &mz, tol));
    }
}
