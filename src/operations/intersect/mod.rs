//! Pairwise intersection across every primitive pair.
//!
//! Each geometry is first reduced to a point, a parametric linear, a chain
//! of linears, a planar area or a plane. The category pair selects the
//! engine; spatial areas are solved in their support plane and lifted back.

mod area_2d;
mod area_3d;
mod dispatch_2d;
mod dispatch_3d;
mod linear;
mod result;

pub use result::{Intersection2, Intersection3};

pub(crate) use area_2d::{areas_intersect, areas_overlap, clip_intervals, covers_polygon};
pub(crate) use linear::{common_interval_2d, common_interval_3d, intervals_cover, Linear2, Linear3};
pub(crate) use dispatch_2d::{pieces_2d, Shape2};
pub(crate) use dispatch_3d::{pieces_3d, Shape3};

use crate::error::Result;
use crate::geometry::{Geometry2, Geometry3};
use crate::math::Tolerance;

/// Intersection of two planar geometries.
///
/// # Errors
///
/// Returns `OperationError::Unsupported` when the area intersection of two
/// non-convex polygons that partially overlap would be required.
pub fn intersection_2d(a: &Geometry2, b: &Geometry2, tol: Tolerance) -> Result<Intersection2> {
    let pieces = pieces_2d(&Shape2::of(a), &Shape2::of(b), tol)?;
    Ok(Intersection2::from_pieces(pieces, tol))
}

/// Intersection of two spatial geometries.
///
/// # Errors
///
/// Returns `OperationError::Unsupported` for coplanar non-convex polygons
/// that partially overlap.
pub fn intersection_3d(a: &Geometry3, b: &Geometry3, tol: Tolerance) -> Result<Intersection3> {
    let pieces = pieces_3d(&Shape3::of(a), &Shape3::of(b), tol)?;
    Ok(Intersection3::from_pieces(pieces, tol))
}

/// Whether two planar geometries share at least one point.
#[must_use]
pub fn intersects_2d(a: &Geometry2, b: &Geometry2, tol: Tolerance) -> bool {
    match (Shape2::of(a), Shape2::of(b)) {
        (Shape2::Area(p), Shape2::Area(q)) => areas_intersect(&p, &q, tol),
        (x, y) => pieces_2d(&x, &y, tol).is_ok_and(|pieces| !pieces.is_empty()),
    }
}

/// Whether two spatial geometries share at least one point.
#[must_use]
pub fn intersects_3d(a: &Geometry3, b: &Geometry3, tol: Tolerance) -> bool {
    match (Shape3::of(a), Shape3::of(b)) {
        (Shape3::Area(p), Shape3::Area(q)) if p.is_coplanar(&q, tol) => {
            areas_intersect(&p.outline, &q.outline_in(&p.plane), tol)
        }
        (x, y) => pieces_3d(&x, &y, tol).is_ok_and(|pieces| !pieces.is_empty()),
    }
}

impl Geometry2 {
    /// See [`intersection_2d`].
    ///
    /// # Errors
    ///
    /// Same as [`intersection_2d`].
    pub fn intersection(&self, other: &Self, tol: Tolerance) -> Result<Intersection2> {
        intersection_2d(self, other, tol)
    }

    #[must_use]
    pub fn intersects(&self, other: &Self, tol: Tolerance) -> bool {
        intersects_2d(self, other, tol)
    }
}

impl Geometry3 {
    /// See [`intersection_3d`].
    ///
    /// # Errors
    ///
    /// Same as [`intersection_3d`].
    pub fn intersection(&self, other: &Self, tol: Tolerance) -> Result<Intersection3> {
        intersection_3d(self, other, tol)
    }

    #[must_use]
    pub fn intersects(&self, other: &Self, tol: Tolerance) -> bool {
        intersects_3d(self, other, tol)
    }
}
