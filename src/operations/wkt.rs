//! Well-Known Text output at a caller-chosen precision.
//!
//! Coordinates are rounded with [`round_to`] and printed in their shortest
//! form, so `1.0` prints as `1`. Spatial shapes carry the `Z` tag.

use crate::error::{GeoformError, OperationError, Result};
use crate::geometry::{
    Geometry2, Geometry3, Polygon2, Polygon3, Polyline2, Polyline3, Segment2, Segment3, Triangle2, Triangle3,
};
use crate::math::{round_to, Point2, Point3};

use super::intersect::{Intersection2, Intersection3};

/// Renders a bounded shape as WKT.
pub trait ToWkt {
    fn to_wkt(&self, decimals: u8) -> String;
}

trait Coords {
    const TAG: &'static str;
    fn coords(&self, decimals: u8) -> String;
}

fn num(value: f64, decimals: u8) -> String {
    // adding zero folds -0 into 0
    format!("{}", round_to(value, decimals) + 0.0)
}

impl Coords for Point2 {
    const TAG: &'static str = "";

    fn coords(&self, decimals: u8) -> String {
        format!("{} {}", num(self.x, decimals), num(self.y, decimals))
    }
}

impl Coords for Point3 {
    const TAG: &'static str = " Z";

    fn coords(&self, decimals: u8) -> String {
        format!(
            "{} {} {}",
            num(self.x, decimals),
            num(self.y, decimals),
            num(self.z, decimals)
        )
    }
}

fn list<P: Coords>(points: &[P], decimals: u8) -> String {
    let parts: Vec<String> = points.iter().map(|p| p.coords(decimals)).collect();
    format!("({})", parts.join(", "))
}

/// A closed ring: the first vertex is repeated at the end.
fn ring<P: Coords + Clone>(points: &[P], decimals: u8) -> String {
    let mut closed = points.to_vec();
    if let Some(first) = points.first() {
        closed.push(first.clone());
    }
    list(&closed, decimals)
}

fn point<P: Coords>(p: &P, decimals: u8) -> String {
    format!("POINT{} ({})", P::TAG, p.coords(decimals))
}

fn linestring<P: Coords>(points: &[P], decimals: u8) -> String {
    format!("LINESTRING{} {}", P::TAG, list(points, decimals))
}

fn polygon<P: Coords + Clone>(points: &[P], decimals: u8) -> String {
    format!("POLYGON{} ({})", P::TAG, ring(points, decimals))
}

fn triangle<P: Coords + Clone>(points: &[P], decimals: u8) -> String {
    format!("TRIANGLE{} ({})", P::TAG, ring(points, decimals))
}

fn multilinestring<P: Coords>(lines: &[[P; 2]], decimals: u8) -> String {
    let parts: Vec<String> = lines.iter().map(|l| list(l, decimals)).collect();
    format!("MULTILINESTRING{} ({})", P::TAG, parts.join(", "))
}

fn collection(parts: &[String]) -> String {
    if parts.is_empty() {
        "GEOMETRYCOLLECTION EMPTY".to_owned()
    } else {
        format!("GEOMETRYCOLLECTION ({})", parts.join(", "))
    }
}

impl ToWkt for Point2 {
    fn to_wkt(&self, decimals: u8) -> String {
        point(self, decimals)
    }
}

impl ToWkt for Point3 {
    fn to_wkt(&self, decimals: u8) -> String {
        point(self, decimals)
    }
}

impl ToWkt for Segment2 {
    fn to_wkt(&self, decimals: u8) -> String {
        linestring(&[*self.p0(), *self.p1()], decimals)
    }
}

impl ToWkt for Segment3 {
    fn to_wkt(&self, decimals: u8) -> String {
        linestring(&[*self.p0(), *self.p1()], decimals)
    }
}

impl ToWkt for Polyline2 {
    fn to_wkt(&self, decimals: u8) -> String {
        linestring(self.vertices(), decimals)
    }
}

impl ToWkt for Polyline3 {
    fn to_wkt(&self, decimals: u8) -> String {
        linestring(self.vertices(), decimals)
    }
}

impl ToWkt for Triangle2 {
    fn to_wkt(&self, decimals: u8) -> String {
        triangle(self.vertices(), decimals)
    }
}

impl ToWkt for Triangle3 {
    fn to_wkt(&self, decimals: u8) -> String {
        triangle(self.vertices(), decimals)
    }
}

impl ToWkt for Polygon2 {
    fn to_wkt(&self, decimals: u8) -> String {
        polygon(self.vertices(), decimals)
    }
}

impl ToWkt for Polygon3 {
    fn to_wkt(&self, decimals: u8) -> String {
        polygon(self.vertices(), decimals)
    }
}

fn unbounded(kind: &str) -> GeoformError {
    OperationError::Unsupported(format!("{kind} has no WKT form")).into()
}

impl Geometry2 {
    /// WKT of a bounded shape.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for lines and rays.
    pub fn to_wkt(&self, decimals: u8) -> Result<String> {
        match self {
            Self::Point(p) => Ok(p.to_wkt(decimals)),
            Self::Segment(s) => Ok(s.to_wkt(decimals)),
            Self::Triangle(t) => Ok(t.to_wkt(decimals)),
            Self::Polygon(p) => Ok(p.to_wkt(decimals)),
            Self::Polyline(p) => Ok(p.to_wkt(decimals)),
            Self::Line(_) | Self::Ray(_) => Err(unbounded(self.kind())),
        }
    }
}

impl Geometry3 {
    /// WKT of a bounded shape.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for lines, rays and planes.
    pub fn to_wkt(&self, decimals: u8) -> Result<String> {
        match self {
            Self::Point(p) => Ok(p.to_wkt(decimals)),
            Self::Segment(s) => Ok(s.to_wkt(decimals)),
            Self::Triangle(t) => Ok(t.to_wkt(decimals)),
            Self::Polygon(p) => Ok(p.to_wkt(decimals)),
            Self::Polyline(p) => Ok(p.to_wkt(decimals)),
            Self::Line(_) | Self::Ray(_) | Self::Plane(_) => Err(unbounded(self.kind())),
        }
    }
}

impl Intersection2 {
    /// WKT of the result; `None` is `GEOMETRYCOLLECTION EMPTY`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` when a part is unbounded.
    pub fn to_wkt(&self, decimals: u8) -> Result<String> {
        match self {
            Self::Segments(segments) => {
                let lines: Vec<[Point2; 2]> = segments.iter().map(|s| [*s.p0(), *s.p1()]).collect();
                Ok(multilinestring(&lines, decimals))
            }
            Self::Collection(_) | Self::None => {
                let parts = self
                    .geometries()
                    .iter()
                    .map(|g| g.to_wkt(decimals))
                    .collect::<Result<Vec<_>>>()?;
                Ok(collection(&parts))
            }
            _ => self
                .geometries()
                .first()
                .map_or_else(|| Ok(collection(&[])), |g| g.to_wkt(decimals)),
        }
    }
}

impl Intersection3 {
    /// WKT of the result; `None` is `GEOMETRYCOLLECTION EMPTY`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` when a part is unbounded.
    pub fn to_wkt(&self, decimals: u8) -> Result<String> {
        match self {
            Self::Segments(segments) => {
                let lines: Vec<[Point3; 2]> = segments.iter().map(|s| [*s.p0(), *s.p1()]).collect();
                Ok(multilinestring(&lines, decimals))
            }
            Self::Collection(_) | Self::None => {
                let parts = self
                    .geometries()
                    .iter()
                    .map(|g| g.to_wkt(decimals))
                    .collect::<Result<Vec<_>>>()?;
                Ok(collection(&parts))
            }
            _ => self
                .geometries()
                .first()
                .map_or_else(|| Ok(collection(&[])), |g| g.to_wkt(decimals)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Line2;
    use crate::math::{Tolerance, Vector2};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn points_round_to_precision() {
        assert_eq!(p(1.0, 0.123_456).to_wkt(3), "POINT (1 0.123)");
        assert_eq!(p(-0.0001, 2.5).to_wkt(3), "POINT (0 2.5)");
        assert_eq!(Point3::new(1.0, 2.0, 3.25).to_wkt(1), "POINT Z (1 2 3.3)");
    }

    #[test]
    fn areas_close_their_ring() {
        let tri = Triangle2::new(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)).unwrap();
        assert_eq!(tri.to_wkt(3), "TRIANGLE ((0 0, 1 0, 0 1, 0 0))");
        let square = Polygon2::new(&[p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]).unwrap();
        assert_eq!(square.to_wkt(3), "POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0))");
    }

    #[test]
    fn intersection_results() {
        let tol = Tolerance::default();
        assert_eq!(Intersection2::None.to_wkt(3).unwrap(), "GEOMETRYCOLLECTION EMPTY");
        let pair = Intersection2::from_pieces(
            vec![
                Geometry2::Segment(Segment2::new(p(0.0, 0.0), p(1.0, 0.0)).unwrap()),
                Geometry2::Segment(Segment2::new(p(2.0, 0.0), p(3.0, 0.0)).unwrap()),
            ],
            tol,
        );
        assert_eq!(pair.to_wkt(3).unwrap(), "MULTILINESTRING ((0 0, 1 0), (2 0, 3 0))");
        let mixed = Intersection2::from_pieces(
            vec![
                Geometry2::Segment(Segment2::new(p(0.0, 0.0), p(1.0, 0.0)).unwrap()),
                Geometry2::Point(p(5.0, 5.0)),
            ],
            tol,
        );
        assert_eq!(mixed.to_wkt(3).unwrap(), "GEOMETRYCOLLECTION (LINESTRING (0 0, 1 0), POINT (5 5))");
        let line = Intersection2::Line(Line2::new(p(0.0, 0.0), Vector2::x()).unwrap());
        assert!(line.to_wkt(3).is_err());
    }
}
