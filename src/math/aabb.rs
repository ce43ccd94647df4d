use super::{Point2, Point3, Tolerance};

/// A 2D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Smallest box enclosing `points`, or `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(Self::enclosing(first, rest))
    }

    /// Smallest box enclosing `first` and every point of `rest`.
    #[must_use]
    pub fn enclosing(first: &Point2, rest: &[Point2]) -> Self {
        rest.iter().fold(
            Self {
                min: *first,
                max: *first,
            },
            |b, p| Self {
                min: b.min.inf(p),
                max: b.max.sup(p),
            },
        )
    }

    #[must_use]
    pub fn contains(&self, point: &Point2, tol: Tolerance) -> bool {
        tol.ge(point.x, self.min.x)
            && tol.le(point.x, self.max.x)
            && tol.ge(point.y, self.min.y)
            && tol.le(point.y, self.max.y)
    }

    /// Whether the boxes share at least one point (touching counts).
    #[must_use]
    pub fn intersects(&self, other: &Self, tol: Tolerance) -> bool {
        tol.le(self.min.x, other.max.x)
            && tol.le(other.min.x, self.max.x)
            && tol.le(self.min.y, other.max.y)
            && tol.le(other.min.y, self.max.y)
    }
}

/// A 3D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3 {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb3 {
    /// Smallest box enclosing `points`, or `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(Self::enclosing(first, rest))
    }

    /// Smallest box enclosing `first` and every point of `rest`.
    #[must_use]
    pub fn enclosing(first: &Point3, rest: &[Point3]) -> Self {
        rest.iter().fold(
            Self {
                min: *first,
                max: *first,
            },
            |b, p| Self {
                min: b.min.inf(p),
                max: b.max.sup(p),
            },
        )
    }

    #[must_use]
    pub fn contains(&self, point: &Point3, tol: Tolerance) -> bool {
        tol.ge(point.x, self.min.x)
            && tol.le(point.x, self.max.x)
            && tol.ge(point.y, self.min.y)
            && tol.le(point.y, self.max.y)
            && tol.ge(point.z, self.min.z)
            && tol.le(point.z, self.max.z)
    }

    #[must_use]
    pub fn intersects(&self, other: &Self, tol: Tolerance) -> bool {
        tol.le(self.min.x, other.max.x)
            && tol.le(other.min.x, self.max.x)
            && tol.le(self.min.y, other.max.y)
            && tol.le(other.min.y, self.max.y)
            && tol.le(self.min.z, other.max.z)
            && tol.le(other.min.z, self.max.z)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn box_of_points() {
        let b = Aabb2::from_points(&[
            Point2::new(1.0, 5.0),
            Point2::new(-2.0, 3.0),
            Point2::new(4.0, -1.0),
        ])
        .unwrap();
        assert_eq!(b.min, Point2::new(-2.0, -1.0));
        assert_eq!(b.max, Point2::new(4.0, 5.0));
        assert!(Aabb2::from_points(&[]).is_none());
    }

    #[test]
    fn containment_includes_border() {
        let tol = Tolerance::default();
        let b = Aabb3::from_points(&[Point3::origin(), Point3::new(1.0, 1.0, 1.0)]).unwrap();
        assert!(b.contains(&Point3::new(1.0, 0.5, 0.0), tol));
        assert!(b.contains(&Point3::new(1.0004, 0.5, 0.0), tol));
        assert!(!b.contains(&Point3::new(1.1, 0.5, 0.0), tol));
    }

    #[test]
    fn touching_boxes_intersect() {
        let tol = Tolerance::default();
        let a = Aabb2::from_points(&[Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]).unwrap();
        let b = Aabb2::from_points(&[Point2::new(1.0, 0.0), Point2::new(2.0, 1.0)]).unwrap();
        let c = Aabb2::from_points(&[Point2::new(1.5, 0.0), Point2::new(2.0, 1.0)]).unwrap();
        assert!(a.intersects(&b, tol));
        assert!(b.intersects(&a, tol));
        assert!(!a.intersects(&c, tol));
    }
}
