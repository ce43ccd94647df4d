//! Pairwise dispatch over spatial shapes.

use tracing::debug;

use crate::error::Result;
use crate::geometry::{Geometry3, Plane, Polyline3, Segment3};
use crate::math::{AlmostEq, Point3, Tolerance};

use super::area_3d::{area_area_3d, clip_linear_3d, plane_area, plane_linear, plane_plane, Area3};
use super::linear::{common_interval_3d, linear_linear_3d, Linear3};

#[derive(Debug, Clone)]
pub(crate) enum Shape3 {
    Point(Point3),
    Linear(Linear3),
    Chain(Vec<Linear3>),
    Area(Area3),
    Plane(Plane),
}

impl Shape3 {
    pub(crate) fn of(geometry: &Geometry3) -> Self {
        match geometry {
            Geometry3::Point(p) => Self::Point(*p),
            Geometry3::Line(l) => Self::Linear(Linear3::line(l)),
            Geometry3::Ray(r) => Self::Linear(Linear3::ray(r)),
            Geometry3::Segment(s) => Self::Linear(Linear3::segment(s)),
            Geometry3::Polyline(p) => Self::Chain(p.segments().iter().map(Linear3::segment).collect()),
            Geometry3::Triangle(t) => Self::Area(Area3::triangle(t)),
            Geometry3::Polygon(p) => Self::Area(Area3::polygon(p)),
            Geometry3::Plane(p) => Self::Plane(*p),
        }
    }

    pub(crate) fn contains_point(&self, point: &Point3, tol: Tolerance) -> bool {
        match self {
            Self::Point(p) => p.almost_eq(point, tol),
            Self::Linear(l) => l.contains(point, tol),
            Self::Chain(c) => c.iter().any(|l| l.contains(point, tol)),
            Self::Area(a) => a.contains(point, tol),
            Self::Plane(p) => p.contains(point, tol),
        }
    }
}

/// Loose parts of the intersection of `a` and `b`.
///
/// # Errors
///
/// Fails only for partially overlapping coplanar non-convex polygons.
pub(crate) fn pieces_3d(a: &Shape3, b: &Shape3, tol: Tolerance) -> Result<Vec<Geometry3>> {
    let pieces = match (a, b) {
        (Shape3::Point(p), other) | (other, Shape3::Point(p)) => {
            if other.contains_point(p, tol) {
                vec![Geometry3::Point(*p)]
            } else {
                Vec::new()
            }
        }
        (Shape3::Linear(x), Shape3::Linear(y)) => linear_linear_3d(x, y, tol).into_iter().collect(),
        (Shape3::Linear(x), Shape3::Chain(chain)) | (Shape3::Chain(chain), Shape3::Linear(x)) => join_chain(
            chain.iter().filter_map(|s| linear_linear_3d(s, x, tol)).collect(),
            tol,
        ),
        (Shape3::Chain(first), Shape3::Chain(second)) => {
            let mut found = Vec::new();
            for s in first {
                let mut intervals: Vec<(f64, f64)> = second
                    .iter()
                    .filter_map(|t| common_interval_3d(s, t, tol))
                    .collect();
                intervals.sort_by(|a, b| a.0.total_cmp(&b.0));
                found.extend(intervals.into_iter().map(|(lo, hi)| s.piece(lo, hi, tol)));
            }
            join_chain(found, tol)
        }
        (Shape3::Linear(x), Shape3::Area(area)) | (Shape3::Area(area), Shape3::Linear(x)) => {
            clip_linear_3d(area, x, tol)
        }
        (Shape3::Chain(chain), Shape3::Area(area)) | (Shape3::Area(area), Shape3::Chain(chain)) => join_chain(
            chain.iter().flat_map(|s| clip_linear_3d(area, s, tol)).collect(),
            tol,
        ),
        (Shape3::Area(p), Shape3::Area(q)) => area_area_3d(p, q, tol)?,
        (Shape3::Plane(p), Shape3::Plane(q)) => plane_plane(p, q, tol),
        (Shape3::Plane(plane), Shape3::Linear(x)) | (Shape3::Linear(x), Shape3::Plane(plane)) => {
            plane_linear(plane, x, tol)
        }
        (Shape3::Plane(plane), Shape3::Chain(chain)) | (Shape3::Chain(chain), Shape3::Plane(plane)) => join_chain(
            chain.iter().flat_map(|s| plane_linear(plane, s, tol)).collect(),
            tol,
        ),
        (Shape3::Plane(plane), Shape3::Area(area)) | (Shape3::Area(area), Shape3::Plane(plane)) => {
            plane_area(plane, area, tol)
        }
    };
    Ok(pieces)
}

/// Merges consecutive segments that continue one another into polylines.
fn join_chain(pieces: Vec<Geometry3>, tol: Tolerance) -> Vec<Geometry3> {
    let mut out = Vec::new();
    let mut run: Vec<Point3> = Vec::new();
    for piece in pieces {
        match piece {
            Geometry3::Segment(s) => {
                if run.last().is_some_and(|last| last.almost_eq(s.p0(), tol)) {
                    run.push(*s.p1());
                } else {
                    flush_run(&mut run, &mut out, tol);
                    run.extend([*s.p0(), *s.p1()]);
                }
            }
            other => out.push(other),
        }
    }
    flush_run(&mut run, &mut out, tol);
    out
}

fn flush_run(run: &mut Vec<Point3>, out: &mut Vec<Geometry3>, tol: Tolerance) {
    let points = std::mem::take(run);
    match points.as_slice() {
        [] => {}
        [a, b] => out.push(Geometry3::Segment(Segment3::new_unchecked(*a, *b))),
        _ => match Polyline3::new_with(&points, tol) {
            Ok(polyline) => out.push(match polyline.vertices() {
                [a, b] => Geometry3::Segment(Segment3::new_unchecked(*a, *b)),
                _ => Geometry3::Polyline(polyline),
            }),
            Err(err) => {
                // A run that doubles back on itself collapses; keep its pieces.
                debug!(%err, pieces = points.len() - 1, "run not joined");
                out.extend(
                    points
                        .windows(2)
                        .map(|w| Geometry3::Segment(Segment3::new_unchecked(w[0], w[1]))),
                );
            }
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn seg(a: Point3, b: Point3) -> Geometry3 {
        Geometry3::Segment(Segment3::new(a, b).unwrap())
    }

    #[test]
    fn continuing_segments_join_into_polyline() {
        let tol = Tolerance::default();
        let (a, b, c, d) = (p(0.0, 0.0, 1.0), p(1.0, 0.0, 1.0), p(1.0, 1.0, 1.0), p(1.0, 1.0, 2.0));
        let joined = join_chain(vec![seg(a, b), seg(b, c), seg(c, d)], tol);
        assert!(matches!(joined.as_slice(), [Geometry3::Polyline(pl)] if pl.vertices().len() == 4));
    }

    #[test]
    fn collinear_continuation_collapses_to_segment() {
        let tol = Tolerance::default();
        let (a, b, end) = (p(0.0, 0.0, 1.0), p(1.0, 0.0, 1.0), p(2.0, 0.0, 1.0));
        match join_chain(vec![seg(a, b), seg(b, end)], tol).as_slice() {
            [Geometry3::Segment(s)] => {
                assert!(s.p0().almost_eq(&a, tol));
                assert!(s.p1().almost_eq(&end, tol));
            }
            other => panic!("expected one segment, got {other:?}"),
        }
    }

    #[test]
    fn run_doubling_back_keeps_its_pieces() {
        let tol = Tolerance::default();
        let (a, b) = (p(0.0, 0.0, 1.0), p(1.0, 0.0, 1.0));
        let joined = join_chain(vec![seg(a, b), seg(b, a)], tol);
        assert_eq!(joined.len(), 2);
        assert!(joined.iter().all(|g| matches!(g, Geometry3::Segment(_))));
    }
}
