//! Pairwise dispatch over planar shapes.

use tracing::debug;

use crate::error::Result;
use crate::geometry::{Geometry2, Polygon2, Polyline2, Segment2};
use crate::math::{AlmostEq, Point2, Tolerance};

use super::area_2d::{area_area, clip_intervals, clip_linear};
use super::linear::{common_interval_2d, linear_linear_2d, Linear2};

/// A planar geometry reduced to what the engines work on.
#[derive(Debug, Clone)]
pub(crate) enum Shape2 {
    Point(Point2),
    Linear(Linear2),
    Chain(Vec<Linear2>),
    Area(Polygon2),
}

impl Shape2 {
    pub(crate) fn of(geometry: &Geometry2) -> Self {
        match geometry {
            Geometry2::Point(p) => Self::Point(*p),
            Geometry2::Line(l) => Self::Linear(Linear2::line(l)),
            Geometry2::Ray(r) => Self::Linear(Linear2::ray(r)),
            Geometry2::Segment(s) => Self::Linear(Linear2::segment(s)),
            Geometry2::Polyline(p) => Self::Chain(p.segments().iter().map(Linear2::segment).collect()),
            Geometry2::Triangle(t) => Self::Area(t.to_polygon()),
            Geometry2::Polygon(p) => Self::Area(p.clone()),
        }
    }

    pub(crate) fn contains_point(&self, point: &Point2, tol: Tolerance) -> bool {
        match self {
            Self::Point(p) => p.almost_eq(point, tol),
            Self::Linear(l) => l.contains(point, tol),
            Self::Chain(c) => c.iter().any(|l| l.contains(point, tol)),
            Self::Area(p) => p.contains(point, tol),
        }
    }
}

/// Loose parts of the intersection of `a` and `b`.
///
/// # Errors
///
/// Fails only for the area intersection of partially overlapping
/// non-convex polygons.
pub(crate) fn pieces_2d(a: &Shape2, b: &Shape2, tol: Tolerance) -> Result<Vec<Geometry2>> {
    let pieces = match (a, b) {
        (Shape2::Point(p), other) | (other, Shape2::Point(p)) => {
            if other.contains_point(p, tol) {
                vec![Geometry2::Point(*p)]
            } else {
                Vec::new()
            }
        }
        (Shape2::Linear(x), Shape2::Linear(y)) => linear_linear_2d(x, y, tol).into_iter().collect(),
        (Shape2::Linear(x), Shape2::Chain(chain)) | (Shape2::Chain(chain), Shape2::Linear(x)) => join_chain(
            chain.iter().filter_map(|s| linear_linear_2d(s, x, tol)).collect(),
            tol,
        ),
        (Shape2::Chain(first), Shape2::Chain(second)) => {
            let mut found = Vec::new();
            for s in first {
                let mut intervals: Vec<(f64, f64)> = second
                    .iter()
                    .filter_map(|t| common_interval_2d(s, t, tol))
                    .collect();
                intervals.sort_by(|a, b| a.0.total_cmp(&b.0));
                found.extend(intervals.into_iter().map(|(lo, hi)| s.piece(lo, hi, tol)));
            }
            join_chain(found, tol)
        }
        (Shape2::Linear(x), Shape2::Area(polygon)) | (Shape2::Area(polygon), Shape2::Linear(x)) => {
            clip_linear(polygon, x, tol)
        }
        (Shape2::Chain(chain), Shape2::Area(polygon)) | (Shape2::Area(polygon), Shape2::Chain(chain)) => {
            join_chain(
                chain
                    .iter()
                    .flat_map(|s| {
                        clip_intervals(polygon, s, tol)
                            .into_iter()
                            .map(|(lo, hi)| s.piece(lo, hi, tol))
                    })
                    .collect(),
                tol,
            )
        }
        (Shape2::Area(p), Shape2::Area(q)) => area_area(p, q, tol)?,
    };
    Ok(pieces)
}

/// Merges consecutive segments that continue one another into polylines.
///
/// `pieces` must follow the chain they were cut from.
pub(crate) fn join_chain(pieces: Vec<Geometry2>, tol: Tolerance) -> Vec<Geometry2> {
    let mut out = Vec::new();
    let mut run: Vec<Point2> = Vec::new();
    for piece in pieces {
        match piece {
            Geometry2::Segment(s) => {
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

fn flush_run(run: &mut Vec<Point2>, out: &mut Vec<Geometry2>, tol: Tolerance) {
    let points = std::mem::take(run);
    match points.as_slice() {
        [] => {}
        [a, b] => out.push(Geometry2::Segment(Segment2::new_unchecked(*a, *b))),
        _ => match Polyline2::new_with(&points, tol) {
            Ok(polyline) => out.push(match polyline.vertices() {
                [a, b] => Geometry2::Segment(Segment2::new_unchecked(*a, *b)),
                _ => Geometry2::Polyline(polyline),
            }),
            Err(err) => {
                // A run that doubles back on itself collapses; keep its pieces.
                debug!(%err, pieces = points.len() - 1, "run not joined");
                out.extend(
                    points
                        .windows(2)
                        .map(|w| Geometry2::Segment(Segment2::new_unchecked(w[0], w[1]))),
                );
            }
        },
    }
}
