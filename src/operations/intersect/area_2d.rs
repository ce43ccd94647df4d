//! Planar polygon clipping.

use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::geometry::{Geometry2, Polygon2, Segment2, Triangle2};
use crate::math::classify::side_of_line;
use crate::math::points::{dedup_all, distance_to_chord, remove_collinear};
use crate::math::vector::perp_product;
use crate::math::{AlmostEq, Location, Point2, Tolerance};

use super::linear::{common_interval_2d, Linear2};

/// Sorted parameters along `linear` where it meets the polygon boundary,
/// together with its finite ends.
pub(crate) fn boundary_params(polygon: &Polygon2, linear: &Linear2, tol: Tolerance) -> Vec<f64> {
    let carrier = linear.carrier();
    let mut params = Vec::new();
    for edge in polygon.edges() {
        if let Some((lo, hi)) = common_interval_2d(&carrier, &Linear2::segment(&edge), tol) {
            params.push(lo);
            params.push(hi);
        }
    }
    params.retain(|&t| linear.covers(t, tol));
    for t in &mut params {
        *t = t.clamp(linear.start, linear.end);
    }
    if linear.start.is_finite() {
        params.push(linear.start);
    }
    if linear.end.is_finite() {
        params.push(linear.end);
    }
    params.sort_by(f64::total_cmp);
    params.dedup_by(|later, earlier| tol.equals(*later, *earlier));
    params
}

/// Parameter intervals of `linear` lying inside or on `polygon`.
///
/// Each stretch between consecutive boundary contacts is kept when its
/// midpoint is inside, so the result does not depend on the winding of the
/// polygon. Isolated touching points come back as `(t, t)`.
pub(crate) fn clip_intervals(polygon: &Polygon2, linear: &Linear2, tol: Tolerance) -> Vec<(f64, f64)> {
    let params = boundary_params(polygon, linear, tol);
    let mut intervals: Vec<(f64, f64)> = Vec::new();
    let mut covered = vec![false; params.len()];

    for (i, pair) in params.windows(2).enumerate() {
        let (t0, t1) = (pair[0], pair[1]);
        let inside = polygon.contains(&linear.point_at(0.5 * (t0 + t1)), tol);
        trace!(t0, t1, inside, "clip stretch");
        if !inside {
            continue;
        }
        covered[i] = true;
        covered[i + 1] = true;
        match intervals.last_mut() {
            Some(last) if tol.equals(last.1, t0) => last.1 = t1,
            _ => intervals.push((t0, t1)),
        }
    }
    for (&t, &done) in params.iter().zip(&covered) {
        if !done && polygon.contains(&linear.point_at(t), tol) {
            intervals.push((t, t));
        }
    }
    intervals.sort_by(|a, b| a.0.total_cmp(&b.0));
    intervals
}

/// The parts of `linear` inside or on `polygon`.
pub(crate) fn clip_linear(polygon: &Polygon2, linear: &Linear2, tol: Tolerance) -> Vec<Geometry2> {
    clip_intervals(polygon, linear, tol)
        .into_iter()
        .map(|(lo, hi)| linear.piece(lo, hi, tol))
        .collect()
}

/// Whether the whole of `segment` lies inside or on `polygon`.
pub(crate) fn covers_segment(polygon: &Polygon2, segment: &Segment2, tol: Tolerance) -> bool {
    match clip_intervals(polygon, &Linear2::segment(segment), tol).as_slice() {
        [(lo, hi)] => tol.equals(*lo, 0.0) && tol.equals(*hi, segment.length()),
        _ => false,
    }
}

/// Whether `inner` lies entirely inside or on `outer`.
pub(crate) fn covers_polygon(outer: &Polygon2, inner: &Polygon2, tol: Tolerance) -> bool {
    outer.bounding_box().intersects(&inner.bounding_box(), tol)
        && inner.vertices().iter().all(|v| outer.contains(v, tol))
        && inner.edges().iter().all(|e| covers_segment(outer, e, tol))
}

/// A polygon as the matching area geometry.
pub(crate) fn area_geometry(polygon: Polygon2) -> Geometry2 {
    match polygon.vertices() {
        [a, b, c] => Geometry2::Triangle(Triangle2::new_unchecked(*a, *b, *c)),
        _ => Geometry2::Polygon(polygon),
    }
}

/// Intersection of two polygons as loose parts.
///
/// Two convex polygons are clipped against each other. For non-convex input
/// only the disjoint and nested configurations are resolved.
///
/// # Errors
///
/// Returns `OperationError::Unsupported` when a non-convex polygon partially
/// overlaps the other.
pub(crate) fn area_area(a: &Polygon2, b: &Polygon2, tol: Tolerance) -> Result<Vec<Geometry2>> {
    if !a.bounding_box().intersects(&b.bounding_box(), tol) {
        return Ok(Vec::new());
    }
    if a.is_convex(tol) && b.is_convex(tol) {
        return Ok(convex_clip(a, b, tol));
    }
    if !areas_intersect(a, b, tol) {
        return Ok(Vec::new());
    }
    if covers_polygon(a, b, tol) {
        return Ok(vec![area_geometry(b.clone())]);
    }
    if covers_polygon(b, a, tol) {
        return Ok(vec![area_geometry(a.clone())]);
    }
    debug!(
        a_vertices = a.len(),
        b_vertices = b.len(),
        "partial overlap of non-convex polygons"
    );
    Err(OperationError::Unsupported(
        "area intersection of partially overlapping non-convex polygons".into(),
    )
    .into())
}

/// Sutherland–Hodgman clipping of `subject` by the convex `clip`.
fn convex_clip(subject: &Polygon2, clip: &Polygon2, tol: Tolerance) -> Vec<Geometry2> {
    let clip = clip.to_ccw();
    let mut output: Vec<Point2> = subject.to_ccw().vertices().to_vec();

    for edge in clip.edges() {
        if output.is_empty() {
            break;
        }
        let input = std::mem::take(&mut output);
        let inside = |p: &Point2| side_of_line(edge.p0(), edge.direction(), p, tol) != Location::Right;
        let n = input.len();
        for i in 0..n {
            let current = input[i];
            let previous = input[(i + n - 1) % n];
            match (inside(&previous), inside(&current)) {
                (true, true) => output.push(current),
                (true, false) => output.push(crossing(&previous, &current, &edge)),
                (false, true) => {
                    output.push(crossing(&previous, &current, &edge));
                    output.push(current);
                }
                (false, false) => {}
            }
        }
    }
    finish_clip(&output, tol)
}

/// Point where `from → to` crosses the carrier of `edge`.
fn crossing(from: &Point2, to: &Point2, edge: &Segment2) -> Point2 {
    let d_from = perp_product(edge.direction(), &(from - edge.p0()));
    let d_to = perp_product(edge.direction(), &(to - edge.p0()));
    let denom = d_from - d_to;
    if denom.abs() < f64::EPSILON {
        return *from;
    }
    from + (to - from) * (d_from / denom)
}

/// Turns the clipped ring into a polygon, a segment, a point or nothing.
fn finish_clip(ring: &[Point2], tol: Tolerance) -> Vec<Geometry2> {
    let distinct = dedup_all(ring, tol);
    let (a, b) = match distinct.as_slice() {
        [] => return Vec::new(),
        [only] => return vec![Geometry2::Point(*only)],
        _ => farthest_pair(&distinct),
    };
    let flat = distinct
        .iter()
        .all(|p| tol.is_zero(distance_to_chord(&a, p, &b)));
    if !flat {
        let cleaned = remove_collinear(ring, true, tol);
        if cleaned.len() >= 3 {
            return vec![area_geometry(Polygon2::from_vertices_unchecked(cleaned))];
        }
    }
    vec![Geometry2::Segment(Segment2::new_unchecked(a, b))]
}

fn farthest_pair(points: &[Point2]) -> (Point2, Point2) {
    let mut best = (points[0], points[0], 0.0);
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            let d = (q - p).norm_squared();
            if d > best.2 {
                best = (*p, *q, d);
            }
        }
    }
    (best.0, best.1)
}

/// Whether two polygons share at least one point.
pub(crate) fn areas_intersect(a: &Polygon2, b: &Polygon2, tol: Tolerance) -> bool {
    if !a.bounding_box().intersects(&b.bounding_box(), tol) {
        return false;
    }
    let a_edges: Vec<Linear2> = a.edges().iter().map(Linear2::segment).collect();
    let b_edges: Vec<Linear2> = b.edges().iter().map(Linear2::segment).collect();
    a_edges
        .iter()
        .any(|e| b_edges.iter().any(|f| common_interval_2d(e, f, tol).is_some()))
        || a.contains(&b.vertices()[0], tol)
        || b.contains(&a.vertices()[0], tol)
}

/// Whether the interiors of two polygons overlap.
///
/// Decided without building the common region, so it also works for
/// non-convex polygons.
pub(crate) fn areas_overlap(a: &Polygon2, b: &Polygon2, tol: Tolerance) -> bool {
    if !a.bounding_box().intersects(&b.bounding_box(), tol) {
        return false;
    }
    proper_crossing(a, b, tol)
        || reaches_inside(a, b, tol)
        || reaches_inside(b, a, tol)
        || a.to_ccw().almost_eq(&b.to_ccw(), tol)
}

/// Two edges crossing transversally away from all their endpoints.
fn proper_crossing(a: &Polygon2, b: &Polygon2, tol: Tolerance) -> bool {
    let b_edges: Vec<Linear2> = b.edges().iter().map(Linear2::segment).collect();
    a.edges().iter().map(Linear2::segment).any(|e| {
        b_edges.iter().any(|f| match common_interval_2d(&e, f, tol) {
            Some((t, u)) if tol.equals(t, u) => {
                let s = f.parameter_of(&e.point_at(t));
                tol.gt(t, e.start) && tol.lt(t, e.end) && tol.gt(s, f.start) && tol.lt(s, f.end)
            }
            _ => false,
        })
    })
}

/// Whether some vertex of `inner`, or some stretch of its edges between
/// boundary contacts, lies strictly inside `outer`.
fn reaches_inside(outer: &Polygon2, inner: &Polygon2, tol: Tolerance) -> bool {
    inner.vertices().iter().any(|v| outer.contains_strictly(v, tol))
        || inner.edges().iter().any(|edge| {
            let linear = Linear2::segment(edge);
            boundary_params(outer, &linear, tol)
                .windows(2)
                .any(|w| outer.contains_strictly(&linear.point_at(0.5 * (w[0] + w[1])), tol))
        })
}
