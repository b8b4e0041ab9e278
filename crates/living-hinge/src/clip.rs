//! Segment clipping against a polygon set.
//!
//! This is the HOT PATH: every stroke of every cell passes through
//! [`clip_segment`], and every candidate sub-segment costs one
//! [`contains`] call.

use crate::geometry::{Point, PolygonSet, Segment};

/// Added to the edge height in the ray-cast so horizontal edges never divide by zero.
const RAY_EPSILON: f64 = 1e-9;

/// Determinant magnitude below which a segment and an edge count as parallel.
const PARALLEL_EPSILON: f64 = 1e-12;

/// Slack on the `[0, 1]` parameter range when accepting an intersection.
const PARAM_EPSILON: f64 = 1e-9;

/// Sub-segments shorter than this (in parameter space) are discarded.
const MIN_PARAM_SPAN: f64 = 1e-6;

// ============================================================================
// POINT IN POLYGON (Ray Casting Algorithm)
// ============================================================================

/// Test a point against one closed ring by casting a ray in +x.
///
/// An edge counts when exactly one endpoint lies strictly above `py`, so a
/// vertex shared by two edges is never counted twice.
#[inline]
pub fn point_in_ring(px: f64, py: f64, ring: &[Point]) -> bool {
    let mut inside = false;

    for w in ring.windows(2) {
        let (a, b) = (w[0], w[1]);
        if (a.y > py) != (b.y > py) {
            let x_int = (b.x - a.x) * (py - a.y) / (b.y - a.y + RAY_EPSILON) + a.x;
            if px < x_int {
                inside = !inside;
            }
        }
    }

    inside
}

/// Even-odd containment over the whole set.
///
/// A point inside an odd number of contours is inside the region, so a
/// contour nested in another one punches a hole.
#[inline]
pub fn contains(set: &PolygonSet, pt: Point) -> bool {
    set.polygons()
        .iter()
        .fold(false, |inside, poly| inside ^ point_in_ring(pt.x, pt.y, poly.points()))
}

// ============================================================================
// SEGMENT-EDGE INTERSECTION
// ============================================================================

/// Parameter `t` along `p0 -> p1` where it crosses edge `a -> b`, if it does.
///
/// Parallel and coincident edges are skipped; overlapping collinear
/// stretches are therefore not reported.
#[inline]
pub fn segment_edge_intersection(p0: Point, p1: Point, a: Point, b: Point) -> Option<f64> {
    let denom = (p1.x - p0.x) * (b.y - a.y) - (p1.y - p0.y) * (b.x - a.x);
    if denom.abs() <= PARALLEL_EPSILON {
        return None;
    }

    let t = ((a.x - p0.x) * (b.y - a.y) - (a.y - p0.y) * (b.x - a.x)) / denom;
    let u = ((a.x - p0.x) * (p1.y - p0.y) - (a.y - p0.y) * (p1.x - p0.x)) / denom;

    let range = -PARAM_EPSILON..=1.0 + PARAM_EPSILON;
    if range.contains(&t) && range.contains(&u) {
        Some(t.clamp(0.0, 1.0))
    } else {
        None
    }
}

/// All crossing parameters of `p0 -> p1` with the set's edges, unsorted.
pub fn segment_intersections(p0: Point, p1: Point, set: &PolygonSet) -> Vec<f64> {
    set.edges()
        .filter_map(|(a, b)| segment_edge_intersection(p0, p1, a, b))
        .collect()
}

// ============================================================================
// SEGMENT CLIPPING
// ============================================================================

/// Parameter intervals of `p0 -> p1` that lie inside the region.
///
/// The crossing parameters split the segment into pieces; a piece survives
/// when its midpoint is inside. Testing the midpoint sidesteps deciding
/// which side of an ambiguous crossing is the inside. The returned intervals
/// are ascending and never overlap.
pub fn clip_parameters(p0: Point, p1: Point, set: &PolygonSet) -> Vec<(f64, f64)> {
    let mut ts = segment_intersections(p0, p1, set);
    ts.push(0.0);
    ts.push(1.0);
    ts.sort_by(f64::total_cmp);
    ts.dedup();

    ts.windows(2)
        .filter_map(|w| {
            let (t0, t1) = (w[0], w[1]);
            if t1 - t0 < MIN_PARAM_SPAN {
                return None;
            }
            let mid = p0.lerp(p1, (t0 + t1) * 0.5);
            contains(set, mid).then_some((t0, t1))
        })
        .collect()
}

/// Clip one segment to the region, returning the surviving pieces in order.
pub fn clip_segment(p0: Point, p1: Point, set: &PolygonSet) -> Vec<Segment> {
    clip_parameters(p0, p1, set)
        .into_iter()
        .map(|(t0, t1)| Segment::new(p0.lerp(p1, t0), p0.lerp(p1, t1)))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
