//! 2D geometry utilities for laying out dimension lines in a drawing plane.
//!
//! Everything here works in the plane produced by a [`Projection`](super::Projection):
//! directions are unit [`Vector2`]s and positions are [`Point2`]s.

use super::{Point2, Vector2};

// =============================================================================
// Vector Operations
// =============================================================================

/// Perpendicular vector (90° counter-clockwise rotation).
#[inline]
pub fn perpendicular_ccw(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Normalize a 2D vector. Returns `None` if its length does not exceed `eps`.
#[inline]
pub fn normalize_2d(v: &Vector2, eps: f64) -> Option<Vector2> {
    let len = v.norm();
    if len <= eps {
        None
    } else {
        Some(*v / len)
    }
}

/// Bring a unit direction into canonical sign: `x > 0`, or `x == 0` and `y > 0`.
///
/// `x` counts as zero when it lies within `eps`, so round-off on near-vertical
/// directions never flips one of two parallel measurements.
/// Returns the canonical direction and whether it was negated.
pub fn canonical_direction(direction: &Vector2, eps: f64) -> (Vector2, bool) {
    let flip = if direction.x.abs() <= eps {
        direction.y < 0.0
    } else {
        direction.x < 0.0
    };

    if flip {
        (-*direction, true)
    } else {
        (*direction, false)
    }
}

/// Scalar coordinate of a point along an axis through the origin.
#[inline]
pub fn axis_coordinate(point: &Point2, axis: &Vector2) -> f64 {
    point.coords.dot(axis)
}

/// Move `point` along `normal` until its coordinate on that axis equals `target`.
#[inline]
pub fn snap_to_axis_coordinate(point: &Point2, normal: &Vector2, target: f64) -> Point2 {
    *point + *normal * (target - axis_coordinate(point, normal))
}

// =============================================================================
// Polygon Operations
// =============================================================================

/// The two extreme vertices of a polygon along `axis`: `(min, max)`.
///
/// Ties resolve to the first such vertex in polygon order. A single-vertex
/// polygon yields the same point twice; an empty one yields `None`.
pub fn polygon_extremes_along(polygon: &[Point2], axis: &Vector2) -> Option<(Point2, Point2)> {
    let first = *polygon.first()?;
    let first_c = axis_coordinate(&first, axis);

    let mut min = (first, first_c);
    let mut max = (first, first_c);

    for p in &polygon[1..] {
        let c = axis_coordinate(p, axis);
        if c < min.1 {
            min = (*p, c);
        }
        if c > max.1 {
            max = (*p, c);
        }
    }

    Some((min.0, max.0))
}

/// Min and max of the coordinates of `points` along `axis`.
pub fn extent_along<'a, I>(points: I, axis: &Vector2) -> (f64, f64)
where
    I: IntoIterator<Item = &'a Point2>,
{
    points
        .into_iter()
        .map(|p| axis_coordinate(p, axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
            (lo.min(c), hi.max(c))
        })
}

// =============================================================================
// Tests
// =============================================================================
