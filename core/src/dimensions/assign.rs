//! Nearest-side assignment and per-side deduplication.

use super::types::{IntervalMeasurement, MeasurementGroup, ProjectedMeasurement, Side};
use crate::geometry::utils_2d::{axis_coordinate, extent_along};
use crate::geometry::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The deduplicated intervals of one group on one side, ready for packing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideIntervals {
    pub direction: Vector2,
    pub side: Side,
    pub anchor: Point2,
    /// Unit vector pointing away from the polygon.
    pub outward: Vector2,
    pub intervals: Vec<IntervalMeasurement>,
}

/// Place a measurement on the group's direction axis and measure its
/// perpendicular distance to both anchors.
///
/// Distances are signed along the group normal so that both are positive for
/// a measurement lying between the two anchors.
pub fn to_interval(group: &MeasurementGroup, measurement: ProjectedMeasurement) -> IntervalMeasurement {
    let normal = group.normal();
    let (t1, t2) = extent_along(&measurement.extent_points(), &group.direction);

    let c = axis_coordinate(&measurement.start_point, &normal);
    let distance_left = c - axis_coordinate(&group.start_left, &normal);
    let distance_right = axis_coordinate(&group.start_right, &normal) - c;

    IntervalMeasurement {
        measurement,
        t1,
        t2,
        distance_left,
        distance_right,
    }
}

/// The side an interval belongs to: the nearer anchor, ties to the left.
pub fn nearest_side(interval: &IntervalMeasurement) -> Side {
    if interval.distance_left.abs() <= interval.distance_right.abs() {
        Side::Left
    } else {
        Side::Right
    }
}

/// Collapse duplicates, keeping the first occurrence of each.
/// Returns the surviving intervals and how many were removed.
pub fn dedup_intervals(intervals: Vec<IntervalMeasurement>, tolerance: f64) -> (Vec<IntervalMeasurement>, usize) {
    let mut kept: Vec<IntervalMeasurement> = Vec::with_capacity(intervals.len());
    let mut removed = 0;

    for interval in intervals {
        if kept.iter().any(|k| k.is_duplicate_of(&interval, tolerance)) {
            trace!(t1 = interval.t1, t2 = interval.t2, "merging duplicate measurement");
            removed += 1;
        } else {
            kept.push(interval);
        }
    }

    (kept, removed)
}

/// Split a group into its left and right sides, deduplicating each.
pub fn assign_sides(mut group: MeasurementGroup, tolerance: f64) -> [SideIntervals; 2] {
    let normal = group.normal();
    let direction = group.direction;
    let mut left = Vec::new();
    let mut right = Vec::new();

    for measurement in std::mem::take(&mut group.measurements) {
        let interval = to_interval(&group, measurement);
        match nearest_side(&interval) {
            Side::Left => left.push(interval),
            Side::Right => right.push(interval),
        }
    }

    let (left, left_removed) = dedup_intervals(left, tolerance);
    let (right, right_removed) = dedup_intervals(right, tolerance);
    debug!(
        ?direction,
        left = left.len(),
        right = right.len(),
        duplicates = left_removed + right_removed,
        "assigned measurements to sides"
    );

    [
        SideIntervals {
            direction,
            side: Side::Left,
            anchor: group.start_left,
            outward: -normal,
            intervals: left,
        },
        SideIntervals {
            direction,
            side: Side::Right,
            anchor: group.start_right,
            outward: normal,
            intervals: right,
        },
    ]
}
