//! Clustering of projected measurements by canonical direction.

use super::types::{MeasurementGroup, ProjectedMeasurement};
use crate::geometry::utils_2d::{perpendicular_ccw, polygon_extremes_along};
use crate::geometry::{ApproxEq, Point2, Vector2};

impl MeasurementGroup {
    /// Start an empty group for `direction`, anchored on the extreme points of
    /// `polygon` along the perpendicular axis. `None` for an empty polygon.
    pub fn anchored(direction: Vector2, polygon: &[Point2]) -> Option<Self> {
        let (start_left, start_right) = polygon_extremes_along(polygon, &perpendicular_ccw(&direction))?;
        Some(Self {
            direction,
            start_left,
            start_right,
            measurements: Vec::new(),
        })
    }

    /// Unit normal of the group's local frame. `start_left` lies towards its
    /// negative end, `start_right` towards its positive end.
    pub fn normal(&self) -> Vector2 {
        perpendicular_ccw(&self.direction)
    }
}

/// Partition measurements into direction groups, in order of first appearance.
///
/// Directions are compared with `tolerance`; a group keeps the direction of the
/// first measurement that opened it. An empty polygon produces no groups.
pub fn group_by_direction<I>(measurements: I, polygon: &[Point2], tolerance: f64) -> Vec<MeasurementGroup>
where
    I: IntoIterator<Item = ProjectedMeasurement>,
{
    let mut groups: Vec<MeasurementGroup> = Vec::new();
    if polygon.is_empty() {
        return groups;
    }

    for measurement in measurements {
        let existing = groups
            .iter()
            .position(|g| g.direction.approx_eq_eps(&measurement.direction, tolerance));

        match existing {
            Some(index) => groups[index].measurements.push(measurement),
            None => {
                let Some(mut group) = MeasurementGroup::anchored(measurement.direction, polygon) else {
                    continue;
                };
                group.measurements.push(measurement);
                groups.push(group);
            }
        }
    }

    groups
}
