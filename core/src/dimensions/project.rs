//! Projection of measurements into the drawing plane and direction normalization.

use super::types::{Measurement, ProjectedMeasurement};
use crate::geometry::utils_2d::{axis_coordinate, canonical_direction, normalize_2d, perpendicular_ccw};
use crate::geometry::{Point2, Point3, Projection};
use tracing::trace;

/// Project a measurement and bring it into canonical direction.
///
/// Returns `None` for a measurement whose projected start and end coincide.
/// When the direction is negated, start and end swap roles so the stored
/// direction always points from `start_point` to `end_point`.
pub fn project_measurement<P>(measurement: &Measurement, projection: &P, tolerance: f64) -> Option<ProjectedMeasurement>
where
    P: Projection + ?Sized,
{
    let start3 = measurement.start_point();
    let end3 = measurement.end_point();
    let mut start = projection.project(start3);
    let mut end = projection.project(end3);

    let delta = end - start;
    let Some(raw_direction) = normalize_2d(&delta, tolerance) else {
        trace!(?start, ?end, "dropping degenerate measurement");
        return None;
    };

    let (direction, flipped) = canonical_direction(&raw_direction, tolerance);
    if flipped {
        std::mem::swap(&mut start, &mut end);
    }

    let normal = perpendicular_ccw(&direction);
    let (band_min, band_max) = match measurement {
        Measurement::Auto(m) => {
            let base = axis_coordinate(&start, &normal);
            m.extent
                .offsets()
                .iter()
                .flat_map(|offset| [start3 + offset, end3 + offset])
                .map(|corner: Point3| axis_coordinate(&projection.project(&corner), &normal) - base)
                .fold((0.0_f64, 0.0_f64), |(lo, hi), c| (lo.min(c), hi.max(c)))
        }
        Measurement::Direct(m) => (m.offset.min(0.0), m.offset.max(0.0)),
    };

    let (length, label) = match measurement {
        Measurement::Auto(_) => (delta.norm(), None),
        Measurement::Direct(m) => (m.length, Some(m.label.clone())),
    };

    let band = |p: Point2, c: f64| -> Point2 { p + normal * c };

    Some(ProjectedMeasurement {
        start_point: start,
        end_point: end,
        start_point_min: band(start, band_min),
        start_point_max: band(start, band_max),
        end_point_min: band(end, band_min),
        end_point_max: band(end, band_max),
        direction,
        length,
        label,
        tags: measurement.tags().to_vec(),
    })
}

/// Project every measurement, dropping degenerate ones.
pub fn project_all<'a, I, P>(measurements: I, projection: &P, tolerance: f64) -> Vec<ProjectedMeasurement>
where
    I: IntoIterator<Item = &'a Measurement>,
    P: Projection + ?Sized,
{
    measurements
        .into_iter()
        .filter_map(|m| project_measurement(m, projection, tolerance))
        .collect()
}
