//! Greedy row packing of intervals and snapping onto dimension lines.
//!
//! Packing is interval graph coloring: intervals sorted by start are placed
//! into the first row whose furthest end does not reach past the new start.
//! For intervals this first-fit order uses the minimum number of rows.

use super::assign::SideIntervals;
use super::config::LayoutConfig;
use super::types::{IntervalMeasurement, LineMeasurement, MeasurementLines};
use crate::geometry::utils_2d::{axis_coordinate, snap_to_axis_coordinate};
use tracing::trace;

/// Pack `(t1, t2)` intervals into rows of non-overlapping intervals.
///
/// Returns, per row, the indices of the intervals it holds in ascending `t1`.
/// Touching intervals (`t1 == previous t2`) share a row. Sorting is stable, so
/// intervals with equal `t1` keep their input order.
pub fn pack_intervals(intervals: &[(f64, f64)]) -> Vec<Vec<usize>> {
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_by(|&a, &b| intervals[a].0.total_cmp(&intervals[b].0));

    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut row_ends: Vec<f64> = Vec::new();

    for index in order {
        let (t1, t2) = intervals[index];
        match row_ends.iter().position(|&end| end <= t1) {
            Some(row) => {
                rows[row].push(index);
                row_ends[row] = row_ends[row].max(t2);
            }
            None => {
                rows.push(vec![index]);
                row_ends.push(t2);
            }
        }
    }

    rows
}

/// Lay out one side: pack its intervals and snap every measurement onto the
/// dimension line of its row.
pub fn layout_side(side: &SideIntervals, config: &LayoutConfig) -> MeasurementLines {
    let spans: Vec<(f64, f64)> = side.intervals.iter().map(|i| (i.t1, i.t2)).collect();
    let rows = pack_intervals(&spans);
    trace!(side = ?side.side, intervals = spans.len(), rows = rows.len(), "packed side");

    let anchor_c = axis_coordinate(&side.anchor, &side.outward);
    let lines = rows
        .iter()
        .enumerate()
        .map(|(row, indices)| {
            let line_c = anchor_c + config.row_offset(row);
            indices
                .iter()
                .map(|&i| snap_line(&side.intervals[i], side, line_c))
                .collect()
        })
        .collect();

    MeasurementLines {
        direction: side.direction,
        side: side.side,
        start: side.anchor,
        normal: side.outward,
        lines,
    }
}

fn snap_line(interval: &IntervalMeasurement, side: &SideIntervals, line_c: f64) -> LineMeasurement {
    let m = &interval.measurement;
    LineMeasurement {
        start_point: m.start_point,
        end_point: m.end_point,
        start_on_line: snap_to_axis_coordinate(&m.start_point, &side.outward, line_c),
        end_on_line: snap_to_axis_coordinate(&m.end_point, &side.outward, line_c),
        length: m.length,
        label: m.label.clone(),
        tags: m.tags.clone(),
    }
}
