//! Automatic dimension-line layout.
//!
//! Turns measurement requests taken from 3D building geometry into stacked
//! rows of non-overlapping dimension lines around a plan outline:
//!
//! 1. project every measurement into the drawing plane and canonicalize its
//!    direction, dropping zero-length ones ([`project`])
//! 2. group by direction and find the two anchor sides of the outline
//!    perpendicular to it ([`group`])
//! 3. assign each measurement to its nearer side and drop duplicates ([`assign`])
//! 4. pack each side into rows, row 0 nearest the outline ([`pack`])
//!
//! Every call is independent: nothing is cached between calls and the result
//! owns all of its data.

pub mod assign;
pub mod config;
pub mod group;
pub mod pack;
pub mod project;
pub mod types;

#[cfg(test)]
mod tests_layout;

pub use assign::SideIntervals;
pub use config::{LayoutConfig, LayoutError, LayoutResult};
pub use pack::pack_intervals;
pub use types::*;

use crate::geometry::{Point2, Projection};
use tracing::debug;

/// Lay out `measurements` around `reference_polygon_points` with the default
/// [`LayoutConfig`].
pub fn process_measurements<I, M, P>(measurements: I, projection: &P, reference_polygon_points: &[Point2]) -> MeasurementLayout
where
    I: IntoIterator<Item = M>,
    M: Into<Measurement>,
    P: Projection + ?Sized,
{
    LayoutEngine::default().process(measurements, projection, reference_polygon_points)
}

/// The layout pipeline bound to a configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Like [`LayoutEngine::new`], rejecting an invalid configuration.
    pub fn try_new(config: LayoutConfig) -> LayoutResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn process<I, M, P>(&self, measurements: I, projection: &P, reference_polygon_points: &[Point2]) -> MeasurementLayout
    where
        I: IntoIterator<Item = M>,
        M: Into<Measurement>,
        P: Projection + ?Sized,
    {
        let tolerance = self.config.tolerance;
        let measurements: Vec<Measurement> = measurements.into_iter().map(Into::into).collect();

        if reference_polygon_points.is_empty() {
            debug!(inputs = measurements.len(), "empty reference polygon, nothing to lay out");
            return MeasurementLayout::empty(self.config.clone());
        }

        let projected = project::project_all(&measurements, projection, tolerance);
        let degenerate = measurements.len() - projected.len();

        let groups = group::group_by_direction(projected, reference_polygon_points, tolerance);
        debug!(
            inputs = measurements.len(),
            degenerate,
            groups = groups.len(),
            "grouped measurements by direction"
        );

        let sides = groups
            .into_iter()
            .flat_map(|g| assign::assign_sides(g, tolerance))
            .collect();

        MeasurementLayout {
            config: self.config.clone(),
            sides,
        }
    }
}

/// The result of one layout call: a finite, restartable sequence of
/// [`MeasurementLines`], one per (group, side).
///
/// Sides are packed when the iterator reaches them, so stopping early skips
/// the remaining work. Each call to [`MeasurementLayout::iter`] starts over.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementLayout {
    config: LayoutConfig,
    sides: Vec<SideIntervals>,
}

impl MeasurementLayout {
    fn empty(config: LayoutConfig) -> Self {
        Self {
            config,
            sides: Vec::new(),
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            sides: self.sides.iter(),
            config: &self.config,
        }
    }

    /// The deduplicated, side-assigned intervals before packing.
    pub fn sides(&self) -> &[SideIntervals] {
        &self.sides
    }

    /// Number of [`MeasurementLines`] the sequence yields.
    pub fn len(&self) -> usize {
        self.sides.iter().filter(|s| emits(s, &self.config)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_vec(&self) -> Vec<MeasurementLines> {
        self.iter().collect()
    }
}

fn emits(side: &SideIntervals, config: &LayoutConfig) -> bool {
    config.emit_empty_sides || !side.intervals.is_empty()
}

/// Borrowing iterator over a [`MeasurementLayout`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    sides: std::slice::Iter<'a, SideIntervals>,
    config: &'a LayoutConfig,
}

impl Iterator for Iter<'_> {
    type Item = MeasurementLines;

    fn next(&mut self) -> Option<Self::Item> {
        let config = self.config;
        self.sides
            .by_ref()
            .find(|s| emits(s, config))
            .map(|s| pack::layout_side(s, config))
    }
}

impl<'a> IntoIterator for &'a MeasurementLayout {
    type Item = MeasurementLines;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`MeasurementLayout`].
#[derive(Debug)]
pub struct IntoIter {
    sides: std::vec::IntoIter<SideIntervals>,
    config: LayoutConfig,
}

impl Iterator for IntoIter {
    type Item = MeasurementLines;

    fn next(&mut self) -> Option<Self::Item> {
        let config = &self.config;
        self.sides
            .by_ref()
            .find(|s| emits(s, config))
            .map(|s| pack::layout_side(&s, config))
    }
}

impl IntoIterator for MeasurementLayout {
    type Item = MeasurementLines;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            sides: self.sides.into_iter(),
            config: self.config,
        }
    }
}
