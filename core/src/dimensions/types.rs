//! Value types flowing through the dimension layout pipeline.

use crate::geometry::{ApproxEq, Point2, Point3, Vector2, Vector3};
use crate::tags::{same_tag_set, Tag};
use serde::{Deserialize, Serialize};

/// How far the helper lines of an automatic measurement may extend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extent {
    /// One or two extend vectors; the band covers `{0, primary, secondary, primary + secondary}`.
    Extend {
        primary: Vector3,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        secondary: Option<Vector3>,
    },
    /// A box size; the band covers every corner of `[0, size]`.
    Size(Vector3),
}

impl Extent {
    /// Helper lines stay on the measured points.
    pub fn none() -> Self {
        Self::Extend {
            primary: Vector3::zeros(),
            secondary: None,
        }
    }

    /// The 3D offsets whose projections bound the helper-line band.
    /// Always contains the zero offset first.
    pub fn offsets(&self) -> Vec<Vector3> {
        match self {
            Self::Extend { primary, secondary: None } => vec![Vector3::zeros(), *primary],
            Self::Extend { primary, secondary: Some(secondary) } => vec![
                Vector3::zeros(),
                *primary,
                *secondary,
                primary + secondary,
            ],
            Self::Size(size) => {
                let mut corners = Vec::with_capacity(8);
                for x in [0.0, size.x] {
                    for y in [0.0, size.y] {
                        for z in [0.0, size.z] {
                            corners.push(Vector3::new(x, y, z));
                        }
                    }
                }
                corners
            }
        }
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::none()
    }
}

/// A measurement whose helper-line extent is derived from geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoMeasurement {
    pub start_point: Point3,
    pub end_point: Point3,
    #[serde(default)]
    pub extent: Extent,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl AutoMeasurement {
    pub fn new(start_point: Point3, end_point: Point3) -> Self {
        Self {
            start_point,
            end_point,
            extent: Extent::none(),
            tags: Vec::new(),
        }
    }

    pub fn with_extent(mut self, extent: Extent) -> Self {
        self.extent = extent;
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }
}

/// A measurement whose displayed value and offset the caller already decided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectMeasurement {
    pub start_point: Point3,
    pub end_point: Point3,
    pub label: String,
    pub offset: f64,
    pub length: f64,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl DirectMeasurement {
    pub fn new(
        start_point: Point3,
        end_point: Point3,
        label: impl Into<String>,
        offset: f64,
        length: f64,
    ) -> Self {
        Self {
            start_point,
            end_point,
            label: label.into(),
            offset,
            length,
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }
}

/// Input to the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Measurement {
    Auto(AutoMeasurement),
    Direct(DirectMeasurement),
}

impl Measurement {
    pub fn start_point(&self) -> &Point3 {
        match self {
            Self::Auto(m) => &m.start_point,
            Self::Direct(m) => &m.start_point,
        }
    }

    pub fn end_point(&self) -> &Point3 {
        match self {
            Self::Auto(m) => &m.end_point,
            Self::Direct(m) => &m.end_point,
        }
    }

    pub fn tags(&self) -> &[Tag] {
        match self {
            Self::Auto(m) => &m.tags,
            Self::Direct(m) => &m.tags,
        }
    }
}

impl From<AutoMeasurement> for Measurement {
    fn from(m: AutoMeasurement) -> Self {
        Self::Auto(m)
    }
}

impl From<DirectMeasurement> for Measurement {
    fn from(m: DirectMeasurement) -> Self {
        Self::Direct(m)
    }
}

/// A measurement mapped into the drawing plane with its canonical direction.
///
/// `start_point_min/max` and `end_point_min/max` bound the helper-line band
/// perpendicular to `direction` at each end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedMeasurement {
    pub start_point: Point2,
    pub end_point: Point2,
    pub start_point_min: Point2,
    pub start_point_max: Point2,
    pub end_point_min: Point2,
    pub end_point_max: Point2,
    pub direction: Vector2,
    pub length: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub tags: Vec<Tag>,
}

impl ProjectedMeasurement {
    /// Every 2D point that contributes to the measurement's extent.
    pub fn extent_points(&self) -> [Point2; 6] {
        [
            self.start_point,
            self.end_point,
            self.start_point_min,
            self.start_point_max,
            self.end_point_min,
            self.end_point_max,
        ]
    }
}

/// A projected measurement placed on its group's direction axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalMeasurement {
    pub measurement: ProjectedMeasurement,
    pub t1: f64,
    pub t2: f64,
    pub distance_left: f64,
    pub distance_right: f64,
}

impl IntervalMeasurement {
    /// Same interval and same tag set. The helper-line band does not count.
    pub fn is_duplicate_of(&self, other: &Self, eps: f64) -> bool {
        self.t1.approx_eq_eps(&other.t1, eps)
            && self.t2.approx_eq_eps(&other.t2, eps)
            && same_tag_set(&self.measurement.tags, &other.measurement.tags)
    }
}

/// One of the two sides of the reference polygon a group can be anchored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Towards the negative end of the group's perpendicular axis.
    Left,
    /// Towards the positive end of the group's perpendicular axis.
    Right,
}

/// Measurements sharing one canonical direction, with their candidate anchors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementGroup {
    pub direction: Vector2,
    pub start_left: Point2,
    pub start_right: Point2,
    pub measurements: Vec<ProjectedMeasurement>,
}

/// A finished dimension line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineMeasurement {
    /// Measured points, for distance labeling.
    pub start_point: Point2,
    pub end_point: Point2,
    /// The measured points snapped onto the row's dimension line.
    pub start_on_line: Point2,
    pub end_on_line: Point2,
    pub length: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub tags: Vec<Tag>,
}

/// All dimension lines of one group on one side of the reference polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementLines {
    pub direction: Vector2,
    pub side: Side,
    /// Anchor point on the reference polygon.
    pub start: Point2,
    /// Unit vector pointing away from the polygon; rows stack along it.
    pub normal: Vector2,
    /// Row 0 is closest to the polygon. Lines within a row never overlap.
    pub lines: Vec<Vec<LineMeasurement>>,
}

impl MeasurementLines {
    /// Number of dimension lines across all rows.
    pub fn measurement_count(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }

    pub fn iter_lines(&self) -> impl Iterator<Item = &LineMeasurement> {
        self.lines.iter().flatten()
    }
}
