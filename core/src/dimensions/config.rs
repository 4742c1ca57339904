use crate::geometry::EPSILON;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while configuring the layout engine.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),

    #[error("Row spacing must be non-negative and finite, got {0}")]
    InvalidRowSpacing(f64),

    #[error("Base offset must be finite, got {0}")]
    InvalidBaseOffset(f64),

    #[error("Invalid layout configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type LayoutResult<T> = Result<T, LayoutError>;

/// Tunables of the layout engine. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Equality tolerance for directions, degenerate lengths and intervals.
    pub tolerance: f64,
    /// Distance from the anchor side to row 0's dimension line.
    pub base_offset: f64,
    /// Distance between consecutive rows.
    pub row_spacing: f64,
    /// Emit both sides of every group even when a side has no measurements.
    pub emit_empty_sides: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            base_offset: 0.5,
            row_spacing: 0.5,
            emit_empty_sides: true,
        }
    }
}

impl LayoutConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LayoutResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(LayoutError::InvalidTolerance(self.tolerance));
        }
        if !(self.row_spacing.is_finite() && self.row_spacing >= 0.0) {
            return Err(LayoutError::InvalidRowSpacing(self.row_spacing));
        }
        if !self.base_offset.is_finite() {
            return Err(LayoutError::InvalidBaseOffset(self.base_offset));
        }
        Ok(())
    }

    /// Perpendicular distance of row `row`'s dimension line from its anchor.
    pub fn row_offset(&self, row: usize) -> f64 {
        self.base_offset + row as f64 * self.row_spacing
    }
}
