//! Mapping of 3D model coordinates into a 2D drawing plane.

use super::{Point2, Point3, Vector3, EPSILON};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a projection frame.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("Plane normal has zero length")]
    DegenerateNormal,

    #[error("Up vector is parallel to the plane normal")]
    ParallelUp,
}

/// A pure map from model space into the drawing plane.
///
/// The layout engine has no camera model of its own; it only calls
/// [`Projection::project`]. Any `Fn(&Point3) -> Point2` is a projection.
pub trait Projection {
    fn project(&self, point: &Point3) -> Point2;
}

impl<F> Projection for F
where
    F: Fn(&Point3) -> Point2,
{
    fn project(&self, point: &Point3) -> Point2 {
        self(point)
    }
}

/// Orthographic projection onto a plane spanned by two orthonormal axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrthographicProjection {
    pub origin: Point3,
    pub x_axis: Vector3,
    pub y_axis: Vector3,
}

impl OrthographicProjection {
    /// Plan view: drops `z`.
    pub fn xy() -> Self {
        Self {
            origin: Point3::origin(),
            x_axis: Vector3::x_axis().into_inner(),
            y_axis: Vector3::y_axis().into_inner(),
        }
    }

    /// Elevation looking along `y`: model `x` to drawing `x`, model `z` to drawing `y`.
    pub fn xz() -> Self {
        Self {
            origin: Point3::origin(),
            x_axis: Vector3::x_axis().into_inner(),
            y_axis: Vector3::z_axis().into_inner(),
        }
    }

    /// Elevation looking along `x`: model `y` to drawing `x`, model `z` to drawing `y`.
    pub fn yz() -> Self {
        Self {
            origin: Point3::origin(),
            x_axis: Vector3::y_axis().into_inner(),
            y_axis: Vector3::z_axis().into_inner(),
        }
    }

    /// Build a frame on the plane through `origin` with the given `normal`.
    /// The drawing `y` axis is `up` with its normal component removed.
    pub fn from_plane(origin: Point3, normal: Vector3, up: Vector3) -> Result<Self, ProjectionError> {
        let normal = normal
            .try_normalize(EPSILON)
            .ok_or(ProjectionError::DegenerateNormal)?;
        let x_axis = up
            .cross(&normal)
            .try_normalize(EPSILON)
            .ok_or(ProjectionError::ParallelUp)?;
        let y_axis = normal.cross(&x_axis);

        Ok(Self { origin, x_axis, y_axis })
    }
}

impl Default for OrthographicProjection {
    fn default() -> Self {
        Self::xy()
    }
}

impl Projection for OrthographicProjection {
    fn project(&self, point: &Point3) -> Point2 {
        let v = point - self.origin;
        Point2::new(v.dot(&self.x_axis), v.dot(&self.y_axis))
    }
}
