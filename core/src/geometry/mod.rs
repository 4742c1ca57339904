use nalgebra as na;

pub type Point2 = na::Point2<f64>;
pub type Point3 = na::Point3<f64>;
pub type Vector2 = na::Vector2<f64>;
pub type Vector3 = na::Vector3<f64>;

pub const EPSILON: f64 = 1e-6;

/// Tolerance-based equality used wherever floating round-off must not split
/// values that are geometrically the same (direction groups, intervals).
pub trait ApproxEq {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool;

    fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(other, EPSILON)
    }
}

impl ApproxEq for f64 {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        (self - other).abs() < eps
    }
}

impl ApproxEq for Point2 {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        na::distance_squared(self, other) < eps * eps
    }
}

impl ApproxEq for Vector2 {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        (self - other).norm_squared() < eps * eps
    }
}

impl ApproxEq for Point3 {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        na::distance_squared(self, other) < eps * eps
    }
}

impl ApproxEq for Vector3 {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        (self - other).norm_squared() < eps * eps
    }
}

pub mod utils_2d;

pub mod projection;
pub use projection::{OrthographicProjection, Projection, ProjectionError};
