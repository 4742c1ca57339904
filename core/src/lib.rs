pub mod dimensions;
pub mod geometry;
pub mod tags;

pub use dimensions::{process_measurements, LayoutConfig, LayoutEngine, MeasurementLayout};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
