//! Mathematical utilities for grid geometry

/// Grid quantization with half-to-even rounding
pub mod snap;
/// Three-component vectors and planar/spatial directions
pub mod vector;

pub use vector::{Axis3, Direction, Direction3, Vector3};
