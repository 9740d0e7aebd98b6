//! Grid quantization
//!
//! Every axis is mapped independently to `round(value / cell) * cell`. Ties
//! round half-to-even, so `0.5` lands on `0` and `1.5` on `2`, matching the
//! editor behaviour the grid tool has always had.

use num_traits::Float;

use crate::math::Vector3;

#[allow(clippy::float_cmp)]
/// Round to the nearest integer, resolving exact `.5` ties toward the even neighbour
pub fn round_half_even<T: Float>(value: T) -> T {
    let rounded = value.round();
    let two = T::one() + T::one();
    let half = T::one() / two;

    // `round` resolves ties away from zero; step back when that lands on an odd integer
    if (rounded - value).abs() == half && (rounded / two).fract() != T::zero() {
        rounded - value.signum()
    } else {
        rounded
    }
}

/// Check that a cell size can drive quantization
pub fn is_valid_cell_size<T: Float>(cell_size: T) -> bool {
    cell_size > T::zero() && cell_size.is_finite()
}

/// Snap a single coordinate to the nearest multiple of `cell_size`
///
/// Returns `value` unchanged when `cell_size` is not a positive finite number.
pub fn snap_scalar<T: Float>(value: T, cell_size: T) -> T {
    if !is_valid_cell_size(cell_size) {
        return value;
    }
    round_half_even(value / cell_size) * cell_size
}

/// Snap a position to the virtual grid
///
/// Identity when `cell_size <= 0`.
pub fn snap(position: Vector3, cell_size: f32) -> Vector3 {
    position.map(|component| snap_scalar(component, cell_size))
}

/// Index of the cell whose centre is nearest to a coordinate
///
/// Halves always round up, so coordinates one cell apart get consecutive
/// indices on any lattice offset. Returns `None` for invalid cell sizes and
/// non-finite or out-of-range coordinates.
pub fn cell_index(value: f32, cell_size: f32) -> Option<i64> {
    if !is_valid_cell_size(cell_size) {
        return None;
    }
    let index = (f64::from(value) / f64::from(cell_size) + 0.5).floor();
    (index.is_finite() && index.abs() < 2f64.powi(52)).then_some(index as i64)
}
