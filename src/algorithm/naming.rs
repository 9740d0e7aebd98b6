//! Sequential child names
//!
//! Names are zero-padded to the digit count of how many elements get
//! renamed, so ten children read `00` through `09` and sort correctly as
//! plain strings.

use crate::io::configuration::TILE_NAME_WIDTH;
use crate::spatial::element::{ElementId, PositionedElement};

/// Number of decimal digits needed to print `value`
pub const fn digit_count(value: usize) -> usize {
    let mut digits = 1;
    let mut rest = value / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    digits
}

/// Generate `0..n` zero-padded names in input order
///
/// The element whose id equals `skip` is left out and does not consume a
/// number.
pub fn rename_sequential(
    elements: &[PositionedElement],
    skip: Option<ElementId>,
) -> Vec<(ElementId, String)> {
    let renamed: Vec<ElementId> = elements
        .iter()
        .map(|element| element.id)
        .filter(|&id| Some(id) != skip)
        .collect();

    let width = digit_count(renamed.len());
    renamed
        .into_iter()
        .enumerate()
        .map(|(index, id)| (id, format!("{index:0width$}")))
        .collect()
}

/// Name given to the tile generated for the element at `index`
pub fn tile_name(index: usize) -> String {
    format!("{index:>width$}", width = TILE_NAME_WIDTH)
}
