//! Connected selection of sibling elements
//!
//! Starting from seed elements, the selection spreads to every sibling
//! (same direct parent) within a planar radius of an already selected
//! element, until nothing new is reached. The filters below then narrow a
//! selection to a row, a column, or one side of a reference position.

use std::collections::{HashMap, VecDeque};

use bitvec::prelude::*;
use log::debug;

use crate::io::configuration::SELECTION_RADIUS_RATIO;
use crate::math::{Direction, Vector3};
use crate::spatial::element::{ElementId, PositionedElement};

/// Reach used to find neighbours of an element whose footprint is `size` wide
pub fn selection_radius(size: f32) -> f32 {
    size * SELECTION_RADIUS_RATIO
}

/// Flood-fill siblings reachable from `seeds`
///
/// Returns ids in discovery order, seeds first. Seeds that are unknown or
/// have no parent are dropped since connectivity is defined between
/// siblings only.
pub fn select_connected(
    elements: &[PositionedElement],
    seeds: &[ElementId],
    radius: f32,
) -> Vec<ElementId> {
    if !(radius >= 0.0 && radius.is_finite()) {
        return Vec::new();
    }
    let reach = radius * radius;

    let mut selected: BitVec = bitvec![0; elements.len()];
    let mut order = Vec::new();
    let mut frontier = VecDeque::new();

    for seed in seeds {
        let Some(index) = elements.iter().position(|element| element.id == *seed) else {
            continue;
        };
        let has_parent = elements.get(index).is_some_and(|element| element.parent.is_some());
        if has_parent && !selected.get(index).is_some_and(|bit| *bit) {
            selected.set(index, true);
            order.push(index);
            frontier.push_back(index);
        }
    }

    while let Some(current_index) = frontier.pop_front() {
        let Some(current) = elements.get(current_index) else {
            continue;
        };
        for (index, candidate) in elements.iter().enumerate() {
            if selected.get(index).is_some_and(|bit| *bit) {
                continue;
            }
            let sibling = candidate.parent.is_some() && candidate.parent == current.parent;
            if sibling && candidate.position.planar_distance_squared(current.position) <= reach {
                selected.set(index, true);
                order.push(index);
                frontier.push_back(index);
            }
        }
    }

    debug!("{} connected elements selected", order.len());
    order
        .into_iter()
        .filter_map(|index| elements.get(index).map(|element| element.id))
        .collect()
}

fn filter_selection(
    elements: &[PositionedElement],
    selection: &[ElementId],
    keep: impl Fn(Vector3) -> bool,
) -> Vec<ElementId> {
    let positions: HashMap<ElementId, Vector3> = elements
        .iter()
        .map(|element| (element.id, element.position))
        .collect();

    selection
        .iter()
        .copied()
        .filter(|id| positions.get(id).is_some_and(|&position| keep(position)))
        .collect()
}

// Rows and columns are matched on exact snapped coordinates
#[allow(clippy::float_cmp)]
/// Keep selected elements sharing a y coordinate with any reference
pub fn same_row(
    elements: &[PositionedElement],
    selection: &[ElementId],
    references: &[Vector3],
) -> Vec<ElementId> {
    filter_selection(elements, selection, |position| {
        references.iter().any(|reference| reference.y == position.y)
    })
}

#[allow(clippy::float_cmp)]
/// Keep selected elements sharing an x coordinate with any reference
pub fn same_column(
    elements: &[PositionedElement],
    selection: &[ElementId],
    references: &[Vector3],
) -> Vec<ElementId> {
    filter_selection(elements, selection, |position| {
        references.iter().any(|reference| reference.x == position.x)
    })
}

/// Keep selected elements on the `direction` side of `reference`, inclusive
pub fn toward(
    elements: &[PositionedElement],
    selection: &[ElementId],
    reference: Vector3,
    direction: Direction,
) -> Vec<ElementId> {
    filter_selection(elements, selection, |position| match direction {
        Direction::Up => position.y >= reference.y,
        Direction::Right => position.x >= reference.x,
        Direction::Down => position.y <= reference.y,
        Direction::Left => position.x <= reference.x,
    })
}
