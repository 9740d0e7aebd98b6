//! Voxel ground bookkeeping: outer sides, corners, and grow/reduce targets
//!
//! A ground is a set of virtual grid positions. Growing extrudes one layer
//! of new positions along a direction; reducing removes the outermost layer
//! and remembers the positions behind it so the ground can be extruded back.

use std::cmp::Ordering;

use log::debug;

use crate::math::snap::{is_valid_cell_size, snap};
use crate::math::{Axis3, Direction3, Vector3};
use crate::spatial::element::{ElementId, PositionedElement};

/// Extremes of the ground along one axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSides {
    /// Lowest coordinate
    pub min: f32,
    /// Highest coordinate
    pub max: f32,
    /// Elements lying exactly on `min`
    pub at_min: Vec<ElementId>,
    /// Elements lying exactly on `max`
    pub at_max: Vec<ElementId>,
}

/// Outer faces and corners of a set of elements
#[derive(Debug, Clone, PartialEq)]
pub struct GroundSides {
    /// Sides along x
    pub x: AxisSides,
    /// Sides along y
    pub y: AxisSides,
    /// Sides along z
    pub z: AxisSides,
    /// Element with the lexicographically smallest position
    pub min_corner: ElementId,
    /// Element with the lexicographically largest position
    pub max_corner: ElementId,
}

fn lexicographic(a: Vector3, b: Vector3) -> Ordering {
    a.x.total_cmp(&b.x)
        .then(a.y.total_cmp(&b.y))
        .then(a.z.total_cmp(&b.z))
}

impl GroundSides {
    /// Extract sides and corners, `None` when there are no elements
    pub fn from_elements(elements: &[PositionedElement]) -> Option<Self> {
        let min_corner = elements
            .iter()
            .min_by(|a, b| lexicographic(a.position, b.position))?
            .id;
        let max_corner = elements
            .iter()
            .max_by(|a, b| lexicographic(a.position, b.position))?
            .id;

        Some(Self {
            x: Self::axis_sides(elements, Axis3::X)?,
            y: Self::axis_sides(elements, Axis3::Y)?,
            z: Self::axis_sides(elements, Axis3::Z)?,
            min_corner,
            max_corner,
        })
    }

    // Faces are matched on exact snapped coordinates
    #[allow(clippy::float_cmp)]
    fn axis_sides(elements: &[PositionedElement], axis: Axis3) -> Option<AxisSides> {
        let coordinates = elements.iter().map(|element| element.position.get(axis));
        let min = coordinates.clone().min_by(f32::total_cmp)?;
        let max = coordinates.max_by(f32::total_cmp)?;

        let on = |value: f32| {
            elements
                .iter()
                .filter(|element| element.position.get(axis) == value)
                .map(|element| element.id)
                .collect::<Vec<_>>()
        };

        Some(AxisSides {
            min,
            max,
            at_min: on(min),
            at_max: on(max),
        })
    }

    /// Sides along an axis
    pub const fn axis(&self, axis: Axis3) -> &AxisSides {
        match axis {
            Axis3::X => &self.x,
            Axis3::Y => &self.y,
            Axis3::Z => &self.z,
        }
    }

    /// Elements on the face looking toward `direction`
    pub fn side(&self, direction: Direction3) -> &[ElementId] {
        let sides = self.axis(direction.axis);
        if direction.positive {
            &sides.at_max
        } else {
            &sides.at_min
        }
    }
}

/// Virtual ground: the grid positions a host keeps filled
#[derive(Debug, Clone, Default)]
pub struct Ground {
    positions: Vec<Vector3>,
    cell_size: f32,
}

impl Ground {
    /// Create an empty ground on a grid of `cell_size`
    pub const fn new(cell_size: f32) -> Self {
        Self {
            positions: Vec::new(),
            cell_size,
        }
    }

    /// Known ground positions in insertion order
    pub fn positions(&self) -> &[Vector3] {
        &self.positions
    }

    /// Cell size the ground snaps to
    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Add a position, returning `false` if it was already present
    pub fn add_position(&mut self, position: Vector3) -> bool {
        if self.positions.contains(&position) {
            return false;
        }
        self.positions.push(position);
        true
    }

    /// Snapped ground positions that are still free and should be filled
    pub fn fill_targets(&self, mut is_free: impl FnMut(Vector3) -> bool) -> Vec<Vector3> {
        if !is_valid_cell_size(self.cell_size) {
            return Vec::new();
        }
        self.positions
            .iter()
            .map(|&position| snap(position, self.cell_size))
            .filter(|&position| is_free(position))
            .collect()
    }

    #[allow(clippy::float_cmp)]
    /// Positions where one new layer should be created toward `direction`
    ///
    /// Every stepped position joins the ground. Of the free ones, only the
    /// layer nearest the existing ground along the direction is returned.
    pub fn grow_targets(
        &mut self,
        elements: &[PositionedElement],
        direction: Direction3,
        mut is_free: impl FnMut(Vector3) -> bool,
    ) -> Vec<Vector3> {
        if !is_valid_cell_size(self.cell_size) {
            return Vec::new();
        }

        let step = direction.unit() * self.cell_size;
        let mut candidates = Vec::new();
        for element in elements {
            let target = snap(element.position + step, self.cell_size);
            if is_free(target) {
                candidates.push(target);
            }
            self.add_position(target);
        }

        let axis = direction.axis;
        let nearest = if direction.positive {
            candidates.iter().map(|p| p.get(axis)).min_by(f32::total_cmp)
        } else {
            candidates.iter().map(|p| p.get(axis)).max_by(f32::total_cmp)
        };
        let Some(layer) = nearest else {
            return Vec::new();
        };

        candidates.retain(|position| position.get(axis) == layer);
        debug!("ground grows {} elements", candidates.len());
        candidates
    }

    /// Elements to remove when the face toward `direction` is peeled off
    ///
    /// The position one cell behind each removed element joins the ground so
    /// a later grow can extrude it again.
    pub fn reduce_targets(
        &mut self,
        elements: &[PositionedElement],
        direction: Direction3,
    ) -> Vec<ElementId> {
        if !is_valid_cell_size(self.cell_size) {
            return Vec::new();
        }
        let Some(sides) = GroundSides::from_elements(elements) else {
            return Vec::new();
        };

        let back = direction.reversed().unit() * self.cell_size;
        let side = sides.side(direction);
        let mut removed = Vec::with_capacity(side.len());
        for element in elements.iter().filter(|element| side.contains(&element.id)) {
            self.add_position(snap(element.position + back, self.cell_size));
            removed.push(element.id);
        }

        debug!("ground reduces {} elements", removed.len());
        removed
    }
}
