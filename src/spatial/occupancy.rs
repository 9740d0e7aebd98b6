//! Per-cell occupancy counts used as a ready-made [`Probe`]
//!
//! Elements are bucketed by their nearest XY cell centre with halves
//! rounding up, so two elements one cell apart always land in adjacent
//! cells whatever the lattice offset. A probe walks outward from the
//! element's own cell, which is never examined, so an element never sees
//! itself nor an exact duplicate stacked on top of it.
//!
//! Compact layouts are counted in a dense array. Layouts whose bounding box
//! exceeds [`MAX_DENSE_CELLS`] fall back to a sparse map, so building a grid
//! never fails.

use std::collections::HashMap;
use std::convert::Infallible;

use log::debug;
use ndarray::Array2;

use crate::algorithm::border::Probe;
use crate::io::configuration::MAX_DENSE_CELLS;
use crate::math::Direction;
use crate::math::snap::{cell_index, is_valid_cell_size};
use crate::spatial::element::PositionedElement;

// Probe reach is capped where f64 still holds whole cell counts exactly
const MAX_REACH: f64 = 4_503_599_627_370_496.0;

#[derive(Debug, Clone)]
enum Cells {
    /// Counts indexed by `[x - origin.x, y - origin.y]`
    Dense(Array2<u32>),
    Sparse(HashMap<[i64; 2], u32>),
}

/// Element counts per XY cell
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    cells: Cells,
    /// Lowest occupied cell on each axis
    origin: [i64; 2],
    /// Bounding box size in cells
    span: [u64; 2],
    cell_size: f32,
}

impl OccupancyGrid {
    /// Bucket elements into cells of `cell_size`
    ///
    /// Elements whose cell cannot be computed are ignored. An invalid cell
    /// size or an empty slice yields a grid where every cell is empty.
    pub fn from_elements(elements: &[PositionedElement], cell_size: f32) -> Self {
        let cells: Vec<[i64; 2]> = elements
            .iter()
            .filter_map(|element| {
                Some([
                    cell_index(element.position.x, cell_size)?,
                    cell_index(element.position.y, cell_size)?,
                ])
            })
            .collect();

        let Some(&first) = cells.first() else {
            return Self {
                cells: Cells::Dense(Array2::<u32>::zeros((0, 0))),
                origin: [0, 0],
                span: [0, 0],
                cell_size,
            };
        };

        let (min, max) = cells.iter().fold((first, first), |(min, max), cell| {
            (
                [min[0].min(cell[0]), min[1].min(cell[1])],
                [max[0].max(cell[0]), max[1].max(cell[1])],
            )
        });
        let span = [max[0].abs_diff(min[0]) + 1, max[1].abs_diff(min[1]) + 1];

        let dense_shape = usize::try_from(span[0])
            .ok()
            .zip(usize::try_from(span[1]).ok())
            .filter(|&(width, height)| {
                width
                    .checked_mul(height)
                    .is_some_and(|area| area <= MAX_DENSE_CELLS)
            });

        let store = if let Some(shape) = dense_shape {
            let mut counts = Array2::<u32>::zeros(shape);
            for cell in &cells {
                let index = [cell[0].abs_diff(min[0]), cell[1].abs_diff(min[1])]
                    .map(|offset| usize::try_from(offset).unwrap_or(usize::MAX));
                if let Some(count) = counts.get_mut(index) {
                    *count += 1;
                }
            }
            Cells::Dense(counts)
        } else {
            debug!("{}x{} cell layout counted sparsely", span[0], span[1]);
            let mut counts: HashMap<[i64; 2], u32> = HashMap::with_capacity(cells.len());
            for cell in cells {
                *counts.entry(cell).or_default() += 1;
            }
            Cells::Sparse(counts)
        };

        Self {
            cells: store,
            origin: min,
            span,
            cell_size,
        }
    }

    /// Number of elements recorded at a cell, zero outside the grid
    pub fn count_at(&self, cell: [i64; 2]) -> u32 {
        match &self.cells {
            Cells::Dense(counts) => {
                let offset = |value: i64, origin: i64| usize::try_from(value - origin).ok();
                offset(cell[0], self.origin[0])
                    .zip(offset(cell[1], self.origin[1]))
                    .and_then(|(x, y)| counts.get([x, y]).copied())
                    .unwrap_or(0)
            }
            Cells::Sparse(counts) => counts.get(&cell).copied().unwrap_or(0),
        }
    }

    /// Whether anything occupies a cell
    pub fn is_occupied(&self, cell: [i64; 2]) -> bool {
        self.count_at(cell) > 0
    }

    /// Bounding box of occupied cells as (width, height)
    pub const fn dimensions(&self) -> (u64, u64) {
        (self.span[0], self.span[1])
    }

    /// Cell coordinates of the lowest occupied corner
    pub const fn origin(&self) -> [i64; 2] {
        self.origin
    }

    /// Whether counts live in a dense array rather than a sparse map
    pub const fn is_dense(&self) -> bool {
        matches!(self.cells, Cells::Dense(_))
    }

    /// Number of whole cells a probe of `distance` reaches
    ///
    /// A neighbour `k` cells away is reached once the probe passes the near
    /// edge of its footprint, at `k - 0.5` cells. Negative or non-finite
    /// distances reach nothing.
    // The cast operand is bounded to [0, 2^52]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn reach_in_cells(&self, distance: f32) -> u64 {
        if !(distance >= 0.0 && distance.is_finite() && is_valid_cell_size(self.cell_size)) {
            return 0;
        }
        (f64::from(distance) / f64::from(self.cell_size) + 0.5)
            .floor()
            .min(MAX_REACH) as u64
    }

    fn cell_of(&self, x: f32, y: f32) -> Option<[i64; 2]> {
        Some([cell_index(x, self.cell_size)?, cell_index(y, self.cell_size)?])
    }

    // Steps from `start` toward `direction` that fall inside the bounding box
    fn walk_range(&self, start: [i64; 2], direction: Direction) -> Option<(u64, u64)> {
        let [low_x, low_y] = self.origin;
        let [width, height] = self.span.map(|extent| i64::try_from(extent).unwrap_or(i64::MAX));
        let high_x = low_x.saturating_add(width - 1);
        let high_y = low_y.saturating_add(height - 1);
        let [x, y] = start;

        let (in_line, near, far) = match direction {
            Direction::Up => ((low_x..=high_x).contains(&x), low_y - y, high_y - y),
            Direction::Right => ((low_y..=high_y).contains(&y), low_x - x, high_x - x),
            Direction::Down => ((low_x..=high_x).contains(&x), y - high_y, y - low_y),
            Direction::Left => ((low_y..=high_y).contains(&y), x - high_x, x - low_x),
        };
        let far = u64::try_from(far).ok()?;
        let near = u64::try_from(near).unwrap_or(0).max(1);
        (in_line && near <= far).then_some((near, far))
    }
}

impl Probe for OccupancyGrid {
    type Error = Infallible;

    fn occupied(
        &self,
        element: &PositionedElement,
        direction: Direction,
        distance: f32,
    ) -> std::result::Result<bool, Infallible> {
        let Some(start) = self.cell_of(element.position.x, element.position.y) else {
            return Ok(false);
        };
        let reach = self.reach_in_cells(distance);
        if reach == 0 {
            return Ok(false);
        }

        let [step_x, step_y] = direction.cell_step();
        let found = match &self.cells {
            Cells::Dense(_) => {
                let Some((near, far)) = self.walk_range(start, direction) else {
                    return Ok(false);
                };
                (near..=far.min(reach)).any(|k| {
                    let k = i64::try_from(k).unwrap_or(i64::MAX);
                    self.is_occupied([start[0] + step_x * k, start[1] + step_y * k])
                })
            }
            Cells::Sparse(counts) => counts.keys().any(|cell| {
                let (dx, dy) = (cell[0] - start[0], cell[1] - start[1]);
                let in_line = dx * step_y == dy * step_x;
                let ahead = u64::try_from(dx * step_x + dy * step_y).unwrap_or(0);
                in_line && (1..=reach).contains(&ahead)
            }),
        };
        Ok(found)
    }
}
