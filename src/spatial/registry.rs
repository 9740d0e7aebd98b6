//! Explicit registry of live grids
//!
//! Replaces ambient global state: whichever layer needs to enumerate grids
//! owns a [`GridRegistry`] and passes it around.

use log::debug;

use crate::spatial::grid::Grid;

/// Host-chosen grid handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridId(pub u64);

/// Ordered collection of live grids
#[derive(Debug, Clone, Default)]
pub struct GridRegistry {
    grids: Vec<(GridId, Grid)>,
}

impl GridRegistry {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self { grids: Vec::new() }
    }

    /// Register a grid
    ///
    /// Returns `false` and leaves the registry untouched when `id` is
    /// already present.
    pub fn register(&mut self, id: GridId, grid: Grid) -> bool {
        if self.contains(id) {
            return false;
        }
        self.grids.push((id, grid));
        true
    }

    /// Remove a grid, returning it if it was registered
    pub fn unregister(&mut self, id: GridId) -> Option<Grid> {
        let index = self.grids.iter().position(|(grid_id, _)| *grid_id == id)?;
        Some(self.grids.remove(index).1)
    }

    /// Whether `id` is registered
    pub fn contains(&self, id: GridId) -> bool {
        self.grids.iter().any(|(grid_id, _)| *grid_id == id)
    }

    /// Look up a grid
    pub fn get(&self, id: GridId) -> Option<&Grid> {
        self.grids
            .iter()
            .find(|(grid_id, _)| *grid_id == id)
            .map(|(_, grid)| grid)
    }

    /// Look up a grid for modification
    pub fn get_mut(&mut self, id: GridId) -> Option<&mut Grid> {
        self.grids
            .iter_mut()
            .find(|(grid_id, _)| *grid_id == id)
            .map(|(_, grid)| grid)
    }

    /// Iterate grids in registration order
    pub fn iter(&self) -> impl Iterator<Item = (GridId, &Grid)> {
        self.grids.iter().map(|(id, grid)| (*id, grid))
    }

    /// Number of registered grids
    pub const fn len(&self) -> usize {
        self.grids.len()
    }

    /// Whether no grid is registered
    pub const fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Switch auto snap off everywhere, returning how many grids had it on
    pub fn disable_all_auto_snap(&mut self) -> usize {
        let mut disabled = 0;
        for (_, grid) in &mut self.grids {
            if grid.auto_snap() {
                grid.disable_auto_snap();
                disabled += 1;
            }
        }
        debug!("auto snap disabled for all grids ({disabled} were running)");
        disabled
    }
}
