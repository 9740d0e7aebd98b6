//! Grid configuration and host-driven auto snapping
//!
//! A grid never polls. The host calls [`Grid::tick`] from whatever update
//! loop it owns, and applies the returned moves itself.

use log::debug;

use crate::math::Vector3;
use crate::math::snap::{is_valid_cell_size, snap};
use crate::spatial::element::{ElementId, PositionedElement};

/// Cell size of the virtual grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Edge length of one cell, must be positive
    pub cell_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cell_size: 1.0 }
    }
}

impl GridConfig {
    /// Create a configuration with the given cell size
    pub const fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Whether operations driven by this configuration do anything
    pub fn is_valid(&self) -> bool {
        is_valid_cell_size(self.cell_size)
    }

    /// Half of the cell footprint
    pub fn extent(&self) -> f32 {
        self.cell_size / 2.0
    }
}

/// Snap result for one element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapMove {
    /// Element to move
    pub id: ElementId,
    /// Position before snapping
    pub from: Vector3,
    /// Snapped position
    pub to: Vector3,
}

impl SnapMove {
    /// Whether applying the move changes anything
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// One live grid with its auto-snap state
#[derive(Debug, Clone, Default)]
pub struct Grid {
    /// Cell configuration
    pub config: GridConfig,
    auto_snap: bool,
}

impl Grid {
    /// Create a grid with auto snap disabled
    pub const fn new(config: GridConfig) -> Self {
        Self {
            config,
            auto_snap: false,
        }
    }

    /// Whether [`Grid::tick`] snaps
    pub const fn auto_snap(&self) -> bool {
        self.auto_snap
    }

    /// Turn auto snap on
    pub const fn enable_auto_snap(&mut self) {
        self.auto_snap = true;
    }

    /// Turn auto snap off
    pub const fn disable_auto_snap(&mut self) {
        self.auto_snap = false;
    }

    /// Compute the snapped position of every element
    ///
    /// Every element is reported, moved or not. An invalid configuration
    /// yields no moves.
    pub fn snap_all(&self, elements: &[PositionedElement]) -> Vec<SnapMove> {
        if !self.config.is_valid() {
            return Vec::new();
        }

        let moves: Vec<SnapMove> = elements
            .iter()
            .map(|element| SnapMove {
                id: element.id,
                from: element.position,
                to: snap(element.position, self.config.cell_size),
            })
            .collect();

        debug!("{} elements snapped", moves.len());
        moves
    }

    /// Host update hook
    ///
    /// Does nothing unless auto snap is enabled. While the host is playing
    /// auto snap switches itself off, though the current call still snaps.
    pub fn tick(&mut self, elements: &[PositionedElement], playing: bool) -> Vec<SnapMove> {
        if !self.auto_snap {
            return Vec::new();
        }

        if playing {
            debug!("auto snap disabled while playing");
            self.auto_snap = false;
        }

        self.snap_all(elements)
    }
}
