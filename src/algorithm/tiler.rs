//! Turn a layout of square cells into autotile placements
//!
//! Each element is snapped, probed on its four sides, classified, and given
//! a randomly chosen variant of the tile for its class. Variant choice is
//! driven by a seeded generator so the same layout and seed always tile the
//! same way.

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::border::{Probe, adjacency_mask};
use crate::algorithm::naming::tile_name;
use crate::io::configuration::{DEFAULT_SEED, TILER_PROBE_RATIO};
use crate::math::Vector3;
use crate::math::snap::snap;
use crate::spatial::element::{ElementId, PositionedElement};
use crate::spatial::grid::GridConfig;
use crate::spatial::tiles::{AdjacencyMask, TileClass, classify_tile};

/// Interchangeable tile variants for each class
#[derive(Debug, Clone)]
pub struct TileSet<T> {
    /// Variants for [`TileClass::UpLeft`]
    pub up_left: Vec<T>,
    /// Variants for [`TileClass::UpMiddle`]
    pub up_middle: Vec<T>,
    /// Variants for [`TileClass::UpRight`]
    pub up_right: Vec<T>,
    /// Variants for [`TileClass::Center`]
    pub center: Vec<T>,
    /// Variants for [`TileClass::Down`]
    pub down: Vec<T>,
    /// Variants for [`TileClass::Alone`]
    pub alone: Vec<T>,
}

impl<T> Default for TileSet<T> {
    fn default() -> Self {
        Self {
            up_left: Vec::new(),
            up_middle: Vec::new(),
            up_right: Vec::new(),
            center: Vec::new(),
            down: Vec::new(),
            alone: Vec::new(),
        }
    }
}

impl<T> TileSet<T> {
    /// Build a tile set by asking `variants` for every placeable class
    pub fn from_fn(mut variants: impl FnMut(TileClass) -> Vec<T>) -> Self {
        Self {
            up_left: variants(TileClass::UpLeft),
            up_middle: variants(TileClass::UpMiddle),
            up_right: variants(TileClass::UpRight),
            center: variants(TileClass::Center),
            down: variants(TileClass::Down),
            alone: variants(TileClass::Alone),
        }
    }

    /// Variants registered for a class, empty for [`TileClass::Unclassified`]
    pub fn variants(&self, class: TileClass) -> &[T] {
        match class {
            TileClass::UpLeft => &self.up_left,
            TileClass::UpMiddle => &self.up_middle,
            TileClass::UpRight => &self.up_right,
            TileClass::Center => &self.center,
            TileClass::Down => &self.down,
            TileClass::Alone => &self.alone,
            TileClass::Unclassified => &[],
        }
    }
}

/// Tile the host should instantiate
#[derive(Debug, Clone, PartialEq)]
pub struct TilePlacement<T> {
    /// Element the tile replaces
    pub source: ElementId,
    /// Neighbours seen around the element
    pub mask: AdjacencyMask,
    /// Class derived from the mask
    pub class: TileClass,
    /// Snapped placement position
    pub position: Vector3,
    /// Index into the class's variant list
    pub variant: usize,
    /// Chosen variant
    pub tile: T,
    /// Display name for the generated tile
    pub name: String,
}

/// Seeded autotiler
#[derive(Debug, Clone)]
pub struct Tiler {
    /// Grid the tiles are snapped to
    pub config: GridConfig,
    /// Probe reach as a multiple of half a cell
    pub probe_ratio: f32,
    /// Seed for variant selection
    pub seed: u64,
}

impl Default for Tiler {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl Tiler {
    /// Create a tiler with the default probe ratio and seed
    pub const fn new(config: GridConfig) -> Self {
        Self {
            config,
            probe_ratio: TILER_PROBE_RATIO,
            seed: DEFAULT_SEED,
        }
    }

    /// Use a different seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Distance each side is probed at
    pub fn probe_distance(&self) -> f32 {
        self.config.extent() * self.probe_ratio
    }

    /// Compute a placement for every classifiable element
    ///
    /// Elements that come out [`TileClass::Unclassified`], or whose class has
    /// no variants, get no tile; their index is still consumed so names keep
    /// pointing at the source element's position in the slice.
    ///
    /// # Errors
    ///
    /// Propagates the first probe failure unchanged
    pub fn tile_all<T: Clone, P: Probe + ?Sized>(
        &self,
        elements: &[PositionedElement],
        tile_set: &TileSet<T>,
        probe: &P,
    ) -> Result<Vec<TilePlacement<T>>, P::Error> {
        if !self.config.is_valid() || elements.is_empty() {
            return Ok(Vec::new());
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let distance = self.probe_distance();
        let mut placements = Vec::with_capacity(elements.len());

        for (index, element) in elements.iter().enumerate() {
            let position = snap(element.position, self.config.cell_size);
            let probed = PositionedElement {
                position,
                ..*element
            };
            let mask = adjacency_mask(&probed, distance, probe)?;
            let class = classify_tile(mask);

            let variants = tile_set.variants(class);
            if variants.is_empty() {
                continue;
            }
            let variant = rng.random_range(0..variants.len());
            let Some(tile) = variants.get(variant) else {
                continue;
            };

            placements.push(TilePlacement {
                source: element.id,
                mask,
                class,
                position,
                variant,
                tile: tile.clone(),
                name: tile_name(index),
            });
        }

        debug!(
            "{} tiles placed for {} elements",
            placements.len(),
            elements.len()
        );
        Ok(placements)
    }
}
