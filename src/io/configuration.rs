//! Geometry constants and runtime configuration defaults

// Probe reach as a multiple of half a cell
/// Border classification probe ratio
pub const BORDER_PROBE_RATIO: f32 = 1.1;
/// Autotiler probe ratio
pub const TILER_PROBE_RATIO: f32 = 1.2;

/// Connected selection reach as a multiple of the element size
pub const SELECTION_RADIUS_RATIO: f32 = 1.1;

/// Width tile names are right-aligned to
pub const TILE_NAME_WIDTH: usize = 4;

// Larger layouts switch to a sparse map to bound memory
/// Largest occupancy bounding box, in cells, stored as a dense array
pub const MAX_DENSE_CELLS: usize = 1 << 20;

// Default values for configurable parameters
/// Fixed seed for reproducible variant selection
pub const DEFAULT_SEED: u64 = 42;

/// Cell size of layouts read from images (one pixel per cell)
pub const LAYOUT_CELL_SIZE: f32 = 1.0;

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Suffix added to tile-class map filenames
pub const TILES_SUFFIX: &str = "_tiles";
/// Suffix added to border map filenames
pub const BORDERS_SUFFIX: &str = "_borders";

/// Shades per tile class, the tiler picks one at random
pub const TILE_PALETTE: [[[u8; 4]; 2]; 6] = [
    // up-left
    [[231, 76, 60, 255], [192, 57, 43, 255]],
    // up-middle
    [[241, 196, 15, 255], [243, 156, 18, 255]],
    // up-right
    [[46, 204, 113, 255], [39, 174, 96, 255]],
    // center
    [[52, 152, 219, 255], [41, 128, 185, 255]],
    // down
    [[155, 89, 182, 255], [142, 68, 173, 255]],
    // alone
    [[236, 240, 241, 255], [189, 195, 199, 255]],
];

/// Border pixel colour in border maps
pub const BORDER_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Interior pixel colour in border maps
pub const INTERIOR_COLOR: [u8; 4] = [64, 64, 64, 255];
