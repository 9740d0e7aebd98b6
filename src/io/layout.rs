//! PNG layouts in, tile-class and border maps out
//!
//! Every pixel with non-zero alpha is one element on a unit grid. Image
//! rows grow downward while grid y grows upward, so the pixel at
//! `(col, row)` sits at `(col, height - 1 - row, 0)`.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::algorithm::border::BorderClass;
use crate::algorithm::tiler::{TilePlacement, TileSet};
use crate::io::configuration::{BORDER_COLOR, INTERIOR_COLOR, TILE_PALETTE};
use crate::io::error::{GridError, Result, file_system};
use crate::math::Vector3;
use crate::spatial::element::{ElementId, PositionedElement};
use crate::spatial::tiles::TileClass;

/// Occupied pixels of a layout image
#[derive(Debug, Clone)]
pub struct Layout {
    width: u32,
    height: u32,
    elements: Vec<PositionedElement>,
}

impl Layout {
    /// Read a layout from a PNG file
    ///
    /// # Errors
    ///
    /// Returns `ImageLoad` if the file cannot be decoded and `EmptyLayout`
    /// if no pixel is occupied
    pub fn from_png(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .map_err(|source| GridError::ImageLoad {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        let layout = Self::from_rgba(&image);
        if layout.elements.is_empty() {
            return Err(GridError::EmptyLayout {
                path: path.to_path_buf(),
            });
        }
        Ok(layout)
    }

    /// Build a layout from decoded pixels
    pub fn from_rgba(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let elements = image
            .enumerate_pixels()
            .filter(|(_, _, pixel)| pixel.0[3] > 0)
            .map(|(col, row, _)| {
                let id = u64::from(row) * u64::from(width) + u64::from(col);
                let position = Vector3::new(col as f32, (height - 1 - row) as f32, 0.0);
                PositionedElement::new(id, position)
            })
            .collect();

        Self {
            width,
            height,
            elements,
        }
    }

    /// Image width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// One element per occupied pixel, in row-major order
    pub fn elements(&self) -> &[PositionedElement] {
        &self.elements
    }

    /// Pixel coordinates of an element, `None` for ids outside the image
    pub fn pixel_of(&self, id: ElementId) -> Option<(u32, u32)> {
        let width = u64::from(self.width);
        if width == 0 {
            return None;
        }
        let col = u32::try_from(id.0 % width).ok()?;
        let row = u32::try_from(id.0 / width).ok()?;
        (row < self.height).then_some((col, row))
    }

    fn blank(&self) -> RgbaImage {
        ImageBuffer::from_pixel(self.width, self.height, Rgba([0, 0, 0, 0]))
    }
}

/// Tile set whose variants are the palette shades for each class
pub fn palette_tile_set() -> TileSet<[u8; 4]> {
    TileSet::from_fn(|class| {
        TileClass::PLACEABLE
            .iter()
            .position(|&placeable| placeable == class)
            .and_then(|index| TILE_PALETTE.get(index))
            .map(|shades| shades.to_vec())
            .unwrap_or_default()
    })
}

/// Paint each placement with its chosen colour
pub fn render_tile_map(layout: &Layout, placements: &[TilePlacement<[u8; 4]>]) -> RgbaImage {
    let mut image = layout.blank();
    for placement in placements {
        if let Some((col, row)) = layout.pixel_of(placement.source) {
            image.put_pixel(col, row, Rgba(placement.tile));
        }
    }
    image
}

/// Paint border elements bright and interior elements dim
pub fn render_border_map(layout: &Layout, classes: &[BorderClass]) -> RgbaImage {
    let mut image = layout.blank();
    for (element, class) in layout.elements().iter().zip(classes) {
        if let Some((col, row)) = layout.pixel_of(element.id) {
            let color = if class.is_border() {
                BORDER_COLOR
            } else {
                INTERIOR_COLOR
            };
            image.put_pixel(col, row, Rgba(color));
        }
    }
    image
}

/// Save a rendered map, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_map(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| file_system(parent, "create directory", e))?;
    }

    image.save(output_path).map_err(|e| GridError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}
