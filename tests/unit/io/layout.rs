//! Tests for layout images and rendered maps

#[cfg(test)]
mod tests {
    use ghostgrid::algorithm::border::{BorderClass, classify_borders};
    use ghostgrid::algorithm::tiler::Tiler;
    use ghostgrid::io::configuration::{BORDER_COLOR, INTERIOR_COLOR, TILE_PALETTE};
    use ghostgrid::io::layout::{
        Layout, palette_tile_set, render_border_map, render_tile_map, save_map,
    };
    use ghostgrid::spatial::element::ElementId;
    use ghostgrid::spatial::grid::GridConfig;
    use ghostgrid::spatial::occupancy::OccupancyGrid;
    use ghostgrid::spatial::tiles::TileClass;
    use ghostgrid::{GridError, Vector3};
    use image::{Rgba, RgbaImage};

    fn diagonal() -> RgbaImage {
        let mut image = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        image.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        image.put_pixel(1, 1, Rgba([10, 20, 30, 1]));
        image
    }

    fn plus() -> RgbaImage {
        let mut image = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 0]));
        for (x, y) in [(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)] {
            image.put_pixel(x, y, Rgba([0, 0, 0, 255]));
        }
        image
    }

    // Tests pixel rows map to grid y growing upward
    #[test]
    fn test_from_rgba_positions() {
        let layout = Layout::from_rgba(&diagonal());
        assert_eq!((layout.width(), layout.height()), (2, 2));

        let placed: Vec<(ElementId, Vector3)> = layout
            .elements()
            .iter()
            .map(|element| (element.id, element.position))
            .collect();
        assert_eq!(
            placed,
            vec![
                (ElementId(0), Vector3::new(0.0, 1.0, 0.0)),
                (ElementId(3), Vector3::new(1.0, 0.0, 0.0)),
            ]
        );
    }

    // Tests ids map back to their pixels
    #[test]
    fn test_pixel_of() {
        let layout = Layout::from_rgba(&diagonal());
        assert_eq!(layout.pixel_of(ElementId(0)), Some((0, 0)));
        assert_eq!(layout.pixel_of(ElementId(3)), Some((1, 1)));
        assert_eq!(layout.pixel_of(ElementId(4)), None);

        let empty = Layout::from_rgba(&RgbaImage::new(0, 0));
        assert_eq!(empty.pixel_of(ElementId(0)), None);
    }

    // Tests each placeable class gets its palette shades
    #[test]
    fn test_palette_tile_set() {
        let tiles = palette_tile_set();
        for (class, shades) in TileClass::PLACEABLE.iter().zip(TILE_PALETTE.iter()) {
            assert_eq!(tiles.variants(*class), shades.as_slice());
        }
        assert!(tiles.variants(TileClass::Unclassified).is_empty());
    }

    // Tests the tile map colours every occupied pixel from its class palette
    #[test]
    fn test_render_tile_map() {
        let layout = Layout::from_rgba(&plus());
        let config = GridConfig::default();
        let occupancy = OccupancyGrid::from_elements(layout.elements(), config.cell_size);
        let Ok(placements) =
            Tiler::new(config).tile_all(layout.elements(), &palette_tile_set(), &occupancy);
        assert_eq!(placements.len(), 5);

        let image = render_tile_map(&layout, &placements);
        let centre = image.get_pixel(1, 1).0;
        assert!(
            TILE_PALETTE.get(3).is_some_and(|shades| shades.contains(&centre)),
            "plus centre is a center tile"
        );
        assert_eq!(image.get_pixel(0, 0).0[3], 0);
    }

    // Tests border maps dim only surrounded elements
    #[test]
    fn test_render_border_map() {
        let layout = Layout::from_rgba(&plus());
        let config = GridConfig::default();
        let occupancy = OccupancyGrid::from_elements(layout.elements(), config.cell_size);
        let Ok(classes) = classify_borders(layout.elements(), &config, &occupancy);
        assert_eq!(
            classes.iter().filter(|c| **c == BorderClass::Interior).count(),
            1
        );

        let image = render_border_map(&layout, &classes);
        assert_eq!(image.get_pixel(1, 1).0, INTERIOR_COLOR);
        assert_eq!(image.get_pixel(1, 0).0, BORDER_COLOR);
        assert_eq!(image.get_pixel(2, 2).0[3], 0);
    }

    // Tests saving creates missing directories and reloads identically
    #[test]
    fn test_save_and_reload() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("plus.png");
        save_map(&plus(), &path)?;

        let layout = Layout::from_png(&path)?;
        assert_eq!(layout.elements().len(), 5);
        Ok(())
    }

    // Tests unreadable and empty images are rejected with distinct errors
    #[test]
    fn test_from_png_errors() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;

        let missing = dir.path().join("missing.png");
        assert!(matches!(
            Layout::from_png(&missing),
            Err(GridError::ImageLoad { .. })
        ));

        let blank = dir.path().join("blank.png");
        RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 0])).save(&blank)?;
        assert!(matches!(
            Layout::from_png(&blank),
            Err(GridError::EmptyLayout { .. })
        ));
        Ok(())
    }
}
