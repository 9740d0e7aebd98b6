//! Tests for four-neighbour border classification

#[cfg(test)]
mod tests {
    use ghostgrid::algorithm::border::{
        BorderClass, adjacency_mask, border_probe_distance, classify_borders,
        classify_borders_with_distance,
    };
    use ghostgrid::math::Direction;
    use ghostgrid::spatial::grid::GridConfig;
    use ghostgrid::spatial::occupancy::OccupancyGrid;
    use ghostgrid::spatial::tiles::AdjacencyMask;
    use ghostgrid::{PositionedElement, Vector3};
    use std::cell::Cell;
    use std::convert::Infallible;

    fn single() -> Vec<PositionedElement> {
        vec![PositionedElement::new(1, Vector3::ZERO)]
    }

    fn square(size: i32) -> Vec<PositionedElement> {
        let mut elements = Vec::new();
        for y in 0..size {
            for x in 0..size {
                let id = (y * size + x) as u64;
                elements.push(PositionedElement::new(
                    id,
                    Vector3::new(x as f32, y as f32, 0.0),
                ));
            }
        }
        elements
    }

    // Tests all four sides present yields interior
    #[test]
    fn test_surrounded_is_interior() {
        let probe = |_: &PositionedElement, _: Direction, _: f32| Ok::<bool, Infallible>(true);
        let Ok(classes) = classify_borders(&single(), &GridConfig::default(), &probe);
        assert_eq!(classes, vec![BorderClass::Interior]);
    }

    // Tests any single missing side yields border
    // Verified by requiring two missing sides for a border
    #[test]
    fn test_any_missing_side_is_border() {
        for missing in Direction::ALL {
            let probe = move |_: &PositionedElement, direction: Direction, _: f32| {
                Ok::<bool, Infallible>(direction != missing)
            };
            let Ok(classes) = classify_borders(&single(), &GridConfig::default(), &probe);
            assert_eq!(classes, vec![BorderClass::Border], "missing {missing:?}");
        }
    }

    // Tests the probe distance is half a cell stretched by 1.1
    #[test]
    fn test_probe_distance() {
        let config = GridConfig::new(2.0);
        assert!((border_probe_distance(&config) - 1.1).abs() < 1e-6);

        let probe = |_: &PositionedElement, _: Direction, distance: f32| {
            Ok::<bool, Infallible>((distance - 1.1).abs() < 1e-6)
        };
        let Ok(classes) = classify_borders(&single(), &config, &probe);
        assert_eq!(classes, vec![BorderClass::Interior]);
    }

    // Tests probe failures propagate unchanged
    #[test]
    fn test_probe_errors_propagate() {
        let probe = |_: &PositionedElement, direction: Direction, _: f32| {
            if direction == Direction::Down {
                Err("backend offline")
            } else {
                Ok(true)
            }
        };
        let result = classify_borders(&single(), &GridConfig::default(), &probe);
        assert_eq!(result, Err("backend offline"));
    }

    // Tests probing stops at the first empty side
    #[test]
    fn test_stops_at_first_empty_side() {
        let calls = Cell::new(0);
        let probe = |_: &PositionedElement, _: Direction, _: f32| {
            calls.set(calls.get() + 1);
            Ok::<bool, Infallible>(false)
        };
        let Ok(_) = classify_borders(&single(), &GridConfig::default(), &probe);
        assert_eq!(calls.get(), 1);
    }

    // Tests invalid grids and empty inputs return no classes
    #[test]
    fn test_degenerate_inputs() {
        let probe = |_: &PositionedElement, _: Direction, _: f32| Ok::<bool, Infallible>(true);
        let Ok(invalid) = classify_borders(&single(), &GridConfig::new(0.0), &probe);
        let Ok(empty) = classify_borders(&[], &GridConfig::default(), &probe);
        assert!(invalid.is_empty());
        assert!(empty.is_empty());
    }

    // Tests a 3x3 block keeps only its centre interior with the occupancy probe
    #[test]
    fn test_block_with_occupancy_probe() {
        let elements = square(3);
        let config = GridConfig::default();
        let grid = OccupancyGrid::from_elements(&elements, config.cell_size);

        let Ok(classes) = classify_borders(&elements, &config, &grid);
        let interior: Vec<usize> = classes
            .iter()
            .enumerate()
            .filter(|(_, class)| !class.is_border())
            .map(|(index, _)| index)
            .collect();
        assert_eq!(interior, vec![4]);
    }

    // Tests too short a probe distance sees no neighbours at all
    #[test]
    fn test_explicit_distance() {
        let elements = square(3);
        let grid = OccupancyGrid::from_elements(&elements, 1.0);

        let Ok(classes) = classify_borders_with_distance(&elements, 0.1, &grid);
        assert!(classes.iter().all(|class| class.is_border()));
    }

    // Tests the full mask of a cell missing its top neighbour
    #[test]
    fn test_adjacency_mask() {
        let elements = square(3);
        let grid = OccupancyGrid::from_elements(&elements, 1.0);
        let Some(top_middle) = elements.get(7) else {
            unreachable!("square has nine cells");
        };

        let Ok(mask) = adjacency_mask(top_middle, 0.55, &grid);
        assert_eq!(mask, AdjacencyMask::new(false, true, true, true));
    }
}
