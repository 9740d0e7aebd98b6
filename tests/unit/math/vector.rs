//! Tests for vector arithmetic and direction helpers

#[cfg(test)]
mod tests {
    use ghostgrid::math::{Axis3, Direction, Direction3, Vector3};

    // Tests component-wise arithmetic
    #[test]
    fn test_vector_arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, -1.0, 2.0);

        assert_eq!(a + b, Vector3::new(1.5, 1.0, 5.0));
        assert_eq!(a - b, Vector3::new(0.5, 3.0, 1.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(Vector3::from([1.0, 2.0, 3.0]), a);
    }

    // Tests equality treats signed zeros as equal and NaN as unequal
    #[test]
    fn test_exact_equality_semantics() {
        assert_eq!(Vector3::new(-0.0, 0.0, 0.0), Vector3::ZERO);
        let nan = Vector3::new(f32::NAN, 0.0, 0.0);
        assert_ne!(nan, nan);
    }

    // Tests planar distance ignores depth
    #[test]
    fn test_planar_distance_ignores_z() {
        let a = Vector3::new(0.0, 0.0, 0.0);
        let b = Vector3::new(3.0, 4.0, 100.0);
        assert!((a.planar_distance_squared(b) - 25.0).abs() < f32::EPSILON);
    }

    // Tests planar direction units and steps agree
    // Verified by swapping Left and Right units
    #[test]
    fn test_direction_units_match_cell_steps() {
        for direction in Direction::ALL {
            let unit = direction.unit();
            let step = direction.cell_step();
            assert_eq!(unit.x, step[0] as f32);
            assert_eq!(unit.y, step[1] as f32);
            assert_eq!(unit.z, 0.0);
        }
    }

    // Tests signed axis directions and reversal
    #[test]
    fn test_direction3_unit_and_reverse() {
        let up_z = Direction3::new(Axis3::Z, true);
        assert_eq!(up_z.unit(), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(up_z.reversed().unit(), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(up_z.reversed().reversed(), up_z);

        let v = Vector3::new(1.0, 2.0, 3.0);
        let components: Vec<f32> = Axis3::ALL.iter().map(|&axis| v.get(axis)).collect();
        assert_eq!(components, vec![1.0, 2.0, 3.0]);
    }
}
