//! Tests for elementwise arithmetic and its size checking

#[cfg(test)]
mod tests {
    use tilemaker::TileError;
    use tilemaker::raster::Image;
    use tilemaker::raster::ops::{add, div, mul};

    fn planar(height: usize, width: usize, depth: usize, values: &[f32]) -> Image {
        Image::from_planar(height, width, depth, values.to_vec()).expect("valid planar data")
    }

    // Tests in-place add, multiply, and divide
    // Verified by swapping operand order in the closures
    #[test]
    fn test_basic_arithmetic() {
        let operand = planar(1, 2, 2, &[2.0, 4.0, 0.5, -1.0]);

        let mut sum = planar(1, 2, 2, &[1.0, 1.0, 1.0, 1.0]);
        add(&mut sum, &operand).expect("equal sizes");
        assert_eq!(sum.to_planar_vec(), vec![3.0, 5.0, 1.5, 0.0]);

        let mut product = planar(1, 2, 2, &[3.0, 0.5, 4.0, 2.0]);
        mul(&mut product, &operand).expect("equal sizes");
        assert_eq!(product.to_planar_vec(), vec![6.0, 2.0, 2.0, -2.0]);

        let mut quotient = planar(1, 2, 2, &[8.0, 2.0, 1.0, 3.0]);
        div(&mut quotient, &operand).expect("equal sizes");
        assert_eq!(quotient.to_planar_vec(), vec![4.0, 0.5, 2.0, -3.0]);
    }

    // Tests only element counts must match, pairing happens in planar order
    // Verified by zipping by (plane, row, column) coordinates
    #[test]
    fn test_different_shapes_same_count() {
        let values: Vec<f32> = (0..12).map(|v| v as f32).collect();
        let mut target = planar(2, 3, 2, &[1.0; 12]);
        let operand = planar(3, 2, 2, &values);

        add(&mut target, &operand).expect("counts match");

        let expected: Vec<f32> = values.iter().map(|v| v + 1.0).collect();
        assert_eq!(target.to_planar_vec(), expected);
        assert_eq!(
            (target.height(), target.width(), target.depth()),
            (2, 3, 2)
        );
    }

    // Tests 12 vs 16 elements is a size mismatch that mutates nothing
    // Verified by checking the size after applying the operation
    #[test]
    fn test_size_mismatch_leaves_buffers_untouched() {
        let mut target = planar(2, 2, 3, &[0.5; 12]);
        let mut operand = planar(2, 2, 4, &[2.0; 16]);
        let (target_before, operand_before) = (target.clone(), operand.clone());

        for result in [
            add(&mut target, &operand),
            mul(&mut target, &operand),
            div(&mut target, &operand),
            add(&mut operand, &target),
        ] {
            match result {
                Err(TileError::SizeMismatch { left, right, .. }) => {
                    assert!(matches!((left, right), (12, 16) | (16, 12)));
                }
                other => unreachable!("expected SizeMismatch, got {other:?}"),
            }
        }

        assert_eq!(target, target_before);
        assert_eq!(operand, operand_before);
    }

    // Tests division by zero propagates IEEE results
    // Verified by clamping the divisor
    #[test]
    fn test_division_by_zero_propagates() {
        let mut target = planar(1, 3, 1, &[1.0, -1.0, 0.0]);
        let zeros = planar(1, 3, 1, &[0.0, 0.0, 0.0]);

        div(&mut target, &zeros).expect("equal sizes");
        let values = target.to_planar_vec();

        assert_eq!(values.first().copied(), Some(f32::INFINITY));
        assert_eq!(values.get(1).copied(), Some(f32::NEG_INFINITY));
        assert!(values.get(2).is_some_and(|v| v.is_nan()));
    }
}
