//! Tests for the standalone rotation primitive

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};
    use tilemaker::raster::Image;
    use tilemaker::raster::rotate::rotate;

    fn marker(height: usize, width: usize, at: (usize, usize)) -> Image {
        Image::from_fn(height, width, 2, |_, y, x| {
            if (y, x) == at { 1.0 } else { 0.0 }
        })
        .expect("allocation should succeed")
    }

    // Tests zero angle is the identity
    // Verified by transposing in the inverse mapping
    #[test]
    fn test_zero_angle_identity() {
        let src = Image::from_fn(4, 5, 3, |z, y, x| (z * 20 + y * 5 + x) as f32)
            .expect("allocation should succeed");

        assert_eq!(rotate(&src, 0.0).expect("finite angle"), src);
    }

    // Tests a quarter turn moves right-middle to bottom-middle
    // Verified by negating the angle
    #[test]
    fn test_quarter_turn_clockwise_on_screen() {
        let rotated = rotate(&marker(3, 3, (1, 2)), FRAC_PI_2).expect("finite angle");

        for z in 0..2 {
            assert_eq!(rotated.get(z, 2, 1), Some(1.0));
            assert_eq!(rotated.get(z, 1, 2), Some(0.0));
        }
    }

    // Tests a half turn swaps opposite corners
    // Verified by rotating about the origin instead of the centre
    #[test]
    fn test_half_turn() {
        let rotated = rotate(&marker(3, 3, (0, 0)), PI).expect("finite angle");

        assert_eq!(rotated.get(0, 2, 2), Some(1.0));
        assert_eq!(rotated.get(0, 0, 0), Some(0.0));
    }

    // Tests pixels sourced from outside the image become zero
    // Verified by clamping source coordinates to the edge
    #[test]
    fn test_uncovered_pixels_are_zero() {
        let mut src = Image::allocate(2, 4, 1).expect("allocation should succeed");
        src.fill(1.0);

        let rotated = rotate(&src, FRAC_PI_2).expect("finite angle");

        assert_eq!((rotated.height(), rotated.width()), (2, 4));
        assert_eq!(rotated.get(0, 0, 0), Some(0.0));
        assert_eq!(rotated.get(0, 0, 1), Some(1.0));
    }

    // Tests non-finite angles are rejected
    // Verified by removing the finiteness check
    #[test]
    fn test_non_finite_angle() {
        let src = marker(2, 2, (0, 0));
        assert!(rotate(&src, f32::NAN).is_err());
        assert!(rotate(&src, f32::INFINITY).is_err());
    }
}
