
#[cfg(test)]
mod tests {
    use tilemaker::math::wrap;

    // Tests in-range coordinates are unchanged
    // Verified by adding n unconditionally
    #[test]
    fn test_wrap_in_range() {
        for a in 0..5 {
            assert_eq!(wrap(a, 5), a as usize);
        }
    }

    // Tests negative coordinates wrap from the far edge
    // Verified by using the truncating % operator
    #[test]
    fn test_wrap_negative() {
        assert_eq!(wrap(-1, 5), 4);
        assert_eq!(wrap(-5, 5), 0);
        assert_eq!(wrap(-11, 5), 4);
    }

    // Tests coordinates past the edge wrap to the start
    // Verified by clamping instead of wrapping
    #[test]
    fn test_wrap_past_end() {
        assert_eq!(wrap(5, 5), 0);
        assert_eq!(wrap(7, 5), 2);
        assert_eq!(wrap(32, 1), 0);
    }
}
