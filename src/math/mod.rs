//! Mathematical utilities for the synthesis loop

/// Seeded random source for per-cell jitter
pub mod random;

/// Map any integer coordinate into `[0, n)` with true modulo
///
/// Negative inputs wrap from the far edge (`wrap(-1, n) == n - 1`), which is what
/// makes the output canvas toroidal. `n` must be non-zero.
pub const fn wrap(coordinate: i64, n: usize) -> usize {
    coordinate.rem_euclid(n as i64) as usize
}
