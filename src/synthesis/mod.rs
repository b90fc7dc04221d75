//! Seamless texture synthesis from a single source image

/// Tiling parameters and geometry resolution
pub mod args;
/// Overlap-add compositing loop
pub mod engine;
/// Per-cell jitter and placement
pub mod placement;

pub use args::{BackgroundColor, Geometry, TileArgs};
pub use engine::{synthesize, synthesize_with_progress};
