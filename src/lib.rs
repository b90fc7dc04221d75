//! Seamless texture synthesis by Gaussian-windowed overlap-add on a toroidal canvas
//!
//! Many resized, jittered copies of a source image are composited over a
//! wrap-around canvas. Overlaps are blended with Gaussian windows and normalised
//! by the accumulated window weight, so the output tiles against itself without seams.

#![forbid(unsafe_code)]

/// Input/output operations, command-line surface, and error handling
pub mod io;
/// Coordinate wrapping and seeded randomness
pub mod math;
/// Planar image buffers and raster primitives
pub mod raster;
/// Tiling engine, parameters, and cell placement
pub mod synthesis;

pub use io::error::{Result, TileError};
pub use math::random::JitterSource;
pub use raster::Image;
pub use synthesis::{TileArgs, synthesize};
