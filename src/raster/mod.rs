//! Planar image buffers and the primitives that operate on them

/// Image buffer with allocation and fill operations
pub mod buffer;
/// Elementwise add, multiply, and divide
pub mod ops;
/// Nearest-neighbour resizing
pub mod resample;
/// Rotation primitive
pub mod rotate;
/// Gaussian window generation
pub mod window;

pub use buffer::Image;
