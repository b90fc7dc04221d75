//! Image resizing
//!
//! Only nearest-neighbour sampling exists. The source coordinate for destination
//! `(y, x)` is `floor(y * src_height / dst_height)`, computed in exact integer
//! arithmetic. This is not centred resampling: content shifts slightly toward
//! the origin for small sizes, and existing outputs depend on that.

use crate::io::error::{Result, TileError};
use crate::raster::Image;
use ndarray::Zip;

/// Sampling method used when resizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Nearest-neighbour sampling
    #[default]
    Nearest,
    /// Bilinear sampling (not implemented)
    Bilinear,
    /// Bicubic sampling (not implemented)
    Bicubic,
}

/// Resize `src` to `height x width` with the requested sampling method
///
/// # Errors
///
/// Returns an error if:
/// - `method` is bilinear or bicubic
/// - The destination dimensions are zero or cannot be allocated
pub fn resample(src: &Image, height: usize, width: usize, method: Interpolation) -> Result<Image> {
    match method {
        Interpolation::Nearest => resize(src, height, width),
        Interpolation::Bilinear => Err(TileError::NotImplemented {
            feature: "bilinear interpolation",
        }),
        Interpolation::Bicubic => Err(TileError::NotImplemented {
            feature: "bicubic interpolation",
        }),
    }
}

/// Nearest-neighbour resize producing a new `height x width` image of the same depth
///
/// # Errors
///
/// Returns an error if the destination dimensions are zero or cannot be allocated
pub fn resize(src: &Image, height: usize, width: usize) -> Result<Image> {
    let mut dst = Image::allocate(height, width, src.depth())?;
    let (src_height, src_width) = (src.height(), src.width());
    let source = src.view();

    Zip::indexed(dst.view_mut()).par_for_each(|(z, y, x), value| {
        let sy = y * src_height / height;
        let sx = x * src_width / width;
        if let Some(&sample) = source.get((z, sy, sx)) {
            *value = sample;
        }
    });

    Ok(dst)
}
