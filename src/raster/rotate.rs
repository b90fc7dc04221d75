//! Rotation about the image centre
//!
//! Standalone primitive. The tiling engine draws a rotation per grid cell but
//! does not call this.

use crate::io::error::{Result, invalid_parameter};
use crate::raster::Image;
use ndarray::Zip;

/// Rotate `src` by `angle` radians about its centre, keeping its dimensions
///
/// Uses inverse mapping with nearest-neighbour sampling. With rows growing
/// downward, positive angles turn content clockwise on screen. Destination
/// pixels whose source falls outside the image are set to zero.
///
/// # Errors
///
/// Returns an error if `angle` is not finite or the output cannot be allocated
pub fn rotate(src: &Image, angle: f32) -> Result<Image> {
    if !angle.is_finite() {
        return Err(invalid_parameter(
            "angle",
            &angle,
            &"rotation angle must be finite",
        ));
    }

    let mut dst = Image::allocate(src.height(), src.width(), src.depth())?;
    let (height, width) = (src.height() as f64, src.width() as f64);
    let (cy, cx) = ((height - 1.0) / 2.0, (width - 1.0) / 2.0);
    let (sin, cos) = f64::from(angle).sin_cos();
    let source = src.view();

    Zip::indexed(dst.view_mut()).par_for_each(|(z, y, x), value| {
        let dx = x as f64 - cx;
        let dy = y as f64 - cy;
        let sx = cos.mul_add(dx, sin * dy) + cx;
        let sy = (-sin).mul_add(dx, cos * dy) + cy;
        let (sx, sy) = (sx.round(), sy.round());

        *value = if sx >= 0.0 && sy >= 0.0 && sx < width && sy < height {
            source
                .get((z, sy as usize, sx as usize))
                .copied()
                .unwrap_or(0.0)
        } else {
            0.0
        };
    });

    Ok(dst)
}
