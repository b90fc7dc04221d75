//! Gaussian falloff windows used to fade tiles toward their edges

use crate::io::error::{Result, invalid_parameter};
use crate::raster::Image;
use ndarray::{Array2, Zip};

/// Fill `img` with a 2D Gaussian centred on the image
///
/// Plane 0 holds `gain * exp(-(((x - xoff) / w)^2 + ((y - yoff) / h)^2) / (2 * sigma^2))`
/// with `xoff = (w - 1) / 2` and `yoff = (h - 1) / 2`. Distances are normalised by the
/// image size, so `sigma` is relative to the window extent. Every other plane is
/// an exact copy of plane 0.
///
/// # Errors
///
/// Returns an error if `sigma` is not a finite positive number or `gain` is not finite
pub fn gaussian_window(img: &mut Image, sigma: f32, gain: f32) -> Result<()> {
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(invalid_parameter(
            "sigma",
            &sigma,
            &"window sigma must be finite and positive",
        ));
    }
    if !gain.is_finite() {
        return Err(invalid_parameter("gain", &gain, &"window gain must be finite"));
    }

    let window = plane_window(img.height(), img.width(), sigma, gain);

    Zip::indexed(img.view_mut()).par_for_each(|(_, y, x), value| {
        if let Some(&weight) = window.get((y, x)) {
            *value = weight;
        }
    });

    Ok(())
}

fn plane_window(height: usize, width: usize, sigma: f32, gain: f32) -> Array2<f32> {
    let (h, w) = (height as f64, width as f64);
    let xoff = (w - 1.0) / 2.0;
    let yoff = (h - 1.0) / 2.0;
    let denominator = 2.0 * f64::from(sigma).powi(2);
    let gain = f64::from(gain);

    Array2::from_shape_fn((height, width), |(y, x)| {
        let dx = (x as f64 - xoff) / w;
        let dy = (y as f64 - yoff) / h;
        (gain * (-dx.mul_add(dx, dy * dy) / denominator).exp()) as f32
    })
}
