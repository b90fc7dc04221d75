//! PNG decoding into planar buffers and encoding back to 8-bit RGB or RGBA

use crate::io::error::{Result, TileError, unsupported_image};
use crate::raster::Image;
use image::{DynamicImage, ImageBuffer, ImageFormat, Pixel, Rgb, Rgba};
use std::path::Path;

/// Load a PNG as a planar image normalised to `[0, 1]`
///
/// Files with an alpha channel produce depth 4, everything else depth 3.
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or decoded
/// - The buffer for the decoded image cannot be allocated
pub fn load_png<P: AsRef<Path>>(path: P) -> Result<Image> {
    let path_buf = path.as_ref().to_path_buf();
    let decoded = image::open(&path_buf).map_err(|e| TileError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    from_dynamic(&decoded)
}

/// Convert a decoded image into planar form
///
/// # Errors
///
/// Returns an error if the image is empty or cannot be allocated
pub fn from_dynamic(decoded: &DynamicImage) -> Result<Image> {
    if decoded.color().has_alpha() {
        planar_from_pixels(&decoded.to_rgba8())
    } else {
        planar_from_pixels(&decoded.to_rgb8())
    }
}

fn planar_from_pixels<P>(pixels: &ImageBuffer<P, Vec<u8>>) -> Result<Image>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = pixels.dimensions();
    let depth = usize::from(P::CHANNEL_COUNT);

    Image::from_fn(height as usize, width as usize, depth, |z, y, x| {
        pixels
            .get_pixel_checked(x as u32, y as u32)
            .and_then(|pixel| pixel.channels().get(z).copied())
            .map_or(0.0, |value| f32::from(value) / 255.0)
    })
}

/// Convert a planar image into an 8-bit image
///
/// Depth 3 becomes RGB; depth 4 or more becomes RGBA from the first four planes.
/// Values are scaled by 255 and truncated, saturating outside `[0, 255]`.
///
/// # Errors
///
/// Returns an error if the image has fewer than three planes or its dimensions
/// exceed the codec's limits
pub fn to_dynamic(img: &Image) -> Result<DynamicImage> {
    let width = u32::try_from(img.width()).map_err(|e| unsupported_image(&e))?;
    let height = u32::try_from(img.height()).map_err(|e| unsupported_image(&e))?;

    let quantize = |z: usize, x: u32, y: u32| -> u8 {
        let value = img.get(z, y as usize, x as usize).unwrap_or(0.0);
        (255.0 * value) as u8
    };

    match img.depth() {
        0..=2 => Err(unsupported_image(&format!(
            "{} channels, expected RGB or RGBA",
            img.depth()
        ))),
        3 => Ok(DynamicImage::ImageRgb8(ImageBuffer::from_fn(
            width,
            height,
            |x, y| Rgb([quantize(0, x, y), quantize(1, x, y), quantize(2, x, y)]),
        ))),
        _ => Ok(DynamicImage::ImageRgba8(ImageBuffer::from_fn(
            width,
            height,
            |x, y| {
                Rgba([
                    quantize(0, x, y),
                    quantize(1, x, y),
                    quantize(2, x, y),
                    quantize(3, x, y),
                ])
            },
        ))),
    }
}

/// Save a planar image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The image cannot be represented as RGB or RGBA
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_png<P: AsRef<Path>>(img: &Image, path: P) -> Result<()> {
    let path = path.as_ref();
    let encoded = to_dynamic(img)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TileError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    encoded
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| TileError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
