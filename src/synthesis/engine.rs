//! Windowed overlap-add reconstruction on a toroidal canvas
//!
//! Every grid cell contributes a resized, Gaussian-windowed copy of the source.
//! Contributions and their window weights are accumulated with wrap-around
//! addressing, so content leaving one edge re-enters at the opposite edge and
//! the result tiles against copies of itself. Dividing by the accumulated
//! weight turns the weighted sum back into intensities.
//!
//! Tiles for a batch of cells are prepared in parallel, then accumulated strictly
//! in traversal order: distinct cells can write the same canvas pixel, and a fixed
//! summation order keeps results bit-identical for a given seed.

use crate::io::error::{Result, TileError};
use crate::math::random::JitterSource;
use crate::math::wrap;
use crate::raster::Image;
use crate::raster::ops::{div, mul};
use crate::raster::resample::resize;
use crate::raster::window::gaussian_window;
use crate::synthesis::args::TileArgs;
use crate::synthesis::placement::{CellPlan, plan_cells};
use ndarray::Zip;
use rayon::prelude::*;

/// Synthesize a seamlessly tileable image with the shape of `src`
///
/// # Errors
///
/// Returns an error if:
/// - `args` fail validation or the canvas is smaller than the grid
/// - Scale jitter collapses a tile to zero size
/// - Some pixel receives no usable window weight, because tiles shrunk below
///   their cells leave gaps or `blur` is so small the window underflows
/// - A buffer cannot be allocated
pub fn synthesize(src: &Image, args: &TileArgs, rng: &mut JitterSource) -> Result<Image> {
    synthesize_with_progress(src, args, rng, |_, _| {})
}

/// Synthesize while reporting `(cells_done, cells_total)` after each grid cell
///
/// All parameters and per-cell plans are checked before the canvas is written,
/// and coverage is checked before normalising, so an error never leaves a
/// partially composited or NaN-filled result behind.
///
/// # Errors
///
/// Returns an error under the same conditions as [`synthesize`]
pub fn synthesize_with_progress<F>(
    src: &Image,
    args: &TileArgs,
    rng: &mut JitterSource,
    mut on_cell: F,
) -> Result<Image>
where
    F: FnMut(usize, usize),
{
    args.validate()?;
    let geometry = args.resolve_geometry(src.height(), src.width())?;
    let plans = plan_cells(&geometry, args, rng)?;

    let (height, width, depth) = (src.height(), src.width(), src.depth());

    // Alpha and any extra planes start at zero; channels 0..3 take the background
    let mut destination = Image::allocate(height, width, depth)?;
    destination.fill(0.0);
    for (channel, value) in args.bg_color.channels().into_iter().enumerate().take(depth) {
        destination.fill_channel(value, channel)?;
    }

    let mut accumulator = Image::allocate(height, width, depth)?;
    accumulator.fill(0.0);

    let total = plans.len();
    let mut done = 0;
    // Bounds how many prepared tiles are alive at once
    let batch = rayon::current_num_threads().max(1);
    for chunk in plans.chunks(batch) {
        let tiles = chunk
            .par_iter()
            .map(|plan| weighted_tile(src, plan, args.blur))
            .collect::<Result<Vec<_>>>()?;

        for (plan, (tile, mask)) in chunk.iter().zip(&tiles) {
            accumulate(plan, tile, mask, &mut destination, &mut accumulator);
            done += 1;
            on_cell(done, total);
        }
    }

    check_coverage(&accumulator)?;
    div(&mut destination, &accumulator)?;

    Ok(destination)
}

// Weights are identical across planes, so plane 0 stands for all of them.
// Zero and subnormal totals come from gaps between shrunken tiles or from
// window falloff underflowing at small blur.
fn check_coverage(accumulator: &Image) -> Result<()> {
    let uncovered = accumulator.plane(0).map_or(0, |weights| {
        weights
            .iter()
            .filter(|&&weight| weight.is_nan() || weight < f32::MIN_POSITIVE)
            .count()
    });

    if uncovered > 0 {
        return Err(TileError::IncompleteCoverage {
            uncovered,
            total: accumulator.height() * accumulator.width(),
        });
    }
    Ok(())
}

// Resized source premultiplied by its window, plus the window itself
fn weighted_tile(src: &Image, plan: &CellPlan, blur: f32) -> Result<(Image, Image)> {
    let mut tile = resize(src, plan.tile_height, plan.tile_width)?;
    let mut mask = Image::allocate(plan.tile_height, plan.tile_width, src.depth())?;
    gaussian_window(&mut mask, blur, 1.0)?;
    mul(&mut tile, &mask)?;

    // plan.rotation is drawn but never applied to tile or mask
    Ok((tile, mask))
}

fn accumulate(
    plan: &CellPlan,
    tile: &Image,
    mask: &Image,
    destination: &mut Image,
    accumulator: &mut Image,
) {
    let (height, width) = (destination.height(), destination.width());
    let mut canvas = destination.view_mut();
    let mut weights = accumulator.view_mut();

    Zip::indexed(tile.view())
        .and(mask.view())
        .for_each(|(z, y, x), &sample, &weight| {
            let dest_y = wrap(y as i64 + plan.y_offset, height);
            let dest_x = wrap(x as i64 + plan.x_offset, width);
            if let Some(value) = canvas.get_mut((z, dest_y, dest_x)) {
                *value += sample;
            }
            if let Some(total) = weights.get_mut((z, dest_y, dest_x)) {
                *total += weight;
            }
        });
}
