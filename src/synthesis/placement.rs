//! Per-cell jitter draws and tile placement

use crate::io::error::{Result, invalid_parameter};
use crate::math::random::JitterSource;
use crate::synthesis::args::{Geometry, TileArgs};

/// Placement of one grid cell's tile on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlan {
    /// Traversal index `o`, with `cell_x = o % side` and `cell_y = o / side`
    pub index: usize,
    /// Grid column
    pub cell_x: usize,
    /// Grid row
    pub cell_y: usize,
    /// Drawn scale multiplier
    pub scale: f32,
    /// Drawn rotation in radians
    ///
    /// Kept for inspection only: compositing never rotates the tile or its mask.
    pub rotation: f32,
    /// Tile height after scaling
    pub tile_height: usize,
    /// Tile width after scaling
    pub tile_width: usize,
    /// Canvas column of the tile's first column, before wrapping
    pub x_offset: i64,
    /// Canvas row of the tile's first row, before wrapping
    pub y_offset: i64,
}

/// Draw the plan for every grid cell in traversal order `0..side^2`
///
/// Each cell consumes exactly two draws, scale then rotation, so a given seed
/// always yields the same plans regardless of how the image work is scheduled.
///
/// # Errors
///
/// Returns an error if jitter shrinks any tile to zero rows or columns
pub fn plan_cells(
    geometry: &Geometry,
    args: &TileArgs,
    rng: &mut JitterSource,
) -> Result<Vec<CellPlan>> {
    (0..geometry.cell_count())
        .map(|index| {
            let scale = rng.uniform_jitter(args.scale_base, args.scale_var);
            let rotation = rng.uniform_jitter(args.rotation_base, args.rotation_var);
            plan_cell(geometry, index, scale, rotation)
        })
        .collect()
}

/// Build the plan for cell `index` from already-drawn jitter values
///
/// Tiles are centred on their cell and may spill into neighbouring cells. For a
/// cell spanning `len` pixels from `start`, the tile's first pixel is
/// `start + len / 2 - tile / 2`, with every division truncating. When the canvas
/// is a multiple of the grid side this equals
/// `(width / side) * cell_x - tile_width / 2 + width / (2 * side)`.
///
/// # Errors
///
/// Returns an error if the scaled tile has no rows or columns
pub fn plan_cell(geometry: &Geometry, index: usize, scale: f32, rotation: f32) -> Result<CellPlan> {
    let side = geometry.grid_side;
    let (cell_x, cell_y) = (index % side, index / side);
    let (patch_height, patch_width) = geometry.patch_for(cell_x, cell_y);

    let tile_height = scaled_extent(patch_height, scale, index)?;
    let tile_width = scaled_extent(patch_width, scale, index)?;

    let x_offset = centred_offset(geometry.column_span(cell_x), tile_width);
    let y_offset = centred_offset(geometry.row_span(cell_y), tile_height);

    Ok(CellPlan {
        index,
        cell_x,
        cell_y,
        scale,
        rotation,
        tile_height,
        tile_width,
        x_offset,
        y_offset,
    })
}

fn scaled_extent(patch: usize, scale: f32, index: usize) -> Result<usize> {
    let extent = (patch as f32 * scale).round();
    if !(extent.is_finite() && extent >= 1.0) {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("cell {index}: patch of {patch} scales to an empty tile"),
        ));
    }
    Ok(extent as usize)
}

const fn centred_offset((start, len): (usize, usize), tile: usize) -> i64 {
    (start + len / 2) as i64 - (tile / 2) as i64
}
