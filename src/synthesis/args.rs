//! Tiling parameters, validation, and grid geometry resolution

use crate::io::configuration::{
    AUTO_PATCH, DEFAULT_BLUR, DEFAULT_OCTAVE, DEFAULT_SCALE, DEFAULT_SEED, MAX_OCTAVE,
};
use crate::io::error::{Result, TileError, invalid_parameter};
use std::str::FromStr;

/// Canvas background for channels 0 to 2
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BackgroundColor {
    /// Channel 0
    pub r: f32,
    /// Channel 1
    pub g: f32,
    /// Channel 2
    pub b: f32,
}

impl BackgroundColor {
    /// Components in channel order
    pub const fn channels(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for BackgroundColor {
    type Err = TileError;

    /// Parse `R,G,B` with each component a float intensity
    fn from_str(s: &str) -> Result<Self> {
        let components = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f32>()
                    .map_err(|e| invalid_parameter("color", &s, &e))
            })
            .collect::<Result<Vec<f32>>>()?;

        match components.as_slice() {
            &[r, g, b] => Ok(Self { r, g, b }),
            _ => Err(invalid_parameter(
                "color",
                &s,
                &"expected three comma-separated components",
            )),
        }
    }
}

/// Parameters controlling tile placement, jitter, and blending
#[derive(Debug, Clone, PartialEq)]
pub struct TileArgs {
    /// Background written to channels 0 to 2 before compositing
    pub bg_color: BackgroundColor,
    /// Grid exponent, the grid has `2^octave x 2^octave` cells
    pub octave: u32,
    /// Tile patch height, `<= 0` derives `source height / 2^octave`
    pub patch_height: i32,
    /// Tile patch width, `<= 0` derives `source width / 2^octave`
    pub patch_width: i32,
    /// Gaussian window sigma, relative to the tile extent
    pub blur: f32,
    /// Base rotation in radians (drawn per cell, never applied)
    pub rotation_base: f32,
    /// Half-range of the uniform rotation jitter
    pub rotation_var: f32,
    /// Base scale multiplier for tile size
    pub scale_base: f32,
    /// Half-range of the uniform scale jitter
    pub scale_var: f32,
    /// Random seed, zero means time-based
    pub seed: u64,
}

impl Default for TileArgs {
    fn default() -> Self {
        Self {
            bg_color: BackgroundColor::default(),
            octave: DEFAULT_OCTAVE,
            patch_height: AUTO_PATCH,
            patch_width: AUTO_PATCH,
            blur: DEFAULT_BLUR,
            rotation_base: 0.0,
            rotation_var: 0.0,
            scale_base: DEFAULT_SCALE,
            scale_var: 0.0,
            seed: DEFAULT_SEED,
        }
    }
}

/// Grid layout resolved against a concrete canvas
///
/// The canvas is split into `grid_side` cells per axis with boundaries at
/// `cell * extent / grid_side`, so cells differ by at most one pixel and cover
/// the canvas exactly even when the extent is not a multiple of the grid side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Cells per grid side, `2^octave`
    pub grid_side: usize,
    /// Resolved patch height, always positive
    pub patch_height: usize,
    /// Resolved patch width, always positive
    pub patch_width: usize,
    /// Patch height was derived, so each row of cells uses its own height
    pub auto_height: bool,
    /// Patch width was derived, so each column of cells uses its own width
    pub auto_width: bool,
    /// Canvas height
    pub canvas_height: usize,
    /// Canvas width
    pub canvas_width: usize,
}

impl Geometry {
    /// Total number of grid cells
    pub const fn cell_count(&self) -> usize {
        self.grid_side * self.grid_side
    }

    /// First row and row count of grid row `cell_y`
    pub const fn row_span(&self, cell_y: usize) -> (usize, usize) {
        span(self.canvas_height, self.grid_side, cell_y)
    }

    /// First column and column count of grid column `cell_x`
    pub const fn column_span(&self, cell_x: usize) -> (usize, usize) {
        span(self.canvas_width, self.grid_side, cell_x)
    }

    /// Untiled patch size for a cell, before scale jitter
    pub const fn patch_for(&self, cell_x: usize, cell_y: usize) -> (usize, usize) {
        let height = if self.auto_height {
            self.row_span(cell_y).1
        } else {
            self.patch_height
        };
        let width = if self.auto_width {
            self.column_span(cell_x).1
        } else {
            self.patch_width
        };
        (height, width)
    }
}

const fn span(extent: usize, side: usize, cell: usize) -> (usize, usize) {
    let start = cell * extent / side;
    let end = (cell + 1) * extent / side;
    (start, end - start)
}

impl TileArgs {
    /// Check that every parameter is in range
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `octave` exceeds the supported maximum
    /// - `blur` is not a finite positive number
    /// - Any scale, rotation, or colour value is not finite
    /// - A jitter half-range is negative
    pub fn validate(&self) -> Result<()> {
        if self.octave > MAX_OCTAVE {
            return Err(invalid_parameter(
                "octave",
                &self.octave,
                &format!("must be at most {MAX_OCTAVE}"),
            ));
        }
        if !(self.blur.is_finite() && self.blur > 0.0) {
            return Err(invalid_parameter(
                "blur",
                &self.blur,
                &"must be finite and positive",
            ));
        }

        let finite = [
            ("rotation_base", self.rotation_base),
            ("rotation_var", self.rotation_var),
            ("scale_base", self.scale_base),
            ("scale_var", self.scale_var),
            ("bg_color.r", self.bg_color.r),
            ("bg_color.g", self.bg_color.g),
            ("bg_color.b", self.bg_color.b),
        ];
        for (parameter, value) in finite {
            if !value.is_finite() {
                return Err(invalid_parameter(parameter, &value, &"must be finite"));
            }
        }

        for (parameter, value) in [
            ("rotation_var", self.rotation_var),
            ("scale_var", self.scale_var),
        ] {
            if value < 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"jitter half-range must not be negative",
                ));
            }
        }

        Ok(())
    }

    /// Resolve the grid side and automatic patch sizes for a `height x width` canvas
    ///
    /// Resolution happens once per run; the caller's arguments are not modified.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `octave` exceeds the supported maximum
    /// - An automatic patch dimension would be zero, which happens when the
    ///   canvas is smaller than the grid side
    pub fn resolve_geometry(&self, height: usize, width: usize) -> Result<Geometry> {
        let grid_side = 1usize
            .checked_shl(self.octave)
            .filter(|_| self.octave <= MAX_OCTAVE)
            .ok_or_else(|| {
                invalid_parameter(
                    "octave",
                    &self.octave,
                    &format!("must be at most {MAX_OCTAVE}"),
                )
            })?;

        let patch_height = resolve_patch("patch_height", self.patch_height, height, grid_side)?;
        let patch_width = resolve_patch("patch_width", self.patch_width, width, grid_side)?;

        Ok(Geometry {
            grid_side,
            patch_height,
            patch_width,
            auto_height: self.patch_height <= 0,
            auto_width: self.patch_width <= 0,
            canvas_height: height,
            canvas_width: width,
        })
    }
}

fn resolve_patch(
    parameter: &'static str,
    requested: i32,
    extent: usize,
    grid_side: usize,
) -> Result<usize> {
    let patch = if requested <= 0 {
        extent / grid_side
    } else {
        requested as usize
    };

    if patch == 0 {
        return Err(invalid_parameter(
            parameter,
            &requested,
            &format!("canvas extent {extent} is smaller than the {grid_side}-cell grid"),
        ));
    }

    Ok(patch)
}
