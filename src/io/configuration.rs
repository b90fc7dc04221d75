//! Synthesis defaults and runtime configuration constants

// Defaults for tiling parameters
/// Default grid exponent (4x4 grid)
pub const DEFAULT_OCTAVE: u32 = 2;

/// Sentinel patch dimension meaning "derive from source size and octave"
pub const AUTO_PATCH: i32 = -1;

/// Default Gaussian window sigma
pub const DEFAULT_BLUR: f32 = 0.5;

/// Default base scale multiplier
pub const DEFAULT_SCALE: f32 = 1.0;

/// Seed value requesting a time-based generator
pub const DEFAULT_SEED: u64 = 0;

// Safety limit, the grid has 4^octave cells
/// Maximum accepted octave
pub const MAX_OCTAVE: u32 = 12;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_tiled";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
