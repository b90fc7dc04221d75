//! Command-line interface for tiling single PNG files or whole directories

use crate::io::configuration::{
    AUTO_PATCH, DEFAULT_BLUR, DEFAULT_OCTAVE, DEFAULT_SCALE, DEFAULT_SEED, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, TileError, invalid_parameter};
use crate::io::image::{load_png, save_png};
use crate::io::progress::ProgressManager;
use crate::math::random::JitterSource;
use crate::synthesis::{BackgroundColor, TileArgs, synthesize_with_progress};
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tilemaker")]
#[command(
    author,
    version,
    about = "Create seamless tileable textures from a source image",
    disable_help_flag = true
)]
/// Command-line arguments for the tiling tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Output PNG path (single input file only)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Background color as R,G,B intensities
    #[arg(short = 'c', long = "color", value_name = "R,G,B", default_value = "0,0,0")]
    pub color: BackgroundColor,

    /// Octave, the grid has 2^octave x 2^octave cells
    #[arg(short = 'o', long, default_value_t = DEFAULT_OCTAVE)]
    pub octave: u32,

    /// Patch height in pixels (non-positive derives it from the octave)
    #[arg(short = 'h', long = "height", default_value_t = AUTO_PATCH, allow_negative_numbers = true)]
    pub patch_height: i32,

    /// Patch width in pixels (non-positive derives it from the octave)
    #[arg(short = 'w', long = "width", default_value_t = AUTO_PATCH, allow_negative_numbers = true)]
    pub patch_width: i32,

    /// Mask blur (Gaussian sigma relative to the tile size)
    #[arg(short = 'm', long = "blur", default_value_t = DEFAULT_BLUR)]
    pub blur: f32,

    /// Base rotation in radians (drawn per cell, not applied)
    #[arg(short = 'R', long = "rotation", default_value_t = 0.0, allow_negative_numbers = true)]
    pub rotation: f32,

    /// Rotation variance
    #[arg(short = 'r', long = "rotation-var", default_value_t = 0.0)]
    pub rotation_var: f32,

    /// Base scale multiplier
    #[arg(short = 'S', long = "scale", default_value_t = DEFAULT_SCALE)]
    pub scale: f32,

    /// Scale variance
    #[arg(short = 's', long = "scale-var", default_value_t = 0.0)]
    pub scale_var: f32,

    /// Random seed (0 seeds from the clock)
    #[arg(short = 'x', long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Show usage information
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Tiling parameters described by the command line
    pub const fn tile_args(&self) -> TileArgs {
        TileArgs {
            bg_color: self.color,
            octave: self.octave,
            patch_height: self.patch_height,
            patch_width: self.patch_width,
            blur: self.blur,
            rotation_base: self.rotation,
            rotation_var: self.rotation_var,
            scale_base: self.scale,
            scale_var: self.scale_var,
            seed: self.seed,
        }
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, loading, synthesis, or saving fails
    pub fn process(&mut self) -> Result<()> {
        let jobs = self.collect_jobs()?;

        if jobs.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(jobs.len());
        }

        for (index, (input, output)) in jobs.iter().enumerate() {
            self.process_file(input, output, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Pair every input file with the path its result is written to
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target is neither a PNG file nor a directory
    /// - An explicit output is given for a directory target
    /// - The directory cannot be read
    pub fn collect_jobs(&self) -> Result<Vec<(PathBuf, PathBuf)>> {
        let target = &self.cli.target;

        if target.is_file() {
            if !is_png(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a PNG image",
                ));
            }
            let output = self
                .cli
                .output
                .clone()
                .unwrap_or_else(|| Self::get_output_path(target));
            Ok(self
                .should_process_file(target, &output)
                .then(|| (target.clone(), output))
                .into_iter()
                .collect())
        } else if target.is_dir() {
            if let Some(output) = &self.cli.output {
                return Err(invalid_parameter(
                    "output",
                    &output.display(),
                    &"an explicit output requires a single input file",
                ));
            }

            let entries = std::fs::read_dir(target).map_err(|e| TileError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;

            let mut jobs = Vec::new();
            for entry in entries {
                let path = entry?.path();
                // Skip results of earlier runs
                let is_result = path
                    .file_stem()
                    .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX));
                if !is_png(&path) || is_result {
                    continue;
                }
                let output = Self::get_output_path(&path);
                if self.should_process_file(&path, &output) {
                    jobs.push((path, output));
                }
            }
            jobs.sort();
            Ok(jobs)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path, output_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, output_path: &Path, index: usize) -> Result<()> {
        let source = load_png(input_path)?;
        let args = self.cli.tile_args();
        let mut rng = JitterSource::new(args.seed);

        let cells = args
            .resolve_geometry(source.height(), source.width())
            .map_or(0, |geometry| geometry.cell_count());
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, cells);
        }

        let progress = &mut self.progress_manager;
        let result = synthesize_with_progress(&source, &args, &mut rng, |done, _| {
            if let Some(pm) = progress.as_mut() {
                pm.update_cells(index, done);
            }
        })?;

        save_png(&result, output_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    /// Default output path: `<stem>_tiled.<ext>` next to the input
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}
