//! Command-line interface for running engines over image files and drawing patterns

use crate::effects::{DitherKind, FilterKind, Operation, TransformKind};
use crate::io::configuration::{
    DEFAULT_CHECKERBOARD_SIZE, DEFAULT_CHECKERBOARD_SQUARE, DEFAULT_FLAG_WIDTH,
    DEFAULT_MOSAIC_RNG_SEED, DEFAULT_MOSAIC_SEED_COUNT, DEFAULT_RAINBOW_HEIGHT,
    DEFAULT_RAINBOW_STRIPE, DEFAULT_RAINBOW_WIDTH, SUPPORTED_EXTENSIONS,
};
use crate::io::error::{RasterError, Result, invalid_parameter};
use crate::io::image::{load_image, save_image};
use crate::io::progress::ProgressManager;
use crate::pattern::{CheckerBoard, Country, Flag, Orientation, Pattern, Rainbow};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "rasterfx")]
#[command(
    author,
    version,
    about = "Filter, dither and mosaic images or draw procedural patterns"
)]
/// Command-line arguments for the raster tool
pub struct Cli {
    /// What to do
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output and informational logging
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Image source shared by the image subcommands
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl InputArgs {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }
}

/// Destination shared by the pattern subcommands
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// File to write the pattern to
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convolve with a built-in kernel (blur, sharpen)
    Filter {
        /// Kernel name
        kind: FilterKind,
        /// Images to process
        #[command(flatten)]
        input: InputArgs,
    },
    /// Apply a colour transform (greyscale, sepia)
    Transform {
        /// Transform name
        kind: TransformKind,
        /// Images to process
        #[command(flatten)]
        input: InputArgs,
    },
    /// Dither to black and white (floyd-steinberg, jarvis-judice-ninke)
    Dither {
        /// Diffusion kernel name
        kind: DitherKind,
        /// Images to process
        #[command(flatten)]
        input: InputArgs,
    },
    /// Stained-glass mosaic from randomly sampled seeds
    Mosaic {
        /// Number of seeds
        #[arg(short, long, default_value_t = DEFAULT_MOSAIC_SEED_COUNT)]
        seeds: usize,
        /// Random seed for reproducible sampling
        #[arg(short, long, default_value_t = DEFAULT_MOSAIC_RNG_SEED)]
        rng_seed: u64,
        /// Images to process
        #[command(flatten)]
        input: InputArgs,
    },
    /// Draw a black and white checkerboard
    Checkerboard {
        /// Board side length in pixels
        #[arg(long, default_value_t = DEFAULT_CHECKERBOARD_SIZE)]
        size: usize,
        /// Square side length in pixels
        #[arg(long, default_value_t = DEFAULT_CHECKERBOARD_SQUARE)]
        square: usize,
        /// Output location
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Draw rainbow stripes
    Rainbow {
        /// Canvas width
        #[arg(long, default_value_t = DEFAULT_RAINBOW_WIDTH)]
        width: usize,
        /// Canvas height
        #[arg(long, default_value_t = DEFAULT_RAINBOW_HEIGHT)]
        height: usize,
        /// Stripe thickness
        #[arg(long, default_value_t = DEFAULT_RAINBOW_STRIPE)]
        stripe: usize,
        /// Stripe direction (h, v, horizontal, vertical)
        #[arg(long, default_value = "horizontal")]
        orientation: Orientation,
        /// Cycle the colours until the canvas is full
        #[arg(long)]
        repeat: bool,
        /// Output location
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Draw a national flag (france, greece, switzerland)
    Flag {
        /// Country name
        country: Country,
        /// Requested width in pixels
        #[arg(long, default_value_t = DEFAULT_FLAG_WIDTH)]
        width: usize,
        /// Output location
        #[command(flatten)]
        output: OutputArgs,
    },
}

enum Job {
    Images {
        operation: Operation,
        input: InputArgs,
    },
    Draw {
        pattern: Box<dyn Pattern>,
        output: PathBuf,
    },
}

impl Command {
    fn into_job(self) -> Result<Job> {
        let images = |operation, input| Job::Images { operation, input };
        let draw = |pattern: Box<dyn Pattern>, output: OutputArgs| Job::Draw {
            pattern,
            output: output.output,
        };

        Ok(match self {
            Self::Filter { kind, input } => images(Operation::Filter(kind), input),
            Self::Transform { kind, input } => images(Operation::Transform(kind), input),
            Self::Dither { kind, input } => images(Operation::Dither(kind), input),
            Self::Mosaic {
                seeds,
                rng_seed,
                input,
            } => images(Operation::Mosaic { seeds, rng_seed }, input),
            Self::Checkerboard {
                size,
                square,
                output,
            } => draw(Box::new(CheckerBoard::new(size, square)?), output),
            Self::Rainbow {
                width,
                height,
                stripe,
                orientation,
                repeat,
                output,
            } => draw(
                Box::new(Rainbow::new(width, height, stripe, orientation, repeat)?),
                output,
            ),
            Self::Flag {
                country,
                width,
                output,
            } => draw(Box::new(Flag::new(country, width)?), output),
        })
    }
}

/// Runs one subcommand, batching image files with progress tracking
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

    /// Run the subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if parameters are invalid, the target cannot be read,
    /// or any image fails to load, process or save
    pub fn process(&mut self) -> Result<()> {
        match self.cli.command.clone().into_job()? {
            Job::Images { operation, input } => self.process_images(operation, &input),
            Job::Draw { pattern, output } => {
                let image = pattern.draw_image()?;
                save_image(&image, &output)?;
                log::info!(
                    "wrote {}x{} pattern to {}",
                    image.width(),
                    image.height(),
                    output.display()
                );
                Ok(())
            }
        }
    }

    fn process_images(&mut self, operation: Operation, input: &InputArgs) -> Result<()> {
        let files = collect_files(&operation, input)?;

        if files.is_empty() {
            log::info!("nothing to process in {}", input.target.display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(&operation, file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn process_file(&mut self, operation: &Operation, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = output_path(input_path, operation);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, &operation.name());
        }

        let image = load_image(input_path)?;
        let processed = operation.apply(&image)?;
        save_image(&processed, &output_path)?;
        log::info!("{} -> {}", input_path.display(), output_path.display());

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }
}

/// Output file for `input_path` processed by `operation`: `<stem>_<operation>.<ext>`
pub fn output_path(input_path: &Path, operation: &Operation) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let extension = input_path.extension().unwrap_or_default();
    let output_name = format!(
        "{}_{}.{}",
        stem.to_string_lossy(),
        operation.name(),
        extension.to_string_lossy()
    );

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Image files the subcommand should run on, sorted by path
///
/// A directory contributes every file with a supported extension, except
/// earlier outputs of the same operation. Files whose output already exists
/// are left out unless `--no-skip` is given.
///
/// # Errors
///
/// Returns `InvalidParameter` if the target is neither a supported image nor
/// a directory, and `FileSystem` if the directory cannot be read
pub fn collect_files(operation: &Operation, input: &InputArgs) -> Result<Vec<PathBuf>> {
    let target = &input.target;
    let candidates = if target.is_file() {
        if !is_supported_image(target) {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &format!("target file must be one of: {}", SUPPORTED_EXTENSIONS.join(", ")),
            ));
        }
        vec![target.clone()]
    } else if target.is_dir() {
        let entries = std::fs::read_dir(target).map_err(|source| RasterError::FileSystem {
            path: target.clone(),
            operation: "read directory",
            source,
        })?;
        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && is_supported_image(&path) && !is_output_of(&path, operation) {
                files.push(path);
            }
        }
        files.sort();
        files
    } else {
        return Err(invalid_parameter(
            "target",
            &target.display(),
            &"target must be an image file or directory",
        ));
    };

    Ok(candidates
        .into_iter()
        .filter(|path| should_process_file(path, operation, input))
        .collect())
}

fn should_process_file(input_path: &Path, operation: &Operation, input: &InputArgs) -> bool {
    if !input.skip_existing() {
        return true;
    }

    if output_path(input_path, operation).exists() {
        log::warn!("skipping {} (output exists)", input_path.display());
        false
    } else {
        true
    }
}

// Earlier results of the same operation sit next to their inputs
fn is_output_of(path: &Path, operation: &Operation) -> bool {
    let suffix = format!("_{}", operation.name());
    path.file_stem()
        .is_some_and(|stem| stem.to_string_lossy().ends_with(&suffix))
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}
