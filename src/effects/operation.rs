//! Single entry point for running any image engine on a decoded image

use std::fmt;

use crate::effects::convolution::FilterKind;
use crate::effects::dither::DitherKind;
use crate::effects::mosaic::Mosaic;
use crate::effects::transform::TransformKind;
use crate::io::error::Result;
use crate::model::{Image, PixelGrid};

/// One engine invocation with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Convolve with a built-in kernel
    Filter(FilterKind),
    /// Apply a built-in colour transform
    Transform(TransformKind),
    /// Dither to black and white
    Dither(DitherKind),
    /// Stained-glass mosaic
    Mosaic {
        /// Number of seeds sampled
        seeds: usize,
        /// RNG seed for sampling
        rng_seed: u64,
    },
}

impl Operation {
    /// Short name used in output file names
    pub fn name(&self) -> String {
        match self {
            Self::Filter(kind) => kind.to_string(),
            Self::Transform(kind) => kind.to_string(),
            Self::Dither(kind) => kind.to_string(),
            Self::Mosaic { seeds, .. } => format!("mosaic{seeds}"),
        }
    }

    /// Run the engine on a copy of `grid`, leaving the input untouched
    ///
    /// # Errors
    ///
    /// Propagates the engine's parameter and dimension errors
    pub fn apply_to_grid(&self, grid: &PixelGrid) -> Result<PixelGrid> {
        match *self {
            Self::Filter(kind) => kind.filter().apply(grid),
            Self::Transform(kind) => kind.transform().apply(grid),
            Self::Dither(kind) => kind.kernel().apply(grid.clone()),
            Self::Mosaic { seeds, rng_seed } => Mosaic::new(seeds, rng_seed)?.apply(grid.clone()),
        }
    }

    /// Run the engine on `image`, keeping its format and colour type
    ///
    /// # Errors
    ///
    /// Propagates the engine's parameter and dimension errors
    pub fn apply(&self, image: &Image) -> Result<Image> {
        log::debug!("running {self} on {}x{} image", image.width(), image.height());
        let grid = self.apply_to_grid(image.grid())?;
        Ok(image.with_grid(grid))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mosaic { seeds, rng_seed } => {
                write!(f, "mosaic ({seeds} seeds, rng seed {rng_seed})")
            }
            _ => write!(f, "{}", self.name()),
        }
    }
}
