//! Black and white error-diffusion dithering
//!
//! The working grid is first converted to greyscale. Pixels are then visited
//! in row-major order; each one is snapped to black or white and the
//! quantization error is pushed onto neighbours that have not been visited
//! yet, as described by the kernel.
//!
//! Kernels carry no explicit anchor. The first nonzero weight found scanning
//! row by row sits immediately to the right of the current pixel, and every
//! other weight is positioned relative to that.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, array};

use crate::effects::convolution::matrix_from_rows;
use crate::effects::transform::TransformKind;
use crate::io::error::{RasterError, Result, invalid_kernel, unsupported};
use crate::math::rounding::{round_half_up, saturate_i32};
use crate::model::{Color, PixelGrid};

/// Channel average at or above this quantizes to white
pub const WHITE_THRESHOLD: u32 = 128;

/// Built-in diffusion kernels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DitherKind {
    /// Floyd-Steinberg, two rows
    FloydSteinberg,
    /// Jarvis-Judice-Ninke, three rows of five
    JarvisJudiceNinke,
}

impl DitherKind {
    /// Build the kernel for this kind
    pub fn kernel(self) -> DitherKernel {
        let weights = match self {
            Self::FloydSteinberg => floyd_steinberg_weights(),
            Self::JarvisJudiceNinke => jarvis_judice_ninke_weights(),
        };
        DitherKernel::from_weights(weights)
    }
}

impl FromStr for DitherKind {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "fs" | "floydsteinberg" => Ok(Self::FloydSteinberg),
            "jjn" | "jarvisjudiceninke" => Ok(Self::JarvisJudiceNinke),
            _ => Err(unsupported("dither", &s)),
        }
    }
}

impl fmt::Display for DitherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FloydSteinberg => write!(f, "floyd-steinberg"),
            Self::JarvisJudiceNinke => write!(f, "jarvis-judice-ninke"),
        }
    }
}

/// Floyd-Steinberg weights
pub fn floyd_steinberg_weights() -> Array2<f32> {
    array![[0.0, 0.0, 0.4375], [0.1875, 0.3125, 0.0625]]
}

/// Jarvis-Judice-Ninke weights
pub fn jarvis_judice_ninke_weights() -> Array2<f32> {
    array![
        [0.0, 0.0, 0.0, 0.1458, 0.1042],
        [0.0625, 0.1042, 0.1458, 0.1042, 0.0625],
        [0.0208, 0.0625, 0.1042, 0.0625, 0.0208],
    ]
}

/// One diffusion target relative to the current pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffusionTap {
    /// Rows below the current pixel
    pub row_offset: i64,
    /// Columns right of the current pixel (negative is left)
    pub col_offset: i64,
    /// Share of the quantization error
    pub weight: f32,
}

/// Error-diffusion kernel with its resolved diffusion offsets
#[derive(Debug, Clone, PartialEq)]
pub struct DitherKernel {
    weights: Array2<f32>,
    taps: Vec<DiffusionTap>,
}

impl DitherKernel {
    /// Validate and wrap a weight matrix
    ///
    /// # Errors
    ///
    /// Returns `InvalidKernel` if the matrix has no rows or no columns
    pub fn new(weights: Array2<f32>) -> Result<Self> {
        let (rows, cols) = weights.dim();
        if rows == 0 || cols == 0 {
            return Err(invalid_kernel("dither", &"kernel cannot be empty"));
        }
        Ok(Self::from_weights(weights))
    }

    /// Build a kernel from row vectors
    ///
    /// # Errors
    ///
    /// Returns `InvalidKernel` if the rows are ragged or empty
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self> {
        Self::new(matrix_from_rows("dither", rows)?)
    }

    fn from_weights(weights: Array2<f32>) -> Self {
        let taps = resolve_taps(&weights);
        Self { weights, taps }
    }

    /// Borrow the raw weights
    pub const fn weights(&self) -> &Array2<f32> {
        &self.weights
    }

    /// Diffusion targets in kernel scan order
    pub fn taps(&self) -> &[DiffusionTap] {
        &self.taps
    }

    /// Dither `grid` to black and white
    ///
    /// Takes ownership because the grid is rewritten in place; clone first to
    /// keep the original.
    ///
    /// # Errors
    ///
    /// Propagates errors from the greyscale pass or pixel access
    pub fn apply(&self, grid: PixelGrid) -> Result<PixelGrid> {
        log::debug!(
            "dithering {}x{} grid with {} diffusion taps",
            grid.height(),
            grid.width(),
            self.taps.len()
        );

        let mut working = TransformKind::Greyscale.transform().apply(&grid)?;

        let (height, width) = working.dimensions();
        for row in 0..height {
            for col in 0..width {
                self.quantize_and_diffuse(&mut working, row, col)?;
            }
        }
        Ok(working)
    }

    fn quantize_and_diffuse(&self, grid: &mut PixelGrid, row: usize, col: usize) -> Result<()> {
        let color = grid.get(row, col)?;
        let level = quantize(color);
        let error = color.channels().map(|channel| i32::from(channel) - i32::from(level));
        grid.set(row, col, Color::rgba(level, level, level, 255))?;

        for tap in &self.taps {
            let target_row = row as i64 + tap.row_offset;
            let target_col = col as i64 + tap.col_offset;
            let Some(neighbour) = grid.pixel_at(target_row, target_col) else {
                continue;
            };

            let mut diffused = [0_i32; Color::CHANNELS];
            for ((value, channel), channel_error) in
                diffused.iter_mut().zip(neighbour.channels()).zip(error)
            {
                let share = saturate_i32(round_half_up(tap.weight * channel_error as f32));
                *value = i32::from(channel).saturating_add(share);
            }
            grid.set(
                target_row as usize,
                target_col as usize,
                neighbour.with_rgb(diffused),
            )?;
        }
        Ok(())
    }
}

/// Snap a colour to 0 or 255 by its integer channel average
pub fn quantize(color: Color) -> u8 {
    let sum: u32 = color.channels().iter().map(|&c| u32::from(c)).sum();
    if sum / 3 < WHITE_THRESHOLD { 0 } else { 255 }
}

fn resolve_taps(weights: &Array2<f32>) -> Vec<DiffusionTap> {
    let mut anchor: Option<(i64, i64)> = None;
    let mut taps = Vec::new();

    for ((row, col), &weight) in weights.indexed_iter() {
        if weight == 0.0 {
            continue;
        }
        let (anchor_row, anchor_col) = *anchor.get_or_insert((row as i64, col as i64 - 1));
        taps.push(DiffusionTap {
            row_offset: row as i64 - anchor_row,
            col_offset: col as i64 - anchor_col,
            weight,
        });
    }

    taps
}
