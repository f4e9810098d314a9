//! Per-pixel linear colour transforms

use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, array};

use crate::effects::convolution::matrix_from_rows;
use crate::io::error::{RasterError, Result, invalid_kernel, unsupported};
use crate::math::rounding::{round_half_up, saturate_i32};
use crate::model::{Color, PixelGrid};

/// Built-in colour transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    /// Luminance greyscale
    Greyscale,
    /// Warm brown tone
    Sepia,
}

impl TransformKind {
    /// Build the transform for this kind
    pub fn transform(self) -> ColorTransform {
        let matrix = match self {
            Self::Greyscale => greyscale_matrix(),
            Self::Sepia => sepia_matrix(),
        };
        ColorTransform { matrix }
    }
}

impl FromStr for TransformKind {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greyscale" | "grayscale" => Ok(Self::Greyscale),
            "sepia" => Ok(Self::Sepia),
            _ => Err(unsupported("transform", &s)),
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Greyscale => write!(f, "greyscale"),
            Self::Sepia => write!(f, "sepia"),
        }
    }
}

/// Every output channel takes the Rec. 709 luminance of the input
pub fn greyscale_matrix() -> Array2<f32> {
    let red = 0.2126;
    let green = 0.7152;
    let blue = 0.0722;
    array![
        [red, green, blue],
        [red, green, blue],
        [red, green, blue],
    ]
}

/// Classic sepia tone matrix
pub fn sepia_matrix() -> Array2<f32> {
    array![
        [0.393, 0.769, 0.189],
        [0.349, 0.686, 0.168],
        [0.272, 0.534, 0.131],
    ]
}

/// Square matrix applied to each pixel's colour vector
///
/// Output channels are rounded half-up and saturated into [0, 255]; alpha is
/// never touched.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTransform {
    matrix: Array2<f32>,
}

impl ColorTransform {
    /// Validate and wrap a transform matrix
    ///
    /// # Errors
    ///
    /// Returns `InvalidKernel` if the matrix is empty or not square
    pub fn new(matrix: Array2<f32>) -> Result<Self> {
        let (rows, cols) = matrix.dim();
        if rows == 0 || cols == 0 {
            return Err(invalid_kernel("transform", &"matrix cannot be empty"));
        }
        if rows != cols {
            return Err(invalid_kernel(
                "transform",
                &format!("matrix must be square, got {rows}x{cols}"),
            ));
        }
        Ok(Self { matrix })
    }

    /// Build a matrix from row vectors
    ///
    /// # Errors
    ///
    /// Returns `InvalidKernel` if the rows are ragged, empty or not square
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self> {
        Self::new(matrix_from_rows("transform", rows)?)
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.matrix.nrows()
    }

    /// Borrow the matrix
    pub const fn matrix(&self) -> &Array2<f32> {
        &self.matrix
    }

    /// Transform a single colour
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the matrix size differs from the number
    /// of colour channels
    pub fn transform(&self, color: Color) -> Result<Color> {
        self.check_channels()?;
        Ok(self.transform_unchecked(color))
    }

    /// Transform every pixel of `grid` into a new grid
    ///
    /// The channel check happens once, before any pixel is processed.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the matrix size differs from the number
    /// of colour channels
    pub fn apply(&self, grid: &PixelGrid) -> Result<PixelGrid> {
        self.check_channels()?;
        log::debug!(
            "applying {n}x{n} colour transform to {}x{} grid",
            grid.height(),
            grid.width(),
            n = self.size()
        );
        Ok(grid.map(|&color| self.transform_unchecked(color)))
    }

    fn check_channels(&self) -> Result<()> {
        if self.size() == Color::CHANNELS {
            Ok(())
        } else {
            Err(RasterError::DimensionMismatch {
                operation: "colour transform",
                expected: Color::CHANNELS,
                found: self.size(),
            })
        }
    }

    fn transform_unchecked(&self, color: Color) -> Color {
        let channels = color.channels();
        let mut output = [0_i32; Color::CHANNELS];
        for (value, row) in output.iter_mut().zip(self.matrix.rows()) {
            let product: f32 = row
                .iter()
                .zip(channels)
                .map(|(&weight, channel)| weight * f32::from(channel))
                .sum();
            *value = saturate_i32(round_half_up(product));
        }
        color.with_rgb(output)
    }
}
