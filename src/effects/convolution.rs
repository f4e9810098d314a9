//! Square-kernel convolution with zero padding
//!
//! Every output pixel is the weighted sum of the k x k neighbourhood centred
//! on it, computed independently for the three colour channels. Neighbours
//! outside the grid read as opaque black. Sums are truncated towards zero and
//! then saturated into [0, 255]. Alpha is copied from the top-left sample of the
//! neighbourhood rather than recomputed.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, array};

use crate::io::error::{RasterError, Result, invalid_kernel, unsupported};
use crate::math::rounding::{saturate_i32, truncate};
use crate::model::{Color, PixelGrid};

/// Built-in convolution filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// 3x3 Gaussian-style blur
    Blur,
    /// 5x5 sharpen
    Sharpen,
}

impl FilterKind {
    /// Build the filter for this kind
    pub fn filter(self) -> ConvolutionFilter {
        let weights = match self {
            Self::Blur => blur_kernel(),
            Self::Sharpen => sharpen_kernel(),
        };
        ConvolutionFilter { weights }
    }
}

impl FromStr for FilterKind {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blur" => Ok(Self::Blur),
            "sharpen" => Ok(Self::Sharpen),
            _ => Err(unsupported("filter", &s)),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blur => write!(f, "blur"),
            Self::Sharpen => write!(f, "sharpen"),
        }
    }
}

/// Blur weights: centre 1/4, edge neighbours 1/8, diagonals 1/16
pub fn blur_kernel() -> Array2<f32> {
    let centre = 1.0 / 4.0;
    let edge = centre / 2.0;
    let corner = edge / 2.0;
    array![
        [corner, edge, corner],
        [edge, centre, edge],
        [corner, edge, corner],
    ]
}

/// Sharpen weights: centre 1, inner ring 1/4, outer ring -1/8
pub fn sharpen_kernel() -> Array2<f32> {
    let centre = 1.0;
    let inner = 1.0 / 4.0;
    let outer = -1.0 / 8.0;
    array![
        [outer, outer, outer, outer, outer],
        [outer, inner, inner, inner, outer],
        [outer, inner, centre, inner, outer],
        [outer, inner, inner, inner, outer],
        [outer, outer, outer, outer, outer],
    ]
}

/// Odd-sized square convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct ConvolutionFilter {
    weights: Array2<f32>,
}

impl ConvolutionFilter {
    /// Validate and wrap a weight matrix
    ///
    /// # Errors
    ///
    /// Returns `InvalidKernel` if the matrix is empty, not square, or has an
    /// even side length
    pub fn new(weights: Array2<f32>) -> Result<Self> {
        let (rows, cols) = weights.dim();
        if rows == 0 || cols == 0 {
            return Err(invalid_kernel("filter", &"kernel cannot be empty"));
        }
        if rows != cols {
            return Err(invalid_kernel(
                "filter",
                &format!("kernel must be square, got {rows}x{cols}"),
            ));
        }
        if rows % 2 == 0 {
            return Err(invalid_kernel(
                "filter",
                &format!("kernel side must be odd, got {rows}"),
            ));
        }
        Ok(Self { weights })
    }

    /// Build a kernel from row vectors
    ///
    /// # Errors
    ///
    /// Returns `InvalidKernel` if the rows are ragged, or for any reason
    /// listed on [`ConvolutionFilter::new`]
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self> {
        Self::new(matrix_from_rows("filter", rows)?)
    }

    /// Side length of the kernel
    pub fn size(&self) -> usize {
        self.weights.nrows()
    }

    /// Borrow the kernel weights
    pub const fn weights(&self) -> &Array2<f32> {
        &self.weights
    }

    /// Convolve `grid` into a new grid of the same dimensions
    ///
    /// # Errors
    ///
    /// Propagates grid construction errors; these cannot occur for a valid
    /// input grid
    pub fn apply(&self, grid: &PixelGrid) -> Result<PixelGrid> {
        log::debug!(
            "convolving {}x{} grid with {}x{} kernel",
            grid.height(),
            grid.width(),
            self.size(),
            self.size()
        );

        let filtered =
            Array2::from_shape_fn(grid.dimensions(), |(row, col)| self.convolve_at(grid, row, col));
        PixelGrid::from_array(filtered)
    }

    fn convolve_at(&self, grid: &PixelGrid, row: usize, col: usize) -> Color {
        let radius = (self.size() / 2) as i64;
        let top = row as i64 - radius;
        let left = col as i64 - radius;

        let mut sums = [0.0_f64; Color::CHANNELS];
        for ((k_row, k_col), &weight) in self.weights.indexed_iter() {
            let neighbour = grid
                .pixel_at(top + k_row as i64, left + k_col as i64)
                .unwrap_or(Color::BLACK);
            for (sum, channel) in sums.iter_mut().zip(neighbour.channels()) {
                *sum += f64::from(weight) * f64::from(channel);
            }
        }

        let alpha = grid.pixel_at(top, left).unwrap_or(Color::BLACK).alpha();
        let [r, g, b] = sums.map(|sum| saturate_i32(truncate(sum)));
        Color::clamped(r, g, b, i32::from(alpha))
    }
}

/// Collect row vectors into a rectangular matrix, rejecting ragged input
pub(crate) fn matrix_from_rows(kernel: &'static str, rows: &[Vec<f32>]) -> Result<Array2<f32>> {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != width) {
        return Err(invalid_kernel(kernel, &"rows must all have the same length"));
    }

    let flat: Vec<f32> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((height, width), flat).map_err(|err| invalid_kernel(kernel, &err))
}
