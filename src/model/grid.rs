//! Fixed-size pixel grid with bounds-checked access
//!
//! The grid is a thin wrapper over an `ndarray` matrix of [`Color`] values
//! addressed as (row, column). Dimensions are validated once at construction
//! and never change afterwards. Cloning produces an independent deep copy,
//! which is how callers preserve an original before handing a grid to an
//! engine that consumes it.

use ndarray::{Array2, Axis, Slice};

use crate::io::error::{RasterError, Result, invalid_parameter};
use crate::model::color::Color;

/// Two-dimensional array of pixels with strictly positive dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Array2<Color>,
}

impl PixelGrid {
    /// Create a grid of transparent pixels
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero
    pub fn new(height: usize, width: usize) -> Result<Self> {
        Self::filled(height, width, Color::TRANSPARENT)
    }

    /// Create a grid with every pixel set to `color`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero
    pub fn filled(height: usize, width: usize, color: Color) -> Result<Self> {
        validate_dimensions(height, width)?;
        Ok(Self {
            pixels: Array2::from_elem((height, width), color),
        })
    }

    /// Wrap an existing pixel matrix
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the matrix has no rows or no columns
    pub fn from_array(pixels: Array2<Color>) -> Result<Self> {
        let (height, width) = pixels.dim();
        validate_dimensions(height, width)?;
        Ok(Self { pixels })
    }

    /// Build a grid from row vectors
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if there are no rows, the rows are empty,
    /// or the rows differ in length
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        validate_dimensions(height, width)?;

        if let Some(ragged) = rows.iter().position(|row| row.len() != width) {
            return Err(invalid_parameter(
                "rows",
                &ragged,
                &"all rows must have the same number of pixels",
            ));
        }

        let flat: Vec<Color> = rows.into_iter().flatten().collect();
        let pixels = Array2::from_shape_vec((height, width), flat)
            .map_err(|err| invalid_parameter("rows", &height, &err))?;
        Ok(Self { pixels })
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Grid dimensions as (height, width)
    pub fn dimensions(&self) -> (usize, usize) {
        self.pixels.dim()
    }

    /// Check whether a signed position lies inside the grid
    pub fn contains(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height() && (col as usize) < self.width()
    }

    /// Read a pixel
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` outside [0, height) x [0, width)
    pub fn get(&self, row: usize, col: usize) -> Result<Color> {
        self.pixels
            .get((row, col))
            .copied()
            .ok_or_else(|| self.out_of_bounds(row as i64, col as i64))
    }

    /// Overwrite a pixel
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` outside [0, height) x [0, width)
    pub fn set(&mut self, row: usize, col: usize, color: Color) -> Result<()> {
        let err = self.out_of_bounds(row as i64, col as i64);
        let pixel = self.pixels.get_mut((row, col)).ok_or(err)?;
        *pixel = color;
        Ok(())
    }

    /// Fill the `height` x `width` block whose top-left pixel is (`row`, `col`)
    ///
    /// The whole block is checked before anything is written, so a failing
    /// call leaves the grid untouched. An empty block is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` with the first offending pixel in row-major order
    pub fn fill_rect(
        &mut self,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
        color: Color,
    ) -> Result<()> {
        if height == 0 || width == 0 {
            return Ok(());
        }

        let (grid_height, grid_width) = self.dimensions();
        let bottom = row.saturating_add(height);
        let right = col.saturating_add(width);
        let offending = if row >= grid_height || col >= grid_width {
            Some((row, col))
        } else if right > grid_width {
            Some((row, grid_width))
        } else if bottom > grid_height {
            Some((grid_height, col))
        } else {
            None
        };
        if let Some((bad_row, bad_col)) = offending {
            return Err(self.out_of_bounds(bad_row as i64, bad_col as i64));
        }

        let mut block = self
            .pixels
            .slice_axis_mut(Axis(0), Slice::from(row..bottom));
        block.slice_axis_inplace(Axis(1), Slice::from(col..right));
        block.fill(color);
        Ok(())
    }

    /// Read a pixel at a signed position, `None` when it falls outside the grid
    pub fn pixel_at(&self, row: i64, col: i64) -> Option<Color> {
        if self.contains(row, col) {
            self.pixels.get((row as usize, col as usize)).copied()
        } else {
            None
        }
    }

    /// Borrow the underlying pixel matrix
    pub const fn pixels(&self) -> &Array2<Color> {
        &self.pixels
    }

    /// Iterate over `((row, col), color)` in row-major order
    pub fn indexed_iter(&self) -> impl Iterator<Item = ((usize, usize), Color)> + '_ {
        self.pixels.indexed_iter().map(|(index, &color)| (index, color))
    }

    /// Produce a new grid by applying `f` to every pixel
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(&Color) -> Color,
    {
        Self {
            pixels: self.pixels.map(f),
        }
    }

    /// Consume the grid and return the pixel matrix
    pub fn into_array(self) -> Array2<Color> {
        self.pixels
    }

    fn out_of_bounds(&self, row: i64, col: i64) -> RasterError {
        RasterError::OutOfBounds {
            row,
            col,
            dimensions: self.dimensions(),
        }
    }
}

fn validate_dimensions(height: usize, width: usize) -> Result<()> {
    if height == 0 {
        return Err(invalid_parameter(
            "height",
            &height,
            &"grid dimensions must be positive",
        ));
    }
    if width == 0 {
        return Err(invalid_parameter(
            "width",
            &width,
            &"grid dimensions must be positive",
        ));
    }
    Ok(())
}
