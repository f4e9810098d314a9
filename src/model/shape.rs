//! Flat shapes that rasterize onto a pixel grid

use crate::io::error::Result;
use crate::model::color::Color;
use crate::model::grid::PixelGrid;

/// Anything that can paint itself onto a grid
pub trait Paint {
    /// Rasterize onto `grid`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if any part of the shape falls outside the grid;
    /// the grid is left unchanged in that case
    fn paint(&self, grid: &mut PixelGrid) -> Result<()>;
}

/// Axis-aligned solid rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    color: Color,
}

impl Rectangle {
    /// Create a rectangle with origin (`x`, `y`) where x is the column and y the row
    pub const fn new(x: usize, y: usize, width: usize, height: usize, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
        }
    }

    /// Column of the left edge
    pub const fn x(&self) -> usize {
        self.x
    }

    /// Row of the top edge
    pub const fn y(&self) -> usize {
        self.y
    }

    /// Horizontal extent
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Vertical extent
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Fill colour
    pub const fn color(&self) -> Color {
        self.color
    }

    /// One past the rightmost column
    pub const fn right(&self) -> usize {
        self.x + self.width
    }

    /// One past the bottom row
    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Multiply origin and extents by `factor`
    #[must_use]
    pub const fn scaled(&self, factor: usize) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
            color: self.color,
        }
    }
}

impl Paint for Rectangle {
    fn paint(&self, grid: &mut PixelGrid) -> Result<()> {
        grid.fill_rect(self.y, self.x, self.height, self.width, self.color)
    }
}
