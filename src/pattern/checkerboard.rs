//! Square checkerboard built from equally sized cells

use crate::io::error::{Result, invalid_parameter};
use crate::model::{Color, Paint, PixelGrid, Rectangle};
use crate::pattern::Pattern;

/// Board of `squares_per_side` x `squares_per_side` alternating squares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckerBoard {
    outer_size: usize,
    inner_size: usize,
    dark: Color,
    light: Color,
}

impl CheckerBoard {
    /// Black and white board `outer_size` pixels across with squares of `inner_size`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `inner_size` is zero, does not divide
    /// `outer_size`, or leaves two or fewer squares per side
    pub fn new(outer_size: usize, inner_size: usize) -> Result<Self> {
        Self::with_colors(outer_size, inner_size, Color::BLACK, Color::WHITE)
    }

    /// Board with custom colours; `dark` lands where row plus column is even
    ///
    /// # Errors
    ///
    /// Same conditions as [`CheckerBoard::new`]
    pub fn with_colors(
        outer_size: usize,
        inner_size: usize,
        dark: Color,
        light: Color,
    ) -> Result<Self> {
        if inner_size == 0 {
            return Err(invalid_parameter(
                "inner_size",
                &inner_size,
                &"square size must be positive",
            ));
        }
        if outer_size % inner_size != 0 {
            return Err(invalid_parameter(
                "outer_size",
                &outer_size,
                &format!("board size must be a multiple of the square size {inner_size}"),
            ));
        }
        let per_side = outer_size / inner_size;
        if per_side <= 2 {
            return Err(invalid_parameter(
                "inner_size",
                &inner_size,
                &format!("board would have only {per_side} squares per side, needs more than 2"),
            ));
        }

        Ok(Self {
            outer_size,
            inner_size,
            dark,
            light,
        })
    }

    /// Side length of the board in pixels
    pub const fn outer_size(&self) -> usize {
        self.outer_size
    }

    /// Side length of one square in pixels
    pub const fn inner_size(&self) -> usize {
        self.inner_size
    }

    /// Number of squares along each side
    pub const fn squares_per_side(&self) -> usize {
        self.outer_size / self.inner_size
    }

    /// Every square in drawing order
    ///
    /// Board row `i` runs right to left from the top-right corner and board
    /// column `j` runs downwards.
    pub fn squares(&self) -> Vec<Rectangle> {
        let per_side = self.squares_per_side();
        let side = self.inner_size;
        let right_edge = self.outer_size - side;

        (0..per_side)
            .flat_map(|i| (0..per_side).map(move |j| (i, j)))
            .map(|(i, j)| {
                let color = if (i + j) % 2 == 0 { self.dark } else { self.light };
                Rectangle::new(right_edge - i * side, j * side, side, side, color)
            })
            .collect()
    }
}

impl Pattern for CheckerBoard {
    fn draw(&self) -> Result<PixelGrid> {
        log::debug!(
            "drawing {n}x{n} checkerboard of {}px squares",
            self.inner_size,
            n = self.squares_per_side()
        );
        let mut grid = PixelGrid::filled(self.outer_size, self.outer_size, Color::WHITE)?;
        for square in self.squares() {
            square.paint(&mut grid)?;
        }
        Ok(grid)
    }
}
