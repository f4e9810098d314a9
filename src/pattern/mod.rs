//! Procedural pattern generators
//!
//! Every generator validates its parameters on construction and draws onto a
//! fresh white canvas, so a generator that fails to build never allocates a
//! grid.

/// Alternating black and white squares
pub mod checkerboard;
/// Scaled national flags
pub mod flag;
/// Seven colour stripes
pub mod rainbow;

pub use checkerboard::CheckerBoard;
pub use flag::{Country, Flag, FlagLayout};
pub use rainbow::{Orientation, Rainbow};

use crate::io::configuration::PATTERN_FORMAT;
use crate::io::error::Result;
use crate::model::{ColorType, Image, PixelGrid};

/// A generator that draws a complete grid from its own parameters
pub trait Pattern {
    /// Draw the pattern onto a new grid
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if a shape falls outside the canvas, which
    /// indicates an inconsistent layout
    fn draw(&self) -> Result<PixelGrid>;

    /// Draw the pattern wrapped as an RGBA PNG image
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Pattern::draw`]
    fn draw_image(&self) -> Result<Image> {
        Image::new(self.draw()?, PATTERN_FORMAT, ColorType::Rgba)
    }
}
