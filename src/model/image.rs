//! Decoded image: a pixel grid plus the format and colour-space tags it came with

use crate::io::error::{RasterError, Result};
use crate::model::grid::PixelGrid;

/// Colour layout the image was decoded from
///
/// Engines always work on RGBA pixels; the tag only travels with the image so
/// the host can re-encode it the way it arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorType {
    /// Single luminance channel
    Luma,
    /// Luminance with alpha
    LumaAlpha,
    /// Three colour channels
    Rgb,
    /// Three colour channels with alpha
    #[default]
    Rgba,
}

impl From<image::ColorType> for ColorType {
    fn from(color_type: image::ColorType) -> Self {
        match color_type {
            image::ColorType::L8 | image::ColorType::L16 => Self::Luma,
            image::ColorType::La8 | image::ColorType::La16 => Self::LumaAlpha,
            image::ColorType::Rgb8 | image::ColorType::Rgb16 | image::ColorType::Rgb32F => {
                Self::Rgb
            }
            _ => Self::Rgba,
        }
    }
}

/// Pixel grid with unchanged container metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    grid: PixelGrid,
    format: String,
    color_type: ColorType,
}

impl Image {
    /// Wrap a grid with its format tag (for example `"png"`) and colour type
    ///
    /// # Errors
    ///
    /// Returns `EmptyImage` if the format tag is blank
    pub fn new(grid: PixelGrid, format: impl Into<String>, color_type: ColorType) -> Result<Self> {
        let format = format.into();
        if format.trim().is_empty() {
            return Err(RasterError::EmptyImage {
                reason: "image format tag cannot be empty".to_string(),
            });
        }
        Ok(Self {
            grid,
            format,
            color_type,
        })
    }

    /// Replace the grid while keeping format and colour type
    #[must_use]
    pub fn with_grid(&self, grid: PixelGrid) -> Self {
        Self {
            grid,
            format: self.format.clone(),
            color_type: self.color_type,
        }
    }

    /// Borrow the pixel grid
    pub const fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Consume the image and return its grid
    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }

    /// Container format tag
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Colour layout tag
    pub const fn color_type(&self) -> ColorType {
        self.color_type
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.grid.height()
    }
}
