//! Decoding files into images and encoding them back
//!
//! Pixels are always decoded to 8-bit RGBA. The colour type reported by the
//! decoder is kept on the [`Image`] so saving can convert back to it.

use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use ndarray::Array2;

use crate::io::error::{RasterError, Result};
use crate::model::{Color, ColorType, Image, PixelGrid};

/// Load an image file
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be read or decoded, and
/// `EmptyImage` if it has no pixels or an unknown extension
pub fn load_image(path: &Path) -> Result<Image> {
    let decoded = image::open(path).map_err(|source| RasterError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let format = format_tag(path).ok_or_else(|| RasterError::EmptyImage {
        reason: format!("cannot determine image format of '{}'", path.display()),
    })?;
    let color_type = ColorType::from(decoded.color());
    let grid = grid_from_rgba(&decoded.to_rgba8())?;

    log::debug!(
        "loaded {}x{} {format} image from '{}'",
        grid.width(),
        grid.height(),
        path.display()
    );
    Image::new(grid, format, color_type)
}

/// Save an image, converting back to its colour type
///
/// The encoder is chosen from the file extension. Parent directories are
/// created as needed.
///
/// # Errors
///
/// Returns `FileSystem` if a parent directory cannot be created and
/// `ImageExport` if encoding or writing fails
pub fn save_image(image: &Image, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| RasterError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    let rgba = DynamicImage::ImageRgba8(grid_to_rgba(image.grid()));
    let encoded = match image.color_type() {
        ColorType::Luma => DynamicImage::ImageLuma8(rgba.to_luma8()),
        ColorType::LumaAlpha => DynamicImage::ImageLumaA8(rgba.to_luma_alpha8()),
        ColorType::Rgb => DynamicImage::ImageRgb8(rgba.to_rgb8()),
        ColorType::Rgba => rgba,
    };

    encoded.save(path).map_err(|source| RasterError::ImageExport {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("saved image to '{}'", path.display());
    Ok(())
}

/// Copy an RGBA buffer into a pixel grid
///
/// # Errors
///
/// Returns `EmptyImage` if the buffer has no pixels
pub fn grid_from_rgba(buffer: &RgbaImage) -> Result<PixelGrid> {
    let (width, height) = buffer.dimensions();
    if width == 0 || height == 0 {
        return Err(RasterError::EmptyImage {
            reason: format!("decoded image is {width}x{height}"),
        });
    }

    let pixels = Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
        Color::from(*buffer.get_pixel(col as u32, row as u32))
    });
    PixelGrid::from_array(pixels)
}

/// Copy a pixel grid into an RGBA buffer
pub fn grid_to_rgba(grid: &PixelGrid) -> RgbaImage {
    let (height, width) = grid.dimensions();
    let mut buffer = RgbaImage::new(width as u32, height as u32);
    for ((row, col), color) in grid.indexed_iter() {
        buffer.put_pixel(col as u32, row as u32, color.into());
    }
    buffer
}

fn format_tag(path: &Path) -> Option<String> {
    let format = ImageFormat::from_path(path).ok()?;
    format.extensions_str().first().map(|ext| (*ext).to_string())
}
