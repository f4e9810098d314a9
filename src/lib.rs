//! Pixel-grid image processing: convolution filters, colour transforms,
//! error-diffusion dithering, stained-glass mosaics and procedural patterns
//!
//! Engines work on an in-memory [`PixelGrid`](model::PixelGrid) of RGBA
//! [`Color`](model::Color) values and are fully deterministic; the mosaic takes
//! its RNG seed as a parameter. Decoding, encoding and the command line live in
//! [`io`].

#![forbid(unsafe_code)]

/// Convolution, colour transform, dither and mosaic engines
pub mod effects;
/// Input/output operations and error handling
pub mod io;
/// Rounding and distance helpers
pub mod math;
/// Colours, pixel grids, images and shapes
pub mod model;
/// Checkerboard, rainbow and flag generators
pub mod pattern;

pub use io::error::{RasterError, Result};
