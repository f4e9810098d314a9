//! Image engines
//!
//! Every engine reads a [`PixelGrid`](crate::model::PixelGrid) and produces a
//! new one of the same dimensions. Filters and transforms borrow their input;
//! dither and mosaic rewrite a grid they own.

/// Square-kernel convolution filters
pub mod convolution;
/// Error-diffusion dithering
pub mod dither;
/// Nearest-seed mosaic
pub mod mosaic;
/// Engine dispatch over decoded images
pub mod operation;
/// Per-pixel colour matrices
pub mod transform;

pub use convolution::{ConvolutionFilter, FilterKind};
pub use dither::{DitherKernel, DitherKind};
pub use mosaic::Mosaic;
pub use operation::Operation;
pub use transform::{ColorTransform, TransformKind};
