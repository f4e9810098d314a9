//! Pixel data model
//!
//! This module contains the values every engine works on:
//! - Colours with validated and saturating construction
//! - Fixed-size pixel grids with bounds-checked access
//! - Decoded images carrying their container metadata
//! - Flat shapes that paint regions of a grid

/// Immutable RGBA colour values
pub mod color;
/// Pixel grid storage and bounds checking
pub mod grid;
/// Grid plus format and colour-space tags
pub mod image;
/// Rectangles and the painting interface
pub mod shape;

pub use color::Color;
pub use grid::PixelGrid;
pub use image::{ColorType, Image};
pub use shape::{Paint, Rectangle};
