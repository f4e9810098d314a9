//! National flags described at a minimal integer scale and drawn at any
//! whole-number multiple of it
//!
//! A [`FlagLayout`] holds the smallest width at which a flag's proportions
//! are exact, the height derived from its aspect ratio, and the rectangles
//! that make up the design. [`Flag`] picks the multiple closest to a requested
//! width and paints every rectangle scaled by it, later shapes over earlier ones.

use std::fmt;
use std::str::FromStr;

use crate::io::error::{RasterError, Result, invalid_parameter, unsupported};
use crate::math::rounding::round_half_up;
use crate::model::{Color, Paint, PixelGrid, Rectangle};
use crate::pattern::Pattern;

/// Countries with a built-in layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    /// Blue, white and red vertical bands
    France,
    /// Nine stripes with a cross in the canton
    Greece,
    /// White cross on a red square
    Switzerland,
}

impl Country {
    /// Build this country's minimal-scale layout
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a built-in shape exceeds the layout
    /// bounds, which would indicate a broken table
    pub fn layout(self) -> Result<FlagLayout> {
        match self {
            Self::France => france(),
            Self::Greece => greece(),
            Self::Switzerland => switzerland(),
        }
    }
}

impl FromStr for Country {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "france" => Ok(Self::France),
            "greece" => Ok(Self::Greece),
            "switzerland" => Ok(Self::Switzerland),
            _ => Err(unsupported("country", &s)),
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::France => write!(f, "france"),
            Self::Greece => write!(f, "greece"),
            Self::Switzerland => write!(f, "switzerland"),
        }
    }
}

/// Height matching `width` at `aspect_ratio` (width / height)
///
/// Exact results are kept. A fraction above one half rounds up; anything
/// else rounds half-up and then adds one, so the design is never cut short.
pub fn base_height(width: usize, aspect_ratio: f64) -> usize {
    let raw = width as f64 / aspect_ratio;
    let fraction = raw - raw.trunc();
    let rounded = round_half_up(raw).max(0) as usize;
    if fraction == 0.0 || fraction > 0.5 {
        rounded
    } else {
        rounded + 1
    }
}

/// Minimal-scale flag design
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagLayout {
    base_width: usize,
    base_height: usize,
    shapes: Vec<Rectangle>,
}

impl FlagLayout {
    /// Empty layout `base_width` wide with the height implied by `aspect_ratio`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the width is zero or the aspect ratio is
    /// not a positive finite number
    pub fn new(base_width: usize, aspect_ratio: f64) -> Result<Self> {
        if base_width == 0 {
            return Err(invalid_parameter(
                "base_width",
                &base_width,
                &"flag width must be positive",
            ));
        }
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(invalid_parameter(
                "aspect_ratio",
                &aspect_ratio,
                &"aspect ratio must be positive",
            ));
        }
        Ok(Self {
            base_width,
            base_height: base_height(base_width, aspect_ratio),
            shapes: Vec::new(),
        })
    }

    /// Append a shape, checking it fits inside the base bounds
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the shape reaches past the base width or height
    pub fn add(&mut self, shape: Rectangle) -> Result<()> {
        if shape.right() > self.base_width || shape.bottom() > self.base_height {
            return Err(invalid_parameter(
                "shape",
                &format!("{shape:?}"),
                &format!(
                    "shape exceeds flag bounds {}x{}",
                    self.base_width, self.base_height
                ),
            ));
        }
        self.shapes.push(shape);
        Ok(())
    }

    /// Builder form of [`FlagLayout::add`]
    ///
    /// # Errors
    ///
    /// Same conditions as [`FlagLayout::add`]
    pub fn with_shape(mut self, shape: Rectangle) -> Result<Self> {
        self.add(shape)?;
        Ok(self)
    }

    /// Minimal width
    pub const fn base_width(&self) -> usize {
        self.base_width
    }

    /// Minimal height
    pub const fn base_height(&self) -> usize {
        self.base_height
    }

    /// Shapes in painting order
    pub fn shapes(&self) -> &[Rectangle] {
        &self.shapes
    }
}

/// A layout scaled to a requested width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    layout: FlagLayout,
    required_width: usize,
}

impl Flag {
    /// Flag of `country` scaled towards `required_width`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `required_width` is below the country's
    /// base width
    pub fn new(country: Country, required_width: usize) -> Result<Self> {
        Self::from_layout(country.layout()?, required_width)
    }

    /// Flag from a custom layout
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `required_width` is below the layout's
    /// base width
    pub fn from_layout(layout: FlagLayout, required_width: usize) -> Result<Self> {
        if required_width < layout.base_width() {
            return Err(invalid_parameter(
                "required_width",
                &required_width,
                &format!(
                    "required width cannot be less than the base width {}",
                    layout.base_width()
                ),
            ));
        }
        Ok(Self {
            layout,
            required_width,
        })
    }

    /// Borrow the minimal-scale layout
    pub const fn layout(&self) -> &FlagLayout {
        &self.layout
    }

    /// Whole-number multiple of the base size closest to the requested width
    pub fn scale_factor(&self) -> usize {
        let ratio = self.required_width as f32 / self.layout.base_width() as f32;
        round_half_up(ratio).max(1) as usize
    }

    /// Output size as (height, width)
    pub fn dimensions(&self) -> (usize, usize) {
        let factor = self.scale_factor();
        (
            self.layout.base_height() * factor,
            self.layout.base_width() * factor,
        )
    }
}

impl Pattern for Flag {
    fn draw(&self) -> Result<PixelGrid> {
        if self.layout.shapes().is_empty() {
            return Err(RasterError::EmptyImage {
                reason: "flag layout has no shapes".to_string(),
            });
        }

        let factor = self.scale_factor();
        let (height, width) = self.dimensions();
        log::debug!("drawing {width}x{height} flag at scale {factor}");

        let mut grid = PixelGrid::filled(height, width, Color::WHITE)?;
        for shape in self.layout.shapes() {
            shape.scaled(factor).paint(&mut grid)?;
        }
        Ok(grid)
    }
}

fn france() -> Result<FlagLayout> {
    let blue = Color::rgb(0, 85, 164);
    let red = Color::rgb(239, 65, 53);

    let layout = FlagLayout::new(100, 1.5)?;
    let height = layout.base_height();
    layout
        .with_shape(Rectangle::new(0, 0, 30, height, blue))?
        .with_shape(Rectangle::new(30, 0, 33, height, Color::WHITE))?
        .with_shape(Rectangle::new(63, 0, 37, height, red))
}

fn greece() -> Result<FlagLayout> {
    let blue = Color::rgb(0, 91, 174);
    let white = Color::WHITE;

    let mut layout = FlagLayout::new(27, 1.5)?;
    for i in 0..9 {
        let color = if i % 2 == 0 { blue } else { white };
        layout.add(Rectangle::new(0, 2 * i, 27, 2, color))?;
    }

    // canton: four blue squares around a white cross
    for shape in [
        Rectangle::new(0, 0, 4, 4, blue),
        Rectangle::new(4, 0, 2, 4, white),
        Rectangle::new(6, 0, 4, 4, blue),
        Rectangle::new(0, 4, 10, 2, white),
        Rectangle::new(0, 6, 4, 4, blue),
        Rectangle::new(4, 6, 2, 4, white),
        Rectangle::new(6, 6, 4, 4, blue),
    ] {
        layout.add(shape)?;
    }
    Ok(layout)
}

fn switzerland() -> Result<FlagLayout> {
    let red = Color::rgb(255, 0, 0);

    let layout = FlagLayout::new(32, 1.0)?;
    let height = layout.base_height();
    layout
        .with_shape(Rectangle::new(0, 0, 32, height, red))?
        .with_shape(Rectangle::new(13, 6, 6, 7, Color::WHITE))?
        .with_shape(Rectangle::new(6, 13, 20, 6, Color::WHITE))?
        .with_shape(Rectangle::new(13, 19, 6, 7, Color::WHITE))
}
