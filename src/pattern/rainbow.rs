//! Rainbow stripes in red, orange, yellow, green, blue, indigo and violet order
//!
//! Stripes stack along one axis and span the whole of the other. With repeat
//! the colours cycle until the axis is full and the last stripe is cut short.
//! Without repeat at most seven stripes are drawn: if all seven fit they are
//! centred between equal white margins, otherwise as many as fit are drawn
//! from the start plus one truncated stripe for any remainder.

use std::fmt;
use std::str::FromStr;

use crate::io::configuration::RAINBOW_BANDS;
use crate::io::error::{RasterError, Result, invalid_parameter, unsupported};
use crate::model::{Color, Paint, PixelGrid, Rectangle};
use crate::pattern::Pattern;

/// Band colours in drawing order
pub const RAINBOW_COLORS: [Color; RAINBOW_BANDS] = [
    Color::rgb(255, 0, 0),
    Color::rgb(255, 127, 0),
    Color::rgb(255, 255, 0),
    Color::rgb(0, 255, 0),
    Color::rgb(0, 0, 255),
    Color::rgb(46, 43, 95),
    Color::rgb(139, 0, 255),
];

/// Direction the stripes run in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Stripes run left to right and stack down the height
    Horizontal,
    /// Stripes run top to bottom and stack across the width
    Vertical,
}

impl TryFrom<char> for Orientation {
    type Error = RasterError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'H' | 'h' => Ok(Self::Horizontal),
            'V' | 'v' => Ok(Self::Vertical),
            _ => Err(unsupported("orientation", &c)),
        }
    }
}

impl FromStr for Orientation {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Ok(Self::Horizontal),
            "v" | "vertical" => Ok(Self::Vertical),
            _ => Err(unsupported("orientation", &s)),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Rainbow canvas and stripe parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rainbow {
    width: usize,
    height: usize,
    stripe_size: usize,
    orientation: Orientation,
    repeat: bool,
}

impl Rainbow {
    /// Configure a rainbow
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the width, height or stripe size is zero
    pub fn new(
        width: usize,
        height: usize,
        stripe_size: usize,
        orientation: Orientation,
        repeat: bool,
    ) -> Result<Self> {
        for (parameter, value) in [("width", width), ("height", height), ("stripe_size", stripe_size)]
        {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
        }
        Ok(Self {
            width,
            height,
            stripe_size,
            orientation,
            repeat,
        })
    }

    /// Canvas width
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Canvas height
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Stripe direction
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Length of the axis the stripes stack along
    pub const fn stacking_length(&self) -> usize {
        match self.orientation {
            Orientation::Horizontal => self.height,
            Orientation::Vertical => self.width,
        }
    }

    /// Number of stripes drawn, including a truncated last one
    pub const fn stripe_count(&self) -> usize {
        let length = self.stacking_length();
        let full = length / self.stripe_size;
        let partial = if length % self.stripe_size > 0 { 1 } else { 0 };

        if self.repeat {
            full + partial
        } else if full >= RAINBOW_BANDS {
            RAINBOW_BANDS
        } else {
            full + partial
        }
    }

    /// White margin before and after the stripes
    ///
    /// Only a non-repeating rainbow with room for all seven bands is centred.
    /// An odd leftover pixel line stays white at the far end.
    pub const fn padding(&self) -> usize {
        let length = self.stacking_length();
        if !self.repeat && length / self.stripe_size >= RAINBOW_BANDS {
            (length - RAINBOW_BANDS * self.stripe_size) / 2
        } else {
            0
        }
    }

    /// Stripes and margins in painting order
    pub fn layout(&self) -> Vec<Rectangle> {
        let length = self.stacking_length();
        let padding = self.padding();
        let mut bands = Vec::with_capacity(self.stripe_count() + 2);

        if padding > 0 {
            bands.push(self.band(0, padding, Color::WHITE));
        }

        let mut offset = padding;
        for color in RAINBOW_COLORS.iter().cycle().take(self.stripe_count()) {
            let thickness = self.stripe_size.min(length - offset);
            bands.push(self.band(offset, thickness, *color));
            offset += thickness;
        }

        if padding > 0 {
            bands.push(self.band(offset, padding, Color::WHITE));
        }
        bands
    }

    fn band(&self, offset: usize, thickness: usize, color: Color) -> Rectangle {
        match self.orientation {
            Orientation::Horizontal => Rectangle::new(0, offset, self.width, thickness, color),
            Orientation::Vertical => Rectangle::new(offset, 0, thickness, self.height, color),
        }
    }
}

impl Pattern for Rainbow {
    fn draw(&self) -> Result<PixelGrid> {
        log::debug!(
            "drawing {} rainbow {}x{} with {} stripes of {}px",
            self.orientation,
            self.width,
            self.height,
            self.stripe_count(),
            self.stripe_size
        );
        let mut grid = PixelGrid::filled(self.height, self.width, Color::WHITE)?;
        for band in self.layout() {
            band.paint(&mut grid)?;
        }
        Ok(grid)
    }
}
