//! Immutable RGBA pixel value with validated and saturating constructors

use crate::io::error::{Result, invalid_parameter};

/// Smallest legal channel value
pub const CHANNEL_MIN: i32 = 0;
/// Largest legal channel value
pub const CHANNEL_MAX: i32 = 255;

/// Four channel pixel value (R, G, B, A)
///
/// Channels are stored as `u8`, so every `Color` is in range by construction.
/// Only the three colour channels take part in filtering, transforms and
/// dithering; alpha is carried along unchanged unless an operation states otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    /// Number of channels iterated by filters, transforms and dither
    pub const CHANNELS: usize = 3;

    /// Opaque black, also the padding colour for convolution
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    /// Opaque white
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Build a colour from channel bytes
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque colour from channel bytes
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Build a colour from integer channels, rejecting anything outside [0, 255]
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first out-of-range channel
    pub fn new(r: i32, g: i32, b: i32, a: i32) -> Result<Self> {
        Ok(Self {
            r: checked_channel("red", r)?,
            g: checked_channel("green", g)?,
            b: checked_channel("blue", b)?,
            a: checked_channel("alpha", a)?,
        })
    }

    /// Build a colour from a component slice of exactly four values
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the slice does not hold four components
    /// or any component is outside [0, 255]
    pub fn from_components(components: &[i32]) -> Result<Self> {
        match *components {
            [r, g, b, a] => Self::new(r, g, b, a),
            _ => Err(invalid_parameter(
                "components",
                &components.len(),
                &"exactly four components (R, G, B, A) are required",
            )),
        }
    }

    /// Build a colour from integer channels, saturating each into [0, 255]
    pub fn clamped(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self {
            r: saturate(r),
            g: saturate(g),
            b: saturate(b),
            a: saturate(a),
        }
    }

    /// Derive a colour with new RGB channels and this colour's alpha
    ///
    /// Channels are saturated into [0, 255].
    pub fn with_rgb(self, rgb: [i32; 3]) -> Self {
        let [r, g, b] = rgb;
        Self::clamped(r, g, b, i32::from(self.a))
    }

    /// Derive a colour with a replaced alpha channel
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Red channel
    pub const fn red(self) -> u8 {
        self.r
    }

    /// Green channel
    pub const fn green(self) -> u8 {
        self.g
    }

    /// Blue channel
    pub const fn blue(self) -> u8 {
        self.b
    }

    /// Alpha channel
    pub const fn alpha(self) -> u8 {
        self.a
    }

    /// The three colour channels in R, G, B order
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// All four components in R, G, B, A order
    pub const fn components(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(pixel: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self::rgba(r, g, b, a)
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        Self(color.components())
    }
}

fn saturate(value: i32) -> u8 {
    num_traits::clamp(value, CHANNEL_MIN, CHANNEL_MAX) as u8
}

fn checked_channel(channel: &'static str, value: i32) -> Result<u8> {
    if (CHANNEL_MIN..=CHANNEL_MAX).contains(&value) {
        Ok(value as u8)
    } else {
        Err(invalid_parameter(
            channel,
            &value,
            &"channel values must lie in [0, 255]",
        ))
    }
}
