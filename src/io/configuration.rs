//! Engine defaults and host configuration constants

// Mosaic sampling
/// Fixed RNG seed so repeated mosaics of one image look the same
pub const DEFAULT_MOSAIC_RNG_SEED: u64 = 100;
/// Seed count used when none is given
pub const DEFAULT_MOSAIC_SEED_COUNT: usize = 1000;

// Pattern defaults for the CLI
/// Side length of the whole checkerboard in pixels
pub const DEFAULT_CHECKERBOARD_SIZE: usize = 160;
/// Side length of one checkerboard square in pixels
pub const DEFAULT_CHECKERBOARD_SQUARE: usize = 20;
/// Rainbow canvas width
pub const DEFAULT_RAINBOW_WIDTH: usize = 700;
/// Rainbow canvas height
pub const DEFAULT_RAINBOW_HEIGHT: usize = 700;
/// Thickness of one rainbow stripe
pub const DEFAULT_RAINBOW_STRIPE: usize = 100;
/// Requested flag width in pixels
pub const DEFAULT_FLAG_WIDTH: usize = 640;

/// Number of colour bands in a rainbow
pub const RAINBOW_BANDS: usize = 7;

// Output settings
/// Format tag attached to generated patterns
pub const PATTERN_FORMAT: &str = "png";
/// Extensions picked up when processing a directory
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
