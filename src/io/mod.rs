//! Host layer: errors, defaults, file I/O and the command line

/// Command-line parsing and batch processing
pub mod cli;
/// Engine defaults and host constants
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// Image decoding and encoding
pub mod image;
/// Terminal progress display
pub mod progress;
