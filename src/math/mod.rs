//! Mathematical utilities shared by the engines

/// Rounding, truncation and distance helpers with fixed tie-breaking
pub mod rounding;
