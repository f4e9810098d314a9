//! Error types for grid construction, engine parameters and host I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all raster operations
#[derive(Debug)]
pub enum RasterError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Source data is absent or cannot be represented as a pixel grid
    EmptyImage {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Operation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Filter, transform or dither matrix is malformed
    InvalidKernel {
        /// Which kind of matrix was rejected
        kernel: &'static str,
        /// Explanation of the defect
        reason: String,
    },

    /// Matrix size does not match the number of processed channels
    DimensionMismatch {
        /// Operation that detected the mismatch
        operation: &'static str,
        /// Size the operation requires
        expected: usize,
        /// Size that was supplied
        found: usize,
    },

    /// Pixel access or drawing outside the grid
    ///
    /// Coordinates are signed because neighbourhood and shape arithmetic
    /// can step past the top or left edge.
    OutOfBounds {
        /// Requested row
        row: i64,
        /// Requested column
        col: i64,
        /// Grid dimensions (height, width)
        dimensions: (usize, usize),
    },

    /// Identifier does not name a supported filter, transform, dither, flag or orientation
    Unsupported {
        /// Kind of identifier being resolved
        kind: &'static str,
        /// Identifier that failed to resolve
        value: String,
    },

    /// Failed to save processed image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::EmptyImage { reason } => {
                write!(f, "Empty image data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidKernel { kernel, reason } => {
                write!(f, "Invalid {kernel} matrix: {reason}")
            }
            Self::DimensionMismatch {
                operation,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Dimension mismatch in {operation}: expected {expected}, found {found}"
                )
            }
            Self::OutOfBounds {
                row,
                col,
                dimensions,
            } => {
                write!(
                    f,
                    "Position ({row}, {col}) is out of bounds (grid size {}x{})",
                    dimensions.0, dimensions.1
                )
            }
            Self::Unsupported { kind, value } => {
                write!(f, "Unsupported {kind} '{value}'")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for raster results
pub type Result<T> = std::result::Result<T, RasterError>;

impl From<image::ImageError> for RasterError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for RasterError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RasterError {
    RasterError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid kernel error
pub fn invalid_kernel(kernel: &'static str, reason: &impl ToString) -> RasterError {
    RasterError::InvalidKernel {
        kernel,
        reason: reason.to_string(),
    }
}

/// Create an unsupported identifier error
pub fn unsupported(kind: &'static str, value: &impl ToString) -> RasterError {
    RasterError::Unsupported {
        kind,
        value: value.to_string(),
    }
}
