//! Error types and exit status mapping for synthesis operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all raster and synthesis operations
#[derive(Debug)]
pub enum TileError {
    /// A buffer could not be allocated
    Resource {
        /// Number of `f32` elements requested
        elements: usize,
        /// Description of what failed
        reason: String,
    },

    /// Elementwise operation between buffers with different element counts
    SizeMismatch {
        /// Name of the elementwise operation
        operation: &'static str,
        /// Element count of the buffer being modified
        left: usize,
        /// Element count of the operand buffer
        right: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Requested feature is part of the configuration surface but has no implementation
    NotImplemented {
        /// Name of the missing feature
        feature: &'static str,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save generated image to disk
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

    /// Image shape or channel layout the codec boundary cannot represent
    UnsupportedImage {
        /// Description of what's wrong with the image
        reason: String,
    },

    /// Some canvas pixels received no window weight, so they cannot be normalised
    IncompleteCoverage {
        /// Pixels per plane left without weight
        uncovered: usize,
        /// Pixels per plane
        total: usize,
    },
}

impl TileError {
    /// Stable process exit status for this error kind
    ///
    /// Each kind maps to its own code so scripts can tell failures apart. Codes 1
    /// and 2 are left to generic failures and argument parsing.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Resource { .. } => 10,
            Self::SizeMismatch { .. } => 3,
            Self::InvalidParameter { .. } => 4,
            Self::NotImplemented { .. } => 5,
            Self::ImageLoad { .. } => 6,
            Self::ImageExport { .. } => 7,
            Self::FileSystem { .. } => 8,
            Self::UnsupportedImage { .. } => 9,
            Self::IncompleteCoverage { .. } => 11,
        }
    }
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resource { elements, reason } => {
                write!(f, "Failed to allocate {elements} elements: {reason}")
            }
            Self::SizeMismatch {
                operation,
                left,
                right,
            } => {
                write!(
                    f,
                    "Size mismatch in {operation}: {left} elements vs {right} elements"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NotImplemented { feature } => {
                write!(f, "{feature} is not implemented")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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
            Self::UnsupportedImage { reason } => {
                write!(f, "Unsupported image: {reason}")
            }
            Self::IncompleteCoverage { uncovered, total } => {
                write!(
                    f,
                    "{uncovered} of {total} pixels receive no window weight; raise scale or blur"
                )
            }
        }
    }
}

impl std::error::Error for TileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for synthesis results
pub type Result<T> = std::result::Result<T, TileError>;

impl From<std::io::Error> for TileError {
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
) -> TileError {
    TileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a size mismatch error for an elementwise operation
pub const fn size_mismatch(operation: &'static str, left: usize, right: usize) -> TileError {
    TileError::SizeMismatch {
        operation,
        left,
        right,
    }
}

/// Create an unsupported image error
pub fn unsupported_image(reason: &impl ToString) -> TileError {
    TileError::UnsupportedImage {
        reason: reason.to_string(),
    }
}
