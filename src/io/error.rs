//! Error types for layout loading and map export
//!
//! The geometry functions themselves are total. Errors only arise at the
//! edges: reading layout images, writing maps, walking directories, and
//! rejecting parameters that would blow up memory.

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for I/O-facing operations
#[derive(Debug)]
pub enum GridError {
    /// Failed to load a layout image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a generated map to disk
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

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Layout image has no occupied pixel
    EmptyLayout {
        /// Path to the layout image
        path: PathBuf,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load layout '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(f, "Failed to export map to '{}': {source}", path.display())
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyLayout { path } => {
                write!(f, "Layout '{}' has no occupied cells", path.display())
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidParameter { .. } | Self::EmptyLayout { .. } => None,
        }
    }
}

/// Convenience type alias for I/O results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Reject a target path, recording it as the offending value
pub fn invalid_path(path: &Path, reason: &str) -> GridError {
    invalid_parameter("path", &path.display(), &reason)
}

/// Wrap a filesystem failure with the path it happened on
pub fn file_system(path: &Path, operation: &'static str, source: std::io::Error) -> GridError {
    GridError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
