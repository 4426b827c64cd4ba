//! Error types and path context for packing operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all packing operations
///
/// An infeasible region is not an error: it is reported through
/// [`crate::algorithm::solver::SolverStatus::Failed`].
#[derive(Debug)]
pub enum PackError {
    /// Puzzle text could not be parsed
    Parse {
        /// 1-based line number of the offending line
        line: usize,
        /// Description of what is wrong with the line
        reason: String,
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

    /// A solved grid does not honour the packing invariants
    Verification {
        /// Description of the violated invariant
        reason: String,
    },

    /// Failed to write a rendered grid or animation
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// A global logger was already installed
    Logging {
        /// Error reported by the `log` facade
        source: log::SetLoggerError,
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

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line, reason } => {
                write!(f, "Parse error on line {line}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Verification { reason } => {
                write!(f, "Packing verification failed: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Logging { source } => {
                write!(f, "Failed to initialize logging: {source}")
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

impl std::error::Error for PackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::Logging { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<log::SetLoggerError> for PackError {
    fn from(source: log::SetLoggerError) -> Self {
        Self::Logging { source }
    }
}

/// Convenience type alias for packing results
pub type Result<T> = std::result::Result<T, PackError>;

impl From<std::io::Error> for PackError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Attaches the path and operation to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`PackError::FileSystem`] naming the path
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| PackError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PackError {
    PackError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a parse error for a 1-based line number
pub fn parse_error(line: usize, reason: &impl ToString) -> PackError {
    PackError::Parse {
        line,
        reason: reason.to_string(),
    }
}

/// Create a verification error
pub fn verification_error(reason: &impl ToString) -> PackError {
    PackError::Verification {
        reason: reason.to_string(),
    }
}
