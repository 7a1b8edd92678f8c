//! Packing error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while walking inputs or writing generated sources.
#[derive(Debug, Error)]
pub enum PackError {
    /// An input path could not be traversed or read
    #[error("Failed to read {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An exclusion pattern is not a valid regular expression
    #[error("Invalid exclude pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Output exists and overwriting was not requested
    #[error("Output file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Output path names an existing directory
    #[error("Output path is a directory: {}", .0.display())]
    TargetIsDirectory(PathBuf),

    /// Output path cannot be used
    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    /// I/O error while encoding or writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file error
    #[error("{0}")]
    Config(#[from] ConfigError),
}
