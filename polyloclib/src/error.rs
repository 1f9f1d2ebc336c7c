//! Error types for polyloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a LOC count.
///
/// Only failures that make the whole run meaningless surface here. A file
/// that vanishes or cannot be read in the middle of a walk is logged and
/// skipped instead.
#[derive(Error, Debug)]
pub enum PolylocError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Invalid regular expression (filters and regex line comments)
    #[error("invalid regular expression '{pattern}': {message}")]
    InvalidRegex { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// A root path could not be walked
    #[error("failed to walk '{path}': {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// No language could be determined for the file
    #[error("unable to determine the language of: {0}")]
    UnknownLanguage(PathBuf),

    /// The worker pool could not be created
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PolylocError {
    pub(crate) fn invalid_regex(pattern: &str, err: regex::Error) -> Self {
        Self::InvalidRegex {
            pattern: pattern.to_string(),
            message: err.to_string(),
        }
    }
}
