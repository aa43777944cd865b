//! Error types for Syllabus operations.
//!
//! This module provides the common `Error` type and `Result<T>` alias used
//! across all Syllabus crates. Uses `thiserror` for derive macros.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using Syllabus's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Syllabus operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error without path context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error tied to a specific file or directory.
    #[error("I/O error at {}: {source}", path.display())]
    IoWithPath {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested item or path does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Content could not be parsed (frontmatter, dates, config files).
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Create an I/O error without path context.
    pub fn io(err: std::io::Error) -> Self {
        Self::Io(err)
    }

    /// Create an I/O error that records the path being accessed.
    pub fn io_with_path(err: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source: err,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Returns `true` if this error means the target does not exist.
    ///
    /// Covers both [`Error::NotFound`] and I/O errors of kind
    /// [`std::io::ErrorKind::NotFound`].
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Io(e) | Self::IoWithPath { source: e, .. } => {
                e.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}
