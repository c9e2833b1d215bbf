//! Error types for Slugline operations.
//!
//! A single `Error` enum and `Result<T>` alias shared by every Slugline
//! crate. A slug that matches nothing is *not* an error; see
//! `slugline_page::PageData`.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur in Slugline operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error tied to a specific path.
    #[error("I/O error at {}: {source}", path.display())]
    IoWithPath {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid data or format.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Front-matter that could not be parsed.
    #[error("Invalid front-matter in {}: {message}", path.display())]
    Frontmatter {
        /// File carrying the front-matter.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Wrap a bare I/O error.
    pub fn io(err: impl Into<std::io::Error>) -> Self {
        Self::Io(err.into())
    }

    /// Wrap an I/O error with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
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

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Create a front-matter error for `path`.
    pub fn frontmatter(path: impl AsRef<Path>, msg: impl Into<String>) -> Self {
        Self::Frontmatter {
            path: path.as_ref().to_path_buf(),
            message: msg.into(),
        }
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Returns true for I/O failures, with or without a path.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::IoWithPath { .. })
    }
}

/// Result type alias using Slugline's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_with_path_display() {
        let err = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            "/content/snippets",
        );
        let msg = err.to_string();
        assert!(msg.contains("/content/snippets"));
        assert!(msg.contains("gone"));
        assert!(err.is_io());
    }

    #[test]
    fn test_from_io_error() {
        let err: Error = std::io::Error::other("boom").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_io());
    }

    #[test]
    fn test_frontmatter_display() {
        let err = Error::frontmatter("posts/a.md", "expected a mapping");
        assert_eq!(
            err.to_string(),
            "Invalid front-matter in posts/a.md: expected a mapping"
        );
        assert!(!err.is_io());
    }

    #[test]
    fn test_constructors() {
        assert!(matches!(Error::config("x"), Error::Config(_)));
        assert!(matches!(Error::not_found("x"), Error::NotFound(_)));
        assert!(matches!(Error::invalid_data("x"), Error::InvalidData(_)));
        assert!(matches!(Error::serialization("x"), Error::Serialization(_)));
    }
}
