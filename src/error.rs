//! Error types for Ordinate.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Ordinate operations.
pub type Result<T> = std::result::Result<T, OrdinateError>;

/// Errors that can occur in Ordinate.
#[derive(Debug, Error)]
pub enum OrdinateError {
    /// Expression failed to parse or evaluate.
    #[error("Expression error: {0}")]
    Expr(String),

    /// Failed to write an exported image.
    #[error("Failed to export image to {path}")]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl OrdinateError {
    /// Create an Export error.
    pub fn export(path: PathBuf, source: image::ImageError) -> Self {
        Self::Export { path, source }
    }
}

impl From<meval::Error> for OrdinateError {
    fn from(err: meval::Error) -> Self {
        Self::Expr(err.to_string())
    }
}
