//! Error types for the Glossa library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`GlossaError`] enum defined here.
//!
//! # Examples
//!
//! ```
//! use glossa::error::{GlossaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GlossaError::invalid_input("dictionary has no entries"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Glossa operations.
#[derive(Error, Debug)]
pub enum GlossaError {
    /// I/O errors (file loading, output writing)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, invalid patterns)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A matching pass was requested with input that cannot be matched against
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with GlossaError.
pub type Result<T> = std::result::Result<T, GlossaError>;

impl GlossaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        GlossaError::Analysis(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        GlossaError::InvalidInput(msg.into())
    }

    /// Create a generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        GlossaError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GlossaError::invalid_input("dictionary has no entries");
        assert_eq!(err.to_string(), "Invalid input: dictionary has no entries");

        let err = GlossaError::analysis("bad pattern");
        assert_eq!(err.to_string(), "Analysis error: bad pattern");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing file");
        let err: GlossaError = io_err.into();
        assert!(matches!(err, GlossaError::Io(_)));
    }
}
