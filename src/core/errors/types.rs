//! Core error types for the label-overlay pipeline.
//!
//! This module defines the fundamental error types used throughout the system,
//! including the main LabelError enum and the LabelResult alias.
//! A detection that simply is not present in the image is *not* an error;
//! that case is modeled by `MatchResult::NotFound` and always renders.

use thiserror::Error;

/// Convenient result alias used across the pipeline.
pub type LabelResult<T> = Result<T, LabelError>;

/// Enum representing the errors that can occur in the label-overlay pipeline.
///
/// This enum covers bad formatting parameters, font resource failures,
/// recognition backend failures, and image decoding failures. All variants
/// surface to the pipeline caller uncaught; there are no internal retries.
#[derive(Error, Debug)]
pub enum LabelError {
    /// Error indicating invalid input (e.g., a zero column width).
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// Error indicating the font resource could not be loaded or parsed.
    #[error("font load failed: {message}")]
    InvalidFont {
        /// A message describing the font failure.
        message: String,
    },

    /// Error from the recognition backend (network failure, non-success
    /// status, or a malformed response body).
    #[error("recognition backend: {context}")]
    Backend {
        /// Additional context about where the backend call failed.
        context: String,
        /// The underlying error, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Error occurred while decoding image bytes.
    #[error("image decode")]
    Decode(#[source] image::ImageError),

    /// IO error (e.g., reading a local image file).
    #[error("io")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for LabelError {
    /// Converts an image::ImageError to LabelError::Decode.
    fn from(error: image::ImageError) -> Self {
        Self::Decode(error)
    }
}

impl LabelError {
    /// Creates an InvalidInput error from a message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an InvalidFont error from a message.
    pub fn invalid_font(message: impl Into<String>) -> Self {
        Self::InvalidFont {
            message: message.into(),
        }
    }

    /// Wraps an underlying error from the recognition backend.
    pub fn backend(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Backend {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a Backend error with context only (e.g., a non-success HTTP
    /// status where no underlying error value exists).
    pub fn backend_context(context: impl Into<String>) -> Self {
        Self::Backend {
            context: context.into(),
            source: None,
        }
    }
}
