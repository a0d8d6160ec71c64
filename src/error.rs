//! Error types for selector-scout.
//!
//! This module defines the error types returned by analysis and extraction.
//! An empty document or a page without links is never an error: those
//! produce an empty (or low-quality) ranking instead.

/// Error type for analysis and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration rejected before any work was done (e.g. `max_depth` < 1).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The CSS selector handed to the link extractor could not be parsed.
    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for selector-scout operations.
pub type Result<T> = std::result::Result<T, Error>;
