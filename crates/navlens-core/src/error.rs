//! Error types for the navlens engine.
//!
//! The metrics and scoring engines themselves are total functions and never
//! return errors; this type covers the edges where untrusted input is
//! decoded (for example the CLI reading NAV files).

use thiserror::Error;

/// The main error type for navlens operations.
#[derive(Debug, Error)]
pub enum NavlensError {
    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error when a date string cannot be parsed in any supported format.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Error when data is insufficient for the requested operation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Error from JSON serialization or deserialization.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for NavlensError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for NavlensError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for navlens operations.
pub type Result<T> = std::result::Result<T, NavlensError>;
