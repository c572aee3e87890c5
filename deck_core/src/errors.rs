//! # Error Types
//!
//! Structured error types for deck_core. The calculation engine itself is
//! total (pure arithmetic over pre-validated inputs, see [`crate::geometry`]),
//! so errors only arise at the effectful boundary: quote export and
//! frontend input handling.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::errors::{DeckError, DeckResult};
//!
//! fn validate_width(width_m: f64) -> DeckResult<()> {
//!     if width_m <= 0.0 {
//!         return Err(DeckError::invalid_input(
//!             "width",
//!             width_m.to_string(),
//!             "Width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for deck_core operations
pub type DeckResult<T> = Result<T, DeckError>;

/// Structured error type for export and boundary operations.
///
/// Each variant provides specific context about what went wrong, enabling
/// programmatic handling by frontends.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DeckError {
    /// An input value is invalid (out of range, non-finite, etc.)
    ///
    /// Raised by frontend validation helpers, never by the engine itself:
    /// the engine only receives configs that already passed the boundary.
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Quote document rendering failed (Typst compile or PDF encode)
    #[error("Render failed: {stage} - {reason}")]
    RenderFailed { stage: String, reason: String },

    /// File I/O error while writing the export artifact
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DeckError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DeckError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a RenderFailed error
    pub fn render_failed(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        DeckError::RenderFailed {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DeckError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DeckError::InvalidInput { .. } => "INVALID_INPUT",
            DeckError::RenderFailed { .. } => "RENDER_FAILED",
            DeckError::FileError { .. } => "FILE_ERROR",
            DeckError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = DeckError::invalid_input("width", "-2.0", "Width must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: DeckError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DeckError::render_failed("typst", "boom").error_code(),
            "RENDER_FAILED"
        );
        assert_eq!(
            DeckError::file_error("write", "devis.txt", "denied").error_code(),
            "FILE_ERROR"
        );
    }
}
