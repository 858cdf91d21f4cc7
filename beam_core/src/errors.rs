//! # Error Types
//!
//! Structured error types for beam_core. Each variant carries enough context
//! for a front-end to surface a precise message and for callers to branch
//! programmatically.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn validate_span(span_m: f64) -> BeamResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(BeamError::invalid_input(
//!             "span_m",
//!             span_m.to_string(),
//!             "Beam length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for beam analysis and export operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// An input value is invalid (not a number, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Figure export failed (rendering or file I/O)
    #[error("Export failed for '{path}': {reason}")]
    ExportFailed { path: String, reason: String },
}

impl BeamError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BeamError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an ExportFailed error
    pub fn export_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::ExportFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::InvalidInput { .. } => "INVALID_INPUT",
            BeamError::ExportFailed { .. } => "EXPORT_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = BeamError::invalid_input("span_m", "-5.0", "Beam length must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: BeamError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            BeamError::invalid_input("a", "11", "out of range").error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            BeamError::export_failed("/tmp/x.png", "permission denied").error_code(),
            "EXPORT_FAILED"
        );
    }

    #[test]
    fn test_error_display() {
        let error = BeamError::invalid_input("load_position_m", "12", "outside [0, L]");
        let msg = error.to_string();
        assert!(msg.contains("load_position_m"));
        assert!(msg.contains("outside [0, L]"));
    }
}
