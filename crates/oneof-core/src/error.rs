//! Error types for union encoding and decoding
//!
//! Only failures that concern the union as a whole surface here. A variant
//! that fails to parse is a mismatch, not an error, and never escapes the
//! codec on its own.

use thiserror::Error;

use crate::validation::ValidationFinding;

/// Result type alias for union decoding
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// Failure to turn JSON input into a populated union value
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The top-level token is neither an object nor an array start, or the
    /// input is not JSON at all.
    #[error("malformed input for {union}: expected a JSON object or array, found {found}")]
    MalformedInput { union: &'static str, found: String },

    /// Well-formed JSON that none of the declared variants accepts.
    #[error("no variant of {union} matches the input (tried {})", .tried.join(", "))]
    NoMatchingVariant {
        union: &'static str,
        tried: Vec<&'static str>,
    },

    /// Decoded, but the validation hook reported findings.
    #[error(
        "{union} failed validation: {}",
        .findings.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    )]
    Invalid {
        union: &'static str,
        findings: Vec<ValidationFinding>,
    },
}

/// Failure to write a union value as JSON
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}
