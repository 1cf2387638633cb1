//! Syntactic JSON validation of a single file.

use std::path::Path;

use serde::Serialize;
use serde::de::IgnoredAny;

/// Outcome of validating one file. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether the file is well-formed JSON.
    pub valid: bool,
    /// Parser, decoder or read error; `None` iff `valid`.
    pub error: Option<String>,
}

impl ValidationResult {
    /// A passing result.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// A failing result carrying `message`.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
        }
    }
}

/// Check that `bytes` is UTF-8 text holding exactly one strict JSON value.
///
/// Comments, trailing commas and trailing non-whitespace are rejected. The
/// value itself is discarded, so nesting depth and number range are not
/// limited.
#[must_use]
pub fn validate_bytes(bytes: &[u8]) -> ValidationResult {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => return ValidationResult::invalid(format!("invalid UTF-8: {e}")),
    };

    match serde_json::from_str::<IgnoredAny>(text) {
        Ok(_) => ValidationResult::ok(),
        Err(e) => ValidationResult::invalid(e.to_string()),
    }
}

/// Read `path` and validate its contents.
///
/// Read failures are reported as an invalid result, not as an error.
#[must_use]
pub fn validate_file(path: &Path) -> ValidationResult {
    match std::fs::read(path) {
        Ok(bytes) => validate_bytes(&bytes),
        Err(e) => ValidationResult::invalid(format!("failed to read file: {e}")),
    }
}
