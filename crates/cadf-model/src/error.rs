// error.rs — Validation errors for record assembly.
//
// Every variant is a programmer/input error surfaced at the offending
// builder call (or at the final completeness check in `build()`). Nothing
// here is retriable; a failed builder is abandoned, previously built
// values are unaffected.

use thiserror::Error;

/// A builder received a missing, blank, or conflicting field.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field was never set.
    #[error("{field} is required and was not set")]
    Missing { field: &'static str },

    /// A required string field was empty or whitespace-only.
    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    /// Two mutually exclusive fields — exactly one must be set.
    #[error("exactly one of {left} or {right} must be set, not both and not neither")]
    ExactlyOne {
        left: &'static str,
        right: &'static str,
    },

    /// The string is not one of the closed event type names.
    #[error("failed to find cadf event type by name: {0}")]
    UnknownEventType(String),

    /// A generic payload could not be serialized for type-erased storage.
    #[error("failed to serialize {field}: {source}")]
    Serialization {
        field: &'static str,
        source: serde_json::Error,
    },
}

/// Reject blank strings for required text fields.
pub(crate) fn ensure_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Blank { field })
    } else {
        Ok(())
    }
}

/// Unwrap a required builder field.
pub(crate) fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}
