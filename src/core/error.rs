use thiserror::Error;

/// Errors from invoice construction and draft editing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BoekError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Invalid draft operation (too many lines, out-of-range index).
    #[error("draft error: {0}")]
    Draft(String),
}

/// A single validation error with field path and message.
///
/// Callers surface these inline next to the offending form field;
/// submission is blocked while any remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "payment_date").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
