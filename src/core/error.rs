use serde::Serialize;
use thiserror::Error;

/// Errors raised while building gate configuration.
///
/// Form input never produces an `Err`: classification is total and
/// validation reports problems as [`ValidationError`] values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ComprobanteError {
    /// Configuration is unusable (e.g. no search label for a document type).
    #[error("configuration error: {0}")]
    Config(String),
}

/// Why a form field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    /// The field is required and empty.
    Required,
    /// The RUC is not exactly 11 digits.
    InvalidTaxIdLength,
    /// The DNI is not exactly 8 digits.
    InvalidNationalIdLength,
}

/// A single validation error with form field name and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Form field name as posted by the page (e.g. "ruc").
    pub field: String,
    /// Machine-readable reason, so the page can pick a field-specific message.
    pub reason: ValidationReason,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    /// Field is required but empty.
    pub fn required(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("{field} is required");
        Self {
            field,
            reason: ValidationReason::Required,
            message,
        }
    }

    /// Create a validation error with an explicit reason.
    pub fn new(
        field: impl Into<String>,
        reason: ValidationReason,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            reason,
            message: message.into(),
        }
    }
}
