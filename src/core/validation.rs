use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::document::{NATIONAL_ID_LEN, TAX_ID_LEN, is_exact_digits};
use super::error::{ValidationError, ValidationReason};
use super::invoice::{FieldRequirement, InvoiceMode, LEGAL_NAME_FIELD, TAX_ID_FIELD};

/// Form field holding a DNI on Boleta checkouts.
pub const NATIONAL_ID_FIELD: &str = "dni";

/// Heading line of the aggregated message when any required field is empty.
pub const REQUIRED_SUMMARY: &str = "Some required fields are empty.";

/// Plain copy of the checkout form at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    /// Field name to current value.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    /// Checked state of the invoice toggle.
    #[serde(default)]
    pub wants_invoice: bool,
}

impl FormSnapshot {
    pub fn new(wants_invoice: bool) -> Self {
        Self {
            fields: BTreeMap::new(),
            wants_invoice,
        }
    }

    /// Builder-style field setter.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Trimmed value of a field; missing fields read as empty.
    pub fn value(&self, field: &str) -> &str {
        self.fields.get(field).map(|v| v.trim()).unwrap_or("")
    }

    pub fn mode(&self) -> InvoiceMode {
        InvoiceMode::from_wants_invoice(self.wants_invoice)
    }

    /// Mirror what the page does after an invoice toggle: track the new
    /// checked state and empty the Factura fields when asked to.
    pub fn apply_requirement(&mut self, requirement: &FieldRequirement) {
        self.wants_invoice = requirement.required;
        if requirement.clear_values {
            for field in requirement.fields() {
                self.fields.insert(field.to_string(), String::new());
            }
        }
    }
}

/// Outcome of validating a [`FormSnapshot`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Names of the fields to highlight, in error order.
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    /// Errors for a single field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn has_reason(&self, field: &str, reason: ValidationReason) -> bool {
        self.for_field(field).any(|e| e.reason == reason)
    }

    /// One message for the whole form: a single summary line for all empty
    /// required fields, then one line per field-specific problem.
    pub fn message(&self) -> Option<String> {
        if self.is_valid() {
            return None;
        }
        let mut lines = Vec::new();
        if self
            .errors
            .iter()
            .any(|e| e.reason == ValidationReason::Required)
        {
            lines.push(REQUIRED_SUMMARY.to_string());
        }
        lines.extend(
            self.errors
                .iter()
                .filter(|e| e.reason != ValidationReason::Required)
                .map(|e| e.message.clone()),
        );
        Some(lines.join("\n"))
    }
}

/// Validate a checkout snapshot.
///
/// Returns all errors found, not just the first. `required_fields` are the
/// always-mandatory fields; the Factura fields are added when the snapshot's
/// invoice toggle is checked.
pub fn validate_form(snapshot: &FormSnapshot, required_fields: &[String]) -> ValidationResult {
    validate_form_in_mode(snapshot, snapshot.mode(), required_fields)
}

/// Validate a snapshot under an explicit invoice mode, ignoring the
/// snapshot's own toggle flag.
pub fn validate_form_in_mode(
    snapshot: &FormSnapshot,
    mode: InvoiceMode,
    required_fields: &[String],
) -> ValidationResult {
    let mut errors = Vec::new();

    for field in required_fields {
        if snapshot.value(field).is_empty() {
            errors.push(ValidationError::required(field.as_str()));
        }
    }

    match mode {
        InvoiceMode::Factura => {
            if snapshot.value(LEGAL_NAME_FIELD).is_empty() {
                errors.push(ValidationError::required(LEGAL_NAME_FIELD));
            }
            let ruc = snapshot.value(TAX_ID_FIELD);
            if ruc.is_empty() {
                errors.push(ValidationError::required(TAX_ID_FIELD));
            } else if !is_exact_digits(ruc, TAX_ID_LEN) {
                errors.push(ValidationError::new(
                    TAX_ID_FIELD,
                    ValidationReason::InvalidTaxIdLength,
                    format!("RUC must be exactly {TAX_ID_LEN} digits"),
                ));
            }
        }
        InvoiceMode::Boleta => {
            let dni = snapshot.value(NATIONAL_ID_FIELD);
            if !dni.is_empty() && !is_exact_digits(dni, NATIONAL_ID_LEN) {
                errors.push(ValidationError::new(
                    NATIONAL_ID_FIELD,
                    ValidationReason::InvalidNationalIdLength,
                    format!("DNI must be exactly {NATIONAL_ID_LEN} digits"),
                ));
            }
        }
    }

    ValidationResult { errors }
}
