//! RUC prefix classification.

use std::fmt;

use serde::Serialize;

use crate::core::{TAX_ID_LEN, is_exact_digits};

/// Taxpayer kind encoded in the first two RUC digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RucKind {
    /// `10`: natural person with business income.
    NaturalPerson,
    /// `20`: legal entity.
    LegalEntity,
    /// `15`, `16`, `17`: other registrants (non-domiciled, foreign ids, ...).
    Other,
}

impl RucKind {
    /// Classify a well-formed RUC; `None` if malformed or the prefix is unknown.
    pub fn from_ruc(ruc: &str) -> Option<Self> {
        let ruc = ruc.trim();
        if !is_exact_digits(ruc, TAX_ID_LEN) {
            return None;
        }
        match &ruc[..2] {
            "10" => Some(Self::NaturalPerson),
            "20" => Some(Self::LegalEntity),
            "15" | "16" | "17" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Error returned when a RUC fails prefix validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RucFormatError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for RucFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid RUC '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for RucFormatError {}

/// Validate a RUC's length and prefix. The value is reported, never rewritten.
pub fn validate_ruc_prefix(ruc: &str) -> Result<RucKind, RucFormatError> {
    let trimmed = ruc.trim();
    if !is_exact_digits(trimmed, TAX_ID_LEN) {
        return Err(RucFormatError {
            value: trimmed.into(),
            reason: format!("expected {TAX_ID_LEN} digits"),
        });
    }
    RucKind::from_ruc(trimmed).ok_or_else(|| RucFormatError {
        value: trimmed.into(),
        reason: format!("unknown prefix '{}'", &trimmed[..2]),
    })
}
