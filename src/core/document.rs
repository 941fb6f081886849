//! Document-type detection from a raw DNI/RUC identifier.

use serde::{Deserialize, Serialize};

/// DNI length (Peruvian national identity document).
pub const NATIONAL_ID_LEN: usize = 8;

/// RUC length (Peruvian taxpayer registration number).
pub const TAX_ID_LEN: usize = 11;

/// Category of an identifier, derived from its digit count.
///
/// `Unknown` and `Incomplete` are "do nothing" sentinels: a caller must
/// leave any prior document-type selection untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentTypeCategory {
    /// No digits at all.
    Unknown,
    /// 8 digits (DNI).
    NationalId,
    /// 11 digits (RUC).
    TaxId,
    /// Some digits, but neither 8 nor 11.
    Incomplete,
}

impl DocumentTypeCategory {
    /// Digit count that identifies this category, if any.
    pub fn expected_len(self) -> Option<usize> {
        match self {
            Self::NationalId => Some(NATIONAL_ID_LEN),
            Self::TaxId => Some(TAX_ID_LEN),
            Self::Unknown | Self::Incomplete => None,
        }
    }

    /// Short label used in option matching and notifications.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::NationalId => Some("DNI"),
            Self::TaxId => Some("RUC"),
            Self::Unknown | Self::Incomplete => None,
        }
    }

    /// Whether a selection change may follow from this category.
    pub fn is_recognized(self) -> bool {
        matches!(self, Self::NationalId | Self::TaxId)
    }
}

/// Strip every non-digit character.
///
/// This is the value the page writes back into the identifier input.
pub fn normalize_identifier(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Classify a raw identifier by its digit count.
///
/// Non-digit characters (whitespace, dashes, letters) are ignored.
///
/// ```
/// use comprobante::core::{classify, DocumentTypeCategory};
///
/// assert_eq!(classify("12-345-678"), DocumentTypeCategory::NationalId);
/// assert_eq!(classify("20123456789"), DocumentTypeCategory::TaxId);
/// assert_eq!(classify("1234567890"), DocumentTypeCategory::Incomplete);
/// assert_eq!(classify("  "), DocumentTypeCategory::Unknown);
/// ```
pub fn classify(raw: &str) -> DocumentTypeCategory {
    match raw.chars().filter(|c| c.is_ascii_digit()).count() {
        0 => DocumentTypeCategory::Unknown,
        NATIONAL_ID_LEN => DocumentTypeCategory::NationalId,
        TAX_ID_LEN => DocumentTypeCategory::TaxId,
        _ => DocumentTypeCategory::Incomplete,
    }
}

/// `true` when `value` is exactly `len` ASCII digits, nothing else.
pub fn is_exact_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_digits_is_dni() {
        assert_eq!(classify("72663936"), DocumentTypeCategory::NationalId);
    }

    #[test]
    fn eleven_digits_is_ruc() {
        assert_eq!(classify("20123456789"), DocumentTypeCategory::TaxId);
    }

    #[test]
    fn separators_stripped() {
        assert_eq!(classify("12-345-678"), DocumentTypeCategory::NationalId);
        assert_eq!(classify(" 20.123.456.789 "), DocumentTypeCategory::TaxId);
    }

    #[test]
    fn empty_is_unknown() {
        assert_eq!(classify(""), DocumentTypeCategory::Unknown);
        assert_eq!(classify("abc -"), DocumentTypeCategory::Unknown);
    }

    #[test]
    fn nine_and_ten_digits_incomplete() {
        assert_eq!(classify("123456789"), DocumentTypeCategory::Incomplete);
        assert_eq!(classify("1234567890"), DocumentTypeCategory::Incomplete);
    }

    #[test]
    fn letters_reduce_digit_count() {
        // 7 digits once the letter is dropped
        assert_eq!(classify("1234567A"), DocumentTypeCategory::Incomplete);
    }

    #[test]
    fn non_ascii_digits_ignored() {
        // Arabic-Indic digits are not ASCII digits
        assert_eq!(classify("١٢٣٤٥٦٧٨"), DocumentTypeCategory::Unknown);
    }

    #[test]
    fn normalize_keeps_digits_only() {
        assert_eq!(normalize_identifier(" 20-1234 5678-9 "), "20123456789");
    }

    #[test]
    fn labels() {
        assert_eq!(DocumentTypeCategory::NationalId.label(), Some("DNI"));
        assert_eq!(DocumentTypeCategory::TaxId.expected_len(), Some(11));
        assert!(DocumentTypeCategory::Incomplete.label().is_none());
    }

    #[test]
    fn exact_digits() {
        assert!(is_exact_digits("12345678", 8));
        assert!(!is_exact_digits("1234567a", 8));
        assert!(!is_exact_digits("123", 8));
    }
}
