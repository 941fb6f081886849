//! Mapping a submitted checkout form onto the buyer record.

use serde::{Deserialize, Serialize};

use crate::core::{InvoiceMode, NATIONAL_ID_LEN, TAX_ID_LEN, is_exact_digits};

/// Partner name used when the form supplied none.
pub const DEFAULT_PARTNER_NAME: &str = "Cliente";

/// Raw checkout form values as posted by the address step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub dni: Option<String>,
    pub ruc: Option<String>,
    pub razon_social: Option<String>,
    pub invoice_type_checkbox: Option<String>,
    pub invoice_type: Option<String>,
}

impl CheckoutForm {
    pub fn mode(&self) -> InvoiceMode {
        InvoiceMode::from_form(
            self.invoice_type_checkbox.as_deref(),
            self.invoice_type.as_deref(),
        )
    }
}

/// Document type stored on the partner, detected from its VAT value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerDocumentType {
    Dni,
    Ruc,
    /// Anything that is neither a DNI nor a RUC.
    #[default]
    Vat,
}

impl PartnerDocumentType {
    /// Detect from a stored VAT value. Only spaces, `-` and `.` are treated
    /// as separators; any other character makes the value a generic VAT.
    pub fn detect(vat: &str) -> Self {
        let cleaned: String = vat
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '.'))
            .collect();
        if is_exact_digits(&cleaned, NATIONAL_ID_LEN) {
            Self::Dni
        } else if is_exact_digits(&cleaned, TAX_ID_LEN) {
            Self::Ruc
        } else {
            Self::Vat
        }
    }

    /// Text shown next to the VAT field in the back office.
    pub fn detected_label(self) -> &'static str {
        match self {
            Self::Dni => "DNI detected",
            Self::Ruc => "RUC detected",
            Self::Vat => "Generic VAT",
        }
    }
}

/// Buyer record ready to be created or written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerValues {
    pub name: String,
    pub email: Option<String>,
    pub dni: Option<String>,
    pub ruc: Option<String>,
    pub vat: Option<String>,
    pub invoice_type: InvoiceMode,
    pub document_type: PartnerDocumentType,
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Build the partner record from a checkout form.
///
/// RUC and legal name are only taken in Factura mode. The VAT is the RUC
/// when present, otherwise the DNI. The DNI is stored only when no RUC was
/// taken, so a partner never carries both.
pub fn prepare_partner(form: &CheckoutForm) -> PartnerValues {
    let invoice_type = form.mode();
    let (ruc, legal_name) = match invoice_type {
        InvoiceMode::Factura => (
            non_empty(form.ruc.as_ref()),
            non_empty(form.razon_social.as_ref()),
        ),
        InvoiceMode::Boleta => (None, None),
    };

    let name = legal_name
        .or_else(|| non_empty(form.name.as_ref()))
        .unwrap_or_else(|| DEFAULT_PARTNER_NAME.to_string());
    let dni = match ruc {
        Some(_) => None,
        None => non_empty(form.dni.as_ref()),
    };
    let vat = ruc.clone().or_else(|| dni.clone());
    let document_type = vat
        .as_deref()
        .map(PartnerDocumentType::detect)
        .unwrap_or_default();

    tracing::info!(
        invoice_type = %invoice_type,
        document_type = ?document_type,
        has_vat = vat.is_some(),
        "prepared checkout partner"
    );

    PartnerValues {
        name,
        email: non_empty(form.email.as_ref()),
        dni,
        ruc,
        vat,
        invoice_type,
        document_type,
    }
}
