//! Boleta/Factura sub-state of the checkout form.

use serde::{Deserialize, Serialize};

/// Form field holding the buyer's legal name (razón social).
pub const LEGAL_NAME_FIELD: &str = "razon_social";

/// Form field holding the buyer's RUC.
pub const TAX_ID_FIELD: &str = "ruc";

/// Receipt type requested by the buyer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceMode {
    /// Simple receipt, no buyer tax data.
    #[default]
    Boleta,
    /// Tax invoice, buyer legal name and RUC required.
    Factura,
}

impl InvoiceMode {
    pub fn from_wants_invoice(wants_invoice: bool) -> Self {
        if wants_invoice {
            Self::Factura
        } else {
            Self::Boleta
        }
    }

    /// Read the mode from posted form values.
    ///
    /// The checkout posts either a checkbox (`invoice_type_checkbox=on`) or a
    /// radio value (`invoice_type=factura`); either one requests a Factura.
    pub fn from_form(checkbox: Option<&str>, invoice_type: Option<&str>) -> Self {
        Self::from_wants_invoice(checkbox == Some("on") || invoice_type == Some("factura"))
    }

    pub fn wants_invoice(self) -> bool {
        self == Self::Factura
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boleta => "boleta",
            Self::Factura => "factura",
        }
    }

    /// Apply a toggle, returning the new mode and the field requirement the
    /// page must enforce.
    pub fn toggle(self, wants_invoice: bool) -> (Self, FieldRequirement) {
        let next = Self::from_wants_invoice(wants_invoice);
        if next != self {
            tracing::debug!(from = self.as_str(), to = next.as_str(), "invoice mode changed");
        }
        (next, FieldRequirement::for_mode(next))
    }
}

impl std::fmt::Display for InvoiceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requirement state of the Factura-only fields after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldRequirement {
    /// Whether [`LEGAL_NAME_FIELD`] and [`TAX_ID_FIELD`] are mandatory.
    pub required: bool,
    /// Whether the page must empty both fields. Always the negation of
    /// `required`: outside Factura mode the fields hold no value.
    pub clear_values: bool,
}

impl FieldRequirement {
    pub fn for_mode(mode: InvoiceMode) -> Self {
        let required = mode.wants_invoice();
        Self {
            required,
            clear_values: !required,
        }
    }

    /// Field names this requirement applies to.
    pub fn fields(&self) -> [&'static str; 2] {
        [LEGAL_NAME_FIELD, TAX_ID_FIELD]
    }
}
