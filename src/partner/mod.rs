//! Buyer record mapping for the checkout address step.
//!
//! Turns posted checkout values into the partner the backend persists:
//! invoice type, DNI/RUC, VAT (RUC over DNI), legal name and the
//! detected document type.
//!
//! # Example
//!
//! ```
//! use comprobante::partner::*;
//!
//! let form = CheckoutForm {
//!     dni: Some("12345678".into()),
//!     ..CheckoutForm::default()
//! };
//! let partner = prepare_partner(&form);
//! assert_eq!(partner.vat.as_deref(), Some("12345678"));
//! assert_eq!(partner.document_type, PartnerDocumentType::Dni);
//! ```

mod checkout;
mod ruc;

pub use checkout::{
    CheckoutForm, DEFAULT_PARTNER_NAME, PartnerDocumentType, PartnerValues, prepare_partner,
};
pub use ruc::{RucFormatError, RucKind, validate_ruc_prefix};
