//! # comprobante
//!
//! Checkout logic for Peruvian storefronts: DNI/RUC detection, the
//! Boleta/Factura choice, checkout form validation, buyer record mapping,
//! and the asynchronous cart calls.
//!
//! The crate never touches a page. Hosts pass in plain snapshots (the raw
//! identifier, the available document-type options, the form values) and
//! apply the returned deltas themselves.
//!
//! ## Quick Start
//!
//! ```rust
//! use comprobante::core::*;
//!
//! let mut gate = FormGate::new(GateConfig::default(), false);
//! let options = [DocumentOption::new("1", "DNI"), DocumentOption::new("6", "RUC")];
//!
//! // A pasted RUC selects the RUC document type.
//! let outcome = gate.on_identifier_changed("20-12345678-9", &options, Some("1"));
//! assert_eq!(outcome.normalized, "20123456789");
//! assert_eq!(outcome.next_selection.as_deref(), Some("6"));
//!
//! // Asking for a Factura makes legal name and RUC mandatory.
//! gate.on_invoice_toggle(true);
//! let snapshot = FormSnapshot::new(true)
//!     .with("name", "Empresa SAC")
//!     .with("email", "compras@empresa.pe")
//!     .with("phone", "+51 999 999 999")
//!     .with("street", "Av. Larco 123")
//!     .with("city", "Lima")
//!     .with("razon_social", "Empresa SAC")
//!     .with("ruc", "123");
//! let result = gate.validate(&snapshot);
//! assert!(result.has_reason("ruc", ValidationReason::InvalidTaxIdLength));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Classifier, form gate, validation, storefront helpers |
//! | `partner` | Checkout form to partner record mapping, RUC prefixes |
//! | `cart` | Async add-to-cart and cart-quantity client |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "partner")]
pub mod partner;

#[cfg(feature = "cart")]
pub mod cart;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
