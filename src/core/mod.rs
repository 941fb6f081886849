//! Checkout form core: document-type detection, Boleta/Factura gating,
//! and form validation.
//!
//! Everything here works on plain data snapshots handed in by the page;
//! nothing holds a reference to a UI element.

mod document;
mod error;
mod gate;
mod invoice;
pub mod links;
mod options;
pub mod quantity;
mod validation;

pub use document::*;
pub use error::*;
pub use gate::*;
pub use invoice::*;
pub use options::*;
pub use validation::*;
