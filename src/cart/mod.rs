//! Asynchronous add-to-cart and cart-quantity calls.
//!
//! Each call is a single attempt bounded by the configured timeout, with no
//! retry. A client allows one add-to-cart submission in flight at a time.
//!
//! # Example
//!
//! ```ignore
//! use comprobante::cart::*;
//!
//! let client = CartClient::new(&CartConfig::new("https://tienda.example.pe"))?;
//! client.add_to_cart(42, 2).await?;
//! let count = client.cart_quantity().await?;
//! ```

mod client;
mod guard;

pub use client::{CartClient, CartConfig, CartError, CartUpdate, DEFAULT_CART_TIMEOUT};
