//! Typed clients over the resource actors.
//!
//! The catalog client is a thin wrapper; the cart and order clients
//! orchestrate across actors (catalog lookups, voucher resolution, checkout).

#[macro_use]
mod macros;

pub mod cart_client;
pub mod catalog_client;
pub mod order_client;

pub use cart_client::CartClient;
pub use catalog_client::CatalogClient;
pub use order_client::{CheckoutDetails, OrderClient};
