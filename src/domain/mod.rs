//! Business records and the pure logic that operates on them.
//!
//! Nothing in here knows about actors or channels; the `*_actor` modules wrap
//! these types as [`Entity`](crate::actor_framework::Entity) implementations.

pub mod address;
pub mod cart;
pub mod favorites;
pub mod language;
pub mod order;
pub mod preferences;
pub mod product;
pub mod voucher;

pub use address::*;
pub use cart::*;
pub use favorites::*;
pub use language::*;
pub use order::*;
pub use preferences::*;
pub use product::*;
pub use voucher::*;

/// Currency amount in rupees.
pub type Money = rust_decimal::Decimal;
