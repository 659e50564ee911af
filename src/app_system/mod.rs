//! System orchestration, startup, and shutdown logic.

pub mod error;
pub mod shop_system;
pub mod tracing;

pub use error::*;
pub use shop_system::*;
pub use self::tracing::*;
