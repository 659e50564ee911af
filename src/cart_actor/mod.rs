//! Cart-specific actor logic: the ledger operations exposed as actions.

mod actions;
pub mod entity;

pub use actions::*;
pub use entity::CartCreate;
