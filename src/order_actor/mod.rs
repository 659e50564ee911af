//! Order-specific actor logic: stage progression and the ETA countdown.

mod actions;
pub mod entity;
pub mod ticker;

pub use actions::*;
pub use ticker::EtaTicker;
