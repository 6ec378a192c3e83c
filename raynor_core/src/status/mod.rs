//! Timed status effects on enemies

mod active;
pub mod tick;

pub use active::Status;
pub use tick::{process_status_tick, StatusTickResult};
