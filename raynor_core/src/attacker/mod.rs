//! Attacker - Raynor and his attack cycle

mod pepper;
mod raynor;

pub use pepper::{InvalidPepperCounter, PepperCounter};
pub use raynor::Raynor;
