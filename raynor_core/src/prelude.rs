//! Prelude module for convenient imports
//!
//! ```rust
//! use raynor_core::prelude::*;
//! ```

pub use crate::attacker::Raynor;
pub use crate::config::{default_scenario, RaynorConstants, ScenarioConfig};
pub use crate::damage::DamageBreakdown;
pub use crate::enemy::Enemy;
pub use crate::simulation::{Simulation, Snapshot};
pub use crate::types::{EnemyCategory, StatusEffect, Talent};
