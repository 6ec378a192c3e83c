//! raynor_core - Raynor auto-attack damage model
//!
//! This library provides:
//! - Raynor: An attacker with a level, talents and a 4-attack bonus cycle
//! - Enemy: A target holding timed statuses and accumulated damage
//! - Damage calculation: Flat bonus, then Ace in the Hole, then level scaling
//! - Simulation: Fixed-step runs over independent attacker/target pairs

pub mod attacker;
pub mod config;
pub mod damage;
pub mod enemy;
pub mod prelude;
pub mod simulation;
pub mod status;
pub mod types;

// Re-export core types for convenience
pub use attacker::{PepperCounter, Raynor};
pub use config::{default_scenario, ConfigError, PairConfig, RaynorConstants, ScenarioConfig};
pub use damage::{calculate_damage, AttackContext, DamageBreakdown};
pub use enemy::Enemy;
pub use simulation::{CombatPair, Simulation, Snapshot};
pub use status::{Status, StatusTickResult};
pub use types::{EnemyCategory, StatusEffect, Talent};
