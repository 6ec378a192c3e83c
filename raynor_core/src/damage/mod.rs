//! Damage system - turning attacker state into a per-attack damage value

mod breakdown;
mod calculation;

pub use breakdown::DamageBreakdown;
pub use calculation::{calculate_damage, level_multiplier, AttackContext};
