//! Enemy - Attack target holding timed statuses and accumulated damage

use crate::status::{process_status_tick, Status, StatusTickResult};
use crate::types::{EnemyCategory, StatusEffect};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A target that takes damage and carries status effects
///
/// The damage accumulator is always initialized, so damage can be added from
/// the moment the enemy exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    category: EnemyCategory,
    statuses: Vec<Status>,
    damage: f64,
}

impl Enemy {
    /// Create an enemy with no statuses and no damage taken
    pub fn new(category: EnemyCategory) -> Self {
        Enemy {
            category,
            statuses: Vec::new(),
            damage: 0.0,
        }
    }

    pub fn category(&self) -> EnemyCategory {
        self.category
    }

    pub fn is_hero(&self) -> bool {
        self.category == EnemyCategory::Hero
    }

    /// Active statuses in application order
    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    /// Total damage taken so far
    pub fn damage(&self) -> f64 {
        self.damage
    }

    /// Append a status entry
    ///
    /// Existing entries of the same effect are left alone; each entry
    /// expires on its own schedule.
    pub fn apply_status_effect(&mut self, effect: StatusEffect, duration: f64) {
        self.statuses.push(Status::new(effect, duration));
    }

    /// Whether any entry of `effect` is present
    pub fn has_status(&self, effect: StatusEffect) -> bool {
        self.statuses.iter().any(|s| s.effect() == effect)
    }

    /// Number of concurrent entries of `effect`
    pub fn status_count(&self, effect: StatusEffect) -> usize {
        self.statuses.iter().filter(|s| s.effect() == effect).count()
    }

    /// Longest remaining duration among entries of `effect`
    pub fn remaining_duration(&self, effect: StatusEffect) -> Option<f64> {
        self.statuses
            .iter()
            .filter(|s| s.effect() == effect)
            .map(|s| s.remaining_duration())
            .reduce(f64::max)
    }

    /// Add damage taken
    ///
    /// Negative and non-finite amounts are ignored so the total never decreases.
    pub fn add_damage(&mut self, amount: f64) {
        if !amount.is_finite() || amount < 0.0 {
            debug!(amount, "ignoring invalid damage amount");
            return;
        }
        self.damage += amount;
    }

    /// Decay every status by `elapsed`, removing the ones that ran out
    pub fn advance_time(&mut self, elapsed: f64) -> StatusTickResult {
        let result = process_status_tick(&mut self.statuses, elapsed);
        if result.any_expired() {
            debug!(
                category = %self.category,
                expired = result.expired.len(),
                remaining = self.statuses.len(),
                "statuses expired"
            );
        }
        result
    }
}

impl fmt::Display for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let statuses: Vec<String> = self.statuses.iter().map(|s| s.to_string()).collect();
        write!(
            f,
            "Enemy(statuses=[{}],enemy_type={},damage={})",
            statuses.join(", "),
            self.category,
            self.damage
        )
    }
}
