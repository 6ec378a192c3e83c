//! Status - A single timed status entry on an enemy

use crate::types::StatusEffect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An active status effect instance
///
/// Duration uses the same time unit as the attacker's attack interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Status {
    effect: StatusEffect,
    remaining_duration: f64,
}

impl Status {
    /// Create a new status entry
    pub fn new(effect: StatusEffect, duration: f64) -> Self {
        Status {
            effect,
            remaining_duration: duration,
        }
    }

    pub fn effect(&self) -> StatusEffect {
        self.effect
    }

    pub fn remaining_duration(&self) -> f64 {
        self.remaining_duration
    }

    /// Check if the status is still active
    pub fn is_active(&self) -> bool {
        self.remaining_duration > 0.0
    }

    /// Consume `elapsed` time from the remaining duration
    pub(crate) fn tick(&mut self, elapsed: f64) {
        self.remaining_duration -= elapsed;
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Status(effect={},duration={})",
            self.effect, self.remaining_duration
        )
    }
}
