//! DamageBreakdown - Every intermediate value of a single attack

use serde::{Deserialize, Serialize};

/// Result of one auto-attack
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    /// Unmodified auto-attack damage
    pub base: f64,
    /// Flat bonus from the every-4th-attack bonus (0 on normal attacks)
    pub bonus: f64,
    /// Ace in the Hole fraction applied (0 when it did not trigger)
    pub ace_bonus: f64,
    /// `(base + bonus) * (1 + ace_bonus)`
    pub raw: f64,
    /// `(1 + base_scale)^level`
    pub level_multiplier: f64,
    /// Damage dealt to the target
    pub total: f64,
    /// Whether this attack was a bonus attack
    pub is_bonus_attack: bool,
}

impl DamageBreakdown {
    /// Whether Ace in the Hole contributed to this attack
    pub fn ace_triggered(&self) -> bool {
        self.ace_bonus > 0.0
    }

    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{:.2} damage", self.total)];

        if self.is_bonus_attack {
            parts.push(format!("{:.2} bonus", self.bonus));
        }

        if self.ace_triggered() {
            parts.push(format!("+{:.0}% ace", self.ace_bonus * 100.0));
        }

        parts.join(", ")
    }
}
