//! Raynor class constants

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Constants shared by every Raynor instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaynorConstants {
    /// Auto-attack damage at level 0
    #[serde(default = "default_base_attack")]
    pub base_attack: f64,
    /// Per-level compounding scale (0.04 = 4% per level)
    #[serde(default = "default_base_scale")]
    pub base_scale: f64,
    /// Damage bonus against slowed targets with Ace in the Hole
    #[serde(default = "default_ace_in_the_hole")]
    pub ace_in_the_hole: f64,
    /// Bonus multiplier added per Veteran Marksman stack
    #[serde(default = "default_veteran_marksman")]
    pub veteran_marksman: f64,
    /// Time between auto-attacks
    #[serde(default = "default_attack_speed")]
    pub attack_speed: f64,
    /// Base multiplier of the bonus damage on every 4th attack
    #[serde(default = "default_pepper_multiplier")]
    pub pepper_multiplier: f64,
    /// Slow duration applied by Unstable Compound
    #[serde(default = "default_unstable_compound_duration")]
    pub unstable_compound_duration: f64,
    /// Raider damage at level 0
    #[serde(default = "default_raider_base_damage")]
    pub raider_base_damage: f64,
    /// Raider per-level compounding scale
    #[serde(default = "default_base_scale")]
    pub raider_base_scale: f64,
}

impl Default for RaynorConstants {
    fn default() -> Self {
        RaynorConstants {
            base_attack: default_base_attack(),
            base_scale: default_base_scale(),
            ace_in_the_hole: default_ace_in_the_hole(),
            veteran_marksman: default_veteran_marksman(),
            attack_speed: default_attack_speed(),
            pepper_multiplier: default_pepper_multiplier(),
            unstable_compound_duration: default_unstable_compound_duration(),
            raider_base_damage: default_raider_base_damage(),
            raider_base_scale: default_base_scale(),
        }
    }
}

fn default_base_attack() -> f64 {
    101.0
}
fn default_base_scale() -> f64 {
    0.04
}
fn default_ace_in_the_hole() -> f64 {
    0.15
}
fn default_veteran_marksman() -> f64 {
    0.0075
}
fn default_attack_speed() -> f64 {
    1.25
}
fn default_pepper_multiplier() -> f64 {
    1.25
}
fn default_unstable_compound_duration() -> f64 {
    2.5
}
fn default_raider_base_damage() -> f64 {
    84.0
}

impl RaynorConstants {
    /// Check that every constant is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("base_attack", self.base_attack),
            ("base_scale", self.base_scale),
            ("ace_in_the_hole", self.ace_in_the_hole),
            ("veteran_marksman", self.veteran_marksman),
            ("attack_speed", self.attack_speed),
            ("pepper_multiplier", self.pepper_multiplier),
            ("unstable_compound_duration", self.unstable_compound_duration),
            ("raider_base_damage", self.raider_base_damage),
            ("raider_base_scale", self.raider_base_scale),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
            if value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        if self.attack_speed <= 0.0 {
            return Err(ConfigError::ValidationError(
                "attack_speed must be positive".to_string(),
            ));
        }
        if self.base_attack <= 0.0 {
            return Err(ConfigError::ValidationError(
                "base_attack must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
