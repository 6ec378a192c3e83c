//! Core tags shared by attackers and targets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Timed status effect that can sit on an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusEffect {
    Slowed,
}

impl StatusEffect {
    /// Get all status effects
    pub fn all() -> &'static [StatusEffect] {
        &[StatusEffect::Slowed]
    }
}

impl fmt::Display for StatusEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusEffect::Slowed => write!(f, "Slowed"),
        }
    }
}

/// Enemy category, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyCategory {
    Hero,
    Minion,
}

impl EnemyCategory {
    pub fn all() -> &'static [EnemyCategory] {
        &[EnemyCategory::Hero, EnemyCategory::Minion]
    }
}

impl fmt::Display for EnemyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnemyCategory::Hero => write!(f, "Hero"),
            EnemyCategory::Minion => write!(f, "Minion"),
        }
    }
}

/// Raynor talent choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Talent {
    /// Bonus attacks against heroes permanently add to the bonus multiplier
    VeteranMarksman,
    /// Extra damage against slowed targets
    AceInTheHole,
    /// Bonus attacks slow the target
    UnstableCompound,
    /// Summons a Raider. Has no effect on auto-attack damage.
    RaynorsRaider,
}

impl Talent {
    /// Get all talents
    pub fn all() -> &'static [Talent] {
        &[
            Talent::VeteranMarksman,
            Talent::AceInTheHole,
            Talent::UnstableCompound,
            Talent::RaynorsRaider,
        ]
    }
}

impl fmt::Display for Talent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Talent::VeteranMarksman => "VeteranMarksman",
            Talent::AceInTheHole => "AceInTheHole",
            Talent::UnstableCompound => "UnstableCompound",
            Talent::RaynorsRaider => "RaynorsRaider",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_talent_serialization() {
        let json = serde_json::to_string(&Talent::AceInTheHole).unwrap();
        assert_eq!(json, "\"ace_in_the_hole\"");

        let talent: Talent = serde_json::from_str("\"raynors_raider\"").unwrap();
        assert_eq!(talent, Talent::RaynorsRaider);
    }

    #[test]
    fn test_all_lists_every_variant() {
        assert_eq!(Talent::all().len(), 4);
        assert_eq!(EnemyCategory::all().len(), 2);
        assert_eq!(StatusEffect::all(), &[StatusEffect::Slowed]);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Talent::VeteranMarksman.to_string(), "VeteranMarksman");
        assert_eq!(EnemyCategory::Minion.to_string(), "Minion");
        assert_eq!(StatusEffect::Slowed.to_string(), "Slowed");
    }
}
