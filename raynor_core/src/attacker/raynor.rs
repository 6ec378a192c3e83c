//! Raynor - The attacker

use super::PepperCounter;
use crate::config::RaynorConstants;
use crate::damage::{calculate_damage, AttackContext, DamageBreakdown};
use crate::enemy::Enemy;
use crate::types::{StatusEffect, Talent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, trace};

/// An auto-attacking Raynor with a fixed level and talent selection
///
/// Combat counters only change through [`Raynor::attack`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Raynor {
    level: u32,
    talents: BTreeSet<Talent>,
    pepper_counter: PepperCounter,
    veteran_marksman_count: u32,
    #[serde(default)]
    constants: RaynorConstants,
}

impl Raynor {
    /// Create a Raynor with the default class constants
    pub fn new(level: u32, talents: impl IntoIterator<Item = Talent>) -> Self {
        Self::with_constants(level, talents, RaynorConstants::default())
    }

    /// Create a Raynor with custom class constants
    pub fn with_constants(
        level: u32,
        talents: impl IntoIterator<Item = Talent>,
        constants: RaynorConstants,
    ) -> Self {
        Raynor {
            level,
            talents: talents.into_iter().collect(),
            pepper_counter: PepperCounter::new(),
            veteran_marksman_count: 0,
            constants,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn talents(&self) -> &BTreeSet<Talent> {
        &self.talents
    }

    pub fn pepper_counter(&self) -> u8 {
        self.pepper_counter.value()
    }

    pub fn veteran_marksman_count(&self) -> u32 {
        self.veteran_marksman_count
    }

    pub fn constants(&self) -> &RaynorConstants {
        &self.constants
    }

    pub fn has_talent(&self, talent: Talent) -> bool {
        self.talents.contains(&talent)
    }

    /// Attack a target and add the resulting damage to it
    pub fn attack(&mut self, target: &mut Enemy) -> DamageBreakdown {
        let is_bonus_attack = self.pepper_counter.advance();

        if is_bonus_attack {
            self.on_bonus_attack(target);
        }

        let ctx = AttackContext {
            level: self.level,
            veteran_marksman_count: self.veteran_marksman_count,
            is_bonus_attack,
            has_ace_in_the_hole: self.has_talent(Talent::AceInTheHole),
            target_slowed: target.has_status(StatusEffect::Slowed),
        };
        let breakdown = calculate_damage(&self.constants, &ctx);

        trace!(
            total = breakdown.total,
            bonus = is_bonus_attack,
            ace = breakdown.ace_triggered(),
            "attack"
        );

        target.add_damage(breakdown.total);
        breakdown
    }

    fn on_bonus_attack(&mut self, target: &mut Enemy) {
        for talent in &self.talents {
            match talent {
                Talent::VeteranMarksman if target.is_hero() => {
                    self.veteran_marksman_count += 1;
                    debug!(stacks = self.veteran_marksman_count, "veteran marksman stack");
                }
                Talent::UnstableCompound => {
                    target.apply_status_effect(
                        StatusEffect::Slowed,
                        self.constants.unstable_compound_duration,
                    );
                    debug!(
                        duration = self.constants.unstable_compound_duration,
                        "unstable compound slow applied"
                    );
                }
                Talent::VeteranMarksman | Talent::AceInTheHole | Talent::RaynorsRaider => {}
            }
        }
    }

    /// Damage of a Raynor's Raider summon at this level
    ///
    /// `None` without the talent. Auto-attacks never use this value.
    pub fn raider_damage(&self) -> Option<f64> {
        if !self.has_talent(Talent::RaynorsRaider) {
            return None;
        }
        let scale = (1.0 + self.constants.raider_base_scale).powf(f64::from(self.level));
        Some(self.constants.raider_base_damage * scale)
    }
}

impl fmt::Display for Raynor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let talents: Vec<String> = self.talents.iter().map(|t| t.to_string()).collect();
        write!(
            f,
            "Raynor(level={},talents=[{}],veteran_marksman_count={},pepper_counter={})",
            self.level,
            talents.join(", "),
            self.veteran_marksman_count,
            self.pepper_counter.value()
        )
    }
}
