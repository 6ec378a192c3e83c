//! Damage calculation
//!
//! Order matters: flat bonus, then the Ace in the Hole multiplier, then level
//! scaling on the result.

use super::DamageBreakdown;
use crate::config::RaynorConstants;

/// Attacker and target state relevant to one attack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackContext {
    pub level: u32,
    pub veteran_marksman_count: u32,
    /// The pepper counter wrapped to 0 on this attack
    pub is_bonus_attack: bool,
    pub has_ace_in_the_hole: bool,
    /// The target carries a Slowed status when the hit lands
    pub target_slowed: bool,
}

/// `(1 + base_scale)^level`
pub fn level_multiplier(constants: &RaynorConstants, level: u32) -> f64 {
    (1.0 + constants.base_scale).powf(f64::from(level))
}

/// Calculate the damage of a single attack
pub fn calculate_damage(constants: &RaynorConstants, ctx: &AttackContext) -> DamageBreakdown {
    let base = constants.base_attack;

    // Step 1: Flat bonus on the 4th attack
    let bonus = if ctx.is_bonus_attack {
        let modifier = constants.pepper_multiplier
            + f64::from(ctx.veteran_marksman_count) * constants.veteran_marksman;
        base * modifier
    } else {
        0.0
    };

    // Step 2: Percentage bonus against slowed targets
    let ace_bonus = if ctx.has_ace_in_the_hole && ctx.target_slowed {
        constants.ace_in_the_hole
    } else {
        0.0
    };

    let raw = (base + bonus) * (1.0 + ace_bonus);

    // Step 3: Level scaling last
    let level_multiplier = level_multiplier(constants, ctx.level);

    DamageBreakdown {
        base,
        bonus,
        ace_bonus,
        raw,
        level_multiplier,
        total: raw * level_multiplier,
        is_bonus_attack: ctx.is_bonus_attack,
    }
}
