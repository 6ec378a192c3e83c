//! Status decay processing

use super::Status;
use crate::types::StatusEffect;

/// Result of advancing time over a status list
#[derive(Debug, Clone, Default)]
pub struct StatusTickResult {
    /// Effects whose entries expired during this pass, one per removed entry
    pub expired: Vec<StatusEffect>,
}

impl StatusTickResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything expired
    pub fn any_expired(&self) -> bool {
        !self.expired.is_empty()
    }
}

/// Advance every status by `elapsed` and drop the ones that ran out
///
/// Only entries with a remaining duration strictly greater than zero survive.
pub fn process_status_tick(statuses: &mut Vec<Status>, elapsed: f64) -> StatusTickResult {
    let mut result = StatusTickResult::new();

    for status in statuses.iter_mut() {
        status.tick(elapsed);
    }

    result.expired = statuses
        .iter()
        .filter(|s| !s.is_active())
        .map(|s| s.effect())
        .collect();

    statuses.retain(|s| s.is_active());

    result
}
