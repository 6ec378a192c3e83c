//! Scenario configuration: which attacker/target pairs to simulate and for how long

use super::ConfigError;
use crate::types::{EnemyCategory, Talent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// One attacker/target pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairConfig {
    pub name: String,
    pub level: u32,
    #[serde(default)]
    pub talents: BTreeSet<Talent>,
    pub enemy: EnemyCategory,
}

/// A full simulation script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Number of ticks to simulate
    pub iterations: u32,
    /// Emit a snapshot every N ticks
    #[serde(default = "default_snapshot_interval")]
    pub snapshot_interval: u32,
    #[serde(rename = "pairs")]
    pub pairs: Vec<PairConfig>,
}

fn default_snapshot_interval() -> u32 {
    50
}

impl ScenarioConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.snapshot_interval == 0 {
            return Err(ConfigError::ValidationError(
                "snapshot_interval must be at least 1".to_string(),
            ));
        }

        let mut names = BTreeSet::new();
        for pair in &self.pairs {
            if !names.insert(pair.name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate pair name: {}",
                    pair.name
                )));
            }
        }

        Ok(())
    }
}

/// Load a scenario from a TOML file
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, ConfigError> {
    let config: ScenarioConfig = super::load_toml(path)?;
    config.validate()?;
    Ok(config)
}

/// Load a scenario from a TOML string
pub fn parse_scenario(content: &str) -> Result<ScenarioConfig, ConfigError> {
    let config: ScenarioConfig = super::parse_toml(content)?;
    config.validate()?;
    Ok(config)
}

/// The built-in driver script
pub fn default_scenario() -> Result<ScenarioConfig, ConfigError> {
    parse_scenario(include_str!("../../config/scenario.toml"))
}
