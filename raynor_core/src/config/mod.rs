//! Raynor constants and simulation scenarios, read from TOML

mod constants;
mod scenario;

pub use constants::RaynorConstants;
pub use scenario::{default_scenario, load_scenario, parse_scenario, PairConfig, ScenarioConfig};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Failure to read, parse or validate constants or a scenario
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read scenario or constants file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid scenario or constants TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Rejected configuration: {0}")]
    ValidationError(String),
}

/// Read a TOML file into constants or a scenario (not validated)
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Parse TOML text into constants or a scenario (not validated)
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}
