//! Configuration loading from TOML files

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Battle setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Units recruited by the army that attacks first
    #[serde(default = "default_army_size")]
    pub first_size: i64,
    /// Units recruited by the army that attacks second
    #[serde(default = "default_army_size")]
    pub second_size: i64,
    /// Recruitment seed; drawn from entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Rounds fought before the battle is called a stalemate
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        BattleConfig {
            first_size: default_army_size(),
            second_size: default_army_size(),
            seed: None,
            max_rounds: default_max_rounds(),
        }
    }
}

fn default_army_size() -> i64 {
    100
}
fn default_max_rounds() -> u32 {
    1000
}

impl BattleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first_size < 0 || self.second_size < 0 {
            return Err(ConfigError::ValidationError(format!(
                "army sizes must be non-negative (got {} and {})",
                self.first_size, self.second_size
            )));
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::ValidationError(
                "max_rounds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate a battle configuration file
pub fn load_battle_config(path: &Path) -> Result<BattleConfig, ConfigError> {
    let config: BattleConfig = load_toml(path)?;
    config.validate()?;
    Ok(config)
}

/// Parse and validate a battle configuration string
pub fn parse_battle_config(content: &str) -> Result<BattleConfig, ConfigError> {
    let config: BattleConfig = parse_toml(content)?;
    config.validate()?;
    Ok(config)
}
