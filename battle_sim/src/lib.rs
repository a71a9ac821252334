//! battle_sim - Drives two armies through alternating rounds
//!
//! This library provides:
//! - Battle: Round-by-round driver that declares the outcome
//! - BattleConfig: TOML configuration for army sizes, seed and round cap

pub mod battle;
pub mod config;

pub use battle::{Battle, BattleError, BattleOutcome, RoundReport, Side};
pub use config::{load_battle_config, parse_battle_config, BattleConfig, ConfigError};
