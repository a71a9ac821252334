//! Error types for army and unit operations

use thiserror::Error;

/// Errors raised by army and unit operations
///
/// Both kinds indicate a programming or configuration defect rather than a
/// transient condition, so callers should not retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArmyError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, ArmyError>;
