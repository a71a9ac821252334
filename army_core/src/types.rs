//! Core identifiers and shared types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ARMY_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of an army
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArmyId(pub u64);

impl ArmyId {
    /// Allocate a fresh id
    pub fn next() -> Self {
        ArmyId(NEXT_ARMY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ArmyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "army-{}", self.0)
    }
}

/// Identifier of a unit, unique within its army and assigned in recruitment order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of an army
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmyState {
    /// Still recruiting
    Forming,
    /// At least one unit alive
    Active,
    /// No units left (terminal)
    Defeated,
}

/// Context handed to every attack
///
/// Supplied by the battle driver; units read it but never change it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleContext {
    /// 1-based round number
    pub round: u32,
}

impl BattleContext {
    pub fn new(round: u32) -> Self {
        BattleContext { round }
    }
}
