//! Unit - A single combat entity owned by an army

mod kind;

pub use kind::{UnitKind, RECRUITMENT_DIE};

use crate::error::{ArmyError, Result};
use crate::types::{ArmyId, BattleContext, UnitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed combat stats of a unit
///
/// Only obtainable through `UnitStats::new` or `UnitKind::stats`, so every
/// unit that enters a roster has at least one target and positive health.
///
/// ```compile_fail
/// use army_core::{UnitKind, UnitStats};
///
/// let stats = UnitStats {
///     kind: UnitKind::Tank,
///     attack_power: 50.0,
///     target_count: 0,
///     max_health: 40.0,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitStats {
    kind: UnitKind,
    attack_power: f64,
    target_count: usize,
    max_health: f64,
}

impl UnitStats {
    /// Build a custom stat block
    ///
    /// Rejects zero targets, negative or non-finite attack power and
    /// non-positive health.
    pub fn new(kind: UnitKind, attack_power: f64, target_count: usize, max_health: f64) -> Result<Self> {
        if target_count == 0 {
            return Err(ArmyError::InvalidConfiguration(format!(
                "{} must affect at least one target",
                kind
            )));
        }
        if !attack_power.is_finite() || attack_power < 0.0 {
            return Err(ArmyError::InvalidConfiguration(format!(
                "{} attack power must be a finite non-negative number, got {}",
                kind, attack_power
            )));
        }
        if !max_health.is_finite() || max_health <= 0.0 {
            return Err(ArmyError::InvalidConfiguration(format!(
                "{} health must be positive, got {}",
                kind, max_health
            )));
        }
        Ok(UnitStats {
            kind,
            attack_power,
            target_count,
            max_health,
        })
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Damage dealt per attack
    pub fn attack_power(&self) -> f64 {
        self.attack_power
    }

    /// Distinct enemy units one attack is split across (never zero)
    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// Health at recruitment (always positive)
    pub fn max_health(&self) -> f64 {
        self.max_health
    }
}

/// Output of a single attack
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attack {
    pub damage: f64,
    pub target_count: usize,
}

/// Result of a unit absorbing a damage share
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Defense {
    Survived,
    Killed,
}

/// A live combat unit
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    id: UnitId,
    army: ArmyId,
    stats: UnitStats,
    health: f64,
}

impl Unit {
    pub(crate) fn new(id: UnitId, army: ArmyId, stats: UnitStats) -> Self {
        Unit {
            id,
            army,
            stats,
            health: stats.max_health,
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    /// Army this unit belongs to
    pub fn army(&self) -> ArmyId {
        self.army
    }

    pub fn kind(&self) -> UnitKind {
        self.stats.kind
    }

    pub fn stats(&self) -> &UnitStats {
        &self.stats
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Produce this unit's attack; depends only on its fixed stats
    pub fn attack(&self, _ctx: &BattleContext) -> Attack {
        Attack {
            damage: self.stats.attack_power,
            target_count: self.stats.target_count,
        }
    }

    /// Absorb a damage share
    ///
    /// Non-positive and NaN shares leave the unit untouched. The owning army
    /// is responsible for removing a killed unit from its roster.
    pub fn defend(&mut self, share: f64) -> Defense {
        if share > 0.0 {
            self.health -= share;
        }
        if self.is_alive() {
            Defense::Survived
        } else {
            Defense::Killed
        }
    }

    pub fn snapshot(&self) -> UnitSnapshot {
        UnitSnapshot {
            id: self.id,
            kind: self.stats.kind,
            health: self.health,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({:.1} hp)", self.stats.kind, self.id, self.health)
    }
}

/// Read-only view of a unit, carried by events and reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSnapshot {
    pub id: UnitId,
    pub kind: UnitKind,
    pub health: f64,
}

impl fmt::Display for UnitSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({:.1} hp)", self.kind, self.id, self.health)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_unit(kind: UnitKind) -> Unit {
        Unit::new(UnitId(0), ArmyId(0), kind.stats())
    }

    #[test]
    fn test_zero_targets_rejected() {
        let err = UnitStats::new(UnitKind::Soldier, 10.0, 0, 10.0).unwrap_err();
        assert!(matches!(err, ArmyError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_bad_health_rejected() {
        assert!(UnitStats::new(UnitKind::Tank, 10.0, 1, 0.0).is_err());
        assert!(UnitStats::new(UnitKind::Tank, 10.0, 1, f64::NAN).is_err());
        assert!(UnitStats::new(UnitKind::Tank, -1.0, 1, 5.0).is_err());
    }

    #[test]
    fn test_attack_uses_fixed_stats() {
        let tank = make_unit(UnitKind::Tank);
        let attack = tank.attack(&BattleContext::new(3));
        assert!((attack.damage - 50.0).abs() < f64::EPSILON);
        assert_eq!(attack.target_count, 5);
        assert_eq!(attack, tank.attack(&BattleContext::new(4)));
    }

    #[test]
    fn test_defend_partial_damage() {
        let mut tank = make_unit(UnitKind::Tank);
        assert_eq!(tank.defend(10.0), Defense::Survived);
        assert!((tank.health() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_defend_exact_threshold_kills() {
        let mut soldier = make_unit(UnitKind::Soldier);
        assert_eq!(soldier.defend(10.0), Defense::Killed);
        assert!(!soldier.is_alive());
    }

    #[test]
    fn test_defend_ignores_non_positive_share() {
        let mut soldier = make_unit(UnitKind::Soldier);
        assert_eq!(soldier.defend(0.0), Defense::Survived);
        assert_eq!(soldier.defend(-5.0), Defense::Survived);
        assert_eq!(soldier.defend(f64::NAN), Defense::Survived);
        assert!((soldier.health() - 10.0).abs() < f64::EPSILON);
    }
}
