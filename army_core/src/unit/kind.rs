//! Unit variants, their fixed stats and recruitment weights

use super::UnitStats;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of faces on the recruitment die
pub const RECRUITMENT_DIE: u32 = 20;

/// Variant of a combat unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Navy,
    Helicopter,
    Tank,
    Airforce,
    Soldier,
}

impl UnitKind {
    /// Get all unit kinds
    pub fn all() -> &'static [UnitKind] {
        &[
            UnitKind::Navy,
            UnitKind::Helicopter,
            UnitKind::Tank,
            UnitKind::Airforce,
            UnitKind::Soldier,
        ]
    }

    /// Map a recruitment draw in `0..RECRUITMENT_DIE` to a unit kind
    ///
    /// Draws outside the die fall through to `Soldier`, the default recruit.
    pub fn from_draw(draw: u32) -> Self {
        match draw {
            0 => UnitKind::Navy,
            1..=2 => UnitKind::Helicopter,
            3..=6 => UnitKind::Tank,
            7 => UnitKind::Airforce,
            _ => UnitKind::Soldier,
        }
    }

    /// Number of die faces that recruit this kind
    pub fn weight(&self) -> u32 {
        match self {
            UnitKind::Navy => 1,
            UnitKind::Helicopter => 2,
            UnitKind::Tank => 4,
            UnitKind::Airforce => 1,
            UnitKind::Soldier => 12,
        }
    }

    /// Probability of recruiting this kind on a single draw
    pub fn probability(&self) -> f64 {
        self.weight() as f64 / RECRUITMENT_DIE as f64
    }

    /// Standard stat block for this kind
    pub fn stats(&self) -> UnitStats {
        let (attack_power, target_count, max_health) = match self {
            UnitKind::Navy => (100.0, 10, 60.0),
            UnitKind::Helicopter => (40.0, 4, 30.0),
            UnitKind::Tank => (50.0, 5, 40.0),
            UnitKind::Airforce => (60.0, 6, 30.0),
            UnitKind::Soldier => (10.0, 1, 10.0),
        };
        UnitStats {
            kind: *self,
            attack_power,
            target_count,
            max_health,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            UnitKind::Navy => "Ship",
            UnitKind::Helicopter => "Helicopter",
            UnitKind::Tank => "Tank",
            UnitKind::Airforce => "Aircraft",
            UnitKind::Soldier => "Soldier",
        }
    }

    /// Plural label used in army summaries
    pub fn plural(&self) -> &'static str {
        match self {
            UnitKind::Navy => "Ships",
            UnitKind::Helicopter => "Helicopters",
            UnitKind::Tank => "Tanks",
            UnitKind::Airforce => "Aircrafts",
            UnitKind::Soldier => "Soldiers",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
