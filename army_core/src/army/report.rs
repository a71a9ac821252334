//! ArmyReport - Serializable snapshot of an army's composition

use super::Army;
use crate::types::{ArmyId, ArmyState};
use crate::unit::UnitKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Order in which unit kinds are listed in summaries
pub const SUMMARY_ORDER: &[UnitKind] = &[
    UnitKind::Tank,
    UnitKind::Airforce,
    UnitKind::Helicopter,
    UnitKind::Navy,
    UnitKind::Soldier,
];

/// Unit counts by kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCounts(BTreeMap<UnitKind, usize>);

impl UnitCounts {
    /// All kinds start at zero
    pub fn new() -> Self {
        UnitCounts(UnitKind::all().iter().map(|k| (*k, 0)).collect())
    }

    pub fn get(&self, kind: UnitKind) -> usize {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, kind: UnitKind) {
        *self.0.entry(kind).or_insert(0) += 1;
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (UnitKind, usize)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

impl FromIterator<UnitKind> for UnitCounts {
    fn from_iter<I: IntoIterator<Item = UnitKind>>(iter: I) -> Self {
        let mut counts = UnitCounts::new();
        for kind in iter {
            counts.increment(kind);
        }
        counts
    }
}

impl fmt::Display for UnitCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = SUMMARY_ORDER
            .iter()
            .map(|k| format!("{}: {}", k.plural(), self.get(*k)))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// Point-in-time view of an army
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmyReport {
    pub id: ArmyId,
    pub name: String,
    pub state: ArmyState,
    pub soldier_count: usize,
    /// Units ever recruited (not reduced by casualties)
    pub recruited: UnitCounts,
    /// Units currently alive
    pub live: UnitCounts,
    pub total_health: f64,
}

impl ArmyReport {
    /// Units lost since recruitment
    pub fn casualties(&self) -> usize {
        self.recruited.total().saturating_sub(self.soldier_count)
    }

    /// Fraction of recruited units still alive (0.0 to 1.0)
    pub fn strength(&self) -> f64 {
        let recruited = self.recruited.total();
        if recruited == 0 {
            return 0.0;
        }
        self.soldier_count as f64 / recruited as f64
    }

    pub fn summary(&self) -> String {
        format!(
            "{} ({:?}): {} alive, {} lost [{}]",
            self.name,
            self.state,
            self.soldier_count,
            self.casualties(),
            self.live
        )
    }
}

impl Army {
    pub fn report(&self) -> ArmyReport {
        ArmyReport {
            id: self.id(),
            name: self.name().to_string(),
            state: self.state(),
            soldier_count: self.soldier_count(),
            recruited: self.recruited_counts().clone(),
            live: self.live_counts(),
            total_health: self.total_health(),
        }
    }
}
