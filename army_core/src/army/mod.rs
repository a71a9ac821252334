//! Army - A named roster of units with battle-facing operations
//!
//! An army owns its units outright. Units only carry the `ArmyId` of their
//! owner; every roster mutation goes through the army so the roster order
//! stays stable and front-loaded.

mod combat;
mod recruit;
mod report;

pub use combat::{Casualties, FightReport};
pub use recruit::{draw_kind, pick_name, ARMY_NAMES};
pub use report::{ArmyReport, UnitCounts, SUMMARY_ORDER};

use crate::error::{ArmyError, Result};
use crate::events::{ArmyEvent, EventSink, TracingSink};
use crate::types::{ArmyId, ArmyState, UnitId};
use crate::unit::{Unit, UnitKind, UnitStats};
use rand::Rng;
use std::fmt;

pub struct Army {
    id: ArmyId,
    name: String,
    state: ArmyState,
    /// Always equal to `roster.len()`
    soldier_count: usize,
    roster: Vec<Unit>,
    /// Incremented on recruitment, never decremented
    recruited: UnitCounts,
    next_unit: u32,
    sink: Box<dyn EventSink>,
}

impl Army {
    /// Recruit an army of `size` random units, logging through `tracing`
    pub fn new(size: i64, rng: &mut impl Rng) -> Result<Self> {
        Self::with_sink(size, rng, TracingSink)
    }

    /// Recruit an army of `size` random units, reporting to `sink`
    ///
    /// The name is drawn first, then each unit is drawn one at a time in
    /// roster order.
    pub fn with_sink(size: i64, rng: &mut impl Rng, sink: impl EventSink + 'static) -> Result<Self> {
        let size = validate_size(size)?;
        let name = pick_name(rng);
        let mut army = Army::forming(name, size, Box::new(sink));
        for _ in 0..size {
            army.recruit(rng);
        }
        army.finish_forming();
        Ok(army)
    }

    /// Build an army from an explicit roster, front first
    pub fn from_stats(
        name: impl Into<String>,
        stats: impl IntoIterator<Item = UnitStats>,
        sink: impl EventSink + 'static,
    ) -> Self {
        let stats: Vec<UnitStats> = stats.into_iter().collect();
        let mut army = Army::forming(name.into(), stats.len(), Box::new(sink));
        for unit_stats in stats {
            army.enlist(unit_stats);
        }
        army.finish_forming();
        army
    }

    fn forming(name: String, size: usize, mut sink: Box<dyn EventSink>) -> Self {
        sink.emit(ArmyEvent::Recruiting {
            army: name.clone(),
            size,
        });
        Army {
            id: ArmyId::next(),
            name,
            state: ArmyState::Forming,
            soldier_count: 0,
            roster: Vec::with_capacity(size),
            recruited: UnitCounts::new(),
            next_unit: 0,
            sink,
        }
    }

    fn finish_forming(&mut self) {
        self.state = if self.soldier_count > 0 {
            ArmyState::Active
        } else {
            ArmyState::Defeated
        };
        self.sink.emit(ArmyEvent::Formed {
            army: self.name.clone(),
            size: self.soldier_count,
        });
    }

    /// Append a unit to the back of the roster
    fn enlist(&mut self, stats: UnitStats) -> UnitId {
        let id = UnitId(self.next_unit);
        self.next_unit += 1;
        self.roster.push(Unit::new(id, self.id, stats));
        self.recruited.increment(stats.kind());
        self.soldier_count += 1;
        id
    }

    fn emit(&mut self, event: ArmyEvent) {
        self.sink.emit(event);
    }

    pub fn id(&self) -> ArmyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> ArmyState {
        self.state
    }

    pub fn soldier_count(&self) -> usize {
        self.soldier_count
    }

    /// True once every unit has been removed; never reverts
    pub fn is_defeated(&self) -> bool {
        self.soldier_count == 0
    }

    /// Live units, front of the roster first
    pub fn units(&self) -> &[Unit] {
        &self.roster
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.roster.iter().find(|u| u.id() == id)
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.unit(id).is_some()
    }

    /// Units of `kind` ever recruited
    pub fn recruited(&self, kind: UnitKind) -> usize {
        self.recruited.get(kind)
    }

    pub fn recruited_counts(&self) -> &UnitCounts {
        &self.recruited
    }

    /// Counts of units currently alive, by kind
    pub fn live_counts(&self) -> UnitCounts {
        self.roster.iter().map(Unit::kind).collect()
    }

    pub fn total_health(&self) -> f64 {
        self.roster.iter().map(Unit::health).sum()
    }

    /// Replace the event sink
    pub fn set_sink(&mut self, sink: impl EventSink + 'static) {
        self.sink = Box::new(sink);
    }
}

fn validate_size(size: i64) -> Result<usize> {
    usize::try_from(size).map_err(|_| {
        ArmyError::InvalidConfiguration(format!("army size must be non-negative, got {}", size))
    })
}

impl fmt::Debug for Army {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Army")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("state", &self.state)
            .field("soldier_count", &self.soldier_count)
            .field("roster", &self.roster)
            .field("recruited", &self.recruited)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Army {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} =>", self.name)?;
        for kind in SUMMARY_ORDER {
            write!(f, "\n{}: {}", kind.plural(), self.recruited(*kind))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NullSink;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_new_army_size() {
        let mut rng = StdRng::seed_from_u64(42);
        let army = Army::with_sink(25, &mut rng, NullSink).unwrap();
        assert_eq!(army.soldier_count(), 25);
        assert_eq!(army.units().len(), 25);
        assert_eq!(army.state(), ArmyState::Active);
        assert_eq!(army.recruited_counts().total(), 25);
        assert_eq!(army.live_counts(), *army.recruited_counts());
    }

    #[test]
    fn test_empty_army_is_defeated() {
        let mut rng = StdRng::seed_from_u64(1);
        let army = Army::with_sink(0, &mut rng, NullSink).unwrap();
        assert!(army.is_defeated());
        assert_eq!(army.state(), ArmyState::Defeated);
    }

    #[test]
    fn test_negative_size_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = Army::with_sink(-1, &mut rng, NullSink).unwrap_err();
        assert!(matches!(err, ArmyError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_name_from_candidates() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let army = Army::with_sink(1, &mut rng, NullSink).unwrap();
            assert!(ARMY_NAMES.contains(&army.name()));
        }
    }

    #[test]
    fn test_same_seed_same_army() {
        let a = Army::with_sink(40, &mut StdRng::seed_from_u64(9), NullSink).unwrap();
        let b = Army::with_sink(40, &mut StdRng::seed_from_u64(9), NullSink).unwrap();
        assert_eq!(a.name(), b.name());
        let kinds_a: Vec<UnitKind> = a.units().iter().map(Unit::kind).collect();
        let kinds_b: Vec<UnitKind> = b.units().iter().map(Unit::kind).collect();
        assert_eq!(kinds_a, kinds_b);
    }

    #[test]
    fn test_unit_ids_follow_roster_order() {
        let army = Army::from_stats("Chile", vec![UnitKind::Soldier.stats(); 4], NullSink);
        let ids: Vec<UnitId> = army.units().iter().map(Unit::id).collect();
        assert_eq!(ids, vec![UnitId(0), UnitId(1), UnitId(2), UnitId(3)]);
        assert!(army.units().iter().all(|u| u.army() == army.id()));
    }

    #[test]
    fn test_construction_events() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&events);
        let mut rng = StdRng::seed_from_u64(3);
        let army = Army::with_sink(6, &mut rng, move |e: ArmyEvent| {
            recorder.lock().unwrap().push(e);
        })
        .unwrap();

        let events = events.lock().unwrap();
        assert_eq!(
            events[0],
            ArmyEvent::Recruiting {
                army: army.name().to_string(),
                size: 6
            }
        );
        assert_eq!(
            events[1],
            ArmyEvent::Formed {
                army: army.name().to_string(),
                size: 6
            }
        );
    }

    #[test]
    fn test_summary_lists_recruited_counts() {
        let army = Army::from_stats(
            "Brazil",
            vec![
                UnitKind::Tank.stats(),
                UnitKind::Soldier.stats(),
                UnitKind::Soldier.stats(),
                UnitKind::Navy.stats(),
            ],
            NullSink,
        );
        let summary = army.to_string();
        assert!(summary.starts_with("Brazil =>"));
        assert!(summary.contains("Tanks: 1"));
        assert!(summary.contains("Soldiers: 2"));
        assert!(summary.contains("Ships: 1"));
        assert!(summary.contains("Aircrafts: 0"));
        assert!(summary.contains("Helicopters: 0"));
    }
}
