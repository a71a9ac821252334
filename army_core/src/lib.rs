//! army_core - Army composition and damage resolution for turn-based battles
//!
//! This library provides:
//! - Unit: Combat entities with fixed attack power, target count and health
//! - Army: Weighted random recruitment, fighting and damage splitting
//! - ArmyEvent / EventSink: Injectable diagnostics (the core never prints)
//! - ArmyReport: Serializable composition snapshots

pub mod army;
pub mod error;
pub mod events;
pub mod prelude;
pub mod types;
pub mod unit;

// Re-export core types for convenience
pub use army::{Army, ArmyReport, Casualties, FightReport, UnitCounts, ARMY_NAMES};
pub use error::{ArmyError, Result};
pub use events::{channel_sink, ArmyEvent, EventSink, NullSink, TracingSink, LOW_STRENGTH_THRESHOLD};
pub use types::{ArmyId, ArmyState, BattleContext, UnitId};
pub use unit::{Attack, Defense, Unit, UnitKind, UnitSnapshot, UnitStats};
