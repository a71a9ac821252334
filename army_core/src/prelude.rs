//! Prelude module for convenient imports
//!
//! ```rust
//! use army_core::prelude::*;
//! ```

// Army
pub use crate::army::{Army, ArmyReport, Casualties, FightReport, UnitCounts};

// Units
pub use crate::unit::{Attack, Unit, UnitKind, UnitStats};

// Shared types
pub use crate::types::{ArmyId, ArmyState, BattleContext, UnitId};

// Diagnostics
pub use crate::events::{ArmyEvent, EventSink, NullSink, TracingSink};

// Errors
pub use crate::error::ArmyError;
