//! Diagnostic events emitted by armies and the sinks that receive them

use crate::types::UnitId;
use crate::unit::{UnitKind, UnitSnapshot};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;

/// Roster size below which an army reports its remaining units
pub const LOW_STRENGTH_THRESHOLD: usize = 5;

/// Something observable happened to an army
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ArmyEvent {
    /// Recruitment is starting
    Recruiting { army: String, size: usize },
    /// Recruitment finished
    Formed { army: String, size: usize },
    /// A unit died and left the roster
    UnitLost {
        army: String,
        unit: UnitId,
        kind: UnitKind,
        remaining: usize,
    },
    /// Fewer than `LOW_STRENGTH_THRESHOLD` units remain
    LowStrength { army: String, roster: Vec<UnitSnapshot> },
}

impl ArmyEvent {
    /// Name of the army that emitted the event
    pub fn army(&self) -> &str {
        match self {
            ArmyEvent::Recruiting { army, .. }
            | ArmyEvent::Formed { army, .. }
            | ArmyEvent::UnitLost { army, .. }
            | ArmyEvent::LowStrength { army, .. } => army,
        }
    }

    /// One-line description
    pub fn describe(&self) -> String {
        match self {
            ArmyEvent::Recruiting { army, size } => {
                format!("{}: creating army with {} soldiers", army, size)
            }
            ArmyEvent::Formed { army, size } => format!("{}: formed with {} units", army, size),
            ArmyEvent::UnitLost {
                army,
                unit,
                kind,
                remaining,
            } => format!("{}: lost {} {} ({} left)", army, kind, unit, remaining),
            ArmyEvent::LowStrength { army, roster } => {
                let units: Vec<String> = roster.iter().map(|u| u.to_string()).collect();
                format!("{}: LOW STRENGTH [{}]", army, units.join(", "))
            }
        }
    }
}

/// Receiver of army events
pub trait EventSink: Send {
    fn emit(&mut self, event: ArmyEvent);
}

/// Default sink: forwards events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: ArmyEvent) {
        match &event {
            ArmyEvent::LowStrength { army, roster } => {
                tracing::warn!(army = %army, remaining = roster.len(), "{}", event.describe());
            }
            ArmyEvent::Recruiting { army, size } | ArmyEvent::Formed { army, size } => {
                tracing::debug!(army = %army, size, "{}", event.describe());
            }
            ArmyEvent::UnitLost { army, remaining, .. } => {
                tracing::debug!(army = %army, remaining, "{}", event.describe());
            }
        }
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: ArmyEvent) {}
}

impl<F> EventSink for F
where
    F: FnMut(ArmyEvent) + Send,
{
    fn emit(&mut self, event: ArmyEvent) {
        self(event)
    }
}

/// Sink that forwards events over a channel
///
/// A dropped receiver just means nobody is listening any more.
pub fn channel_sink(tx: Sender<ArmyEvent>) -> impl EventSink {
    move |event: ArmyEvent| {
        let _ = tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_channel_sink_delivers() {
        let (tx, rx) = mpsc::channel();
        let mut sink: Box<dyn EventSink> = Box::new(channel_sink(tx));
        sink.emit(ArmyEvent::Formed {
            army: "Chile".to_string(),
            size: 3,
        });
        let event = rx.try_recv().unwrap();
        assert_eq!(event.army(), "Chile");
    }

    #[test]
    fn test_channel_sink_survives_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut sink = channel_sink(tx);
        sink.emit(ArmyEvent::Recruiting {
            army: "Spain".to_string(),
            size: 1,
        });
    }

    #[test]
    fn test_describe_low_strength() {
        let event = ArmyEvent::LowStrength {
            army: "China".to_string(),
            roster: vec![UnitSnapshot {
                id: UnitId(4),
                kind: UnitKind::Tank,
                health: 12.5,
            }],
        };
        let text = event.describe();
        assert!(text.contains("LOW STRENGTH"));
        assert!(text.contains("Tank #4"));
    }
}
