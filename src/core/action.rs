//! Last-action bookkeeping for debugging and observability.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::events::{EventKind, GameEvent};

/// The most recent transition applied to a game.
///
/// Game-over events are not recorded: the snapshot they carry already
/// describes the final state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Kind of the recorded event.
    pub kind: EventKind,

    /// Wall-clock time in milliseconds since the Unix epoch.
    pub timestamp_ms: u64,

    /// The event payload.
    pub event: GameEvent,
}

impl ActionRecord {
    /// Record an event at the current wall-clock time.
    #[must_use]
    pub fn now(event: GameEvent) -> Self {
        Self::at(event, unix_millis())
    }

    /// Record an event at a given timestamp.
    #[must_use]
    pub fn at(event: GameEvent, timestamp_ms: u64) -> Self {
        Self {
            kind: event.kind(),
            timestamp_ms,
            event,
        }
    }
}

fn unix_millis() -> u64 {
    // A clock set before 1970 reads as 0.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}
