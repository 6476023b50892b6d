use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::breathing::Phase;

/// Every state change in the breathing session produces an event.
/// Hosts render these; nothing in the core blocks on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BreathingEvent {
    SessionStarted {
        pattern: String,
        phase: Phase,
        seconds_remaining: u32,
        at: DateTime<Utc>,
    },
    SessionPaused {
        phase: Phase,
        seconds_remaining: u32,
        at: DateTime<Utc>,
    },
    PhaseAdvanced {
        phase: Phase,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    /// Phase wrapped back into Inhale; one full traversal finished.
    CycleCompleted {
        cycles_completed: u32,
        at: DateTime<Utc>,
    },
    SessionReset {
        pattern: String,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        pattern: String,
        phase: Phase,
        instruction: String,
        seconds_remaining: u32,
        running: bool,
        cycles_completed: u32,
        at: DateTime<Utc>,
    },
}
