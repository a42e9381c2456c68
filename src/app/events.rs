//! Outbound diagnostic events.
//!
//! The [`ZoneController`](super::controller::ZoneController) emits these
//! through the [`EventSink`](super::ports::EventSink) port, exactly once
//! per relay transition plus once at start-up.

use serde::Serialize;

/// Structured events emitted by the controller.  `zone` is the 0-based
/// scan index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ZoneEvent {
    /// All relays were forced to rest and scanning begins.
    Started { zones: usize, at_ms: u32 },

    /// A detection engaged the zone's relay.  With `retrigger` set, the
    /// relay was already engaged and its timer restarted.
    Engaged {
        zone: usize,
        at_ms: u32,
        retrigger: bool,
    },

    /// The engagement duration elapsed and the relay returned to rest.
    Rested {
        zone: usize,
        at_ms: u32,
        held_ms: u32,
    },
}

impl ZoneEvent {
    /// Zone the event concerns, if any.
    pub fn zone(&self) -> Option<usize> {
        match self {
            Self::Started { .. } => None,
            Self::Engaged { zone, .. } | Self::Rested { zone, .. } => Some(*zone),
        }
    }
}
