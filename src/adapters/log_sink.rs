//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing one line per [`ZoneEvent`] to the
//! ESP-IDF logger (UART / USB-CDC in production).  Zones are numbered
//! from 1 in the output to match the labels on the board.

use log::{info, warn};

use crate::app::events::ZoneEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`ZoneEvent`] to the serial console.
pub struct LogEventSink {
    emitted: u32,
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogEventSink {
    pub fn new() -> Self {
        Self { emitted: 0 }
    }

    /// Events written since boot.
    pub fn emitted(&self) -> u32 {
        self.emitted
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &ZoneEvent) {
        self.emitted = self.emitted.wrapping_add(1);
        match *event {
            ZoneEvent::Started { zones, at_ms } => {
                info!(
                    "START | {} zones armed, relays at rest | t={}ms",
                    zones, at_ms
                );
            }
            ZoneEvent::Engaged {
                zone,
                at_ms,
                retrigger: false,
            } => {
                info!("ZONE {} | DETECTED -> relay ENGAGED | t={}ms", zone + 1, at_ms);
            }
            ZoneEvent::Engaged {
                zone,
                at_ms,
                retrigger: true,
            } => {
                warn!(
                    "ZONE {} | DETECTED again -> engagement restarted | t={}ms",
                    zone + 1,
                    at_ms
                );
            }
            ZoneEvent::Rested {
                zone,
                at_ms,
                held_ms,
            } => {
                info!(
                    "ZONE {} | TIMEOUT after {}ms -> relay RESTED | t={}ms",
                    zone + 1,
                    held_ms,
                    at_ms
                );
            }
        }
    }
}
