//! Per-zone detection and timed-relay state machine.
//!
//! ```text
//!            detecting && !trigger_consumed
//!   ┌─────────┐ ──────────────────────────▶ ┌──────────────────┐
//!   │ Resting │                             │ Engaged { since } │ ◀─┐
//!   └─────────┘ ◀────────────────────────── └──────────────────┘ ──┘
//!               now - since >= engagement       re-trigger restarts
//!               (detection state ignored)       `since`
//! ```
//!
//! A zone is pure logic: it consumes one raw sample and a timestamp per
//! cycle and reports at most one [`Transition`].  Driving the relay and
//! emitting diagnostics is the controller's job.
//!
//! `trigger_consumed` makes the trigger edge-sensitive per detection
//! episode: it is set by the trigger and cleared on every cycle in which
//! the zone is not detecting, whatever the relay is doing.

pub mod debounce;

use serde::Serialize;

use crate::config::{ControllerConfig, Polarity};
use crate::pins::ZonePins;
use debounce::Debouncer;

/// Relay side of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RelayState {
    Resting,
    Engaged { since_ms: u32 },
}

/// Relay state change produced by one [`Zone::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A fresh detection episode engaged the relay.  `retrigger` is set
    /// when the relay was still engaged from an earlier episode; the
    /// engagement timer restarts either way.
    Engaged { retrigger: bool },
    /// The engagement duration elapsed.
    Rested { held_ms: u32 },
}

/// One sensor/relay pairing.
#[derive(Debug, Clone)]
pub struct Zone {
    pins: ZonePins,
    sensor_active: Polarity,
    engagement_ms: u32,
    debounce: Debouncer,
    relay: RelayState,
    detecting: bool,
    trigger_consumed: bool,
}

impl Zone {
    /// Build a resting zone whose sensor is assumed idle as of `now_ms`.
    ///
    /// `config` must already be validated: a zero engagement would
    /// collapse the engage and release into one cycle.
    pub(crate) fn new(pins: ZonePins, config: &ControllerConfig, now_ms: u32) -> Self {
        Self {
            pins,
            sensor_active: config.sensor_active,
            engagement_ms: config.engagement_ms,
            debounce: Debouncer::new(
                config.debounce_ms,
                config.sensor_active.idle_level(),
                now_ms,
            ),
            relay: RelayState::Resting,
            detecting: false,
            trigger_consumed: false,
        }
    }

    /// Run one scan step: debounce, classify, trigger, timeout, re-arm.
    pub fn update(&mut self, raw: bool, now_ms: u32) -> Option<Transition> {
        let stable = self.debounce.sample(raw, now_ms);
        self.detecting = self.sensor_active.is_active(stable);

        let mut transition = None;

        if self.detecting && !self.trigger_consumed {
            let retrigger = self.is_engaged();
            self.relay = RelayState::Engaged { since_ms: now_ms };
            self.trigger_consumed = true;
            transition = Some(Transition::Engaged { retrigger });
        }

        if let RelayState::Engaged { since_ms } = self.relay {
            let held_ms = now_ms.wrapping_sub(since_ms);
            if held_ms >= self.engagement_ms {
                self.relay = RelayState::Resting;
                transition = Some(Transition::Rested { held_ms });
            }
        }

        if !self.detecting {
            self.trigger_consumed = false;
        }

        transition
    }

    pub fn pins(&self) -> ZonePins {
        self.pins
    }

    pub fn relay_state(&self) -> RelayState {
        self.relay
    }

    pub fn is_engaged(&self) -> bool {
        matches!(self.relay, RelayState::Engaged { .. })
    }

    /// When the current engagement started; `None` while resting.
    pub fn engaged_since_ms(&self) -> Option<u32> {
        match self.relay {
            RelayState::Engaged { since_ms } => Some(since_ms),
            RelayState::Resting => None,
        }
    }

    pub fn stable_level(&self) -> bool {
        self.debounce.stable()
    }

    pub fn raw_level(&self) -> bool {
        self.debounce.last_raw()
    }

    pub fn detecting(&self) -> bool {
        self.detecting
    }

    pub fn trigger_consumed(&self) -> bool {
        self.trigger_consumed
    }

    /// Serialisable view for diagnostics.
    pub fn status(&self, index: usize) -> ZoneStatus {
        ZoneStatus {
            index,
            pins: self.pins,
            stable_level: self.stable_level(),
            raw_level: self.raw_level(),
            settling: self.debounce.is_settling(),
            detecting: self.detecting,
            trigger_consumed: self.trigger_consumed,
            relay: self.relay,
        }
    }
}

/// Point-in-time snapshot of one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneStatus {
    pub index: usize,
    pub pins: ZonePins,
    pub stable_level: bool,
    pub raw_level: bool,
    /// A raw change is waiting out the debounce window.
    pub settling: bool,
    pub detecting: bool,
    pub trigger_consumed: bool,
    pub relay: RelayState,
}
