//! Zone controller: the hexagonal core.
//!
//! [`ZoneController`] owns every [`Zone`] and runs them through one scan
//! cycle per [`tick`](ZoneController::tick).  Zone logic decides *when*
//! a relay changes; the controller is the only place that turns those
//! decisions into relay writes and events.
//!
//! ```text
//!   SensorPort ──▶ ┌──────────────────────┐ ──▶ EventSink
//!                  │    ZoneController     │
//!    RelayPort ◀── │  Zone 0 · 1 · … N-1   │
//!                  └──────────────────────┘
//! ```
//!
//! Zones never read each other's state, so scan order only affects the
//! order of emitted events.

use log::{debug, info};

use crate::config::ControllerConfig;
use crate::error::{Result, ZoneTableError};
use crate::pins::{MAX_ZONES, ZonePins};
use crate::zone::{Transition, Zone, ZoneStatus};

use super::events::ZoneEvent;
use super::ports::{EventSink, RelayPort, SensorPort};

pub struct ZoneController {
    config: ControllerConfig,
    zones: heapless::Vec<Zone, MAX_ZONES>,
    started: bool,
    tick_count: u64,
}

impl ZoneController {
    /// Validate `config` and build one resting zone per entry of `table`,
    /// in scan order.
    ///
    /// Does **not** touch the relays; call [`start`](Self::start) next.
    pub fn new(config: ControllerConfig, table: &[ZonePins]) -> Result<Self> {
        config.validate()?;

        if table.is_empty() {
            return Err(ZoneTableError::Empty.into());
        }

        let mut zones = heapless::Vec::new();
        for (i, pins) in table.iter().enumerate() {
            if table[..i].iter().any(|p| p.relay_gpio == pins.relay_gpio) {
                return Err(ZoneTableError::DuplicateRelay(pins.relay_gpio).into());
            }
            zones
                .push(Zone::new(*pins, &config, 0))
                .map_err(|_| ZoneTableError::Full {
                    capacity: MAX_ZONES,
                })?;
        }

        Ok(Self {
            config,
            zones,
            started: false,
            tick_count: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Force every relay to rest and reset every zone as of `now_ms`,
    /// whatever the sensors currently read.
    pub fn start(&mut self, now_ms: u32, relays: &mut impl RelayPort, sink: &mut impl EventSink) {
        let rest_level = self.config.relay_active.level_for(false);
        for zone in &mut self.zones {
            *zone = Zone::new(zone.pins(), &self.config, now_ms);
            relays.write_level(zone.pins().relay_gpio, rest_level);
        }
        self.started = true;

        sink.emit(&ZoneEvent::Started {
            zones: self.zones.len(),
            at_ms: now_ms,
        });
        info!(
            "ZoneController started: {} zones, relays at rest ({})",
            self.zones.len(),
            if rest_level { "HIGH" } else { "LOW" }
        );
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one scan cycle over every zone in index order.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`RelayPort`], so one GPIO adapter can own all the lines.
    /// Starts the controller first if [`start`](Self::start) was skipped.
    pub fn tick(
        &mut self,
        now_ms: u32,
        hw: &mut (impl SensorPort + RelayPort),
        sink: &mut impl EventSink,
    ) {
        if !self.started {
            self.start(now_ms, hw, sink);
        }
        self.tick_count += 1;

        let relay_active = self.config.relay_active;
        for (index, zone) in self.zones.iter_mut().enumerate() {
            let pins = zone.pins();
            let raw = hw.read_level(pins.sensor_gpio);

            match zone.update(raw, now_ms) {
                Some(Transition::Engaged { retrigger }) => {
                    // A re-trigger only restarts the timer; the line is
                    // already at its engaged level.
                    if !retrigger {
                        hw.write_level(pins.relay_gpio, relay_active.level_for(true));
                    }
                    sink.emit(&ZoneEvent::Engaged {
                        zone: index,
                        at_ms: now_ms,
                        retrigger,
                    });
                }
                Some(Transition::Rested { held_ms }) => {
                    hw.write_level(pins.relay_gpio, relay_active.level_for(false));
                    sink.emit(&ZoneEvent::Rested {
                        zone: index,
                        at_ms: now_ms,
                        held_ms,
                    });
                }
                None => {}
            }
        }

        if self.tick_count % 10_000 == 0 {
            debug!(
                "scan: {} cycles, {} relays engaged",
                self.tick_count,
                self.engaged_count()
            );
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone(&self, index: usize) -> Option<&Zone> {
        self.zones.get(index)
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Number of relays currently engaged.
    pub fn engaged_count(&self) -> usize {
        self.zones.iter().filter(|z| z.is_engaged()).count()
    }

    /// Serialisable snapshot of every zone, in scan order.
    pub fn status(&self) -> heapless::Vec<ZoneStatus, MAX_ZONES> {
        self.zones
            .iter()
            .enumerate()
            .map(|(i, z)| z.status(i))
            .collect()
    }
}
