//! GPIO adapter bridging `embedded-hal` pins to the domain port traits.
//!
//! Owns one input and one output pin per zone and exposes them through
//! [`SensorPort`] and [`RelayPort`], keyed by GPIO number.  This is the
//! only module that touches pin drivers.  On target the pins are
//! esp-idf-hal `PinDriver`s; tests plug in any `embedded-hal` 1.0 pin.
//!
//! Pin errors never reach the state machine: a failed read repeats the
//! last good sample (the sensor's idle level until the first good read),
//! a failed write is logged and retried on the next transition.

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use log::{error, warn};

use crate::app::ports::{RelayPort, SensorPort};
use crate::config::Polarity;
use crate::error::ZoneTableError;
use crate::pins::{MAX_ZONES, ZonePins};

struct SensorLine<I> {
    gpio: i32,
    pin: I,
    last: bool,
}

struct RelayLine<O> {
    gpio: i32,
    pin: O,
}

/// Concrete adapter holding every zone's sensor and relay pin.
pub struct GpioZoneIo<I, O> {
    sensor_idle: bool,
    sensors: heapless::Vec<SensorLine<I>, MAX_ZONES>,
    relays: heapless::Vec<RelayLine<O>, MAX_ZONES>,
    read_failures: u32,
    write_failures: u32,
}

impl<I: InputPin, O: OutputPin> GpioZoneIo<I, O> {
    /// `sensor_active` decides the level reported for a sensor that has
    /// never been read successfully.
    pub fn new(sensor_active: Polarity) -> Self {
        Self {
            sensor_idle: sensor_active.idle_level(),
            sensors: heapless::Vec::new(),
            relays: heapless::Vec::new(),
            read_failures: 0,
            write_failures: 0,
        }
    }

    /// Register the pins for one zone.  `sensor` and `relay` must already
    /// be configured as input (biased to its idle level) and output.
    pub fn add_zone(&mut self, pins: ZonePins, sensor: I, relay: O) -> Result<(), ZoneTableError> {
        let full = ZoneTableError::Full {
            capacity: MAX_ZONES,
        };
        self.sensors
            .push(SensorLine {
                gpio: pins.sensor_gpio,
                pin: sensor,
                last: self.sensor_idle,
            })
            .map_err(|_| full)?;
        self.relays
            .push(RelayLine {
                gpio: pins.relay_gpio,
                pin: relay,
            })
            .map_err(|_| full)?;
        Ok(())
    }

    /// Total pin read errors since boot.
    pub fn read_failures(&self) -> u32 {
        self.read_failures
    }

    /// Total pin write errors since boot.
    pub fn write_failures(&self) -> u32 {
        self.write_failures
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<I: InputPin, O> SensorPort for GpioZoneIo<I, O> {
    fn read_level(&mut self, gpio: i32) -> bool {
        let Some(line) = self.sensors.iter_mut().find(|l| l.gpio == gpio) else {
            error!("read from unmapped sensor GPIO {}", gpio);
            return self.sensor_idle;
        };

        match line.pin.is_high() {
            Ok(level) => {
                line.last = level;
                level
            }
            Err(e) => {
                self.read_failures = self.read_failures.saturating_add(1);
                warn!("sensor GPIO {} read failed ({:?}), holding last level", gpio, e);
                line.last
            }
        }
    }
}

// ── RelayPort implementation ──────────────────────────────────

impl<I, O: OutputPin> RelayPort for GpioZoneIo<I, O> {
    fn write_level(&mut self, gpio: i32, high: bool) {
        let Some(line) = self.relays.iter_mut().find(|l| l.gpio == gpio) else {
            error!("write to unmapped relay GPIO {}", gpio);
            return;
        };

        if let Err(e) = line.pin.set_state(PinState::from(high)) {
            self.write_failures = self.write_failures.saturating_add(1);
            error!("relay GPIO {} write failed: {:?}", gpio, e);
        }
    }
}
