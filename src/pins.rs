//! GPIO assignments for the ZoneGuard interlock board.
//!
//! Single source of truth for the zone table and the GPIO adapter.
//! `main` takes the matching peripherals by name (`pins.gpio2`, ...), so
//! moving a pin here also means updating `main`; a const assertion there
//! fails the build until both agree.

// ---------------------------------------------------------------------------
// Zone sensors (digital inputs biased to idle, see `config::SENSOR_ACTIVE`)
// ---------------------------------------------------------------------------

pub const SENSOR_1_GPIO: i32 = 2;
pub const SENSOR_2_GPIO: i32 = 3;
pub const SENSOR_3_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Zone relays (digital outputs, see `config::RELAY_ACTIVE`)
// ---------------------------------------------------------------------------

pub const RELAY_1_GPIO: i32 = 8;
pub const RELAY_2_GPIO: i32 = 9;
pub const RELAY_3_GPIO: i32 = 10;

// ---------------------------------------------------------------------------
// Zone table
// ---------------------------------------------------------------------------

/// Upper bound on zones a controller can hold.
pub const MAX_ZONES: usize = 8;

/// One sensor input paired with the relay it drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ZonePins {
    pub sensor_gpio: i32,
    pub relay_gpio: i32,
}

impl ZonePins {
    pub const fn new(sensor_gpio: i32, relay_gpio: i32) -> Self {
        Self {
            sensor_gpio,
            relay_gpio,
        }
    }
}

/// Zones in scan order.  Zone numbers in logs are the index plus one.
pub const ZONE_PINS: [ZonePins; 3] = [
    ZonePins::new(SENSOR_1_GPIO, RELAY_1_GPIO),
    ZonePins::new(SENSOR_2_GPIO, RELAY_2_GPIO),
    ZonePins::new(SENSOR_3_GPIO, RELAY_3_GPIO),
];
