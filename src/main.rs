//! ZoneGuard Firmware: Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                    │
//! │                                                            │
//! │  GpioZoneIo            LogEventSink      Esp32TimeAdapter  │
//! │  (Sensor + Relay)      (EventSink)       (ClockPort)       │
//! │                                                            │
//! │  ─────────────── Port Trait Boundary ───────────────       │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │        ZoneController (pure logic)                   │  │
//! │  │  debounce · detect · engage · timeout · re-arm       │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! │                                                            │
//! │  ScanLoop (FreeRTOS delay) · Watchdog                      │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyInputPin, AnyOutputPin, Input, Output, PinDriver, Pull};
use esp_idf_hal::gpio::{InputPin as _, OutputPin as _};
use esp_idf_hal::peripherals::Peripherals;
use log::{info, warn};

use zoneguard::adapters::hardware::GpioZoneIo;
use zoneguard::adapters::log_sink::LogEventSink;
use zoneguard::adapters::time::Esp32TimeAdapter;
use zoneguard::app::controller::ZoneController;
use zoneguard::app::scan::ScanLoop;
use zoneguard::config::{ControllerConfig, Polarity};
use zoneguard::drivers::watchdog::Watchdog;
use zoneguard::error::Error;
use zoneguard::pins::{RELAY_1_GPIO, RELAY_2_GPIO, RELAY_3_GPIO, ZONE_PINS};
use zoneguard::pins::{SENSOR_1_GPIO, SENSOR_2_GPIO, SENSOR_3_GPIO};

type SensorPin = PinDriver<'static, AnyInputPin, Input>;
type RelayPin = PinDriver<'static, AnyOutputPin, Output>;

// The peripherals taken in `main` are named, not looked up: keep them in
// step with the pin map.
const _: () = assert!(
    SENSOR_1_GPIO == 2
        && SENSOR_2_GPIO == 3
        && SENSOR_3_GPIO == 4
        && RELAY_1_GPIO == 8
        && RELAY_2_GPIO == 9
        && RELAY_3_GPIO == 10
        && ZONE_PINS.len() == 3
);

/// Bias an idle sensor line towards its inactive level.
fn sensor_pull(active: Polarity) -> Pull {
    match active {
        Polarity::ActiveLow => Pull::Up,
        Polarity::ActiveHigh => Pull::Down,
    }
}

fn sensor(pin: AnyInputPin, pull: Pull) -> Result<SensorPin> {
    let mut driver = PinDriver::input(pin)?;
    driver.set_pull(pull)?;
    Ok(driver)
}

fn relay(pin: AnyOutputPin) -> Result<RelayPin> {
    Ok(PinDriver::output(pin)?)
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  ZoneGuard v{}                       ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = ControllerConfig::default();
    match serde_json::to_string(&config) {
        Ok(json) => info!("Config: {}", json),
        Err(e) => warn!("Config: could not render ({})", e),
    }
    let controller = ZoneController::new(config, &ZONE_PINS)?;

    // ── 3. GPIO ───────────────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let pins = peripherals.pins;

    let pull = sensor_pull(config.sensor_active);
    let mut io: GpioZoneIo<SensorPin, RelayPin> = GpioZoneIo::new(config.sensor_active);
    io.add_zone(
        ZONE_PINS[0],
        sensor(pins.gpio2.downgrade_input(), pull)?,
        relay(pins.gpio8.downgrade_output())?,
    )
    .map_err(Error::from)?;
    io.add_zone(
        ZONE_PINS[1],
        sensor(pins.gpio3.downgrade_input(), pull)?,
        relay(pins.gpio9.downgrade_output())?,
    )
    .map_err(Error::from)?;
    io.add_zone(
        ZONE_PINS[2],
        sensor(pins.gpio4.downgrade_input(), pull)?,
        relay(pins.gpio10.downgrade_output())?,
    )
    .map_err(Error::from)?;

    // ── 4. Force relays to rest, then scan forever ────────────
    let mut sink = LogEventSink::new();
    let mut watchdog = Watchdog::new(config.watchdog_timeout_ms);
    let mut scan = ScanLoop::new(controller, Esp32TimeAdapter::new(), FreeRtos);
    scan.start(&mut io, &mut sink);

    match serde_json::to_string(&scan.controller().status()) {
        Ok(json) => info!("Zones: {}", json),
        Err(e) => warn!("Zones: could not render ({})", e),
    }
    info!(
        "Scanning {} zones every {}ms (debounce {}ms, engagement {}ms)",
        ZONE_PINS.len(),
        config.scan_cycle_ms,
        config.debounce_ms,
        config.engagement_ms
    );

    loop {
        watchdog.feed();
        scan.step(&mut io, &mut sink);
    }
}
