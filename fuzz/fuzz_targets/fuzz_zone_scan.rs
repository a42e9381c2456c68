//! Fuzz target: `ZoneController::tick`
//!
//! Each input byte is one scan cycle: the low three bits are the raw
//! sensor levels of zones 1..3, the high five bits the gap in ms to the
//! next cycle. Asserts the relay lines always mirror zone state and that
//! no engagement outlives its duration, whatever the input does.
//!
//! cargo fuzz run fuzz_zone_scan

#![no_main]

use libfuzzer_sys::fuzz_target;
use zoneguard::app::controller::ZoneController;
use zoneguard::app::events::ZoneEvent;
use zoneguard::app::ports::{EventSink, RelayPort, SensorPort};
use zoneguard::config::ControllerConfig;
use zoneguard::pins::ZONE_PINS;

struct Board {
    inputs: u8,
    relays: [Option<bool>; 3],
}

impl SensorPort for Board {
    fn read_level(&mut self, gpio: i32) -> bool {
        match ZONE_PINS.iter().position(|p| p.sensor_gpio == gpio) {
            Some(i) => self.inputs & (1 << i) != 0,
            None => true,
        }
    }
}

impl RelayPort for Board {
    fn write_level(&mut self, gpio: i32, high: bool) {
        if let Some(i) = ZONE_PINS.iter().position(|p| p.relay_gpio == gpio) {
            assert_ne!(self.relays[i], Some(high), "duplicate relay write");
            self.relays[i] = Some(high);
        }
    }
}

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &ZoneEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let config = ControllerConfig::default();
    let Ok(mut controller) = ZoneController::new(config, &ZONE_PINS) else {
        return;
    };
    let mut board = Board {
        inputs: 0b111,
        relays: [None; 3],
    };
    let mut now = u32::MAX - 1_000;
    controller.start(now, &mut board, &mut Discard);

    for &byte in data {
        board.inputs = byte & 0b111;
        controller.tick(now, &mut board, &mut Discard);

        for (i, zone) in controller.zones().iter().enumerate() {
            assert_eq!(
                board.relays[i],
                Some(config.relay_active.level_for(zone.is_engaged()))
            );
            assert!(!zone.trigger_consumed() || zone.detecting());
            if let Some(since) = zone.engaged_since_ms() {
                assert!(now.wrapping_sub(since) < config.engagement_ms);
            }
        }

        now = now.wrapping_add(u32::from(byte >> 3) + 1);
    }
});
