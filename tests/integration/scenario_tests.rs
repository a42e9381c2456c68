//! End-to-end zone scenarios: ZoneController → relays + events.
//!
//! All scenarios use the board defaults (debounce 40ms, engagement 2000ms,
//! 5ms scan cycle, active-low sensors, active-low relays).

use zoneguard::app::controller::ZoneController;
use zoneguard::app::events::ZoneEvent;
use zoneguard::config::{ControllerConfig, Polarity};
use zoneguard::pins::{ZONE_PINS, ZonePins};

use crate::mock_hw::{HIGH, Harness, LOW};

const SENSOR: i32 = 2;
const RELAY: i32 = 8;

fn single_zone() -> ZoneController {
    ZoneController::new(ControllerConfig::default(), &[ZonePins::new(SENSOR, RELAY)]).unwrap()
}

fn engaged(at_ms: u32, retrigger: bool) -> ZoneEvent {
    ZoneEvent::Engaged {
        zone: 0,
        at_ms,
        retrigger,
    }
}

fn rested(at_ms: u32) -> ZoneEvent {
    ZoneEvent::Rested {
        zone: 0,
        at_ms,
        held_ms: 2000,
    }
}

#[test]
fn short_detection_engages_after_debounce_and_rests_after_engagement() {
    let mut h = Harness::start(single_zone(), 0);
    assert_eq!(h.sink.events, vec![ZoneEvent::Started { zones: 1, at_ms: 0 }]);

    h.hold(SENSOR, LOW, 100, 5);
    h.hold(SENSOR, HIGH, 1000, 5);

    // Sensor released at t=100, relay still engaged.
    assert!(h.controller.zone(0).unwrap().is_engaged());
    assert_eq!(h.board.output(RELAY), Some(LOW));

    h.hold(SENSOR, HIGH, 1100, 5);

    assert_eq!(h.sink.for_zone(0), vec![engaged(40, false), rested(2040)]);
    assert_eq!(
        h.board.writes_to(RELAY),
        vec![(0, HIGH), (40, LOW), (2040, HIGH)]
    );
}

#[test]
fn bouncing_input_never_triggers() {
    let mut h = Harness::start(single_zone(), 0);

    for i in 0..20 {
        let level = if i % 2 == 0 { LOW } else { HIGH };
        h.hold(SENSOR, level, 10, 5);
    }
    h.hold(SENSOR, HIGH, 500, 5);

    assert_eq!(h.sink.events.len(), 1, "only the start-up event");
    assert_eq!(h.board.writes_to(RELAY), vec![(0, HIGH)]);
    let zone = h.controller.zone(0).unwrap();
    assert_eq!(zone.stable_level(), HIGH);
    assert!(!zone.detecting());
}

#[test]
fn new_episode_during_engagement_restarts_the_timer() {
    let mut h = Harness::start(single_zone(), 0);

    h.hold(SENSOR, LOW, 500, 5);
    h.hold(SENSOR, HIGH, 100, 5);
    h.hold(SENSOR, LOW, 2400, 5);
    h.hold(SENSOR, HIGH, 200, 5);

    assert_eq!(
        h.sink.for_zone(0),
        vec![engaged(40, false), engaged(640, true), rested(2640)]
    );
    // The re-trigger finds the line already engaged: no extra write.
    assert_eq!(
        h.board.writes_to(RELAY),
        vec![(0, HIGH), (40, LOW), (2640, HIGH)]
    );
}

#[test]
fn long_episode_triggers_exactly_once() {
    let mut h = Harness::start(single_zone(), 0);

    h.hold(SENSOR, LOW, 10_000, 5);

    assert_eq!(h.sink.for_zone(0), vec![engaged(40, false), rested(2040)]);
    let zone = h.controller.zone(0).unwrap();
    assert!(zone.detecting());
    assert!(zone.trigger_consumed());
    assert!(!zone.is_engaged());
    assert_eq!(h.board.output(RELAY), Some(HIGH));
}

#[test]
fn sensor_already_detecting_at_boot_still_starts_at_rest() {
    let mut h = Harness::start(single_zone(), 0);
    assert_eq!(h.board.output(RELAY), Some(HIGH));

    h.hold(SENSOR, LOW, 50, 5);

    assert_eq!(h.sink.for_zone(0), vec![engaged(40, false)]);
}

#[test]
fn zones_are_independent() {
    let controller = ZoneController::new(ControllerConfig::default(), &ZONE_PINS).unwrap();
    let mut h = Harness::start(controller, 0);

    // Zone 3 detects from t=0, zone 2 from t=100.
    h.hold(ZONE_PINS[2].sensor_gpio, LOW, 100, 5);
    h.hold(ZONE_PINS[1].sensor_gpio, LOW, 100, 5);

    assert!(h.sink.for_zone(0).is_empty());
    assert_eq!(
        h.sink.for_zone(2),
        vec![ZoneEvent::Engaged {
            zone: 2,
            at_ms: 40,
            retrigger: false
        }]
    );
    assert_eq!(
        h.sink.for_zone(1),
        vec![ZoneEvent::Engaged {
            zone: 1,
            at_ms: 140,
            retrigger: false
        }]
    );
    assert_eq!(h.controller.engaged_count(), 2);
    assert_eq!(h.board.output(ZONE_PINS[0].relay_gpio), Some(HIGH));
}

#[test]
fn simultaneous_detections_are_reported_in_zone_order() {
    let controller = ZoneController::new(ControllerConfig::default(), &ZONE_PINS).unwrap();
    let mut h = Harness::start(controller, 0);

    for pins in ZONE_PINS.iter().rev() {
        h.board.set_input(pins.sensor_gpio, LOW);
    }
    h.hold(ZONE_PINS[0].sensor_gpio, LOW, 50, 5);

    let zones: Vec<_> = h.sink.events.iter().filter_map(ZoneEvent::zone).collect();
    assert_eq!(zones, vec![0, 1, 2]);
}

#[test]
fn active_high_polarities() {
    let config = ControllerConfig {
        sensor_active: Polarity::ActiveHigh,
        relay_active: Polarity::ActiveHigh,
        ..ControllerConfig::default()
    };
    let controller = ZoneController::new(config, &[ZonePins::new(SENSOR, RELAY)]).unwrap();
    let mut h = Harness::start(controller, 0);
    h.board.set_input(SENSOR, LOW);

    h.hold(SENSOR, LOW, 100, 5);
    assert!(h.sink.for_zone(0).is_empty());

    h.hold(SENSOR, HIGH, 2100, 5);
    assert_eq!(h.sink.for_zone(0), vec![engaged(140, false), rested(2140)]);
    assert_eq!(
        h.board.writes_to(RELAY),
        vec![(0, LOW), (140, HIGH), (2140, LOW)]
    );
}

#[test]
fn engagement_survives_clock_wrap() {
    let start = u32::MAX - 999;
    let mut h = Harness::start(single_zone(), start);

    h.hold(SENSOR, LOW, 100, 5);
    h.hold(SENSOR, HIGH, 2100, 5);

    assert_eq!(
        h.sink.for_zone(0),
        vec![engaged(start.wrapping_add(40), false), rested(1040)]
    );
}

#[test]
fn status_reports_every_zone() {
    let controller = ZoneController::new(ControllerConfig::default(), &ZONE_PINS).unwrap();
    let mut h = Harness::start(controller, 0);
    h.hold(ZONE_PINS[0].sensor_gpio, LOW, 50, 5);

    let status = h.controller.status();
    assert_eq!(status.len(), 3);
    assert!(status[0].detecting);
    assert!(status[0].trigger_consumed);

    let json = serde_json::to_string(&status).unwrap();
    assert!(json.contains("\"state\":\"engaged\""));
    assert!(json.contains("\"since_ms\":40"));
}
