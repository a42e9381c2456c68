//! ScanLoop pacing: clock-driven timing, delay as a scheduling concern.

use zoneguard::app::controller::ZoneController;
use zoneguard::app::events::ZoneEvent;
use zoneguard::app::ports::ClockPort;
use zoneguard::app::scan::ScanLoop;
use zoneguard::config::ControllerConfig;
use zoneguard::pins::ZonePins;

use crate::mock_hw::{HIGH, LOW, MockBoard, RecordingSink, SimTime};

fn scan_loop(time: &SimTime) -> ScanLoop<SimTime, SimTime> {
    let controller =
        ZoneController::new(ControllerConfig::default(), &[ZonePins::new(2, 8)]).unwrap();
    ScanLoop::new(controller, time.clone(), time.clone())
}

#[test]
fn each_step_waits_one_scan_cycle() {
    let time = SimTime::starting_at(0);
    let mut scan = scan_loop(&time);
    let mut board = MockBoard::new();
    let mut sink = RecordingSink::new();

    scan.start(&mut board, &mut sink);
    for _ in 0..20 {
        scan.step(&mut board, &mut sink);
    }

    assert_eq!(scan.cycles(), 20);
    assert_eq!(scan.controller().tick_count(), 20);
    assert_eq!(time.now_ms(), 100);
    assert_eq!(scan.clock().now_ms(), 100);
}

#[test]
fn detection_is_timed_by_the_clock() {
    let time = SimTime::starting_at(0);
    let mut scan = scan_loop(&time);
    let mut board = MockBoard::new();
    let mut sink = RecordingSink::new();

    scan.start(&mut board, &mut sink);
    board.set_input(2, LOW);
    for _ in 0..20 {
        scan.step(&mut board, &mut sink);
    }

    assert_eq!(
        sink.for_zone(0),
        vec![ZoneEvent::Engaged {
            zone: 0,
            at_ms: 40,
            retrigger: false
        }]
    );
    assert_eq!(board.output(8), Some(LOW));
}

#[test]
fn slow_scheduler_does_not_stretch_the_debounce() {
    let time = SimTime::starting_at(1_000);
    let mut scan = scan_loop(&time);
    let mut board = MockBoard::new();
    let mut sink = RecordingSink::new();

    scan.start(&mut board, &mut sink);
    board.set_input(2, LOW);

    // First sample at t=1000, then the scheduler stalls for 50ms.
    scan.step(&mut board, &mut sink);
    time.advance_ms(50);
    scan.step(&mut board, &mut sink);

    assert_eq!(scan.cycles(), 2);
    assert_eq!(
        sink.for_zone(0),
        vec![ZoneEvent::Engaged {
            zone: 0,
            at_ms: 1_055,
            retrigger: false
        }]
    );
}

#[test]
fn engagement_lasts_its_duration_in_scan_steps() {
    let time = SimTime::starting_at(0);
    let mut scan = scan_loop(&time);
    let mut board = MockBoard::new();
    let mut sink = RecordingSink::new();

    scan.start(&mut board, &mut sink);
    board.set_input(2, LOW);
    for _ in 0..20 {
        scan.step(&mut board, &mut sink);
    }
    board.set_input(2, HIGH);
    // Step n samples t = 5(n-1); the 409th lands on t = 40 + 2000.
    while scan.cycles() < 409 {
        scan.step(&mut board, &mut sink);
    }

    assert_eq!(
        sink.for_zone(0).last(),
        Some(&ZoneEvent::Rested {
            zone: 0,
            at_ms: 2_040,
            held_ms: 2_000
        })
    );
    assert_eq!(board.output(8), Some(HIGH));
}
