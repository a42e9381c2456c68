//! Scan loop driver.
//!
//! Paces [`ZoneController::tick`] at the configured cycle delay.  The
//! delay only bounds CPU load and sampling rate; debounce and engagement
//! timing come from the clock, so a late or early cycle never stretches
//! or shortens either window.
//!
//! Any scheduler that can call [`ScanLoop::step`] works: a bare `loop`,
//! a timer task, or a test harness with a simulated clock.

use embedded_hal::delay::DelayNs;

use super::controller::ZoneController;
use super::ports::{ClockPort, EventSink, RelayPort, SensorPort};

pub struct ScanLoop<C, D> {
    controller: ZoneController,
    clock: C,
    delay: D,
    cycles: u64,
}

impl<C: ClockPort, D: DelayNs> ScanLoop<C, D> {
    pub fn new(controller: ZoneController, clock: C, delay: D) -> Self {
        Self {
            controller,
            clock,
            delay,
            cycles: 0,
        }
    }

    /// Force all relays to rest.  Call once before the first [`step`](Self::step).
    pub fn start(&mut self, relays: &mut impl RelayPort, sink: &mut impl EventSink) {
        let now = self.clock.now_ms();
        self.controller.start(now, relays, sink);
    }

    /// One scan cycle followed by the inter-cycle delay.
    pub fn step(&mut self, hw: &mut (impl SensorPort + RelayPort), sink: &mut impl EventSink) {
        let now = self.clock.now_ms();
        self.controller.tick(now, hw, sink);
        self.cycles += 1;
        self.delay.delay_ms(self.controller.config().scan_cycle_ms);
    }

    pub fn controller(&self) -> &ZoneController {
        &self.controller
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Completed scan cycles.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}
