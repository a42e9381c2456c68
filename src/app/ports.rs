//! Port traits: the hexagonal boundary between zone logic and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ZoneController (domain)
//! ```
//!
//! Driven adapters (GPIO, clock, log output) implement these traits.  The
//! [`ZoneController`](super::controller::ZoneController) consumes them via
//! generics, so the state machine never touches hardware directly.
//!
//! None of the ports return errors.  A GPIO line on a configured pin either
//! works or the board is broken; adapters log what they can and keep the
//! scan loop running.

use super::events::ZoneEvent;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Raw digital input reader.  Called once per zone per scan cycle.
pub trait SensorPort {
    /// Current electrical level of `gpio` (`true` = HIGH).  No side effects.
    fn read_level(&mut self, gpio: i32) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Relay port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Raw digital output writer.
///
/// Only called at start-up and on relay transitions, never every cycle.
/// Implementations must apply the level immediately and tolerate being
/// asked for the level the line already has.
pub trait RelayPort {
    fn write_level(&mut self, gpio: i32, high: bool);
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock.  Wraps at `u32::MAX`; consumers use
/// wrapping subtraction for elapsed time.
pub trait ClockPort {
    fn now_ms(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The controller emits a [`ZoneEvent`] at every relay transition.
///
/// `emit` cannot fail: whatever happens to the event downstream (a full
/// UART buffer, a missing console) stays on the adapter's side.
pub trait EventSink {
    fn emit(&mut self, event: &ZoneEvent);
}
