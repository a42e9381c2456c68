//! Time-window debounce filter.
//!
//! A raw sample only becomes the stable level after it has held, without
//! any further transition, for the whole window.  Each transition restarts
//! the window, so a line that bounces faster than the window never commits
//! and the stable level stays frozen at its last committed value.
//!
//! All elapsed-time arithmetic is wrapping so the filter survives the
//! `u32` millisecond counter rolling over.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    window_ms: u32,
    stable: bool,
    last_raw: bool,
    changed_at_ms: u32,
}

impl Debouncer {
    /// Start settled at `level`, as if it had been held since `now_ms`.
    pub fn new(window_ms: u32, level: bool, now_ms: u32) -> Self {
        Self {
            window_ms,
            stable: level,
            last_raw: level,
            changed_at_ms: now_ms,
        }
    }

    /// Feed one raw sample and return the stable level.
    pub fn sample(&mut self, raw: bool, now_ms: u32) -> bool {
        if raw != self.last_raw {
            self.changed_at_ms = now_ms;
            self.last_raw = raw;
        }
        if now_ms.wrapping_sub(self.changed_at_ms) >= self.window_ms {
            self.stable = self.last_raw;
        }
        self.stable
    }

    pub fn stable(&self) -> bool {
        self.stable
    }

    /// Most recent raw sample.
    pub fn last_raw(&self) -> bool {
        self.last_raw
    }

    /// Timestamp of the last raw transition.
    pub fn changed_at_ms(&self) -> u32 {
        self.changed_at_ms
    }

    /// True while a raw transition is waiting out the window.
    pub fn is_settling(&self) -> bool {
        self.last_raw != self.stable
    }
}
