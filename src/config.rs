//! System configuration parameters
//!
//! Compile-time defaults for the ZoneGuard controller.  Nothing here is
//! changed at runtime; [`ControllerConfig`] only exists so the values
//! travel as one validated bundle and can be logged at boot.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// --- Timing ---
/// Window a raw sample must hold before it becomes the stable level.
pub const DEBOUNCE_MS: u32 = 40;
/// How long a relay stays engaged after a detection.
pub const ENGAGEMENT_MS: u32 = 2000;
/// Minimum delay between scan cycles.
pub const SCAN_CYCLE_MS: u32 = 5;
/// Task watchdog timeout for the scan loop.
pub const WATCHDOG_TIMEOUT_MS: u32 = 1000;

// --- Polarity ---
/// Sensors pull their line LOW when they detect.
pub const SENSOR_ACTIVE: Polarity = Polarity::ActiveLow;
/// Relay coils are held energised (HIGH) at rest and released (LOW) when
/// engaged, so a dead controller leaves the interlock open.
pub const RELAY_ACTIVE: Polarity = Polarity::ActiveLow;

/// Largest duration that still compares correctly under wrapping `u32`
/// millisecond arithmetic.
pub const MAX_DURATION_MS: u32 = u32::MAX / 2;

/// Which electrical level carries the "active" meaning on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    ActiveLow,
    ActiveHigh,
}

impl Polarity {
    /// Electrical level that means "active".
    pub const fn active_level(self) -> bool {
        matches!(self, Self::ActiveHigh)
    }

    /// Electrical level that means "inactive".
    pub const fn idle_level(self) -> bool {
        !self.active_level()
    }

    /// Classify an electrical level.
    pub const fn is_active(self, level: bool) -> bool {
        level == self.active_level()
    }

    /// Electrical level to drive for a logical state.
    pub const fn level_for(self, active: bool) -> bool {
        if active { self.active_level() } else { self.idle_level() }
    }
}

/// Controller timing and polarity configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Level on a sensor line that means "detecting".
    pub sensor_active: Polarity,
    /// Level on a relay line that means "engaged".
    pub relay_active: Polarity,
    /// Debounce window (milliseconds).
    pub debounce_ms: u32,
    /// Engagement duration (milliseconds).
    pub engagement_ms: u32,
    /// Delay between scan cycles (milliseconds).
    pub scan_cycle_ms: u32,
    /// Watchdog timeout for a stalled scan loop (milliseconds).
    pub watchdog_timeout_ms: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            sensor_active: SENSOR_ACTIVE,
            relay_active: RELAY_ACTIVE,
            debounce_ms: DEBOUNCE_MS,
            engagement_ms: ENGAGEMENT_MS,
            scan_cycle_ms: SCAN_CYCLE_MS,
            watchdog_timeout_ms: WATCHDOG_TIMEOUT_MS,
        }
    }
}

impl ControllerConfig {
    /// Reject configurations the state machine cannot honour.
    ///
    /// A zero debounce window is allowed (every sample commits at once).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engagement_ms == 0 {
            return Err(ConfigError::ZeroEngagement);
        }
        if self.scan_cycle_ms == 0 {
            return Err(ConfigError::ZeroScanCycle);
        }
        for (field, value) in [
            ("debounce_ms", self.debounce_ms),
            ("engagement_ms", self.engagement_ms),
            ("scan_cycle_ms", self.scan_cycle_ms),
            ("watchdog_timeout_ms", self.watchdog_timeout_ms),
        ] {
            if value > MAX_DURATION_MS {
                return Err(ConfigError::DurationTooLong(field));
            }
        }
        Ok(())
    }
}
