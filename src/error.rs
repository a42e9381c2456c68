//! Unified error types for the ZoneGuard firmware.
//!
//! The scan loop itself has no failure paths: every input is a boolean
//! level or a monotonic timestamp.  Errors only arise while *building*
//! the controller, from a bad configuration or a malformed zone table.
//! All variants are `Copy` so they can be logged and returned without
//! allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Timing configuration is invalid.
    Config(ConfigError),
    /// The zone table could not be built.
    ZoneTable(ZoneTableError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::ZoneTable(e) => write!(f, "zone table: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Engagement duration of zero would release the relay in the same
    /// cycle that engaged it.
    ZeroEngagement,
    /// Scan delay of zero turns the loop into a busy spin.
    ZeroScanCycle,
    /// A duration does not fit in half the `u32` millisecond range, so
    /// wrapping elapsed-time comparisons would be ambiguous.
    DurationTooLong(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroEngagement => write!(f, "engagement duration must be non-zero"),
            Self::ZeroScanCycle => write!(f, "scan cycle delay must be non-zero"),
            Self::DurationTooLong(field) => write!(f, "{field} exceeds the clock wrap window"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Zone table errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneTableError {
    /// At least one zone is required.
    Empty,
    /// More zones than the fixed table capacity.
    Full { capacity: usize },
    /// Two zones drive the same relay output.
    DuplicateRelay(i32),
}

impl fmt::Display for ZoneTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "no zones configured"),
            Self::Full { capacity } => write!(f, "more than {capacity} zones"),
            Self::DuplicateRelay(gpio) => write!(f, "relay GPIO {gpio} used by two zones"),
        }
    }
}

impl From<ZoneTableError> for Error {
    fn from(e: ZoneTableError) -> Self {
        Self::ZoneTable(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
