//! Application core: zone orchestration, zero direct I/O.
//!
//! The [`controller`] advances every zone once per scan cycle and turns
//! zone transitions into relay writes and diagnostic events.  All
//! interaction with hardware happens through the **port traits** in
//! [`ports`]; [`scan`] paces the cycles.

pub mod controller;
pub mod events;
pub mod ports;
pub mod scan;
