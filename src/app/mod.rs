//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the station's business rules: the gated polling
//! cycle and the per-tick pump actuation.  All interaction with hardware
//! happens through **port traits** defined in [`ports`], keeping this
//! layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
