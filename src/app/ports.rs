//! Port traits — the boundary between the station controller and hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ StationController (domain)
//! ```
//!
//! Driven adapters (ADC, pump outputs, diagnostics) implement these
//! traits.  The [`StationController`](super::service::StationController)
//! consumes them via generics, so the domain core never touches hardware
//! directly and runs unchanged against the mocks in `tests/`.

use crate::clock::Millis;
use crate::drivers::pump::PumpChannel;
use crate::sensors::SensorChannel;

// ───────────────────────────────────────────────────────────────
// Moisture port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one analog conversion on one probe channel.
pub trait MoisturePort {
    /// Single conversion, 10-bit scale (0–1023 for a healthy channel).
    ///
    /// Must not block beyond the conversion itself.  Averaging happens in
    /// [`sample`](crate::sensors::moisture::sample), not here.
    fn read_raw(&mut self, channel: SensorChannel) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Pump port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: project a pump deadline onto its output.
pub trait PumpPort {
    /// Drive `pump` high while `now` has not passed `run_until`, low
    /// otherwise.  Returns the level driven.  Called every tick.
    fn set_pump(&mut self, pump: PumpChannel, now: Millis, run_until: Option<Millis>) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits [`StationEvent`](super::events::StationEvent)s
/// through this port.  Sinks are observational: nothing they do can
/// feed back into control decisions.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::StationEvent);
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &super::events::StationEvent) {}
}
