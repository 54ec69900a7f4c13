//! Outbound diagnostic events.
//!
//! The [`StationController`](super::service::StationController) emits
//! these through the [`EventSink`](super::ports::EventSink) port.  The
//! firmware sink writes them to the serial log.

use crate::clock::Millis;
use crate::config::StationConfig;
use crate::drivers::pump::PumpChannel;
use crate::sensors::SensorChannel;
use crate::sensors::moisture::SensorPanelReading;

/// Structured events emitted by the station core.
#[derive(Debug, Clone, PartialEq)]
pub enum StationEvent {
    /// The controller has started (carries the active configuration).
    Started(StationConfig),

    /// One polling cycle finished.
    CycleCompleted(PollCycle),

    /// A pump output changed level.
    PumpChanged { pump: PumpChannel, on: bool },
}

/// Everything a polling cycle read and decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollCycle {
    /// Tick that triggered the cycle.
    pub at: Millis,
    /// Averaged raw reading per probe.
    pub raw: [u16; SensorChannel::COUNT],
    /// Classification of `raw`.
    pub panel: SensorPanelReading,
    /// Zones whose pump was (re)armed this cycle.
    pub triggered: [bool; PumpChannel::COUNT],
}
