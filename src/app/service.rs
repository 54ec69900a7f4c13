//! Station controller — the domain core.
//!
//! [`StationState`] holds every piece of timing state the station has:
//! when the next poll is allowed and until when each pump may run.  Its
//! methods are pure steps over `(state, now)`.  [`StationController`]
//! owns the state and wraps those steps with port I/O once per tick.
//!
//! ```text
//!  MoisturePort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                   │      StationController       │
//!      PumpPort ◀── │ sample · classify · policy   │
//!                   └──────────────────────────────┘
//! ```
//!
//! ## Tick anatomy
//!
//! 1. **Polling sub-cycle** — only if `now > last_poll_time + poll_interval`.
//!    Samples all four probes, evaluates each zone, arms the pumps of dry
//!    zones for `pump_run_duration`, and moves `last_poll_time` to
//!    `now + poll_interval`.  Rescheduling is forward from *now*, so
//!    consecutive polls are two intervals plus one tick apart.
//! 2. **Actuation sub-cycle** — every tick, each pump output follows its
//!    deadline.
//!
//! Nothing here sleeps.  A tick costs forty ADC conversions when a poll
//! is due and two pin writes otherwise.

use log::info;

use crate::clock::{self, Millis};
use crate::config::StationConfig;
use crate::control::policy::should_water;
use crate::drivers::pump::{PumpChannel, pump_should_run};
use crate::sensors::SensorChannel;
use crate::sensors::moisture::{SensorPanelReading, sample};

use super::events::{PollCycle, StationEvent};
use super::ports::{EventSink, MoisturePort, PumpPort};

// ───────────────────────────────────────────────────────────────
// StationState
// ───────────────────────────────────────────────────────────────

/// Timing state of the watering station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationState {
    last_poll_time: Millis,
    poll_interval: Millis,
    pump_run_duration: Millis,
    /// `None` = never armed, or expired and cleared by a later poll.
    pump_run_until: [Option<Millis>; PumpChannel::COUNT],
}

/// Zone decisions produced by [`StationState::apply_poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOutcome {
    pub triggered: [bool; PumpChannel::COUNT],
    pub next_poll_after: Millis,
}

impl StationState {
    /// Idle state: no poll yet, both pumps unarmed.
    pub fn new(config: &StationConfig) -> Self {
        Self {
            last_poll_time: 0,
            poll_interval: config.poll_interval_ms,
            pump_run_duration: config.pump_run_duration_ms,
            pump_run_until: [None; PumpChannel::COUNT],
        }
    }

    /// Strictly after `last_poll_time + poll_interval`.
    pub fn poll_due(&self, now: Millis) -> bool {
        clock::is_after(now, clock::deadline(self.last_poll_time, self.poll_interval))
    }

    /// Apply one polling cycle's readings taken at `now`.
    ///
    /// Arms the pump of every dry zone until `now + pump_run_duration`.
    /// A zone that is not dry keeps its deadline unless that deadline has
    /// already passed, in which case it is cleared.  Clearing does not
    /// change any output; it keeps a stale deadline from coming back into
    /// range once the millisecond counter wraps.
    pub fn apply_poll(&mut self, now: Millis, panel: &SensorPanelReading) -> PollOutcome {
        let run_until = clock::deadline(now, self.pump_run_duration);
        let mut triggered = [false; PumpChannel::COUNT];

        for pump in PumpChannel::ALL {
            let (a, b) = panel.zone(pump);
            let slot = &mut self.pump_run_until[pump.index()];
            if should_water(a, b) {
                *slot = Some(run_until);
                triggered[pump.index()] = true;
            } else if !pump_should_run(now, *slot) {
                *slot = None;
            }
        }

        self.last_poll_time = clock::deadline(now, self.poll_interval);
        PollOutcome {
            triggered,
            next_poll_after: self.last_poll_time,
        }
    }

    pub fn last_poll_time(&self) -> Millis {
        self.last_poll_time
    }

    pub fn pump_run_duration(&self) -> Millis {
        self.pump_run_duration
    }

    pub fn run_until(&self, pump: PumpChannel) -> Option<Millis> {
        self.pump_run_until[pump.index()]
    }
}

// ───────────────────────────────────────────────────────────────
// StationController
// ───────────────────────────────────────────────────────────────

/// Result of one [`StationController::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Present when the polling sub-cycle ran.
    pub poll: Option<PollCycle>,
    /// Level driven on each pump this tick.
    pub outputs: [bool; PumpChannel::COUNT],
}

/// Runs the sampling → classification → policy pipeline and drives pumps.
pub struct StationController {
    config: StationConfig,
    state: StationState,
    /// Levels driven on the previous tick, for change events only.
    last_outputs: [bool; PumpChannel::COUNT],
}

impl StationController {
    pub fn new(config: StationConfig) -> Self {
        let state = StationState::new(&config);
        Self {
            config,
            state,
            last_outputs: [false; PumpChannel::COUNT],
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&StationEvent::Started(self.config.clone()));
        info!(
            "StationController started (poll every {} ms, run {} ms)",
            self.config.poll_interval_ms, self.config.pump_run_duration_ms
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one control tick at `now`.
    ///
    /// `hw` serves both [`MoisturePort`] and [`PumpPort`]; one `&mut`
    /// borrow covers sampling and actuation.
    pub fn tick(
        &mut self,
        now: Millis,
        hw: &mut (impl MoisturePort + PumpPort),
        sink: &mut impl EventSink,
    ) -> TickReport {
        // 1. Polling sub-cycle (gated)
        let poll = if self.state.poll_due(now) {
            let cycle = self.poll(now, &mut *hw);
            sink.emit(&StationEvent::CycleCompleted(cycle));
            Some(cycle)
        } else {
            None
        };

        // 2. Actuation sub-cycle (every tick)
        let mut outputs = [false; PumpChannel::COUNT];
        for pump in PumpChannel::ALL {
            let on = hw.set_pump(pump, now, self.state.run_until(pump));
            outputs[pump.index()] = on;
            if on != self.last_outputs[pump.index()] {
                sink.emit(&StationEvent::PumpChanged { pump, on });
            }
        }
        self.last_outputs = outputs;

        TickReport { poll, outputs }
    }

    fn poll(&mut self, now: Millis, hw: &mut impl MoisturePort) -> PollCycle {
        let raw = SensorChannel::ALL.map(|channel| sample(&mut *hw, channel));
        let panel = SensorPanelReading::from_raw(raw);
        let outcome = self.state.apply_poll(now, &panel);

        for pump in PumpChannel::ALL {
            if outcome.triggered[pump.index()] {
                let until = clock::deadline(now, self.state.pump_run_duration());
                info!("Running {} until {} ms", pump, until);
            }
        }

        PollCycle {
            at: now,
            raw,
            panel,
            triggered: outcome.triggered,
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> &StationState {
        &self.state
    }

}
