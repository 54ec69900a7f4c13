//! Station configuration parameters
//!
//! The watering station has no persistent storage: these values are
//! compiled in and validated once at boot.  Thresholds for the moisture
//! classifier are deliberately not here; they live next to the
//! classifier as constants (see [`crate::sensors::moisture`]).

use serde::{Deserialize, Serialize};

use crate::clock::{MAX_COMPARABLE_SPAN_MS, Millis};
use crate::error::{Error, Result};

/// Core station configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationConfig {
    // --- Timing ---
    /// Spacing between polling cycles (milliseconds)
    pub poll_interval_ms: Millis,
    /// How long a triggered pump keeps running (milliseconds)
    pub pump_run_duration_ms: Millis,
    /// Main loop yield between control ticks (milliseconds)
    pub loop_period_ms: u32,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 5_000,     // 5 s
            pump_run_duration_ms: 3_000, // 3 s
            loop_period_ms: 10,          // 100 Hz
        }
    }
}

impl StationConfig {
    /// Reject values that would stall the loop or break wrap-tolerant
    /// timestamp comparisons.
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(Error::Config("poll_interval_ms must be non-zero"));
        }
        if self.pump_run_duration_ms == 0 {
            return Err(Error::Config("pump_run_duration_ms must be non-zero"));
        }
        if self.loop_period_ms == 0 || self.loop_period_ms > self.poll_interval_ms {
            return Err(Error::Config(
                "loop_period_ms must be non-zero and not exceed poll_interval_ms",
            ));
        }
        // The next poll is scheduled two intervals out; both that and a pump
        // deadline must stay inside the comparable window.
        let poll_span = u64::from(self.poll_interval_ms) * 2;
        let run_span = u64::from(self.pump_run_duration_ms);
        if poll_span.max(run_span) >= u64::from(MAX_COMPARABLE_SPAN_MS) {
            return Err(Error::Config("timing spans exceed the wrap-safe window"));
        }
        Ok(())
    }
}
