//! Pump relay driver.
//!
//! Each pump is a single active-HIGH digital output.  The driver holds no
//! timing state of its own: every tick the controller hands it the pump's
//! run-until deadline and the current time, and [`PumpDriver::drive`]
//! projects that pair onto the pin.  Repeating a call with the same
//! inputs leaves the pin where it is.
//!
//! ## Dual-target design
//!
//! Generic over [`OutputPin`]: on ESP-IDF the pin is a
//! [`GpioOutput`](super::hw_init::GpioOutput); tests pass a mock pin.

use core::fmt;

use embedded_hal::digital::{Error as _, OutputPin};
use log::{debug, warn};

use crate::clock::{self, Millis};
use crate::error::{ActuatorError, Result};

/// One of the two pump outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PumpChannel {
    P1,
    P2,
}

impl PumpChannel {
    pub const COUNT: usize = 2;
    pub const ALL: [Self; Self::COUNT] = [Self::P1, Self::P2];

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PumpChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pump {}", self.index() + 1)
    }
}

/// `true` while `now` has not passed an armed deadline.
///
/// The deadline itself is still "on": a pump armed until 8000 runs at
/// `now == 8000` and stops at 8001.
#[inline]
pub const fn pump_should_run(now: Millis, run_until: Option<Millis>) -> bool {
    match run_until {
        Some(deadline) => clock::is_at_or_before(now, deadline),
        None => false,
    }
}

pub struct PumpDriver<P> {
    channel: PumpChannel,
    pin: P,
    on: bool,
}

impl<P: OutputPin> PumpDriver<P> {
    /// Wrap `pin`.  The pin is not written until the first [`drive`](Self::drive).
    pub fn new(channel: PumpChannel, pin: P) -> Self {
        Self {
            channel,
            pin,
            on: false,
        }
    }

    /// Set the output for `now` against `run_until`; returns the level driven.
    ///
    /// A failed GPIO write is logged and the tick carries on: the next
    /// tick retries with the same inputs.
    pub fn drive(&mut self, now: Millis, run_until: Option<Millis>) -> bool {
        let on = pump_should_run(now, run_until);
        if let Err(e) = self.write(on) {
            warn!("{}: {}", self.channel, e);
        }
        on
    }

    fn write(&mut self, on: bool) -> Result<()> {
        let res = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        res.map_err(|e| {
            debug!("{}: pin error {:?}", self.channel, e.kind());
            ActuatorError::GpioWriteFailed
        })?;
        self.on = on;
        Ok(())
    }

    pub fn channel(&self) -> PumpChannel {
        self.channel
    }

    /// Level last written successfully.
    pub fn is_running(&self) -> bool {
        self.on
    }
}
