//! Sensor subsystem — soil-moisture probes.
//!
//! [`moisture`] holds the sampler and classifier.  This module names the
//! four probe channels and, on host builds, provides injectable ADC
//! registers so the hardware adapter can run without a converter.

pub mod moisture;

use core::fmt;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

use crate::drivers::pump::PumpChannel;

/// One of the four moisture probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorChannel {
    S1,
    S2,
    S3,
    S4,
}

impl SensorChannel {
    pub const COUNT: usize = 4;
    pub const ALL: [Self; Self::COUNT] = [Self::S1, Self::S2, Self::S3, Self::S4];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Probe pair feeding `pump`.
    pub const fn zone(pump: PumpChannel) -> (Self, Self) {
        match pump {
            PumpChannel::P1 => (Self::S1, Self::S2),
            PumpChannel::P2 => (Self::S3, Self::S4),
        }
    }
}

impl fmt::Display for SensorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sensor {}", self.index() + 1)
    }
}

#[cfg(not(target_os = "espidf"))]
static SIM_MOISTURE_ADC: [AtomicU16; SensorChannel::COUNT] = [
    AtomicU16::new(0),
    AtomicU16::new(0),
    AtomicU16::new(0),
    AtomicU16::new(0),
];

/// Inject a 10-bit reading for `channel` (host simulation only).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_moisture_adc(channel: SensorChannel, raw: u16) {
    SIM_MOISTURE_ADC[channel.index()].store(raw, Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub(crate) fn sim_moisture_adc(channel: SensorChannel) -> u16 {
    SIM_MOISTURE_ADC[channel.index()].load(Ordering::Relaxed)
}
