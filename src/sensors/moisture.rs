//! Resistive soil-moisture probes: averaging sampler and classifier.
//!
//! The probe output rises as the soil dries.  Calibration readings on
//! the reference hardware (10-bit scale):
//!
//! | medium        | raw       |
//! |---------------|-----------|
//! | water         | 300 – 320 |
//! | wet soil      | 350 – 360 |
//! | dry soil      | 880 – 1013|
//!
//! The bucket edges below were derived from those readings.  Other
//! probes need new constants but must keep the same ascending,
//! right-open, five-bucket-plus-sentinel layout.

use core::fmt;

use super::SensorChannel;
use crate::app::ports::MoisturePort;
use crate::drivers::pump::PumpChannel;

/// Conversions averaged per [`sample`].
pub const SAMPLE_COUNT: u32 = 10;

/// Lower edge of `Humid`.
pub const HUMID_MIN: u16 = 350;
/// Lower edge of `Medium`.
pub const MEDIUM_MIN: u16 = 500;
/// Lower edge of `Dry`.
pub const DRY_MIN: u16 = 700;
/// Lower edge of `Arid`.
pub const ARID_MIN: u16 = 900;
/// First value outside the 10-bit range.
pub const INVALID_MIN: u16 = 1024;

/// Soil-moisture category, ordered wettest to driest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SoilMoistureLevel {
    Wet,
    Humid,
    Medium,
    Dry,
    Arid,
    /// Raw value outside the converter's physical range.
    InvalidReading,
}

impl SoilMoistureLevel {
    /// `Dry` or `Arid`.  `InvalidReading` is never dry.
    pub const fn is_dry_or_worse(self) -> bool {
        matches!(self, Self::Dry | Self::Arid)
    }
}

impl fmt::Display for SoilMoistureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Wet => "wet",
            Self::Humid => "humid",
            Self::Medium => "medium",
            Self::Dry => "dry",
            Self::Arid => "arid",
            Self::InvalidReading => "invalid",
        };
        f.write_str(s)
    }
}

/// Map a 10-bit raw reading to its category.
pub const fn classify(raw: u16) -> SoilMoistureLevel {
    if raw < HUMID_MIN {
        SoilMoistureLevel::Wet
    } else if raw < MEDIUM_MIN {
        SoilMoistureLevel::Humid
    } else if raw < DRY_MIN {
        SoilMoistureLevel::Medium
    } else if raw < ARID_MIN {
        SoilMoistureLevel::Dry
    } else if raw < INVALID_MIN {
        SoilMoistureLevel::Arid
    } else {
        SoilMoistureLevel::InvalidReading
    }
}

/// Average [`SAMPLE_COUNT`] conversions from `channel`.
///
/// Returns the mean rounded to nearest (halves round up).  Averaging only
/// suppresses noise; there is no retry or plausibility check.
pub fn sample(adc: &mut impl MoisturePort, channel: SensorChannel) -> u16 {
    let sum: u32 = (0..SAMPLE_COUNT)
        .map(|_| u32::from(adc.read_raw(channel)))
        .sum();
    ((sum + SAMPLE_COUNT / 2) / SAMPLE_COUNT) as u16
}

/// One polling cycle's classification of all four probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorPanelReading {
    pub levels: [SoilMoistureLevel; SensorChannel::COUNT],
}

impl SensorPanelReading {
    /// Classify four raw readings, probe 1 first.
    pub fn from_raw(raw: [u16; SensorChannel::COUNT]) -> Self {
        Self {
            levels: raw.map(classify),
        }
    }

    pub fn level(&self, channel: SensorChannel) -> SoilMoistureLevel {
        self.levels[channel.index()]
    }

    /// The probe pair feeding `pump`.
    pub fn zone(&self, pump: PumpChannel) -> (SoilMoistureLevel, SoilMoistureLevel) {
        let (a, b) = SensorChannel::zone(pump);
        (self.level(a), self.level(b))
    }
}
