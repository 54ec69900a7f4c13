//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns both pump drivers and reads the moisture probes through ADC1,
//! exposing them through [`MoisturePort`] and [`PumpPort`].  On
//! non-espidf targets the ADC side reads the simulation registers in
//! [`crate::sensors`], so the adapter runs unchanged on the host.

use embedded_hal::digital::OutputPin;

use crate::app::ports::{MoisturePort, PumpPort};
use crate::clock::Millis;
use crate::drivers::pump::{PumpChannel, PumpDriver};
use crate::sensors::SensorChannel;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
#[cfg(target_os = "espidf")]
use crate::pins;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<P> {
    pumps: [PumpDriver<P>; PumpChannel::COUNT],
}

impl<P: OutputPin> HardwareAdapter<P> {
    pub fn new(pump_1: PumpDriver<P>, pump_2: PumpDriver<P>) -> Self {
        debug_assert_eq!(pump_1.channel(), PumpChannel::P1);
        debug_assert_eq!(pump_2.channel(), PumpChannel::P2);
        Self {
            pumps: [pump_1, pump_2],
        }
    }

    pub fn pump(&self, pump: PumpChannel) -> &PumpDriver<P> {
        &self.pumps[pump.index()]
    }
}

// ── MoisturePort implementation ───────────────────────────────

impl<P> MoisturePort for HardwareAdapter<P> {
    #[cfg(target_os = "espidf")]
    fn read_raw(&mut self, channel: SensorChannel) -> u16 {
        let adc_channel = pins::MOISTURE_ADC_CHANNELS[channel.index()];
        hw_init::adc1_read(adc_channel) >> pins::ADC_SCALE_SHIFT
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_raw(&mut self, channel: SensorChannel) -> u16 {
        crate::sensors::sim_moisture_adc(channel)
    }
}

// ── PumpPort implementation ───────────────────────────────────

impl<P: OutputPin> PumpPort for HardwareAdapter<P> {
    fn set_pump(&mut self, pump: PumpChannel, now: Millis, run_until: Option<Millis>) -> bool {
        self.pumps[pump.index()].drive(now, run_until)
    }
}
