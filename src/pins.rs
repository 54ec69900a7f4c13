//! GPIO / peripheral pin assignments for the watering station board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Soil-moisture probes — Analog (ADC1)
// ---------------------------------------------------------------------------

/// ADC1 channels for moisture probes 1–4 (GPIO 2–5 on ESP32-S3).
/// Probes 1 and 2 cover zone 1, probes 3 and 4 cover zone 2.
pub const MOISTURE_ADC_CHANNELS: [u32; 4] = [1, 2, 3, 4];

/// ADC1 on the S3 converts at 12 bits; the classifier thresholds are
/// calibrated on a 10-bit scale, so raw conversions are shifted down.
pub const ADC_SCALE_SHIFT: u32 = 2;

// ---------------------------------------------------------------------------
// Pump relays — Digital outputs (active HIGH)
// ---------------------------------------------------------------------------

/// Pump 1 (zone 1) relay driver input.
pub const PUMP_1_GPIO: i32 = 11;
/// Pump 2 (zone 2) relay driver input.
pub const PUMP_2_GPIO: i32 = 12;
