//! WateringStation Firmware — Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter          LogEventSink     Esp32TimeAdapter    │
//! │  (Moisture + Pump ports)  (EventSink)      (clock)             │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │          StationController (pure logic)                │    │
//! │  │  sample · classify · OR-of-dry policy · deadlines      │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop never blocks on the pumps: each pass reads the clock, runs one
//! tick, feeds the watchdog and yields for `loop_period_ms`.
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::info;

use wateringstation::adapters::hardware::HardwareAdapter;
use wateringstation::adapters::log_sink::LogEventSink;
use wateringstation::adapters::time::Esp32TimeAdapter;
use wateringstation::app::service::StationController;
use wateringstation::config::StationConfig;
use wateringstation::drivers::hw_init::{self, GpioOutput};
use wateringstation::drivers::pump::{PumpChannel, PumpDriver};
use wateringstation::drivers::watchdog::Watchdog;
use wateringstation::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("WateringStation v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = StationConfig::default();
    config.validate()?;

    // ── 3. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        log::error!("HAL init failed: {}", e);
        return Err(e.into());
    }

    let mut hw = HardwareAdapter::new(
        PumpDriver::new(PumpChannel::P1, GpioOutput::new(pins::PUMP_1_GPIO)),
        PumpDriver::new(PumpChannel::P2, GpioOutput::new(pins::PUMP_2_GPIO)),
    );
    let time = Esp32TimeAdapter::new();
    let mut log_sink = LogEventSink::new();

    // ── 4. Controller ─────────────────────────────────────────
    let mut station = StationController::new(config.clone());
    station.start(&mut log_sink);

    let watchdog = Watchdog::new(&config);
    info!("System ready. Entering control loop.");

    // ── 5. Control loop ───────────────────────────────────────
    loop {
        let now = time.uptime_ms();
        station.tick(now, &mut hw, &mut log_sink);
        watchdog.feed();
        FreeRtos::delay_ms(config.loop_period_ms);
    }
}
