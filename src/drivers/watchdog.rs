//! Task Watchdog Timer (TWDT) guard for the control loop.
//!
//! A stalled loop would leave a pump relay latched past its deadline, so
//! the loop task subscribes to the TWDT and resets the chip if it stops
//! feeding.  The loop calls [`Watchdog::feed`] once per tick.
//!
//! The timeout follows the station timing: long enough for
//! [`STALL_TICKS`] missed loop periods, but never longer than one pump
//! run, so a hung loop can overrun a deadline by at most one run length.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::config::StationConfig;

/// Consecutive loop periods without a feed before the chip resets.
pub const STALL_TICKS: u32 = 100;

/// Lower bound; a poll tick runs forty ADC conversions back to back.
pub const MIN_TIMEOUT_MS: u32 = 1_000;

/// TWDT timeout for `config`.
pub fn timeout_for(config: &StationConfig) -> u32 {
    let ceiling = config.pump_run_duration_ms.max(MIN_TIMEOUT_MS);
    config
        .loop_period_ms
        .saturating_mul(STALL_TICKS)
        .clamp(MIN_TIMEOUT_MS, ceiling)
}

pub struct Watchdog {
    timeout_ms: u32,
    #[cfg(target_os = "espidf")]
    subscribed: bool,
}

impl Watchdog {
    /// Reconfigure the TWDT for `config` and subscribe the calling task.
    pub fn new(config: &StationConfig) -> Self {
        let timeout_ms = timeout_for(config);

        #[cfg(target_os = "espidf")]
        {
            // SAFETY: TWDT API calls from the control-loop task only.
            let subscribed = unsafe {
                let cfg = esp_task_wdt_config_t {
                    timeout_ms,
                    idle_core_mask: 0,
                    trigger_panic: true,
                };
                let ret = esp_task_wdt_reconfigure(&cfg);
                if ret != ESP_OK as i32 {
                    log::warn!("watchdog: reconfigure to {} ms returned {}", timeout_ms, ret);
                }
                esp_task_wdt_add(core::ptr::null_mut()) == ESP_OK as i32
            };
            if subscribed {
                log::info!("watchdog: control loop subscribed ({} ms)", timeout_ms);
            } else {
                log::warn!("watchdog: subscribe failed, loop runs unguarded");
            }
            Self {
                timeout_ms,
                subscribed,
            }
        }

        #[cfg(not(target_os = "espidf"))]
        {
            log::info!("watchdog(sim): {} ms, not armed", timeout_ms);
            Self { timeout_ms }
        }
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// Reset the TWDT countdown.
    pub fn feed(&self) {
        #[cfg(target_os = "espidf")]
        if self.subscribed {
            // SAFETY: the calling task subscribed in `new()`.
            unsafe {
                esp_task_wdt_reset();
            }
        }
    }
}
