//! ESP32 time adapter.
//!
//! The station's only time reference: a monotonic millisecond counter.
//!
//! - **`target_os = "espidf"`** — wraps `esp_timer_get_time()` (µs since
//!   boot), truncated to a wrapping 32-bit millisecond count.
//! - **`not(target_os = "espidf")`** — uses `std::time::Instant` for
//!   host-side simulation.

use crate::clock::Millis;

/// Time adapter for the ESP32 platform.
pub struct Esp32TimeAdapter {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for Esp32TimeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Esp32TimeAdapter {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Milliseconds since boot, wrapping every ~49.7 days.
    #[cfg(target_os = "espidf")]
    pub fn uptime_ms(&self) -> Millis {
        // SAFETY: esp_timer_get_time is a read of the free-running system timer.
        let us = unsafe { esp_idf_svc::sys::esp_timer_get_time() } as u64;
        (us / 1_000) as Millis
    }

    /// Milliseconds since the adapter was created, wrapping.
    #[cfg(not(target_os = "espidf"))]
    pub fn uptime_ms(&self) -> Millis {
        self.start.elapsed().as_millis() as Millis
    }
}
