//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter     | Implements    | Connects to              |
//! |-------------|---------------|--------------------------|
//! | `hardware`  | MoisturePort  | ESP32 ADC1 oneshot       |
//! |             | PumpPort      | Pump relay GPIOs         |
//! | `log_sink`  | EventSink     | Serial log output        |
//! | `time`      | —             | ESP32 system timer       |

pub mod hardware;
pub mod log_sink;
pub mod time;
