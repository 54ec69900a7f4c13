//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing station events to the `log`
//! facade (UART / USB-CDC through the ESP-IDF logger in production).

use log::{Level, log};

use crate::app::events::StationEvent;
use crate::app::ports::EventSink;
use crate::drivers::pump::PumpChannel;
use crate::sensors::SensorChannel;

/// Adapter that logs every [`StationEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }

    /// Console lines for one event, in emission order.
    fn render(event: &StationEvent) -> Vec<(Level, String)> {
        match event {
            StationEvent::Started(config) => match serde_json::to_string(config) {
                Ok(json) => vec![(Level::Info, format!("START | config={json}"))],
                Err(e) => vec![(Level::Warn, format!("START | config not serialisable: {e}"))],
            },
            StationEvent::CycleCompleted(cycle) => {
                let readings = SensorChannel::ALL.into_iter().map(|channel| {
                    format!(
                        "POLL  | t={} | {}: raw={} level={}",
                        cycle.at,
                        channel,
                        cycle.raw[channel.index()],
                        cycle.panel.level(channel),
                    )
                });
                let running = PumpChannel::ALL
                    .into_iter()
                    .filter(|pump| cycle.triggered[pump.index()])
                    .map(|pump| format!("POLL  | t={} | running {}", cycle.at, pump));
                readings.chain(running).map(|line| (Level::Info, line)).collect()
            }
            StationEvent::PumpChanged { pump, on } => {
                vec![(Level::Info, format!("PUMP  | {} {}", pump, if *on { "ON" } else { "OFF" }))]
            }
        }
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &StationEvent) {
        for (level, line) in Self::render(event) {
            log!(level, "{}", line);
        }
    }
}
